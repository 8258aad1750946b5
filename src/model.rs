//! Match state for a single innings.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::ScoringError;

/// Wickets that end the innings.
pub const MAX_WICKETS: u8 = 10;

/// Legal deliveries per over.
pub const BALLS_PER_OVER: u32 = 6;

/// One of the two batting positions tracked by the scoreboard.
///
/// A slot is a label, not a player identity: when the batter in a slot is
/// dismissed the incoming replacement takes over the same slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    #[default]
    A,
    B,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::A, Slot::B];

    /// The partner at the non-striker's end.
    pub fn other(self) -> Slot {
        match self {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Slot::A => 0,
            Slot::B => 1,
        }
    }
}

/// Individual batting record for one slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batter {
    pub runs_scored: u32,
    pub is_out: bool,
}

impl Batter {
    /// Status label shown next to the batter.
    pub fn status(&self) -> &'static str {
        if self.is_out {
            "Out"
        } else {
            "On field"
        }
    }
}

/// Completed overs plus balls into the current over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overs {
    pub completed: u32,
    pub balls: u32,
}

impl Overs {
    pub fn from_legal_balls(legal_balls: u32) -> Self {
        Self {
            completed: legal_balls / BALLS_PER_OVER,
            balls: legal_balls % BALLS_PER_OVER,
        }
    }
}

impl fmt::Display for Overs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.completed, self.balls)
    }
}

/// The whole innings as seen by the scoreboard.
///
/// `MatchState` is `Copy`, so every value handed out by the engine is an
/// immutable snapshot. Snapshots read back through serde are checked with
/// [`MatchState::validate`], so a deserialized state never has more than
/// [`MAX_WICKETS`] wickets.
///
/// # Example
///
/// ```rust
/// use cricket_scoreboard::{MatchState, ScoringError};
///
/// let state: MatchState = serde_json::from_str(
///     r#"{"team_runs":17,"wickets":2,"legal_balls":9,"free_hit_pending":false,
///        "striker":"B","batters":[{"runs_scored":5,"is_out":false},
///                                 {"runs_scored":11,"is_out":false}]}"#,
/// )
/// .unwrap();
/// assert_eq!(state.to_string(), "17/2 (1.3 Overs)");
///
/// let too_many = MatchState { wickets: 11, ..state };
/// assert_eq!(too_many.validate(), Err(ScoringError::TooManyWickets(11)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MatchStateFields")]
pub struct MatchState {
    /// Everything the batting side has scored, extras included.
    pub team_runs: u32,
    /// Dismissals so far, never more than [`MAX_WICKETS`].
    pub wickets: u8,
    /// Deliveries that counted toward the over.
    pub legal_balls: u32,
    /// The next ball-consuming delivery is a free hit.
    pub free_hit_pending: bool,
    pub striker: Slot,
    /// Batting records indexed by [`Slot`].
    pub batters: [Batter; 2],
}

/// Unchecked wire form of [`MatchState`].
#[derive(Deserialize)]
struct MatchStateFields {
    team_runs: u32,
    wickets: u8,
    legal_balls: u32,
    free_hit_pending: bool,
    striker: Slot,
    batters: [Batter; 2],
}

impl TryFrom<MatchStateFields> for MatchState {
    type Error = ScoringError;

    fn try_from(fields: MatchStateFields) -> Result<Self, Self::Error> {
        let state = MatchState {
            team_runs: fields.team_runs,
            wickets: fields.wickets,
            legal_balls: fields.legal_balls,
            free_hit_pending: fields.free_hit_pending,
            striker: fields.striker,
            batters: fields.batters,
        };
        state.validate()?;
        Ok(state)
    }
}

impl MatchState {
    /// A fresh innings: no runs, no wickets, slot A on strike.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the invariants the engine relies on.
    ///
    /// # Errors
    ///
    /// [`ScoringError::TooManyWickets`] when `wickets` exceeds [`MAX_WICKETS`].
    pub fn validate(&self) -> Result<(), ScoringError> {
        if self.wickets > MAX_WICKETS {
            return Err(ScoringError::TooManyWickets(self.wickets));
        }
        Ok(())
    }

    /// Legal balls split into completed overs and balls of the current one.
    pub fn overs(&self) -> Overs {
        Overs::from_legal_balls(self.legal_balls)
    }

    /// True once ten wickets have fallen.
    pub fn is_innings_closed(&self) -> bool {
        self.wickets >= MAX_WICKETS
    }

    pub fn batter(&self, slot: Slot) -> &Batter {
        &self.batters[slot.index()]
    }

    pub(crate) fn batter_mut(&mut self, slot: Slot) -> &mut Batter {
        &mut self.batters[slot.index()]
    }

    /// The record of whoever is facing.
    pub fn striker_batter(&self) -> &Batter {
        self.batter(self.striker)
    }

    /// The slot at the non-striker's end.
    pub fn non_striker(&self) -> Slot {
        self.striker.other()
    }
}

impl fmt::Display for MatchState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} ({} Overs)",
            self.team_runs,
            self.wickets,
            self.overs()
        )
    }
}
