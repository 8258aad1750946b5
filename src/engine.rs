//! The scoring state machine.
//!
//! [`ScoringEngine`] owns one [`MatchState`] and applies one rule per delivery
//! outcome. It never sleeps, blocks or talks to a renderer: every operation
//! runs to completion and hands back an [`Outcome`] holding a snapshot of the
//! new state and, sometimes, an [`Advisory`] for the presentation layer.
//!
//! Once ten wickets have fallen the innings is closed. Scoring commands are
//! then rejected without touching the state, while [`ScoringEngine::switch_strike`]
//! and [`ScoringEngine::reset`] keep working.

use crate::model::MAX_WICKETS;
use crate::{Advisory, Delivery, DismissalKind, MatchState, RunValue, ScoringError, Slot};

const RESET_MESSAGE: &str = "Reset complete.";
const ALL_OUT_MESSAGE: &str = "All out — innings closed.";

/// Result of a single command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Snapshot taken after the command, unchanged if it was rejected.
    pub state: MatchState,
    /// Message for the presentation layer, if the command produced one.
    pub advisory: Option<Advisory>,
}

/// Owner of one innings' [`MatchState`].
///
/// Each delivery outcome has its own method; [`apply`](Self::apply) accepts
/// the same commands as [`Delivery`] values. Separate engines never share
/// state, so independent matches can be scored side by side.
///
/// # Example
///
/// ```rust
/// use cricket_scoreboard::{DismissalKind, RunValue, ScoringEngine, Severity};
///
/// let mut engine = ScoringEngine::new();
/// engine.wide();
/// engine.score_run(RunValue::SIX);
/// let outcome = engine.wicket(DismissalKind::Lbw);
///
/// assert_eq!(outcome.state.to_string(), "7/1 (0.2 Overs)");
/// assert_eq!(outcome.advisory, None);
///
/// for _ in 1..10 {
///     engine.wicket(DismissalKind::Standard);
/// }
/// let rejected = engine.bye();
/// assert_eq!(rejected.state.wickets, 10);
/// assert_eq!(rejected.advisory.map(|a| a.severity), Some(Severity::Error));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoringEngine {
    state: MatchState,
}

impl ScoringEngine {
    /// Start a fresh innings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume scoring from a previously taken snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::TooManyWickets`] if the snapshot records more
    /// than [`MAX_WICKETS`] wickets.
    pub fn from_state(state: MatchState) -> Result<Self, ScoringError> {
        state.validate()?;
        Ok(Self { state })
    }

    /// The current state. Copy it to keep a snapshot.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Apply a command, turning rejections into error advisories.
    pub fn apply(&mut self, delivery: Delivery) -> Outcome {
        let advisory = match self.try_apply(delivery) {
            Ok(advisory) => advisory,
            Err(err) => {
                log::warn!("{delivery:?} rejected at {}: {err}", self.state);
                Some(Advisory::error(err.to_string()))
            }
        };
        self.outcome(advisory)
    }

    /// Apply a command, reporting a closed innings as an error.
    ///
    /// On `Err` the state is guaranteed to be unchanged.
    pub fn try_apply(&mut self, delivery: Delivery) -> Result<Option<Advisory>, ScoringError> {
        if self.state.is_innings_closed() && !delivery.is_allowed_after_close() {
            return Err(ScoringError::InningsClosed);
        }

        let advisory = match delivery {
            Delivery::Run(runs) => {
                self.add_runs(runs);
                None
            }
            Delivery::Wicket(kind) => self.dismiss(kind),
            Delivery::Wide => {
                self.state.team_runs = self.state.team_runs.saturating_add(1);
                None
            }
            Delivery::NoBall => {
                self.state.team_runs = self.state.team_runs.saturating_add(1);
                self.credit_striker(1);
                None
            }
            Delivery::FreeHit => {
                self.state.team_runs = self.state.team_runs.saturating_add(1);
                self.state.free_hit_pending = true;
                None
            }
            Delivery::Bye | Delivery::LegBye => {
                self.state.team_runs = self.state.team_runs.saturating_add(1);
                self.consume_ball();
                self.rotate_strike();
                None
            }
            Delivery::SwitchStrike => {
                self.rotate_strike();
                None
            }
            Delivery::Reset => {
                self.state = MatchState::new();
                log::info!("innings reset");
                Some(Advisory::info(RESET_MESSAGE))
            }
        };

        log::debug!("{delivery:?} -> {}", self.state);
        Ok(advisory)
    }

    /// Runs off the bat: credited to the team and the striker, one legal
    /// ball, and a change of strike on odd runs.
    pub fn score_run(&mut self, runs: RunValue) -> Outcome {
        self.apply(Delivery::Run(runs))
    }

    /// Dismiss the striker, or spend a pending free hit with a not-out advisory.
    ///
    /// A dismissal uses a legal ball and always leaves slot A on strike; an
    /// out batter in slot A is replaced by a fresh record.
    pub fn wicket(&mut self, kind: DismissalKind) -> Outcome {
        self.apply(Delivery::Wicket(kind))
    }

    /// One extra to the team. No ball is counted and strike stays.
    pub fn wide(&mut self) -> Outcome {
        self.apply(Delivery::Wide)
    }

    /// One run to the team and the striker. No ball is counted and strike stays.
    pub fn no_ball(&mut self) -> Outcome {
        self.apply(Delivery::NoBall)
    }

    /// One extra to the team and a free hit on the next ball-consuming delivery.
    pub fn declare_free_hit(&mut self) -> Outcome {
        self.apply(Delivery::FreeHit)
    }

    /// One extra to the team, one legal ball, and a change of strike.
    pub fn bye(&mut self) -> Outcome {
        self.apply(Delivery::Bye)
    }

    /// Same accounting as [`bye`](Self::bye).
    pub fn leg_bye(&mut self) -> Outcome {
        self.apply(Delivery::LegBye)
    }

    /// Swap striker and non-striker. Allowed after the innings is closed.
    pub fn switch_strike(&mut self) -> Outcome {
        self.apply(Delivery::SwitchStrike)
    }

    /// Back to a fresh innings, with a confirmation advisory.
    pub fn reset(&mut self) -> Outcome {
        self.apply(Delivery::Reset)
    }

    fn outcome(&self, advisory: Option<Advisory>) -> Outcome {
        Outcome {
            state: self.state,
            advisory,
        }
    }

    fn add_runs(&mut self, runs: RunValue) {
        let runs_u32 = u32::from(runs.get());
        self.state.team_runs = self.state.team_runs.saturating_add(runs_u32);
        self.credit_striker(runs_u32);
        self.consume_ball();
        // Strike follows the runs even when the free hit kept the ball off the count.
        if runs.rotates_strike() {
            self.rotate_strike();
        }
    }

    fn dismiss(&mut self, kind: DismissalKind) -> Option<Advisory> {
        if self.state.free_hit_pending {
            self.state.free_hit_pending = false;
            return Some(Advisory::info(format!(
                "{kind} attempted on Free Hit: Not out."
            )));
        }

        self.state.wickets = (self.state.wickets + 1).min(MAX_WICKETS);
        self.state.batter_mut(self.state.striker).is_out = true;
        self.consume_ball();

        // The incoming batter always takes slot A.
        self.state.striker = Slot::A;
        if self.state.batter(Slot::A).is_out {
            *self.state.batter_mut(Slot::A) = Default::default();
        }

        if self.state.is_innings_closed() {
            log::info!("innings closed at {}", self.state);
            return Some(Advisory::info(ALL_OUT_MESSAGE));
        }
        None
    }

    /// A pending free hit absorbs the ball instead of it reaching the over.
    fn consume_ball(&mut self) {
        if self.state.free_hit_pending {
            self.state.free_hit_pending = false;
        } else {
            self.state.legal_balls = self.state.legal_balls.saturating_add(1);
        }
    }

    fn credit_striker(&mut self, runs: u32) {
        let batter = self.state.batter_mut(self.state.striker);
        batter.runs_scored = batter.runs_scored.saturating_add(runs);
    }

    fn rotate_strike(&mut self) {
        self.state.striker = self.state.striker.other();
    }
}
