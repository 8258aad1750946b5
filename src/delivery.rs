//! Commands accepted by the scoring engine.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ScoringError;

/// Runs that can be scored off the bat in one delivery.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RunValue(u8);

impl RunValue {
    pub const ONE: RunValue = RunValue(1);
    pub const TWO: RunValue = RunValue(2);
    pub const THREE: RunValue = RunValue(3);
    pub const FOUR: RunValue = RunValue(4);
    pub const SIX: RunValue = RunValue(6);

    pub const ALL: [RunValue; 5] = [
        RunValue::ONE,
        RunValue::TWO,
        RunValue::THREE,
        RunValue::FOUR,
        RunValue::SIX,
    ];

    pub fn get(self) -> u8 {
        self.0
    }

    /// Odd runs leave the batters at opposite ends.
    pub fn rotates_strike(self) -> bool {
        self.0 % 2 == 1
    }
}

impl TryFrom<u8> for RunValue {
    type Error = ScoringError;

    fn try_from(runs: u8) -> Result<Self, Self::Error> {
        match runs {
            1 | 2 | 3 | 4 | 6 => Ok(RunValue(runs)),
            other => Err(ScoringError::InvalidRunValue(other)),
        }
    }
}

impl From<RunValue> for u8 {
    fn from(value: RunValue) -> Self {
        value.0
    }
}

/// How the striker was dismissed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DismissalKind {
    #[default]
    Standard,
    Lbw,
}

impl DismissalKind {
    pub fn label(self) -> &'static str {
        match self {
            DismissalKind::Standard => "Wicket",
            DismissalKind::Lbw => "LBW",
        }
    }
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One scoreboard control press.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Delivery {
    Run(RunValue),
    Wicket(DismissalKind),
    Wide,
    NoBall,
    FreeHit,
    Bye,
    LegBye,
    SwitchStrike,
    Reset,
}

impl Delivery {
    /// Commands that still apply once the innings is closed.
    pub fn is_allowed_after_close(self) -> bool {
        matches!(self, Delivery::SwitchStrike | Delivery::Reset)
    }
}

/// Parses the control labels printed on the scoreboard buttons.
///
/// ```rust
/// use cricket_scoreboard::{Delivery, DismissalKind, RunValue};
///
/// assert_eq!("4".parse(), Ok(Delivery::Run(RunValue::FOUR)));
/// assert_eq!("lbw".parse(), Ok(Delivery::Wicket(DismissalKind::Lbw)));
/// assert!("5".parse::<Delivery>().is_err());
/// ```
impl FromStr for Delivery {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if let Ok(runs) = label.parse::<u8>() {
            return RunValue::try_from(runs).map(Delivery::Run);
        }
        let delivery = match label.to_ascii_uppercase().as_str() {
            "W" | "WICKET" => Delivery::Wicket(DismissalKind::Standard),
            "LBW" => Delivery::Wicket(DismissalKind::Lbw),
            "WD" | "WIDE" => Delivery::Wide,
            "NB" | "NOBALL" | "NO BALL" => Delivery::NoBall,
            "FH" | "FREEHIT" | "FREE HIT" => Delivery::FreeHit,
            "B" | "BYE" => Delivery::Bye,
            "LB" | "LEGBYE" | "LEG BYE" => Delivery::LegBye,
            "S" | "SWITCH" => Delivery::SwitchStrike,
            "R" | "RESET" => Delivery::Reset,
            _ => return Err(ScoringError::UnknownCommand(label.to_string())),
        };
        Ok(delivery)
    }
}
