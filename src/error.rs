use thiserror::Error;

/// Reasons a scoreboard command is turned away.
///
/// None of these are fatal. The engine reports them as error advisories and
/// leaves the innings untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Max 10 wickets reached — innings closed.")]
    InningsClosed,
    #[error("{0} is not a scoreable run value (use 1, 2, 3, 4 or 6)")]
    InvalidRunValue(u8),
    #[error("Unknown scoreboard command: {0:?}")]
    UnknownCommand(String),
    #[error("Match snapshot has {0} wickets, more than the innings allows")]
    TooManyWickets(u8),
}

/// Problems loading a [`ScoreboardConfig`](crate::ScoreboardConfig).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("The scoreboard configuration could not be parsed")]
    Parse(#[from] serde_json::Error),
    #[error("Batter names must not be blank")]
    BlankBatterName,
}
