//! Scoreboard configuration.

use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Slot};

const DEFAULT_ADVISORY_TTL_MS: u64 = 3_000;

/// Display names and timing for a scoreboard.
///
/// Every field is optional when loading from JSON:
///
/// ```rust
/// use cricket_scoreboard::{ScoreboardConfig, Slot};
///
/// let config = ScoreboardConfig::from_json(r#"{ "advisory_ttl_ms": 1500 }"#).unwrap();
/// assert_eq!(config.batter_name(Slot::A), "Rahul");
/// assert_eq!(config.advisory_ttl().as_millis(), 1500);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardConfig {
    /// Names printed on the batter cards, slot A first.
    pub batter_names: [String; 2],
    /// How long an advisory stays on screen.
    pub advisory_ttl_ms: u64,
}

impl Default for ScoreboardConfig {
    fn default() -> Self {
        Self {
            batter_names: ["Rahul".to_string(), "Rohit".to_string()],
            advisory_ttl_ms: DEFAULT_ADVISORY_TTL_MS,
        }
    }
}

impl ScoreboardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ScoreboardConfig = serde_json::from_str(json)?;
        if config.batter_names.iter().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::BlankBatterName);
        }
        Ok(config)
    }

    pub fn batter_name(&self, slot: Slot) -> &str {
        &self.batter_names[slot.index()]
    }

    pub fn advisory_ttl(&self) -> Duration {
        Duration::from_millis(self.advisory_ttl_ms)
    }
}
