//! Session configuration.

use power_split::{ChannelLocks, Distribution, RoundingBias};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Configuration for a [`SliderSession`](crate::SliderSession).
///
/// Every field has a default, so a partial JSON object is enough:
///
/// ```
/// use magic_sliders::SessionConfig;
/// use power_split::ChannelLocks;
///
/// let config = SessionConfig::from_json(r#"{ "initial_locks": "SKILL" }"#).unwrap();
/// assert_eq!(config.initial_locks, ChannelLocks::SKILL);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Distribution used when no persisted value is supplied
    pub default_distribution: Distribution,
    /// Lock flags at screen open
    pub initial_locks: ChannelLocks,
    /// Starting rounding bias
    pub initial_bias: RoundingBias,
}

impl SessionConfig {
    /// Create a config with specific starting locks.
    #[must_use]
    pub fn with_locks(locks: ChannelLocks) -> Self {
        Self {
            initial_locks: locks,
            ..Default::default()
        }
    }

    /// Parse a config from JSON.
    ///
    /// The default distribution is checked against the sum invariant while
    /// deserializing.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed JSON or a default
    /// distribution that does not sum to the budget.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the default distribution from raw ratios.
    ///
    /// # Errors
    /// Returns [`ConfigError::Distribution`] if the ratios do not sum to the
    /// budget.
    pub fn with_default_ratios(
        mut self,
        mana: u32,
        research: u32,
        skill: u32,
    ) -> Result<Self, ConfigError> {
        self.default_distribution = Distribution::new(mana, research, skill)?;
        Ok(self)
    }
}
