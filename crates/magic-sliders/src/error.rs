//! Error types for the slider session.

use power_split::{Channel, DistributionError};
use thiserror::Error;

/// Errors from driving a [`SliderSession`](crate::SliderSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The channel's control is disabled (it is locked, or fewer than two
    /// channels are unlocked).
    #[error("{0} slider is disabled")]
    ChannelDisabled(Channel),
}

/// Errors from loading a [`SessionConfig`](crate::SessionConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config text could not be parsed.
    #[error("invalid session config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The default distribution breaks the sum invariant.
    #[error("invalid default distribution: {0}")]
    Distribution(#[from] DistributionError),
}
