//! # Power Split
//!
//! Three-way magic power distribution for the "magic sliders" control.
//!
//! A wizard's magic power is split between three channels (mana, research,
//! skill) as integer ratios of a fixed budget [`TOTAL`]. Dragging one channel
//! rebalances the others:
//!
//! - **Sum invariant**: every [`Distribution`] sums to [`TOTAL`]
//! - **Locks**: locked channels never move automatically ([`ChannelLocks`])
//! - **No negatives**: a channel that would drop below zero stops at zero
//! - **Fair rounding**: odd remainders alternate between partners ([`RoundingBias`])
//!
//! ## Quick Start
//!
//! ```rust
//! use power_split::{Channel, ChannelLocks, Distribution, Solver};
//!
//! let mut solver = Solver::new();
//! let dist = Distribution::even();
//!
//! let adjusted = solver.adjust(&dist, ChannelLocks::empty(), Channel::Mana, 200);
//! assert_eq!(adjusted.distribution.as_array(), [200, 20, 20]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod channel;
pub mod distribution;
pub mod locks;
pub mod solver;

// Re-exports for convenience
pub use channel::Channel;
pub use distribution::{Distribution, DistributionError};
pub use locks::ChannelLocks;
pub use solver::{Adjusted, RoundingBias, Solver, Split};

/// The whole power budget (100%) in ratio units.
pub const TOTAL: u32 = 240;
