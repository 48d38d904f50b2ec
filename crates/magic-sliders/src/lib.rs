//! # Magic Sliders
//!
//! Session layer for the magic power sliders.
//!
//! This crate wraps the [`power_split`] solver with the state a slider screen
//! needs between drags:
//!
//! - **Enablement**: which sliders accept input for the current locks
//! - **Session**: the working distribution, locks and rounding bias
//! - **Production**: per-turn projection refreshed after every drag
//! - **Commit**: send to the server only when something changed
//!
//! ## Usage
//!
//! ```rust
//! use magic_sliders::{LinearProduction, SessionConfig, SliderSession};
//! use power_split::{Channel, Distribution};
//!
//! let persisted = Distribution::even();
//! let mut session = SliderSession::resume(
//!     LinearProduction::new(30),
//!     SessionConfig::default(),
//!     persisted,
//! );
//!
//! let outcome = session.drag(Channel::Mana, 200)?;
//! assert_eq!(outcome.actual, 200);
//!
//! let mut outbox = Vec::new();
//! assert!(session.commit(&mut outbox).was_sent());
//! # Ok::<(), magic_sliders::SessionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

// Re-export power-split for callers that only depend on this crate
pub use power_split;

pub mod commit;
pub mod config;
pub mod enablement;
pub mod error;
pub mod production;
pub mod session;

pub use commit::{CommitGate, CommitOutcome, PowerSink};
pub use config::SessionConfig;
pub use enablement::Enablement;
pub use error::{ConfigError, SessionError};
pub use production::{LinearProduction, ProductionModel, ProductionPerTurn};
pub use session::{DragOutcome, SliderSession};

#[cfg(test)]
mod tests;
