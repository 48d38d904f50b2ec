//! Scenario and fairness tests for slider sessions.
//!
//! - `scenarios.rs`: End-to-end drag and lock sequences
//! - `fairness.rs`: Long seeded drag runs checking rounding fairness
//! - `helpers.rs`: Session setup utilities

mod helpers;
mod scenarios;
