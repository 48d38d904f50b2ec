//! Test helper functions for setting up slider sessions.

use std::cell::Cell;

use power_split::{ChannelLocks, Distribution};

use crate::config::SessionConfig;
use crate::production::{LinearProduction, ProductionModel, ProductionPerTurn};
use crate::session::SliderSession;

/// Magic power used by the helper sessions.
pub const TEST_POWER: i32 = 48;

/// A production model that counts how often it is asked to project.
#[derive(Debug, Default)]
pub struct CountingModel {
    inner: LinearProduction,
    calls: Cell<usize>,
}

impl CountingModel {
    pub fn new() -> Self {
        Self {
            inner: LinearProduction::new(TEST_POWER),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ProductionModel for CountingModel {
    fn project(&self, distribution: &Distribution) -> ProductionPerTurn {
        self.calls.set(self.calls.get() + 1);
        self.inner.project(distribution)
    }
}

/// Session on the even split with the given lock flags.
pub fn session_with_locks(flags: [bool; 3]) -> SliderSession<LinearProduction> {
    SliderSession::new(
        LinearProduction::new(TEST_POWER),
        SessionConfig::with_locks(ChannelLocks::from_flags(flags)),
    )
}

/// Session resumed from persisted ratios, all channels unlocked.
pub fn session_at(mana: u32, research: u32, skill: u32) -> SliderSession<LinearProduction> {
    let persisted = Distribution::new(mana, research, skill).unwrap();
    SliderSession::resume(
        LinearProduction::new(TEST_POWER),
        SessionConfig::default(),
        persisted,
    )
}

/// Assert the session's ratios in channel order.
#[track_caller]
pub fn assert_ratios<P: ProductionModel>(session: &SliderSession<P>, expected: [u32; 3]) {
    assert_eq!(session.distribution().as_array(), expected);
}
