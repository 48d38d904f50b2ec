//! The slider session: one screen's worth of magic power state.
//!
//! A session owns the working [`Distribution`], the lock flags, the solver
//! (and with it the rounding bias), the production projection and the commit
//! gate. All mutation goes through `&mut self`; nothing is shared between
//! sessions.
//!
//! # Read-back
//!
//! [`SliderSession::drag`] returns the corrected distribution. The UI must
//! move the dragged slider to [`DragOutcome::actual`], which can be lower than
//! the position the user dragged to.

use power_split::{Channel, ChannelLocks, Distribution, RoundingBias, Solver, TOTAL};
use tracing::debug;

use crate::commit::{CommitGate, CommitOutcome, PowerSink};
use crate::config::SessionConfig;
use crate::enablement::Enablement;
use crate::error::SessionError;
use crate::production::{ProductionModel, ProductionPerTurn};

/// Result of a drag, for redrawing the sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    /// The new working distribution
    pub distribution: Distribution,
    /// The dragged channel
    pub channel: Channel,
    /// Ratio the widget reported (after clamping to the budget)
    pub requested: u32,
    /// Ratio the dragged channel actually holds now
    pub actual: u32,
    /// Whether `actual` is below `requested`
    pub clamped: bool,
    /// Refreshed per-turn production
    pub production: ProductionPerTurn,
}

/// Magic power sliders for one screen.
///
/// # Example
///
/// ```
/// use magic_sliders::{LinearProduction, SessionConfig, SliderSession};
/// use power_split::Channel;
///
/// let mut session = SliderSession::new(LinearProduction::new(24), SessionConfig::default());
/// let outcome = session.drag(Channel::Research, 150).unwrap();
/// assert_eq!(outcome.distribution.as_array(), [45, 150, 45]);
/// assert_eq!(outcome.production.research, 15);
///
/// session.set_locked(Channel::Mana, true);
/// let outcome = session.drag(Channel::Research, 200).unwrap();
/// assert_eq!(outcome.actual, 195);
/// assert!(outcome.clamped);
/// ```
#[derive(Debug, Clone)]
pub struct SliderSession<P> {
    distribution: Distribution,
    locks: ChannelLocks,
    enablement: Enablement,
    solver: Solver,
    model: P,
    production: ProductionPerTurn,
    gate: CommitGate,
}

impl<P: ProductionModel> SliderSession<P> {
    /// Open a session on the configured default distribution.
    ///
    /// Nothing has been sent to the server yet, so the first commit always
    /// sends.
    #[must_use]
    pub fn new(model: P, config: SessionConfig) -> Self {
        Self::open(model, &config, config.default_distribution, CommitGate::new())
    }

    /// Open a session on a persisted distribution.
    ///
    /// The persisted value is taken to be what the server already holds, so
    /// committing it unchanged sends nothing.
    #[must_use]
    pub fn resume(model: P, config: SessionConfig, persisted: Distribution) -> Self {
        Self::open(model, &config, persisted, CommitGate::with_last_sent(persisted))
    }

    fn open(model: P, config: &SessionConfig, distribution: Distribution, gate: CommitGate) -> Self {
        let production = model.project(&distribution);
        Self {
            distribution,
            locks: config.initial_locks,
            enablement: Enablement::from_locks(config.initial_locks),
            solver: Solver::with_bias(config.initial_bias),
            model,
            production,
            gate,
        }
    }

    /// Move a channel's slider to `value`.
    ///
    /// Values above the budget are clamped to it, as the widget would.
    ///
    /// # Errors
    /// Returns [`SessionError::ChannelDisabled`] if the channel's control is
    /// disabled. The distribution is left untouched in that case.
    pub fn drag(&mut self, channel: Channel, value: u32) -> Result<DragOutcome, SessionError> {
        if !self.enablement.is_enabled(channel) {
            return Err(SessionError::ChannelDisabled(channel));
        }
        let requested = value.min(TOTAL);
        let adjusted = self
            .solver
            .adjust(&self.distribution, self.locks, channel, requested);

        self.distribution = adjusted.distribution;
        self.production = self.model.project(&self.distribution);

        Ok(DragOutcome {
            distribution: self.distribution,
            channel,
            requested,
            actual: adjusted.actual(),
            clamped: adjusted.is_clamped(),
            production: self.production,
        })
    }

    /// Lock or unlock a channel and return the recomputed enablement.
    ///
    /// Ratios are not touched; the next drag sees the new lock set.
    pub fn set_locked(&mut self, channel: Channel, locked: bool) -> Enablement {
        self.locks.set_locked(channel, locked);
        self.enablement = Enablement::from_locks(self.locks);
        debug!(
            %channel,
            locked,
            enabled = ?self.enablement.as_array(),
            "slider lock changed"
        );
        self.enablement
    }

    /// Flip a channel's lock.
    pub fn toggle_lock(&mut self, channel: Channel) -> Enablement {
        let locked = !self.locks.is_locked(channel);
        self.set_locked(channel, locked)
    }

    /// Send the working distribution if it differs from the last one sent.
    pub fn commit<S: PowerSink + ?Sized>(&mut self, sink: &mut S) -> CommitOutcome {
        self.gate.commit(self.distribution, sink)
    }

    /// Whether the working distribution has changes not yet sent.
    #[must_use]
    pub fn has_pending_changes(&self) -> bool {
        self.gate.is_pending(&self.distribution)
    }

    /// The working distribution.
    #[must_use]
    pub const fn distribution(&self) -> Distribution {
        self.distribution
    }

    /// Current lock flags.
    #[must_use]
    pub const fn locks(&self) -> ChannelLocks {
        self.locks
    }

    /// Current enablement of the slider controls.
    #[must_use]
    pub const fn enablement(&self) -> Enablement {
        self.enablement
    }

    /// Production projected for the working distribution.
    #[must_use]
    pub const fn production(&self) -> ProductionPerTurn {
        self.production
    }

    /// Current rounding bias.
    #[must_use]
    pub const fn bias(&self) -> RoundingBias {
        self.solver.bias()
    }

    /// The production model.
    #[must_use]
    pub const fn model(&self) -> &P {
        &self.model
    }

    /// Close the session, yielding the distribution to persist.
    #[must_use]
    pub fn into_distribution(self) -> Distribution {
        self.distribution
    }
}
