//! Confirmation boundary between the local sliders and the game server.
//!
//! Drags only touch local state. An explicit commit sends the working
//! distribution onward, and only when it differs from the last one sent.

use power_split::Distribution;
use tracing::{debug, info};

/// Destination for committed distributions.
///
/// Sending is fire-and-forget: no acknowledgement is awaited.
pub trait PowerSink {
    /// Hand a distribution to the transport.
    fn send(&mut self, distribution: Distribution);
}

impl PowerSink for Vec<Distribution> {
    fn send(&mut self, distribution: Distribution) {
        self.push(distribution);
    }
}

/// What a commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The distribution differed from the last one sent and was sent.
    Sent(Distribution),
    /// Nothing changed since the last send.
    Unchanged,
}

impl CommitOutcome {
    /// Whether anything was sent.
    #[must_use]
    pub const fn was_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }
}

/// Remembers the last distribution sent to the server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitGate {
    last_sent: Option<Distribution>,
}

impl CommitGate {
    /// A gate that has sent nothing yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_sent: None }
    }

    /// A gate seeded with the value the server already holds.
    #[must_use]
    pub const fn with_last_sent(distribution: Distribution) -> Self {
        Self {
            last_sent: Some(distribution),
        }
    }

    /// The last distribution sent, if any.
    #[must_use]
    pub const fn last_sent(&self) -> Option<Distribution> {
        self.last_sent
    }

    /// Whether `working` would be sent by [`CommitGate::commit`].
    #[must_use]
    pub fn is_pending(&self, working: &Distribution) -> bool {
        self.last_sent.as_ref() != Some(working)
    }

    /// Send `working` through `sink` unless it equals the last value sent.
    pub fn commit<S: PowerSink + ?Sized>(
        &mut self,
        working: Distribution,
        sink: &mut S,
    ) -> CommitOutcome {
        if !self.is_pending(&working) {
            debug!(ratios = ?working.as_array(), "magic power unchanged, skipping send");
            return CommitOutcome::Unchanged;
        }
        info!(ratios = ?working.as_array(), "sending magic power distribution");
        sink.send(working);
        self.last_sent = Some(working);
        CommitOutcome::Sent(working)
    }
}
