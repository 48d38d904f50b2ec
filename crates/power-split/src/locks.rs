//! Per-channel lock flags.
//!
//! A locked channel keeps its ratio when another channel is dragged. Locking
//! and unlocking never touch the stored ratios; they only change which
//! channels absorb the next adjustment.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::channel::Channel;

bitflags! {
    /// Set of locked channels.
    ///
    /// Human-readable formats serialize the flag names (`"MANA | SKILL"`).
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ChannelLocks: u8 {
        /// Mana is locked
        const MANA     = 0b001;
        /// Research is locked
        const RESEARCH = 0b010;
        /// Skill is locked
        const SKILL    = 0b100;
    }
}

impl ChannelLocks {
    /// The flag for a single channel.
    #[must_use]
    pub const fn flag(channel: Channel) -> Self {
        match channel {
            Channel::Mana => Self::MANA,
            Channel::Research => Self::RESEARCH,
            Channel::Skill => Self::SKILL,
        }
    }

    /// Build a lock set from per-channel booleans in channel order.
    #[must_use]
    pub fn from_flags(flags: [bool; Channel::COUNT]) -> Self {
        Channel::all()
            .into_iter()
            .zip(flags)
            .filter(|&(_, locked)| locked)
            .fold(Self::empty(), |acc, (channel, _)| acc | Self::flag(channel))
    }

    /// Whether a channel is locked.
    #[must_use]
    pub const fn is_locked(self, channel: Channel) -> bool {
        self.contains(Self::flag(channel))
    }

    /// Lock or unlock a channel.
    pub fn set_locked(&mut self, channel: Channel, locked: bool) {
        self.set(Self::flag(channel), locked);
    }

    /// Unlocked channels in channel order.
    pub fn unlocked(self) -> impl Iterator<Item = Channel> {
        Channel::all()
            .into_iter()
            .filter(move |&channel| !self.is_locked(channel))
    }

    /// Number of unlocked channels.
    #[must_use]
    pub fn unlocked_count(self) -> usize {
        self.unlocked().count()
    }
}
