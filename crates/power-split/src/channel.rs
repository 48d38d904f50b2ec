//! Channel definitions.
//!
//! A channel is one of the three categories that share the magic power budget.
//! The declaration order is fixed and is used for deterministic tie-breaks when
//! a rounding remainder has to go somewhere.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Channel identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Channel {
    /// Power stored as mana reserve
    Mana = 0,
    /// Power spent on spell research
    Research = 1,
    /// Power spent on casting skill
    Skill = 2,
}

impl Channel {
    /// Total number of channels.
    pub const COUNT: usize = 3;

    /// Get all channels in their fixed order.
    #[must_use]
    pub const fn all() -> [Channel; Channel::COUNT] {
        [Channel::Mana, Channel::Research, Channel::Skill]
    }

    /// Get the index of this channel.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a channel by index (0-2).
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Channel> {
        match index {
            0 => Some(Channel::Mana),
            1 => Some(Channel::Research),
            2 => Some(Channel::Skill),
            _ => None,
        }
    }

    /// The two channels other than this one, in channel order.
    #[must_use]
    pub const fn others(self) -> [Channel; 2] {
        match self {
            Channel::Mana => [Channel::Research, Channel::Skill],
            Channel::Research => [Channel::Mana, Channel::Skill],
            Channel::Skill => [Channel::Mana, Channel::Research],
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mana => write!(f, "mana"),
            Self::Research => write!(f, "research"),
            Self::Skill => write!(f, "skill"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_index_round_trip() {
        for channel in Channel::all() {
            assert_eq!(Channel::from_index(channel.index()), Some(channel));
        }
        assert_eq!(Channel::from_index(3), None);
    }

    #[test]
    fn test_others_excludes_self_in_order() {
        assert_eq!(Channel::Research.others(), [Channel::Mana, Channel::Skill]);
        for channel in Channel::all() {
            assert!(!channel.others().contains(&channel));
        }
    }

    #[test]
    fn test_channel_serializes_snake_case() {
        let json = serde_json::to_string(&Channel::Research).unwrap();
        assert_eq!(json, "\"research\"");
    }
}
