//! Which slider controls accept input.
//!
//! A control is enabled iff its channel is unlocked and at least two channels
//! are unlocked in total. With a single unlocked channel there is nowhere to
//! push an adjustment, so every control goes dark.

use power_split::{Channel, ChannelLocks};

/// Enabled state of the three slider controls, derived from the lock set.
///
/// # Example
///
/// ```
/// use magic_sliders::Enablement;
/// use power_split::{Channel, ChannelLocks};
///
/// let enabled = Enablement::from_locks(ChannelLocks::MANA);
/// assert!(!enabled.is_enabled(Channel::Mana));
/// assert!(enabled.is_enabled(Channel::Research));
/// assert!(enabled.is_enabled(Channel::Skill));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enablement {
    enabled: [bool; Channel::COUNT],
}

impl Enablement {
    /// Minimum number of unlocked channels for any control to be enabled.
    pub const MIN_UNLOCKED: usize = 2;

    /// Compute the enabled state for a lock set.
    #[must_use]
    pub fn from_locks(locks: ChannelLocks) -> Self {
        let interactive = locks.unlocked_count() >= Self::MIN_UNLOCKED;
        Self {
            enabled: Channel::all().map(|channel| interactive && !locks.is_locked(channel)),
        }
    }

    /// Whether a channel's control accepts input.
    #[must_use]
    pub const fn is_enabled(&self, channel: Channel) -> bool {
        self.enabled[channel.index()]
    }

    /// Whether any control accepts input.
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.enabled.iter().any(|&e| e)
    }

    /// Enabled flags in channel order.
    #[must_use]
    pub const fn as_array(&self) -> [bool; Channel::COUNT] {
        self.enabled
    }
}

impl Default for Enablement {
    fn default() -> Self {
        Self::from_locks(ChannelLocks::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_unlocked_all_enabled() {
        assert_eq!(Enablement::default().as_array(), [true, true, true]);
    }

    #[test]
    fn test_locked_channel_is_disabled() {
        let enabled = Enablement::from_locks(ChannelLocks::from_flags([true, false, false]));
        assert_eq!(enabled.as_array(), [false, true, true]);
        assert!(enabled.any_enabled());
    }

    #[test]
    fn test_single_unlocked_disables_everything() {
        let enabled = Enablement::from_locks(ChannelLocks::from_flags([true, true, false]));
        assert_eq!(enabled.as_array(), [false, false, false]);
        assert!(!enabled.any_enabled());
    }

    #[test]
    fn test_all_locked_disables_everything() {
        let enabled = Enablement::from_locks(ChannelLocks::all());
        assert!(!enabled.any_enabled());
    }
}
