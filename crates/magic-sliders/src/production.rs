//! Per-turn production projection.
//!
//! Turning ratios into per-turn mana, research and skill belongs to the game
//! rules, which live outside this crate. [`ProductionModel`] is the seam; the
//! session calls it after every successful drag so the numbers next to the
//! sliders stay current.

use power_split::{Channel, Distribution, TOTAL};
use serde::{Deserialize, Serialize};

/// Projected per-turn yield of a distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductionPerTurn {
    /// Mana gained per turn
    pub mana: i32,
    /// Research points per turn
    pub research: i32,
    /// Skill points per turn
    pub skill: i32,
    /// Magic power before the split
    pub magic_power_base: i32,
}

impl ProductionPerTurn {
    /// Yield of one channel.
    #[must_use]
    pub const fn get(&self, channel: Channel) -> i32 {
        match channel {
            Channel::Mana => self.mana,
            Channel::Research => self.research,
            Channel::Skill => self.skill,
        }
    }
}

/// Deterministic projection from a distribution to per-turn production.
///
/// Implementors carry whatever player context they need (picks, settings).
pub trait ProductionModel {
    /// Project per-turn production for a distribution.
    fn project(&self, distribution: &Distribution) -> ProductionPerTurn;
}

impl<F> ProductionModel for F
where
    F: Fn(&Distribution) -> ProductionPerTurn,
{
    fn project(&self, distribution: &Distribution) -> ProductionPerTurn {
        self(distribution)
    }
}

/// Proportional split of a fixed magic power with per-channel bonuses.
///
/// Each channel gets `power * ratio / TOTAL`, then `bonus_percent` of that on
/// top. Integer arithmetic throughout, rounding down.
///
/// # Example
///
/// ```
/// use magic_sliders::{LinearProduction, ProductionModel};
/// use power_split::Distribution;
///
/// let model = LinearProduction::new(30);
/// let out = model.project(&Distribution::even());
/// assert_eq!((out.mana, out.research, out.skill), (10, 10, 10));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinearProduction {
    /// Magic power available each turn
    pub magic_power_base: i32,
    /// Percentage bonus per channel, in channel order
    pub bonus_percent: [i32; Channel::COUNT],
}

impl LinearProduction {
    /// Create a model with no bonuses.
    #[must_use]
    pub const fn new(magic_power_base: i32) -> Self {
        Self {
            magic_power_base,
            bonus_percent: [0; Channel::COUNT],
        }
    }

    /// Set the percentage bonus for one channel.
    #[must_use]
    pub fn with_bonus(mut self, channel: Channel, percent: i32) -> Self {
        self.bonus_percent[channel.index()] = percent;
        self
    }

    fn channel_yield(&self, distribution: &Distribution, channel: Channel) -> i32 {
        let base = i64::from(self.magic_power_base) * i64::from(distribution.get(channel))
            / i64::from(TOTAL);
        let boosted = base * (100 + i64::from(self.bonus_percent[channel.index()])) / 100;
        i32::try_from(boosted).unwrap_or(if boosted < 0 { i32::MIN } else { i32::MAX })
    }
}

impl ProductionModel for LinearProduction {
    fn project(&self, distribution: &Distribution) -> ProductionPerTurn {
        ProductionPerTurn {
            mana: self.channel_yield(distribution, Channel::Mana),
            research: self.channel_yield(distribution, Channel::Research),
            skill: self.channel_yield(distribution, Channel::Skill),
            magic_power_base: self.magic_power_base,
        }
    }
}
