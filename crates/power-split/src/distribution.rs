//! The distribution record: three ratios that always sum to [`TOTAL`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::channel::Channel;
use crate::TOTAL;

/// Errors from building a distribution out of raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DistributionError {
    /// The three ratios do not add up to the fixed total.
    #[error("ratios sum to {sum}, expected {expected}")]
    SumMismatch {
        /// Sum of the supplied ratios
        sum: u64,
        /// The required total
        expected: u32,
    },
}

/// Serialized form, validated on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct RawDistribution {
    mana: u32,
    research: u32,
    skill: u32,
}

/// Three non-negative ratios, one per [`Channel`], summing to [`TOTAL`].
///
/// The sum invariant holds for every value of this type. Raw values coming
/// from persisted state go through [`Distribution::new`], which rejects
/// triples that do not add up.
///
/// # Example
///
/// ```
/// use power_split::{Channel, Distribution};
///
/// let dist = Distribution::new(60, 120, 60).unwrap();
/// assert_eq!(dist[Channel::Research], 120);
/// assert!(Distribution::new(60, 120, 61).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDistribution", into = "RawDistribution")]
pub struct Distribution {
    values: [u32; Channel::COUNT],
}

impl Distribution {
    /// Build a distribution from raw ratios.
    ///
    /// # Errors
    /// Returns [`DistributionError::SumMismatch`] if the ratios do not sum to
    /// [`TOTAL`].
    pub fn new(mana: u32, research: u32, skill: u32) -> Result<Self, DistributionError> {
        let sum = u64::from(mana) + u64::from(research) + u64::from(skill);
        if sum != u64::from(TOTAL) {
            return Err(DistributionError::SumMismatch {
                sum,
                expected: TOTAL,
            });
        }
        Ok(Self {
            values: [mana, research, skill],
        })
    }

    /// The even split (a third of the budget per channel).
    #[must_use]
    pub const fn even() -> Self {
        let third = TOTAL / 3;
        Self {
            values: [TOTAL - 2 * third, third, third],
        }
    }

    /// Build a distribution from signed working values produced by the solver.
    ///
    /// # Panics
    /// Panics if any value is negative or the values do not sum to [`TOTAL`].
    pub(crate) fn from_resolved(values: [i64; Channel::COUNT]) -> Self {
        assert!(
            values.iter().all(|&v| v >= 0),
            "resolved ratios must be non-negative: {values:?}"
        );
        assert_eq!(
            values.iter().sum::<i64>(),
            i64::from(TOTAL),
            "resolved ratios must sum to {TOTAL}: {values:?}"
        );
        let mut out = [0u32; Channel::COUNT];
        for (slot, value) in out.iter_mut().zip(values) {
            // Bounded by TOTAL after the asserts above.
            *slot = u32::try_from(value).unwrap_or(TOTAL);
        }
        Self { values: out }
    }

    /// Get the ratio of a channel.
    #[must_use]
    pub const fn get(&self, channel: Channel) -> u32 {
        self.values[channel.index()]
    }

    /// Ratios as an array in channel order.
    #[must_use]
    pub const fn as_array(&self) -> [u32; Channel::COUNT] {
        self.values
    }

    /// Ratios widened to signed working values.
    pub(crate) fn working(&self) -> [i64; Channel::COUNT] {
        self.values.map(i64::from)
    }

    /// Share of the budget held by a channel, in percent.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(&self, channel: Channel) -> f32 {
        self.get(channel) as f32 * 100.0 / TOTAL as f32
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::even()
    }
}

impl std::ops::Index<Channel> for Distribution {
    type Output = u32;

    fn index(&self, channel: Channel) -> &Self::Output {
        &self.values[channel.index()]
    }
}

impl TryFrom<RawDistribution> for Distribution {
    type Error = DistributionError;

    fn try_from(raw: RawDistribution) -> Result<Self, Self::Error> {
        Self::new(raw.mana, raw.research, raw.skill)
    }
}

impl From<Distribution> for RawDistribution {
    fn from(dist: Distribution) -> Self {
        let [mana, research, skill] = dist.values;
        Self {
            mana,
            research,
            skill,
        }
    }
}
