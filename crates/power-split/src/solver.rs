//! The slider solver.
//!
//! When one channel is dragged to a new ratio, the solver pushes the
//! difference onto the other unlocked channels so the distribution keeps
//! summing to [`TOTAL`].
//!
//! # Cases
//!
//! - **One partner** (the third channel is locked): the partner absorbs the
//!   whole adjustment. If that would take it below zero it stops at zero and
//!   the dragged channel is pulled back by the shortfall.
//! - **Two partners**: the adjustment is halved. The half carrying the odd
//!   remainder alternates between the partners through [`RoundingBias`]. The
//!   dragged channel always gets exactly the requested ratio.
//!
//! Any other partner count is a caller bug and panics.
//!
//! # Example
//!
//! ```
//! use power_split::{Channel, ChannelLocks, Distribution, Solver};
//!
//! let mut solver = Solver::new();
//! let start = Distribution::even();
//!
//! let adjusted = solver.adjust(&start, ChannelLocks::empty(), Channel::Research, 150);
//! assert_eq!(adjusted.distribution.as_array(), [45, 150, 45]);
//!
//! let adjusted = solver.adjust(
//!     &adjusted.distribution,
//!     ChannelLocks::MANA,
//!     Channel::Research,
//!     200,
//! );
//! assert_eq!(adjusted.distribution.as_array(), [45, 195, 0]);
//! assert_eq!(adjusted.shortfall, 5);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::channel::Channel;
use crate::distribution::Distribution;
use crate::locks::ChannelLocks;
use crate::TOTAL;

/// Which partner takes the larger half of an odd two-way split.
///
/// Flipped after every two-way split so that repeated drags do not keep
/// handing the remainder to the same channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundingBias {
    inverted: bool,
}

impl RoundingBias {
    /// Create a bias. `false` hands the larger half to the first partner in
    /// channel order.
    #[must_use]
    pub const fn new(inverted: bool) -> Self {
        Self { inverted }
    }

    /// Whether the bias currently favours the second partner.
    #[must_use]
    pub const fn is_inverted(self) -> bool {
        self.inverted
    }

    /// Order two partners as (takes larger half, takes smaller half).
    #[must_use]
    pub const fn order(self, first: Channel, second: Channel) -> (Channel, Channel) {
        if self.inverted {
            (second, first)
        } else {
            (first, second)
        }
    }

    fn toggle(&mut self) {
        self.inverted = !self.inverted;
    }
}

/// Unlocked channels that absorb an adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Partners {
    One(Channel),
    Two(Channel, Channel),
}

impl Partners {
    /// # Panics
    /// Panics if every other channel is locked.
    fn of(locks: ChannelLocks, changed: Channel) -> Self {
        match changed.others().map(|c| (c, locks.is_locked(c))) {
            [(first, false), (second, false)] => Self::Two(first, second),
            [(partner, false), (_, true)] | [(_, true), (partner, false)] => Self::One(partner),
            [(_, true), (_, true)] => {
                panic!("cannot adjust {changed}: no unlocked partner channel")
            }
        }
    }
}

/// How a two-way split handed out the adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    /// Partner that absorbed the larger-magnitude half
    pub larger: Channel,
    /// Partner that absorbed the smaller-magnitude half
    pub smaller: Channel,
    /// The signed adjustment that was split (positive means partners grew)
    pub adjustment: i64,
}

/// Result of one solver call.
///
/// `distribution` is authoritative: the dragged channel's ratio must be read
/// back from it, since it can be lower than `requested`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Adjusted {
    /// The corrected distribution
    pub distribution: Distribution,
    /// The channel that was dragged
    pub changed: Channel,
    /// Ratio the caller asked for
    pub requested: u32,
    /// How far short of `requested` the dragged channel ended up
    pub shortfall: u32,
    /// Present when two partners shared the adjustment
    pub split: Option<Split>,
}

impl Adjusted {
    /// The dragged channel's actual ratio.
    pub const fn actual(&self) -> u32 {
        self.distribution.get(self.changed)
    }

    /// Whether the dragged channel was held below the requested ratio.
    pub const fn is_clamped(&self) -> bool {
        self.shortfall > 0
    }
}

/// Redistributes slider drags across unlocked channels.
///
/// Owns the [`RoundingBias`]; one solver belongs to one slider screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Solver {
    bias: RoundingBias,
}

impl Solver {
    /// Create a solver with the default bias.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver starting from a given bias.
    #[must_use]
    pub const fn with_bias(bias: RoundingBias) -> Self {
        Self { bias }
    }

    /// Current rounding bias.
    #[must_use]
    pub const fn bias(&self) -> RoundingBias {
        self.bias
    }

    /// Set `changed` to `requested` and rebalance the other unlocked channels.
    ///
    /// Requesting the current ratio returns the distribution unchanged and
    /// leaves the bias alone.
    ///
    /// # Panics
    /// Panics if `requested > TOTAL`, if `changed` is locked, or if both other
    /// channels are locked. Callers guard against these with the enablement
    /// policy.
    pub fn adjust(
        &mut self,
        distribution: &Distribution,
        locks: ChannelLocks,
        changed: Channel,
        requested: u32,
    ) -> Adjusted {
        assert!(
            requested <= TOTAL,
            "requested {requested} for {changed} exceeds {TOTAL}"
        );
        assert!(
            !locks.is_locked(changed),
            "cannot adjust {changed}: channel is locked"
        );
        let partners = Partners::of(locks, changed);

        let mut values = distribution.working();
        values[changed.index()] = i64::from(requested);
        let adjustment = i64::from(TOTAL) - values.iter().sum::<i64>();

        if adjustment == 0 {
            return Adjusted {
                distribution: *distribution,
                changed,
                requested,
                shortfall: 0,
                split: None,
            };
        }

        let split = match partners {
            Partners::One(partner) => {
                let candidate = values[partner.index()] + adjustment;
                if candidate < 0 {
                    values[partner.index()] = 0;
                    values[changed.index()] += candidate;
                } else {
                    values[partner.index()] = candidate;
                }
                None
            }
            Partners::Two(first, second) => {
                let smaller_half = adjustment / 2;
                let larger_half = adjustment - smaller_half;
                let (larger, smaller) = self.bias.order(first, second);
                values[larger.index()] += larger_half;
                values[smaller.index()] += smaller_half;

                self.bias.toggle();
                trace!(inverted = self.bias.is_inverted(), "rounding bias toggled");

                shift_deficit(&mut values, first, second);
                shift_deficit(&mut values, second, first);
                Some(Split {
                    larger,
                    smaller,
                    adjustment,
                })
            }
        };

        let result = Distribution::from_resolved(values);
        let shortfall = requested - result.get(changed);
        debug!(
            %changed,
            requested,
            adjustment,
            shortfall,
            result = ?result.as_array(),
            "redistributed magic power"
        );

        Adjusted {
            distribution: result,
            changed,
            requested,
            shortfall,
            split,
        }
    }
}

/// Move any negative balance on `from` over to `to`, leaving `from` at zero.
fn shift_deficit(values: &mut [i64; Channel::COUNT], from: Channel, to: Channel) {
    let deficit = values[from.index()];
    if deficit < 0 {
        values[to.index()] += deficit;
        values[from.index()] = 0;
    }
}
