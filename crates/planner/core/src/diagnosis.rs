//! Shortage breakdown and limiting-factor diagnosis for one creature.

use crate::growth::StopReason;
use crate::items::ItemUsage;

/// How far the committed allocation falls short, per resource axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortageInfo {
    /// Candy the theoretical row eats that the committed row does not.
    pub candy: u64,
    /// Declared boost candy that was not committed.
    pub boost: u64,
    /// Declared shard spend that was not committed.
    pub shards: u64,
}

impl ShortageInfo {
    /// Compares a committed row against the theoretical row and the declared
    /// (cap-bounded, budget-free) boost and shard demand.
    pub fn between(
        declared_boost: u64,
        declared_shards: u64,
        theoretical: &ItemUsage,
        reachable: &ItemUsage,
    ) -> Self {
        Self {
            candy: theoretical
                .total_candy_count()
                .saturating_sub(reachable.total_candy_count()),
            boost: declared_boost.saturating_sub(reachable.boost_count),
            shards: declared_shards.saturating_sub(reachable.shards),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.candy == 0 && self.boost == 0 && self.shards == 0
    }
}

/// The resource diagnosed as keeping a creature from its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum LimitingFactor {
    #[default]
    None,
    /// Not enough usable candy in the inventory.
    Candy,
    /// The global boost pool ran dry.
    Boost,
    /// The global shard pool ran dry.
    Shards,
}

/// Global budgets left when a creature's turn came. `None` is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceSnapshot {
    pub boost_remaining: Option<u64>,
    pub shards_remaining: Option<u64>,
}

impl ResourceSnapshot {
    /// Whether the boost pool could not cover `demand`.
    pub fn boost_clamps(&self, demand: u64) -> bool {
        self.boost_remaining.is_some_and(|left| left < demand)
    }
}

/// Picks the single binding resource.
///
/// Boost wins when the global pool clamped the creature; shards win when the
/// committed walk stopped on the shard budget; any remaining candy gap is an
/// inventory shortage.
pub fn limiting_factor(
    shortage: &ShortageInfo,
    boost_clamped: bool,
    stop: StopReason,
) -> LimitingFactor {
    if shortage.boost > 0 && boost_clamped {
        LimitingFactor::Boost
    } else if shortage.shards > 0 && stop == StopReason::Shards {
        LimitingFactor::Shards
    } else if shortage.candy > 0 {
        LimitingFactor::Candy
    } else {
        LimitingFactor::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::DenominationCounts;

    fn usage(boost: u64, normal: u64, shards: u64) -> ItemUsage {
        ItemUsage::new(DenominationCounts::ZERO, boost, normal, shards)
    }

    #[test]
    fn shortage_measures_each_axis() {
        let shortage = ShortageInfo::between(200, 5000, &usage(50, 10, 1200), &usage(50, 4, 1100));
        assert_eq!(
            shortage,
            ShortageInfo {
                candy: 6,
                boost: 150,
                shards: 3900
            }
        );
        assert!(ShortageInfo::between(0, 0, &usage(0, 3, 0), &usage(0, 3, 0)).is_empty());
    }

    #[test]
    fn precedence_is_boost_then_shards_then_candy() {
        let all = ShortageInfo {
            candy: 1,
            boost: 1,
            shards: 1,
        };
        assert_eq!(limiting_factor(&all, true, StopReason::Shards), LimitingFactor::Boost);
        assert_eq!(limiting_factor(&all, false, StopReason::Shards), LimitingFactor::Shards);
        assert_eq!(limiting_factor(&all, false, StopReason::Candy), LimitingFactor::Candy);
        assert_eq!(
            limiting_factor(&ShortageInfo::default(), true, StopReason::Complete),
            LimitingFactor::None
        );
    }

    #[test]
    fn unbounded_pool_never_clamps() {
        let open = ResourceSnapshot::default();
        assert!(!open.boost_clamps(u64::MAX));
        let tight = ResourceSnapshot {
            boost_remaining: Some(50),
            shards_remaining: None,
        };
        assert!(tight.boost_clamps(200));
        assert!(!tight.boost_clamps(50));
    }
}
