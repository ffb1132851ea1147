//! Planner output types.

use crate::diagnosis::{LimitingFactor, ResourceSnapshot, ShortageInfo};
use crate::growth::StopReason;
use crate::inventory::Inventory;
use crate::items::{DenominationCounts, ItemUsage};
use crate::request::RequestId;

/// Outcome for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PerCreatureResult {
    pub id: RequestId,
    pub reached_level: u8,
    /// Experience inside `reached_level` after the committed candy.
    pub exp_in_level: u64,
    pub exp_to_next_level: u64,
    pub exp_to_target: u64,
    /// Need under the global budgets at this creature's turn, ignoring its cap.
    pub target_items: ItemUsage,
    /// Need under the creature's own candy cap; `None` when uncapped.
    pub candy_target_items: Option<ItemUsage>,
    /// What was committed against the inventory and budgets.
    pub reachable_items: ItemUsage,
    pub shortage: ShortageInfo,
    pub snapshot: ResourceSnapshot,
    pub limiting_factor: LimitingFactor,
    /// Why the committed walk ended.
    pub stop: StopReason,
}

impl PerCreatureResult {
    /// The theoretical row shortages are measured against.
    pub fn theoretical_items(&self) -> &ItemUsage {
        self.candy_target_items.as_ref().unwrap_or(&self.target_items)
    }
}

/// Aggregate committed usage over every creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanTotals {
    pub items: DenominationCounts,
    pub boost_count: u64,
    pub normal_count: u64,
    pub shards: u64,
    pub supply: u64,
}

impl PlanTotals {
    pub fn add(&mut self, usage: &ItemUsage) {
        self.items = self.items.plus(&usage.items);
        self.boost_count += usage.boost_count;
        self.normal_count += usage.normal_count;
        self.shards += usage.shards;
        self.supply += usage.total_supply();
    }

    pub const fn total_candy(&self) -> u64 {
        self.boost_count + self.normal_count
    }
}

impl<'a> FromIterator<&'a ItemUsage> for PlanTotals {
    fn from_iter<I: IntoIterator<Item = &'a ItemUsage>>(iter: I) -> Self {
        let mut totals = Self::default();
        for usage in iter {
            totals.add(usage);
        }
        totals
    }
}

/// Everything one planning run produced, in request order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    pub creatures: Vec<PerCreatureResult>,
    pub totals: PlanTotals,
    /// Inventory left after every committed row.
    pub inventory: Inventory,
    /// Global budgets left after the run. `None` is unbounded.
    pub remaining: ResourceSnapshot,
}

impl PlanResult {
    pub fn get(&self, id: RequestId) -> Option<&PerCreatureResult> {
        self.creatures.iter().find(|creature| creature.id == id)
    }

    /// True if every creature reached its target.
    pub fn is_fully_satisfied(&self) -> bool {
        self.creatures
            .iter()
            .all(|creature| creature.limiting_factor == LimitingFactor::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_rows() {
        let rows = [
            ItemUsage::new(DenominationCounts::new(5, 0, 1, 0, 0, 0), 20, 8, 700),
            ItemUsage::new(DenominationCounts::new(0, 2, 0, 1, 0, 0), 0, 11, 90),
        ];
        let totals: PlanTotals = rows.iter().collect();
        assert_eq!(totals.items, DenominationCounts::new(5, 2, 1, 1, 0, 0));
        assert_eq!(totals.total_candy(), 39);
        assert_eq!(totals.shards, 790);
        assert_eq!(totals.supply, 30 + 11);
    }
}
