use super::{Denomination, DenominationCounts};

/// A denomination breakdown paired with the candy and shards it pays for.
///
/// `boost_count + normal_count` is the candy the creature eats; the chosen
/// denominations may represent slightly more than that (`surplus`) because
/// atomic units cannot be split.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemUsage {
    pub items: DenominationCounts,
    pub boost_count: u64,
    pub normal_count: u64,
    pub shards: u64,
}

impl ItemUsage {
    pub const fn new(items: DenominationCounts, boost_count: u64, normal_count: u64, shards: u64) -> Self {
        Self {
            items,
            boost_count,
            normal_count,
            shards,
        }
    }

    pub fn count(&self, denomination: Denomination) -> u64 {
        self.items.get(denomination)
    }

    pub const fn total_candy_count(&self) -> u64 {
        self.boost_count + self.normal_count
    }

    /// Candy-equivalent value of the chosen denominations.
    pub fn total_supply(&self) -> u64 {
        self.items.value()
    }

    pub fn surplus(&self) -> u64 {
        self.total_supply().saturating_sub(self.total_candy_count())
    }

    /// Candy not yet backed by any denomination.
    pub fn shortfall(&self) -> u64 {
        self.total_candy_count().saturating_sub(self.total_supply())
    }

    pub fn is_covered(&self) -> bool {
        self.shortfall() == 0
    }

    /// Same candy counts, different breakdown.
    #[must_use]
    pub fn with_items(self, items: DenominationCounts) -> Self {
        Self { items, ..self }
    }

    /// Units present in `self` but not in `next`, and units added by `next`.
    pub fn diff(&self, next: &ItemUsage) -> (DenominationCounts, DenominationCounts) {
        let mut released = DenominationCounts::ZERO;
        let mut taken = DenominationCounts::ZERO;
        for (d, before) in self.items.iter() {
            let after = next.items.get(d);
            released[d] = before.saturating_sub(after);
            taken[d] = after.saturating_sub(before);
        }
        (released, taken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surplus_and_shortfall() {
        let usage = ItemUsage::new(DenominationCounts::new(3, 0, 1, 0, 0, 0), 20, 6, 900);
        assert_eq!(usage.total_candy_count(), 26);
        assert_eq!(usage.total_supply(), 28);
        assert_eq!(usage.surplus(), 2);
        assert!(usage.is_covered());

        let short = usage.with_items(DenominationCounts::new(3, 0, 0, 0, 0, 0));
        assert_eq!(short.surplus(), 0);
        assert_eq!(short.shortfall(), 23);
    }

    #[test]
    fn diff_splits_released_and_taken() {
        let before = ItemUsage::new(DenominationCounts::new(0, 0, 0, 2, 1, 0), 25, 0, 0);
        let after = before.with_items(DenominationCounts::new(0, 0, 0, 9, 0, 0));
        let (released, taken) = before.diff(&after);
        assert_eq!(released, DenominationCounts::new(0, 0, 0, 0, 1, 0));
        assert_eq!(taken, DenominationCounts::new(0, 0, 0, 7, 0, 0));
    }
}
