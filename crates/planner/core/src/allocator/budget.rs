use crate::config::PlanConfig;
use crate::diagnosis::ResourceSnapshot;

/// One global pool: an optional limit and what has been spent from it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Pool {
    limit: Option<u64>,
    spent: u64,
}

impl Pool {
    fn remaining(&self) -> u64 {
        self.limit
            .map_or(u64::MAX, |limit| limit.saturating_sub(self.spent))
    }

    fn remaining_limit(&self) -> Option<u64> {
        self.limit.map(|limit| limit.saturating_sub(self.spent))
    }
}

/// Boost and shard pools shared by every request of one run.
///
/// Owned by a single `plan` call and threaded through the phases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct GlobalBudget {
    boost: Pool,
    shards: Pool,
}

impl GlobalBudget {
    pub(super) fn new(config: &PlanConfig) -> Self {
        Self {
            boost: Pool {
                limit: config.global_boost_limit,
                spent: 0,
            },
            shards: Pool {
                limit: config.global_shard_limit,
                spent: 0,
            },
        }
    }

    /// Boost candy still available; `u64::MAX` when unbounded.
    pub(super) fn boost_remaining(&self) -> u64 {
        self.boost.remaining()
    }

    /// Shards still available; `u64::MAX` when unbounded.
    pub(super) fn shards_remaining(&self) -> u64 {
        self.shards.remaining()
    }

    pub(super) fn spend(&mut self, boost: u64, shards: u64) {
        self.boost.spent += boost;
        self.shards.spent += shards;
    }

    pub(super) fn snapshot(&self) -> ResourceSnapshot {
        ResourceSnapshot {
            boost_remaining: self.boost.remaining_limit(),
            shards_remaining: self.shards.remaining_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoostKind;

    #[test]
    fn bounded_pools_count_down() {
        let config = PlanConfig::new(BoostKind::Full)
            .with_boost_limit(250)
            .with_shard_limit(10_000);
        let mut budget = GlobalBudget::new(&config);
        budget.spend(200, 9_000);
        assert_eq!(budget.boost_remaining(), 50);
        assert_eq!(budget.shards_remaining(), 1_000);
        assert_eq!(
            budget.snapshot(),
            ResourceSnapshot {
                boost_remaining: Some(50),
                shards_remaining: Some(1_000),
            }
        );
    }

    #[test]
    fn unbounded_pools_stay_open() {
        let mut budget = GlobalBudget::new(&PlanConfig::default());
        budget.spend(1_000_000, 1_000_000);
        assert_eq!(budget.boost_remaining(), u64::MAX);
        assert_eq!(budget.snapshot(), ResourceSnapshot::default());
    }
}
