//! The per-level growth walk shared by every forward and inverse query.
//!
//! At each level the walk spends the boost lane first, then the normal lane,
//! until the level-up cost (minus carried experience) is met. Rounding
//! leftovers carry into the next level. The walk stops early when a lane runs
//! dry ([`StopReason::Candy`]) or when the next candy would overrun the shard
//! budget ([`StopReason::Shards`]); whichever happens first wins.

use super::LevelSpan;
use crate::tables::{BoostRule, ExpTable, GrowthTables, Nature};

/// Candy and shard allowances for one walk. `u64::MAX` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WalkBudget {
    pub boost: u64,
    pub normal: u64,
    pub shards: u64,
}

impl WalkBudget {
    pub const UNBOUNDED: u64 = u64::MAX;

    pub const fn new(boost: u64, normal: u64, shards: u64) -> Self {
        Self {
            boost,
            normal,
            shards,
        }
    }

    /// Boost lane only, no shard ceiling.
    pub const fn boost_only(boost: u64) -> Self {
        Self::new(boost, 0, Self::UNBOUNDED)
    }
}

/// Why a walk ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum StopReason {
    /// The target was reached (or there was nothing to do).
    #[default]
    Complete,
    /// A candy lane ran out before the target.
    Candy,
    /// The shard budget could not pay for the next candy.
    Shards,
}

/// Where a walk ended and what it spent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reach {
    pub level: u8,
    /// Experience inside `level` at the end of the walk.
    pub exp_in_level: u64,
    pub boost_candy: u64,
    pub normal_candy: u64,
    pub shards: u64,
    pub exp_gained: u64,
    pub stop: StopReason,
}

impl Reach {
    fn start(span: &LevelSpan) -> Self {
        Self {
            level: span.src_level,
            exp_in_level: span.exp_in_level,
            ..Self::default()
        }
    }

    pub const fn total_candy(&self) -> u64 {
        self.boost_candy + self.normal_candy
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self.stop, StopReason::Complete)
    }
}

struct Walker<'a> {
    tables: &'a GrowthTables,
    nature: Nature,
    boost: BoostRule,
    level: u8,
    carry: u64,
    budget: WalkBudget,
    reach: Reach,
}

impl Walker<'_> {
    fn base_exp(&self) -> u64 {
        self.tables.candy_exp().base_exp(self.level, self.nature)
    }

    fn base_shards(&self) -> u64 {
        self.tables
            .shards()
            .cost_per_candy(self.level)
            .unwrap_or_default()
    }

    /// Caps `wanted` candies to what the shard budget can pay for.
    fn afford(&self, wanted: u64, unit_cost: u64) -> (u64, bool) {
        if unit_cost == 0 {
            return (wanted, false);
        }
        let affordable = self.budget.shards / unit_cost;
        if wanted > affordable {
            (affordable, true)
        } else {
            (wanted, false)
        }
    }

    fn spend_boost(&mut self, count: u64, exp_each: u64, shards_each: u64) -> u64 {
        self.budget.boost -= count;
        self.budget.shards -= count * shards_each;
        self.reach.boost_candy += count;
        self.reach.shards += count * shards_each;
        count.saturating_mul(exp_each)
    }

    fn spend_normal(&mut self, count: u64, exp_each: u64, shards_each: u64) -> u64 {
        self.budget.normal -= count;
        self.budget.shards -= count * shards_each;
        self.reach.normal_candy += count;
        self.reach.shards += count * shards_each;
        count * exp_each
    }

    /// Spends candy at the current level until `required` experience is met.
    fn fill(&mut self, required: u64) -> Result<(), StopReason> {
        if required == 0 {
            return Ok(());
        }
        let base_exp = self.base_exp();
        let base_shards = self.base_shards();
        let boost_exp = base_exp * self.boost.exp_multiplier;
        let boost_shards = base_shards * self.boost.shard_multiplier;

        let wanted = self.budget.boost.min(required.div_ceil(boost_exp));
        let (taken, shard_limited) = self.afford(wanted, boost_shards);
        let mut gained = self.spend_boost(taken, boost_exp, boost_shards);

        let mut stop = shard_limited.then_some(StopReason::Shards);
        if stop.is_none() && gained < required {
            let wanted = self.budget.normal.min((required - gained).div_ceil(base_exp));
            let (taken, shard_limited) = self.afford(wanted, base_shards);
            gained += self.spend_normal(taken, base_exp, base_shards);
            stop = shard_limited.then_some(StopReason::Shards);
        }

        self.carry += gained;
        self.reach.exp_gained += gained;
        match stop {
            Some(reason) => Err(reason),
            None if gained < required => Err(StopReason::Candy),
            None => Ok(()),
        }
    }

    /// Pours the unspent boost lane into the final level as plain experience.
    fn deposit(&mut self) {
        let boost_exp = self.base_exp() * self.boost.exp_multiplier;
        let boost_shards = self.base_shards() * self.boost.shard_multiplier;
        let (taken, shard_limited) = self.afford(self.budget.boost, boost_shards);
        let gained = self.spend_boost(taken, boost_exp, boost_shards);
        self.carry = self.carry.saturating_add(gained);
        self.reach.exp_gained = self.reach.exp_gained.saturating_add(gained);
        if shard_limited {
            self.reach.stop = StopReason::Shards;
        }
    }

    fn run(mut self, table: &ExpTable, span: &LevelSpan, deposit: bool) -> Reach {
        let outcome = self.climb(table, span);
        if let Err(reason) = outcome {
            self.reach.stop = reason;
        } else if deposit && self.budget.boost > 0 {
            self.deposit();
        }
        self.reach.level = self.level;
        self.reach.exp_in_level = self.carry;
        self.reach
    }

    fn climb(&mut self, table: &ExpTable, span: &LevelSpan) -> Result<(), StopReason> {
        while self.level < span.dst_level {
            let cost = table.level_cost(self.level).unwrap_or_default();
            self.fill(cost.saturating_sub(self.carry))?;
            self.carry -= cost;
            self.level += 1;
        }
        if span.target_exp_in_level > self.carry {
            self.fill(span.target_exp_in_level - self.carry)?;
        }
        Ok(())
    }
}

/// Walks `span` with the given lanes and shard budget.
///
/// With `deposit`, boost candy left after the target is met is spent at the
/// final level as pure experience instead of being returned.
pub(crate) fn walk(
    tables: &GrowthTables,
    span: &LevelSpan,
    nature: Nature,
    boost: BoostRule,
    budget: WalkBudget,
    deposit: bool,
) -> Reach {
    let start = Reach::start(span);
    let Some(table) = tables.curve(span.curve) else {
        return start;
    };
    if !span.is_walkable(tables.max_level()) {
        return start;
    }
    Walker {
        tables,
        nature,
        boost,
        level: span.src_level,
        carry: span.exp_in_level,
        budget,
        reach: start,
    }
    .run(table, span, deposit)
}
