//! Growth arithmetic: level, experience, candy, and shard conversions.
//!
//! [`GrowthModel`] binds the read-only [`GrowthTables`] to one boost kind and
//! answers forward questions ("what does this span cost?") and inverse ones
//! ("how far does this budget get?"). Every query is a view over the same
//! per-level walk, so forward and inverse answers always agree.
//!
//! # Numeric semantics
//!
//! - Candy needed at a level rounds up (`div_ceil`)
//! - Candy affordable within a hard budget rounds down (floor division)
//! - Rounding leftovers carry to the next level as whole experience points

mod span;
mod walk;

pub use span::LevelSpan;
pub use walk::{Reach, StopReason, WalkBudget};

use crate::config::BoostKind;
use crate::error::TablesError;
use crate::tables::{BoostRule, GrowthCurve, GrowthTables, Nature};

/// Candy, shards, and experience needed for a span with one candy kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthCost {
    pub candy: u64,
    pub shards: u64,
    pub exp: u64,
}

/// Cost of a span when a bounded boost budget is spent before normal candy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MixedGrowthCost {
    pub boost_candy: u64,
    pub normal_candy: u64,
    pub shards: u64,
    pub exp: u64,
}

impl MixedGrowthCost {
    pub const fn total_candy(&self) -> u64 {
        self.boost_candy + self.normal_candy
    }
}

/// Growth arithmetic for one boost kind.
#[derive(Clone, Copy, Debug)]
pub struct GrowthModel<'t> {
    tables: &'t GrowthTables,
    kind: BoostKind,
    boost: BoostRule,
}

impl<'t> GrowthModel<'t> {
    /// # Errors
    ///
    /// Returns [`TablesError::MissingBoostRule`] if the tables carry no rule
    /// for `kind`.
    pub fn new(tables: &'t GrowthTables, kind: BoostKind) -> Result<Self, TablesError> {
        let boost = tables.boost_rules().rule(kind)?;
        Ok(Self {
            tables,
            kind,
            boost,
        })
    }

    pub fn tables(&self) -> &'t GrowthTables {
        self.tables
    }

    pub fn boost_kind(&self) -> BoostKind {
        self.kind
    }

    pub fn boost_rule(&self) -> BoostRule {
        self.boost
    }

    /// Experience between two levels on `curve`; zero for invalid ranges.
    pub fn exp_delta(&self, curve: GrowthCurve, from: u8, to: u8) -> u64 {
        self.tables
            .curve(curve)
            .map(|table| table.exp_delta(from, to))
            .unwrap_or_default()
    }

    /// Experience one boost-tagged candy grants at `level`.
    pub fn exp_per_candy(&self, level: u8, nature: Nature) -> u64 {
        self.tables.candy_exp().base_exp(level, nature) * self.boost.exp_multiplier
    }

    /// Experience one normal candy grants at `level`.
    pub fn normal_exp_per_candy(&self, level: u8, nature: Nature) -> u64 {
        self.tables.candy_exp().base_exp(level, nature)
    }

    /// Shards one boost-tagged candy costs at `level`; zero past the table.
    pub fn shard_cost_per_candy(&self, level: u8) -> u64 {
        self.tables
            .shards()
            .cost_per_candy(level)
            .map(|cost| cost * self.boost.shard_multiplier)
            .unwrap_or_default()
    }

    /// Candy and shards needed when every candy carries this model's boost.
    pub fn candy_and_shard_needed(&self, span: &LevelSpan, nature: Nature) -> GrowthCost {
        let reach = self.walk(span, nature, WalkBudget::boost_only(WalkBudget::UNBOUNDED), false);
        GrowthCost {
            candy: reach.total_candy(),
            shards: reach.shards,
            exp: reach.exp_gained,
        }
    }

    /// Candy and shards needed when `boost_budget` boost candy is spent first
    /// (lowest levels first) and normal candy covers the rest.
    ///
    /// Boost budget left once the target is met is still spent, at the final
    /// level, so an in-level investment at `src == dst` reports its cost.
    pub fn mixed_candy_and_shard_needed(
        &self,
        span: &LevelSpan,
        nature: Nature,
        boost_budget: u64,
    ) -> MixedGrowthCost {
        let budget = WalkBudget::new(boost_budget, WalkBudget::UNBOUNDED, WalkBudget::UNBOUNDED);
        let reach = self.walk(span, nature, budget, true);
        MixedGrowthCost {
            boost_candy: reach.boost_candy,
            normal_candy: reach.normal_candy,
            shards: reach.shards,
            exp: reach.exp_gained,
        }
    }

    /// How far `candy_budget` boost-tagged candy gets along `span`.
    pub fn level_reachable_by_candy(
        &self,
        candy_budget: u64,
        span: &LevelSpan,
        nature: Nature,
    ) -> Reach {
        self.walk(span, nature, WalkBudget::boost_only(candy_budget), false)
    }

    /// Like [`Self::level_reachable_by_candy`], also bounded by `shard_budget`.
    pub fn level_reachable_by_candy_and_shards(
        &self,
        candy_budget: u64,
        shard_budget: u64,
        span: &LevelSpan,
        nature: Nature,
    ) -> Reach {
        self.walk(
            span,
            nature,
            WalkBudget::new(candy_budget, 0, shard_budget),
            false,
        )
    }

    /// Walks `span` with separate boost and normal lanes under a shard budget.
    ///
    /// Leftover boost is deposited at the final level, matching
    /// [`Self::mixed_candy_and_shard_needed`].
    pub fn level_reachable_mixed(&self, span: &LevelSpan, nature: Nature, budget: WalkBudget) -> Reach {
        self.walk(span, nature, budget, true)
    }

    /// Experience still needed to leave the reached level; zero at the cap.
    pub fn exp_to_next_level(&self, curve: GrowthCurve, reach: &Reach) -> u64 {
        self.tables
            .curve(curve)
            .and_then(|table| table.level_cost(reach.level))
            .map(|cost| cost.saturating_sub(reach.exp_in_level))
            .unwrap_or_default()
    }

    /// Experience still missing between `reach` and the span's goal.
    pub fn exp_to_target(&self, span: &LevelSpan, reach: &Reach) -> u64 {
        let Some(table) = self.tables.curve(span.curve) else {
            return 0;
        };
        let (Some(goal), Some(reached)) = (
            table.total_exp(span.dst_level),
            table.total_exp(reach.level),
        ) else {
            return 0;
        };
        (goal + span.target_exp_in_level).saturating_sub(reached + reach.exp_in_level)
    }

    fn walk(&self, span: &LevelSpan, nature: Nature, budget: WalkBudget, deposit: bool) -> Reach {
        walk::walk(self.tables, span, nature, self.boost, budget, deposit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_candy_rates() {
        let tables = GrowthTables::reference();
        let mini = GrowthModel::new(&tables, BoostKind::Mini).unwrap();
        let full = GrowthModel::new(&tables, BoostKind::Full).unwrap();

        assert_eq!(mini.normal_exp_per_candy(10, Nature::Neutral), 35);
        assert_eq!(mini.exp_per_candy(10, Nature::Neutral), 70);
        assert_eq!(full.exp_per_candy(27, Nature::Up), 70);
        assert_eq!(full.exp_per_candy(45, Nature::Down), 42);

        // Same experience multiplier, different shard multiplier.
        assert_eq!(mini.shard_cost_per_candy(30), 122 * 4);
        assert_eq!(full.shard_cost_per_candy(30), 122 * 5);
        assert_eq!(full.shard_cost_per_candy(0), 0);
    }

    #[test]
    fn exp_delta_uses_curve_table() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::None).unwrap();
        assert_eq!(growth.exp_delta(GrowthCurve::Exp600, 24, 25), 600);
        assert_eq!(growth.exp_delta(GrowthCurve::Exp1320, 24, 25), 1320);
        assert_eq!(growth.exp_delta(GrowthCurve::Exp600, 25, 24), 0);
        assert_eq!(growth.exp_delta(GrowthCurve::Exp600, 1, 99), 0);
    }

    #[test]
    fn candy_needed_without_boost() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::None).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp600, 1, 10);
        assert_eq!(
            growth.candy_and_shard_needed(&span, Nature::Neutral),
            GrowthCost {
                candy: 45,
                shards: 1619,
                exp: 1575
            }
        );
    }

    #[test]
    fn candy_needed_with_full_boost() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::Full).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp1320, 10, 30);
        assert_eq!(
            growth.candy_and_shard_needed(&span, Nature::Up),
            GrowthCost {
                candy: 296,
                shards: 123_355,
                exp: 23_012
            }
        );
    }

    #[test]
    fn carried_and_target_experience() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::None).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp1080, 5, 12)
            .with_exp_in_level(100)
            .with_target_exp(200);
        assert_eq!(
            growth.candy_and_shard_needed(&span, Nature::Neutral),
            GrowthCost {
                candy: 102,
                shards: 4617,
                exp: 3570
            }
        );
    }

    #[test]
    fn mixed_spends_boost_first() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::Full).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp1320, 10, 60);
        assert_eq!(
            growth.mixed_candy_and_shard_needed(&span, Nature::Neutral, 500),
            MixedGrowthCost {
                boost_candy: 500,
                normal_candy: 3352,
                shards: 1_354_942,
                exp: 114_500
            }
        );

        let mini = GrowthModel::new(&tables, BoostKind::Mini).unwrap();
        let short = LevelSpan::new(GrowthCurve::Exp600, 20, 25);
        let cost = mini.mixed_candy_and_shard_needed(&short, Nature::Neutral, 30);
        assert_eq!((cost.boost_candy, cost.normal_candy), (30, 20));
        assert_eq!(cost.shards, 11_760);
    }

    #[test]
    fn in_level_investment_is_deposited() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::Full).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp600, 30, 30);
        let cost = growth.mixed_candy_and_shard_needed(&span, Nature::Neutral, 50);
        assert_eq!(cost.boost_candy, 50);
        assert_eq!(cost.normal_candy, 0);
        assert_eq!(cost.shards, 50 * 122 * 5);
        assert_eq!(cost.exp, 2500);
    }

    #[test]
    fn reachable_by_candy_stops_mid_level() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::None).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp600, 1, 30);
        let reach = growth.level_reachable_by_candy(100, &span, Nature::Neutral);
        assert_eq!(reach.level, 14);
        assert_eq!(reach.exp_in_level, 393);
        assert_eq!(reach.total_candy(), 100);
        assert_eq!(reach.shards, 4595);
        assert_eq!(reach.stop, StopReason::Candy);
        assert_eq!(growth.exp_to_next_level(span.curve, &reach), 429 - 393);
    }

    #[test]
    fn shard_budget_stops_before_candy_budget() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::Mini).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp900, 10, 40);
        let reach = growth.level_reachable_by_candy_and_shards(1000, 20_000, &span, Nature::Down);
        assert_eq!(reach.level, 17);
        assert_eq!(reach.exp_in_level, 623);
        assert_eq!(reach.total_candy(), 85);
        assert_eq!(reach.shards, 19_888);
        assert_eq!(reach.stop, StopReason::Shards);
    }

    #[test]
    fn mixed_reach_under_shard_ceiling() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::Full).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp1320, 10, 60);
        let budget = WalkBudget::new(2000, WalkBudget::UNBOUNDED, 2_000_000);
        let reach = growth.level_reachable_mixed(&span, Nature::Neutral, budget);
        assert_eq!(reach.level, 56);
        assert_eq!(reach.boost_candy, 1719);
        assert_eq!(reach.normal_candy, 0);
        assert_eq!(reach.shards, 1_998_660);
        assert_eq!(reach.stop, StopReason::Shards);
        assert!(growth.exp_to_target(&span, &reach) > 0);
    }

    #[test]
    fn invalid_spans_are_zero_effect() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::Full).unwrap();
        for span in [
            LevelSpan::new(GrowthCurve::Exp600, 40, 30),
            LevelSpan::new(GrowthCurve::Exp600, 0, 30),
            LevelSpan::new(GrowthCurve::Exp600, 10, 90),
        ] {
            assert_eq!(
                growth.candy_and_shard_needed(&span, Nature::Neutral),
                GrowthCost::default()
            );
            let reach = growth.level_reachable_mixed(&span, Nature::Neutral, WalkBudget::new(50, 50, 50));
            assert_eq!(reach.total_candy(), 0);
            assert_eq!(reach.level, span.src_level);
        }
    }

    #[test]
    fn forward_and_inverse_agree() {
        let tables = GrowthTables::reference();
        let growth = GrowthModel::new(&tables, BoostKind::Mini).unwrap();
        let span = LevelSpan::new(GrowthCurve::Exp1080, 3, 42);
        let cost = growth.candy_and_shard_needed(&span, Nature::Up);
        let reach = growth.level_reachable_by_candy(cost.candy, &span, Nature::Up);
        assert_eq!(reach.level, 42);
        assert!(reach.is_complete());
        assert_eq!(reach.shards, cost.shards);

        let short = growth.level_reachable_by_candy(cost.candy - 1, &span, Nature::Up);
        assert!(short.level < 42 || short.exp_in_level < reach.exp_in_level);
    }

    #[test]
    fn missing_boost_rule_fails_construction() {
        let tables = GrowthTables::reference().with_boost_rules(
            crate::tables::BoostRules::new([(BoostKind::None, BoostRule::UNIT)]).unwrap(),
        );
        assert_eq!(
            GrowthModel::new(&tables, BoostKind::Full).err(),
            Some(TablesError::MissingBoostRule(BoostKind::Full))
        );
    }
}
