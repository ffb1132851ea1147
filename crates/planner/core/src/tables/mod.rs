//! Static growth data consumed by the growth arithmetic.
//!
//! [`GrowthTables`] bundles the per-curve cumulative experience tables, the
//! shard-cost table, the candy experience brackets, and the boost rules. All
//! of it is read-only once built; [`GrowthTables::new`] validates the parts so
//! that no planning run can observe an inconsistent table.
mod boost;
mod curve;
mod rates;
mod reference;

use std::collections::BTreeMap;

pub use boost::{BoostRule, BoostRules};
pub use curve::{ExpTable, GrowthCurve};
pub use rates::{CandyExpBracket, CandyExpTable, Nature, ShardTable};
pub use reference::REFERENCE_MAX_LEVEL;

use crate::error::TablesError;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GrowthTables {
    curves: BTreeMap<GrowthCurve, ExpTable>,
    shards: ShardTable,
    candy_exp: CandyExpTable,
    boost: BoostRules,
    max_level: u8,
}

impl GrowthTables {
    /// Validates and assembles a table set.
    ///
    /// # Errors
    ///
    /// - [`TablesError::NoCurves`] / [`TablesError::DuplicateCurve`]
    /// - [`TablesError::CurveLengthMismatch`] if curves disagree on the level cap
    /// - [`TablesError::ShardTableTooShort`] if some reachable level has no shard cost
    pub fn new(
        curves: Vec<ExpTable>,
        shards: ShardTable,
        candy_exp: CandyExpTable,
        boost: BoostRules,
    ) -> Result<Self, TablesError> {
        let expected = curves.first().ok_or(TablesError::NoCurves)?.level_ups();

        let mut by_curve = BTreeMap::new();
        for table in curves {
            if table.level_ups() != expected {
                return Err(TablesError::CurveLengthMismatch {
                    curve: table.curve(),
                    levels: table.level_ups(),
                    expected,
                });
            }
            let curve = table.curve();
            if by_curve.insert(curve, table).is_some() {
                return Err(TablesError::DuplicateCurve(curve));
            }
        }

        let max_level = expected + 1;
        if shards.len() < max_level {
            return Err(TablesError::ShardTableTooShort {
                actual: shards.len(),
                expected: max_level,
            });
        }

        Ok(Self::from_parts_unchecked(by_curve, shards, candy_exp, boost))
    }

    fn from_parts_unchecked(
        curves: BTreeMap<GrowthCurve, ExpTable>,
        shards: ShardTable,
        candy_exp: CandyExpTable,
        boost: BoostRules,
    ) -> Self {
        let max_level = curves
            .values()
            .next()
            .map(ExpTable::max_level)
            .unwrap_or_default();
        Self {
            curves,
            shards,
            candy_exp,
            boost,
            max_level,
        }
    }

    /// Highest level any curve can express.
    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    pub fn curve(&self, curve: GrowthCurve) -> Option<&ExpTable> {
        self.curves.get(&curve)
    }

    pub fn has_curve(&self, curve: GrowthCurve) -> bool {
        self.curves.contains_key(&curve)
    }

    pub fn curves(&self) -> impl Iterator<Item = &ExpTable> {
        self.curves.values()
    }

    pub fn shards(&self) -> &ShardTable {
        &self.shards
    }

    pub fn candy_exp(&self) -> &CandyExpTable {
        &self.candy_exp
    }

    pub fn boost_rules(&self) -> &BoostRules {
        &self.boost
    }

    /// Returns a copy with the boost rules replaced.
    #[must_use]
    pub fn with_boost_rules(mut self, boost: BoostRules) -> Self {
        self.boost = boost;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brackets() -> CandyExpTable {
        CandyExpTable::new(vec![CandyExpBracket::new(1, 12, 10, 8)]).unwrap()
    }

    fn rules() -> BoostRules {
        BoostRules::new([(crate::config::BoostKind::Full, BoostRule::new(2, 5))]).unwrap()
    }

    #[test]
    fn rejects_mismatched_curves() {
        let curves = vec![
            ExpTable::from_level_deltas(GrowthCurve::Exp600, &[10, 20]).unwrap(),
            ExpTable::from_level_deltas(GrowthCurve::Exp900, &[15]).unwrap(),
        ];
        let result = GrowthTables::new(curves, ShardTable::new(vec![1, 2, 3]), brackets(), rules());
        assert_eq!(
            result,
            Err(TablesError::CurveLengthMismatch {
                curve: GrowthCurve::Exp900,
                levels: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn rejects_short_shard_table() {
        let curves = vec![ExpTable::from_level_deltas(GrowthCurve::Exp600, &[10, 20]).unwrap()];
        let result = GrowthTables::new(curves, ShardTable::new(vec![1, 2]), brackets(), rules());
        assert_eq!(
            result,
            Err(TablesError::ShardTableTooShort {
                actual: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn rejects_duplicate_and_missing_curves() {
        let curves = vec![
            ExpTable::from_level_deltas(GrowthCurve::Exp600, &[10]).unwrap(),
            ExpTable::from_level_deltas(GrowthCurve::Exp600, &[11]).unwrap(),
        ];
        assert_eq!(
            GrowthTables::new(curves, ShardTable::new(vec![1, 2]), brackets(), rules()),
            Err(TablesError::DuplicateCurve(GrowthCurve::Exp600))
        );
        assert_eq!(
            GrowthTables::new(Vec::new(), ShardTable::new(vec![1]), brackets(), rules()),
            Err(TablesError::NoCurves)
        );
    }

    #[test]
    fn reference_exposes_all_curves() {
        let tables = GrowthTables::reference();
        assert_eq!(tables.max_level(), REFERENCE_MAX_LEVEL);
        assert_eq!(tables.curves().count(), 4);
        assert!(tables.has_curve(GrowthCurve::Exp1320));
    }
}
