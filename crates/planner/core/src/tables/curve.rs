//! Experience curve families and their cumulative tables.

use crate::error::TablesError;

/// Experience curve family, identified by its `exp_type` tag.
///
/// Each family owns a separate table: rounding drift accumulates differently
/// per family at high levels, so the larger families are not a multiple of
/// the base one.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub enum GrowthCurve {
    #[strum(to_string = "600")]
    Exp600,
    #[strum(to_string = "900")]
    Exp900,
    #[strum(to_string = "1080")]
    Exp1080,
    #[strum(to_string = "1320")]
    Exp1320,
}

impl GrowthCurve {
    /// Returns the numeric tag used by the source data.
    pub const fn exp_type(self) -> u16 {
        match self {
            Self::Exp600 => 600,
            Self::Exp900 => 900,
            Self::Exp1080 => 1080,
            Self::Exp1320 => 1320,
        }
    }
}

impl TryFrom<u16> for GrowthCurve {
    type Error = TablesError;

    fn try_from(exp_type: u16) -> Result<Self, Self::Error> {
        match exp_type {
            600 => Ok(Self::Exp600),
            900 => Ok(Self::Exp900),
            1080 => Ok(Self::Exp1080),
            1320 => Ok(Self::Exp1320),
            other => Err(TablesError::UnknownCurve(other)),
        }
    }
}

impl From<GrowthCurve> for u16 {
    fn from(curve: GrowthCurve) -> Self {
        curve.exp_type()
    }
}

/// Cumulative experience by level for one curve family.
///
/// `cumulative[level]` is the total experience needed to reach `level` from
/// level 1. Index 0 is unused and always zero.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpTable {
    curve: GrowthCurve,
    cumulative: Vec<u64>,
}

impl ExpTable {
    /// Builds a table from per-level costs, where `level_deltas[i]` is the
    /// experience needed to go from level `i + 1` to level `i + 2`.
    ///
    /// # Errors
    ///
    /// Returns an error if the table is empty, too long for a `u8` level, or
    /// contains a zero cost.
    pub fn from_level_deltas(curve: GrowthCurve, level_deltas: &[u64]) -> Result<Self, TablesError> {
        if level_deltas.is_empty() {
            return Err(TablesError::EmptyCurve(curve));
        }
        if level_deltas.len() >= usize::from(u8::MAX) {
            return Err(TablesError::LevelCapTooLarge(level_deltas.len() + 1));
        }
        if let Some(index) = level_deltas.iter().position(|&cost| cost == 0) {
            return Err(TablesError::ZeroLevelCost {
                curve,
                level: (index + 1) as u8,
            });
        }
        Ok(Self::from_level_deltas_unchecked(curve, level_deltas))
    }

    pub(crate) fn from_level_deltas_unchecked(curve: GrowthCurve, level_deltas: &[u64]) -> Self {
        let mut cumulative = Vec::with_capacity(level_deltas.len() + 2);
        cumulative.push(0);
        cumulative.push(0);
        let mut total = 0u64;
        for cost in level_deltas {
            total += cost;
            cumulative.push(total);
        }
        Self { curve, cumulative }
    }

    pub fn curve(&self) -> GrowthCurve {
        self.curve
    }

    /// Highest level this table can express.
    pub fn max_level(&self) -> u8 {
        (self.cumulative.len() - 1) as u8
    }

    /// Number of level-ups the table covers.
    pub fn level_ups(&self) -> usize {
        self.cumulative.len() - 2
    }

    /// Total experience needed to reach `level` from level 1.
    pub fn total_exp(&self, level: u8) -> Option<u64> {
        if level == 0 {
            return None;
        }
        self.cumulative.get(usize::from(level)).copied()
    }

    /// Experience needed to go from `level` to `level + 1`.
    pub fn level_cost(&self, level: u8) -> Option<u64> {
        let next = level.checked_add(1)?;
        Some(self.total_exp(next)? - self.total_exp(level)?)
    }

    /// Experience between two levels; zero for invalid or already-reached ranges.
    pub fn exp_delta(&self, from: u8, to: u8) -> u64 {
        match (self.total_exp(from), self.total_exp(to)) {
            (Some(a), Some(b)) if b > a => b - a,
            _ => 0,
        }
    }

    /// Per-level costs, the inverse of [`Self::from_level_deltas`].
    pub fn level_deltas(&self) -> Vec<u64> {
        self.cumulative[1..]
            .windows(2)
            .map(|pair| pair[1] - pair[0])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> ExpTable {
        ExpTable::from_level_deltas(GrowthCurve::Exp600, &[10, 20, 30]).unwrap()
    }

    #[test]
    fn curve_tags_round_trip() {
        assert_eq!(GrowthCurve::try_from(1080), Ok(GrowthCurve::Exp1080));
        assert_eq!(u16::from(GrowthCurve::Exp1320), 1320);
        assert_eq!(GrowthCurve::Exp900.to_string(), "900");
        assert_eq!(
            GrowthCurve::try_from(601),
            Err(TablesError::UnknownCurve(601))
        );
    }

    #[test]
    fn cumulative_lookup() {
        let table = small_table();
        assert_eq!(table.max_level(), 4);
        assert_eq!(table.level_ups(), 3);
        assert_eq!(table.total_exp(1), Some(0));
        assert_eq!(table.total_exp(4), Some(60));
        assert_eq!(table.total_exp(5), None);
        assert_eq!(table.level_cost(2), Some(20));
        assert_eq!(table.level_cost(4), None);
        assert_eq!(table.level_deltas(), vec![10, 20, 30]);
    }

    #[test]
    fn exp_delta_is_zero_for_invalid_ranges() {
        let table = small_table();
        assert_eq!(table.exp_delta(1, 4), 60);
        assert_eq!(table.exp_delta(3, 3), 0);
        assert_eq!(table.exp_delta(4, 2), 0);
        assert_eq!(table.exp_delta(0, 3), 0);
        assert_eq!(table.exp_delta(2, 9), 0);
    }

    #[test]
    fn rejects_degenerate_tables() {
        assert_eq!(
            ExpTable::from_level_deltas(GrowthCurve::Exp900, &[]),
            Err(TablesError::EmptyCurve(GrowthCurve::Exp900))
        );
        assert_eq!(
            ExpTable::from_level_deltas(GrowthCurve::Exp900, &[5, 0]),
            Err(TablesError::ZeroLevelCost {
                curve: GrowthCurve::Exp900,
                level: 2
            })
        );
    }
}
