//! Reference growth data set.
//!
//! Per-level experience costs for each curve family, base shard cost per
//! candy, candy experience brackets, and boost multipliers. Curves above the
//! base family are rounded per level, so they are stored in full.

use super::{
    BoostRule, BoostRules, CandyExpBracket, CandyExpTable, ExpTable, GrowthCurve, GrowthTables,
    ShardTable,
};
use crate::config::BoostKind;

/// Highest level in the reference data.
pub const REFERENCE_MAX_LEVEL: u8 = 65;

/// Experience from level `i + 1` to `i + 2`, curve 600.
const EXP_600: [u64; 64] = [
    54, 71, 108, 128, 164, 202, 244, 274, 315, 345, 376, 407,
    419, 429, 440, 454, 469, 483, 497, 515, 537, 558, 579, 600,
    622, 643, 665, 686, 708, 729, 748, 766, 785, 803, 821, 839,
    857, 875, 893, 910, 928, 945, 963, 980, 997, 1015, 1032, 1049,
    1066, 1074, 1360, 1646, 1932, 2218, 2504, 2790, 3076, 3362, 3648, 3934,
    4220, 4506, 4792, 5078,
];

/// Experience from level `i + 1` to `i + 2`, curve 900.
const EXP_900: [u64; 64] = [
    81, 107, 162, 192, 246, 303, 366, 411, 473, 518, 564, 611,
    629, 644, 660, 681, 704, 725, 746, 773, 806, 837, 869, 900,
    933, 965, 998, 1029, 1062, 1094, 1122, 1149, 1178, 1205, 1232, 1259,
    1286, 1313, 1340, 1365, 1392, 1418, 1445, 1470, 1496, 1523, 1548, 1574,
    1599, 1611, 2040, 2469, 2898, 3327, 3756, 4185, 4614, 5043, 5472, 5901,
    6330, 6759, 7188, 7617,
];

/// Experience from level `i + 1` to `i + 2`, curve 1080.
const EXP_1080: [u64; 64] = [
    97, 128, 194, 230, 295, 364, 439, 493, 567, 621, 677, 733,
    754, 772, 792, 817, 844, 869, 895, 927, 967, 1004, 1042, 1080,
    1120, 1157, 1197, 1235, 1274, 1312, 1346, 1379, 1413, 1445, 1478, 1510,
    1543, 1575, 1607, 1638, 1670, 1701, 1733, 1764, 1795, 1827, 1858, 1888,
    1919, 1933, 2448, 2963, 3478, 3992, 4507, 5022, 5537, 6052, 6566, 7081,
    7596, 8111, 8626, 9140,
];

/// Experience from level `i + 1` to `i + 2`, curve 1320.
const EXP_1320: [u64; 64] = [
    119, 156, 238, 282, 361, 444, 537, 603, 693, 759, 827, 895,
    922, 944, 968, 999, 1032, 1063, 1093, 1133, 1181, 1228, 1274, 1320,
    1368, 1415, 1463, 1509, 1558, 1604, 1646, 1685, 1727, 1767, 1806, 1846,
    1885, 1925, 1965, 2002, 2042, 2079, 2119, 2156, 2193, 2233, 2270, 2308,
    2345, 2363, 2992, 3621, 4250, 4880, 5509, 6138, 6767, 7396, 8026, 8655,
    9284, 9913, 10542, 11172,
];

/// Base shards per candy spent at level `i + 1`.
const SHARDS_PER_CANDY: [u64; 65] = [
    14, 18, 22, 27, 30, 34, 39, 44, 48, 50, 52, 53,
    56, 59, 62, 66, 68, 71, 74, 78, 81, 85, 88, 92,
    95, 100, 105, 111, 117, 122, 126, 130, 136, 143, 151, 160,
    167, 174, 184, 192, 201, 211, 221, 227, 236, 250, 264, 279,
    295, 303, 321, 339, 357, 375, 393, 411, 429, 447, 465, 483,
    501, 519, 537, 555, 573,
];

pub(crate) const CANDY_EXP_BRACKETS: [CandyExpBracket; 3] = [
    CandyExpBracket::new(1, 41, 35, 29),
    CandyExpBracket::new(25, 35, 30, 25),
    CandyExpBracket::new(30, 30, 25, 21),
];

pub(crate) const BOOST_RULES: [(BoostKind, BoostRule); 3] = [
    (BoostKind::None, BoostRule::new(1, 1)),
    (BoostKind::Mini, BoostRule::new(2, 4)),
    (BoostKind::Full, BoostRule::new(2, 5)),
];

pub(crate) fn curve_deltas(curve: GrowthCurve) -> &'static [u64] {
    match curve {
        GrowthCurve::Exp600 => &EXP_600,
        GrowthCurve::Exp900 => &EXP_900,
        GrowthCurve::Exp1080 => &EXP_1080,
        GrowthCurve::Exp1320 => &EXP_1320,
    }
}

impl GrowthTables {
    /// Returns the built-in reference data set.
    pub fn reference() -> Self {
        use strum::IntoEnumIterator;

        let curves = GrowthCurve::iter()
            .map(|curve| {
                (
                    curve,
                    ExpTable::from_level_deltas_unchecked(curve, curve_deltas(curve)),
                )
            })
            .collect();
        Self::from_parts_unchecked(
            curves,
            ShardTable::new(SHARDS_PER_CANDY.to_vec()),
            CandyExpTable::from_brackets_unchecked(CANDY_EXP_BRACKETS.to_vec()),
            BoostRules::from_rules_unchecked(BOOST_RULES),
        )
    }
}
