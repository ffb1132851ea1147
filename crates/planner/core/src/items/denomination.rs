//! Candy denominations and per-denomination counters.

use core::ops::{Index, IndexMut};

/// Who may consume a denomination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DenominationScope {
    /// Only the matching species.
    Species,
    /// Any creature of the matching type.
    Type,
    /// Any creature.
    Universal,
}

/// One of the six candy denominations.
///
/// Variants are declared in consumption priority order.
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
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Denomination {
    Species,
    TypeS,
    TypeM,
    UniversalS,
    UniversalM,
    UniversalL,
}

impl Denomination {
    /// All denominations, highest consumption priority first.
    pub const PRIORITY: [Denomination; 6] = [
        Denomination::Species,
        Denomination::TypeS,
        Denomination::TypeM,
        Denomination::UniversalS,
        Denomination::UniversalM,
        Denomination::UniversalL,
    ];

    /// Face value in base-candy units.
    pub const fn value(self) -> u64 {
        match self {
            Self::Species => 1,
            Self::TypeS => 4,
            Self::TypeM => 25,
            Self::UniversalS => 3,
            Self::UniversalM => 20,
            Self::UniversalL => 100,
        }
    }

    /// Splittable units are never taken past the remaining need; atomic units
    /// are taken whole and may overshoot it.
    pub const fn is_splittable(self) -> bool {
        matches!(self, Self::Species | Self::TypeS | Self::UniversalS)
    }

    pub const fn is_atomic(self) -> bool {
        !self.is_splittable()
    }

    pub const fn scope(self) -> DenominationScope {
        match self {
            Self::Species => DenominationScope::Species,
            Self::TypeS | Self::TypeM => DenominationScope::Type,
            Self::UniversalS | Self::UniversalM | Self::UniversalL => DenominationScope::Universal,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A count per denomination: a stock, a usage, or a delta between them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CountsRepr", into = "CountsRepr"))]
pub struct DenominationCounts([u64; 6]);

impl DenominationCounts {
    pub const ZERO: Self = Self([0; 6]);

    pub const fn new(
        species: u64,
        type_s: u64,
        type_m: u64,
        universal_s: u64,
        universal_m: u64,
        universal_l: u64,
    ) -> Self {
        Self([species, type_s, type_m, universal_s, universal_m, universal_l])
    }

    pub fn get(&self, denomination: Denomination) -> u64 {
        self.0[denomination.index()]
    }

    pub fn set(&mut self, denomination: Denomination, count: u64) {
        self.0[denomination.index()] = count;
    }

    /// Candy-equivalent value of all counted units.
    pub fn value(&self) -> u64 {
        self.iter().map(|(d, count)| d.value() * count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&count| count == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Denomination, u64)> + '_ {
        Denomination::PRIORITY.into_iter().map(|d| (d, self.get(d)))
    }

    /// Element-wise `self + other`.
    #[must_use]
    pub fn plus(&self, other: &Self) -> Self {
        let mut out = *self;
        for d in Denomination::PRIORITY {
            out[d] += other.get(d);
        }
        out
    }

    /// Element-wise `self - other`, or `None` if any count would go negative.
    pub fn checked_minus(&self, other: &Self) -> Option<Self> {
        let mut out = *self;
        for d in Denomination::PRIORITY {
            out[d] = self.get(d).checked_sub(other.get(d))?;
        }
        Some(out)
    }

    /// True if every count fits within `stock`.
    pub fn fits_within(&self, stock: &Self) -> bool {
        self.iter().all(|(d, count)| count <= stock.get(d))
    }
}

impl Index<Denomination> for DenominationCounts {
    type Output = u64;

    fn index(&self, denomination: Denomination) -> &u64 {
        &self.0[denomination.index()]
    }
}

impl IndexMut<Denomination> for DenominationCounts {
    fn index_mut(&mut self, denomination: Denomination) -> &mut u64 {
        &mut self.0[denomination.index()]
    }
}

/// Named-field wire form of [`DenominationCounts`].
#[cfg(feature = "serde")]
#[derive(Clone, Copy, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct CountsRepr {
    species: u64,
    type_s: u64,
    type_m: u64,
    universal_s: u64,
    universal_m: u64,
    universal_l: u64,
}

#[cfg(feature = "serde")]
impl From<CountsRepr> for DenominationCounts {
    fn from(repr: CountsRepr) -> Self {
        Self::new(
            repr.species,
            repr.type_s,
            repr.type_m,
            repr.universal_s,
            repr.universal_m,
            repr.universal_l,
        )
    }
}

#[cfg(feature = "serde")]
impl From<DenominationCounts> for CountsRepr {
    fn from(counts: DenominationCounts) -> Self {
        use Denomination::*;
        Self {
            species: counts[Species],
            type_s: counts[TypeS],
            type_m: counts[TypeM],
            universal_s: counts[UniversalS],
            universal_m: counts[UniversalM],
            universal_l: counts[UniversalL],
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn priority_matches_declaration_order() {
        let declared: Vec<_> = Denomination::iter().collect();
        assert_eq!(declared, Denomination::PRIORITY.to_vec());
    }

    #[test]
    fn splittable_and_scope() {
        assert!(Denomination::TypeS.is_splittable());
        assert!(Denomination::TypeM.is_atomic());
        assert!(Denomination::UniversalL.is_atomic());
        assert_eq!(Denomination::TypeM.scope(), DenominationScope::Type);
        assert_eq!(Denomination::Species.scope(), DenominationScope::Species);
    }

    #[test]
    fn counts_arithmetic() {
        let stock = DenominationCounts::new(10, 2, 1, 5, 1, 1);
        assert_eq!(stock.value(), 10 + 8 + 25 + 15 + 20 + 100);

        let used = DenominationCounts::new(4, 2, 0, 1, 0, 0);
        let left = stock.checked_minus(&used).unwrap();
        assert_eq!(left, DenominationCounts::new(6, 0, 1, 4, 1, 1));
        assert_eq!(left.plus(&used), stock);
        assert!(used.fits_within(&stock));
        assert!(stock.checked_minus(&DenominationCounts::new(11, 0, 0, 0, 0, 0)).is_none());
    }
}
