//! The shared candy inventory.
//!
//! Holdings are split by who may use them: species candy per species, type
//! candy per type, and universal candy for everyone. Maps are ordered so that
//! iteration and serialized output are deterministic.

use std::collections::BTreeMap;

use crate::error::InventoryError;
use crate::items::{Denomination, DenominationCounts};
use crate::request::{CandyOwner, CreatureType, SpeciesId};

/// Type candy held for one type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TypeCandy {
    /// Small type candy, worth 4 each.
    pub s: u64,
    /// Medium type candy, worth 25 each.
    pub m: u64,
}

/// Universal candy usable by any creature.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UniversalCandy {
    /// Worth 3 each.
    pub s: u64,
    /// Worth 20 each.
    pub m: u64,
    /// Worth 100 each.
    pub l: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Inventory {
    pub species: BTreeMap<SpeciesId, u64>,
    pub types: BTreeMap<CreatureType, TypeCandy>,
    pub universal: UniversalCandy,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_species(mut self, species: SpeciesId, count: u64) -> Self {
        *self.species.entry(species).or_default() += count;
        self
    }

    #[must_use]
    pub fn with_type(mut self, creature_type: CreatureType, s: u64, m: u64) -> Self {
        let held = self.types.entry(creature_type).or_default();
        held.s += s;
        held.m += m;
        self
    }

    #[must_use]
    pub fn with_universal(mut self, s: u64, m: u64, l: u64) -> Self {
        self.universal.s += s;
        self.universal.m += m;
        self.universal.l += l;
        self
    }

    /// Units `owner` could draw on, per denomination.
    pub fn stock_for(&self, owner: &CandyOwner) -> DenominationCounts {
        let species = self.species.get(&owner.species).copied().unwrap_or_default();
        let types = self.types.get(&owner.creature_type).copied().unwrap_or_default();
        DenominationCounts::new(
            species,
            types.s,
            types.m,
            self.universal.s,
            self.universal.m,
            self.universal.l,
        )
    }

    /// Candy-equivalent value `owner` could draw on.
    pub fn value_for(&self, owner: &CandyOwner) -> u64 {
        self.stock_for(owner).value()
    }

    /// Removes `units` from the holdings visible to `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`InventoryError::Insufficient`] for the first denomination
    /// that cannot be covered; the inventory is left untouched in that case.
    pub fn withdraw(
        &mut self,
        owner: &CandyOwner,
        units: &DenominationCounts,
    ) -> Result<(), InventoryError> {
        let stock = self.stock_for(owner);
        for (denomination, requested) in units.iter() {
            let available = stock.get(denomination);
            if requested > available {
                return Err(InventoryError::Insufficient {
                    denomination,
                    requested,
                    available,
                });
            }
        }
        for (denomination, count) in units.iter() {
            if count > 0 {
                *self.slot_mut(owner, denomination) -= count;
            }
        }
        Ok(())
    }

    /// Returns `units` to the holdings visible to `owner`.
    pub fn deposit(&mut self, owner: &CandyOwner, units: &DenominationCounts) {
        for (denomination, count) in units.iter() {
            if count > 0 {
                *self.slot_mut(owner, denomination) += count;
            }
        }
    }

    /// Total units held per denomination, summed over every species and type.
    pub fn totals(&self) -> DenominationCounts {
        let (type_s, type_m) = self
            .types
            .values()
            .fold((0, 0), |(s, m), held| (s + held.s, m + held.m));
        DenominationCounts::new(
            self.species.values().sum(),
            type_s,
            type_m,
            self.universal.s,
            self.universal.m,
            self.universal.l,
        )
    }

    fn slot_mut(&mut self, owner: &CandyOwner, denomination: Denomination) -> &mut u64 {
        match denomination {
            Denomination::Species => self.species.entry(owner.species).or_default(),
            Denomination::TypeS => &mut self.types.entry(owner.creature_type).or_default().s,
            Denomination::TypeM => &mut self.types.entry(owner.creature_type).or_default().m,
            Denomination::UniversalS => &mut self.universal.s,
            Denomination::UniversalM => &mut self.universal.m,
            Denomination::UniversalL => &mut self.universal.l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner() -> CandyOwner {
        CandyOwner::new(SpeciesId(1), CreatureType::Grass)
    }

    fn inventory() -> Inventory {
        Inventory::new()
            .with_species(SpeciesId(1), 30)
            .with_species(SpeciesId(4), 99)
            .with_type(CreatureType::Grass, 5, 2)
            .with_type(CreatureType::Fire, 7, 7)
            .with_universal(10, 3, 1)
    }

    #[test]
    fn stock_is_scoped_to_owner() {
        let stock = inventory().stock_for(&owner());
        assert_eq!(stock, DenominationCounts::new(30, 5, 2, 10, 3, 1));
        assert_eq!(inventory().value_for(&owner()), 30 + 20 + 50 + 30 + 60 + 100);

        let stranger = CandyOwner::new(SpeciesId(7), CreatureType::Ice);
        assert_eq!(
            inventory().stock_for(&stranger),
            DenominationCounts::new(0, 0, 0, 10, 3, 1)
        );
    }

    #[test]
    fn withdraw_then_deposit_restores() {
        let mut inv = inventory();
        let units = DenominationCounts::new(30, 1, 2, 4, 0, 1);
        inv.withdraw(&owner(), &units).unwrap();
        assert_eq!(inv.stock_for(&owner()), DenominationCounts::new(0, 4, 0, 6, 3, 0));
        assert_eq!(inv.types[&CreatureType::Fire], TypeCandy { s: 7, m: 7 });

        inv.deposit(&owner(), &units);
        assert_eq!(inv, inventory());
    }

    #[test]
    fn overdraw_is_rejected_without_change() {
        let mut inv = inventory();
        let err = inv
            .withdraw(&owner(), &DenominationCounts::new(1, 0, 3, 0, 0, 0))
            .unwrap_err();
        assert_eq!(
            err,
            InventoryError::Insufficient {
                denomination: Denomination::TypeM,
                requested: 3,
                available: 2,
            }
        );
        assert_eq!(inv, inventory());
    }

    #[test]
    fn totals_sum_every_holder() {
        assert_eq!(inventory().totals(), DenominationCounts::new(129, 12, 9, 10, 3, 1));
    }
}
