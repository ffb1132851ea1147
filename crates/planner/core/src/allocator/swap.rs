//! Phase 2: trade atomic overshoot for splittable units.
//!
//! Rows are visited from lowest to highest priority. A row whose surplus is
//! 3 or more tries, in order:
//!
//! 1. [`trim`]: hand back atomic units it does not need at all
//! 2. [`refill`]: hand back one atomic or type-S unit and cover the gap with
//!    splittable units from the pool
//! 3. [`exchange`]: give one atomic unit to another row in return for some
//!    of that row's splittable units, trying higher-priority rows before
//!    lower-priority ones
//!
//! Candy counts never change here, only the denomination breakdown.

use tracing::trace;

use crate::error::InventoryError;
use crate::inventory::Inventory;
use crate::items::{Denomination, DenominationCounts, ItemUsage, splittable_in_range};
use crate::request::CandyOwner;

/// Largest surplus a row is left with when a swap succeeds.
pub const SURPLUS_TOLERANCE: u64 = 2;

/// Atomic denominations, lowest priority first.
const ATOMIC_RELEASE_ORDER: [Denomination; 3] = [
    Denomination::UniversalL,
    Denomination::UniversalM,
    Denomination::TypeM,
];

/// Units [`refill`] may hand back. A type-S unit closing a remainder of 1
/// leaves a surplus of 3 that only leftover stock can bring down.
const REFILL_RELEASE_ORDER: [Denomination; 4] = [
    Denomination::UniversalL,
    Denomination::UniversalM,
    Denomination::TypeM,
    Denomination::TypeS,
];

/// Where released units go and replacement units come from.
pub(super) trait CandyPool {
    fn stock_for(&self, slot: usize, owner: &CandyOwner) -> DenominationCounts;

    fn settle(
        &mut self,
        slot: usize,
        owner: &CandyOwner,
        released: &DenominationCounts,
        taken: &DenominationCounts,
    ) -> Result<(), InventoryError>;
}

/// Committed rows trade against the shared working inventory.
impl CandyPool for Inventory {
    fn stock_for(&self, _slot: usize, owner: &CandyOwner) -> DenominationCounts {
        Inventory::stock_for(self, owner)
    }

    fn settle(
        &mut self,
        _slot: usize,
        owner: &CandyOwner,
        released: &DenominationCounts,
        taken: &DenominationCounts,
    ) -> Result<(), InventoryError> {
        self.deposit(owner, released);
        self.withdraw(owner, taken)
    }
}

/// Theoretical rows trade against what each creature saw at its own turn,
/// minus what its row already claims.
#[derive(Clone, Debug, Default)]
pub(super) struct SnapshotPools(Vec<DenominationCounts>);

impl SnapshotPools {
    pub(super) fn new(pools: Vec<DenominationCounts>) -> Self {
        Self(pools)
    }
}

impl CandyPool for SnapshotPools {
    fn stock_for(&self, slot: usize, _owner: &CandyOwner) -> DenominationCounts {
        self.0.get(slot).copied().unwrap_or_default()
    }

    fn settle(
        &mut self,
        slot: usize,
        _owner: &CandyOwner,
        released: &DenominationCounts,
        taken: &DenominationCounts,
    ) -> Result<(), InventoryError> {
        let Some(pool) = self.0.get_mut(slot) else {
            return Ok(());
        };
        let refilled = pool.plus(released);
        for (denomination, requested) in taken.iter() {
            let available = refilled.get(denomination);
            if requested > available {
                return Err(InventoryError::Insufficient {
                    denomination,
                    requested,
                    available,
                });
            }
        }
        *pool = refilled.checked_minus(taken).unwrap_or(refilled);
        Ok(())
    }
}

/// One row taking part in the swap pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct Row {
    /// Index of the creature in priority order.
    pub slot: usize,
    pub owner: CandyOwner,
    pub usage: ItemUsage,
}

/// Releases atomic units worth no more than the surplus.
pub fn trim(usage: &ItemUsage) -> ItemUsage {
    let mut items = usage.items;
    let mut surplus = usage.surplus();
    for d in ATOMIC_RELEASE_ORDER {
        while items[d] > 0 && d.value() <= surplus {
            items[d] -= 1;
            surplus -= d.value();
        }
    }
    usage.with_items(items)
}

/// Releases one atomic or type-S unit and covers the gap with splittable
/// units from `pool`, provided the row ends within [`SURPLUS_TOLERANCE`].
pub fn refill(usage: &ItemUsage, pool: &DenominationCounts) -> Option<ItemUsage> {
    let supply = usage.total_supply();
    let need = usage.total_candy_count();
    REFILL_RELEASE_ORDER.into_iter().find_map(|d| {
        if usage.items[d] == 0 {
            return None;
        }
        let deficit = (need + d.value()).saturating_sub(supply);
        let cover = splittable_in_range(deficit..=deficit + SURPLUS_TOLERANCE, pool)?;
        let mut items = usage.items;
        items[d] -= 1;
        Some(usage.with_items(items.plus(&cover)))
    })
}

/// Moves one atomic unit from `giver` to `receiver` and some of
/// `receiver`'s splittable units back to `giver`.
///
/// Applied only if both rows stay covered with a surplus of at most
/// [`SURPLUS_TOLERANCE`]. The pair's combined supply is unchanged and each
/// unit moves only to a creature allowed to eat it. Priority plays no part:
/// the swap pass offers both directions.
pub fn exchange(
    giver: &ItemUsage,
    giver_owner: &CandyOwner,
    receiver: &ItemUsage,
    receiver_owner: &CandyOwner,
) -> Option<(ItemUsage, ItemUsage)> {
    if !receiver.is_covered() {
        return None;
    }
    let mut giftable = DenominationCounts::ZERO;
    for d in Denomination::PRIORITY {
        if d.is_splittable() && receiver_owner.can_share_with(giver_owner, d) {
            giftable[d] = receiver.items[d];
        }
    }

    ATOMIC_RELEASE_ORDER.into_iter().find_map(|d| {
        if giver.items[d] == 0 || !giver_owner.can_share_with(receiver_owner, d) {
            return None;
        }
        let value = d.value();
        // `giver` must end covered, `receiver` must not end short.
        let giver_min = (giver.total_candy_count() + value).saturating_sub(giver.total_supply());
        let receiver_max = receiver.surplus() + value;
        let lo = giver_min.max(receiver_max.saturating_sub(SURPLUS_TOLERANCE));
        let hi = (giver_min + SURPLUS_TOLERANCE).min(receiver_max);
        let gift = splittable_in_range(lo..=hi, &giftable)?;

        let mut giver_items = giver.items;
        giver_items[d] -= 1;
        let mut receiver_items = receiver.items;
        receiver_items[d] += 1;
        let receiver_items = receiver_items.checked_minus(&gift)?;
        Some((
            giver.with_items(giver_items.plus(&gift)),
            receiver.with_items(receiver_items),
        ))
    })
}

/// Runs the swap pass over `rows`, settling released and taken units with
/// `pool`. Returns how many rows changed composition.
pub(super) fn rebalance<P: CandyPool>(
    rows: &mut [Row],
    pool: &mut P,
    label: &'static str,
) -> Result<usize, InventoryError> {
    let mut changed = 0;
    for row in (0..rows.len()).rev() {
        if rows[row].usage.surplus() <= SURPLUS_TOLERANCE {
            continue;
        }
        let before = rows[row].usage;

        let trimmed = trim(&before);
        settle(pool, &rows[row], &before, &trimmed)?;
        rows[row].usage = trimmed;

        if trimmed.surplus() > SURPLUS_TOLERANCE {
            let stock = pool.stock_for(rows[row].slot, &rows[row].owner);
            if let Some(refilled) = refill(&trimmed, &stock) {
                settle(pool, &rows[row], &trimmed, &refilled)?;
                rows[row].usage = refilled;
            }
        }

        if rows[row].usage.surplus() > SURPLUS_TOLERANCE {
            // Higher-priority partners first, then lower-priority ones.
            let partners = (0..row).chain(row + 1..rows.len());
            for partner in partners {
                let traded = exchange(
                    &rows[row].usage,
                    &rows[row].owner,
                    &rows[partner].usage,
                    &rows[partner].owner,
                );
                if let Some((giver_usage, receiver_usage)) = traded {
                    trace!(
                        row = label,
                        giver = rows[row].slot,
                        receiver = rows[partner].slot,
                        "exchanged atomic unit for splittable units"
                    );
                    rows[row].usage = giver_usage;
                    rows[partner].usage = receiver_usage;
                    break;
                }
            }
        }

        if rows[row].usage != before {
            trace!(
                row = label,
                slot = rows[row].slot,
                surplus_before = before.surplus(),
                surplus_after = rows[row].usage.surplus(),
                "rebalanced row"
            );
            changed += 1;
        }
    }
    Ok(changed)
}

fn settle<P: CandyPool>(
    pool: &mut P,
    row: &Row,
    before: &ItemUsage,
    after: &ItemUsage,
) -> Result<(), InventoryError> {
    let (released, taken) = before.diff(after);
    if released.is_empty() && taken.is_empty() {
        return Ok(());
    }
    pool.settle(row.slot, &row.owner, &released, &taken)
}
