//! Phase 1: per-creature allocation in priority order.

use tracing::debug;

use super::budget::GlobalBudget;
use crate::diagnosis::ResourceSnapshot;
use crate::error::InventoryError;
use crate::growth::{GrowthModel, LevelSpan, Reach, WalkBudget};
use crate::inventory::Inventory;
use crate::items::{DenominationCounts, ItemUsage, best_fit};
use crate::request::{CandyOwner, LevelUpRequest};
use crate::tables::Nature;

/// Boost and normal candy a row may spend, before any walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(super) struct Lanes {
    pub boost: u64,
    pub normal: u64,
}

impl Lanes {
    /// Boost fills the cap first; normal candy only takes what room is left.
    fn capped(self, cap: u64) -> Self {
        let boost = self.boost.min(cap);
        Self {
            boost,
            normal: self.normal.min(cap - boost),
        }
    }
}

/// What one creature asked for and what it was given.
#[derive(Clone, Debug)]
pub(super) struct Allocation {
    pub owner: CandyOwner,
    pub span: LevelSpan,
    pub snapshot: ResourceSnapshot,
    /// Units visible to this creature when its turn came.
    pub stock: DenominationCounts,
    /// Budget-free demand, bounded by the creature's own cap.
    pub declared: Reach,
    pub target: ItemUsage,
    pub candy_target: Option<ItemUsage>,
    pub reachable: ItemUsage,
    /// The committed walk.
    pub reach: Reach,
}

/// Allocates one request and commits its reachable row.
///
/// ## Steps
/// 1. Snapshot the global budgets and the creature's visible stock
/// 2. Derive the declared boost/normal demand (cap-bounded when capped)
/// 3. Build the target row (and the candy-target row when capped) under the
///    remaining global budgets
/// 4. Clamp the declared lanes by budgets and visible stock, walk them under
///    the shard budget, and pick units for the candy actually eaten
/// 5. Withdraw those units and spend the budgets
pub(super) fn allocate(
    model: &GrowthModel<'_>,
    request: &LevelUpRequest,
    inventory: &mut Inventory,
    budget: &mut GlobalBudget,
) -> Result<Allocation, InventoryError> {
    // 1. Snapshot
    let owner = request.owner();
    let span = request.span();
    let snapshot = budget.snapshot();
    let stock = inventory.stock_for(&owner);

    // 2. Declared demand
    let requested = if model.boost_kind().is_active() {
        request.boost_candy_requested
    } else {
        0
    };
    let full = model.mixed_candy_and_shard_needed(&span, request.nature, requested);
    let full_lanes = Lanes {
        boost: full.boost_candy,
        normal: full.normal_candy,
    };
    let declared_lanes = request
        .candy_count_cap
        .map_or(full_lanes, |cap| full_lanes.capped(cap));
    let declared = walk_lanes(model, &span, request.nature, declared_lanes, WalkBudget::UNBOUNDED);

    // 3. Theoretical rows
    let theoretical = |lanes: Lanes| {
        let lanes = Lanes {
            boost: lanes.boost.min(budget.boost_remaining()),
            ..lanes
        };
        let reach = walk_lanes(model, &span, request.nature, lanes, budget.shards_remaining());
        usage_for(&reach, &stock)
    };
    let target = theoretical(full_lanes);
    let candy_target = request.candy_count_cap.map(|_| theoretical(declared_lanes));

    // 4. Reachable row
    let available = stock.value();
    let boost = declared_lanes
        .boost
        .min(budget.boost_remaining())
        .min(available);
    let lanes = Lanes {
        boost,
        normal: declared_lanes.normal.min(available - boost),
    };
    let reach = walk_lanes(model, &span, request.nature, lanes, budget.shards_remaining());
    let reachable = usage_for(&reach, &stock);

    // 5. Commit
    inventory.withdraw(&owner, &reachable.items)?;
    budget.spend(reach.boost_candy, reach.shards);

    debug!(
        request = %request.id,
        reached_level = reach.level,
        boost = reach.boost_candy,
        normal = reach.normal_candy,
        shards = reach.shards,
        stop = %reach.stop,
        "committed allocation"
    );

    Ok(Allocation {
        owner,
        span,
        snapshot,
        stock,
        declared,
        target,
        candy_target,
        reachable,
        reach,
    })
}

fn walk_lanes(
    model: &GrowthModel<'_>,
    span: &LevelSpan,
    nature: Nature,
    lanes: Lanes,
    shards: u64,
) -> Reach {
    model.level_reachable_mixed(span, nature, WalkBudget::new(lanes.boost, lanes.normal, shards))
}

fn usage_for(reach: &Reach, stock: &DenominationCounts) -> ItemUsage {
    ItemUsage::new(
        best_fit(reach.total_candy(), stock),
        reach.boost_candy,
        reach.normal_candy,
        reach.shards,
    )
}
