//! Phase 3: pad theoretical rows, diagnose, and assemble the plan.

use tracing::trace;

use super::allocate::Allocation;
use super::budget::GlobalBudget;
use crate::diagnosis::{ShortageInfo, limiting_factor};
use crate::growth::GrowthModel;
use crate::inventory::Inventory;
use crate::items::{ItemUsage, pad_with_universal_s};
use crate::request::LevelUpRequest;
use crate::result::{PerCreatureResult, PlanResult, PlanTotals};

/// Builds the final result. Only theoretical rows are padded; committed rows
/// report exactly what left the inventory.
pub(super) fn assemble(
    model: &GrowthModel<'_>,
    requests: &[LevelUpRequest],
    allocations: Vec<Allocation>,
    inventory: Inventory,
    budget: &GlobalBudget,
) -> PlanResult {
    let creatures: Vec<PerCreatureResult> = requests
        .iter()
        .zip(allocations)
        .map(|(request, allocation)| finalize_one(model, request, allocation))
        .collect();
    let totals: PlanTotals = creatures.iter().map(|c| &c.reachable_items).collect();

    PlanResult {
        creatures,
        totals,
        inventory,
        remaining: budget.snapshot(),
    }
}

fn finalize_one(
    model: &GrowthModel<'_>,
    request: &LevelUpRequest,
    allocation: Allocation,
) -> PerCreatureResult {
    let target_items = top_up(request, "target", &allocation.target);
    let candy_target_items = allocation
        .candy_target
        .as_ref()
        .map(|row| top_up(request, "candy_target", row));
    let theoretical = candy_target_items.as_ref().unwrap_or(&target_items);

    let declared = &allocation.declared;
    let shortage = ShortageInfo::between(
        declared.boost_candy,
        declared.shards,
        theoretical,
        &allocation.reachable,
    );
    let boost_clamped = allocation.snapshot.boost_clamps(declared.boost_candy);
    let reach = &allocation.reach;

    PerCreatureResult {
        id: request.id,
        reached_level: reach.level,
        exp_in_level: reach.exp_in_level,
        exp_to_next_level: model.exp_to_next_level(allocation.span.curve, reach),
        exp_to_target: model.exp_to_target(&allocation.span, reach),
        target_items,
        candy_target_items,
        reachable_items: allocation.reachable,
        shortage,
        snapshot: allocation.snapshot,
        limiting_factor: limiting_factor(&shortage, boost_clamped, reach.stop),
        stop: reach.stop,
    }
}

fn top_up(request: &LevelUpRequest, row: &'static str, usage: &ItemUsage) -> ItemUsage {
    let padded = pad_with_universal_s(usage);
    if padded != *usage {
        trace!(
            request = %request.id,
            row,
            missing = usage.shortfall(),
            "topped up theoretical row with universal-S"
        );
    }
    padded
}
