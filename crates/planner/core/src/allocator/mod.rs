//! The three-phase multi-creature allocator.
//!
//! [`Planner::plan`] distributes one inventory and two global budgets over a
//! [`RequestQueue`]:
//!
//! 1. **Allocate**: in queue order, compute each creature's theoretical rows
//!    and commit its reachable row against the working inventory and budgets
//! 2. **Swap**: from lowest to highest priority, trade atomic overshoot for
//!    splittable units so committed rows end within a surplus of 2; the same
//!    pass runs separately over the theoretical rows
//! 3. **Finalize**: top theoretical rows up with universal-S, diagnose
//!    shortages and the limiting factor, and assemble the [`PlanResult`]
//!
//! ## Design Principles
//!
//! - **Pure**: the caller's inventory is cloned on entry; nothing outlives a call
//! - **Deterministic**: identical inputs give identical results
//! - **Fail before mutate**: configuration and requests are validated before
//!   the first allocation
mod allocate;
mod budget;
mod finalize;
mod swap;

pub use swap::{SURPLUS_TOLERANCE, exchange, refill, trim};

use std::collections::BTreeSet;

use tracing::debug_span;

use crate::config::PlanConfig;
use crate::error::PlanError;
use crate::growth::GrowthModel;
use crate::inventory::Inventory;
use crate::items::DenominationCounts;
use crate::request::RequestQueue;
use crate::result::PlanResult;
use crate::tables::GrowthTables;
use allocate::Allocation;
use budget::GlobalBudget;
use swap::{Row, SnapshotPools};

/// A validated pairing of growth tables and run configuration.
#[derive(Clone, Debug)]
pub struct Planner {
    tables: GrowthTables,
    config: PlanConfig,
}

impl Planner {
    /// # Errors
    ///
    /// Returns [`PlanError::BoostKindNotConfigured`] if `tables` carry no
    /// boost rule for `config.boost_kind`.
    pub fn new(tables: GrowthTables, config: PlanConfig) -> Result<Self, PlanError> {
        if tables.boost_rules().get(config.boost_kind).is_none() {
            return Err(PlanError::BoostKindNotConfigured(config.boost_kind));
        }
        Ok(Self { tables, config })
    }

    /// Planner over the built-in reference tables.
    pub fn with_reference_tables(config: PlanConfig) -> Result<Self, PlanError> {
        Self::new(GrowthTables::reference(), config)
    }

    pub fn tables(&self) -> &GrowthTables {
        &self.tables
    }

    pub fn config(&self) -> &PlanConfig {
        &self.config
    }

    /// Growth arithmetic under this planner's boost kind.
    pub fn model(&self) -> Result<GrowthModel<'_>, PlanError> {
        Ok(GrowthModel::new(&self.tables, self.config.boost_kind)?)
    }

    /// Rejects requests the tables cannot answer and duplicate ids.
    pub fn validate(&self, requests: &RequestQueue) -> Result<(), PlanError> {
        let mut seen = BTreeSet::new();
        for request in requests {
            if !self.tables.has_curve(request.curve) {
                return Err(PlanError::CurveNotConfigured {
                    request: request.id,
                    curve: request.curve,
                });
            }
            if !seen.insert(request.id) {
                return Err(PlanError::DuplicateRequest(request.id));
            }
        }
        Ok(())
    }

    /// Plans `requests` against a private copy of `inventory`.
    pub fn plan(
        &self,
        requests: &RequestQueue,
        inventory: &Inventory,
    ) -> Result<PlanResult, PlanError> {
        self.validate(requests)?;
        let model = self.model()?;

        let span = debug_span!(
            "plan",
            requests = requests.len(),
            boost_kind = %self.config.boost_kind
        );
        let _enter = span.enter();

        let mut inventory = inventory.clone();
        let mut budget = GlobalBudget::new(&self.config);

        // Phase 1: allocate in priority order
        let mut allocations = Vec::with_capacity(requests.len());
        for request in requests {
            allocations.push(allocate::allocate(&model, request, &mut inventory, &mut budget)?);
        }

        // Phase 2: swap
        rebalance_reachable(&mut allocations, &mut inventory)?;
        rebalance_theoretical(&mut allocations)?;

        // Phase 3: finalize
        Ok(finalize::assemble(
            &model,
            requests.as_slice(),
            allocations,
            inventory,
            &budget,
        ))
    }
}

/// Plans with the reference tables.
///
/// # Errors
///
/// See [`Planner::new`] and [`Planner::plan`].
pub fn plan(
    requests: &RequestQueue,
    inventory: &Inventory,
    config: &PlanConfig,
) -> Result<PlanResult, PlanError> {
    Planner::with_reference_tables(config.clone())?.plan(requests, inventory)
}

fn rebalance_reachable(
    allocations: &mut [Allocation],
    inventory: &mut Inventory,
) -> Result<(), PlanError> {
    let mut rows: Vec<Row> = allocations
        .iter()
        .enumerate()
        .map(|(slot, a)| Row {
            slot,
            owner: a.owner,
            usage: a.reachable,
        })
        .collect();
    swap::rebalance(&mut rows, inventory, "reachable")?;
    for row in rows {
        allocations[row.slot].reachable = row.usage;
    }
    Ok(())
}

fn rebalance_theoretical(allocations: &mut [Allocation]) -> Result<(), PlanError> {
    let leftover = |a: &Allocation, items: &DenominationCounts| {
        a.stock.checked_minus(items).unwrap_or_default()
    };

    let mut pools = SnapshotPools::new(
        allocations
            .iter()
            .map(|a| leftover(a, &a.target.items))
            .collect(),
    );
    let mut rows: Vec<Row> = allocations
        .iter()
        .enumerate()
        .map(|(slot, a)| Row {
            slot,
            owner: a.owner,
            usage: a.target,
        })
        .collect();
    swap::rebalance(&mut rows, &mut pools, "target")?;
    for row in rows {
        allocations[row.slot].target = row.usage;
    }

    let mut pools = SnapshotPools::new(
        allocations
            .iter()
            .map(|a| {
                a.candy_target
                    .map(|row| leftover(a, &row.items))
                    .unwrap_or_default()
            })
            .collect(),
    );
    let mut rows: Vec<Row> = allocations
        .iter()
        .enumerate()
        .filter_map(|(slot, a)| {
            a.candy_target.map(|usage| Row {
                slot,
                owner: a.owner,
                usage,
            })
        })
        .collect();
    swap::rebalance(&mut rows, &mut pools, "candy_target")?;
    for row in rows {
        allocations[row.slot].candy_target = Some(row.usage);
    }
    Ok(())
}
