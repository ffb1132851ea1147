//! Deterministic candy planning for creature level-ups.
//!
//! `candy-core` converts between levels, experience, candy, and shards
//! ([`growth::GrowthModel`]), and distributes one shared multi-denomination
//! inventory plus two global budgets over a priority-ordered
//! [`RequestQueue`] ([`allocator::Planner`]). Every call is a pure function of
//! its inputs; tables are read-only and the caller's inventory is never
//! mutated.
pub mod allocator;
pub mod config;
pub mod diagnosis;
pub mod error;
pub mod growth;
pub mod inventory;
pub mod items;
pub mod request;
pub mod result;
pub mod tables;

pub use allocator::{Planner, plan};
pub use config::{BoostKind, PlanConfig};
pub use diagnosis::{LimitingFactor, ResourceSnapshot, ShortageInfo};
pub use error::{ErrorSeverity, InventoryError, PlanError, PlannerError, TablesError};
pub use growth::{GrowthCost, GrowthModel, LevelSpan, MixedGrowthCost, Reach, StopReason, WalkBudget};
pub use inventory::{Inventory, TypeCandy, UniversalCandy};
pub use items::{Denomination, DenominationCounts, DenominationScope, ItemUsage, best_fit};
pub use request::{CandyOwner, CreatureType, LevelUpRequest, RequestId, RequestQueue, SpeciesId};
pub use result::{PerCreatureResult, PlanResult, PlanTotals};
pub use tables::{
    BoostRule, BoostRules, CandyExpBracket, CandyExpTable, ExpTable, GrowthCurve, GrowthTables,
    Nature, REFERENCE_MAX_LEVEL, ShardTable,
};
