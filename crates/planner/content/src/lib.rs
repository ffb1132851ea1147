//! Data-driven growth tables, boost rules, and planning scenarios.
//!
//! This crate reads the static data `candy-core` plans against:
//! - Growth tables: per-curve level costs, shard costs, candy experience (TOML)
//! - Boost rules: experience and shard multipliers per boost kind (TOML)
//! - Scenarios: requests, inventory, and run configuration (RON)
//!
//! Everything is validated through `candy-core` constructors, so a loaded
//! table set is exactly as trustworthy as the built-in reference one.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{BoostLoader, ContentFactory, Scenario, ScenarioLoader, TablesData, TablesLoader};
