//! Scenario loader.
//!
//! A scenario is everything one planning run needs besides the tables: the
//! run configuration, the shared inventory, and the prioritized requests.

use std::path::Path;

use candy_core::{Inventory, PlanConfig, RequestQueue};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub config: PlanConfig,
    #[serde(default)]
    pub inventory: Inventory,
    /// Highest priority first.
    pub requests: RequestQueue,
}

/// Loader for scenarios from RON files.
pub struct ScenarioLoader;

impl ScenarioLoader {
    /// Load a scenario from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a [`Scenario`]
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario RON: {}", e))?;

        debug!(
            name = %scenario.name,
            requests = scenario.requests.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }
}
