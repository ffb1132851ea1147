//! Content factory for building growth tables and scenarios from data files.

use std::path::{Path, PathBuf};

use candy_core::{BoostRules, GrowthTables};

use crate::loaders::{BoostLoader, LoadResult, Scenario, ScenarioLoader, TablesData, TablesLoader};

/// Content factory that loads planner data from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── tables.toml
/// ├── boost.toml
/// └── scenarios/
///     └── sample.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load curves, shard costs, and candy experience from `tables.toml`.
    pub fn load_tables(&self) -> LoadResult<TablesData> {
        let path = self.data_dir.join("tables.toml");
        TablesLoader::load(&path)
    }

    /// Load boost multipliers from `boost.toml`.
    pub fn load_boost_rules(&self) -> LoadResult<BoostRules> {
        let path = self.data_dir.join("boost.toml");
        BoostLoader::load(&path)
    }

    /// Load and validate the complete table set.
    pub fn load_growth_tables(&self) -> LoadResult<GrowthTables> {
        let TablesData {
            curves,
            shards,
            candy_exp,
        } = self.load_tables()?;
        let boost = self.load_boost_rules()?;

        GrowthTables::new(curves, shards, candy_exp, boost)
            .map_err(|e| anyhow::anyhow!("Inconsistent growth tables: {}", e))
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the scenario file (without `.ron` extension)
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_scenario_names_the_file() {
        let factory = ContentFactory::new("/nonexistent");
        let err = factory.load_scenario("nope").unwrap_err();
        assert!(err.to_string().contains("nope.ron"));
    }
}
