//! Growth tables loader.

use std::path::Path;

use candy_core::{CandyExpBracket, CandyExpTable, ExpTable, GrowthCurve, ShardTable};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::loaders::{LoadResult, read_file};

/// One curve family as written in `tables.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveSpec {
    pub exp_type: GrowthCurve,
    /// Experience from each level to the next, starting at level 1.
    pub level_deltas: Vec<u64>,
}

/// Raw `tables.toml` layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablesFile {
    /// Optional cross-check of the level cap implied by the curves.
    #[serde(default)]
    pub max_level: Option<u8>,
    pub shard_costs: Vec<u64>,
    pub candy_exp: Vec<CandyExpBracket>,
    pub curves: Vec<CurveSpec>,
}

/// Validated table parts, ready to be combined with boost rules.
#[derive(Debug, Clone)]
pub struct TablesData {
    pub curves: Vec<ExpTable>,
    pub shards: ShardTable,
    pub candy_exp: CandyExpTable,
}

/// Loader for growth tables from TOML files.
pub struct TablesLoader;

impl TablesLoader {
    /// Load growth tables from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing a [`TablesFile`]
    pub fn load(path: &Path) -> LoadResult<TablesData> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate `tables.toml` content.
    pub fn parse(content: &str) -> LoadResult<TablesData> {
        let file: TablesFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse tables TOML: {}", e))?;

        let mut curves = Vec::with_capacity(file.curves.len());
        for spec in &file.curves {
            let table = ExpTable::from_level_deltas(spec.exp_type, &spec.level_deltas)
                .map_err(|e| anyhow::anyhow!("Invalid curve {}: {}", spec.exp_type, e))?;
            curves.push(table);
        }

        if let (Some(expected), Some(first)) = (file.max_level, curves.first())
            && first.max_level() != expected
        {
            anyhow::bail!(
                "max_level is {} but curve {} ends at level {}",
                expected,
                first.curve(),
                first.max_level()
            );
        }

        let candy_exp = CandyExpTable::new(file.candy_exp)
            .map_err(|e| anyhow::anyhow!("Invalid candy_exp brackets: {}", e))?;

        debug!(
            curves = curves.len(),
            shard_levels = file.shard_costs.len(),
            "loaded growth tables"
        );

        Ok(TablesData {
            curves,
            shards: ShardTable::new(file.shard_costs),
            candy_exp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = r#"
max_level = 3
shard_costs = [10, 20, 30]

[[candy_exp]]
min_level = 1
up = 12
neutral = 10
down = 8

[[curves]]
exp_type = 600
level_deltas = [50, 70]
"#;

    #[test]
    fn parses_small_table() {
        let data = TablesLoader::parse(SMALL).unwrap();
        assert_eq!(data.curves.len(), 1);
        assert_eq!(data.curves[0].curve(), GrowthCurve::Exp600);
        assert_eq!(data.curves[0].max_level(), 3);
        assert_eq!(data.shards.cost_per_candy(2), Some(20));
    }

    #[test]
    fn rejects_mismatched_max_level() {
        let content = SMALL.replace("max_level = 3", "max_level = 9");
        let err = TablesLoader::parse(&content).unwrap_err();
        assert!(err.to_string().contains("max_level is 9"));
    }

    #[test]
    fn rejects_unknown_curve_tag() {
        let content = SMALL.replace("exp_type = 600", "exp_type = 700");
        assert!(TablesLoader::parse(&content).is_err());
    }
}
