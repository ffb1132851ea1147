//! Boost rules loader.

use std::path::Path;

use candy_core::{BoostKind, BoostRule, BoostRules};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One `[[rules]]` entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RuleSpec {
    pub kind: BoostKind,
    pub exp_multiplier: u64,
    pub shard_multiplier: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BoostFile {
    rules: Vec<RuleSpec>,
}

/// Loader for boost rules from TOML files.
pub struct BoostLoader;

impl BoostLoader {
    /// Load boost rules from a TOML file.
    pub fn load(path: &Path) -> LoadResult<BoostRules> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<BoostRules> {
        let file: BoostFile = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boost TOML: {}", e))?;

        let mut seen = Vec::with_capacity(file.rules.len());
        for rule in &file.rules {
            if seen.contains(&rule.kind) {
                anyhow::bail!("Duplicate boost rule for '{}'", rule.kind);
            }
            seen.push(rule.kind);
        }

        let rules = file.rules.into_iter().map(|spec| {
            (
                spec.kind,
                BoostRule::new(spec.exp_multiplier, spec.shard_multiplier),
            )
        });
        BoostRules::new(rules).map_err(|e| anyhow::anyhow!("Invalid boost rules: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_by_kind() {
        let rules = BoostLoader::parse(
            r#"
[[rules]]
kind = "none"
exp_multiplier = 1
shard_multiplier = 1

[[rules]]
kind = "full"
exp_multiplier = 2
shard_multiplier = 5
"#,
        )
        .unwrap();

        assert_eq!(rules.get(BoostKind::Full), Some(BoostRule::new(2, 5)));
        assert_eq!(rules.get(BoostKind::Mini), None);
    }

    #[test]
    fn rejects_duplicates_and_zero_multipliers() {
        let duplicate = r#"
[[rules]]
kind = "mini"
exp_multiplier = 2
shard_multiplier = 4

[[rules]]
kind = "mini"
exp_multiplier = 2
shard_multiplier = 3
"#;
        let err = BoostLoader::parse(duplicate).unwrap_err();
        assert!(err.to_string().contains("Duplicate boost rule for 'mini'"));

        let zero = r#"
[[rules]]
kind = "full"
exp_multiplier = 0
shard_multiplier = 5
"#;
        assert!(BoostLoader::parse(zero).is_err());
    }
}
