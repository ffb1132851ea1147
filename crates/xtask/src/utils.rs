//! Utility functions for xtask commands

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use candy_content::{ContentFactory, Scenario, ScenarioLoader};

/// Content factory for `--data-dir`, or the bundled data when absent.
pub fn factory(data_dir: Option<PathBuf>) -> ContentFactory {
    match data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::bundled(),
    }
}

/// Loads a scenario given either a file path or a name under `scenarios/`.
pub fn load_scenario(factory: &ContentFactory, scenario: &str) -> Result<Scenario> {
    let path = Path::new(scenario);
    if path.extension().is_some_and(|ext| ext == "ron") {
        return ScenarioLoader::load(path)
            .with_context(|| format!("Failed to load scenario file: {}", path.display()));
    }

    factory.load_scenario(scenario).with_context(|| {
        format!(
            "Failed to load scenario '{}'\n\nHint: Check available scenarios in {}",
            scenario,
            factory.data_dir().join("scenarios").display()
        )
    })
}

/// Names of every `*.ron` file under `scenarios/`, sorted.
pub fn scenario_names(factory: &ContentFactory) -> Result<Vec<String>> {
    let dir = factory.data_dir().join("scenarios");
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut names: Vec<String> = std::fs::read_dir(&dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            if path.extension()? != "ron" {
                return None;
            }
            Some(path.file_stem()?.to_str()?.to_string())
        })
        .collect();
    names.sort();
    Ok(names)
}

/// Formats a number with thousands separators.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_998_660), "1,998,660");
    }
}
