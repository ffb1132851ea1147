//! Validate a data directory
//!
//! Loads the growth tables and boost rules, then parses and plans every
//! scenario so that broken data fails here instead of mid-run.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use candy_core::Planner;

use crate::utils;

/// Validate tables, boost rules, and scenarios
#[derive(Parser)]
pub struct Check {
    /// Custom data directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl Check {
    pub fn execute(self) -> Result<()> {
        let factory = utils::factory(self.data_dir);
        println!(
            "{} {}",
            style("Data Directory:").bold().cyan(),
            factory.data_dir().display()
        );

        let tables = factory
            .load_growth_tables()
            .context("Failed to load growth tables")?;
        println!(
            "  {} tables: {} curves up to level {}",
            style("ok").green(),
            tables.curves().count(),
            tables.max_level()
        );
        let kinds: Vec<String> = tables
            .boost_rules()
            .iter()
            .map(|(kind, rule)| format!("{} x{}/x{}", kind, rule.exp_multiplier, rule.shard_multiplier))
            .collect();
        println!("  {} boost rules: {}", style("ok").green(), kinds.join(", "));

        let mut failures = 0usize;
        for name in utils::scenario_names(&factory)? {
            let outcome = utils::load_scenario(&factory, &name).and_then(|scenario| {
                let planner = Planner::new(tables.clone(), scenario.config.clone())?;
                let result = planner.plan(&scenario.requests, &scenario.inventory)?;
                Ok((scenario.requests.len(), result.is_fully_satisfied()))
            });

            match outcome {
                Ok((requests, satisfied)) => println!(
                    "  {} scenario {}: {} request(s), {}",
                    style("ok").green(),
                    name,
                    requests,
                    if satisfied { "fully satisfied" } else { "has shortages" }
                ),
                Err(e) => {
                    failures += 1;
                    println!("  {} scenario {}: {:#}", style("error").red(), name, e);
                }
            }
        }

        if failures > 0 {
            anyhow::bail!("{} scenario(s) failed validation", failures);
        }
        Ok(())
    }
}
