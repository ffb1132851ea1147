//! Plan a scenario and display the per-creature breakdown
//!
//! Loads growth tables and a scenario from a data directory, runs the planner,
//! and prints either a summary or the full result as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use candy_core::{
    BoostKind, Denomination, DenominationCounts, LimitingFactor, PerCreatureResult, PlanResult,
    Planner, ResourceSnapshot,
};

use crate::utils::{self, format_count};

/// Plan a scenario
#[derive(Parser)]
pub struct Plan {
    /// Scenario name under `scenarios/` or a path to a `.ron` file
    #[arg(value_name = "SCENARIO", default_value = "sample")]
    scenario: String,

    /// Custom data directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Override the scenario's boost kind
    #[arg(long, value_name = "KIND", value_parser = parse_boost_kind)]
    boost_kind: Option<BoostKind>,

    /// Override the global boost candy limit
    #[arg(long, value_name = "N")]
    boost_limit: Option<u64>,

    /// Override the global shard limit
    #[arg(long, value_name = "N")]
    shard_limit: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Per-creature summary with totals
    Summary,
    /// Full JSON output
    Json,
}

fn parse_boost_kind(name: &str) -> Result<BoostKind, String> {
    BoostKind::parse(name).map_err(|e| e.to_string())
}

impl Plan {
    pub fn execute(self) -> Result<()> {
        let factory = utils::factory(self.data_dir);
        let tables = factory
            .load_growth_tables()
            .context("Failed to load growth tables")?;
        let mut scenario = utils::load_scenario(&factory, &self.scenario)?;

        if let Some(kind) = self.boost_kind {
            scenario.config.boost_kind = kind;
        }
        if let Some(limit) = self.boost_limit {
            scenario.config.global_boost_limit = Some(limit);
        }
        if let Some(limit) = self.shard_limit {
            scenario.config.global_shard_limit = Some(limit);
        }

        let planner = Planner::new(tables, scenario.config.clone())?;
        let result = planner.plan(&scenario.requests, &scenario.inventory)?;

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("Scenario:").bold().cyan(),
                    scenario.name
                );
                if let Some(description) = &scenario.description {
                    println!("{} {}", style("Description:").bold().cyan(), description);
                }
                println!(
                    "{} {}",
                    style("Boost Kind:").bold().cyan(),
                    scenario.config.boost_kind
                );
                println!();
                print_summary(&result);
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&result)
                    .context("Failed to serialize plan to JSON")?;
                println!("{}", json);
            }
        }

        Ok(())
    }
}

fn print_summary(result: &PlanResult) {
    println!("{}", style("=== Plan Summary ===").bold().green());
    println!();

    for creature in &result.creatures {
        print_creature(creature);
    }

    println!("{}", style("Totals:").bold().yellow());
    println!(
        "  Candy: {} boost + {} normal",
        format_count(result.totals.boost_count),
        format_count(result.totals.normal_count)
    );
    println!("  Shards: {}", format_count(result.totals.shards));
    println!("  Items: {}", format_items(&result.totals.items));
    println!("  Remaining: {}", format_snapshot(&result.remaining));
    println!();

    if result.is_fully_satisfied() {
        println!("{}", style("Every request is fully satisfied.").green());
    } else {
        let short = result
            .creatures
            .iter()
            .filter(|c| !c.shortage.is_empty())
            .count();
        println!(
            "{}",
            style(format!("{} request(s) fall short of their target.", short)).red()
        );
    }
}

fn print_creature(creature: &PerCreatureResult) {
    let reachable = &creature.reachable_items;
    let target = creature.theoretical_items();

    println!(
        "{} reached level {} ({} exp in level, stop: {})",
        style(format!("Request {}", creature.id)).bold().yellow(),
        creature.reached_level,
        format_count(creature.exp_in_level),
        creature.stop
    );
    println!(
        "  Reachable: {} boost + {} normal, {} shards",
        format_count(reachable.boost_count),
        format_count(reachable.normal_count),
        format_count(reachable.shards)
    );
    println!(
        "    items {} (surplus {})",
        format_items(&reachable.items),
        reachable.surplus()
    );
    println!(
        "  Target:    {} boost + {} normal, {} shards",
        format_count(target.boost_count),
        format_count(target.normal_count),
        format_count(target.shards)
    );
    if let Some(candy_target) = &creature.candy_target_items {
        println!(
            "  Cap target: {} normal, {} shards",
            format_count(candy_target.normal_count),
            format_count(candy_target.shards)
        );
    }
    println!(
        "  Exp to next level: {}, to target: {}",
        format_count(creature.exp_to_next_level),
        format_count(creature.exp_to_target)
    );

    if !creature.shortage.is_empty() {
        println!(
            "  Shortage: {} candy, {} boost, {} shards",
            format_count(creature.shortage.candy),
            format_count(creature.shortage.boost),
            format_count(creature.shortage.shards)
        );
    }
    let factor = match creature.limiting_factor {
        LimitingFactor::None => style(creature.limiting_factor.to_string()).green(),
        _ => style(creature.limiting_factor.to_string()).red(),
    };
    println!("  Limiting factor: {}", factor);
    println!();
}

fn format_items(items: &DenominationCounts) -> String {
    let parts: Vec<String> = Denomination::PRIORITY
        .iter()
        .filter(|&&d| items[d] > 0)
        .map(|&d| format!("{}={}", d, items[d]))
        .collect();
    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

fn format_snapshot(snapshot: &ResourceSnapshot) -> String {
    let show = |value: Option<u64>| value.map_or_else(|| "unbounded".to_string(), format_count);
    format!(
        "{} boost, {} shards",
        show(snapshot.boost_remaining),
        show(snapshot.shards_remaining)
    )
}
