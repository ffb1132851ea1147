//! Print the per-level growth table for one curve
//!
//! Each row starts fresh at the level (no carried experience) and shows what
//! one level-up costs with normal candy and with boost candy.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use candy_core::{BoostKind, GrowthCurve, GrowthModel, LevelSpan, Nature};

use crate::utils::{self, format_count};

/// Print a curve's per-level costs
#[derive(Parser)]
pub struct Tables {
    /// Curve tag (600, 900, 1080 or 1320)
    #[arg(value_name = "CURVE", value_parser = parse_curve)]
    curve: GrowthCurve,

    /// First level to print
    #[arg(long, default_value_t = 1)]
    from: u8,

    /// Last level to reach (defaults to the level cap)
    #[arg(long)]
    to: Option<u8>,

    /// Nature applied to candy experience
    #[arg(short, long, value_parser = parse_nature, default_value = "neutral")]
    nature: Nature,

    /// Boost kind used for the boost columns
    #[arg(short, long, value_parser = parse_boost_kind, default_value = "full")]
    boost_kind: BoostKind,

    /// Custom data directory (defaults to the bundled data)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

fn parse_curve(tag: &str) -> Result<GrowthCurve, String> {
    let tag: u16 = tag.parse().map_err(|_| format!("'{}' is not a curve tag", tag))?;
    GrowthCurve::try_from(tag).map_err(|e| e.to_string())
}

fn parse_nature(name: &str) -> Result<Nature, String> {
    name.parse().map_err(|_| format!("unknown nature '{}'", name))
}

fn parse_boost_kind(name: &str) -> Result<BoostKind, String> {
    BoostKind::parse(name).map_err(|e| e.to_string())
}

impl Tables {
    pub fn execute(self) -> Result<()> {
        let tables = utils::factory(self.data_dir)
            .load_growth_tables()
            .context("Failed to load growth tables")?;

        let normal = GrowthModel::new(&tables, BoostKind::None)?;
        let boosted = GrowthModel::new(&tables, self.boost_kind)?;

        let to = self.to.unwrap_or(tables.max_level()).min(tables.max_level());
        if self.from == 0 || self.from >= to {
            anyhow::bail!(
                "Level range {}..{} is empty (cap is {})",
                self.from,
                to,
                tables.max_level()
            );
        }

        println!(
            "{} {} ({} nature, {} boost)",
            style("Curve:").bold().cyan(),
            self.curve,
            self.nature,
            self.boost_kind
        );
        println!();
        println!(
            "{}",
            style(format!(
                "{:>5} {:>9} {:>7} {:>9} {:>7} {:>9}",
                "level", "exp", "candy", "shards", "boost", "shards"
            ))
            .bold()
        );

        for level in self.from..to {
            let span = LevelSpan::new(self.curve, level, level + 1);
            let plain = normal.candy_and_shard_needed(&span, self.nature);
            let boost = boosted.candy_and_shard_needed(&span, self.nature);
            println!(
                "{:>5} {:>9} {:>7} {:>9} {:>7} {:>9}",
                level,
                normal.exp_delta(self.curve, level, level + 1),
                plain.candy,
                plain.shards,
                boost.candy,
                boost.shards
            );
        }

        let span = LevelSpan::new(self.curve, self.from, to);
        let plain = normal.candy_and_shard_needed(&span, self.nature);
        let boost = boosted.candy_and_shard_needed(&span, self.nature);
        println!();
        println!("{}", style(format!("Level {} to {}:", self.from, to)).bold().yellow());
        println!("  Exp: {}", format_count(plain.exp));
        println!(
            "  Normal: {} candy, {} shards",
            format_count(plain.candy),
            format_count(plain.shards)
        );
        println!(
            "  Boost:  {} candy, {} shards",
            format_count(boost.candy),
            format_count(boost.shards)
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_curve_tags() {
        assert_eq!(parse_curve("1080"), Ok(GrowthCurve::Exp1080));
        assert!(parse_curve("700").is_err());
        assert!(parse_curve("fast").is_err());
    }

    #[test]
    fn parses_natures() {
        assert_eq!(parse_nature("UP"), Ok(Nature::Up));
        assert!(parse_nature("sideways").is_err());
    }
}
