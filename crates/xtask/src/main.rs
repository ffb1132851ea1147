//! Development tasks for the candy planner
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod utils;

use anyhow::Result;
use clap::Parser;
use commands::{Check, Plan, Tables};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Development tasks for the candy planner
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the candy planner", long_about = None)]
#[command(version)]
struct Cli {
    /// Print planner debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Plan a scenario and print per-creature results
    Plan(Plan),

    /// Print the per-level growth table for one curve
    Tables(Tables),

    /// Validate a data directory: tables, boost rules, and every scenario
    Check(Check),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Plan(cmd) => cmd.execute(),
        Command::Tables(cmd) => cmd.execute(),
        Command::Check(cmd) => cmd.execute(),
    }
}

fn init_tracing(verbose: bool) {
    // RUST_LOG wins over -v
    let default = if verbose { "candy_core=debug,candy_content=debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
