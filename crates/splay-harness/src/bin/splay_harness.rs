//! `splay-harness` — run the rotate and tree scenarios against `splay-tree`.
//!
//! Usage:
//!   splay-harness [--seed N] [--low N] [--high N] [--no-cycle-check] [--quiet]
//!
//! Logging goes to stderr and honours `RUST_LOG`.

use std::process::ExitCode;

use clap::Parser;
use splay_harness::{run, HarnessConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Drive a splay tree through seeded insert/find scenarios")]
struct Cli {
    /// Seed for both passes; overrides the per-pass seeds
    #[arg(long)]
    seed: Option<u64>,

    /// Seed for the insertion order
    #[arg(long, default_value_t = HarnessConfig::default().insert_seed)]
    insert_seed: u64,

    /// Seed for the lookup order
    #[arg(long, default_value_t = HarnessConfig::default().find_seed)]
    find_seed: u64,

    /// Lowest key
    #[arg(long, default_value_t = HarnessConfig::default().low, allow_negative_numbers = true)]
    low: i64,

    /// Highest key (inclusive)
    #[arg(long, default_value_t = HarnessConfig::default().high, allow_negative_numbers = true)]
    high: i64,

    /// Skip the verifier's cycle scan
    #[arg(long)]
    no_cycle_check: bool,

    /// Only log warnings and do not print the final tree
    #[arg(long, short)]
    quiet: bool,
}

impl From<&Cli> for HarnessConfig {
    fn from(cli: &Cli) -> Self {
        let config = HarnessConfig {
            low: cli.low,
            high: cli.high,
            insert_seed: cli.insert_seed,
            find_seed: cli.find_seed,
            check_cycles: !cli.no_cycle_check,
        };
        match cli.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // try_init: a subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.quiet);
    let config = HarnessConfig::from(&cli);

    println!("---- Beginning tree tests ----");
    match run(&config) {
        Ok(report) => {
            if !cli.quiet {
                println!("{}", report.tree);
            }
            println!(
                "{} keys inserted, {} found, height {}, balance {:.3}",
                report.inserted, report.found, report.height, report.balance
            );
            println!("---- All tests successful ----");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("FAILED: {e}");
            if let Some(tree) = e.tree() {
                eprintln!("{tree}");
            }
            ExitCode::FAILURE
        }
    }
}
