use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod engine;
mod error;
mod interactive;
mod pricing;
mod report;
mod scenario;

use crate::config::Config;
use crate::pricing::PriceTable;

#[derive(Parser)]
#[command(name = "gcpcost")]
#[command(
    about = "GCP deployment cost estimation CLI",
    long_about = "gcpcost estimates monthly and annual GCP infrastructure cost for four\npredefined deployment sizes (demo, staging, production, enterprise).\n\nCovers:\n  - GKE node pools (on-demand and preemptible)\n  - Cloud SQL (with HA and backups)\n  - Cloud Run (web and background worker paths)\n  - Storage, load balancing, egress, and monitoring"
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long, global = true, default_value = "text")]
    output: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate cost for a single scenario
    Estimate {
        /// Scenario name (demo, staging, production, enterprise)
        scenario: String,
    },
    /// Compare scenarios side by side
    Compare {
        /// Scenario names (defaults to all four)
        names: Vec<String>,
    },
    /// Write the full multi-section report to a timestamped file
    Report,
    /// Ad-hoc serverless cost calculation from explicit usage numbers
    Custom {
        /// Monthly request count
        #[arg(long)]
        requests: u64,
        /// Average CPU time per request (ms)
        #[arg(long)]
        cpu_ms: u64,
        /// Average memory per request (MB)
        #[arg(long)]
        memory_mb: u64,
        /// Reserved always-on instances
        #[arg(long, default_value_t = 0)]
        min_instances: u32,
    },
    /// Interactive menu
    Interactive,
    /// Initialize configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = ".gcpcost.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Suppress INFO by default, only show warnings and errors
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = Config::load(cli.config.as_deref())?;
    let prices = PriceTable::new();
    let currency = config.display.currency_symbol.clone();

    match cli.command {
        Commands::Estimate { scenario } => {
            let result = engine::aggregate_scenario(&prices, &scenario)?;
            if cli.output == "json" {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                report::print_scenario(&result, &currency);
            }
        }
        Commands::Compare { names } => {
            let names: Vec<&str> = if names.is_empty() {
                report::all_scenario_names()
            } else {
                names.iter().map(String::as_str).collect()
            };
            let results = engine::compare_scenarios(&prices, &names)?;
            if cli.output == "json" {
                println!("{}", report::to_json(&results)?);
            } else {
                report::print_comparison(&results, &currency);
            }
        }
        Commands::Report => {
            let path = report::write_report(&prices, &config)?;
            println!("Report written to: {}", path.display());
        }
        Commands::Custom {
            requests,
            cpu_ms,
            memory_mb,
            min_instances,
        } => {
            let cost =
                engine::serverless_cost(&prices, requests, cpu_ms, memory_mb, min_instances)?;
            println!(
                "Estimated serverless cost: {}{:.2}/month ({}{:.2}/year)",
                currency,
                cost,
                currency,
                cost * 12.0
            );
        }
        Commands::Interactive => {
            interactive::run(&prices, &config)?;
        }
        Commands::Init { output } => {
            config::init_config(&output)?;
        }
    }

    Ok(())
}
