//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Resource capacity, cost, and timeline calculation toolkit
#[derive(Parser, Debug)]
#[command(name = "resourcecalc")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug level: -d info, -dd debug, -ddd trace (logs go to stderr)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Settings file (default: $XDG_CONFIG_HOME/resourcecalc/resourcecalc.toml)
    #[arg(long, global = true, env = "RESOURCECALC_CONFIG", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute capacity utilization and headcount needs
    #[command(allow_negative_numbers = true)]
    Capacity {
        /// Total demand units (e.g. story points, hours)
        demand: f64,
        /// Average throughput per person per period
        throughput: f64,
        /// Number of periods to evaluate
        periods: i64,
    },

    /// Compute cost given rates and utilization
    #[command(allow_negative_numbers = true)]
    Cost {
        /// Number of FTEs
        headcount: i64,
        /// Cost rate per FTE per period
        rate: f64,
        /// Number of periods
        periods: i64,
        /// Utilization factor in (0,1] (default 0.85)
        #[arg(long)]
        utilization: Option<f64>,
    },

    /// Estimate timeline given scope and throughput
    #[command(allow_negative_numbers = true)]
    Timeline {
        /// Total scope units (e.g. story points, hours)
        scope: f64,
        /// Team throughput per period
        throughput: f64,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged settings
    Show,

    /// Show settings file path
    Path,
}
