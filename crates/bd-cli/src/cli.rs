//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Sprint burndown reporting.
///
/// Reads a sprint data file (day range, items, and their audit trails) and
/// reconstructs the daily burndown series for remaining hours and story
/// points, with an ideal depletion line for each.
#[derive(Debug, Parser)]
#[command(name = "bd", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Compute and print the burndown report for a sprint file.
    Report {
        /// Path to the sprint data file (JSON).
        #[arg(long)]
        input: PathBuf,

        /// Output as JSON instead of the human-readable chart.
        #[arg(long)]
        json: bool,

        /// Include hidden series in the output.
        #[arg(long)]
        all: bool,

        /// Treat this date as today (defaults to the local date). Days after
        /// it carry no real data.
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Burn direction to record on the report (overrides config).
        #[arg(long)]
        burn_direction: Option<String>,
    },

    /// Validate a sprint data file and print its shape.
    Check {
        /// Path to the sprint data file (JSON).
        #[arg(long)]
        input: PathBuf,
    },
}
