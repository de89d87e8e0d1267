use anyhow::{Context, Result};
use bd_core::Selection;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bd_cli::commands::{check, report};
use bd_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Commands::Report {
            input,
            json,
            all,
            today,
            burn_direction,
        } => {
            let config = Config::load_from(cli.config.as_deref())
                .context("failed to load configuration")?;
            tracing::debug!(?config, "loaded configuration");

            let attributes = config.attribute_set()?;
            let burn_direction = match burn_direction {
                Some(raw) => raw.parse().context("invalid --burn-direction")?,
                None => config.burn_direction,
            };
            let options = report::ReportOptions {
                json: *json,
                selection: if *all { Selection::All } else { Selection::Active },
                today: (*today).unwrap_or_else(|| Local::now().date_naive()),
                burn_direction,
            };
            report::run(&mut std::io::stdout().lock(), input, &attributes, &options)?;
        }
        Commands::Check { input } => {
            check::run(&mut std::io::stdout().lock(), input)?;
        }
    }

    Ok(())
}
