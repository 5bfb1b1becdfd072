//! OpenClaw Bootstrap Binary
//!
//! Container-startup entry point: parse flags/env, initialize logging, run
//! the bootstrap sequence once, report what was applied.

use clap::Parser;
use openclaw_bootstrap::bootstrap;
use openclaw_bootstrap::cli::{format_summary_text, map_error, Cli};
use openclaw_bootstrap::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    // Initialize logging early
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("OpenClaw bootstrap starting");

    let config = cli.bootstrap_config();
    match bootstrap::run(&config) {
        Ok(summary) => {
            info!("Bootstrap completed successfully");
            println!("{}", format_summary_text(&summary));
        }
        Err(e) => {
            error!("Bootstrap failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args.
/// Precedence: explicit flags override --verbose override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }

    config
}
