//! # SOLID Recipe
//!
//! Runs the selected principle showcases and prints their output to stdout.
//!
//! Selection comes from positional principle names and `--violations`, with
//! `SOLID_PRINCIPLES` / `SOLID_VIOLATIONS` as fallbacks. Run with `--help`
//! or see [`solid_recipe::lifecycle::config`] for the details.

use clap::Parser;
use solid_recipe::framework::StdoutConsole;
use solid_recipe::lifecycle::{setup_tracing, ShowcaseArgs, ShowcaseConfig, SolidShowcase};
use tracing::{error, info};

fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ShowcaseConfig::from(ShowcaseArgs::parse());

    let system = SolidShowcase::new(config);
    info!(config = ?system.config(), "Starting SOLID showcase");

    let report = system.run(&StdoutConsole).map_err(|e| {
        error!(error = %e, "Showcase failed");
        e.to_string()
    })?;

    info!(
        completed = report.completed.len(),
        violations = report.violations.len(),
        "Application completed successfully"
    );
    Ok(())
}
