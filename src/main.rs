//! npmup - package.json dependency upgrader CLI
//!
//! Reads package.json, asks the package manager for the latest version of
//! every dependency, and installs the ones that differ.

use clap::Parser;
use npmup::cli::{CliArgs, RunConfig};
use npmup::domain::UpdateSummary;
use npmup::output::{format_error, OutputConfig, Reporter, Verbosity};
use npmup::package_manager::SystemPackageManager;
use npmup::progress::Progress;
use npmup::updater::run_update;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    let output = OutputConfig::from_cli(args.verbose, args.no_color);

    let config = match args.to_run_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", format_error(&format!("Error: {}", e), output.color));
            println!("{}", CliArgs::usage());
            return ExitCode::FAILURE;
        }
    };

    match run(&config, output) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{}",
                format_error(&format!("Error updating dependencies: {}", e), output.color)
            );
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(config: &RunConfig, output: OutputConfig) -> anyhow::Result<UpdateSummary> {
    let mut reporter = Reporter::stdout(output);
    reporter.verbose(&format!("npmup v{}", env!("CARGO_PKG_VERSION")));
    reporter.verbose(&format!("Package manager: {}", config.package_manager));

    let package_manager = SystemPackageManager::new(config.package_manager.as_str());
    // Verbose lines would be overdrawn by the spinner.
    let progress = Progress::new(output.verbosity == Verbosity::Normal);

    let summary = run_update(
        config,
        &package_manager,
        &package_manager,
        &mut reporter,
        progress,
    )?;

    Ok(summary)
}
