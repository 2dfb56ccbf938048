//! CLI argument parsing module for npmup

use crate::domain::DependencyKind;
use crate::error::ConfigError;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Default package manager executable
#[cfg(not(windows))]
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm";

/// Default package manager executable; `Command` does not apply PATHEXT on Windows
#[cfg(windows)]
pub const DEFAULT_PACKAGE_MANAGER: &str = "npm.cmd";

/// Upgrade package.json dependencies to their latest published versions
#[derive(Parser, Debug, Clone)]
#[command(
    name = "npmup",
    version,
    about = "Upgrade package.json dependencies to their latest published versions",
    after_help = "Example:\n  npmup --path /path/to/project --ignore-devDependencies"
)]
pub struct CliArgs {
    /// Path of the project containing package.json
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Ignore updating dependencies
    #[arg(long = "ignore-dependencies")]
    pub ignore_dependencies: bool,

    /// Ignore updating devDependencies
    #[arg(long = "ignore-devDependencies")]
    pub ignore_dev_dependencies: bool,

    /// Package manager executable used for `show` and `install`
    #[arg(long, value_name = "BIN", default_value = DEFAULT_PACKAGE_MANAGER)]
    pub package_manager: String,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Validated, immutable configuration for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Project directory as given on the command line
    pub project_path: PathBuf,
    /// Skip the `dependencies` category
    pub skip_dependencies: bool,
    /// Skip the `devDependencies` category
    pub skip_dev_dependencies: bool,
    /// Package manager executable
    pub package_manager: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            project_path: PathBuf::from("."),
            skip_dependencies: false,
            skip_dev_dependencies: false,
            package_manager: DEFAULT_PACKAGE_MANAGER.to_string(),
        }
    }
}

impl RunConfig {
    /// Check if a dependency category should be skipped
    pub fn skips(&self, kind: DependencyKind) -> bool {
        match kind {
            DependencyKind::Production => self.skip_dependencies,
            DependencyKind::Development => self.skip_dev_dependencies,
        }
    }
}

impl CliArgs {
    /// Validate the parsed flags and build the run configuration
    pub fn to_run_config(&self) -> Result<RunConfig, ConfigError> {
        if self.ignore_dependencies && self.ignore_dev_dependencies {
            return Err(ConfigError::ConflictingFlags);
        }

        Ok(RunConfig {
            project_path: self.path.clone(),
            skip_dependencies: self.ignore_dependencies,
            skip_dev_dependencies: self.ignore_dev_dependencies,
            package_manager: self.package_manager.clone(),
        })
    }

    /// Render the usage/help block
    pub fn usage() -> String {
        CliArgs::command().render_help().to_string()
    }
}
