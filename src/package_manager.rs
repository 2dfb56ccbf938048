//! Package manager integration for version lookups and installs
//!
//! This module provides:
//! - Capability traits for querying the latest version and installing a package
//! - A system implementation that shells out to the package manager executable

use crate::error::UpdateError;
use std::path::Path;
use std::process::{Command, Stdio};

/// Looks up the latest published version of a package
pub trait VersionQuerier {
    /// Return the latest version of `package`, trimmed of surrounding whitespace
    fn latest_version(&self, package: &str) -> Result<String, UpdateError>;

    /// Command line run by [`VersionQuerier::latest_version`], if there is one
    fn query_command_line(&self, _package: &str) -> Option<String> {
        None
    }
}

/// Installs a package at a specific version into a project
pub trait Installer {
    /// Install `package@version` with `project_root` as working directory
    fn install(
        &self,
        project_root: &Path,
        package: &str,
        version: &str,
    ) -> Result<(), UpdateError>;

    /// Command line run by [`Installer::install`], if there is one
    fn install_command_line(&self, _package: &str, _version: &str) -> Option<String> {
        None
    }
}

/// Default package manager that executes real commands
#[derive(Debug, Clone)]
pub struct SystemPackageManager {
    /// Executable name or path
    program: String,
}

impl Default for SystemPackageManager {
    fn default() -> Self {
        Self::new(crate::cli::DEFAULT_PACKAGE_MANAGER)
    }
}

impl SystemPackageManager {
    /// Create a package manager that runs `program`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Arguments of the latest-version query
    fn show_args(package: &str) -> [String; 3] {
        ["show".to_string(), package.to_string(), "version".to_string()]
    }

    /// Arguments of the install command
    fn install_args(package: &str, version: &str) -> [String; 2] {
        ["install".to_string(), format!("{}@{}", package, version)]
    }
}

impl VersionQuerier for SystemPackageManager {
    fn latest_version(&self, package: &str) -> Result<String, UpdateError> {
        let output = Command::new(&self.program)
            .args(Self::show_args(package))
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                UpdateError::registry_query_failed(
                    package,
                    format!("failed to execute {}: {}", self.program, e),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            let message = if stderr.is_empty() {
                output.status.to_string()
            } else {
                format!("{}: {}", output.status, stderr)
            };
            return Err(UpdateError::registry_query_failed(package, message));
        }

        let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if version.is_empty() {
            return Err(UpdateError::registry_query_failed(
                package,
                "no version was reported",
            ));
        }

        Ok(version)
    }

    fn query_command_line(&self, package: &str) -> Option<String> {
        Some(format!("{} {}", self.program, Self::show_args(package).join(" ")))
    }
}

impl Installer for SystemPackageManager {
    fn install(
        &self,
        project_root: &Path,
        package: &str,
        version: &str,
    ) -> Result<(), UpdateError> {
        let status = Command::new(&self.program)
            .args(Self::install_args(package, version))
            .current_dir(project_root)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                UpdateError::install_failed(
                    package,
                    version,
                    format!("failed to execute {}: {}", self.program, e),
                )
            })?;

        if !status.success() {
            return Err(UpdateError::install_failed(
                package,
                version,
                status.to_string(),
            ));
        }

        Ok(())
    }

    fn install_command_line(&self, package: &str, version: &str) -> Option<String> {
        Some(format!(
            "{} {}",
            self.program,
            Self::install_args(package, version).join(" ")
        ))
    }
}
