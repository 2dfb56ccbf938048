//! Dependency updater coordinating the per-dependency workflow
//!
//! This module provides:
//! - The check → compare → install procedure for one dependency
//! - Category processing for `dependencies` and `devDependencies`
//! - Fail-fast error handling: the first failure stops the run

use crate::cli::RunConfig;
use crate::domain::{DependencyKind, UpdateOutcome, UpdateSummary};
use crate::error::{AppError, UpdateError};
use crate::manifest::{load_manifest, PackageManifest};
use crate::output::Reporter;
use crate::package_manager::{Installer, VersionQuerier};
use crate::progress::Progress;
use std::io::Write;
use std::path::Path;

/// Drives version checks and installs for a manifest
pub struct DependencyUpdater<'a, Q: ?Sized, I: ?Sized, W: Write> {
    /// Source of latest versions
    querier: &'a Q,
    /// Performs installs
    installer: &'a I,
    /// Console lines
    reporter: &'a mut Reporter<W>,
    /// Spinner while a query runs
    progress: Progress,
}

impl<'a, Q, I, W> DependencyUpdater<'a, Q, I, W>
where
    Q: VersionQuerier + ?Sized,
    I: Installer + ?Sized,
    W: Write,
{
    /// Create an updater without a spinner
    pub fn new(querier: &'a Q, installer: &'a I, reporter: &'a mut Reporter<W>) -> Self {
        Self {
            querier,
            installer,
            reporter,
            progress: Progress::disabled(),
        }
    }

    /// Use the given progress display for registry queries
    pub fn with_progress(mut self, progress: Progress) -> Self {
        self.progress = progress;
        self
    }

    /// Check one dependency and install its latest version if it differs
    /// from the declared one.
    ///
    /// Versions are compared as plain strings: a declared range such as
    /// `^1.0.0` never equals a published version and is always reinstalled.
    pub fn update_dependency(
        &mut self,
        project_root: &Path,
        name: &str,
        declared: &str,
    ) -> Result<UpdateOutcome, UpdateError> {
        self.reporter.verbose(&format!(
            "Checking latest version of {} (declared {})",
            name, declared
        ));
        if let Some(command) = self.querier.query_command_line(name) {
            self.reporter.verbose(&format!("Running {}", command));
        }

        self.progress.spinner(&format!("Checking {}...", name));
        let latest = self.querier.latest_version(name);
        self.progress.finish_and_clear();
        let latest = latest?.trim().to_string();

        if latest == declared {
            self.reporter.already_current(name, declared);
            return Ok(UpdateOutcome::AlreadyCurrent { version: latest });
        }

        self.reporter.updating(name, declared, &latest);
        let command = self
            .installer
            .install_command_line(name, &latest)
            .unwrap_or_else(|| format!("install {}@{}", name, latest));
        self.reporter.verbose(&format!(
            "Running {} in {}",
            command,
            project_root.display()
        ));
        self.installer.install(project_root, name, &latest)?;

        Ok(UpdateOutcome::Updated {
            from: declared.to_string(),
            to: latest,
        })
    }

    /// Process every category not skipped by `config`, stopping at the first failure
    pub fn update_all(
        &mut self,
        project_root: &Path,
        manifest: &PackageManifest,
        config: &RunConfig,
    ) -> Result<UpdateSummary, UpdateError> {
        let mut summary = UpdateSummary::new();

        for &kind in DependencyKind::all() {
            let entries = manifest.entries(kind);

            if config.skips(kind) {
                self.reporter.skipped_category(kind, entries.len());
                summary.add_ignored(entries.len());
                continue;
            }

            for (name, declared) in entries {
                let outcome = self.update_dependency(project_root, name, declared)?;
                summary.record(&outcome);
            }
        }

        self.reporter.summary(&summary);
        self.reporter.ignored(summary.ignored);
        self.reporter.success();

        Ok(summary)
    }
}

/// Load the manifest named by `config` and update it, stopping at the first failure
pub fn run_update<Q, I, W>(
    config: &RunConfig,
    querier: &Q,
    installer: &I,
    reporter: &mut Reporter<W>,
    progress: Progress,
) -> Result<UpdateSummary, AppError>
where
    Q: VersionQuerier + ?Sized,
    I: Installer + ?Sized,
    W: Write,
{
    let loaded = load_manifest(&config.project_path, reporter)?;

    let summary = DependencyUpdater::new(querier, installer, reporter)
        .with_progress(progress)
        .update_all(&loaded.root, &loaded.manifest, config)?;

    Ok(summary)
}
