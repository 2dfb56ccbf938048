//! Text reporter for human-readable progress lines
//!
//! Package names are highlighted in yellow, the version being kept or
//! installed in green, and the version being replaced in red. With color
//! disabled the same lines are written without escape codes.

use crate::domain::{DependencyKind, UpdateSummary, VersionChangeType};
use crate::output::{OutputConfig, Verbosity};
use colored::Colorize;
use std::io::{self, Stdout, Write};

/// Writes progress lines for one run
pub struct Reporter<W: Write> {
    /// Destination of all lines
    writer: W,
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl Reporter<Stdout> {
    /// Reporter writing to standard output
    pub fn stdout(config: OutputConfig) -> Self {
        Self::new(io::stdout(), config)
    }
}

impl<W: Write> Reporter<W> {
    /// Create a new reporter
    pub fn new(writer: W, config: OutputConfig) -> Self {
        Self {
            writer,
            verbosity: config.verbosity,
            color: config.color,
        }
    }

    /// Create a reporter without colors
    pub fn plain(writer: W, verbose: bool) -> Self {
        let verbosity = if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        };
        Self::new(writer, OutputConfig::new(verbosity, false))
    }

    /// Consume the reporter and return its writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Whether verbose lines are written
    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    fn line(&mut self, text: &str) {
        // Console output is best effort.
        let _ = writeln!(self.writer, "{}", text);
        // Subprocess output is interleaved with ours.
        let _ = self.writer.flush();
    }

    fn name(&self, name: &str) -> String {
        if self.color {
            name.yellow().to_string()
        } else {
            name.to_string()
        }
    }

    fn new_version(&self, version: &str) -> String {
        if self.color {
            version.green().to_string()
        } else {
            version.to_string()
        }
    }

    fn old_version(&self, version: &str) -> String {
        if self.color {
            version.red().to_string()
        } else {
            version.to_string()
        }
    }

    /// Announce that the manifest is about to be read
    pub fn reading_manifest(&mut self) {
        let text = "Please wait. Reading package.json...";
        if self.color {
            self.line(&text.cyan().to_string());
        } else {
            self.line(text);
        }
    }

    /// Write a line only in verbose mode
    pub fn verbose(&mut self, message: &str) {
        if !self.is_verbose() {
            return;
        }
        let text = format!("  > {}", message);
        if self.color {
            self.line(&text.dimmed().to_string());
        } else {
            self.line(&text);
        }
    }

    /// Note a skipped category (verbose only)
    pub fn skipped_category(&mut self, kind: DependencyKind, count: usize) {
        self.verbose(&format!(
            "Skipping {} {} ({})",
            count,
            kind.manifest_key(),
            kind.ignore_flag()
        ));
    }

    /// Report a dependency whose declared version is the latest
    pub fn already_current(&mut self, name: &str, version: &str) {
        let text = format!(
            "{} is already up to date (current version: {})",
            self.name(name),
            self.new_version(version)
        );
        self.line(&text);
    }

    /// Report that a dependency is about to be installed at a new version
    pub fn updating(&mut self, name: &str, from: &str, to: &str) {
        let change = VersionChangeType::from_versions(from, to)
            .label()
            .map(|label| format!(" [{}]", label))
            .unwrap_or_default();
        let text = format!(
            "Updating {} to {} (old version: {}){}...",
            self.name(name),
            self.new_version(to),
            self.old_version(from),
            change
        );
        self.line(&text);
    }

    /// Report how many dependencies were skipped
    pub fn ignored(&mut self, count: usize) {
        let text = format!("{} dependencies ignored.", count);
        if self.color {
            self.line(&text.yellow().to_string());
        } else {
            self.line(&text);
        }
    }

    /// Report the counters of a finished run
    pub fn summary(&mut self, summary: &UpdateSummary) {
        let text = format!(
            "Checked {} dependencies: {} already up to date, {} updated.",
            summary.checked, summary.up_to_date, summary.updated
        );
        if self.color {
            self.line(&text.bold().to_string());
        } else {
            self.line(&text);
        }
    }

    /// Final success line
    pub fn success(&mut self) {
        let text = "Everything updated successfully.";
        if self.color {
            self.line(&text.green().to_string());
        } else {
            self.line(text);
        }
    }
}

/// Format a fatal error line
pub fn format_error(message: &str, color: bool) -> String {
    if color {
        message.red().to_string()
    } else {
        message.to_string()
    }
}
