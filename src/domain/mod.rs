//! Core domain models for npmup
//!
//! This module contains the fundamental types used throughout the application:
//! - Dependency categories of a package.json
//! - Per-dependency update outcomes
//! - Run summary counters
//! - Version change classification for display

mod dependency_kind;
mod summary;
mod update_outcome;
mod version_change;

pub use dependency_kind::DependencyKind;
pub use summary::UpdateSummary;
pub use update_outcome::UpdateOutcome;
pub use version_change::VersionChangeType;
