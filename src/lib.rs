//! npmup - package.json dependency upgrader library
//!
//! This library provides the building blocks of the `npmup` CLI:
//! - Argument resolution into a run configuration
//! - Loading `dependencies` and `devDependencies` from package.json
//! - Checking each dependency against the latest published version
//! - Installing newer versions through the package manager

pub mod cli;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod output;
pub mod package_manager;
pub mod progress;
pub mod updater;
