//! Manifest loading
//!
//! This module provides functionality to:
//! - Resolve the project directory to an absolute path
//! - Locate `<project>/package.json`
//! - Decode its `dependencies` and `devDependencies`

mod package_json;

pub use package_json::{DependencyMap, PackageManifest};

use crate::error::ManifestError;
use crate::output::Reporter;
use std::fs::File;
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Manifest filename looked up in the project directory
pub const MANIFEST_FILENAME: &str = "package.json";

/// A manifest together with the absolute project directory it was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedManifest {
    /// Absolute project directory
    pub root: PathBuf,
    /// Absolute path of the package.json
    pub path: PathBuf,
    /// Decoded dependencies
    pub manifest: PackageManifest,
}

/// Resolve a project path to an absolute path without touching the filesystem
pub fn resolve_project_root(project_path: &Path) -> Result<PathBuf, ManifestError> {
    std::path::absolute(project_path)
        .map_err(|e| ManifestError::invalid_project_path(project_path, e))
}

/// Read and decode the package.json in an absolute project directory
pub fn read_manifest(root: &Path) -> Result<PackageManifest, ManifestError> {
    let path = root.join(MANIFEST_FILENAME);

    let file = File::open(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ManifestError::not_found(&path),
        _ => ManifestError::read_error(&path, e),
    })?;

    // The handle is dropped when the reader goes out of scope, on success or error.
    PackageManifest::from_reader(BufReader::new(file), &path)
}

/// Resolve the project path, announce the read, and load its manifest
pub fn load_manifest<W: Write>(
    project_path: &Path,
    reporter: &mut Reporter<W>,
) -> Result<LoadedManifest, ManifestError> {
    let root = resolve_project_root(project_path)?;

    reporter.reading_manifest();

    let loaded = LoadedManifest {
        path: root.join(MANIFEST_FILENAME),
        manifest: read_manifest(&root)?,
        root,
    };
    reporter.verbose(&format!(
        "Found {} dependencies and {} devDependencies in {}",
        loaded.manifest.dependencies.len(),
        loaded.manifest.dev_dependencies.len(),
        loaded.path.display()
    ));

    Ok(loaded)
}
