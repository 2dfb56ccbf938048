//! package.json model
//!
//! Only `dependencies` and `devDependencies` are read; every other field is
//! ignored. A missing or `null` category is treated as empty.

use crate::domain::DependencyKind;
use crate::error::ManifestError;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

/// Name → declared version specifier
pub type DependencyMap = BTreeMap<String, String>;

#[derive(Deserialize)]
struct RawPackageJson {
    #[serde(default)]
    dependencies: Option<DependencyMap>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Option<DependencyMap>,
}

/// Dependencies declared in a package.json
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    /// Runtime dependencies
    pub dependencies: DependencyMap,
    /// Development dependencies
    pub dev_dependencies: DependencyMap,
}

impl PackageManifest {
    /// Decode a manifest from a reader. `path` is only used in error messages.
    pub fn from_reader<R: Read>(reader: R, path: &Path) -> Result<Self, ManifestError> {
        let json: Value = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                ManifestError::read_error(path, e.into())
            } else {
                ManifestError::json_parse_error(path, e.to_string())
            }
        })?;
        Self::from_value(json, path)
    }

    fn from_value(json: Value, path: &Path) -> Result<Self, ManifestError> {
        if !json.is_object() {
            return Err(ManifestError::json_parse_error(
                path,
                "expected a JSON object at the top level",
            ));
        }

        let raw: RawPackageJson = serde_json::from_value(json)
            .map_err(|e| ManifestError::json_parse_error(path, e.to_string()))?;

        Ok(Self {
            dependencies: raw.dependencies.unwrap_or_default(),
            dev_dependencies: raw.dev_dependencies.unwrap_or_default(),
        })
    }

    /// Returns the entries of one category
    pub fn entries(&self, kind: DependencyKind) -> &DependencyMap {
        match kind {
            DependencyKind::Production => &self.dependencies,
            DependencyKind::Development => &self.dev_dependencies,
        }
    }
}
