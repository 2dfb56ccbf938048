//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ConfigError: Invalid combinations of CLI flags
//! - ManifestError: Locating, reading and decoding package.json
//! - UpdateError: Registry queries and installs through the package manager

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Manifest file related errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Per-dependency update errors
    #[error(transparent)]
    Update(#[from] UpdateError),
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Both dependency categories were asked to be skipped
    #[error(
        "cannot use both --ignore-dependencies and --ignore-devDependencies flags at the same time"
    )]
    ConflictingFlags,
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The project path could not be made absolute
    #[error("invalid project path '{path}': {source}")]
    InvalidProjectPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest file not found
    #[error("package.json not found in the specified directory: {path}")]
    NotFound { path: PathBuf },

    /// Failed to open or read the manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not JSON or does not have the expected shape
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors raised while checking or installing a single dependency
#[derive(Error, Debug)]
pub enum UpdateError {
    /// The latest version could not be obtained from the registry
    #[error("failed to check version for {package}: {message}")]
    RegistryQueryFailed { package: String, message: String },

    /// The install command failed
    #[error("failed to install {package}@{version}: {message}")]
    InstallFailed {
        package: String,
        version: String,
        message: String,
    },
}

impl ManifestError {
    /// Creates a new InvalidProjectPath error
    pub fn invalid_project_path(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::InvalidProjectPath {
            path: path.into(),
            source,
        }
    }

    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        ManifestError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl UpdateError {
    /// Creates a new RegistryQueryFailed error
    pub fn registry_query_failed(package: impl Into<String>, message: impl Into<String>) -> Self {
        UpdateError::RegistryQueryFailed {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new InstallFailed error
    pub fn install_failed(
        package: impl Into<String>,
        version: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        UpdateError::InstallFailed {
            package: package.into(),
            version: version.into(),
            message: message.into(),
        }
    }
}
