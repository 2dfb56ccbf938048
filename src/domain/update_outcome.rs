//! Result of checking a single dependency

/// What happened to a dependency that was checked successfully.
///
/// Failures are carried on the `Err` side as [`crate::error::UpdateError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The declared version already equals the latest published version
    AlreadyCurrent {
        /// The declared (and latest) version
        version: String,
    },
    /// The latest version was installed
    Updated {
        /// Version declared in package.json
        from: String,
        /// Version that was installed
        to: String,
    },
}

impl UpdateOutcome {
    /// Returns true if an install was performed
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}
