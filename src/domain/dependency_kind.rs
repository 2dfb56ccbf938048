//! Dependency categories declared in package.json

/// The two dependency categories this tool processes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    /// Runtime dependencies (`dependencies`)
    Production,
    /// Development dependencies (`devDependencies`)
    Development,
}

impl DependencyKind {
    /// Returns the top-level package.json key for this category
    pub fn manifest_key(&self) -> &'static str {
        match self {
            DependencyKind::Production => "dependencies",
            DependencyKind::Development => "devDependencies",
        }
    }

    /// Returns the CLI flag that skips this category
    pub fn ignore_flag(&self) -> &'static str {
        match self {
            DependencyKind::Production => "--ignore-dependencies",
            DependencyKind::Development => "--ignore-devDependencies",
        }
    }

    /// Returns both categories in processing order
    pub fn all() -> &'static [DependencyKind] {
        &[DependencyKind::Production, DependencyKind::Development]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_key() {
        assert_eq!(DependencyKind::Production.manifest_key(), "dependencies");
        assert_eq!(DependencyKind::Development.manifest_key(), "devDependencies");
    }

    #[test]
    fn test_ignore_flag() {
        assert_eq!(
            DependencyKind::Production.ignore_flag(),
            "--ignore-dependencies"
        );
        assert_eq!(
            DependencyKind::Development.ignore_flag(),
            "--ignore-devDependencies"
        );
    }

    #[test]
    fn test_all_order() {
        assert_eq!(
            DependencyKind::all(),
            &[DependencyKind::Production, DependencyKind::Development]
        );
    }
}
