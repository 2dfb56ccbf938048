//! Semantic version change classification
//!
//! Used only to annotate console output. Whether a dependency gets installed
//! is decided by exact string comparison elsewhere.

use regex::Regex;
use semver::Version;
use std::sync::OnceLock;

/// Semantic version change type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

fn version_core_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(\d+)(?:\.(\d+))?(?:\.(\d+))?(-[0-9A-Za-z.-]+)?")
            .expect("version core pattern is valid")
    })
}

/// Extracts the first version-looking token of a specifier and parses it.
///
/// `^1.2.3` → `1.2.3`, `~4.18` → `4.18.0`, `>=2` → `2.0.0`.
fn parse_specifier(spec: &str) -> Option<Version> {
    let caps = version_core_regex().captures(spec.trim())?;
    let major = caps.get(1)?.as_str();
    let minor = caps.get(2).map_or("0", |m| m.as_str());
    let patch = caps.get(3).map_or("0", |m| m.as_str());
    let pre = caps.get(4).map_or("", |m| m.as_str());
    Version::parse(&format!("{}.{}.{}{}", major, minor, patch, pre)).ok()
}

impl VersionChangeType {
    /// Determine the change type between a declared specifier and a new version
    pub fn from_versions(old: &str, new: &str) -> Self {
        match (parse_specifier(old), parse_specifier(new)) {
            (Some(old), Some(new)) if new > old => {
                if new.major != old.major {
                    VersionChangeType::Major
                } else if new.minor != old.minor {
                    VersionChangeType::Minor
                } else if new.patch != old.patch {
                    VersionChangeType::Patch
                } else {
                    // Same core, only the pre-release part moved.
                    VersionChangeType::Unknown
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the plain label, if the change could be classified
    pub fn label(&self) -> Option<&'static str> {
        match self {
            VersionChangeType::Major => Some("major"),
            VersionChangeType::Minor => Some("minor"),
            VersionChangeType::Patch => Some("patch"),
            VersionChangeType::Unknown => None,
        }
    }
}
