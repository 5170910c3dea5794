//! Version parsing and comparison shared by every tool gate.
//!
//! All tools are modeled as `major.minor.patch` integer triples. Version
//! banners differ wildly in shape ("clang version 11.0.1 (tags/...)",
//! "cmake version 3.31.1", a bare "1.12.1" from ninja), so extraction works
//! on the first dotted-integer run rather than per-tool patterns.

use std::fmt;

use regex::Regex;

/// An ordered `major.minor.patch` triple.
///
/// `Ord` derives from field order, so comparison is lexicographic and
/// matches semantic ordering: `11.0.0 > 9.9.9`, `1.3.0 < 1.12.1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parses the first version found on the first line of `text`.
    ///
    /// Only the first line is considered: banners put the number up front
    /// and later lines often carry unrelated numerics (build dates, commit
    /// counts). A run with more than three components keeps its first three
    /// (the Vulkan SDK publishes `1.3.296.0`, where the fourth is a
    /// packaging serial). A run with fewer than three components is not a
    /// version and yields `None`.
    pub fn parse(text: &str) -> Option<Version> {
        let first_line = text.lines().next()?;
        let run = extract_version(first_line)?;
        let mut parts = run.split('.').map(|p| p.parse::<u64>().ok());
        let major = parts.next().flatten()?;
        let minor = parts.next().flatten()?;
        let patch = parts.next().flatten()?;
        Some(Version::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Isolates the first dotted-integer run in `text` (e.g. "11.0.1" out of
/// "clang version 11.0.1 (tags/RELEASE_1101/final)").
pub fn extract_version(text: &str) -> Option<&str> {
    let re = Regex::new(r"\d+(?:\.\d+)+").ok()?;
    re.find(text).map(|m| m.as_str())
}
