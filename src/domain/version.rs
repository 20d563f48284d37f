use crate::error::{BumptagError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Semantic version of a release tag.
///
/// Pre-release and build metadata are kept so an explicit version renders
/// back the way the user typed it, but only the `major.minor.patch` triple
/// takes part in comparisons.
#[derive(Debug, Clone)]
pub struct Version {
    inner: semver::Version,
}

impl Version {
    /// Create a new version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            inner: semver::Version::new(major, minor, patch),
        }
    }

    /// The version used when no tag exists yet
    pub fn zero() -> Self {
        Version::new(0, 0, 0)
    }

    /// Parse a version from text, stripping `prefix` first when present.
    ///
    /// `"v1.2.3"` with prefix `"v"` and plain `"1.2.3"` both parse; anything
    /// that is not a full semantic version (e.g. `"v3.0"`) is rejected.
    pub fn parse(text: &str, prefix: &str) -> Result<Self> {
        let trimmed = text.trim();
        let bare = trimmed.strip_prefix(prefix).unwrap_or(trimmed);
        semver::Version::parse(bare)
            .map(|inner| Version { inner })
            .map_err(|e| BumptagError::parse(format!("invalid version '{}': {}", text, e)))
    }

    pub fn major(&self) -> u64 {
        self.inner.major
    }

    pub fn minor(&self) -> u64 {
        self.inner.minor
    }

    pub fn patch(&self) -> u64 {
        self.inner.patch
    }

    /// Whether this is the `0.0.0` placeholder for "no tag"
    pub fn is_zero(&self) -> bool {
        self.major() == 0 && self.minor() == 0 && self.patch() == 0
    }

    /// Apply one bump in place
    ///
    /// Fails without touching `self` when the bumped component would overflow.
    pub fn bump(&mut self, bump_type: VersionBump) -> Result<()> {
        let next = |n: u64| {
            n.checked_add(1).ok_or_else(|| {
                BumptagError::parse(format!("cannot bump {:?} of version {}", bump_type, self))
            })
        };
        let (major, minor, patch) = match bump_type {
            VersionBump::Major => (next(self.major())?, 0, 0),
            VersionBump::Minor => (self.major(), next(self.minor())?, 0),
            VersionBump::Patch => (self.major(), self.minor(), next(self.patch())?),
        };
        self.inner = semver::Version::new(major, minor, patch);
        Ok(())
    }

    /// Replace this version wholesale with a user supplied one
    pub fn set_explicit(&mut self, text: &str, prefix: &str) -> Result<()> {
        *self = Version::parse(text, prefix)?;
        Ok(())
    }

    /// Render the tag name for this version
    pub fn to_tag_name(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self)
    }

    fn triple(&self) -> (u64, u64, u64) {
        (self.major(), self.minor(), self.patch())
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::zero()
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.triple() == other.triple()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.triple().cmp(&other.triple())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Version bump granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionBump {
    Major,
    #[default]
    Minor,
    Patch,
}
