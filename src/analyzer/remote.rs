use crate::error::{BumptagError, Result};
use crate::git::VersionControl;
use regex::Regex;
use std::sync::OnceLock;

/// Current-branch line of `git branch -vv`, capturing the remote of its upstream:
/// `* master cc51028 [origin/master: ahead 1] subject`
fn upstream_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^\*\s+\S+\s+\S+\s+\[([^/\]\s]+)/[^\]]+\]").ok())
        .as_ref()
}

/// Determines which remote the current branch tracks
pub struct RemoteInferer<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
}

impl<'a, V: VersionControl + ?Sized> RemoteInferer<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        RemoteInferer { vcs }
    }

    /// Name of the remote tracked by the checked-out branch.
    ///
    /// Fails with [BumptagError::RemoteNotFound] when the branch has no
    /// upstream; there is no fallback remote.
    pub fn resolve(&self) -> Result<String> {
        let listing = self.vcs.branch_listing()?;
        tracked_remote(&listing).ok_or(BumptagError::RemoteNotFound)
    }
}

/// Extract the upstream remote of the current branch from a verbose listing
pub fn tracked_remote(listing: &str) -> Option<String> {
    let pattern = upstream_pattern()?;
    listing
        .lines()
        .find_map(|line| pattern.captures(line.trim_end()))
        .map(|caps| caps[1].to_string())
}
