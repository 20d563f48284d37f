//! Version-control abstraction layer
//!
//! Every query and mutation bumptag performs against the repository goes
//! through the [VersionControl] trait, which is passed explicitly into the
//! workflow instead of being reached through global state.
//!
//! # Overview
//!
//! - [system::SystemGit]: runs the `git` binary inside the discovered work tree
//! - [mock::MockGit]: an in-memory double with scripted output for tests
//!
//! Callers parse the raw text these methods return; the trait stays a thin
//! mapping onto git commands.
//!
//! ```rust
//! # use bumptag::git::VersionControl;
//! # fn example<V: VersionControl>(vcs: &V) -> bumptag::Result<()> {
//! let decorations = vcs.decorations()?;
//! for line in decorations.lines() {
//!     println!("{}", line);
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod system;

pub use mock::MockGit;
pub use system::SystemGit;

use crate::error::Result;

/// Which configuration files a lookup may consult
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// Only the repository's own `.git/config`
    Local,
    /// The merged view git itself uses (system, global, local)
    Effective,
}

/// Operations bumptag needs from the version-control system
///
/// ## Thread Safety
///
/// Implementors must be `Send + Sync`: the workflow runs on a blocking
/// worker while the interrupt listener keeps its own handle for restoring
/// repository configuration.
///
/// ## Error Handling
///
/// A command that cannot start or exits unsuccessfully is reported as
/// [crate::error::BumptagError::Command] with the attempted command line and
/// its diagnostic output. Nothing is retried.
pub trait VersionControl: Send + Sync {
    /// Ref decorations of every commit reachable from HEAD, one line per
    /// commit, newest first (`git log --pretty=%D`)
    fn decorations(&self) -> Result<String>;

    /// `<short-hash> <subject>` of non-merge commits, newest first
    ///
    /// # Arguments
    /// * `since` - Tag to start after (exclusive); `None` lists the whole history
    fn commit_summaries(&self, since: Option<&str>) -> Result<String>;

    /// Verbose local branch listing (`git branch --list --no-color -vv`)
    fn branch_listing(&self) -> Result<String>;

    /// Read a configuration value
    ///
    /// # Returns
    /// * `Ok(Some(value))` - The key is set
    /// * `Ok(None)` - The key is not set in the given scope
    /// * `Err` - The lookup itself failed
    fn config_get(&self, key: &str, scope: ConfigScope) -> Result<Option<String>>;

    /// Set a value in the repository's local configuration
    fn config_set_local(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value from the repository's local configuration
    fn config_unset_local(&self, key: &str) -> Result<()>;

    /// Create an annotated tag at HEAD with `annotation` as its message
    ///
    /// # Arguments
    /// * `name` - Tag name, e.g. "v1.2.0"
    /// * `annotation` - Full tag message
    /// * `sign` - Whether to GPG-sign the tag object
    fn create_tag(&self, name: &str, annotation: &str, sign: bool) -> Result<()>;

    /// Human readable rendering of a tag (`git show <name>`)
    fn show_tag(&self, name: &str) -> Result<String>;

    /// Push a single tag to a remote
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}

/// Interpret a git configuration boolean.
///
/// Accepts git's spellings (`true/yes/on/1`, `false/no/off/0`, any case);
/// returns `None` for anything else.
pub fn parse_git_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
