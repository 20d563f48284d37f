use crate::domain::{parse_decorations, TagReference, Version};
use crate::error::Result;
use crate::git::VersionControl;
use tracing::debug;

/// The highest version tag found in history
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedTag {
    pub version: Version,
    /// Ref text as stored in history; empty when no tag exists
    pub name: String,
}

impl ResolvedTag {
    /// Whether history contained no version tag at all
    pub fn is_none(&self) -> bool {
        self.name.is_empty()
    }
}

/// Finds the numerically highest semantic-version tag reachable from HEAD
pub struct TagResolver<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    prefix: &'a str,
}

impl<'a, V: VersionControl + ?Sized> TagResolver<'a, V> {
    /// Create a resolver for tags named `<prefix><version>`
    pub fn new(vcs: &'a V, prefix: &'a str) -> Self {
        TagResolver { vcs, prefix }
    }

    /// Scan every decorated commit and return the highest version tag.
    ///
    /// Returns `0.0.0` with an empty name when no tag parses.
    pub fn resolve(&self) -> Result<ResolvedTag> {
        let output = self.vcs.decorations()?;
        let resolved = select_latest(parse_decorations(&output, self.prefix));
        debug!(tag = %resolved.name, version = %resolved.version, "resolved latest tag");
        Ok(resolved)
    }
}

/// Pick the highest version among `refs`; on equal versions the first one wins
pub fn select_latest(refs: impl IntoIterator<Item = TagReference>) -> ResolvedTag {
    let mut latest = ResolvedTag::default();
    for tag in refs {
        match tag.version {
            Some(version) if version > latest.version => {
                latest = ResolvedTag {
                    version,
                    name: tag.name,
                };
            }
            Some(_) => {}
            None => debug!(tag = %tag.name, "skipping tag that is not a semantic version"),
        }
    }
    latest
}
