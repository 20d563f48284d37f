use crate::domain::Annotation;
use crate::error::Result;
use crate::git::{parse_git_bool, ConfigScope, VersionControl};
use tracing::info;

/// Repository setting that turns on tag signing
pub const SIGNING_KEY: &str = "commit.gpgsign";

/// Creates annotated tags and pushes them
pub struct TagPublisher<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    sign: bool,
}

impl<'a, V: VersionControl + ?Sized> TagPublisher<'a, V> {
    /// Create a publisher, reading the repository's signing setting once.
    ///
    /// A missing or unparsable `commit.gpgsign` means unsigned tags.
    pub fn new(vcs: &'a V) -> Result<Self> {
        let sign = vcs
            .config_get(SIGNING_KEY, ConfigScope::Effective)?
            .as_deref()
            .and_then(parse_git_bool)
            .unwrap_or(false);
        Ok(TagPublisher { vcs, sign })
    }

    /// Whether tags created by this publisher are GPG-signed
    pub fn signs(&self) -> bool {
        self.sign
    }

    /// Create the annotated tag `name` at HEAD.
    ///
    /// Git creates the tag object atomically; on error no tag is left behind.
    pub fn create_tag(&self, name: &str, annotation: &Annotation) -> Result<()> {
        self.vcs.create_tag(name, annotation.as_str(), self.sign)?;
        info!(tag = name, signed = self.sign, "created tag");
        Ok(())
    }

    /// Push an existing tag to `remote`
    pub fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.vcs.push_tag(remote, name)?;
        info!(tag = name, remote, "pushed tag");
        Ok(())
    }

    /// `git show` output for the tag
    pub fn show(&self, name: &str) -> Result<String> {
        self.vcs.show_tag(name)
    }
}
