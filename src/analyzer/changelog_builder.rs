use crate::domain::ChangeLog;
use crate::error::Result;
use crate::git::VersionControl;

/// Collects the changelog that goes into a release annotation
pub struct ChangeLogBuilder<'a, V: VersionControl + ?Sized> {
    vcs: &'a V,
    supplied: Option<&'a str>,
}

impl<'a, V: VersionControl + ?Sized> ChangeLogBuilder<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        ChangeLogBuilder { vcs, supplied: None }
    }

    /// Use `text` verbatim instead of reading commit history
    pub fn with_supplied(mut self, text: Option<&'a str>) -> Self {
        self.supplied = text;
        self
    }

    /// Build the changelog for commits after `since_tag`.
    ///
    /// An empty `since_tag` covers the whole history. Merge commits are left
    /// out and the newest commit comes first.
    pub fn build(&self, since_tag: &str) -> Result<ChangeLog> {
        if let Some(text) = self.supplied {
            return Ok(ChangeLog::Supplied(text.to_string()));
        }
        let since = (!since_tag.is_empty()).then_some(since_tag);
        let output = self.vcs.commit_summaries(since)?;
        Ok(ChangeLog::from_log_output(&output))
    }
}
