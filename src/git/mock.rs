use crate::error::{BumptagError, Result};
use crate::git::{ConfigScope, VersionControl};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Operations that can be scripted to fail on a [MockGit]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    Decorations,
    CommitSummaries,
    BranchListing,
    ConfigGet,
    ConfigSet,
    ConfigUnset,
    CreateTag,
    ShowTag,
    PushTag,
}

/// A tag created through the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedTag {
    pub name: String,
    pub annotation: String,
    pub signed: bool,
}

#[derive(Debug, Default)]
struct MockState {
    local_config: HashMap<String, String>,
    tags: Vec<CreatedTag>,
    pushes: Vec<(String, String)>,
    calls: Vec<String>,
}

/// In-memory version control with scripted history for testing
#[derive(Debug, Default)]
pub struct MockGit {
    decorations: String,
    summaries: HashMap<Option<String>, String>,
    branch_listing: String,
    global_config: HashMap<String, String>,
    failing: HashSet<MockOperation>,
    state: Mutex<MockState>,
}

impl MockGit {
    /// Create a mock with empty history and no configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `git log --pretty=%D` output
    pub fn with_decorations(mut self, output: impl Into<String>) -> Self {
        self.decorations = output.into();
        self
    }

    /// Set the changelog output for commits after `since` (`None` = whole history)
    pub fn with_summaries(mut self, since: Option<&str>, output: impl Into<String>) -> Self {
        self.summaries
            .insert(since.map(str::to_string), output.into());
        self
    }

    /// Set the `git branch --list --no-color -vv` output
    pub fn with_branch_listing(mut self, output: impl Into<String>) -> Self {
        self.branch_listing = output.into();
        self
    }

    /// Set a value visible only through the effective (merged) scope
    pub fn with_global_config(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.global_config.insert(key.into(), value.into());
        self
    }

    /// Set a value in the local repository configuration
    pub fn with_local_config(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.state().local_config.insert(key.into(), value.into());
        self
    }

    /// Make every call of `operation` fail with a command error
    pub fn failing(mut self, operation: MockOperation) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Current local configuration value of `key`
    pub fn local_config(&self, key: &str) -> Option<String> {
        self.state().local_config.get(key).cloned()
    }

    /// Tags created so far, in creation order
    pub fn created_tags(&self) -> Vec<CreatedTag> {
        self.state().tags.clone()
    }

    /// `(remote, tag)` pairs pushed so far
    pub fn pushes(&self) -> Vec<(String, String)> {
        self.state().pushes.clone()
    }

    /// Every call made, rendered as git arguments
    pub fn calls(&self) -> Vec<String> {
        self.state().calls.clone()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, operation: MockOperation, call: String) -> Result<()> {
        self.state().calls.push(call.clone());
        if self.failing.contains(&operation) {
            return Err(BumptagError::command(
                format!("git {}", call),
                "exit status: 1\nscripted failure",
            ));
        }
        Ok(())
    }
}

impl VersionControl for MockGit {
    fn decorations(&self) -> Result<String> {
        self.record(MockOperation::Decorations, "log --pretty=%D".to_string())?;
        Ok(self.decorations.clone())
    }

    fn commit_summaries(&self, since: Option<&str>) -> Result<String> {
        let mut call = "log --pretty=%h %s --no-merges".to_string();
        if let Some(tag) = since {
            call.push_str(&format!(" {}..HEAD", tag));
        }
        self.record(MockOperation::CommitSummaries, call)?;
        Ok(self
            .summaries
            .get(&since.map(str::to_string))
            .cloned()
            .unwrap_or_default())
    }

    fn branch_listing(&self) -> Result<String> {
        self.record(MockOperation::BranchListing, "branch --list --no-color -vv".to_string())?;
        Ok(self.branch_listing.clone())
    }

    fn config_get(&self, key: &str, scope: ConfigScope) -> Result<Option<String>> {
        let call = match scope {
            ConfigScope::Local => format!("config --local --get {}", key),
            ConfigScope::Effective => format!("config --get {}", key),
        };
        self.record(MockOperation::ConfigGet, call)?;
        let local = self.state().local_config.get(key).cloned();
        Ok(match scope {
            ConfigScope::Local => local,
            ConfigScope::Effective => local.or_else(|| self.global_config.get(key).cloned()),
        })
    }

    fn config_set_local(&self, key: &str, value: &str) -> Result<()> {
        self.record(
            MockOperation::ConfigSet,
            format!("config --local {} {}", key, value),
        )?;
        self.state()
            .local_config
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn config_unset_local(&self, key: &str) -> Result<()> {
        self.record(
            MockOperation::ConfigUnset,
            format!("config --local --unset {}", key),
        )?;
        self.state().local_config.remove(key);
        Ok(())
    }

    fn create_tag(&self, name: &str, annotation: &str, sign: bool) -> Result<()> {
        let call = if sign {
            format!("tag --cleanup=verbatim -F- --sign {}", name)
        } else {
            format!("tag --cleanup=verbatim -F- {}", name)
        };
        self.record(MockOperation::CreateTag, call)?;
        let mut state = self.state();
        if state.tags.iter().any(|t| t.name == name) {
            return Err(BumptagError::command(
                format!("git tag --cleanup=verbatim -F- {}", name),
                format!("exit status: 128\nfatal: tag '{}' already exists", name),
            ));
        }
        state.tags.push(CreatedTag {
            name: name.to_string(),
            annotation: annotation.to_string(),
            signed: sign,
        });
        Ok(())
    }

    fn show_tag(&self, name: &str) -> Result<String> {
        self.record(MockOperation::ShowTag, format!("show {}", name))?;
        self.state()
            .tags
            .iter()
            .find(|t| t.name == name)
            .map(|t| format!("tag {}\n\n{}", t.name, t.annotation))
            .ok_or_else(|| {
                BumptagError::command(
                    format!("git show {}", name),
                    format!("exit status: 128\nfatal: ambiguous argument '{}'", name),
                )
            })
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.record(MockOperation::PushTag, format!("push {} {}", remote, name))?;
        self.state()
            .pushes
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
