use std::fmt;

const BULLET: &str = "* ";

/// Body of a release annotation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeLog {
    /// `<short-hash> <subject>` lines, newest first, as history produced them
    Commits(Vec<String>),
    /// Text handed in by the caller, used verbatim
    Supplied(String),
}

impl ChangeLog {
    /// Build a commit changelog from `git log --pretty='%h %s'` output
    pub fn from_log_output(output: &str) -> Self {
        ChangeLog::Commits(
            output
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.trim().is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ChangeLog::Commits(lines) => lines.is_empty(),
            ChangeLog::Supplied(text) => text.trim().is_empty(),
        }
    }
}

/// Message attached to the created tag object
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    text: String,
}

impl Annotation {
    /// Compose `Bump version <tag>`, a blank line, then the changelog body
    pub fn new(tag_name: &str, changelog: &ChangeLog) -> Self {
        let mut lines = vec![format!("Bump version {}", tag_name), String::new()];
        match changelog {
            ChangeLog::Commits(commits) => {
                lines.extend(commits.iter().map(|c| format!("{}{}", BULLET, c)));
            }
            ChangeLog::Supplied(text) => lines.push(text.clone()),
        }
        Annotation {
            text: lines.join("\n"),
        }
    }

    /// Wrap text that was already composed, e.g. after editing
    pub fn from_text(text: impl Into<String>) -> Self {
        Annotation { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
