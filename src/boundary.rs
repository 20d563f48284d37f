use std::fmt;

/// Warnings that occur at the edges of a repository's release history.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// History contains no semantic-version tag; this will be the first release
    NoPreviousTag { new_tag: String },
    /// No new commits since the latest tag
    NoNewCommits { latest_tag: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoPreviousTag { new_tag } => {
                write!(
                    f,
                    "No version tag found in history, creating first tag '{}'",
                    new_tag
                )
            }
            BoundaryWarning::NoNewCommits { latest_tag } => {
                write!(
                    f,
                    "No new commits since tag '{}', the changelog will be empty",
                    latest_tag
                )
            }
        }
    }
}
