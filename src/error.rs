use thiserror::Error;

/// Unified error type for bumptag operations
#[derive(Error, Debug)]
pub enum BumptagError {
    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("command '{command}' failed: {message}")]
    Command { command: String, message: String },

    #[error("remote for current branch not found")]
    RemoteNotFound,

    #[error("Repository configuration error: {0}")]
    Config(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bumptag
pub type Result<T> = std::result::Result<T, BumptagError>;

impl BumptagError {
    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumptagError::Parse(msg.into())
    }

    /// Create a failed-command error from the attempted command line and its diagnostics
    pub fn command(command: impl Into<String>, message: impl Into<String>) -> Self {
        BumptagError::Command {
            command: command.into(),
            message: message.into(),
        }
    }

    /// Create a repository configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumptagError::Config(msg.into())
    }

    /// Create a settings file error with context
    pub fn settings(msg: impl Into<String>) -> Self {
        BumptagError::Settings(msg.into())
    }

    /// Create an editor error with context
    pub fn editor(msg: impl Into<String>) -> Self {
        BumptagError::Editor(msg.into())
    }
}
