use crate::error::{BumptagError, Result};
use crate::git::{ConfigScope, VersionControl};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tracing::debug;

/// `git config --get` exits with this status when the key is not set
const CONFIG_KEY_MISSING: i32 = 1;

/// Runs the system `git` binary inside a repository's work tree
#[derive(Debug, Clone)]
pub struct SystemGit {
    work_tree: PathBuf,
}

impl SystemGit {
    /// Discover the repository containing `path`
    ///
    /// # Returns
    /// * `Ok(SystemGit)` - Bound to the repository's work tree (or git dir when bare)
    /// * `Err` - If `path` is not inside a git repository
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = git2::Repository::discover(path)?;
        let work_tree = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();
        debug!(work_tree = %work_tree.display(), "discovered repository");
        Ok(SystemGit { work_tree })
    }

    /// Use `work_tree` as-is without discovery
    pub fn at(work_tree: impl Into<PathBuf>) -> Self {
        SystemGit {
            work_tree: work_tree.into(),
        }
    }

    pub fn work_tree(&self) -> &Path {
        &self.work_tree
    }

    fn spawn(&self, input: Option<&str>, args: &[&str]) -> Result<Output> {
        let command_line = command_line(args);
        debug!(command = %command_line, "running git");

        let mut cmd = Command::new("git");
        cmd.args(args)
            .current_dir(&self.work_tree)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let mut child = cmd
            .spawn()
            .map_err(|e| BumptagError::command(&command_line, e.to_string()))?;

        if let Some(text) = input {
            if let Some(mut stdin) = child.stdin.take() {
                stdin
                    .write_all(text.as_bytes())
                    .map_err(|e| BumptagError::command(&command_line, e.to_string()))?;
            }
        }

        let output = child
            .wait_with_output()
            .map_err(|e| BumptagError::command(&command_line, e.to_string()))?;
        debug!(command = %command_line, status = %output.status, "git finished");
        Ok(output)
    }

    /// Run git, returning trimmed stdout or a command error
    fn run(&self, input: Option<&str>, args: &[&str]) -> Result<String> {
        let output = self.spawn(input, args)?;
        if !output.status.success() {
            return Err(failure(args, &output));
        }
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

fn command_line(args: &[&str]) -> String {
    format!("git {}", args.join(" "))
}

fn failure(args: &[&str], output: &Output) -> BumptagError {
    let mut message = output.status.to_string();
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        message.push('\n');
        message.push_str(stderr);
    }
    BumptagError::command(command_line(args), message)
}

impl VersionControl for SystemGit {
    fn decorations(&self) -> Result<String> {
        self.run(None, &["log", "--pretty=%D"])
    }

    fn commit_summaries(&self, since: Option<&str>) -> Result<String> {
        let range = since.map(|tag| format!("{}..HEAD", tag));
        let mut args = vec!["log", "--pretty=%h %s", "--no-merges"];
        if let Some(range) = range.as_deref() {
            args.push(range);
        }
        self.run(None, &args)
    }

    fn branch_listing(&self) -> Result<String> {
        self.run(None, &["branch", "--list", "--no-color", "-vv"])
    }

    fn config_get(&self, key: &str, scope: ConfigScope) -> Result<Option<String>> {
        let args = match scope {
            ConfigScope::Local => vec!["config", "--local", "--get", key],
            ConfigScope::Effective => vec!["config", "--get", key],
        };
        let output = self.spawn(None, &args)?;
        if output.status.success() {
            return Ok(Some(
                String::from_utf8_lossy(&output.stdout).trim().to_string(),
            ));
        }
        if output.status.code() == Some(CONFIG_KEY_MISSING) && output.stderr.is_empty() {
            return Ok(None);
        }
        Err(failure(&args, &output))
    }

    fn config_set_local(&self, key: &str, value: &str) -> Result<()> {
        self.run(None, &["config", "--local", key, value])
            .map(|_| ())
    }

    fn config_unset_local(&self, key: &str) -> Result<()> {
        self.run(None, &["config", "--local", "--unset", key])
            .map(|_| ())
    }

    fn create_tag(&self, name: &str, annotation: &str, sign: bool) -> Result<()> {
        // Without verbatim cleanup git drops lines starting with '#'
        let mut args = vec!["tag", "--cleanup=verbatim", "-F-"];
        if sign {
            args.push("--sign");
        }
        args.push(name);
        self.run(Some(annotation), &args).map(|_| ())
    }

    fn show_tag(&self, name: &str) -> Result<String> {
        self.run(None, &["show", name])
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.run(None, &["push", remote, name]).map(|_| ())
    }
}
