use crate::domain::Annotation;
use crate::error::{BumptagError, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::process::Command;
use tracing::debug;

/// Editor used when neither `EDITOR` nor the settings name one
pub const DEFAULT_EDITOR: &str = "vim";

/// Pick the editor command: `EDITOR`, then `configured`, then [DEFAULT_EDITOR]
pub fn editor_command(configured: Option<&str>) -> String {
    env::var("EDITOR")
        .ok()
        .filter(|e| !e.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Let the user edit `annotation` in `editor` and return the result.
///
/// `editor` may carry arguments (`"code --wait"`); the temporary file path is
/// appended as the last one. The file is removed however the editor exits.
pub fn edit(annotation: &Annotation, editor: &str) -> Result<Annotation> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| BumptagError::editor("no editor configured"))?;

    let mut file = tempfile::Builder::new()
        .prefix("bumptag-")
        .suffix(".txt")
        .tempfile()?;
    file.write_all(annotation.as_str().as_bytes())?;
    file.flush()?;

    debug!(editor, path = %file.path().display(), "opening editor");
    let status = Command::new(program)
        .args(parts)
        .arg(file.path())
        .status()
        .map_err(|e| BumptagError::editor(format!("cannot start '{}': {}", editor, e)))?;
    if !status.success() {
        return Err(BumptagError::editor(format!("'{}' exited with {}", editor, status)));
    }

    let edited = fs::read_to_string(file.path())?;
    Ok(Annotation::from_text(edited))
}
