//! Formatting functions for UI output.
//!
//! Status and diagnostics go to stderr so stdout carries only what scripts
//! consume: the annotation on a dry run, the tag name for `--find-tag`, and
//! the created tag's `git show` output.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
///
/// Shows a yellow warning icon followed by the warning message.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the tag about to be created next to the one it supersedes.
///
/// # Arguments
/// * `old_tag` - Previous tag (None if this is the first tag)
/// * `new_tag` - The new tag being created
pub fn display_proposed_tag(old_tag: Option<&str>, new_tag: &str) {
    match old_tag {
        Some(old) => display_status(&format!(
            "Bumping {} -> {}",
            style(old).red(),
            style(new_tag).green()
        )),
        None => display_status(&format!("Initial tag {}", style(new_tag).green())),
    }
}

/// Confirm a push, the message scripts have relied on.
pub fn push_notice(tag: &str, remote: &str) -> String {
    format!("The tag '{}' has been pushed to the remote '{}'", tag, remote)
}
