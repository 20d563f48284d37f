//! User interface module - status output and diagnostics.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_proposed_tag, display_status,
    display_success, push_notice,
};
