//! User interface module - console output for a changelog run.

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_entry_preview, display_error, display_status,
    display_success, display_version_change,
};
