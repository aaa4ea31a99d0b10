//! Pure formatting functions for UI output.
//!
//! Status and success lines go to stdout, errors and warnings to stderr.
//! `console` drops the colors when the stream is not a terminal.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::ChangelogEntry;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

/// Display the proposed version change.
///
/// # Arguments
/// * `old_tag` - Latest existing tag
/// * `new_tag` - Tag of the entry being written
pub fn display_version_change(old_tag: &str, new_tag: &str) {
    println!("\n{}", style("Release:").bold());
    println!("  From: {}", style(old_tag).red());
    println!("  To:   {}", style(new_tag).green());
}

/// Print the rendered entry exactly as it would be prepended.
pub fn display_entry_preview(entry: &ChangelogEntry) {
    println!("\n{}", style("Changelog entry preview:").bold().underlined());
    print!("{}", entry.render());
}
