//! Persisted changelog document: newest entry first, older entries untouched.

use crate::domain::ChangelogEntry;
use crate::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read the current changelog, treating a missing file as absent.
///
/// # Returns
/// * `Ok(Some(text))` - Existing content
/// * `Ok(None)` - File does not exist
/// * `Err` - Any other I/O failure
pub fn read_existing(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Prepend `entry` to `existing` content.
pub fn merge(entry: &ChangelogEntry, existing: &str) -> String {
    let mut document = entry.render();
    document.push_str(existing);
    document
}

/// Replace the whole changelog with `content`.
pub fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}
