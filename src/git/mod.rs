//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the two version-control
//! queries the changelog run needs: the most recent tag and the unified diff
//! since that tag.
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A canned implementation for testing
//!
//! ```rust
//! # use ai_changelog::config::DiffTarget;
//! # use ai_changelog::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> ai_changelog::Result<()> {
//! let tag = repo.latest_tag()?;
//! let diff = repo.diff_since(&tag, DiffTarget::Head)?;
//! println!("{} bytes changed since {}", diff.len(), tag);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::config::DiffTarget;
use crate::error::Result;

/// Version-control queries consumed by the composer
///
/// Implementations should map underlying errors to
/// [crate::error::ChangelogError::TagLookup] and
/// [crate::error::ChangelogError::Diff] so callers can tell the steps apart.
pub trait Repository {
    /// Name of the most recent tag reachable from HEAD
    ///
    /// Equivalent to `git describe --tags --abbrev=0`: lightweight and
    /// annotated tags both count.
    ///
    /// # Returns
    /// * `Ok(String)` - The tag name, e.g. `v1.4.2`
    /// * `Err(TagLookup)` - If no tag is reachable
    fn latest_tag(&self) -> Result<String>;

    /// Unified diff between `tag` and the chosen target
    ///
    /// Returns an empty string when nothing changed.
    ///
    /// # Arguments
    /// * `tag` - Tag name to diff from
    /// * `target` - HEAD (like `git diff tag..HEAD`) or the working tree
    fn diff_since(&self, tag: &str, target: DiffTarget) -> Result<String>;
}
