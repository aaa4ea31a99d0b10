use crate::config::DiffTarget;
use crate::error::{ChangelogError, Result};
use crate::git::Repository;
use std::cell::Cell;

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    tag: Option<String>,
    diff: String,
    diff_calls: Cell<usize>,
}

impl MockRepository {
    /// Create a new mock repository with no tags and an empty diff
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the latest tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the diff returned for any tag
    pub fn with_diff(mut self, diff: impl Into<String>) -> Self {
        self.diff = diff.into();
        self
    }

    /// Number of times the diff was requested
    pub fn diff_calls(&self) -> usize {
        self.diff_calls.get()
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self) -> Result<String> {
        self.tag
            .clone()
            .ok_or_else(|| ChangelogError::tag_lookup("No tags found"))
    }

    fn diff_since(&self, tag: &str, _target: DiffTarget) -> Result<String> {
        self.diff_calls.set(self.diff_calls.get() + 1);
        match &self.tag {
            Some(known) if known == tag => Ok(self.diff.clone()),
            _ => Err(ChangelogError::diff(format!("Unknown tag: {}", tag))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_without_tag() {
        let repo = MockRepository::new();
        assert!(matches!(
            repo.latest_tag().unwrap_err(),
            ChangelogError::TagLookup(_)
        ));
    }

    #[test]
    fn test_mock_repository_diff() {
        let repo = MockRepository::new().with_tag("v1.0.0").with_diff("+line\n");

        assert_eq!(repo.latest_tag().unwrap(), "v1.0.0");
        assert_eq!(
            repo.diff_since("v1.0.0", DiffTarget::Head).unwrap(),
            "+line\n"
        );
        assert_eq!(repo.diff_calls(), 1);
    }

    #[test]
    fn test_mock_repository_unknown_tag() {
        let repo = MockRepository::new().with_tag("v1.0.0");
        assert!(repo.diff_since("v2.0.0", DiffTarget::Head).is_err());
    }
}
