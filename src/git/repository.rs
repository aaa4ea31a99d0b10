use crate::config::DiffTarget;
use crate::error::{ChangelogError, Result};
use git2::{DescribeFormatOptions, DescribeOptions, DiffFormat, Repository as Git2Repo};
use std::path::Path;
use tracing::debug;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree, `None` for a bare repository
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self) -> Result<String> {
        let mut options = DescribeOptions::new();
        options.describe_tags();

        let describe = self
            .repo
            .describe(&options)
            .map_err(|e| ChangelogError::tag_lookup(format!("No tags found: {}", e.message())))?;

        let mut format = DescribeFormatOptions::new();
        format.abbreviated_size(0);

        let tag = describe
            .format(Some(&format))
            .map_err(|e| ChangelogError::tag_lookup(format!("Cannot format tag: {}", e)))?;

        debug!(%tag, "resolved latest tag");
        Ok(tag)
    }

    fn diff_since(&self, tag: &str, target: DiffTarget) -> Result<String> {
        let tag_tree = self
            .repo
            .revparse_single(&format!("refs/tags/{}", tag))
            .and_then(|object| object.peel_to_tree())
            .map_err(|e| ChangelogError::diff(format!("Cannot resolve tag '{}': {}", tag, e)))?;

        let diff = match target {
            DiffTarget::Head => {
                let head_tree = self
                    .repo
                    .head()
                    .and_then(|head| head.peel_to_tree())
                    .map_err(|e| ChangelogError::diff(format!("Cannot resolve HEAD: {}", e)))?;
                self.repo
                    .diff_tree_to_tree(Some(&tag_tree), Some(&head_tree), None)
            }
            DiffTarget::Workdir => self
                .repo
                .diff_tree_to_workdir_with_index(Some(&tag_tree), None),
        }
        .map_err(|e| ChangelogError::diff(format!("Cannot compute diff: {}", e)))?;

        let mut patch = String::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            if matches!(line.origin(), '+' | '-' | ' ') {
                patch.push(line.origin());
            }
            patch.push_str(&String::from_utf8_lossy(line.content()));
            true
        })
        .map_err(|e| ChangelogError::diff(format!("Cannot render diff: {}", e)))?;

        debug!(%tag, ?target, bytes = patch.len(), "computed diff");
        Ok(patch)
    }
}
