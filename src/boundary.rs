use std::fmt;
use std::path::PathBuf;

/// Non-fatal conditions that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Nothing changed since the latest tag; the changelog was left alone
    NoChangesSinceTag { latest_tag: String },
    /// No changelog existed, so a new one was started
    ChangelogMissing { path: PathBuf },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoChangesSinceTag { latest_tag } => {
                write!(
                    f,
                    "No changes since tag '{}', changelog left unchanged",
                    latest_tag
                )
            }
            BoundaryWarning::ChangelogMissing { path } => {
                write!(f, "'{}' did not exist and was created", path.display())
            }
        }
    }
}
