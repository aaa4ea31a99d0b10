use thiserror::Error;

/// Unified error type for changelog generation
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("Tag lookup failed: {0}")]
    TagLookup(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Diff retrieval failed: {0}")]
    Diff(String),

    #[error("Summary generation failed: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in ai-changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a tag lookup error with context
    pub fn tag_lookup(msg: impl Into<String>) -> Self {
        ChangelogError::TagLookup(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ChangelogError::Version(msg.into())
    }

    /// Create a diff error with context
    pub fn diff(msg: impl Into<String>) -> Self {
        ChangelogError::Diff(msg.into())
    }

    /// Create a generation error with context
    pub fn generation(msg: impl Into<String>) -> Self {
        ChangelogError::Generation(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }
}
