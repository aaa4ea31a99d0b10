//! Domain logic - pure release rules independent of git and the model API

pub mod entry;
pub mod trigger;
pub mod version;

pub use entry::ChangelogEntry;
pub use trigger::ReleaseTrigger;
pub use version::Version;
