use std::fmt;

/// Lifecycle event that selects a major bump
pub const MAJOR_EVENT: &str = "release:major";
/// Lifecycle event that selects a minor bump
pub const MINOR_EVENT: &str = "release:minor";

/// Which version component a release increments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReleaseTrigger {
    Major,
    Minor,
    #[default]
    Patch,
}

impl ReleaseTrigger {
    /// Map a lifecycle event name to a trigger.
    ///
    /// Only `release:major` and `release:minor` are recognized; anything else,
    /// including no event at all, is a patch release.
    pub fn from_event(event: Option<&str>) -> Self {
        match event {
            Some(MAJOR_EVENT) => ReleaseTrigger::Major,
            Some(MINOR_EVENT) => ReleaseTrigger::Minor,
            _ => ReleaseTrigger::Patch,
        }
    }

    /// Resolve the trigger for this run.
    ///
    /// An explicit override wins, otherwise the environment variable `env_var`
    /// is read as a lifecycle event name.
    pub fn resolve(explicit: Option<ReleaseTrigger>, env_var: &str) -> Self {
        if let Some(trigger) = explicit {
            return trigger;
        }
        let event = std::env::var(env_var).ok();
        Self::from_event(event.as_deref())
    }
}

impl fmt::Display for ReleaseTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseTrigger::Major => "major",
            ReleaseTrigger::Minor => "minor",
            ReleaseTrigger::Patch => "patch",
        };
        f.write_str(name)
    }
}
