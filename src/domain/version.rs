use crate::error::{ChangelogError, Result};
use crate::domain::ReleaseTrigger;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

fn version_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^v?(\d+)\.(\d+)\.(\d+)$").expect("version tag pattern is valid")
    })
}

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse version from a tag string (e.g., "v1.2.3" -> Version(1,2,3))
    ///
    /// A single leading lowercase `v` is optional. Pre-release and build
    /// metadata suffixes are rejected.
    pub fn parse(tag: &str) -> Result<Self> {
        let caps = version_tag_regex().captures(tag).ok_or_else(|| {
            ChangelogError::version(format!(
                "Invalid version format: '{}' - expected vMAJOR.MINOR.PATCH",
                tag
            ))
        })?;

        let component = |idx: usize, name: &str| -> Result<u64> {
            caps[idx].parse::<u64>().map_err(|_| {
                ChangelogError::version(format!("Invalid {} version: {}", name, &caps[idx]))
            })
        };

        Ok(Version {
            major: component(1, "major")?,
            minor: component(2, "minor")?,
            patch: component(3, "patch")?,
        })
    }

    /// Bump version according to the release trigger
    pub fn bump(&self, trigger: ReleaseTrigger) -> Result<Self> {
        let overflow =
            |name: &str| ChangelogError::version(format!("{} component overflow in {}", name, self));

        let next = match trigger {
            ReleaseTrigger::Major => Version {
                major: self.major.checked_add(1).ok_or_else(|| overflow("major"))?,
                minor: 0,
                patch: 0,
            },
            ReleaseTrigger::Minor => Version {
                major: self.major,
                minor: self.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
                patch: 0,
            },
            ReleaseTrigger::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
            },
        };
        Ok(next)
    }

    /// Tag form of the version, e.g. `v1.2.3`
    pub fn to_tag(&self) -> String {
        format!("v{}", self)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
