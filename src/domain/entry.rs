use crate::domain::Version;
use chrono::NaiveDate;

/// A single dated release entry in the changelog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogEntry {
    pub version: Version,
    pub date: NaiveDate,
    pub body: String,
}

impl ChangelogEntry {
    /// Create a new entry
    pub fn new(version: Version, date: NaiveDate, body: impl Into<String>) -> Self {
        ChangelogEntry {
            version,
            date,
            body: body.into(),
        }
    }

    /// Header line, e.g. `## v1.2.3 (2024-05-01)`
    pub fn header(&self) -> String {
        format!("## {} ({})", self.version.to_tag(), self.date.format("%Y-%m-%d"))
    }

    /// Full entry text as it is written to the head of the changelog.
    ///
    /// The body is kept verbatim and the entry always ends with two newlines.
    pub fn render(&self) -> String {
        format!("{}\n\n{}\n\n", self.header(), self.body)
    }
}
