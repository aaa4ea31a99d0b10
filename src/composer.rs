//! Release Note Composer
//!
//! One linear run: latest tag, diff, next version, model summary, prepend to
//! the changelog. Every failure is returned to the caller as a typed error;
//! an empty diff is a successful [Outcome::NoChanges].

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::changelog;
use crate::config::DiffTarget;
use crate::domain::{ChangelogEntry, ReleaseTrigger, Version};
use crate::error::Result;
use crate::generator::SummaryGenerator;
use crate::git::Repository;

/// Inputs for a single composer run
#[derive(Debug, Clone, PartialEq)]
pub struct ComposeRequest {
    pub trigger: ReleaseTrigger,
    /// Date stamped on the new entry
    pub date: NaiveDate,
    pub changelog_path: PathBuf,
    pub diff_target: DiffTarget,
    /// Generate the entry but do not write it
    pub dry_run: bool,
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The diff since `latest_tag` was empty; nothing was generated or written
    NoChanges { latest_tag: String },
    /// The entry was prepended to the changelog
    Written {
        previous_tag: String,
        entry: ChangelogEntry,
        path: PathBuf,
        /// The changelog did not exist before this run
        created: bool,
    },
    /// Dry run: the entry that would have been written
    Previewed {
        previous_tag: String,
        entry: ChangelogEntry,
    },
}

/// Resolve the next version from the latest tag and a trigger.
pub fn next_version(latest_tag: &str, trigger: ReleaseTrigger) -> Result<Version> {
    Version::parse(latest_tag)?.bump(trigger)
}

/// Run the composer against the given collaborators.
///
/// The generator is only called when the diff is non-empty and the tag
/// parsed, and the changelog is only written after the summary arrived.
pub fn compose<R, G>(repo: &R, generator: &G, request: &ComposeRequest) -> Result<Outcome>
where
    R: Repository,
    G: SummaryGenerator,
{
    let latest_tag = repo.latest_tag()?;
    let diff = repo.diff_since(&latest_tag, request.diff_target)?;

    if diff.is_empty() {
        info!(%latest_tag, "no changes since latest tag");
        return Ok(Outcome::NoChanges { latest_tag });
    }

    let version = next_version(&latest_tag, request.trigger)?;
    info!(%latest_tag, next = %version, trigger = %request.trigger, "resolved next version");

    let summary = generator.summarize(&diff)?;
    let entry = ChangelogEntry::new(version, request.date, summary);

    if request.dry_run {
        return Ok(Outcome::Previewed {
            previous_tag: latest_tag,
            entry,
        });
    }

    let existing = changelog::read_existing(&request.changelog_path)?;
    let created = existing.is_none();
    let document = changelog::merge(&entry, existing.as_deref().unwrap_or_default());
    write_changelog(&request.changelog_path, &document)?;

    Ok(Outcome::Written {
        previous_tag: latest_tag,
        entry,
        path: request.changelog_path.clone(),
        created,
    })
}

fn write_changelog(path: &Path, document: &str) -> Result<()> {
    debug!(path = %path.display(), bytes = document.len(), "writing changelog");
    changelog::write(path, document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChangelogError;
    use crate::git::MockRepository;
    use std::cell::Cell;
    use std::fs;
    use tempfile::TempDir;

    struct FakeGenerator {
        reply: Option<String>,
        calls: Cell<usize>,
        seen_diff: std::cell::RefCell<String>,
    }

    impl FakeGenerator {
        fn replying(text: &str) -> Self {
            FakeGenerator {
                reply: Some(text.to_string()),
                calls: Cell::new(0),
                seen_diff: Default::default(),
            }
        }

        fn failing() -> Self {
            FakeGenerator {
                reply: None,
                calls: Cell::new(0),
                seen_diff: Default::default(),
            }
        }
    }

    impl SummaryGenerator for FakeGenerator {
        fn summarize(&self, diff: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            *self.seen_diff.borrow_mut() = diff.to_string();
            self.reply
                .clone()
                .ok_or_else(|| ChangelogError::generation("quota exceeded"))
        }
    }

    fn request(dir: &TempDir, trigger: ReleaseTrigger) -> ComposeRequest {
        ComposeRequest {
            trigger,
            date: NaiveDate::from_ymd_opt(2024, 6, 15).unwrap(),
            changelog_path: dir.path().join("CHANGELOG.md"),
            diff_target: DiffTarget::Head,
            dry_run: false,
        }
    }

    #[test]
    fn test_next_version_bump_table() {
        let cases = [
            ("v2.4.9", ReleaseTrigger::Major, Version::new(3, 0, 0)),
            ("v2.4.9", ReleaseTrigger::Minor, Version::new(2, 5, 0)),
            ("v2.4.9", ReleaseTrigger::Patch, Version::new(2, 4, 10)),
            ("v0.0.0", ReleaseTrigger::Patch, Version::new(0, 0, 1)),
        ];
        for (tag, trigger, expected) in cases {
            assert_eq!(next_version(tag, trigger).unwrap(), expected);
        }
    }

    #[test]
    fn test_writes_new_changelog() {
        let dir = TempDir::new().unwrap();
        let repo = MockRepository::new()
            .with_tag("v2.4.9")
            .with_diff("+new line\n");
        let generator = FakeGenerator::replying("### Features\n- thing");

        let outcome = compose(&repo, &generator, &request(&dir, ReleaseTrigger::Minor)).unwrap();

        let content = fs::read_to_string(dir.path().join("CHANGELOG.md")).unwrap();
        assert_eq!(
            content,
            "## v2.5.0 (2024-06-15)\n\n### Features\n- thing\n\n"
        );
        assert_eq!(*generator.seen_diff.borrow(), "+new line\n");
        match outcome {
            Outcome::Written { created, entry, .. } => {
                assert!(created);
                assert_eq!(entry.version, Version::new(2, 5, 0));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_prepends_to_existing_changelog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        let old = "## v1.0.0 (2024-01-01)\n\n- initial release\n";
        fs::write(&path, old).unwrap();

        let repo = MockRepository::new().with_tag("v1.0.0").with_diff("+x\n");
        let generator = FakeGenerator::replying("- fix crash");
        let outcome = compose(&repo, &generator, &request(&dir, ReleaseTrigger::Patch)).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            format!("## v1.0.1 (2024-06-15)\n\n- fix crash\n\n{}", old)
        );
        assert!(matches!(outcome, Outcome::Written { created: false, .. }));
    }

    #[test]
    fn test_empty_diff_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, "unchanged\n").unwrap();

        let repo = MockRepository::new().with_tag("v1.0.0").with_diff("");
        let generator = FakeGenerator::replying("should not be used");
        let outcome = compose(&repo, &generator, &request(&dir, ReleaseTrigger::Patch)).unwrap();

        assert_eq!(
            outcome,
            Outcome::NoChanges {
                latest_tag: "v1.0.0".to_string()
            }
        );
        assert_eq!(generator.calls.get(), 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "unchanged\n");
    }

    #[test]
    fn test_empty_diff_with_malformed_tag_is_still_noop() {
        let dir = TempDir::new().unwrap();
        let repo = MockRepository::new().with_tag("release-1").with_diff("");
        let generator = FakeGenerator::replying("unused");

        let outcome = compose(&repo, &generator, &request(&dir, ReleaseTrigger::Patch)).unwrap();
        assert!(matches!(outcome, Outcome::NoChanges { .. }));
    }

    #[test]
    fn test_malformed_tag_fails_without_write_or_call() {
        let dir = TempDir::new().unwrap();
        let repo = MockRepository::new().with_tag("release-1").with_diff("+x\n");
        let generator = FakeGenerator::replying("unused");

        let err = compose(&repo, &generator, &request(&dir, ReleaseTrigger::Patch)).unwrap_err();

        assert!(matches!(err, ChangelogError::Version(_)));
        assert_eq!(generator.calls.get(), 0);
        assert!(!dir.path().join("CHANGELOG.md").exists());
    }

    #[test]
    fn test_missing_tag_fails() {
        let dir = TempDir::new().unwrap();
        let repo = MockRepository::new();
        let generator = FakeGenerator::replying("unused");

        let err = compose(&repo, &generator, &request(&dir, ReleaseTrigger::Patch)).unwrap_err();
        assert!(matches!(err, ChangelogError::TagLookup(_)));
        assert_eq!(repo.diff_calls(), 0);
    }

    #[test]
    fn test_generation_failure_leaves_changelog() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("CHANGELOG.md");
        fs::write(&path, "old\n").unwrap();

        let repo = MockRepository::new().with_tag("v3.1.4").with_diff("+x\n");
        let generator = FakeGenerator::failing();

        let err = compose(&repo, &generator, &request(&dir, ReleaseTrigger::Major)).unwrap_err();
        assert!(matches!(err, ChangelogError::Generation(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "old\n");
    }

    #[test]
    fn test_dry_run_does_not_write() {
        let dir = TempDir::new().unwrap();
        let repo = MockRepository::new().with_tag("v0.9.0").with_diff("+x\n");
        let generator = FakeGenerator::replying("- preview");
        let mut req = request(&dir, ReleaseTrigger::Major);
        req.dry_run = true;

        let outcome = compose(&repo, &generator, &req).unwrap();

        match outcome {
            Outcome::Previewed { previous_tag, entry } => {
                assert_eq!(previous_tag, "v0.9.0");
                assert_eq!(entry.header(), "## v1.0.0 (2024-06-15)");
                assert_eq!(entry.body, "- preview");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(!dir.path().join("CHANGELOG.md").exists());
    }

    #[test]
    fn test_unwritable_changelog_is_io_error() {
        let dir = TempDir::new().unwrap();
        let repo = MockRepository::new().with_tag("v1.0.0").with_diff("+x\n");
        let generator = FakeGenerator::replying("- body");
        let mut req = request(&dir, ReleaseTrigger::Patch);
        req.changelog_path = dir.path().join("missing-dir").join("CHANGELOG.md");

        let err = compose(&repo, &generator, &req).unwrap_err();
        assert!(matches!(err, ChangelogError::Io(_)));
    }
}
