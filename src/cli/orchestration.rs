//! Main workflow orchestration logic
//!
//! Builds the real collaborators (libgit2 repository, Gemini client) from the
//! loaded [Config] and the CLI arguments, runs the composer, and maps the
//! result to a process exit code. Kept apart from `main.rs` so the wiring can
//! be called without clap.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::composer::{compose, ComposeRequest, Outcome};
use crate::config::Config;
use crate::domain::ReleaseTrigger;
use crate::error::Result;
use crate::generator::GeminiClient;
use crate::git::Git2Repository;

/// Exit code for a written entry, a preview, or a tolerated no-op
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code for any failure
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for an empty diff when running with `--strict`
pub const EXIT_NO_CHANGES: i32 = 3;

/// Arguments for the changelog workflow
///
/// Mirrors the CLI Args in a form that does not depend on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChangelogWorkflowArgs {
    /// Directory inside the repository (discovered upward)
    pub repo_path: PathBuf,

    /// Changelog location, overriding the configured one
    pub changelog_path: Option<PathBuf>,

    /// Explicit bump, overriding the lifecycle event
    pub bump: Option<ReleaseTrigger>,

    /// Entry date, defaulting to today
    pub date: Option<NaiveDate>,

    /// Print the entry instead of writing it
    pub dry_run: bool,
}

impl ChangelogWorkflowArgs {
    /// Build the composer request from these arguments and the config.
    ///
    /// A relative changelog path is taken relative to `workdir`, the root of
    /// the repository being released. The date defaults to today in UTC.
    pub fn to_request(&self, config: &Config, workdir: &Path) -> ComposeRequest {
        let changelog_path = self
            .changelog_path
            .clone()
            .unwrap_or_else(|| config.changelog_path.clone());

        ComposeRequest {
            trigger: ReleaseTrigger::resolve(self.bump, &config.trigger.env_var),
            date: self.date.unwrap_or_else(|| Utc::now().date_naive()),
            changelog_path: workdir.join(changelog_path),
            diff_target: config.git.diff_target,
            dry_run: self.dry_run,
        }
    }
}

/// Run one changelog update against the real repository and model.
///
/// The API key is resolved before any git work so a misconfigured
/// environment fails fast.
pub fn run_changelog_workflow(args: &ChangelogWorkflowArgs, config: &Config) -> Result<Outcome> {
    let api_key = config.api_key()?;
    let generator = GeminiClient::new(&config.model, api_key)?;
    let repo = Git2Repository::open(&args.repo_path)?;
    let workdir = repo
        .workdir()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| args.repo_path.clone());

    let request = args.to_request(config, &workdir);
    debug!(?request, "starting changelog run");

    compose(&repo, &generator, &request)
}

/// Map a run result to the process exit code.
pub fn exit_code(result: &Result<Outcome>, strict: bool) -> i32 {
    match result {
        Ok(Outcome::NoChanges { .. }) if strict => EXIT_NO_CHANGES,
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
