use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ai_changelog::boundary::BoundaryWarning;
use ai_changelog::cli::orchestration::{exit_code, run_changelog_workflow, ChangelogWorkflowArgs};
use ai_changelog::composer::Outcome;
use ai_changelog::config;
use ai_changelog::domain::ReleaseTrigger;
use ai_changelog::ui;

#[derive(clap::Parser)]
#[command(
    name = "ai-changelog",
    about = "Summarize changes since the last git tag and prepend them to CHANGELOG.md"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(long, help = "Changelog file to update (relative to the repository root)")]
    changelog: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_enum,
        help = "Version component to bump (defaults to the lifecycle event)"
    )]
    bump: Option<ReleaseTrigger>,

    #[arg(long, help = "Entry date as YYYY-MM-DD (defaults to today in UTC)")]
    date: Option<NaiveDate>,

    #[arg(long, help = "Print the entry without writing the changelog")]
    dry_run: bool,

    #[arg(long, help = "Exit with code 3 when there are no changes since the last tag")]
    strict: bool,

    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,

    #[arg(short = 'V', long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("ai-changelog {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing(args.verbose);

    let config = config::load_config(args.config.as_deref())
        .context("Failed to load configuration")?;

    let workflow_args = ChangelogWorkflowArgs {
        repo_path: args.repo,
        changelog_path: args.changelog,
        bump: args.bump,
        date: args.date,
        dry_run: args.dry_run,
    };

    ui::display_status("Generating changelog entry from changes since the last tag...");
    let result = run_changelog_workflow(&workflow_args, &config);

    match &result {
        Ok(Outcome::NoChanges { latest_tag }) => {
            ui::display_boundary_warning(&BoundaryWarning::NoChangesSinceTag {
                latest_tag: latest_tag.clone(),
            });
        }
        Ok(Outcome::Previewed {
            previous_tag,
            entry,
        }) => {
            ui::display_version_change(previous_tag, &entry.version.to_tag());
            ui::display_entry_preview(entry);
            ui::display_success("Dry run: changelog not modified");
        }
        Ok(Outcome::Written {
            previous_tag,
            entry,
            path,
            created,
        }) => {
            ui::display_version_change(previous_tag, &entry.version.to_tag());
            if *created {
                ui::display_boundary_warning(&BoundaryWarning::ChangelogMissing {
                    path: path.clone(),
                });
            }
            ui::display_success(&format!(
                "Changelog entry for {} written to {}",
                entry.version.to_tag(),
                path.display()
            ));
        }
        Err(e) => {
            tracing::error!(error = %e, "changelog generation failed");
            ui::display_error(&format!("Error generating changelog: {}", e));
        }
    }

    let code = exit_code(&result, args.strict);
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
