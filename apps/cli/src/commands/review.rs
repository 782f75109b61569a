//! `review`: report the study dates due on a review date.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use review_core::{format_date, group_by_priority, resolve_date_arg, PriorityGroups, Scheduler};

use crate::config::Config;
use crate::render;
use crate::vault::Vault;

#[derive(Debug, Clone)]
pub struct ReviewOutcome {
    pub review_date: String,
    pub groups: PriorityGroups,
    pub report_path: PathBuf,
    pub history_path: PathBuf,
}

/// Resolve, group and render the reviews due on `date_arg`.
///
/// The report is written to `cwd` and a copy is kept in the vault history.
/// With `refresh`, any cached entry for the date is recomputed first.
pub fn review_date(
    vault: &Vault,
    scheduler: &Scheduler,
    config: &Config,
    cwd: &Path,
    date_arg: &str,
    today: NaiveDate,
    refresh: bool,
) -> anyhow::Result<ReviewOutcome> {
    let review = resolve_date_arg(date_arg, today)?;
    let review_date = format_date(review);

    let resolver = vault.resolver(scheduler.clone());
    let resolved = if refresh {
        resolver.refresh(review)
    } else {
        resolver.resolve(review)
    };
    let studies =
        resolved.with_context(|| format!("failed to resolve reviews for {review_date}"))?;

    let groups = group_by_priority(scheduler.offsets(), review, studies.as_slice())?;
    let report = render::review_report(review, scheduler.offsets(), &groups);

    let report_path = cwd.join(&config.report_file);
    fs::write(&report_path, &report)
        .with_context(|| format!("failed to write {}", report_path.display()))?;

    let history_dir = vault.history_dir();
    fs::create_dir_all(&history_dir)
        .with_context(|| format!("failed to create {}", history_dir.display()))?;
    let history_path = history_dir.join(format!("{review_date}.md"));
    fs::write(&history_path, &report)
        .with_context(|| format!("failed to write {}", history_path.display()))?;

    tracing::info!(review = %review_date, due = groups.len(), report = %report_path.display(), "review report written");
    Ok(ReviewOutcome {
        review_date,
        groups,
        report_path,
        history_path,
    })
}
