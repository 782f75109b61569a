//! `add`: record a study date and its review schedule.

use anyhow::Context;
use chrono::NaiveDate;
use review_core::{ensure_not_future, format_date, resolve_date_arg, DateIndex, Scheduler};

use crate::vault::Vault;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub study_date: String,
    pub review_dates: Vec<String>,
}

/// Record `date_arg` ("today" or `YYYY-MM-DD`) in the study → review index.
///
/// Re-adding a known study date overwrites its schedule. The review → study
/// cache is left as is.
pub fn add_study_date(
    vault: &Vault,
    scheduler: &Scheduler,
    date_arg: &str,
    today: NaiveDate,
) -> anyhow::Result<AddOutcome> {
    let study = resolve_date_arg(date_arg, today)?;
    ensure_not_future(study, today)?;

    let index = vault.study_index();
    index
        .backup_to(&vault.backup_dir())
        .context("failed to back up study index")?;

    let study_date = format_date(study);
    let review_dates = scheduler.review_date_strings(study);

    let mut delta = DateIndex::new();
    delta.insert(study_date.clone(), review_dates.clone());
    index
        .merge(delta)
        .with_context(|| format!("failed to record study date {study_date}"))?;

    tracing::info!(study = %study_date, reviews = review_dates.len(), "study date recorded");
    Ok(AddOutcome {
        study_date,
        review_dates,
    })
}
