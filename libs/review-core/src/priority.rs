//! Priority grouping of due study dates.

use chrono::NaiveDate;

use crate::date::{format_date, parse_date};
use crate::error::Result;
use crate::types::{IntervalOffsets, PriorityGroups};

/// Split study dates into priority tiers by days elapsed before `review`.
///
/// Dates whose delta is not one of the offsets are dropped silently. Within a
/// tier the input order is kept. A study date string that does not parse is
/// an error.
pub fn group_by_priority<S: AsRef<str>>(
    offsets: &IntervalOffsets,
    review: NaiveDate,
    study_dates: &[S],
) -> Result<PriorityGroups> {
    let mut groups = PriorityGroups::default();

    for raw in study_dates {
        let study = parse_date(raw.as_ref())?;
        let delta = (review - study).num_days();
        match offsets.tier_of(delta) {
            Some(tier) => groups.push(tier, format_date(study)),
            None => tracing::trace!(study = %study, delta, "no priority tier for delta"),
        }
    }

    Ok(groups)
}
