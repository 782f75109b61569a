//! Markdown rendering of review reports.

use std::fmt::Write;

use chrono::NaiveDate;
use review_core::{format_date, IntervalOffsets, PriorityGroups, PriorityTier};

/// Render grouped study dates as a Markdown report for `review`.
pub fn review_report(review: NaiveDate, offsets: &IntervalOffsets, groups: &PriorityGroups) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", format_date(review));

    for tier in PriorityTier::ALL {
        let _ = writeln!(out, "\n## {}\n", tier.title());
        let _ = writeln!(out, "*{}*\n", tier_note(&offsets.offsets_in(tier)));

        let dates = groups.get(tier);
        if dates.is_empty() {
            out.push_str("**None**\n");
        } else {
            for date in dates {
                let _ = writeln!(out, "- {date}");
            }
        }

        out.push_str("\n---\n");
    }

    out
}

fn tier_note(offsets: &[i64]) -> String {
    let days: Vec<String> = offsets.iter().map(i64::to_string).collect();
    let joined = match days.as_slice() {
        [] => return "No reviews scheduled in this tier.".to_string(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    };
    format!("Reviews scheduled for {joined} days after learning.")
}
