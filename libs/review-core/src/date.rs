//! Date parsing and validation helpers.

use chrono::NaiveDate;

use crate::error::{Result, ReviewError};

/// Canonical serialization format for study and review dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const EXPECTED_PATTERN: &str = "YYYY-MM-DD";

/// Parse a strict, zero-padded `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded fields such as `2024-1-1`, so the shape is
/// checked before parsing.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let format_error = || ReviewError::Format {
        value: value.to_string(),
        expected: EXPECTED_PATTERN,
    };

    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(format_error());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| format_error())
}

/// Format a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Resolve a command argument that is either `"today"` or a date string.
pub fn resolve_date_arg(arg: &str, today: NaiveDate) -> Result<NaiveDate> {
    if arg == "today" {
        Ok(today)
    } else {
        parse_date(arg)
    }
}

/// Reject study dates later than the current date.
pub fn ensure_not_future(study: NaiveDate, today: NaiveDate) -> Result<()> {
    if study > today {
        return Err(ReviewError::FutureDate { study, today });
    }
    Ok(())
}
