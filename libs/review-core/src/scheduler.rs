//! Fixed-interval review scheduler.
//!
//! A study date is reviewed once per offset in the interval table. The
//! reverse direction enumerates every study date whose schedule could land
//! on a given review date, whether or not it was ever recorded.

use chrono::{Duration, NaiveDate};

use crate::date::format_date;
use crate::types::IntervalOffsets;

/// Maps study dates to review dates and back using an interval table.
#[derive(Debug, Clone, Default)]
pub struct Scheduler {
    offsets: IntervalOffsets,
}

impl Scheduler {
    pub fn new(offsets: IntervalOffsets) -> Self {
        Self { offsets }
    }

    pub fn offsets(&self) -> &IntervalOffsets {
        &self.offsets
    }

    /// Review dates for a study date, in offset order.
    pub fn review_dates(&self, study: NaiveDate) -> Vec<NaiveDate> {
        self.offsets
            .iter()
            .map(|offset| study + Duration::days(offset))
            .collect()
    }

    /// Study dates whose schedule includes the given review date, in offset order.
    pub fn possible_study_dates(&self, review: NaiveDate) -> Vec<NaiveDate> {
        self.offsets
            .iter()
            .map(|offset| review - Duration::days(offset))
            .collect()
    }

    /// Review dates formatted for storage.
    pub fn review_date_strings(&self, study: NaiveDate) -> Vec<String> {
        self.review_dates(study).into_iter().map(format_date).collect()
    }

    /// Candidate study dates formatted for index lookups.
    pub fn possible_study_date_strings(&self, review: NaiveDate) -> Vec<String> {
        self.possible_study_dates(review)
            .into_iter()
            .map(format_date)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::parse_date;
    use crate::types::MAX_OFFSET_DAYS;
    use pretty_assertions::assert_eq;

    #[test]
    fn review_dates_for_new_year() {
        let scheduler = Scheduler::default();
        let dates = scheduler.review_date_strings(parse_date("2024-01-01").unwrap());
        assert_eq!(
            dates,
            vec![
                "2024-01-03",
                "2024-01-07",
                "2024-01-14",
                "2024-01-30",
                "2024-03-01",
                "2024-04-29",
            ]
        );
    }

    #[test]
    fn review_dates_are_six_and_ascending() {
        let scheduler = Scheduler::default();
        let study = parse_date("2023-11-15").unwrap();
        let dates = scheduler.review_dates(study);
        assert_eq!(dates.len(), 6);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for (date, offset) in dates.iter().zip(scheduler.offsets().iter()) {
            assert_eq!((*date - study).num_days(), offset);
        }
    }

    #[test]
    fn possible_study_dates_invert_review_dates() {
        let scheduler = Scheduler::default();
        for raw in ["2024-01-01", "2024-02-28", "2023-12-31", "2000-02-29"] {
            let study = parse_date(raw).unwrap();
            for review in scheduler.review_dates(study) {
                assert!(
                    scheduler.possible_study_dates(review).contains(&study),
                    "{raw} missing from candidates of {review}"
                );
            }
        }
    }

    #[test]
    fn possible_study_dates_subtract_offsets() {
        let scheduler = Scheduler::default();
        let dates = scheduler.possible_study_date_strings(parse_date("2024-01-03").unwrap());
        assert_eq!(
            dates,
            vec![
                "2024-01-01",
                "2023-12-28",
                "2023-12-21",
                "2023-12-05",
                "2023-11-05",
                "2023-09-06",
            ]
        );
    }

    #[test]
    fn largest_offsets_stay_in_range_for_extreme_dates() {
        let scheduler = Scheduler::new(IntervalOffsets::new(vec![1, MAX_OFFSET_DAYS]).unwrap());
        let late = parse_date("9999-12-31").unwrap();
        let early = parse_date("0001-01-01").unwrap();

        let reviews = scheduler.review_dates(late);
        assert_eq!((reviews[1] - late).num_days(), MAX_OFFSET_DAYS);
        let studies = scheduler.possible_study_dates(early);
        assert_eq!((early - studies[1]).num_days(), MAX_OFFSET_DAYS);
    }

    #[test]
    fn custom_offsets() {
        let scheduler = Scheduler::new(IntervalOffsets::new(vec![1, 3]).unwrap());
        let dates = scheduler.review_date_strings(parse_date("2024-02-28").unwrap());
        assert_eq!(dates, vec!["2024-02-29", "2024-03-02"]);
    }
}
