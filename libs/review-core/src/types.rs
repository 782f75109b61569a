//! Core types for the review scheduler.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewError};

/// Days between a study date and each of its reviews.
pub const DEFAULT_OFFSETS: [i64; 6] = [2, 6, 13, 29, 59, 119];

/// Largest accepted offset, roughly one hundred years.
///
/// Any `YYYY-MM-DD` date shifted by this much in either direction stays
/// inside chrono's representable range.
pub const MAX_OFFSET_DAYS: i64 = 36_525;

/// Ordered table of review offsets, in days.
///
/// The table is validated once on construction and never changes afterwards,
/// so the scheduler and the grouper can share it by clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<i64>", into = "Vec<i64>")]
pub struct IntervalOffsets(Vec<i64>);

impl IntervalOffsets {
    /// Build a table from a list of offsets.
    ///
    /// Offsets must be non-empty, strictly ascending and within
    /// `1..=MAX_OFFSET_DAYS`.
    pub fn new(offsets: Vec<i64>) -> Result<Self> {
        let in_range = offsets.iter().all(|&o| (1..=MAX_OFFSET_DAYS).contains(&o));
        let ascending = offsets.windows(2).all(|w| w[0] < w[1]);
        if offsets.is_empty() || !in_range || !ascending {
            return Err(ReviewError::InvalidOffsets(offsets));
        }
        Ok(Self(offsets))
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.0.iter().copied()
    }

    /// Priority tier for a given elapsed-day delta.
    ///
    /// The table is split into three consecutive bands; an offset at index `i`
    /// of an `n`-entry table lands in band `i * 3 / n`. Deltas that are not in
    /// the table have no tier.
    pub fn tier_of(&self, delta: i64) -> Option<PriorityTier> {
        let index = self.0.iter().position(|&o| o == delta)?;
        PriorityTier::from_band(index * 3 / self.0.len())
    }

    /// Offsets that fall into the given tier.
    pub fn offsets_in(&self, tier: PriorityTier) -> Vec<i64> {
        let n = self.0.len();
        self.0
            .iter()
            .enumerate()
            .filter(|(i, _)| PriorityTier::from_band(i * 3 / n) == Some(tier))
            .map(|(_, &o)| o)
            .collect()
    }
}

impl Default for IntervalOffsets {
    fn default() -> Self {
        Self(DEFAULT_OFFSETS.to_vec())
    }
}

impl TryFrom<Vec<i64>> for IntervalOffsets {
    type Error = ReviewError;

    fn try_from(value: Vec<i64>) -> Result<Self> {
        Self::new(value)
    }
}

impl From<IntervalOffsets> for Vec<i64> {
    fn from(value: IntervalOffsets) -> Self {
        value.0
    }
}

/// Review priority, from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriorityTier {
    Top,
    Middle,
    Least,
}

impl PriorityTier {
    pub const ALL: [PriorityTier; 3] = [Self::Top, Self::Middle, Self::Least];

    fn from_band(band: usize) -> Option<Self> {
        match band {
            0 => Some(Self::Top),
            1 => Some(Self::Middle),
            2 => Some(Self::Least),
            _ => None,
        }
    }

    /// Section title used in review reports.
    pub fn title(self) -> &'static str {
        match self {
            Self::Top => "Top Priority Reviews",
            Self::Middle => "Middle Priority Reviews",
            Self::Least => "Least Priority Reviews",
        }
    }
}

/// Study dates due on a review date, split by priority tier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriorityGroups {
    pub top: Vec<String>,
    pub middle: Vec<String>,
    pub least: Vec<String>,
}

impl PriorityGroups {
    pub fn get(&self, tier: PriorityTier) -> &[String] {
        match tier {
            PriorityTier::Top => &self.top,
            PriorityTier::Middle => &self.middle,
            PriorityTier::Least => &self.least,
        }
    }

    pub(crate) fn push(&mut self, tier: PriorityTier, date: String) {
        match tier {
            PriorityTier::Top => self.top.push(date),
            PriorityTier::Middle => self.middle.push(date),
            PriorityTier::Least => self.least.push(date),
        }
    }

    /// Total number of study dates across all tiers.
    pub fn len(&self) -> usize {
        self.top.len() + self.middle.len() + self.least.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_offsets_match_schedule() {
        assert_eq!(IntervalOffsets::default().as_slice(), &[2, 6, 13, 29, 59, 119]);
    }

    #[test]
    fn rejects_bad_offsets() {
        assert!(IntervalOffsets::new(vec![]).is_err());
        assert!(IntervalOffsets::new(vec![0, 2]).is_err());
        assert!(IntervalOffsets::new(vec![5, 3]).is_err());
        assert!(IntervalOffsets::new(vec![3, 3]).is_err());
    }

    #[test]
    fn rejects_offsets_beyond_date_range() {
        assert!(matches!(
            IntervalOffsets::new(vec![2, i64::MAX / 2]),
            Err(ReviewError::InvalidOffsets(_))
        ));
        assert!(IntervalOffsets::new(vec![2, MAX_OFFSET_DAYS + 1]).is_err());
        assert!(IntervalOffsets::new(vec![2, MAX_OFFSET_DAYS]).is_ok());
        assert!(serde_json::from_str::<IntervalOffsets>("[1, 99999999999]").is_err());
    }

    #[test]
    fn default_tiers_pair_up_offsets() {
        let offsets = IntervalOffsets::default();
        assert_eq!(offsets.tier_of(2), Some(PriorityTier::Top));
        assert_eq!(offsets.tier_of(6), Some(PriorityTier::Top));
        assert_eq!(offsets.tier_of(13), Some(PriorityTier::Middle));
        assert_eq!(offsets.tier_of(29), Some(PriorityTier::Middle));
        assert_eq!(offsets.tier_of(59), Some(PriorityTier::Least));
        assert_eq!(offsets.tier_of(119), Some(PriorityTier::Least));
        assert_eq!(offsets.tier_of(0), None);
        assert_eq!(offsets.tier_of(100), None);
    }

    #[test]
    fn offsets_in_tier() {
        let offsets = IntervalOffsets::default();
        assert_eq!(offsets.offsets_in(PriorityTier::Top), vec![2, 6]);
        assert_eq!(offsets.offsets_in(PriorityTier::Middle), vec![13, 29]);
        assert_eq!(offsets.offsets_in(PriorityTier::Least), vec![59, 119]);
    }

    #[test]
    fn short_table_still_has_top_tier() {
        let offsets = IntervalOffsets::new(vec![1]).unwrap();
        assert_eq!(offsets.tier_of(1), Some(PriorityTier::Top));
    }

    #[test]
    fn deserialize_validates() {
        let ok: IntervalOffsets = serde_json::from_str("[1, 3, 7]").unwrap();
        assert_eq!(ok.len(), 3);
        assert!(serde_json::from_str::<IntervalOffsets>("[7, 3]").is_err());
    }
}
