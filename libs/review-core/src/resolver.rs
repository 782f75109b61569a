//! Resolution of study dates due on a review date.
//!
//! The review → study index is treated as a cache in front of the
//! study → review index: a hit is returned as stored (an empty list is a
//! valid hit), a miss is computed from the scheduler and the recorded study
//! dates, then written back. Entries are not invalidated when new study dates
//! are added; callers that need fresh data use [`ReviewResolver::refresh`].

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::date::format_date;
use crate::error::Result;
use crate::scheduler::Scheduler;
use crate::store::{DateIndex, IndexStore};

/// Cache of resolved study dates, keyed by review date.
pub trait ReviewCache {
    fn lookup(&self, review: &str) -> Result<Option<Vec<String>>>;

    fn record(&self, review: &str, studies: &[String]) -> Result<()>;

    fn invalidate(&self, review: &str) -> Result<()>;
}

/// [`ReviewCache`] persisted in the review → study index file.
#[derive(Debug, Clone)]
pub struct IndexReviewCache {
    store: IndexStore,
}

impl IndexReviewCache {
    pub fn new(store: IndexStore) -> Self {
        Self { store }
    }
}

impl ReviewCache for IndexReviewCache {
    fn lookup(&self, review: &str) -> Result<Option<Vec<String>>> {
        self.store.get_value(review)
    }

    fn record(&self, review: &str, studies: &[String]) -> Result<()> {
        let mut delta = DateIndex::new();
        delta.insert(review.to_string(), studies.to_vec());
        self.store.merge(delta)
    }

    fn invalidate(&self, review: &str) -> Result<()> {
        self.store.remove([review]).map(|_| ())
    }
}

/// Resolves which recorded study dates have a review on a given date.
pub struct ReviewResolver<C: ReviewCache> {
    scheduler: Scheduler,
    study_index: IndexStore,
    cache: C,
}

impl<C: ReviewCache> ReviewResolver<C> {
    pub fn new(scheduler: Scheduler, study_index: IndexStore, cache: C) -> Self {
        Self {
            scheduler,
            study_index,
            cache,
        }
    }

    /// Study dates due on `review`, most recent first.
    pub fn resolve(&self, review: NaiveDate) -> Result<Vec<String>> {
        let key = format_date(review);
        if let Some(cached) = self.cache.lookup(&key)? {
            tracing::debug!(review = %key, count = cached.len(), "review cache hit");
            return Ok(cached);
        }

        tracing::debug!(review = %key, "review cache miss");
        let studies = self.compute(review)?;
        self.cache.record(&key, &studies)?;
        Ok(studies)
    }

    /// Drop any cached entry for `review` and resolve it again.
    pub fn refresh(&self, review: NaiveDate) -> Result<Vec<String>> {
        self.cache.invalidate(&format_date(review))?;
        self.resolve(review)
    }

    fn compute(&self, review: NaiveDate) -> Result<Vec<String>> {
        let known: HashSet<String> = self.study_index.get_keys()?.into_iter().collect();
        if known.is_empty() {
            return Ok(Vec::new());
        }

        let mut studies: Vec<String> = self
            .scheduler
            .possible_study_date_strings(review)
            .into_iter()
            .filter(|candidate| known.contains(candidate))
            .collect();
        studies.sort_unstable_by(|a, b| b.cmp(a));
        Ok(studies)
    }
}
