//! Core library for the fixed-interval review scheduler.
//!
//! Provides:
//! - Date parsing and the fixed interval scheduler
//! - JSON-backed date indices (study → review, review → study)
//! - Review resolution with a read-through cache
//! - Priority grouping of due study dates

pub mod date;
pub mod error;
pub mod priority;
pub mod resolver;
pub mod scheduler;
pub mod store;
pub mod types;

pub use date::{ensure_not_future, format_date, parse_date, resolve_date_arg, DATE_FORMAT};
pub use error::{Result, ReviewError};
pub use priority::group_by_priority;
pub use resolver::{IndexReviewCache, ReviewCache, ReviewResolver};
pub use scheduler::Scheduler;
pub use store::{DateIndex, IndexStore};
pub use types::{IntervalOffsets, PriorityGroups, PriorityTier};
