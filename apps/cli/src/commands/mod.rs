//! Subcommand implementations.

pub mod add;
pub mod init;
pub mod review;

pub use add::{add_study_date, AddOutcome};
pub use init::init_vault;
pub use review::{review_date, ReviewOutcome};
