//! Common test utilities for integration tests.
//!
//! Provides a TestContext holding a temporary working directory with an
//! initialized vault, plus helpers for the `add` and `review` commands.

#![allow(dead_code)]

use std::path::Path;

use chrono::NaiveDate;
use review_core::Scheduler;
use tempfile::TempDir;

use review_scheduler::commands::{self, AddOutcome, ReviewOutcome};
use review_scheduler::config::Config;
use review_scheduler::vault::Vault;

pub struct TestContext {
    dir: TempDir,
    pub config: Config,
    pub vault: Vault,
    pub scheduler: Scheduler,
}

impl TestContext {
    /// Create a temporary directory with a fresh vault.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let config = Config::default();
        let vault = commands::init_vault(dir.path(), &config).expect("failed to init vault");
        Self {
            dir,
            config,
            vault,
            scheduler: Scheduler::default(),
        }
    }

    pub fn cwd(&self) -> &Path {
        self.dir.path()
    }

    pub fn add(&self, date: &str, today: NaiveDate) -> anyhow::Result<AddOutcome> {
        commands::add_study_date(&self.vault, &self.scheduler, date, today)
    }

    pub fn review(&self, date: &str, today: NaiveDate) -> anyhow::Result<ReviewOutcome> {
        commands::review_date(&self.vault, &self.scheduler, &self.config, self.cwd(), date, today, false)
    }

    pub fn refresh(&self, date: &str, today: NaiveDate) -> anyhow::Result<ReviewOutcome> {
        commands::review_date(&self.vault, &self.scheduler, &self.config, self.cwd(), date, today, true)
    }
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
