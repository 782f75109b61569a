//! On-disk vault holding both date indices.
//!
//! Layout:
//! ```text
//! <root>/.rs/
//! ├── study_review.json   # study date → review dates
//! ├── review_study.json   # review date → study dates (cache)
//! ├── backup/             # index copies taken before `add`
//! └── history/            # past review reports
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use review_core::{DateIndex, IndexReviewCache, IndexStore, ReviewResolver, Scheduler};
use tempfile::TempDir;
use thiserror::Error;

pub const STUDY_REVIEW_FILE: &str = "study_review.json";
pub const REVIEW_STUDY_FILE: &str = "review_study.json";
pub const BACKUP_DIR: &str = "backup";
pub const HISTORY_DIR: &str = "history";

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("a file or directory named `{}` already exists in {}", name, dir.display())]
    AlreadyInitialized { name: String, dir: PathBuf },

    #[error("review scheduler is not initialized in {} or any parent directory; run `rs init` first", .0.display())]
    NotInitialized(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Index(#[from] review_core::ReviewError),
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// A located vault directory.
#[derive(Debug, Clone)]
pub struct Vault {
    dir: PathBuf,
}

impl Vault {
    /// Create a fresh vault named `name` inside `parent`.
    ///
    /// The vault is assembled in a temporary directory next to its final
    /// location and renamed into place, so a failure leaves nothing behind.
    pub fn init(parent: &Path, name: &str) -> Result<Self> {
        let dir = parent.join(name);
        if dir.exists() || dir.is_symlink() {
            return Err(VaultError::AlreadyInitialized {
                name: name.to_string(),
                dir: parent.to_path_buf(),
            });
        }

        let staging = TempDir::new_in(parent).map_err(|source| VaultError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
        Self::populate(staging.path())?;
        fs::rename(staging.path(), &dir).map_err(|source| VaultError::Io {
            path: dir.clone(),
            source,
        })?;

        tracing::info!(path = %dir.display(), "vault initialized");
        Ok(Self { dir })
    }

    fn populate(dir: &Path) -> Result<()> {
        for sub in [BACKUP_DIR, HISTORY_DIR] {
            let path = dir.join(sub);
            fs::create_dir_all(&path).map_err(|source| VaultError::Io { path, source })?;
        }

        let staged = Self {
            dir: dir.to_path_buf(),
        };
        staged.study_index().write(&DateIndex::new())?;
        staged.review_index().write(&DateIndex::new())?;
        Ok(())
    }

    /// Find the nearest vault named `name` in `start` or its ancestors.
    pub fn locate(start: &Path, name: &str) -> Result<Self> {
        start
            .ancestors()
            .map(|parent| parent.join(name))
            .find(|candidate| candidate.is_dir())
            .map(|dir| {
                tracing::debug!(path = %dir.display(), "vault located");
                Self { dir }
            })
            .ok_or_else(|| VaultError::NotInitialized(start.to_path_buf()))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.dir.join(BACKUP_DIR)
    }

    pub fn history_dir(&self) -> PathBuf {
        self.dir.join(HISTORY_DIR)
    }

    pub fn study_index(&self) -> IndexStore {
        IndexStore::new(self.dir.join(STUDY_REVIEW_FILE))
    }

    pub fn review_index(&self) -> IndexStore {
        IndexStore::new(self.dir.join(REVIEW_STUDY_FILE))
    }

    pub fn resolver(&self, scheduler: Scheduler) -> ReviewResolver<IndexReviewCache> {
        ReviewResolver::new(
            scheduler,
            self.study_index(),
            IndexReviewCache::new(self.review_index()),
        )
    }
}
