//! JSON-backed date index.
//!
//! Each index is one file holding an object of date string → list of date
//! strings. Keys are written sorted with four-space indentation so the files
//! diff cleanly. Every write goes through a temporary file in the same
//! directory and is renamed into place, so a failed write leaves the previous
//! content untouched.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tempfile::NamedTempFile;

use crate::error::{Result, ReviewError};

/// In-memory form of an index file.
pub type DateIndex = BTreeMap<String, Vec<String>>;

/// A single index file on disk.
#[derive(Debug, Clone)]
pub struct IndexStore {
    path: PathBuf,
}

impl IndexStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole index.
    ///
    /// A missing file is an empty index; malformed content is fatal.
    pub fn read(&self) -> Result<DateIndex> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "index file not found, proceeding with empty content");
                return Ok(DateIndex::new());
            }
            Err(e) => return Err(ReviewError::io(&self.path, e)),
        };

        serde_json::from_str(&content).map_err(|source| ReviewError::CorruptStore {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the whole index.
    pub fn write(&self, content: &DateIndex) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        content
            .serialize(&mut ser)
            .map_err(|e| ReviewError::io(&self.path, e.into()))?;
        buf.push(b'\n');

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| ReviewError::io(dir, e))?;
        tmp.write_all(&buf)
            .and_then(|_| tmp.as_file().sync_all())
            .map_err(|e| ReviewError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| ReviewError::io(&self.path, e.error))?;

        tracing::debug!(path = %self.path.display(), entries = content.len(), "index written");
        Ok(())
    }

    /// Overwrite every key present in `delta`, keeping all other keys.
    ///
    /// Values are replaced wholesale; list contents are never combined.
    pub fn merge(&self, delta: DateIndex) -> Result<()> {
        let mut current = self.read()?;
        current.extend(delta);
        self.write(&current)
    }

    /// Drop the given keys. Absent keys are ignored.
    pub fn remove<I, K>(&self, keys: I) -> Result<usize>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut current = self.read()?;
        let removed = keys
            .into_iter()
            .filter(|key| current.remove(key.as_ref()).is_some())
            .count();
        if removed > 0 {
            self.write(&current)?;
        }
        Ok(removed)
    }

    pub fn get_value(&self, key: &str) -> Result<Option<Vec<String>>> {
        Ok(self.read()?.remove(key))
    }

    pub fn get_keys(&self) -> Result<Vec<String>> {
        Ok(self.read()?.into_keys().collect())
    }

    /// Save a copy of the index into `dir`, keeping its file name.
    ///
    /// The current content is parsed before anything is written, so a corrupt
    /// index never replaces an earlier backup. Returns the backup path, or
    /// `None` when there is no file to back up.
    pub fn backup_to(&self, dir: &Path) -> Result<Option<PathBuf>> {
        let Some(name) = self.path.file_name() else {
            return Ok(None);
        };
        if !self.path.exists() {
            return Ok(None);
        }
        let content = self.read()?;

        fs::create_dir_all(dir).map_err(|e| ReviewError::io(dir, e))?;
        let target = dir.join(name);
        IndexStore::new(&target).write(&content)?;
        tracing::debug!(from = %self.path.display(), to = %target.display(), "index backed up");
        Ok(Some(target))
    }
}
