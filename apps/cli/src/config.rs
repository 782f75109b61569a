//! Runtime configuration read from the environment.

/// Default name of the marker directory holding the indices.
pub const DEFAULT_VAULT_DIR: &str = ".rs";

/// Default name of the report written by `review`.
pub const DEFAULT_REPORT_FILE: &str = "reviews.md";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub vault_dir: String,
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vault_dir: DEFAULT_VAULT_DIR.to_string(),
            report_file: DEFAULT_REPORT_FILE.to_string(),
        }
    }
}

impl Config {
    /// Build configuration from environment variables.
    ///
    /// Optional env vars:
    /// - RS_VAULT_DIR: marker directory name (default `.rs`)
    /// - RS_REPORT_FILE: report file name (default `reviews.md`)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            vault_dir: lookup("RS_VAULT_DIR")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.vault_dir),
            report_file: lookup("RS_REPORT_FILE")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.report_file),
        }
    }
}
