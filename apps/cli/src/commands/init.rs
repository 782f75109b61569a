//! `init`: create a vault in the working directory.

use std::path::Path;

use anyhow::Context;

use crate::config::Config;
use crate::vault::Vault;

pub fn init_vault(cwd: &Path, config: &Config) -> anyhow::Result<Vault> {
    Vault::init(cwd, &config.vault_dir)
        .with_context(|| format!("failed to initialize vault in {}", cwd.display()))
}
