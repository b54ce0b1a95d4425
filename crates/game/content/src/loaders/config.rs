//! Balance configuration loader.

use std::path::Path;

use arena_core::BalanceConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for balance configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load balance parameters from a TOML file.
    ///
    /// Keys absent from the file keep their [`BalanceConfig::default`]
    /// values, so an override file only needs to name the knobs it changes.
    pub fn load(path: &Path) -> LoadResult<BalanceConfig> {
        let content = read_file(path)?;
        let config: BalanceConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse balance TOML: {}", e))?;

        if config.max_rounds == 0 {
            anyhow::bail!("Balance config {} sets max_rounds to 0", path.display());
        }

        Ok(config)
    }
}
