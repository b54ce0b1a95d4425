//! Content factory for building engine inputs from a data directory.

use std::path::{Path, PathBuf};

use arena_core::{
    ArchetypeCatalog, BalanceConfig, EnemyGenerator, LootTableRow, RarityDropTable, RewardEngine,
    TierTable, VariantCatalog,
};

use crate::catalog::{builtin_archetypes, builtin_variants};
use crate::loaders::{ArchetypeLoader, ConfigLoader, LoadResult, LootTableLoader, VariantLoader};

/// Content factory that loads combat data from a data directory, falling
/// back to the builtin catalogs for anything the directory does not provide.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── balance.toml
/// ├── archetypes.ron
/// ├── variants.ron
/// └── loot/
///     ├── goblin.ron
///     └── troll.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load balance parameters from `balance.toml`, or defaults when the
    /// file is absent.
    pub fn load_config(&self) -> LoadResult<BalanceConfig> {
        let path = self.data_dir.join("balance.toml");
        if !path.exists() {
            return Ok(BalanceConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the archetype catalog from `archetypes.ron`, or the builtin
    /// catalog when the file is absent.
    pub fn load_archetypes(&self) -> LoadResult<ArchetypeCatalog> {
        let path = self.data_dir.join("archetypes.ron");
        if !path.exists() {
            return Ok(builtin_archetypes());
        }
        ArchetypeLoader::load(&path)
    }

    /// Load the variant catalog from `variants.ron`, or the builtin catalog
    /// when the file is absent.
    pub fn load_variants(&self) -> LoadResult<VariantCatalog> {
        let path = self.data_dir.join("variants.ron");
        if !path.exists() {
            return Ok(builtin_variants());
        }
        VariantLoader::load(&path)
    }

    /// Load a loot table from `loot/{table_name}.ron`.
    pub fn load_loot_table(&self, table_name: &str) -> LoadResult<Vec<LootTableRow>> {
        let path = self
            .data_dir
            .join("loot")
            .join(format!("{}.ron", table_name));
        LootTableLoader::load(&path)
    }

    /// Build an [`EnemyGenerator`] from the directory's content.
    pub fn build_generator(&self) -> LoadResult<EnemyGenerator> {
        Ok(EnemyGenerator::new(
            self.load_archetypes()?,
            self.load_variants()?,
            TierTable::default(),
            self.load_config()?,
        ))
    }

    /// Build a [`RewardEngine`] from the directory's content.
    pub fn build_reward_engine(&self) -> LoadResult<RewardEngine> {
        Ok(RewardEngine::new(
            TierTable::default(),
            RarityDropTable::default(),
            self.load_config()?,
        ))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
