//! Content loaders for reading combat data from files.
//!
//! This module provides loaders that convert RON/TOML files into the catalog
//! and table types consumed by `arena-core`.

pub mod archetypes;
pub mod config;
pub mod factory;
pub mod loot;
pub mod variants;

pub use archetypes::ArchetypeLoader;
pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use loot::LootTableLoader;
pub use variants::VariantLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
