//! Enemy archetype catalog loader.

use std::path::Path;

use arena_core::{ArchetypeCatalog, EnemyArchetype};

use crate::loaders::{LoadResult, read_file};

/// Loader for enemy archetype catalogs from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load an archetype catalog from a RON file.
    ///
    /// RON format: Vec<EnemyArchetype>. Archetype codes must be unique;
    /// duplicates are rejected so a forced-archetype lookup can never be
    /// ambiguous.
    pub fn load(path: &Path) -> LoadResult<ArchetypeCatalog> {
        let content = read_file(path)?;
        let archetypes: Vec<EnemyArchetype> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype catalog RON: {}", e))?;

        if archetypes.is_empty() {
            anyhow::bail!("Archetype catalog {} is empty", path.display());
        }
        for (i, a) in archetypes.iter().enumerate() {
            if archetypes[..i].iter().any(|b| b.code == a.code) {
                anyhow::bail!("Duplicate archetype code '{}' in {}", a.code, path.display());
            }
        }

        Ok(ArchetypeCatalog::new(archetypes))
    }
}
