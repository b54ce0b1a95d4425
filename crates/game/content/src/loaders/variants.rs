//! Variant modifier catalog loader.

use std::path::Path;

use arena_core::{VariantCatalog, VariantModifier};

use crate::loaders::{LoadResult, read_file};

/// Loader for variant modifier catalogs from RON files.
pub struct VariantLoader;

impl VariantLoader {
    /// Load a variant catalog from a RON file.
    ///
    /// RON format: Vec<VariantModifier>. Multipliers are in percent with 100
    /// as neutral; zero multipliers are rejected since they would erase a
    /// stat entirely.
    pub fn load(path: &Path) -> LoadResult<VariantCatalog> {
        let content = read_file(path)?;
        let variants: Vec<VariantModifier> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse variant catalog RON: {}", e))?;

        for v in &variants {
            let mults = [
                v.hp_mult_percent,
                v.atk_mult_percent,
                v.def_mult_percent,
                v.speed_mult_percent,
            ];
            if mults.contains(&0) {
                anyhow::bail!(
                    "Variant '{}' in {} has a zero stat multiplier",
                    v.name,
                    path.display()
                );
            }
        }

        Ok(VariantCatalog::new(variants))
    }
}
