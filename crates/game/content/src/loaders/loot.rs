//! Loot table loader.

use std::path::Path;

use arena_core::LootTableRow;

use crate::loaders::{LoadResult, read_file};

/// Loader for loot tables from RON files.
pub struct LootTableLoader;

impl LootTableLoader {
    /// Load loot-table rows from a RON file.
    ///
    /// RON format: Vec<LootTableRow>. Rows with neither an item nor an XP
    /// range would never be drawn and are rejected.
    pub fn load(path: &Path) -> LoadResult<Vec<LootTableRow>> {
        let content = read_file(path)?;
        let rows: Vec<LootTableRow> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse loot table RON: {}", e))?;

        for (i, row) in rows.iter().enumerate() {
            if row.item.is_none() && row.min_xp <= 0 && row.max_xp <= 0 {
                anyhow::bail!("Loot row {} in {} carries no item and no XP", i, path.display());
            }
            if row.min_xp > row.max_xp && row.max_xp > 0 {
                anyhow::bail!(
                    "Loot row {} in {} has inverted XP range {}..{}",
                    i,
                    path.display(),
                    row.min_xp,
                    row.max_xp
                );
            }
        }

        Ok(rows)
    }
}
