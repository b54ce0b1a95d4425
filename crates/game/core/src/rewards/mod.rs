//! Tiered reward rolling: XP, scaled gold, and weighted item drops.

mod roll;
mod tables;

pub use roll::{ItemDrop, LootItem, LootTableRow, RewardEngine, RewardResult};
pub use tables::RarityDropTable;
