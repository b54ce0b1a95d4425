//! Rarity drop-weight tables.

use crate::enemy::Tier;
use crate::rarity::Rarity;

/// Per-tier rarity drop multipliers, in percent.
///
/// Each loot row's selection weight is scaled by the multiplier for its
/// item's rarity at the fight's tier. Higher tiers upweight rare grades so
/// elite fights skew the same loot pool toward better drops.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RarityDropTable {
    /// `multipliers[tier][rarity]`, percent.
    multipliers: [[u32; 6]; 4],
}

impl RarityDropTable {
    pub const fn new(multipliers: [[u32; 6]; 4]) -> Self {
        Self { multipliers }
    }

    /// Drop-weight multiplier in percent for an item rarity at a tier.
    #[inline]
    pub fn multiplier_percent(&self, tier: Tier, rarity: Rarity) -> u32 {
        self.multipliers[tier.as_index()][rarity.as_index()]
    }
}

impl Default for RarityDropTable {
    /// EASY suppresses rare+ grades, NORMAL is neutral, HARD and ELITE
    /// progressively upweight them.
    fn default() -> Self {
        //            common uncommon rare epic legendary alpha
        Self::new([
            /* EASY   */ [120, 100, 60, 30, 10, 5],
            /* NORMAL */ [100, 100, 100, 100, 100, 100],
            /* HARD   */ [90, 100, 130, 150, 150, 120],
            /* ELITE  */ [70, 90, 150, 200, 250, 200],
        ])
    }
}
