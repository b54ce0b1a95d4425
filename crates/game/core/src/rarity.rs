//! Item rarity grades and their stat-contribution multipliers.

/// Item rarity grade.
///
/// Rarity affects two independent things: how much an equipped item
/// contributes to hero stats (see [`Rarity::equip_multiplier_percent`]) and
/// how likely the item is to drop at a given enemy tier (see
/// [`crate::rewards::RarityDropTable`]).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
    /// Top grade above legendary, reserved for one-off promotional items.
    Alpha,
}

impl Rarity {
    /// All rarities in ascending grade order.
    pub const ALL: [Rarity; 6] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Alpha,
    ];

    /// Multiplier applied to an equipped item's power/defense, in percent.
    ///
    /// common ×1.0 … legendary ×3.0, alpha ×4.0.
    pub const fn equip_multiplier_percent(self) -> u32 {
        match self {
            Rarity::Common => 100,
            Rarity::Uncommon => 120,
            Rarity::Rare => 150,
            Rarity::Epic => 200,
            Rarity::Legendary => 300,
            Rarity::Alpha => 400,
        }
    }

    /// Index into per-rarity tables.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}
