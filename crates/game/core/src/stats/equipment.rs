//! Equipped-item stat contributions.
//!
//! Items are owned by the inventory collaborator; the combat engine only sees
//! the equipped slice and folds it into two buckets: weapon power (feeds
//! attack) and armor power (feeds defense).

use crate::rarity::Rarity;

/// Equipment slot category, used only for contribution bucketing.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotKind {
    Weapon,
    Sword,
    Staff,
    Armor,
    Shield,
    Helmet,
    Accessory,
    Trinket,
}

impl SlotKind {
    /// Weapon-type slots contribute 100% of their power to weapon power.
    pub const fn is_weapon(self) -> bool {
        matches!(self, SlotKind::Weapon | SlotKind::Sword | SlotKind::Staff)
    }

    /// Armor-type slots contribute 100% of their defense to armor power.
    pub const fn is_armor(self) -> bool {
        matches!(self, SlotKind::Armor | SlotKind::Shield | SlotKind::Helmet)
    }
}

/// One equipped item as reported by the inventory collaborator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub slot: SlotKind,
    pub rarity: Rarity,
    pub power: u32,
    pub defense: u32,
}

/// Folded equipment contribution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentPower {
    pub weapon_power: i64,
    pub armor_power: i64,
}

impl EquipmentPower {
    /// Fold equipped items into weapon/armor buckets.
    ///
    /// Each item's power and defense are first scaled by its rarity
    /// multiplier, then bucketed:
    /// - weapon-type slots contribute 100% of power, others 50%
    /// - armor-type slots contribute 100% of defense, others 30%
    ///
    /// Every per-item contribution is floored before summing.
    pub fn from_equipped(items: &[EquippedItem]) -> Self {
        let mut weapon_power: i64 = 0;
        let mut armor_power: i64 = 0;

        for item in items {
            let mult = item.rarity.equip_multiplier_percent() as i64;
            let adjusted_power = (item.power as i64 * mult) / 100;
            let adjusted_defense = (item.defense as i64 * mult) / 100;

            if item.slot.is_weapon() {
                weapon_power += adjusted_power;
            } else {
                weapon_power += adjusted_power / 2;
            }

            if item.slot.is_armor() {
                armor_power += adjusted_defense;
            } else {
                armor_power += (adjusted_defense * 30) / 100;
            }
        }

        Self {
            weapon_power,
            armor_power,
        }
    }
}
