//! Computed stats - the hero's derived combat snapshot.
//!
//! Computed stats are ephemeral: recomputed on demand from base attributes,
//! level, and external contributions, never the source of truth. Any persisted
//! copy is a cache that must be invalidated on level-up, equip/unequip, or
//! companion swap.

use super::attributes::BaseAttributes;
use super::equipment::{EquipmentPower, EquippedItem};

/// Additive stat bonuses granted by the equipped companion.
///
/// Supplied by the companion collaborator; a missing companion degrades to
/// the zero default.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompanionBonuses {
    pub atk_bonus: i64,
    pub def_bonus: i64,
    pub speed_bonus: i64,
    pub crit_bonus: f64,
}

/// Aggregated numeric bonuses from unlocked passive skills.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveBonuses {
    pub speed: i64,
    pub crit_chance_percent: f64,
    pub loot_luck_percent: f64,
}

/// The hero's final combat stats.
///
/// All stats are floored integers except `crit_chance` and `loot_luck`,
/// which stay fractional until display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComputedStats {
    pub level: u32,
    pub max_hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
    /// Crit chance in percent, capped at [`ComputedStats::CRIT_CAP`].
    pub crit_chance: f64,
    /// Crit damage in percent. Constant 150 for now.
    pub crit_damage: u32,
    /// Loot luck in percent.
    pub loot_luck: f64,
}

impl ComputedStats {
    /// Hero crit chance cap in percent.
    pub const CRIT_CAP: f64 = 50.0;

    /// Crit damage multiplier in percent.
    pub const CRIT_DAMAGE: u32 = 150;

    /// Compute final stats from base attributes and external contributions.
    ///
    /// # Formulas
    ///
    /// ```text
    /// maxHP      = END × 10 + level × 5
    /// attack     = STR × 2 + weaponPower + companionAtk
    /// defense    = ⌊END × 1.5⌋ + armorPower + companionDef
    /// speed      = ⌊AGI × 1.2⌋ + companionSpeed + passiveSpeed
    /// critChance = min(50, LCK × 0.2 + companionCrit + passiveCrit)
    /// critDamage = 150
    /// lootLuck   = LCK × 0.1 + passiveLootLuck
    /// ```
    pub fn compute(
        attrs: &BaseAttributes,
        level: u32,
        equipped: &[EquippedItem],
        companion: &CompanionBonuses,
        passives: &PassiveBonuses,
    ) -> Self {
        let equipment = EquipmentPower::from_equipped(equipped);

        let max_hp = attrs.endurance as i64 * 10 + level as i64 * 5;
        let attack = attrs.strength as i64 * 2 + equipment.weapon_power + companion.atk_bonus;
        let defense = (attrs.endurance as i64 * 3) / 2 + equipment.armor_power + companion.def_bonus;
        let speed = (attrs.agility as i64 * 12) / 10 + companion.speed_bonus + passives.speed;

        let crit_chance = (attrs.luck as f64 * 0.2 + companion.crit_bonus
            + passives.crit_chance_percent)
            .clamp(0.0, Self::CRIT_CAP);
        let loot_luck = attrs.luck as f64 * 0.1 + passives.loot_luck_percent;

        Self {
            level,
            max_hp,
            attack,
            defense,
            speed,
            crit_chance,
            crit_damage: Self::CRIT_DAMAGE,
            loot_luck,
        }
    }

    /// Compute with no equipment, companion, or passives.
    pub fn from_attributes(attrs: &BaseAttributes, level: u32) -> Self {
        Self::compute(
            attrs,
            level,
            &[],
            &CompanionBonuses::default(),
            &PassiveBonuses::default(),
        )
    }
}
