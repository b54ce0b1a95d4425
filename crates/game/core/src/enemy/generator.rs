//! Procedural enemy generation.
//!
//! An enemy is built per fight from archetype × tier × variant × level
//! scaling. The canonical modifier order is fixed:
//!
//! ```text
//! base archetype stats
//!   → level scaling (+round(heroLevel × 0.4), crit/speed at 0.5×/0.3×)
//!   → variant (multiply HP/ATK/DEF/SPEED, add CRIT/SPEED)
//!   → tier multiplier (all five stats, floored)
//!   → clamp (hp ≥ 1, atk ≥ 1, def ≥ 0, crit ∈ [0,100], speed ≥ 1)
//! ```

use crate::config::BalanceConfig;
use crate::rng::{RngOracle, compute_seed, roll};
use crate::stats::ComputedStats;

use super::archetype::ArchetypeCatalog;
use super::tier::{Tier, TierTable};
use super::variant::{VariantCatalog, VariantModifier};

/// Final stats of a generated enemy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyStats {
    pub hp: i64,
    pub atk: i64,
    pub def: i64,
    /// Crit chance in whole percent. Carried for display and future use;
    /// the combat loop does not roll enemy crits.
    pub crit: i64,
    pub speed: i64,
}

/// An enemy instance produced for a single fight.
///
/// Created at fight start and discarded after reward resolution; never
/// persisted beyond the fight session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedEnemy {
    /// Display name: `"{variant} {archetype} (L{level})"`.
    pub name: String,
    pub description: String,
    pub level: u32,
    pub tier: Tier,
    pub variant: Option<String>,
    pub archetype_code: String,
    pub stats: EnemyStats,
}

/// How the variant slot should be filled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum VariantChoice {
    /// Roll the configured variant chance, then pick uniformly.
    #[default]
    Random,
    /// Force no variant.
    None,
    /// Force a specific variant by name.
    Forced(String),
}

/// Optional overrides for enemy generation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub archetype_code: Option<String>,
    pub tier: Option<Tier>,
    pub variant: VariantChoice,
}

/// Errors from enemy generation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// The archetype catalog holds no entries. Fatal: the fight request
    /// cannot proceed.
    #[error("enemy archetype catalog is empty")]
    EmptyCatalog,

    /// A forced archetype code does not exist in the catalog.
    #[error("unknown enemy archetype code: {0}")]
    UnknownArchetype(String),

    /// A forced variant name does not exist in the catalog.
    #[error("unknown enemy variant: {0}")]
    UnknownVariant(String),
}

/// Procedural enemy generator over injected catalogs and tables.
#[derive(Clone, Debug)]
pub struct EnemyGenerator {
    archetypes: ArchetypeCatalog,
    variants: VariantCatalog,
    tiers: TierTable,
    config: BalanceConfig,
}

impl EnemyGenerator {
    pub fn new(
        archetypes: ArchetypeCatalog,
        variants: VariantCatalog,
        tiers: TierTable,
        config: BalanceConfig,
    ) -> Self {
        Self {
            archetypes,
            variants,
            tiers,
            config,
        }
    }

    pub fn archetypes(&self) -> &ArchetypeCatalog {
        &self.archetypes
    }

    pub fn tier_table(&self) -> &TierTable {
        &self.tiers
    }

    /// Generate an enemy for a fight.
    ///
    /// All randomness derives from `fight_seed`; the same seed, hero stats,
    /// and options always produce the same enemy.
    ///
    /// # Errors
    ///
    /// Fatal on an empty catalog or an unknown forced archetype/variant.
    pub fn generate(
        &self,
        hero: &ComputedStats,
        options: &GenerateOptions,
        rng: &dyn RngOracle,
        fight_seed: u64,
    ) -> Result<GeneratedEnemy, GenerateError> {
        if self.archetypes.is_empty() {
            return Err(GenerateError::EmptyCatalog);
        }

        // 1. Archetype: forced code or uniform random
        let archetype = match &options.archetype_code {
            Some(code) => self
                .archetypes
                .by_code(code)
                .ok_or_else(|| GenerateError::UnknownArchetype(code.clone()))?,
            None => {
                let seed = compute_seed(fight_seed, 0, roll::ARCHETYPE);
                let index = rng.next_u32(seed) as usize % self.archetypes.len();
                self.archetypes.at(index).ok_or(GenerateError::EmptyCatalog)?
            }
        };

        // 2. Tier: forced or weighted draw
        let tier = match options.tier {
            Some(tier) => tier,
            None => {
                let seed = compute_seed(fight_seed, 0, roll::TIER);
                let threshold = rng.weight_threshold(seed, self.tiers.total_weight());
                self.tiers.pick(threshold)
            }
        };

        // 3. Variant: forced, suppressed, or rolled
        let variant = match &options.variant {
            VariantChoice::None => None,
            VariantChoice::Forced(name) => Some(
                self.variants
                    .by_name(name)
                    .ok_or_else(|| GenerateError::UnknownVariant(name.clone()))?,
            ),
            VariantChoice::Random => self.roll_variant(rng, fight_seed),
        };

        // 4. Enemy level from hero level and tier offset
        let params = self.tiers.params(tier);
        let level = (hero.level as i64 + params.level_offset as i64).max(1) as u32;

        // 5-7. Scaling pipeline: level → variant → tier
        let mut stats = self.apply_level_scaling(archetype_base(archetype), hero.level);
        if let Some(variant) = variant {
            stats = apply_variant(stats, variant);
        }
        stats = apply_tier_multiplier(stats, params.stat_multiplier_percent);

        // 8. Clamp
        let stats = EnemyStats {
            hp: stats.hp.max(1),
            atk: stats.atk.max(1),
            def: stats.def.max(0),
            crit: stats.crit.clamp(0, 100),
            speed: stats.speed.max(1),
        };

        let variant_name = variant.map(|v| v.name.clone());
        let name = display_name(&archetype.name, variant_name.as_deref(), level);
        let description = description(&archetype.name, variant_name.as_deref(), tier, level);

        Ok(GeneratedEnemy {
            name,
            description,
            level,
            tier,
            variant: variant_name,
            archetype_code: archetype.code.clone(),
            stats,
        })
    }

    /// 20% chance (configurable) of a uniformly random variant.
    fn roll_variant(&self, rng: &dyn RngOracle, fight_seed: u64) -> Option<&VariantModifier> {
        if self.variants.is_empty() {
            return None;
        }
        let seed = compute_seed(fight_seed, 0, roll::VARIANT);
        if rng.roll_permille(seed) >= self.config.variant_chance_permille {
            return None;
        }
        // Reuse the upper bits of the same draw for the uniform pick so the
        // presence roll and the selection stay a single logical event.
        let index = (rng.next_u32(seed.wrapping_add(1))) as usize % self.variants.len();
        self.variants.at(index)
    }

    /// Scale base archetype stats by the hero's level (not the enemy's).
    ///
    /// HP/ATK/DEF gain `round(heroLevel × 0.4)`; CRIT and SPEED gain half and
    /// 0.3× of that increment respectively, rounded.
    fn apply_level_scaling(&self, base: EnemyStats, hero_level: u32) -> EnemyStats {
        let tenths = self.config.scaling_tenths_per_level as i64;
        let scaling = round_tenths(hero_level as i64 * tenths);
        EnemyStats {
            hp: base.hp + scaling,
            atk: base.atk + scaling,
            def: base.def + scaling,
            crit: base.crit + round_tenths(scaling * 5),
            speed: base.speed + round_tenths(scaling * 3),
        }
    }
}

fn archetype_base(archetype: &super::archetype::EnemyArchetype) -> EnemyStats {
    EnemyStats {
        hp: archetype.base_hp,
        atk: archetype.base_atk,
        def: archetype.base_def,
        crit: archetype.base_crit,
        speed: archetype.base_speed,
    }
}

/// Round a value expressed in tenths to the nearest integer (half up).
fn round_tenths(tenths: i64) -> i64 {
    (tenths + 5).div_euclid(10)
}

fn apply_variant(stats: EnemyStats, variant: &VariantModifier) -> EnemyStats {
    EnemyStats {
        hp: (stats.hp * variant.hp_mult_percent as i64) / 100,
        atk: (stats.atk * variant.atk_mult_percent as i64) / 100,
        def: (stats.def * variant.def_mult_percent as i64) / 100,
        crit: stats.crit + variant.crit_add,
        speed: (stats.speed * variant.speed_mult_percent as i64) / 100 + variant.speed_add,
    }
}

fn apply_tier_multiplier(stats: EnemyStats, percent: u32) -> EnemyStats {
    let percent = percent as i64;
    EnemyStats {
        hp: (stats.hp * percent) / 100,
        atk: (stats.atk * percent) / 100,
        def: (stats.def * percent) / 100,
        crit: (stats.crit * percent) / 100,
        speed: (stats.speed * percent) / 100,
    }
}

fn display_name(archetype_name: &str, variant: Option<&str>, level: u32) -> String {
    match variant {
        Some(variant) => format!("{variant} {archetype_name} (L{level})"),
        None => format!("{archetype_name} (L{level})"),
    }
}

fn description(archetype_name: &str, variant: Option<&str>, tier: Tier, level: u32) -> String {
    let base = format!(
        "A level {level} {} {}.",
        tier.as_ref().to_lowercase(),
        archetype_name.to_lowercase()
    );
    match variant {
        Some(variant) => format!("{base} A {} variant.", variant.to_lowercase()),
        None => base,
    }
}
