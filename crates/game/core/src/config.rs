//! Balance configuration constants and tunable parameters.

/// Tunable balance parameters for the combat and reward engines.
///
/// All scaling knobs live here rather than as hidden module constants so that
/// tests (and future live-ops tooling) can inject alternate tables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BalanceConfig {
    /// Hard cap on combat rounds. A safety valve against degenerate stat
    /// combinations, not a reachable outcome under normal ranges.
    pub max_rounds: u32,

    /// Crit damage multiplier in percent (150 = ×1.5).
    pub crit_multiplier_percent: u32,

    /// Dodge chance per point of speed, in permille (5 = 0.5% per speed).
    pub dodge_permille_per_speed: u32,

    /// Chance that a generated enemy rolls a variant, in permille (200 = 20%).
    pub variant_chance_permille: u32,

    /// Enemy base stat gain per hero level (0.4 stored as permille-free
    /// tenths: 4 = +0.4 per level, rounded after multiplication).
    pub scaling_tenths_per_level: u32,

    /// Minimum gold awarded for any won fight.
    pub gold_floor: i64,

    /// Early-game gold cap, applied through `gold_cap_level`.
    pub gold_base_cap: i64,

    /// Hero level at or below which the flat `gold_base_cap` applies.
    pub gold_cap_level: u32,

    /// Gold cap growth per hero level past `gold_cap_level`.
    pub gold_cap_per_level: i64,

    /// Total effective loot weight below which the scarcity valve engages
    /// (50% chance of no drop).
    pub scarce_pool_threshold: u32,

    /// Fallback XP per enemy level when no loot-table row provides XP.
    pub fallback_xp_per_level: i64,
}

impl BalanceConfig {
    pub const DEFAULT_MAX_ROUNDS: u32 = 100;

    pub fn new() -> Self {
        Self {
            max_rounds: Self::DEFAULT_MAX_ROUNDS,
            crit_multiplier_percent: 150,
            dodge_permille_per_speed: 5,
            variant_chance_permille: 200,
            scaling_tenths_per_level: 4,
            gold_floor: 5,
            gold_base_cap: 50,
            gold_cap_level: 10,
            gold_cap_per_level: 3,
            scarce_pool_threshold: 50,
            fallback_xp_per_level: 5,
        }
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self::new()
    }
}
