//! Deterministic combat resolution and reward scaling.
//!
//! `arena-core` defines the canonical fight rules: hero stat resolution,
//! procedural enemy generation, event modifier stacking, the turn-based
//! combat loop, and tiered reward rolling. Everything is a pure function of
//! its inputs plus a single fight seed — no I/O, no clock, no global state —
//! so a fight is fully replayable and the surrounding runtime can stay thin.
//!
//! The canonical modifier order is applied uniformly everywhere:
//! level-scale → variant multiply/add → tier multiply → event multiply/add.
pub mod combat;
pub mod config;
pub mod enemy;
pub mod events;
pub mod rarity;
pub mod rewards;
pub mod rng;
pub mod stats;

pub use combat::{Actor, FightResult, Outcome, RoundAction, RoundEntry, resolve_fight};
pub use config::BalanceConfig;
pub use enemy::{
    ArchetypeCatalog, EnemyArchetype, EnemyGenerator, EnemyStats, GenerateError, GenerateOptions,
    GeneratedEnemy, Tier, TierParams, TierTable, VariantCatalog, VariantChoice, VariantKind,
    VariantModifier,
};
pub use events::{EventEffect, RpgEvent, apply_to_enemy, apply_to_hero, apply_to_rewards};
pub use rarity::Rarity;
pub use rewards::{
    ItemDrop, LootItem, LootTableRow, RarityDropTable, RewardEngine, RewardResult,
};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use stats::{
    AttributeSource, BaseAttributes, CompanionBonuses, ComputedStats, EquipmentPower, EquippedItem,
    LegacyStatsBlob, PassiveBonuses, SlotKind,
};
