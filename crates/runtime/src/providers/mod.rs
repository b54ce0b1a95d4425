//! Store contracts the fight service reads from and writes to.
//!
//! The engine itself is pure; everything stateful lives behind these traits
//! so the service can run against a database in production and the
//! in-memory implementations in tests.

pub mod memory;

use arena_core::{
    AttributeSource, CompanionBonuses, EquippedItem, ItemDrop, LootTableRow, PassiveBonuses,
    RpgEvent,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub use memory::{
    InMemoryCompanionStore, InMemoryEventStore, InMemoryHeroStore, InMemoryInventoryStore,
    InMemoryLootStore, InMemoryPassiveStore,
};

/// A store-level failure.
///
/// The fight service decides per call site whether a failure is fatal or
/// degrades to defaults.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct StoreError(pub String);

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A player's hero as persisted.
#[derive(Clone, Debug)]
pub struct HeroRecord {
    pub player_id: String,
    pub level: u32,
    pub attributes: AttributeSource,
}

/// Outcome of applying XP and gold to a hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressOutcome {
    pub new_level: u32,
    pub leveled_up: bool,
}

/// Hero records and progression persistence.
#[async_trait]
pub trait HeroStore: Send + Sync {
    /// Fetch the hero record for a player, `None` when no hero exists.
    async fn hero(&self, player_id: &str) -> StoreResult<Option<HeroRecord>>;

    /// Credit XP and gold, applying level-ups per the store's curve.
    async fn apply_progress(
        &self,
        player_id: &str,
        xp: i64,
        gold: i64,
    ) -> StoreResult<ProgressOutcome>;
}

/// Equipped items and drop intake.
#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn equipped(&self, player_id: &str) -> StoreResult<Vec<EquippedItem>>;

    async fn grant_items(&self, player_id: &str, items: &[ItemDrop]) -> StoreResult<()>;
}

/// Active companion combat bonuses.
#[async_trait]
pub trait CompanionStore: Send + Sync {
    async fn active_bonuses(&self, player_id: &str) -> StoreResult<CompanionBonuses>;
}

/// Unlocked passive skill bonuses.
#[async_trait]
pub trait PassiveSkillStore: Send + Sync {
    async fn passive_bonuses(&self, player_id: &str) -> StoreResult<PassiveBonuses>;
}

/// A world event with its scheduled active window.
///
/// The engine only ever sees the inner [`RpgEvent`]; the window is resolved
/// here at the store boundary.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledEvent {
    pub event: RpgEvent,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
}

impl ScheduledEvent {
    pub fn new(event: RpgEvent, starts_at: DateTime<Utc>, ends_at: DateTime<Utc>) -> Self {
        Self {
            event,
            starts_at,
            ends_at,
        }
    }

    /// Whether the event is active at `now`: start inclusive, end exclusive.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now && now < self.ends_at
    }
}

/// World events, filtered to those active at a given instant.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn active_events(&self, now: DateTime<Utc>) -> StoreResult<Vec<RpgEvent>>;
}

/// Loot tables keyed by enemy archetype.
#[async_trait]
pub trait LootStore: Send + Sync {
    async fn loot_rows(&self, archetype_code: &str) -> StoreResult<Vec<LootTableRow>>;
}
