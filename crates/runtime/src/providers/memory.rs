//! In-memory store implementations for tests and local runs.

use std::collections::HashMap;
use std::sync::Arc;

use arena_core::{
    CompanionBonuses, EquippedItem, ItemDrop, LootTableRow, PassiveBonuses, RpgEvent,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use super::{
    CompanionStore, EventStore, HeroRecord, HeroStore, InventoryStore, LootStore,
    PassiveSkillStore, ProgressOutcome, ScheduledEvent, StoreError, StoreResult,
};

/// Hero store over a shared map, with a simple quadratic-ish level curve:
/// each level requires `level × 100` XP.
#[derive(Clone, Default)]
pub struct InMemoryHeroStore {
    heroes: Arc<RwLock<HashMap<String, HeroState>>>,
}

#[derive(Clone, Debug)]
struct HeroState {
    record: HeroRecord,
    xp: i64,
    gold: i64,
}

impl InMemoryHeroStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, record: HeroRecord) {
        let mut heroes = self.heroes.write().await;
        heroes.insert(
            record.player_id.clone(),
            HeroState {
                record,
                xp: 0,
                gold: 0,
            },
        );
    }

    pub async fn gold(&self, player_id: &str) -> i64 {
        self.heroes
            .read()
            .await
            .get(player_id)
            .map(|h| h.gold)
            .unwrap_or(0)
    }

    pub async fn xp(&self, player_id: &str) -> i64 {
        self.heroes
            .read()
            .await
            .get(player_id)
            .map(|h| h.xp)
            .unwrap_or(0)
    }

    fn xp_to_next(level: u32) -> i64 {
        level as i64 * 100
    }
}

#[async_trait]
impl HeroStore for InMemoryHeroStore {
    async fn hero(&self, player_id: &str) -> StoreResult<Option<HeroRecord>> {
        Ok(self
            .heroes
            .read()
            .await
            .get(player_id)
            .map(|h| h.record.clone()))
    }

    async fn apply_progress(
        &self,
        player_id: &str,
        xp: i64,
        gold: i64,
    ) -> StoreResult<ProgressOutcome> {
        let mut heroes = self.heroes.write().await;
        let hero = heroes
            .get_mut(player_id)
            .ok_or_else(|| StoreError(format!("no hero for {player_id}")))?;

        hero.xp += xp;
        hero.gold += gold;

        let start_level = hero.record.level;
        while hero.xp >= Self::xp_to_next(hero.record.level) {
            hero.xp -= Self::xp_to_next(hero.record.level);
            hero.record.level += 1;
        }

        Ok(ProgressOutcome {
            new_level: hero.record.level,
            leveled_up: hero.record.level > start_level,
        })
    }
}

/// Inventory store over shared maps of equipped items and granted drops.
#[derive(Clone, Default)]
pub struct InMemoryInventoryStore {
    equipped: Arc<RwLock<HashMap<String, Vec<EquippedItem>>>>,
    granted: Arc<RwLock<HashMap<String, Vec<ItemDrop>>>>,
}

impl InMemoryInventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn equip(&self, player_id: &str, items: Vec<EquippedItem>) {
        self.equipped.write().await.insert(player_id.into(), items);
    }

    pub async fn granted(&self, player_id: &str) -> Vec<ItemDrop> {
        self.granted
            .read()
            .await
            .get(player_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl InventoryStore for InMemoryInventoryStore {
    async fn equipped(&self, player_id: &str) -> StoreResult<Vec<EquippedItem>> {
        Ok(self
            .equipped
            .read()
            .await
            .get(player_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn grant_items(&self, player_id: &str, items: &[ItemDrop]) -> StoreResult<()> {
        self.granted
            .write()
            .await
            .entry(player_id.into())
            .or_default()
            .extend_from_slice(items);
        Ok(())
    }
}

/// Companion store returning a fixed bonus set per player.
#[derive(Clone, Default)]
pub struct InMemoryCompanionStore {
    bonuses: Arc<RwLock<HashMap<String, CompanionBonuses>>>,
}

impl InMemoryCompanionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, player_id: &str, bonuses: CompanionBonuses) {
        self.bonuses.write().await.insert(player_id.into(), bonuses);
    }
}

#[async_trait]
impl CompanionStore for InMemoryCompanionStore {
    async fn active_bonuses(&self, player_id: &str) -> StoreResult<CompanionBonuses> {
        Ok(self
            .bonuses
            .read()
            .await
            .get(player_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Passive skill store returning a fixed bonus set per player.
#[derive(Clone, Default)]
pub struct InMemoryPassiveStore {
    bonuses: Arc<RwLock<HashMap<String, PassiveBonuses>>>,
}

impl InMemoryPassiveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set(&self, player_id: &str, bonuses: PassiveBonuses) {
        self.bonuses.write().await.insert(player_id.into(), bonuses);
    }
}

#[async_trait]
impl PassiveSkillStore for InMemoryPassiveStore {
    async fn passive_bonuses(&self, player_id: &str) -> StoreResult<PassiveBonuses> {
        Ok(self
            .bonuses
            .read()
            .await
            .get(player_id)
            .cloned()
            .unwrap_or_default())
    }
}

/// Event store over a shared list of scheduled events.
///
/// Can be flipped into a failing state to exercise the service's degraded
/// path.
#[derive(Clone, Default)]
pub struct InMemoryEventStore {
    events: Arc<RwLock<Vec<ScheduledEvent>>>,
    failing: Arc<RwLock<bool>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_events(&self, events: Vec<ScheduledEvent>) {
        *self.events.write().await = events;
    }

    pub async fn set_failing(&self, failing: bool) {
        *self.failing.write().await = failing;
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn active_events(&self, now: DateTime<Utc>) -> StoreResult<Vec<RpgEvent>> {
        if *self.failing.read().await {
            return Err(StoreError("event store unavailable".into()));
        }
        Ok(self
            .events
            .read()
            .await
            .iter()
            .filter(|scheduled| scheduled.is_active_at(now))
            .map(|scheduled| scheduled.event.clone())
            .collect())
    }
}

/// Loot store over a shared map keyed by archetype code.
#[derive(Clone, Default)]
pub struct InMemoryLootStore {
    tables: Arc<RwLock<HashMap<String, Vec<LootTableRow>>>>,
}

impl InMemoryLootStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_table(&self, archetype_code: &str, rows: Vec<LootTableRow>) {
        self.tables
            .write()
            .await
            .insert(archetype_code.into(), rows);
    }
}

#[async_trait]
impl LootStore for InMemoryLootStore {
    async fn loot_rows(&self, archetype_code: &str) -> StoreResult<Vec<LootTableRow>> {
        Ok(self
            .tables
            .read()
            .await
            .get(archetype_code)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::EventEffect;
    use chrono::Duration;

    fn scheduled(code: &str, start_offset: Duration, end_offset: Duration) -> ScheduledEvent {
        let now = Utc::now();
        ScheduledEvent::new(
            RpgEvent {
                code: code.into(),
                name: code.into(),
                effect: EventEffect::default(),
            },
            now + start_offset,
            now + end_offset,
        )
    }

    #[tokio::test]
    async fn only_events_inside_their_window_are_active() {
        let store = InMemoryEventStore::new();
        store
            .set_events(vec![
                scheduled("running", Duration::hours(-1), Duration::hours(1)),
                scheduled("expired", Duration::hours(-3), Duration::hours(-1)),
                scheduled("upcoming", Duration::hours(1), Duration::hours(3)),
            ])
            .await;

        let active = store.active_events(Utc::now()).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].code, "running");
    }

    #[tokio::test]
    async fn window_end_is_exclusive() {
        let now = Utc::now();
        let event = scheduled("ending", Duration::hours(-1), Duration::zero());
        assert!(!event.is_active_at(now + Duration::seconds(1)));
        assert!(event.is_active_at(now - Duration::minutes(30)));
    }
}
