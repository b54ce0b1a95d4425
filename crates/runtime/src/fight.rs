//! Fight orchestration.
//!
//! [`FightService`] wires the stores, the enemy generator, the combat
//! resolver, and the reward engine into the single entry point a request
//! handler calls. The engine stays pure; this service owns all I/O, the
//! degraded-default policy, per-player serialization, and event publishing.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use arena_core::{
    BalanceConfig, ComputedStats, EnemyGenerator, FightResult, GenerateOptions, GeneratedEnemy,
    PcgRng, RewardEngine, RewardResult, RngOracle, apply_to_enemy, apply_to_hero,
    apply_to_rewards,
};
use chrono::Utc;
use tokio::sync::Mutex;

use crate::error::{FightError, Result};
use crate::events::{Event, EventBus, FightCompleted, LevelUp, LootDropped};
use crate::providers::{
    CompanionStore, EventStore, HeroStore, InventoryStore, LootStore, PassiveSkillStore,
};

/// A fight request as it arrives from the caller.
#[derive(Clone, Debug, Default)]
pub struct FightRequest {
    pub player_id: String,
    /// Explicit seed for replayable fights; a fresh one is derived from the
    /// clock and player id when absent.
    pub seed: Option<u64>,
    pub options: GenerateOptions,
}

/// Everything a caller learns about a resolved fight.
#[derive(Clone, Debug)]
pub struct FightReport {
    pub seed: u64,
    pub hero: ComputedStats,
    pub enemy: GeneratedEnemy,
    pub result: FightResult,
    /// Zero unless the fight was won.
    pub rewards: RewardResult,
}

/// The store bundle the service reads from and writes to.
#[derive(Clone)]
pub struct Stores {
    pub heroes: Arc<dyn HeroStore>,
    pub inventory: Arc<dyn InventoryStore>,
    pub companions: Arc<dyn CompanionStore>,
    pub passives: Arc<dyn PassiveSkillStore>,
    pub events: Arc<dyn EventStore>,
    pub loot: Arc<dyn LootStore>,
}

/// Fight orchestrator.
///
/// Concurrent fights for different players run freely; fights for the same
/// player are serialized on a per-player lock so progression writes never
/// interleave.
pub struct FightService {
    stores: Stores,
    generator: EnemyGenerator,
    rewards: RewardEngine,
    config: BalanceConfig,
    rng: Arc<dyn RngOracle>,
    bus: EventBus,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl FightService {
    pub fn new(
        stores: Stores,
        generator: EnemyGenerator,
        rewards: RewardEngine,
        config: BalanceConfig,
    ) -> Self {
        Self {
            stores,
            generator,
            rewards,
            config,
            rng: Arc::new(PcgRng),
            bus: EventBus::new(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Replace the RNG oracle (tests inject doubles here).
    pub fn with_rng(mut self, rng: Arc<dyn RngOracle>) -> Self {
        self.rng = rng;
        self
    }

    /// The event bus fights publish to.
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    /// Run a complete fight: resolve stats, generate the enemy, fight,
    /// roll rewards, persist, publish.
    ///
    /// # Errors
    ///
    /// Fatal only when the hero does not exist, enemy generation fails, or a
    /// post-win store write is rejected. Missing equipment, companion,
    /// passive, or event data degrades to defaults.
    pub async fn fight(&self, request: &FightRequest) -> Result<FightReport> {
        let _guard = self.player_lock(&request.player_id).await;
        let seed = request.seed.unwrap_or_else(|| derive_seed(&request.player_id));

        tracing::info!(player = %request.player_id, seed, "fight started");

        let hero = self.resolve_hero(&request.player_id).await?;
        let events = match self.stores.events.active_events(Utc::now()).await {
            Ok(events) => events,
            Err(error) => {
                tracing::warn!(%error, "event store unavailable, fighting without modifiers");
                Vec::new()
            }
        };
        warn_malformed_effects(&events);

        let hero = apply_to_hero(&hero, &events);
        let enemy = self
            .generator
            .generate(&hero, &request.options, self.rng.as_ref(), seed)?;
        let enemy_stats = apply_to_enemy(&enemy.stats, &events);

        let result = arena_core::resolve_fight(
            &hero,
            &enemy_stats,
            &self.config,
            self.rng.as_ref(),
            seed,
        );
        tracing::debug!(
            player = %request.player_id,
            outcome = ?result.outcome,
            rounds = result.rounds,
            enemy = %enemy.name,
            "fight resolved"
        );

        let rewards = if result.outcome.is_win() {
            let loot_rows = match self.stores.loot.loot_rows(&enemy.archetype_code).await {
                Ok(rows) => rows,
                Err(error) => {
                    tracing::warn!(%error, "loot store unavailable, using fallback rewards");
                    Vec::new()
                }
            };
            let rolled = self
                .rewards
                .roll(&hero, &enemy, &loot_rows, self.rng.as_ref(), seed);
            let boosted = apply_to_rewards(&rolled, &events);
            self.persist_rewards(&request.player_id, &boosted).await?;
            boosted
        } else {
            RewardResult::zero()
        };

        self.bus.publish(Event::FightCompleted(FightCompleted {
            player_id: request.player_id.clone(),
            enemy: enemy.clone(),
            outcome: result.outcome,
            rounds: result.rounds,
            rewards: rewards.clone(),
            at: Utc::now(),
        }));

        Ok(FightReport {
            seed,
            hero,
            enemy,
            result,
            rewards,
        })
    }

    /// Resolve the hero's combat snapshot, degrading missing collaborator
    /// data to defaults.
    async fn resolve_hero(&self, player_id: &str) -> Result<ComputedStats> {
        let record = self
            .stores
            .heroes
            .hero(player_id)
            .await
            .map_err(|e| FightError::Store(e.to_string()))?
            .ok_or_else(|| FightError::HeroNotFound(player_id.to_string()))?;

        let equipped = match self.stores.inventory.equipped(player_id).await {
            Ok(items) => items,
            Err(error) => {
                tracing::warn!(player = %player_id, %error, "inventory unavailable, assuming unequipped");
                Vec::new()
            }
        };
        let companion = match self.stores.companions.active_bonuses(player_id).await {
            Ok(bonuses) => bonuses,
            Err(error) => {
                tracing::warn!(player = %player_id, %error, "companion store unavailable, assuming none");
                Default::default()
            }
        };
        let passives = match self.stores.passives.passive_bonuses(player_id).await {
            Ok(bonuses) => bonuses,
            Err(error) => {
                tracing::warn!(player = %player_id, %error, "passive store unavailable, assuming none");
                Default::default()
            }
        };

        let attributes = record.attributes.resolve();
        Ok(ComputedStats::compute(
            &attributes,
            record.level,
            &equipped,
            &companion,
            &passives,
        ))
    }

    /// Write XP, gold, and items; publish progression and loot events.
    async fn persist_rewards(&self, player_id: &str, rewards: &RewardResult) -> Result<()> {
        let progress = self
            .stores
            .heroes
            .apply_progress(player_id, rewards.xp, rewards.gold)
            .await
            .map_err(|e| FightError::Store(e.to_string()))?;

        if !rewards.items.is_empty() {
            self.stores
                .inventory
                .grant_items(player_id, &rewards.items)
                .await
                .map_err(|e| FightError::Store(e.to_string()))?;

            self.bus.publish(Event::LootDropped(LootDropped {
                player_id: player_id.to_string(),
                items: rewards.items.clone(),
                at: Utc::now(),
            }));
        }

        if progress.leveled_up {
            tracing::info!(player = %player_id, level = progress.new_level, "level up");
            self.bus.publish(Event::LevelUp(LevelUp {
                player_id: player_id.to_string(),
                new_level: progress.new_level,
                at: Utc::now(),
            }));
        }

        Ok(())
    }

    /// Acquire this player's fight lock, creating it on first use.
    async fn player_lock(&self, player_id: &str) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(player_id.to_string()).or_default())
        };
        lock.lock_owned().await
    }
}

/// Log events whose effect carries a non-positive multiplier. The engine
/// treats such multipliers as absent; the warning is the only trace of the
/// malformed record.
fn warn_malformed_effects(events: &[arena_core::RpgEvent]) {
    for event in events {
        let effect = &event.effect;
        let multipliers = [
            effect.atk_multiplier,
            effect.def_multiplier,
            effect.hp_multiplier,
            effect.enemy_atk_multiplier,
            effect.enemy_hp_multiplier,
        ];
        if multipliers.iter().any(|m| *m <= 0.0) {
            tracing::warn!(
                code = %event.code,
                "event effect has a non-positive multiplier, skipping that field"
            );
        }
    }
}

/// Seed for fights that did not bring their own: wall clock mixed with the
/// player id so simultaneous fights diverge.
fn derive_seed(player_id: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    player_id.hash(&mut hasher);
    let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
    nanos ^ hasher.finish()
}
