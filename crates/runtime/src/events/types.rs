//! Typed runtime event payloads.

use arena_core::{GeneratedEnemy, ItemDrop, Outcome, RewardResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Published after every resolved fight, win or lose.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FightCompleted {
    pub player_id: String,
    pub enemy: GeneratedEnemy,
    pub outcome: Outcome,
    pub rounds: u32,
    pub rewards: RewardResult,
    pub at: DateTime<Utc>,
}

/// Published when post-fight XP pushed the hero over a level threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelUp {
    pub player_id: String,
    pub new_level: u32,
    pub at: DateTime<Utc>,
}

/// Published when a won fight dropped items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LootDropped {
    pub player_id: String,
    pub items: Vec<ItemDrop>,
    pub at: DateTime<Utc>,
}
