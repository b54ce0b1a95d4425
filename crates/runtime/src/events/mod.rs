//! Topic-based event bus for fight, progression, and loot notifications.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{FightCompleted, LevelUp, LootDropped};
