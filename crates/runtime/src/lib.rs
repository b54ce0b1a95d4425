//! Runtime orchestration for the deterministic combat engine.
//!
//! This crate wires the store abstractions, the enemy generator, the combat
//! resolver, and the reward engine into a cohesive fight API. Consumers embed
//! [`FightService`] to run fights, subscribe to events, and persist
//! progression through their own store implementations.
//!
//! Modules are organized by responsibility:
//! - [`fight`] hosts the orchestrator
//! - [`providers`] defines the store contracts and in-memory implementations
//! - [`events`] provides the topic-based event bus for fight notifications

pub mod error;
pub mod events;
pub mod fight;
pub mod providers;

pub use error::{FightError, Result};
pub use events::{Event, EventBus, FightCompleted, LevelUp, LootDropped, Topic};
pub use fight::{FightReport, FightRequest, FightService, Stores};
pub use providers::{
    CompanionStore, EventStore, HeroRecord, HeroStore, InMemoryCompanionStore, InMemoryEventStore,
    InMemoryHeroStore, InMemoryInventoryStore, InMemoryLootStore, InMemoryPassiveStore,
    InventoryStore, LootStore, PassiveSkillStore, ProgressOutcome, ScheduledEvent, StoreError,
    StoreResult,
};
