//! Data-driven combat content and loaders.
//!
//! This crate houses the shipped combat content and provides loaders for
//! RON/TOML data files:
//! - Enemy archetype catalogs (data-driven via RON)
//! - Variant modifier catalogs (data-driven via RON)
//! - Loot tables (data-driven via RON)
//! - Balance configuration (data-driven via TOML)
//!
//! Content is consumed by the runtime's fight service and never appears in
//! fight state. All loaders use arena-core types directly with serde for
//! RON/TOML deserialization; the builtin catalogs in [`catalog`] need no
//! data files at all.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{builtin_archetypes, builtin_variants};

#[cfg(feature = "loaders")]
pub use loaders::{
    ArchetypeLoader, ConfigLoader, ContentFactory, LootTableLoader, VariantLoader,
};
