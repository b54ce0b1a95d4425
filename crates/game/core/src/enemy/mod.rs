//! Procedural enemy generation: archetypes, tiers, variants, and the
//! generation pipeline.

mod archetype;
mod generator;
mod tier;
mod variant;

pub use archetype::{ArchetypeCatalog, EnemyArchetype};
pub use generator::{
    EnemyGenerator, EnemyStats, GenerateError, GenerateOptions, GeneratedEnemy, VariantChoice,
};
pub use tier::{Tier, TierParams, TierTable};
pub use variant::{VariantCatalog, VariantKind, VariantModifier};
