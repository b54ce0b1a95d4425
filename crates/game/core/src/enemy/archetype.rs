//! Enemy archetype catalog.

/// A named template of base enemy stats.
///
/// Archetypes are immutable reference data; tiered and variant instances are
/// generated from them per fight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyArchetype {
    /// Stable identifier, e.g. `"goblin"`.
    pub code: String,
    /// Display name, e.g. `"Goblin"`.
    pub name: String,
    pub base_hp: i64,
    pub base_atk: i64,
    pub base_def: i64,
    pub base_crit: i64,
    pub base_speed: i64,
}

/// The archetype catalog the generator draws from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeCatalog {
    archetypes: Vec<EnemyArchetype>,
}

impl ArchetypeCatalog {
    pub fn new(archetypes: Vec<EnemyArchetype>) -> Self {
        Self { archetypes }
    }

    pub fn is_empty(&self) -> bool {
        self.archetypes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }

    /// Look up an archetype by code.
    pub fn by_code(&self, code: &str) -> Option<&EnemyArchetype> {
        self.archetypes.iter().find(|a| a.code == code)
    }

    /// Archetype at a catalog index (for uniform random selection).
    pub fn at(&self, index: usize) -> Option<&EnemyArchetype> {
        self.archetypes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EnemyArchetype> {
        self.archetypes.iter()
    }
}
