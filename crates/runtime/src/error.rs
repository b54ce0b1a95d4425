//! Runtime errors.

use arena_core::GenerateError;

/// Errors surfaced by the fight service.
///
/// Only genuinely unrecoverable conditions appear here. Missing equipment,
/// companion, passive, or event data degrades to defaults inside the service
/// rather than failing the fight.
#[derive(Debug, thiserror::Error)]
pub enum FightError {
    /// No hero record exists for the player. Fatal: stats cannot be
    /// defaulted into existence.
    #[error("no hero found for player {0}")]
    HeroNotFound(String),

    /// Enemy generation failed (empty catalog or unknown forced
    /// archetype/variant).
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// A store rejected a post-fight write. The fight itself resolved; the
    /// caller decides whether to retry persistence.
    #[error("store operation failed: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, FightError>;
