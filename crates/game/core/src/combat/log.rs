//! Fight log types.

/// Which side performed a logged action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Actor {
    Hero,
    Enemy,
}

/// What happened on a logged turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum RoundAction {
    Attack,
    Crit,
    /// The hero evaded the enemy's attack. Only the hero dodges.
    Dodge,
}

/// One logged turn within a round.
///
/// HP snapshots are taken after the action resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundEntry {
    pub round: u32,
    pub actor: Actor,
    pub action: RoundAction,
    /// Damage dealt; zero for a dodge.
    pub value: i64,
    pub crit: bool,
    pub hero_hp: i64,
    pub enemy_hp: i64,
}

/// Terminal state of a fight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Won,
    Lost,
    /// Round cap reached. A safety valve, treated as a no-reward loss.
    Timeout,
}

impl Outcome {
    pub const fn is_win(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

/// Complete result of a resolved fight.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FightResult {
    pub outcome: Outcome,
    pub rounds: u32,
    pub log: Vec<RoundEntry>,
}
