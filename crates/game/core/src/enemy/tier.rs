//! Enemy difficulty tiers and their balance table.

/// Enemy difficulty bucket.
///
/// Tier controls three things: the weighted chance of being rolled, the
/// enemy's level offset relative to the hero, and a final multiplier over all
/// generated stats. Reward gold also scales by tier.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Tier {
    Easy,
    #[default]
    Normal,
    Hard,
    Elite,
}

impl Tier {
    /// All tiers in ascending difficulty order.
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Normal, Tier::Hard, Tier::Elite];

    /// Index into per-tier tables.
    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }
}

/// Per-tier balance parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierParams {
    /// Weight for random tier selection.
    pub weight: u32,
    /// Enemy level offset relative to the hero's level.
    pub level_offset: i32,
    /// Final multiplier over all five generated stats, in percent.
    pub stat_multiplier_percent: u32,
    /// Gold reward multiplier, in percent.
    pub reward_multiplier_percent: u32,
}

/// The tier balance table, indexed by [`Tier`].
///
/// Injected into the generator and reward engine rather than read from
/// module globals so tests can substitute alternate tables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierTable {
    entries: [TierParams; 4],
}

impl TierTable {
    pub const fn new(entries: [TierParams; 4]) -> Self {
        Self { entries }
    }

    #[inline]
    pub fn params(&self, tier: Tier) -> &TierParams {
        &self.entries[tier.as_index()]
    }

    /// Sum of all selection weights.
    pub fn total_weight(&self) -> u64 {
        self.entries.iter().map(|p| p.weight as u64).sum()
    }

    /// Walk the cumulative weight distribution with a pre-rolled threshold.
    ///
    /// `threshold` must be in `[0, total_weight())`. Falls back to NORMAL if
    /// the table is degenerate (all weights zero).
    pub fn pick(&self, mut threshold: u64) -> Tier {
        for tier in Tier::ALL {
            let weight = self.params(tier).weight as u64;
            if threshold < weight {
                return tier;
            }
            threshold -= weight;
        }
        Tier::Normal
    }
}

impl Default for TierTable {
    /// EASY 10 / NORMAL 60 / HARD 25 / ELITE 5 selection weights,
    /// offsets −1/0/+1/+3, stat multipliers ×0.9/×1.0/×1.15/×1.35,
    /// reward multipliers ×0.8/×1.0/×1.2/×1.5.
    fn default() -> Self {
        Self::new([
            TierParams {
                weight: 10,
                level_offset: -1,
                stat_multiplier_percent: 90,
                reward_multiplier_percent: 80,
            },
            TierParams {
                weight: 60,
                level_offset: 0,
                stat_multiplier_percent: 100,
                reward_multiplier_percent: 100,
            },
            TierParams {
                weight: 25,
                level_offset: 1,
                stat_multiplier_percent: 115,
                reward_multiplier_percent: 120,
            },
            TierParams {
                weight: 5,
                level_offset: 3,
                stat_multiplier_percent: 135,
                reward_multiplier_percent: 150,
            },
        ])
    }
}
