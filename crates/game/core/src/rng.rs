//! RNG oracle for deterministic random number generation.
//!
//! This module provides a trait-based RNG system that ensures deterministic
//! random number generation for fight mechanics like crit rolls, dodge rolls,
//! and loot selection.
//!
//! # Determinism
//!
//! All RNG implementations must be deterministic: given the same seed,
//! they must produce the same sequence of random numbers. This is what makes
//! a fight replayable from its seed alone, and what the combat tests rely on.

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll in permille space: 0-999 inclusive.
    ///
    /// Combat chances (crit, dodge) carry a fractional percent component
    /// (e.g. dodge at speed 21 is 10.5%), so rolls resolve in tenths of a
    /// percent rather than whole percent.
    fn roll_permille(&self, seed: u64) -> u32 {
        self.next_u32(seed) % 1000
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }

    /// Pick an index into a cumulative-weight distribution.
    ///
    /// `total` must be the sum of all weights scaled to integer space by the
    /// caller. Returns a threshold in [0, total); the caller walks the
    /// candidate list subtracting weights until the threshold goes negative.
    fn weight_threshold(&self, seed: u64, total: u64) -> u64 {
        if total == 0 {
            return 0;
        }
        (self.next_u32(seed) as u64) % total
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
/// - **Good quality**: Passes statistical tests (PractRand, TestU01)
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Roll contexts used within a single fight.
///
/// Every random event in a fight draws from an independent seed computed by
/// [`compute_seed`]. Context values keep rolls in the same round from
/// colliding.
pub mod roll {
    /// Archetype selection at fight start.
    pub const ARCHETYPE: u32 = 0;
    /// Tier selection at fight start.
    pub const TIER: u32 = 1;
    /// Variant presence + selection at fight start.
    pub const VARIANT: u32 = 2;
    /// Hero crit check on the hero's turn.
    pub const CRIT: u32 = 3;
    /// Hero dodge check on the enemy's turn.
    pub const DODGE: u32 = 4;
    /// XP row selection during reward rolling.
    pub const XP_ROW: u32 = 5;
    /// XP amount within the selected row's range.
    pub const XP_AMOUNT: u32 = 6;
    /// Scarcity-valve roll for low-value loot pools.
    pub const DROP_GATE: u32 = 7;
    /// Weighted item selection.
    pub const ITEM: u32 = 8;
}

/// Compute a deterministic seed from fight components.
///
/// Combines multiple entropy sources to ensure unique seeds for each
/// random event in a fight.
///
/// # Arguments
///
/// * `fight_seed` - Base seed fixed at fight start (for replay/determinism)
/// * `round` - Combat round number (0 for pre-fight rolls)
/// * `context` - Which roll within the round (see [`roll`])
pub fn compute_seed(fight_seed: u64, round: u32, context: u32) -> u64 {
    // Mix all inputs using simple hash combiners
    // These constants are based on SplitMix64 and FxHash multipliers
    let mut hash = fight_seed;

    hash ^= (round as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x517cc1b727220a95);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
