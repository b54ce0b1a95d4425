//! Reward rolling for won fights.

use crate::config::BalanceConfig;
use crate::enemy::{GeneratedEnemy, TierTable};
use crate::rarity::Rarity;
use crate::rng::{RngOracle, compute_seed, roll};
use crate::stats::ComputedStats;

use super::tables::RarityDropTable;

/// An item reference carried on a loot-table row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootItem {
    pub item_id: String,
    pub rarity: Rarity,
}

/// One weighted loot-table row.
///
/// Rows either carry an item (drop candidates) or only XP ranges. Gold
/// ranges from legacy tables are ignored; gold comes from the scaled
/// tier formula.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTableRow {
    pub item: Option<LootItem>,
    pub weight: u32,
    pub min_xp: i64,
    pub max_xp: i64,
}

/// A dropped item with quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDrop {
    pub item_id: String,
    pub quantity: u32,
}

/// Rolled rewards for a won fight.
///
/// Ephemeral: consumed immediately by progression and inventory
/// collaborators, never stored as its own record.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RewardResult {
    pub xp: i64,
    pub gold: i64,
    pub items: Vec<ItemDrop>,
}

impl RewardResult {
    /// The zero tuple, by convention what a lost fight yields.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Reward engine over injected balance tables.
#[derive(Clone, Debug)]
pub struct RewardEngine {
    tiers: TierTable,
    drop_table: RarityDropTable,
    config: BalanceConfig,
}

impl RewardEngine {
    pub fn new(tiers: TierTable, drop_table: RarityDropTable, config: BalanceConfig) -> Self {
        Self {
            tiers,
            drop_table,
            config,
        }
    }

    /// Roll XP, gold, and item drops for a won fight.
    ///
    /// Only meaningful for a win; callers skip this on a loss and use
    /// [`RewardResult::zero`]. Event bonuses are NOT applied here — pass the
    /// result through [`crate::events::apply_to_rewards`].
    pub fn roll(
        &self,
        hero: &ComputedStats,
        enemy: &GeneratedEnemy,
        loot_rows: &[LootTableRow],
        rng: &dyn RngOracle,
        fight_seed: u64,
    ) -> RewardResult {
        let xp = self.roll_xp(enemy, loot_rows, rng, fight_seed);
        let gold = self.gold_for(hero.level, enemy);
        let items = self.roll_item(enemy, loot_rows, rng, fight_seed);

        RewardResult { xp, gold, items }
    }

    /// XP from a uniformly chosen loot row, falling back to a flat
    /// per-enemy-level default when no row provides XP.
    fn roll_xp(
        &self,
        enemy: &GeneratedEnemy,
        loot_rows: &[LootTableRow],
        rng: &dyn RngOracle,
        fight_seed: u64,
    ) -> i64 {
        let xp_rows: Vec<&LootTableRow> = loot_rows
            .iter()
            .filter(|row| row.min_xp > 0 || row.max_xp > 0)
            .collect();

        if !xp_rows.is_empty() {
            let row_seed = compute_seed(fight_seed, 0, roll::XP_ROW);
            let row = xp_rows[rng.next_u32(row_seed) as usize % xp_rows.len()];
            // Rows come from arbitrary stores, not just the validating
            // loader: clamp negative bounds before the u32 cast
            let min = row.min_xp.max(0);
            let max = row.max_xp.max(0);
            if min >= max {
                return min;
            }
            let amount_seed = compute_seed(fight_seed, 0, roll::XP_AMOUNT);
            return rng.range(amount_seed, min as u32, max as u32) as i64;
        }

        enemy.level as i64 * self.config.fallback_xp_per_level
    }

    /// Scaled gold formula with the early-game soft cap.
    ///
    /// ```text
    /// gold = clamp(5 + ⌊tierMult × heroLevel × 2⌋, 5, capForLevel)
    /// capForLevel = level ≤ 10 ? 50 : 50 + level × 3
    /// ```
    fn gold_for(&self, hero_level: u32, enemy: &GeneratedEnemy) -> i64 {
        let percent = self.tiers.params(enemy.tier).reward_multiplier_percent as i64;
        let calculated =
            self.config.gold_floor + (percent * hero_level as i64 * 2) / 100;

        let cap = if hero_level <= self.config.gold_cap_level {
            self.config.gold_base_cap
        } else {
            self.config.gold_base_cap + hero_level as i64 * self.config.gold_cap_per_level
        };

        calculated.clamp(self.config.gold_floor, cap)
    }

    /// Weighted item selection with the scarcity valve.
    ///
    /// Each candidate row's effective weight is its weight scaled by the
    /// rarity drop multiplier for the fight's tier. When the pool's total
    /// effective weight falls under the scarcity threshold, a coin flip may
    /// yield no drop at all.
    fn roll_item(
        &self,
        enemy: &GeneratedEnemy,
        loot_rows: &[LootTableRow],
        rng: &dyn RngOracle,
        fight_seed: u64,
    ) -> Vec<ItemDrop> {
        let candidates: Vec<(&LootItem, u64)> = loot_rows
            .iter()
            .filter_map(|row| row.item.as_ref().map(|item| (item, row.weight)))
            .map(|(item, weight)| {
                let percent = self.drop_table.multiplier_percent(enemy.tier, item.rarity);
                (item, (weight as u64 * percent as u64) / 100)
            })
            .collect();

        let total: u64 = candidates.iter().map(|(_, w)| w).sum();
        if total == 0 {
            return Vec::new();
        }

        if total < self.config.scarce_pool_threshold as u64 {
            let gate_seed = compute_seed(fight_seed, 0, roll::DROP_GATE);
            if rng.roll_permille(gate_seed) < 500 {
                return Vec::new();
            }
        }

        // Cumulative-weight draw: subtract candidate weights from the rolled
        // threshold until it goes negative.
        let item_seed = compute_seed(fight_seed, 0, roll::ITEM);
        let mut threshold = rng.weight_threshold(item_seed, total) as i64;
        for (item, weight) in &candidates {
            threshold -= *weight as i64;
            if threshold < 0 {
                return vec![ItemDrop {
                    item_id: item.item_id.clone(),
                    quantity: 1,
                }];
            }
        }

        // Unreachable with a correct total; fall back to the first candidate
        candidates
            .first()
            .map(|(item, _)| {
                vec![ItemDrop {
                    item_id: item.item_id.clone(),
                    quantity: 1,
                }]
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::{EnemyStats, Tier};
    use crate::rng::PcgRng;
    use crate::stats::BaseAttributes;

    fn engine() -> RewardEngine {
        RewardEngine::new(
            TierTable::default(),
            RarityDropTable::default(),
            BalanceConfig::default(),
        )
    }

    fn hero(level: u32) -> ComputedStats {
        ComputedStats::from_attributes(&BaseAttributes::new(10, 10, 10, 10, 10), level)
    }

    fn enemy(tier: Tier, level: u32) -> GeneratedEnemy {
        GeneratedEnemy {
            name: format!("Goblin (L{level})"),
            description: String::new(),
            level,
            tier,
            variant: None,
            archetype_code: "goblin".into(),
            stats: EnemyStats {
                hp: 30,
                atk: 8,
                def: 4,
                crit: 5,
                speed: 6,
            },
        }
    }

    fn item_row(item_id: &str, rarity: Rarity, weight: u32) -> LootTableRow {
        LootTableRow {
            item: Some(LootItem {
                item_id: item_id.into(),
                rarity,
            }),
            weight,
            min_xp: 0,
            max_xp: 0,
        }
    }

    #[test]
    fn gold_for_level_five_normal_is_fifteen() {
        let rewards = engine().roll(&hero(5), &enemy(Tier::Normal, 5), &[], &PcgRng, 1);
        assert_eq!(rewards.gold, 15); // clamp(5 + ⌊1.0×5×2⌋, 5, 50)
    }

    #[test]
    fn gold_for_level_fifteen_elite_caps_at_fifty() {
        let rewards = engine().roll(&hero(15), &enemy(Tier::Elite, 18), &[], &PcgRng, 1);
        assert_eq!(rewards.gold, 50); // clamp(5 + ⌊1.5×15×2⌋, 5, 95) = 50
    }

    #[test]
    fn gold_never_drops_below_floor() {
        let rewards = engine().roll(&hero(1), &enemy(Tier::Easy, 1), &[], &PcgRng, 1);
        assert!(rewards.gold >= 5);
    }

    #[test]
    fn xp_falls_back_to_flat_per_level() {
        let rewards = engine().roll(&hero(10), &enemy(Tier::Normal, 10), &[], &PcgRng, 1);
        assert_eq!(rewards.xp, 50); // level 10 × 5
    }

    #[test]
    fn xp_row_bounds_are_respected() {
        let rows = [LootTableRow {
            item: None,
            weight: 1,
            min_xp: 20,
            max_xp: 30,
        }];
        for seed in 0..100u64 {
            let rewards = engine().roll(&hero(10), &enemy(Tier::Normal, 10), &rows, &PcgRng, seed);
            assert!((20..=30).contains(&rewards.xp), "seed {seed}: {}", rewards.xp);
        }
    }

    #[test]
    fn negative_xp_bounds_clamp_to_zero() {
        // A negative lower bound must not wrap through the u32 cast
        let rows = [LootTableRow {
            item: None,
            weight: 1,
            min_xp: -50,
            max_xp: 30,
        }];
        for seed in 0..50u64 {
            let rewards = engine().roll(&hero(10), &enemy(Tier::Normal, 10), &rows, &PcgRng, seed);
            assert!((0..=30).contains(&rewards.xp), "seed {seed}: {}", rewards.xp);
        }

        // A fully negative range never passes the XP-row filter at all
        let rows = [LootTableRow {
            item: None,
            weight: 1,
            min_xp: -20,
            max_xp: -5,
        }];
        let rewards = engine().roll(&hero(10), &enemy(Tier::Normal, 10), &rows, &PcgRng, 1);
        assert_eq!(rewards.xp, 50); // falls back to level × 5
    }

    #[test]
    fn degenerate_xp_range_returns_min() {
        let rows = [LootTableRow {
            item: None,
            weight: 1,
            min_xp: 25,
            max_xp: 25,
        }];
        let rewards = engine().roll(&hero(10), &enemy(Tier::Normal, 10), &rows, &PcgRng, 1);
        assert_eq!(rewards.xp, 25);
    }

    #[test]
    fn heavy_pool_always_drops_something() {
        let rows = [
            item_row("sword", Rarity::Common, 60),
            item_row("shield", Rarity::Common, 40),
        ];
        for seed in 0..50u64 {
            let rewards = engine().roll(&hero(10), &enemy(Tier::Normal, 10), &rows, &PcgRng, seed);
            assert_eq!(rewards.items.len(), 1, "seed {seed}");
        }
    }

    #[test]
    fn scarce_pool_sometimes_drops_nothing() {
        // Total effective weight 10 < 50 engages the scarcity valve
        let rows = [item_row("relic", Rarity::Common, 10)];
        let mut empty = 0;
        let mut dropped = 0;
        for seed in 0..200u64 {
            let rewards = engine().roll(&hero(10), &enemy(Tier::Normal, 10), &rows, &PcgRng, seed);
            if rewards.items.is_empty() {
                empty += 1;
            } else {
                dropped += 1;
            }
        }
        assert!(empty > 0, "scarcity valve never engaged");
        assert!(dropped > 0, "scarcity valve always engaged");
    }

    #[test]
    fn rarity_multiplier_zeroes_out_suppressed_grades() {
        // Alpha at EASY tier is ×0.05: weight 10 floors to 0 effective weight
        let rows = [item_row("alpha_blade", Rarity::Alpha, 10)];
        let rewards = engine().roll(&hero(5), &enemy(Tier::Easy, 4), &rows, &PcgRng, 1);
        assert!(rewards.items.is_empty());
    }

    #[test]
    fn rolls_are_deterministic_per_seed() {
        let rows = [
            item_row("sword", Rarity::Common, 60),
            item_row("gem", Rarity::Rare, 40),
            LootTableRow {
                item: None,
                weight: 1,
                min_xp: 10,
                max_xp: 90,
            },
        ];
        let a = engine().roll(&hero(12), &enemy(Tier::Hard, 13), &rows, &PcgRng, 99);
        let b = engine().roll(&hero(12), &enemy(Tier::Hard, 13), &rows, &PcgRng, 99);
        assert_eq!(a, b);
    }
}
