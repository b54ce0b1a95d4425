//! Turn-based fight resolution.
//!
//! A round is one hero turn followed by one enemy turn, hero always first.
//! The loop terminates the instant either HP pool reaches zero, mid-round: a
//! hero that kills on their turn never takes retaliation that round. The
//! round cap is the only other bound.
//!
//! Asymmetries are intentional: only the hero crits, and only the hero
//! dodges.

use crate::config::BalanceConfig;
use crate::enemy::EnemyStats;
use crate::rng::{RngOracle, compute_seed, roll};
use crate::stats::ComputedStats;

use super::log::{Actor, FightResult, Outcome, RoundAction, RoundEntry};

/// Base damage: attack through defense, never below 1.
#[inline]
fn base_damage(attack: i64, defense: i64) -> i64 {
    (attack - defense).max(1)
}

/// Resolve a fight between a hero snapshot and an enemy snapshot.
///
/// Both snapshots must already have event modifiers applied. All randomness
/// derives from `fight_seed` via the RNG oracle, so a fight is fully
/// replayable from its inputs.
pub fn resolve_fight(
    hero: &ComputedStats,
    enemy: &EnemyStats,
    config: &BalanceConfig,
    rng: &dyn RngOracle,
    fight_seed: u64,
) -> FightResult {
    let mut hero_hp = hero.max_hp.max(0);
    let mut enemy_hp = enemy.hp.max(0);
    let mut log = Vec::new();
    let mut round = 0u32;

    let crit_permille = (hero.crit_chance * 10.0).round() as u32;
    let dodge_permille = (hero.speed.max(0) as u32).saturating_mul(config.dodge_permille_per_speed);

    let outcome = loop {
        if round >= config.max_rounds {
            break Outcome::Timeout;
        }
        round += 1;

        // Hero's turn: crit roll, then damage through enemy defense
        let crit_seed = compute_seed(fight_seed, round, roll::CRIT);
        let crit = rng.roll_permille(crit_seed) < crit_permille;
        let mut damage = base_damage(hero.attack, enemy.def);
        if crit {
            damage = (damage * config.crit_multiplier_percent as i64) / 100;
        }
        enemy_hp = (enemy_hp - damage).max(0);
        log.push(RoundEntry {
            round,
            actor: Actor::Hero,
            action: if crit { RoundAction::Crit } else { RoundAction::Attack },
            value: damage,
            crit,
            hero_hp,
            enemy_hp,
        });
        if enemy_hp == 0 {
            break Outcome::Won;
        }

        // Enemy's turn: hero dodge roll, then damage through hero defense
        let dodge_seed = compute_seed(fight_seed, round, roll::DODGE);
        if rng.roll_permille(dodge_seed) < dodge_permille {
            log.push(RoundEntry {
                round,
                actor: Actor::Hero,
                action: RoundAction::Dodge,
                value: 0,
                crit: false,
                hero_hp,
                enemy_hp,
            });
        } else {
            let damage = base_damage(enemy.atk, hero.defense);
            hero_hp = (hero_hp - damage).max(0);
            log.push(RoundEntry {
                round,
                actor: Actor::Enemy,
                action: RoundAction::Attack,
                value: damage,
                crit: false,
                hero_hp,
                enemy_hp,
            });
            if hero_hp == 0 {
                break Outcome::Lost;
            }
        }
    };

    FightResult {
        outcome,
        rounds: round,
        log,
    }
}
