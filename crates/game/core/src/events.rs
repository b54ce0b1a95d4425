//! Global event modifiers.
//!
//! Events are time-windowed gameplay modifiers: hero stat multipliers, enemy
//! stat multipliers, and reward percentage bonuses. The time window is the
//! caller's concern; this module only sees the list of currently active
//! events and applies them as pure transformations.
//!
//! # Stacking
//!
//! Multiplier effects across events stack multiplicatively; additive effects
//! (crit bonus, speed bonus) stack additively. Reward percentage bonuses
//! combine as `Π(1 + bonus)`: two +10% XP events yield ×1.21, not ×1.2.
//! An empty event list is a strict identity on every apply function.

use crate::enemy::EnemyStats;
use crate::rewards::RewardResult;
use crate::stats::ComputedStats;

/// Numeric effect payload of an event.
///
/// Multipliers are neutral at 1.0, bonuses at 0. Non-positive multipliers
/// are treated as absent: a malformed or zeroed field never nullifies a
/// fight's stats.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct EventEffect {
    pub atk_multiplier: f64,
    pub def_multiplier: f64,
    pub hp_multiplier: f64,
    /// Additive crit chance, in percent.
    pub crit_bonus: f64,
    /// Additive speed points.
    pub speed_bonus: i64,
    /// XP bonus as a fraction (0.2 = +20%).
    pub xp_bonus: f64,
    /// Gold bonus as a fraction.
    pub gold_bonus: f64,
    pub enemy_atk_multiplier: f64,
    pub enemy_hp_multiplier: f64,
}

impl Default for EventEffect {
    fn default() -> Self {
        Self {
            atk_multiplier: 1.0,
            def_multiplier: 1.0,
            hp_multiplier: 1.0,
            crit_bonus: 0.0,
            speed_bonus: 0,
            xp_bonus: 0.0,
            gold_bonus: 0.0,
            enemy_atk_multiplier: 1.0,
            enemy_hp_multiplier: 1.0,
        }
    }
}

/// An active global event as seen by the combat engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RpgEvent {
    pub code: String,
    pub name: String,
    pub effect: EventEffect,
}

/// Fold a multiplier into the accumulator, skipping absent/malformed values.
#[inline]
fn fold_mult(acc: f64, value: f64) -> f64 {
    if value > 0.0 { acc * value } else { acc }
}

/// Apply active events to hero stats.
///
/// Identity when `events` is empty.
pub fn apply_to_hero(stats: &ComputedStats, events: &[RpgEvent]) -> ComputedStats {
    if events.is_empty() {
        return *stats;
    }

    let mut atk_mult = 1.0;
    let mut def_mult = 1.0;
    let mut hp_mult = 1.0;
    let mut crit_bonus = 0.0;
    let mut speed_bonus = 0i64;

    for event in events {
        let effect = &event.effect;
        atk_mult = fold_mult(atk_mult, effect.atk_multiplier);
        def_mult = fold_mult(def_mult, effect.def_multiplier);
        hp_mult = fold_mult(hp_mult, effect.hp_multiplier);
        crit_bonus += effect.crit_bonus;
        speed_bonus += effect.speed_bonus;
    }

    ComputedStats {
        max_hp: (stats.max_hp as f64 * hp_mult).floor() as i64,
        attack: (stats.attack as f64 * atk_mult).floor() as i64,
        defense: (stats.defense as f64 * def_mult).floor() as i64,
        speed: (stats.speed + speed_bonus).max(1),
        crit_chance: (stats.crit_chance + crit_bonus).min(100.0),
        ..*stats
    }
}

/// Apply active events to a generated enemy's stats.
///
/// Identity when `events` is empty. Only HP and ATK have event modifiers.
pub fn apply_to_enemy(stats: &EnemyStats, events: &[RpgEvent]) -> EnemyStats {
    if events.is_empty() {
        return *stats;
    }

    let mut hp_mult = 1.0;
    let mut atk_mult = 1.0;

    for event in events {
        hp_mult = fold_mult(hp_mult, event.effect.enemy_hp_multiplier);
        atk_mult = fold_mult(atk_mult, event.effect.enemy_atk_multiplier);
    }

    EnemyStats {
        hp: (stats.hp as f64 * hp_mult).floor() as i64,
        atk: (stats.atk as f64 * atk_mult).floor() as i64,
        ..*stats
    }
}

/// Apply active events to rolled rewards.
///
/// Identity when `events` is empty. Each event's percentage bonus multiplies
/// the running total by `(1 + bonus)`; item drops are unaffected.
pub fn apply_to_rewards(rewards: &RewardResult, events: &[RpgEvent]) -> RewardResult {
    if events.is_empty() {
        return rewards.clone();
    }

    let mut xp_mult = 1.0;
    let mut gold_mult = 1.0;

    for event in events {
        if event.effect.xp_bonus != 0.0 {
            xp_mult *= 1.0 + event.effect.xp_bonus;
        }
        if event.effect.gold_bonus != 0.0 {
            gold_mult *= 1.0 + event.effect.gold_bonus;
        }
    }

    RewardResult {
        xp: (rewards.xp as f64 * xp_mult).floor() as i64,
        gold: (rewards.gold as f64 * gold_mult).floor() as i64,
        items: rewards.items.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BaseAttributes;

    fn event(effect: EventEffect) -> RpgEvent {
        RpgEvent {
            code: "test".into(),
            name: "Test Event".into(),
            effect,
        }
    }

    fn hero_stats() -> ComputedStats {
        ComputedStats::from_attributes(&BaseAttributes::new(20, 15, 18, 10, 12), 10)
    }

    #[test]
    fn empty_events_are_identity() {
        let stats = hero_stats();
        assert_eq!(apply_to_hero(&stats, &[]), stats);

        let enemy = EnemyStats {
            hp: 34,
            atk: 12,
            def: 8,
            crit: 7,
            speed: 8,
        };
        assert_eq!(apply_to_enemy(&enemy, &[]), enemy);

        let rewards = RewardResult {
            xp: 50,
            gold: 15,
            items: vec![],
        };
        assert_eq!(apply_to_rewards(&rewards, &[]), rewards);
    }

    #[test]
    fn hero_multipliers_stack_multiplicatively() {
        let events = vec![
            event(EventEffect {
                atk_multiplier: 1.5,
                ..EventEffect::default()
            }),
            event(EventEffect {
                atk_multiplier: 1.2,
                ..EventEffect::default()
            }),
        ];
        let stats = apply_to_hero(&hero_stats(), &events);
        // 40 × 1.5 × 1.2 = 72
        assert_eq!(stats.attack, 72);
    }

    #[test]
    fn xp_bonuses_compound_on_one_plus_bonus() {
        let events = vec![
            event(EventEffect {
                xp_bonus: 0.1,
                ..EventEffect::default()
            }),
            event(EventEffect {
                xp_bonus: 0.1,
                ..EventEffect::default()
            }),
        ];
        let rewards = RewardResult {
            xp: 100,
            gold: 100,
            items: vec![],
        };
        let boosted = apply_to_rewards(&rewards, &events);
        // (1.1)×(1.1) = 1.21, not 1.2
        assert_eq!(boosted.xp, 121);
        assert_eq!(boosted.gold, 100);
    }

    #[test]
    fn crit_bonus_clamps_at_hundred() {
        let events = vec![event(EventEffect {
            crit_bonus: 250.0,
            ..EventEffect::default()
        })];
        assert_eq!(apply_to_hero(&hero_stats(), &events).crit_chance, 100.0);
    }

    #[test]
    fn zeroed_multiplier_is_ignored() {
        // A zero multiplier would wipe the stat; treat it as absent instead
        let events = vec![event(EventEffect {
            atk_multiplier: 0.0,
            ..EventEffect::default()
        })];
        assert_eq!(apply_to_hero(&hero_stats(), &events).attack, 40);
    }

    #[test]
    fn enemy_modifiers_only_touch_hp_and_atk() {
        let events = vec![event(EventEffect {
            enemy_hp_multiplier: 1.5,
            enemy_atk_multiplier: 1.25,
            ..EventEffect::default()
        })];
        let enemy = EnemyStats {
            hp: 34,
            atk: 12,
            def: 8,
            crit: 7,
            speed: 8,
        };
        let boosted = apply_to_enemy(&enemy, &events);
        assert_eq!(boosted.hp, 51);
        assert_eq!(boosted.atk, 15);
        assert_eq!(boosted.def, 8);
        assert_eq!(boosted.speed, 8);
    }
}
