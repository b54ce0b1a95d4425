//! Builtin combat content.
//!
//! The shipped archetype and variant catalogs. Deployments can override any
//! of these from data files via [`crate::loaders`]; the builtins keep the
//! engine playable with zero configuration and pin the values the balance
//! tests assert against.

use arena_core::{
    ArchetypeCatalog, EnemyArchetype, VariantCatalog, VariantKind, VariantModifier,
};

/// The shipped enemy archetype catalog.
pub fn builtin_archetypes() -> ArchetypeCatalog {
    ArchetypeCatalog::new(vec![
        archetype("goblin", "Goblin", 30, 8, 4, 5, 6),
        archetype("wolf", "Wolf", 26, 10, 2, 8, 9),
        archetype("skeleton", "Skeleton", 34, 7, 6, 4, 5),
        archetype("bandit", "Bandit", 32, 9, 4, 7, 7),
        archetype("orc", "Orc", 44, 11, 6, 4, 4),
        archetype("troll", "Troll", 60, 12, 8, 2, 3),
    ])
}

/// The shipped variant catalog: four elemental and four trait variants.
pub fn builtin_variants() -> VariantCatalog {
    VariantCatalog::new(vec![
        // Elemental variants
        variant("Fire", VariantKind::Elemental, [100, 120, 100, 100], 5, 0),
        variant("Ice", VariantKind::Elemental, [100, 100, 125, 90], 0, 0),
        variant("Shadow", VariantKind::Elemental, [90, 100, 100, 100], 15, 0),
        variant("Earth", VariantKind::Elemental, [120, 100, 110, 100], 0, 0),
        // Trait variants
        variant("Swift", VariantKind::Trait, [100, 100, 100, 125], 0, 0),
        variant("Armored", VariantKind::Trait, [100, 100, 130, 100], 0, 0),
        variant("Berserk", VariantKind::Trait, [100, 130, 80, 100], 0, 0),
        variant("Corrupted", VariantKind::Trait, [100, 110, 100, 90], 10, 0),
    ])
}

fn archetype(
    code: &str,
    name: &str,
    hp: i64,
    atk: i64,
    def: i64,
    crit: i64,
    speed: i64,
) -> EnemyArchetype {
    EnemyArchetype {
        code: code.into(),
        name: name.into(),
        base_hp: hp,
        base_atk: atk,
        base_def: def,
        base_crit: crit,
        base_speed: speed,
    }
}

/// Multiplier order: [hp, atk, def, speed], in percent.
fn variant(
    name: &str,
    kind: VariantKind,
    [hp, atk, def, speed]: [u32; 4],
    crit_add: i64,
    speed_add: i64,
) -> VariantModifier {
    VariantModifier {
        name: name.into(),
        kind,
        hp_mult_percent: hp,
        atk_mult_percent: atk,
        def_mult_percent: def,
        speed_mult_percent: speed,
        crit_add,
        speed_add,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_core::{
        BalanceConfig, BaseAttributes, ComputedStats, EnemyGenerator, GenerateOptions, PcgRng,
        Tier, TierTable, VariantChoice,
    };

    #[test]
    fn goblin_matches_reference_base_stats() {
        let catalog = builtin_archetypes();
        let goblin = catalog.by_code("goblin").unwrap();
        assert_eq!(
            (
                goblin.base_hp,
                goblin.base_atk,
                goblin.base_def,
                goblin.base_crit,
                goblin.base_speed
            ),
            (30, 8, 4, 5, 6)
        );
    }

    #[test]
    fn catalog_codes_are_unique() {
        let catalog = builtin_archetypes();
        for a in catalog.iter() {
            assert_eq!(
                catalog.iter().filter(|b| b.code == a.code).count(),
                1,
                "{}",
                a.code
            );
        }
    }

    #[test]
    fn variant_names_are_unique() {
        let catalog = builtin_variants();
        for v in catalog.iter() {
            assert_eq!(
                catalog.iter().filter(|w| w.name == v.name).count(),
                1,
                "{}",
                v.name
            );
        }
    }

    #[test]
    fn all_builtin_combinations_satisfy_stat_invariants() {
        // Full sweep: every archetype × every variant × every tier × a wide
        // level range must come out clamped.
        let generator = EnemyGenerator::new(
            builtin_archetypes(),
            builtin_variants(),
            TierTable::default(),
            BalanceConfig::default(),
        );
        let variant_names: Vec<String> =
            builtin_variants().iter().map(|v| v.name.clone()).collect();

        for level in [1u32, 3, 7, 15, 30, 60] {
            let hero =
                ComputedStats::from_attributes(&BaseAttributes::new(10, 10, 10, 10, 10), level);
            for archetype in builtin_archetypes().iter() {
                for tier in Tier::ALL {
                    for choice in std::iter::once(VariantChoice::None).chain(
                        variant_names
                            .iter()
                            .map(|name| VariantChoice::Forced(name.clone())),
                    ) {
                        let options = GenerateOptions {
                            archetype_code: Some(archetype.code.clone()),
                            tier: Some(tier),
                            variant: choice,
                        };
                        let enemy = generator.generate(&hero, &options, &PcgRng, 1).unwrap();
                        assert!(enemy.stats.hp >= 1);
                        assert!(enemy.stats.atk >= 1);
                        assert!(enemy.stats.def >= 0);
                        assert!((0..=100).contains(&enemy.stats.crit));
                        assert!(enemy.stats.speed >= 1);
                        assert!(enemy.level >= 1);
                    }
                }
            }
        }
    }
}
