use std::sync::Arc;

use arena_core::{
    AttributeSource, BalanceConfig, BaseAttributes, EnemyGenerator, EventEffect, GenerateError,
    GenerateOptions, LootItem, LootTableRow, Outcome, Rarity, RarityDropTable, RewardEngine,
    RpgEvent, Tier, TierTable, VariantChoice,
};
use arena_content::{builtin_archetypes, builtin_variants};
use arena_runtime::{
    Event, FightError, FightRequest, FightService, HeroRecord, InMemoryCompanionStore,
    InMemoryEventStore, InMemoryHeroStore, InMemoryInventoryStore, InMemoryLootStore,
    InMemoryPassiveStore, ScheduledEvent, Stores, Topic,
};
use chrono::{Duration, Utc};

struct Harness {
    service: Arc<FightService>,
    heroes: InMemoryHeroStore,
    inventory: InMemoryInventoryStore,
    events: InMemoryEventStore,
    loot: InMemoryLootStore,
}

fn harness() -> Harness {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let heroes = InMemoryHeroStore::new();
    let inventory = InMemoryInventoryStore::new();
    let events = InMemoryEventStore::new();
    let loot = InMemoryLootStore::new();

    let stores = Stores {
        heroes: Arc::new(heroes.clone()),
        inventory: Arc::new(inventory.clone()),
        companions: Arc::new(InMemoryCompanionStore::new()),
        passives: Arc::new(InMemoryPassiveStore::new()),
        events: Arc::new(events.clone()),
        loot: Arc::new(loot.clone()),
    };
    let generator = EnemyGenerator::new(
        builtin_archetypes(),
        builtin_variants(),
        TierTable::default(),
        BalanceConfig::default(),
    );
    let rewards = RewardEngine::new(
        TierTable::default(),
        RarityDropTable::default(),
        BalanceConfig::default(),
    );
    let service = Arc::new(FightService::new(
        stores,
        generator,
        rewards,
        BalanceConfig::default(),
    ));

    Harness {
        service,
        heroes,
        inventory,
        events,
        loot,
    }
}

fn strong_hero(player_id: &str) -> HeroRecord {
    HeroRecord {
        player_id: player_id.into(),
        level: 10,
        attributes: AttributeSource::Direct(BaseAttributes::new(20, 15, 18, 10, 12)),
    }
}

fn weak_hero(player_id: &str) -> HeroRecord {
    HeroRecord {
        player_id: player_id.into(),
        level: 1,
        attributes: AttributeSource::Direct(BaseAttributes::new(0, 0, 0, 0, 0)),
    }
}

/// A strong level-10 hero against an EASY goblin one-shots it regardless of
/// the seed's crit and dodge rolls.
fn easy_goblin_request(player_id: &str, seed: u64) -> FightRequest {
    FightRequest {
        player_id: player_id.into(),
        seed: Some(seed),
        options: GenerateOptions {
            archetype_code: Some("goblin".into()),
            tier: Some(Tier::Easy),
            variant: VariantChoice::None,
        },
    }
}

#[tokio::test]
async fn missing_hero_is_fatal() {
    let h = harness();
    let err = h
        .service
        .fight(&easy_goblin_request("ghost", 1))
        .await
        .unwrap_err();
    assert!(matches!(err, FightError::HeroNotFound(player) if player == "ghost"));
}

#[tokio::test]
async fn unknown_forced_archetype_is_fatal() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;
    let request = FightRequest {
        player_id: "alice".into(),
        seed: Some(1),
        options: GenerateOptions {
            archetype_code: Some("dragon".into()),
            ..GenerateOptions::default()
        },
    };
    let err = h.service.fight(&request).await.unwrap_err();
    assert!(matches!(
        err,
        FightError::Generate(GenerateError::UnknownArchetype(code)) if code == "dragon"
    ));
}

#[tokio::test]
async fn won_fight_persists_rewards_and_publishes() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;
    let mut fight_rx = h.service.bus().subscribe(Topic::Fight);

    let report = h
        .service
        .fight(&easy_goblin_request("alice", 42))
        .await
        .unwrap();

    assert_eq!(report.result.outcome, Outcome::Won);
    assert!(report.rewards.xp > 0);
    assert!(report.rewards.gold >= 5);
    assert_eq!(h.heroes.xp("alice").await, report.rewards.xp);
    assert_eq!(h.heroes.gold("alice").await, report.rewards.gold);

    let event = fight_rx.try_recv().expect("fight event published");
    match event {
        Event::FightCompleted(completed) => {
            assert_eq!(completed.player_id, "alice");
            assert_eq!(completed.outcome, Outcome::Won);
            assert_eq!(completed.rewards, report.rewards);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn lost_fight_yields_zero_and_skips_persistence() {
    let h = harness();
    h.heroes.insert(weak_hero("bob")).await;

    let request = FightRequest {
        player_id: "bob".into(),
        seed: Some(7),
        options: GenerateOptions {
            archetype_code: Some("troll".into()),
            tier: Some(Tier::Elite),
            variant: VariantChoice::None,
        },
    };
    let report = h.service.fight(&request).await.unwrap();

    assert_eq!(report.result.outcome, Outcome::Lost);
    assert_eq!(report.rewards.xp, 0);
    assert_eq!(report.rewards.gold, 0);
    assert!(report.rewards.items.is_empty());
    assert_eq!(h.heroes.xp("bob").await, 0);
    assert_eq!(h.heroes.gold("bob").await, 0);
}

fn xp_boost_event(code: &str, bonus: f64) -> RpgEvent {
    RpgEvent {
        code: code.into(),
        name: code.into(),
        effect: EventEffect {
            xp_bonus: bonus,
            ..EventEffect::default()
        },
    }
}

#[tokio::test]
async fn events_apply_only_inside_their_window() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;
    h.loot
        .set_table(
            "goblin",
            vec![LootTableRow {
                item: None,
                weight: 1,
                min_xp: 50,
                max_xp: 50,
            }],
        )
        .await;

    // Expired an hour ago: no effect on rewards
    let now = Utc::now();
    h.events
        .set_events(vec![ScheduledEvent::new(
            xp_boost_event("double_xp", 1.0),
            now - Duration::hours(3),
            now - Duration::hours(1),
        )])
        .await;
    let report = h
        .service
        .fight(&easy_goblin_request("alice", 42))
        .await
        .unwrap();
    assert_eq!(report.rewards.xp, 50);

    // Same event mid-window: XP doubles
    h.events
        .set_events(vec![ScheduledEvent::new(
            xp_boost_event("double_xp", 1.0),
            now - Duration::hours(1),
            now + Duration::hours(1),
        )])
        .await;
    let report = h
        .service
        .fight(&easy_goblin_request("alice", 42))
        .await
        .unwrap();
    assert_eq!(report.rewards.xp, 100);
}

#[tokio::test]
async fn malformed_event_multiplier_is_skipped() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;

    let baseline = h
        .service
        .fight(&easy_goblin_request("alice", 42))
        .await
        .unwrap();

    let now = Utc::now();
    h.events
        .set_events(vec![ScheduledEvent::new(
            RpgEvent {
                code: "broken".into(),
                name: "Broken".into(),
                effect: EventEffect {
                    atk_multiplier: 0.0,
                    ..EventEffect::default()
                },
            },
            now - Duration::hours(1),
            now + Duration::hours(1),
        )])
        .await;
    let report = h
        .service
        .fight(&easy_goblin_request("alice", 42))
        .await
        .unwrap();

    // A zeroed multiplier is treated as absent, not applied
    assert_eq!(report.hero.attack, baseline.hero.attack);
    assert_eq!(report.result, baseline.result);
}

#[tokio::test]
async fn failing_event_store_degrades_to_no_modifiers() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;
    h.events.set_failing(true).await;

    let report = h
        .service
        .fight(&easy_goblin_request("alice", 42))
        .await
        .unwrap();
    assert_eq!(report.result.outcome, Outcome::Won);
}

#[tokio::test]
async fn explicit_seed_makes_fights_replayable() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;

    let a = h
        .service
        .fight(&easy_goblin_request("alice", 1234))
        .await
        .unwrap();
    let b = h
        .service
        .fight(&easy_goblin_request("alice", 1234))
        .await
        .unwrap();

    assert_eq!(a.enemy, b.enemy);
    assert_eq!(a.result, b.result);
    assert_eq!(a.rewards.items, b.rewards.items);
}

#[tokio::test]
async fn loot_rows_feed_xp_and_level_up_event() {
    let h = harness();
    h.heroes.insert(HeroRecord {
        player_id: "carol".into(),
        level: 1,
        attributes: AttributeSource::Direct(BaseAttributes::new(20, 15, 18, 10, 12)),
    })
    .await;
    // 150 XP beats the level-1 threshold of 100
    h.loot
        .set_table(
            "goblin",
            vec![LootTableRow {
                item: None,
                weight: 1,
                min_xp: 150,
                max_xp: 150,
            }],
        )
        .await;
    let mut progression_rx = h.service.bus().subscribe(Topic::Progression);

    let report = h
        .service
        .fight(&easy_goblin_request("carol", 5))
        .await
        .unwrap();

    assert_eq!(report.result.outcome, Outcome::Won);
    assert_eq!(report.rewards.xp, 150);
    let event = progression_rx.try_recv().expect("level up published");
    match event {
        Event::LevelUp(level_up) => {
            assert_eq!(level_up.player_id, "carol");
            assert_eq!(level_up.new_level, 2);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn dropped_items_reach_inventory_and_loot_topic() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;
    // Heavy single-item pool: always drops
    h.loot
        .set_table(
            "goblin",
            vec![LootTableRow {
                item: Some(LootItem {
                    item_id: "rusty_sword".into(),
                    rarity: Rarity::Common,
                }),
                weight: 100,
                min_xp: 0,
                max_xp: 0,
            }],
        )
        .await;
    let mut loot_rx = h.service.bus().subscribe(Topic::Loot);

    let report = h
        .service
        .fight(&easy_goblin_request("alice", 9))
        .await
        .unwrap();

    assert_eq!(report.rewards.items.len(), 1);
    assert_eq!(report.rewards.items[0].item_id, "rusty_sword");
    let granted = h.inventory.granted("alice").await;
    assert_eq!(granted, report.rewards.items);

    match loot_rx.try_recv().expect("loot event published") {
        Event::LootDropped(dropped) => assert_eq!(dropped.items, report.rewards.items),
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test]
async fn concurrent_fights_for_one_player_never_lose_updates() {
    let h = harness();
    h.heroes.insert(strong_hero("alice")).await;

    let mut handles = Vec::new();
    for seed in 0..8u64 {
        let service = Arc::clone(&h.service);
        handles.push(tokio::spawn(async move {
            service
                .fight(&easy_goblin_request("alice", seed))
                .await
                .unwrap()
        }));
    }

    let mut expected_xp = 0;
    let mut expected_gold = 0;
    for handle in handles {
        let report = handle.await.unwrap();
        assert_eq!(report.result.outcome, Outcome::Won);
        expected_xp += report.rewards.xp;
        expected_gold += report.rewards.gold;
    }

    // Level-ups consume XP from the running total
    let level_cost: i64 = (10..h.final_level("alice").await).map(|l| l as i64 * 100).sum();
    assert_eq!(h.heroes.xp("alice").await + level_cost, expected_xp);
    assert_eq!(h.heroes.gold("alice").await, expected_gold);
}

impl Harness {
    async fn final_level(&self, player_id: &str) -> u32 {
        use arena_runtime::HeroStore;
        self.heroes
            .hero(player_id)
            .await
            .unwrap()
            .map(|h| h.level)
            .unwrap_or(0)
    }
}
