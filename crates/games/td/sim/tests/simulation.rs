use sim_core::{ActionEnvelope, PlayerId, TerminalOutcome};
use sim_host::MatchHost;
use sim_td::{TdAction, TdConfig, TdEvent, TdGame, TowerKind};

const SEED: u64 = 12345;

fn place(player_id: PlayerId, action_id: u64, tick: u64, x: u16, y: u16, kind: TowerKind) -> ActionEnvelope<TdAction> {
    ActionEnvelope {
        player_id,
        action_id,
        intended_tick: tick,
        payload: TdAction::PlaceTower { x, y, kind },
    }
}

#[test]
fn undefended_run_ends_in_game_over() {
    let mut host = MatchHost::<TdGame>::new(TdConfig::default(), SEED, 10);

    let result = host.run_for_ticks(5000);
    assert_eq!(result.outcome, Some(TerminalOutcome::Lose));
    assert!(result
        .events
        .iter()
        .any(|e| matches!(e, TdEvent::GameOver { .. })));

    let obs = host.observe(0);
    assert!(obs.game_over);
    assert_eq!(obs.lives, 0);

    // terminal: the host refuses to step and the tick freezes
    let frozen = host.current_tick();
    assert!(host.step_one_tick().is_none());
    assert_eq!(host.current_tick(), frozen);
}

#[test]
fn first_wave_is_ten_runts_released_one_per_second() {
    let mut host = MatchHost::<TdGame>::new(TdConfig::default(), SEED, 10);

    let result = host.run_for_ticks(95);
    let started: Vec<_> = result
        .events
        .iter()
        .filter(|e| matches!(e, TdEvent::WaveStarted { .. }))
        .collect();
    assert_eq!(started.len(), 1);
    assert!(matches!(started[0], TdEvent::WaveStarted { wave: 1, size: 10 }));

    let spawns = result
        .events
        .iter()
        .filter(|e| matches!(e, TdEvent::EnemySpawned { .. }))
        .count();
    // releases at ticks 1, 11, ..., 91; the queue has just drained
    assert_eq!(spawns, 10);
    assert!(matches!(
        host.game().state().phase,
        sim_td::world::SpawnPhase::Draining
    ));
    let obs = host.observe(0);
    assert!(obs.enemies.iter().all(|e| e.kind == "Runt"));
}

#[test]
fn enemy_count_grows_only_by_spawns() {
    let mut host = MatchHost::<TdGame>::new(TdConfig::default(), SEED, 10);

    let mut previous = 0usize;
    for _ in 0..1500 {
        let Some(events) = host.step_one_tick() else {
            break;
        };
        let spawned = events
            .iter()
            .filter(|e| matches!(e, TdEvent::EnemySpawned { .. }))
            .count();
        let current = host.observe(0).enemies.len();
        assert!(
            current <= previous + spawned,
            "enemy count jumped from {previous} to {current} with {spawned} spawns"
        );
        previous = current;
    }
}

#[test]
fn sniper_near_spawn_earns_kill_gold() {
    let mut host = MatchHost::<TdGame>::new(
        TdConfig {
            gold_start: 200,
            ..TdConfig::default()
        },
        SEED,
        10,
    );
    let player = host.join_player();
    host.submit(place(player, 1, 1, 0, 1, TowerKind::Sniper));

    let result = host.run_for_ticks(1000);
    let kill_gold: u32 = result
        .events
        .iter()
        .filter_map(|e| match e {
            TdEvent::EnemyKilled { gold, .. } => Some(*gold),
            _ => None,
        })
        .sum();
    assert!(kill_gold > 0, "sniper never killed anything");

    let obs = host.observe(0);
    assert_eq!(obs.towers.len(), 1);
    assert_eq!(obs.towers[0].kind, "Sniper");
}

#[test]
fn gold_ledger_balances_over_a_scripted_run() {
    let config = TdConfig::default();
    let mut host = MatchHost::<TdGame>::new(config.clone(), SEED, 10);
    let player = host.join_player();

    host.submit(place(player, 1, 1, 0, 1, TowerKind::Basic));
    host.submit(place(player, 2, 2, 2, 1, TowerKind::Dot));
    host.submit(ActionEnvelope {
        player_id: player,
        action_id: 3,
        intended_tick: 500,
        payload: TdAction::SellTower { x: 0, y: 1 },
    });
    host.submit(ActionEnvelope {
        player_id: player,
        action_id: 4,
        intended_tick: 1500,
        payload: TdAction::UpgradeTower {
            x: 2,
            y: 1,
            to: TowerKind::PermanentDot,
        },
    });

    let result = host.run_for_ticks(2000);

    let mut expected = config.gold_start as i64;
    for event in &result.events {
        match event {
            TdEvent::TowerPlaced { kind, .. } => expected -= config.spec(*kind).cost as i64,
            TdEvent::TowerUpgraded { to, .. } => expected -= config.spec(*to).cost as i64,
            TdEvent::TowerSold { refund, .. } => expected += *refund as i64,
            TdEvent::EnemyKilled { gold, .. } => expected += *gold as i64,
            TdEvent::IncomeGranted { amount } => expected += *amount as i64,
            _ => {}
        }
    }

    let obs = host.observe(0);
    assert_eq!(obs.gold as i64, expected);
    assert!(expected >= 0);
}

#[test]
fn same_seed_and_script_replays_identically() {
    let run = || {
        let mut host = MatchHost::<TdGame>::new(TdConfig::default(), SEED, 10);
        let player = host.join_player();
        host.submit(place(player, 1, 1, 0, 1, TowerKind::Basic));
        host.submit(place(player, 2, 30, 2, 1, TowerKind::Dot));
        host.submit(ActionEnvelope {
            player_id: player,
            action_id: 3,
            intended_tick: 700,
            payload: TdAction::UpgradeTower {
                x: 0,
                y: 1,
                to: TowerKind::Auto,
            },
        });
        let result = host.run_for_ticks(2500);
        (result.events, host.observe(0).gold, host.observe(0).lives)
    };

    let (events_a, gold_a, lives_a) = run();
    let (events_b, gold_b, lives_b) = run();
    assert_eq!(events_a, events_b);
    assert_eq!(gold_a, gold_b);
    assert_eq!(lives_a, lives_b);
}

#[test]
fn rejected_commands_change_nothing() {
    let mut host = MatchHost::<TdGame>::new(
        TdConfig {
            gold_start: 24,
            ..TdConfig::default()
        },
        SEED,
        10,
    );
    let player = host.join_player();

    // short by one gold
    host.submit(place(player, 1, 1, 0, 1, TowerKind::Basic));
    // on the route
    host.submit(place(player, 2, 1, 0, 0, TowerKind::Basic));
    // nothing to sell or upgrade there
    host.submit(ActionEnvelope {
        player_id: player,
        action_id: 3,
        intended_tick: 1,
        payload: TdAction::SellTower { x: 4, y: 1 },
    });

    let events = host.step_one_tick().expect("first tick");
    let rejections = events
        .iter()
        .filter(|e| {
            matches!(
                e,
                TdEvent::PlacementRejected { .. } | TdEvent::SellRejected { .. }
            )
        })
        .count();
    assert_eq!(rejections, 3);

    let obs = host.observe(0);
    assert_eq!(obs.gold, 24);
    assert!(obs.towers.is_empty());
}

#[test]
fn mode_select_is_echoed_in_the_observation() {
    let mut host = MatchHost::<TdGame>::new(TdConfig::default(), SEED, 10);
    let player = host.join_player();
    host.submit(ActionEnvelope {
        player_id: player,
        action_id: 1,
        intended_tick: 1,
        payload: TdAction::SetMode {
            mode: sim_td::PlayMode::Sell,
        },
    });

    let events = host.step_one_tick().expect("first tick");
    assert!(events
        .iter()
        .any(|e| matches!(e, TdEvent::ModeChanged { .. })));
    assert_eq!(host.observe(0).mode, "Sell");
}
