//! Headless match driver.
//!
//! Runs a full tower-defense match without a renderer: lays down a starter
//! defense, then either free-runs the simulation or paces it in real time
//! through the host's elapsed-time clock. Useful for balance runs and for
//! eyeballing the event stream.

use clap::Parser;
use sim_core::{ActionEnvelope, Micros};
use sim_host::MatchHost;
use sim_td::{TdAction, TdConfig, TdEvent, TdGame, TowerKind};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "headless_runner")]
#[command(about = "Run a tower-defense match without a renderer")]
struct Args {
    /// Match seed; same seed and script replay identically
    #[arg(long, default_value = "12345")]
    seed: u64,

    /// Maximum ticks to run in fast mode
    #[arg(long, default_value = "6000")]
    max_ticks: u64,

    /// Pace the simulation against the wall clock instead of free-running
    #[arg(long, short)]
    realtime: bool,

    /// Print the final observation as JSON
    #[arg(long)]
    snapshot: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = TdConfig::default();
    let tick_hz = config.tick_hz;
    let tower_cost = config.basic.cost;
    let gold_start = config.gold_start;

    let mut host = MatchHost::<TdGame>::new(config, args.seed, tick_hz);
    let player = host.join_player();

    // Starter defense: basic towers on the first buildable row, as many as
    // the starting gold affords.
    let sites = [(1u16, 1u16), (5, 1), (9, 1), (13, 1), (17, 1)];
    let mut budget = gold_start;
    let mut action_id = 0;
    for &(x, y) in sites.iter() {
        if budget < tower_cost {
            break;
        }
        budget -= tower_cost;
        action_id += 1;
        host.submit(ActionEnvelope {
            player_id: player,
            action_id,
            intended_tick: 1,
            payload: TdAction::PlaceTower {
                x,
                y,
                kind: TowerKind::Basic,
            },
        });
    }
    println!("Scheduled {} tower placements", action_id);

    let events = if args.realtime {
        run_realtime(&mut host)
    } else {
        run_fast(&mut host, args.max_ticks)
    };

    println!("\n=== Match Complete ===");
    println!("Outcome: {:?}", host.is_terminal());
    println!("Final tick: {}", host.current_tick());

    let obs = host.observe(player);
    println!("Wave: {}", obs.wave);
    println!("Lives: {}", obs.lives);
    println!("Gold: {}", obs.gold);
    println!("Enemies on field: {}", obs.enemies.len());
    println!("Towers standing: {}", obs.towers.len());

    print_event_summary(&events);

    if args.snapshot {
        match serde_json::to_string_pretty(&obs) {
            Ok(json) => println!("\n{json}"),
            Err(err) => tracing::error!("failed to serialize observation: {err}"),
        }
    }
}

fn run_fast(host: &mut MatchHost<TdGame>, max_ticks: u64) -> Vec<TdEvent> {
    host.run_for_ticks(max_ticks).events
}

fn run_realtime(host: &mut MatchHost<TdGame>) -> Vec<TdEvent> {
    let mut all_events = Vec::new();
    let mut last = Instant::now();
    let mut last_status = Instant::now();

    println!("=== Running in real time, Ctrl+C to stop ===");
    loop {
        std::thread::sleep(Duration::from_millis(20));

        let now = Instant::now();
        let elapsed_us = now.duration_since(last).as_micros().min(u32::MAX as u128);
        last = now;

        let events = host.advance(Micros::from_micros(elapsed_us as u32));
        for event in &events {
            print_event(host.current_tick(), event);
        }
        all_events.extend(events);

        if host.is_terminal().is_some() {
            break;
        }

        if last_status.elapsed() >= Duration::from_secs(5) {
            print_status(host);
            last_status = Instant::now();
        }
    }

    all_events
}

fn print_event(tick: u64, event: &TdEvent) {
    match event {
        TdEvent::WaveStarted { wave, size } => {
            println!("[{tick:>6}] === Wave {wave} started ({size} enemies) ===")
        }
        TdEvent::WaveCleared { wave } => println!("[{tick:>6}] === Wave {wave} cleared ==="),
        TdEvent::EnemyKilled { gold, .. } => println!("[{tick:>6}] Enemy killed (+{gold} gold)"),
        TdEvent::EnemyReachedExit { .. } => println!("[{tick:>6}] Enemy reached the exit!"),
        TdEvent::TowerPlaced { x, y, kind, .. } => {
            println!("[{tick:>6}] {} tower placed at ({x}, {y})", kind.name())
        }
        TdEvent::TowerSold { x, y, refund, .. } => {
            println!("[{tick:>6}] Tower at ({x}, {y}) sold for {refund}")
        }
        TdEvent::TowerUpgraded { x, y, to, .. } => {
            println!("[{tick:>6}] Tower at ({x}, {y}) upgraded to {}", to.name())
        }
        TdEvent::PlacementRejected { x, y, reason, .. } => {
            println!("[{tick:>6}] Placement at ({x}, {y}) rejected: {reason}")
        }
        TdEvent::SellRejected { x, y, reason } => {
            println!("[{tick:>6}] Sale at ({x}, {y}) rejected: {reason}")
        }
        TdEvent::UpgradeRejected { x, y, reason, .. } => {
            println!("[{tick:>6}] Upgrade at ({x}, {y}) rejected: {reason}")
        }
        TdEvent::GameOver { wave } => println!("[{tick:>6}] GAME OVER on wave {wave}"),
        TdEvent::EnemySpawned { .. }
        | TdEvent::ModeChanged { .. }
        | TdEvent::IncomeGranted { .. } => {}
    }
}

fn print_status(host: &MatchHost<TdGame>) {
    let obs = host.observe(0);
    let secs = host.current_tick() as f64 / host.tick_hz() as f64;
    println!(
        "  [{secs:>6.1}s] Wave {}, Enemies: {}, Towers: {}, Gold: {}, Lives: {}",
        obs.wave,
        obs.enemies.len(),
        obs.towers.len(),
        obs.gold,
        obs.lives,
    );
}

fn print_event_summary(events: &[TdEvent]) {
    let mut waves_started = 0;
    let mut waves_cleared = 0;
    let mut spawned = 0;
    let mut killed = 0;
    let mut leaked = 0;
    let mut towers_placed = 0;
    let mut towers_sold = 0;
    let mut towers_upgraded = 0;
    let mut rejections = 0;

    for event in events {
        match event {
            TdEvent::WaveStarted { .. } => waves_started += 1,
            TdEvent::WaveCleared { .. } => waves_cleared += 1,
            TdEvent::EnemySpawned { .. } => spawned += 1,
            TdEvent::EnemyKilled { .. } => killed += 1,
            TdEvent::EnemyReachedExit { .. } => leaked += 1,
            TdEvent::TowerPlaced { .. } => towers_placed += 1,
            TdEvent::TowerSold { .. } => towers_sold += 1,
            TdEvent::TowerUpgraded { .. } => towers_upgraded += 1,
            TdEvent::PlacementRejected { .. }
            | TdEvent::SellRejected { .. }
            | TdEvent::UpgradeRejected { .. } => rejections += 1,
            TdEvent::ModeChanged { .. } | TdEvent::IncomeGranted { .. } | TdEvent::GameOver { .. } => {}
        }
    }

    println!("\n=== Event Summary ===");
    println!("Waves started: {waves_started}");
    println!("Waves cleared: {waves_cleared}");
    println!("Enemies spawned: {spawned}");
    println!("Enemies killed: {killed}");
    println!("Enemies leaked: {leaked}");
    println!("Towers placed: {towers_placed}");
    println!("Towers sold: {towers_sold}");
    println!("Towers upgraded: {towers_upgraded}");
    println!("Commands rejected: {rejections}");
}
