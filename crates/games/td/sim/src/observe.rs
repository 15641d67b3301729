use crate::world::{CellState, SpawnPhase, TdState, TowerId};
use sim_core::Tick;
use slotmap::Key;
use td_types::{EnemyInfo, Position, TdObservation, TowerInfo, VisualInfo, WaveStatus};

pub fn tower_id_to_string(id: TowerId) -> String {
    id.data().as_ffi().to_string()
}

pub fn build_observation(state: &TdState, tick: Tick) -> TdObservation {
    let config = &state.config;

    let wave_status = match &state.phase {
        SpawnPhase::Idle => WaveStatus::Idle,
        SpawnPhase::Spawning {
            queue,
            next_release_tick,
        } => WaveStatus::Spawning {
            remaining: queue.len() as u16,
            next_release_tick: *next_release_tick,
        },
        SpawnPhase::Draining => WaveStatus::Draining,
    };

    TdObservation {
        tick,
        ticks_per_second: config.tick_hz,

        rows: config.rows,
        cols: config.cols,
        path_cells: state
            .world
            .grid
            .cells()
            .iter()
            .map(|cell| matches!(cell, CellState::Path))
            .collect(),
        path: state
            .world
            .path
            .iter()
            .map(|&(x, y)| Position { x, y })
            .collect(),

        gold: state.gold,
        lives: state.lives,
        wave: state.wave,
        mode: state.mode.name().to_string(),
        game_over: state.game_over,

        wave_status,

        enemies: state
            .world
            .spawn_order
            .iter()
            .map(|&id| {
                let enemy = &state.world.enemies[id];
                let (x, y) = enemy.position(&state.world.path);
                let cell = enemy.cell(&state.world.path);
                EnemyInfo {
                    x,
                    y,
                    cell: Position {
                        x: cell.0,
                        y: cell.1,
                    },
                    hp: enemy.hp,
                    kind: enemy.kind.name().to_string(),
                }
            })
            .collect(),
        towers: state
            .world
            .placement_order
            .iter()
            .map(|&id| {
                let tower = &state.world.towers[id];
                let upgrade_cost = tower
                    .kind
                    .upgrades()
                    .iter()
                    .map(|&to| config.spec(to).cost)
                    .min();
                TowerInfo {
                    id: tower_id_to_string(id),
                    x: tower.x,
                    y: tower.y,
                    kind: tower.kind.name().to_string(),
                    upgrade_cost,
                }
            })
            .collect(),
        visuals: state
            .world
            .visuals
            .iter()
            .map(|v| VisualInfo {
                from: Position {
                    x: v.from.0,
                    y: v.from.1,
                },
                to: Position {
                    x: v.to.0,
                    y: v.to.1,
                },
                expires_tick: v.expires_tick,
            })
            .collect(),
    }
}
