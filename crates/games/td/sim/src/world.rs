use crate::actions::PlayMode;
use crate::config::{EnemyKind, TdConfig, TowerKind};
use crate::effects::EffectMap;
use crate::pathing;
use crate::waves::WaveGenerator;
use sim_core::Tick;
use slotmap::{new_key_type, SlotMap};
use std::collections::VecDeque;

new_key_type! { pub struct TowerId; }
new_key_type! { pub struct EnemyId; }

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CellState {
    #[default]
    Buildable,
    /// Part of the enemy route; towers can never stand here.
    Path,
    Tower(TowerId),
}

#[derive(Clone, Debug)]
pub struct Grid {
    pub rows: u16,
    pub cols: u16,
    cells: Vec<CellState>,
}

impl Grid {
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            cells: vec![CellState::Buildable; (rows as usize) * (cols as usize)],
        }
    }

    #[inline]
    pub fn idx(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.cols as usize) + (x as usize)
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.cols && y < self.rows
    }

    #[inline]
    pub fn get(&self, x: u16, y: u16) -> CellState {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u16, y: u16, state: CellState) {
        let idx = self.idx(x, y);
        self.cells[idx] = state;
    }

    /// A cell is placable when it is in bounds and not part of the route.
    /// Occupancy by another tower is checked separately at placement time.
    pub fn is_placable(&self, x: u16, y: u16) -> bool {
        self.in_bounds(x, y) && self.get(x, y) != CellState::Path
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hp: i32,
    pub speed: f32,
    /// Gold credited when this enemy dies.
    pub gold: u32,
    /// Index of the waypoint the enemy is walking away from.
    pub path_index: usize,
    /// Fraction of the way toward the next waypoint, 0..1.
    pub progress: f32,
    pub effects: EffectMap,
}

impl Enemy {
    /// The cell the enemy occupies: its current waypoint.
    pub fn cell(&self, path: &[(u16, u16)]) -> (u16, u16) {
        path[self.path_index]
    }

    /// Interpolated position between the current and next waypoint.
    pub fn position(&self, path: &[(u16, u16)]) -> (f32, f32) {
        let from = path[self.path_index];
        match path.get(self.path_index + 1) {
            Some(&to) => pathing::lerp(from, to, self.progress),
            None => (from.0 as f32, from.1 as f32),
        }
    }

    pub fn is_at_end(&self, path: &[(u16, u16)]) -> bool {
        self.path_index + 1 >= path.len()
    }
}

#[derive(Clone, Debug)]
pub struct Tower {
    pub x: u16,
    pub y: u16,
    pub kind: TowerKind,
    /// Cooldown gate: the tower may fire once the tick reaches this value.
    pub next_fire_tick: Tick,
}

/// Ephemeral attack beam for the presentation layer; pruned on expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackVisual {
    pub from: (u16, u16),
    pub to: (u16, u16),
    pub expires_tick: Tick,
}

/// Where the spawn scheduler is within the current wave.
#[derive(Clone, Debug)]
pub enum SpawnPhase {
    /// No wave in flight; the next one starts once the field is clear.
    Idle,
    /// Releasing one enemy per spawn interval.
    Spawning {
        queue: VecDeque<EnemyKind>,
        next_release_tick: Tick,
    },
    /// Everything released; waiting for the field to clear.
    Draining,
}

#[derive(Clone, Debug)]
pub struct World {
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub towers: SlotMap<TowerId, Tower>,
    /// Enemy ids oldest-first. Target selection walks this, not the slot map,
    /// because slot reuse breaks insertion-order iteration.
    pub spawn_order: Vec<EnemyId>,
    /// Tower ids in the order they were placed; combat runs in this order.
    pub placement_order: Vec<TowerId>,
    pub grid: Grid,
    /// The route, spawn first, exit last. Consecutive cells are unit steps.
    pub path: Vec<(u16, u16)>,
    pub visuals: Vec<AttackVisual>,
}

#[derive(Clone, Debug)]
pub struct TdState {
    pub config: TdConfig,
    pub tick: Tick,
    pub world: World,

    pub gold: u32,
    pub lives: u32,
    /// Index of the wave most recently started; 0 before the first wave.
    pub wave: u32,
    pub mode: PlayMode,
    pub game_over: bool,

    pub phase: SpawnPhase,
    pub waves: WaveGenerator,
    pub next_income_tick: Tick,
}

impl TdState {
    pub fn new(config: TdConfig, seed: u64) -> Self {
        let (grid, path) = pathing::build_route(config.rows, config.cols);
        let next_income_tick = config.duration_to_ticks(config.income_interval);
        Self {
            tick: 0,
            world: World {
                enemies: SlotMap::with_key(),
                towers: SlotMap::with_key(),
                spawn_order: Vec::new(),
                placement_order: Vec::new(),
                grid,
                path,
                visuals: Vec::new(),
            },
            gold: config.gold_start,
            lives: config.lives,
            wave: 0,
            mode: PlayMode::default(),
            game_over: false,
            phase: SpawnPhase::Idle,
            waves: WaveGenerator::new(seed),
            next_income_tick,
            config,
        }
    }
}
