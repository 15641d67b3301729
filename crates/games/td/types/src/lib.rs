//! Canonical serializable types for the tower-defense simulation.
//!
//! Everything a presentation layer needs to draw a frame or populate a panel
//! comes through [`TdObservation`]; the sim never hands out references into
//! its own state.

use serde::{Deserialize, Serialize};

/// A grid cell position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

/// Information about one enemy on the field.
///
/// `x`/`y` are the interpolated position, so they sit between cells while
/// the enemy walks a path segment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnemyInfo {
    pub x: f32,
    pub y: f32,
    /// Cell the enemy currently occupies (its waypoint).
    pub cell: Position,
    pub hp: i32,
    pub kind: String,
}

/// Information about one placed tower.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TowerInfo {
    pub id: String,
    pub x: u16,
    pub y: u16,
    pub kind: String,
    /// Cost of the cheapest upgrade available from this tier, if any.
    pub upgrade_cost: Option<u32>,
}

/// A live attack beam, drawn from tower cell to enemy cell until it expires.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VisualInfo {
    pub from: Position,
    pub to: Position,
    pub expires_tick: u64,
}

/// Where the wave machinery currently is.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WaveStatus {
    /// No wave active; the next one starts when the field is clear.
    Idle,
    /// Releasing enemies from the current wave's queue.
    Spawning {
        /// Enemies still waiting to be released.
        remaining: u16,
        /// Tick when the next enemy is released.
        next_release_tick: u64,
    },
    /// All enemies released; waiting for the field to clear.
    Draining,
}

impl Default for WaveStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// Full game state snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TdObservation {
    pub tick: u64,
    pub ticks_per_second: u32,

    pub rows: u16,
    pub cols: u16,
    /// Row-major occupancy: `true` where the cell carries the enemy route.
    pub path_cells: Vec<bool>,
    /// The route in walk order; first entry is the spawn, last is the exit.
    pub path: Vec<Position>,

    pub gold: u32,
    pub lives: u32,
    pub wave: u32,
    pub mode: String,
    pub game_over: bool,

    pub wave_status: WaveStatus,

    pub enemies: Vec<EnemyInfo>,
    pub towers: Vec<TowerInfo>,
    pub visuals: Vec<VisualInfo>,
}
