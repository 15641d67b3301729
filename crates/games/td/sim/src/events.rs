use crate::actions::PlayMode;
use crate::config::{EnemyKind, TowerKind};
use crate::errors::{PlacementError, SellError, UpgradeError};
use crate::world::{EnemyId, TowerId};

/// Everything observable that happened during one step, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum TdEvent {
    WaveStarted {
        wave: u32,
        size: u16,
    },
    /// All of a wave's enemies released and the field is clear again.
    WaveCleared {
        wave: u32,
    },
    EnemySpawned {
        id: EnemyId,
        kind: EnemyKind,
    },
    EnemyKilled {
        id: EnemyId,
        gold: u32,
    },
    EnemyReachedExit {
        id: EnemyId,
    },
    TowerPlaced {
        id: TowerId,
        x: u16,
        y: u16,
        kind: TowerKind,
    },
    TowerSold {
        id: TowerId,
        x: u16,
        y: u16,
        refund: u32,
    },
    TowerUpgraded {
        id: TowerId,
        x: u16,
        y: u16,
        to: TowerKind,
    },
    PlacementRejected {
        x: u16,
        y: u16,
        kind: TowerKind,
        reason: PlacementError,
    },
    SellRejected {
        x: u16,
        y: u16,
        reason: SellError,
    },
    UpgradeRejected {
        x: u16,
        y: u16,
        to: TowerKind,
        reason: UpgradeError,
    },
    ModeChanged {
        mode: PlayMode,
    },
    IncomeGranted {
        amount: u32,
    },
    GameOver {
        wave: u32,
    },
}
