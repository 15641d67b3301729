pub mod actions;
pub mod config;
pub mod effects;
pub mod errors;
pub mod events;
pub mod game;
pub mod observe;
pub mod pathing;
pub mod systems;
pub mod waves;
pub mod world;

pub use actions::{PlayMode, TdAction};
pub use config::{EnemyKind, TdConfig, TowerKind};
pub use errors::{PlacementError, SellError, UpgradeError};
pub use events::TdEvent;
pub use game::TdGame;
pub use world::{EnemyId, TdState, TowerId};
