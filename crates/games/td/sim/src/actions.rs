use crate::config::TowerKind;

/// Interaction mode selected by the presentation layer. Pure bookkeeping for
/// the UI; the sim stores and echoes it but never branches on it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlayMode {
    #[default]
    Normal,
    Sell,
    PendingUpgrade,
}

impl PlayMode {
    pub fn name(self) -> &'static str {
        match self {
            PlayMode::Normal => "Normal",
            PlayMode::Sell => "Sell",
            PlayMode::PendingUpgrade => "PendingUpgrade",
        }
    }
}

#[derive(Clone, Debug)]
pub enum TdAction {
    PlaceTower { x: u16, y: u16, kind: TowerKind },
    SellTower { x: u16, y: u16 },
    UpgradeTower { x: u16, y: u16, to: TowerKind },
    SetMode { mode: PlayMode },
}
