use std::fmt;

/// Why a tower placement was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    /// The cell lies outside the grid.
    OutOfBounds,
    /// The cell carries the enemy route.
    OnPath,
    /// Another tower already stands on the cell.
    Occupied,
    /// The archetype costs more gold than the player has.
    InsufficientGold,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::OutOfBounds => write!(f, "cell is outside the grid"),
            PlacementError::OnPath => write!(f, "cell is on the enemy route"),
            PlacementError::Occupied => write!(f, "cell is already occupied"),
            PlacementError::InsufficientGold => write!(f, "not enough gold"),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Why a tower upgrade was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpgradeError {
    /// No tower stands on the cell.
    NoTower,
    /// The requested archetype is not an upgrade of the current one.
    NotAnUpgrade,
    /// The tower is already at a terminal tier of its branch.
    TerminalTier,
    /// The upgrade costs more gold than the player has.
    InsufficientGold,
}

impl fmt::Display for UpgradeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeError::NoTower => write!(f, "no tower on that cell"),
            UpgradeError::NotAnUpgrade => write!(f, "not an upgrade of the current tower"),
            UpgradeError::TerminalTier => write!(f, "tower is already fully upgraded"),
            UpgradeError::InsufficientGold => write!(f, "not enough gold"),
        }
    }
}

impl std::error::Error for UpgradeError {}

/// Why a tower sale was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SellError {
    /// No tower stands on the cell.
    NoTower,
}

impl fmt::Display for SellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SellError::NoTower => write!(f, "no tower on that cell"),
        }
    }
}

impl std::error::Error for SellError {}
