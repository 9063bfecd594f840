use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Classifies the grid from its bookkeeping alone. A revealed mine always means `Lost`.
pub fn status(grid: &Grid) -> GameStatus {
    if grid.triggered_mine.is_some() {
        GameStatus::Lost
    } else if grid.remaining_safe_cells == 0 {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}

impl Grid {
    pub fn status(&self) -> GameStatus {
        status(self)
    }
}
