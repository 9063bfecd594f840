#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use status::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod grid;
mod status;
mod types;

/// Validated board configuration: `rows x columns` with `mines` placed on it.
///
/// Both sides must be at least 1 and at least one cell must stay safe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GameConfig {
    rows: Coord,
    columns: Coord,
    mines: CellCount,
}

impl GameConfig {
    const fn new_unchecked(rows: Coord, columns: Coord, mines: CellCount) -> Self {
        Self {
            rows,
            columns,
            mines,
        }
    }

    pub fn new(rows: Coord, columns: Coord, mines: CellCount) -> Result<Self> {
        if rows < 1 || columns < 1 || mines >= mult(rows, columns) {
            return Err(GameError::InvalidDimensions {
                rows,
                columns,
                mines,
            });
        }
        Ok(Self::new_unchecked(rows, columns, mines))
    }

    pub const fn beginner() -> Self {
        Self::new_unchecked(9, 9, 10)
    }

    pub const fn intermediate() -> Self {
        Self::new_unchecked(16, 16, 40)
    }

    pub const fn expert() -> Self {
        Self::new_unchecked(16, 30, 99)
    }

    pub const fn rows(&self) -> Coord {
        self.rows
    }

    pub const fn columns(&self) -> Coord {
        self.columns
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// The conventional board presets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::beginner(),
            Self::Intermediate => GameConfig::intermediate(),
            Self::Expert => GameConfig::expert(),
        }
    }
}

impl From<Difficulty> for GameConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_or_full_boards() {
        assert!(matches!(
            GameConfig::new(0, 5, 0),
            Err(GameError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            GameConfig::new(5, 0, 0),
            Err(GameError::InvalidDimensions { .. })
        ));
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(GameError::InvalidDimensions {
                rows: 3,
                columns: 3,
                mines: 9
            })
        );
    }

    #[test]
    fn accepts_boundary_configs() {
        let config = GameConfig::new(3, 3, 8).unwrap();
        assert_eq!(config.safe_cells(), 1);

        let config = GameConfig::new(1, 1, 0).unwrap();
        assert_eq!(config.total_cells(), 1);
    }

    #[test]
    fn presets_are_valid() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Expert,
        ] {
            let preset = difficulty.config();
            let checked = GameConfig::new(preset.rows(), preset.columns(), preset.mines());
            assert_eq!(checked, Ok(preset));
        }
        assert_eq!(GameConfig::expert().total_cells(), 480);
    }
}
