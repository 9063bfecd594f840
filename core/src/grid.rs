use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// A mine that the presentation layer should show once the game is over.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExposedMine {
    pub position: Position,
    pub flagged: bool,
}

/// Authoritative board state for one game.
///
/// The counters are kept in step with the cells by the engine operations and are never written
/// from outside the crate.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Grid {
    pub(crate) cells: Array2<Cell>,
    pub(crate) rows: Coord,
    pub(crate) columns: Coord,
    pub(crate) mine_count: CellCount,
    pub(crate) remaining_safe_cells: CellCount,
    pub(crate) flag_count: CellCount,
    pub(crate) triggered_mine: Option<Position>,
}

impl Grid {
    /// Builds a grid from already derived cells, every cell starting hidden.
    pub(crate) fn from_cells(cells: Array2<Cell>) -> Self {
        let (rows, columns) = cells.dim();
        let mine_count = cells.iter().filter(|cell| cell.has_mine()).count() as CellCount;
        let total = cells.len() as CellCount;
        Self {
            cells,
            rows: rows as Coord,
            columns: columns as Coord,
            mine_count,
            remaining_safe_cells: total - mine_count,
            flag_count: 0,
            triggered_mine: None,
        }
    }

    /// Grid with mines at exactly the given positions, duplicates counted once.
    pub fn from_mine_positions(rows: Coord, columns: Coord, mines: &[Position]) -> Result<Self> {
        GameConfig::new(rows, columns, 0)?;

        let mut mine_mask: Array2<bool> =
            Array2::default([usize::from(rows), usize::from(columns)]);
        for &position in mines {
            if !position.is_within(rows, columns) {
                return Err(GameError::OutOfBounds(position));
            }
            mine_mask[position.to_nd_index()] = true;
        }

        let grid = Self::from_cells(crate::generator::derive_cells(&mine_mask));
        GameConfig::new(rows, columns, grid.mine_count)?;
        Ok(grid)
    }

    pub fn rows(&self) -> Coord {
        self.rows
    }

    pub fn columns(&self) -> Coord {
        self.columns
    }

    pub fn config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.rows, self.columns, self.mine_count)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Safe cells that are still hidden; the game is won when this reaches 0.
    pub fn remaining_safe_cells(&self) -> CellCount {
        self.remaining_safe_cells
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flag_count)
    }

    /// First mine revealed in this game, if any.
    pub fn triggered_mine(&self) -> Option<Position> {
        self.triggered_mine
    }

    pub fn validate(&self, position: Position) -> Result<Position> {
        if position.is_within(self.rows, self.columns) {
            Ok(position)
        } else {
            Err(GameError::OutOfBounds(position))
        }
    }

    pub fn cell_at(&self, position: Position) -> Result<Cell> {
        let position = self.validate(position)?;
        Ok(self.cells[position.to_nd_index()])
    }

    pub fn tile_at(&self, position: Position) -> Result<Tile> {
        self.cell_at(position).map(Cell::tile)
    }

    pub fn neighbors(&self, position: Position) -> NeighborIter {
        neighbors_of(position, self.rows, self.columns)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let columns = self.columns;
        (0..self.cells.len()).map(move |index| Position::from_linear(index, columns))
    }

    /// Every mine on the board with its flag state, for display after the game ends.
    pub fn exposed_mines(&self) -> Vec<ExposedMine> {
        self.positions()
            .filter_map(|position| {
                let cell = self.cells[position.to_nd_index()];
                cell.has_mine().then_some(ExposedMine {
                    position,
                    flagged: cell.is_flagged(),
                })
            })
            .collect()
    }

    /// Flags placed on cells without a mine.
    pub fn wrong_flags(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| {
                let cell = self.cells[position.to_nd_index()];
                cell.is_flagged() && !cell.has_mine()
            })
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (index, cell) in row.iter().enumerate() {
                if index > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", cell.tile().symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
