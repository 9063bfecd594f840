use thiserror::Error;

use crate::{CellCount, Coord, Position};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board dimensions: {rows}x{columns} with {mines} mines")]
    InvalidDimensions {
        rows: Coord,
        columns: Coord,
        mines: CellCount,
    },
    #[error("Position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("Cell at {0} does not allow this move in its current state")]
    InvalidState(Position),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
