use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Grid;
}

/// Derives every cell from a mine mask, counting mines around each safe cell.
pub(crate) fn derive_cells(mine_mask: &Array2<bool>) -> Array2<Cell> {
    let (rows, columns) = mine_mask.dim();
    let (rows, columns) = (rows as Coord, columns as Coord);

    Array2::from_shape_fn(mine_mask.dim(), |(row, column)| {
        let position = Position::new(row as Coord, column as Coord);
        if mine_mask[position.to_nd_index()] {
            return Cell::new(true, 0);
        }
        let adjacent_mines = neighbors_of(position, rows, columns)
            .filter(|&neighbor| mine_mask[neighbor.to_nd_index()])
            .count();
        Cell::new(false, adjacent_mines as u8)
    })
}

/// Validates the triple and places mines with a seeded generator.
pub fn generate(rows: Coord, columns: Coord, mines: CellCount, seed: u64) -> Result<Grid> {
    let config = GameConfig::new(rows, columns, mines)?;
    Ok(RandomGenerator::new(seed).generate(config))
}

/// Validates the triple and places mines from a fresh, non-reproducible seed.
pub fn create_grid(rows: Coord, columns: Coord, mines: CellCount) -> Result<Grid> {
    let config = GameConfig::new(rows, columns, mines)?;
    Ok(RandomGenerator::unseeded().generate(config))
}
