use core::fmt;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u16;

/// Count type used for mine counts, flag counts, and total-cell counts.
pub type CellCount = u32;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// Address of one cell on the grid, `row` first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub column: Coord,
}

impl Position {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }

    /// Whether this position lies inside a `rows x columns` board.
    pub const fn is_within(self, rows: Coord, columns: Coord) -> bool {
        self.row < rows && self.column < columns
    }

    /// Row-major index into a `columns`-wide board.
    #[cfg(test)]
    pub(crate) const fn to_linear(self, columns: Coord) -> usize {
        self.row as usize * columns as usize + self.column as usize
    }

    pub(crate) const fn from_linear(index: usize, columns: Coord) -> Self {
        let columns = columns as usize;
        Self {
            row: (index / columns) as Coord,
            column: (index % columns) as Coord,
        }
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, column): (Coord, Coord)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.column.into()]
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `position`, returning a value only when it remains in bounds.
fn apply_delta(position: Position, delta: (isize, isize), bounds: (Coord, Coord)) -> Option<Position> {
    let (dr, dc) = delta;
    let (rows, columns) = bounds;

    let row = position.row.checked_add_signed(dr.try_into().ok()?)?;
    if row >= rows {
        return None;
    }

    let column = position.column.checked_add_signed(dc.try_into().ok()?)?;
    if column >= columns {
        return None;
    }

    Some(Position::new(row, column))
}

/// Iterator over the in-bounds neighbors of a cell, without wraparound.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Position,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    fn new(center: Position, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DISPLACEMENTS.len() - usize::from(self.index)))
    }
}

/// The up-to-8 orthogonal and diagonal neighbors of `position` on a `rows x columns` board.
///
/// Corner cells have 3 neighbors, edge cells 5, and each position appears at most once.
pub fn neighbors_of(position: Position, rows: Coord, columns: Coord) -> NeighborIter {
    NeighborIter::new(position, (rows, columns))
}
