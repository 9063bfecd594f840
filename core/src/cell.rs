use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Revealed,
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One grid position as stored by the engine.
///
/// Mine placement and the adjacency count are fixed when the grid is built. Reveal state only moves
/// from `Hidden` to `Revealed`, and the flag can only change while the cell is hidden.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    has_mine: bool,
    adjacent_mine_count: u8,
    reveal_state: RevealState,
    flagged: bool,
}

impl Cell {
    pub(crate) const fn new(has_mine: bool, adjacent_mine_count: u8) -> Self {
        Self {
            has_mine,
            adjacent_mine_count,
            reveal_state: RevealState::Hidden,
            flagged: false,
        }
    }

    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    /// Number of mines among the in-bounds neighbors. Always 0 for mine cells.
    pub const fn adjacent_mine_count(self) -> u8 {
        self.adjacent_mine_count
    }

    pub const fn reveal_state(self) -> RevealState {
        self.reveal_state
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self.reveal_state, RevealState::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Hidden and not flagged, the only state a reveal can act on.
    pub const fn is_open_to_reveal(self) -> bool {
        !self.is_revealed() && !self.flagged
    }

    pub(crate) fn mark_revealed(&mut self) {
        self.reveal_state = RevealState::Revealed;
    }

    pub(crate) fn set_flagged(&mut self, flagged: bool) {
        self.flagged = flagged;
    }

    /// What a player is allowed to see of this cell.
    pub const fn tile(self) -> Tile {
        match (self.reveal_state, self.has_mine) {
            (RevealState::Revealed, true) => Tile::Exploded,
            (RevealState::Revealed, false) => Tile::Open(self.adjacent_mine_count),
            (RevealState::Hidden, _) if self.flagged => Tile::Flagged,
            (RevealState::Hidden, _) => Tile::Hidden,
        }
    }
}

/// Player-visible state of a cell, never leaking hidden mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Hidden,
    Flagged,
    Open(u8),
    Exploded,
}

impl Tile {
    pub const fn symbol(self) -> char {
        match self {
            Self::Hidden => '-',
            Self::Flagged => 'F',
            Self::Open(0) => '.',
            Self::Open(count) => (b'0' + count) as char,
            Self::Exploded => 'M',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_cell_is_hidden_and_unflagged() {
        let cell = Cell::new(false, 3);

        assert_eq!(cell.reveal_state(), RevealState::Hidden);
        assert!(!cell.is_flagged());
        assert!(cell.is_open_to_reveal());
        assert_eq!(cell.tile(), Tile::Hidden);
    }

    #[test]
    fn tile_hides_mines_until_revealed() {
        let mut cell = Cell::new(true, 0);
        cell.set_flagged(true);
        assert_eq!(cell.tile(), Tile::Flagged);

        cell.set_flagged(false);
        assert_eq!(cell.tile(), Tile::Hidden);

        cell.mark_revealed();
        assert_eq!(cell.tile(), Tile::Exploded);
    }

    #[test]
    fn symbols() {
        assert_eq!(Tile::Open(0).symbol(), '.');
        assert_eq!(Tile::Open(8).symbol(), '8');
        assert_eq!(Tile::Exploded.symbol(), 'M');
    }
}
