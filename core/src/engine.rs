use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::*;

/// A safe cell that became visible, with the number it shows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealedCell {
    pub position: Position,
    pub adjacent_mine_count: u8,
}

/// Outcome of revealing a single cell
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    /// Cell was already revealed
    NoOp,
    /// Cell is flagged and must be unflagged first
    Blocked,
    /// Cell held a mine, the game is lost
    MineHit(Position),
    /// Safe numbered cell
    Revealed(RevealedCell),
    /// Safe zero cell, with the clicked cell first followed by every cell the flood fill opened
    CascadeRevealed(Vec<RevealedCell>),
}

impl RevealOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(&self) -> bool {
        use RevealOutcome::*;
        match self {
            NoOp => false,
            Blocked => false,
            MineHit(_) => true,
            Revealed(_) => true,
            CascadeRevealed(_) => true,
        }
    }

    pub const fn is_mine_hit(&self) -> bool {
        matches!(self, Self::MineHit(_))
    }

    /// Safe cells opened by this reveal.
    pub fn revealed_cells(&self) -> &[RevealedCell] {
        match self {
            Self::Revealed(cell) => core::slice::from_ref(cell),
            Self::CascadeRevealed(cells) => cells,
            _ => &[],
        }
    }
}

/// Everything a satisfied chord opened, across all neighbors and their cascades.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordResult {
    pub revealed: Vec<RevealedCell>,
    pub mines_hit: Vec<Position>,
}

impl ChordResult {
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty() && self.mines_hit.is_empty()
    }
}

/// Used to merge the per-neighbor outcomes of a chord
impl Extend<RevealOutcome> for ChordResult {
    fn extend<I: IntoIterator<Item = RevealOutcome>>(&mut self, outcomes: I) {
        for outcome in outcomes {
            match outcome {
                RevealOutcome::NoOp | RevealOutcome::Blocked => {}
                RevealOutcome::MineHit(position) => self.mines_hit.push(position),
                RevealOutcome::Revealed(cell) => self.revealed.push(cell),
                RevealOutcome::CascadeRevealed(cells) => self.revealed.extend(cells),
            }
        }
    }
}

/// Outcome of a chord reveal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChordOutcome {
    /// Flagged neighbors do not match the cell's number, nothing was touched
    Unsatisfied,
    /// Every opened neighbor was safe
    Revealed(ChordResult),
    /// At least one opened neighbor held a mine; the safe reveals are kept
    MineHit(ChordResult),
}

impl ChordOutcome {
    pub fn has_update(&self) -> bool {
        self.result().is_some_and(|result| !result.is_empty())
    }

    pub const fn is_mine_hit(&self) -> bool {
        matches!(self, Self::MineHit(_))
    }

    pub const fn result(&self) -> Option<&ChordResult> {
        match self {
            Self::Unsatisfied => None,
            Self::Revealed(result) | Self::MineHit(result) => Some(result),
        }
    }
}

/// New flag state of a toggled cell
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagOutcome {
    Flagged,
    Unflagged,
}

impl FlagOutcome {
    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Grid {
    /// Reveal one cell, flooding outwards when it has no adjacent mines.
    pub fn reveal(&mut self, position: Position) -> Result<RevealOutcome> {
        let position = self.validate(position)?;
        self.check_not_finished()?;

        Ok(self.reveal_cell(position))
    }

    /// Reveal every hidden, unflagged neighbor of a revealed cell whose number matches its flagged
    /// neighbors.
    ///
    /// Flags are trusted as placed: a wrong flag leaves a mine hidden and sends a reveal onto a
    /// safe-looking cell that may hold one. Reveals made before a mine is found are kept.
    pub fn chord_reveal(&mut self, position: Position) -> Result<ChordOutcome> {
        let position = self.validate(position)?;
        self.check_not_finished()?;

        let cell = self.cells[position.to_nd_index()];
        if !cell.is_revealed() {
            return Err(GameError::InvalidState(position));
        }

        let flagged_neighbors = self.count_flagged_neighbors(position);
        if flagged_neighbors != cell.adjacent_mine_count() {
            log::trace!(
                "Chord at {} unsatisfied: {} flags around a {}",
                position,
                flagged_neighbors,
                cell.adjacent_mine_count()
            );
            return Ok(ChordOutcome::Unsatisfied);
        }

        let mut result = ChordResult::default();
        let neighbors = self.neighbors(position);
        result.extend(neighbors.map(|neighbor| self.reveal_cell(neighbor)));
        log::debug!(
            "Chord at {} revealed {} cells, hit {} mines",
            position,
            result.revealed.len(),
            result.mines_hit.len()
        );

        Ok(if result.mines_hit.is_empty() {
            ChordOutcome::Revealed(result)
        } else {
            ChordOutcome::MineHit(result)
        })
    }

    /// Flag or unflag a hidden cell.
    pub fn toggle_flag(&mut self, position: Position) -> Result<FlagOutcome> {
        let position = self.validate(position)?;
        self.check_not_finished()?;

        let cell = &mut self.cells[position.to_nd_index()];
        if cell.is_revealed() {
            return Err(GameError::InvalidState(position));
        }

        let flagged = !cell.is_flagged();
        cell.set_flagged(flagged);
        Ok(if flagged {
            self.flag_count += 1;
            FlagOutcome::Flagged
        } else {
            self.flag_count -= 1;
            FlagOutcome::Unflagged
        })
    }

    /// Single-cell reveal shared by plain reveals and chords, does not check game state.
    fn reveal_cell(&mut self, position: Position) -> RevealOutcome {
        let cell = self.cells[position.to_nd_index()];
        if cell.is_revealed() {
            return RevealOutcome::NoOp;
        }
        if cell.is_flagged() {
            return RevealOutcome::Blocked;
        }

        self.cells[position.to_nd_index()].mark_revealed();

        if cell.has_mine() {
            self.triggered_mine.get_or_insert(position);
            log::debug!("Mine hit at {}", position);
            return RevealOutcome::MineHit(position);
        }

        self.remaining_safe_cells -= 1;
        let revealed = RevealedCell {
            position,
            adjacent_mine_count: cell.adjacent_mine_count(),
        };
        log::debug!(
            "Revealed cell at {}, mine count: {}",
            position,
            revealed.adjacent_mine_count
        );

        let outcome = if revealed.adjacent_mine_count == 0 {
            let mut cascade = alloc::vec![revealed];
            self.flood_fill(position, &mut cascade);
            RevealOutcome::CascadeRevealed(cascade)
        } else {
            RevealOutcome::Revealed(revealed)
        };

        if self.remaining_safe_cells == 0 && self.triggered_mine.is_none() {
            log::debug!("All safe cells revealed");
        }
        outcome
    }

    /// Opens the connected region around a zero cell that has just been revealed.
    ///
    /// Every position enters `visited` once, so each cell is opened at most once and the walk ends
    /// whatever the shape of the region.
    fn flood_fill(&mut self, origin: Position, revealed: &mut Vec<RevealedCell>) {
        let mut visited: HashSet<Position> = HashSet::from([origin]);
        let mut to_visit: VecDeque<Position> = self.neighbors(origin).collect();
        log::trace!(
            "Starting flood-fill from {}, initial neighbors: {:?}",
            origin,
            to_visit
        );

        while let Some(visit_position) = to_visit.pop_front() {
            if !visited.insert(visit_position) {
                continue;
            }

            // skip flagged or already revealed cells
            let cell = self.cells[visit_position.to_nd_index()];
            if !cell.is_open_to_reveal() || cell.has_mine() {
                log::trace!("Skipping cell at {}", visit_position);
                continue;
            }

            self.cells[visit_position.to_nd_index()].mark_revealed();
            self.remaining_safe_cells -= 1;
            revealed.push(RevealedCell {
                position: visit_position,
                adjacent_mine_count: cell.adjacent_mine_count(),
            });
            log::trace!(
                "Flood revealed cell at {}, mine count: {}",
                visit_position,
                cell.adjacent_mine_count()
            );

            // if this is also zero we visit the neighbors
            if cell.adjacent_mine_count() == 0 {
                to_visit.extend(
                    self.neighbors(visit_position)
                        .filter(|neighbor| !visited.contains(neighbor)),
                );
            }
        }
    }

    fn count_flagged_neighbors(&self, position: Position) -> u8 {
        self.neighbors(position)
            .filter(|&neighbor| self.cells[neighbor.to_nd_index()].is_flagged())
            .count() as u8
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status().is_terminal() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
