use minefield_core::{
    CellCount, ChordOutcome, Coord, ExposedMine, FlagOutcome, GameConfig, GameStatus, Grid,
    Position, RevealOutcome, RevealedCell,
};
use serde::{Deserialize, Serialize};

/// Outbound notification for the rendering layer, which only reflects these and never touches the
/// grid itself.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    GameStarted {
        rows: Coord,
        columns: Coord,
        mines: CellCount,
    },
    CellRevealed {
        position: Position,
        adjacent_mine_count: u8,
    },
    CellsCascadeRevealed {
        cells: Vec<RevealedCell>,
    },
    MineHit {
        position: Position,
    },
    FlagToggled {
        position: Position,
        flagged: bool,
        mines_left: i64,
    },
    /// Sent once when a game is lost so every mine and misplaced flag can be drawn
    MinesExposed {
        mines: Vec<ExposedMine>,
        wrong_flags: Vec<Position>,
    },
    GameStatus {
        status: GameStatus,
    },
}

impl Event {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    pub(crate) fn started(config: GameConfig) -> Self {
        Self::GameStarted {
            rows: config.rows(),
            columns: config.columns(),
            mines: config.mines(),
        }
    }

    pub(crate) fn status(grid: &Grid) -> Self {
        Self::GameStatus {
            status: grid.status(),
        }
    }

    pub(crate) fn exposed(grid: &Grid) -> Self {
        Self::MinesExposed {
            mines: grid.exposed_mines(),
            wrong_flags: grid.wrong_flags(),
        }
    }

    pub(crate) fn flag_toggled(grid: &Grid, position: Position, outcome: FlagOutcome) -> Self {
        Self::FlagToggled {
            position,
            flagged: outcome.is_flagged(),
            mines_left: grid.mines_left(),
        }
    }
}

impl From<RevealedCell> for Event {
    fn from(cell: RevealedCell) -> Self {
        Self::CellRevealed {
            position: cell.position,
            adjacent_mine_count: cell.adjacent_mine_count,
        }
    }
}

/// Events describing a single reveal, empty when nothing changed.
pub(crate) fn reveal_events(outcome: RevealOutcome) -> Vec<Event> {
    match outcome {
        RevealOutcome::NoOp | RevealOutcome::Blocked => Vec::new(),
        RevealOutcome::MineHit(position) => vec![Event::MineHit { position }],
        RevealOutcome::Revealed(cell) => vec![cell.into()],
        RevealOutcome::CascadeRevealed(cells) => vec![Event::CellsCascadeRevealed { cells }],
    }
}

/// Events describing a chord: all safe cells as one batch, then each mine that went off.
pub(crate) fn chord_events(outcome: ChordOutcome) -> Vec<Event> {
    let result = match outcome {
        ChordOutcome::Unsatisfied => return Vec::new(),
        ChordOutcome::Revealed(result) | ChordOutcome::MineHit(result) => result,
    };

    let mut events = Vec::with_capacity(result.mines_hit.len() + 1);
    if !result.revealed.is_empty() {
        events.push(Event::CellsCascadeRevealed {
            cells: result.revealed,
        });
    }
    events.extend(
        result
            .mines_hit
            .into_iter()
            .map(|position| Event::MineHit { position }),
    );
    events
}
