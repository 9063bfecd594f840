use minefield_core::{CellCount, Coord, GameConfig, Position};
use serde::{Deserialize, Serialize};

/// Inbound request from the input layer, each one maps to a single engine operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    NewGame {
        rows: Coord,
        columns: Coord,
        mines: CellCount,
    },
    Reveal {
        position: Position,
    },
    ChordReveal {
        position: Position,
    },
    ToggleFlag {
        position: Position,
    },
}

impl Command {
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        serde_json::from_str(line)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<GameConfig> for Command {
    fn from(config: GameConfig) -> Self {
        Self::NewGame {
            rows: config.rows(),
            columns: config.columns(),
            mines: config.mines(),
        }
    }
}
