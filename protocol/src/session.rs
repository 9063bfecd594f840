use minefield_core::{GameConfig, GameError, Grid, MinefieldGenerator, Position, RandomGenerator};
use thiserror::Error;

use crate::event::{chord_events, reveal_events};
use crate::{Command, Event};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No game has been started")]
    NoGame,
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Malformed command: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, SessionError>;

/// Owns the grid of the current game and turns commands into events.
///
/// Starting a new game drops the previous grid entirely.
#[derive(Clone, Debug, Default)]
pub struct Session {
    grid: Option<Grid>,
    seed: Option<u64>,
    games_started: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every game in this session is reproducible from `seed` and the order games were started.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Continue from an existing grid, e.g. a hand-built layout.
    pub fn with_grid(grid: Grid) -> Self {
        Self {
            grid: Some(grid),
            ..Self::default()
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn apply_json(&mut self, line: &str) -> Result<Vec<Event>> {
        let command = Command::from_json(line)?;
        self.apply(command)
    }

    /// Apply one command, returning the events for it with the game status last.
    ///
    /// Moves that change nothing (revealing an open cell, a flagged cell, or an unsatisfied chord)
    /// still succeed and only report the status.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Event>> {
        log::debug!("Applying {:?}", command);
        let result = self.dispatch(command);
        if let Err(err) = &result {
            log::warn!("Rejected {:?}: {}", command, err);
        }
        result
    }

    pub fn new_game(&mut self, config: GameConfig) -> Vec<Event> {
        let generator = self.next_generator();
        let grid = generator.generate(config);
        self.games_started += 1;
        log::debug!(
            "Game {} started: {}x{} with {} mines",
            self.games_started,
            config.rows(),
            config.columns(),
            config.mines()
        );

        let events = vec![Event::started(config), Event::status(&grid)];
        self.grid = Some(grid);
        events
    }

    /// Convenience for callers that only hold raw coordinates.
    pub fn reveal(&mut self, position: impl Into<Position>) -> Result<Vec<Event>> {
        self.apply(Command::Reveal {
            position: position.into(),
        })
    }

    fn dispatch(&mut self, command: Command) -> Result<Vec<Event>> {
        match command {
            Command::NewGame {
                rows,
                columns,
                mines,
            } => {
                let config = GameConfig::new(rows, columns, mines)?;
                Ok(self.new_game(config))
            }
            Command::Reveal { position } => self.play(|grid| {
                let outcome = grid.reveal(position)?;
                let hit_mine = outcome.is_mine_hit();
                Ok((reveal_events(outcome), hit_mine))
            }),
            Command::ChordReveal { position } => self.play(|grid| {
                let outcome = grid.chord_reveal(position)?;
                let hit_mine = outcome.is_mine_hit();
                Ok((chord_events(outcome), hit_mine))
            }),
            Command::ToggleFlag { position } => self.play(|grid| {
                let outcome = grid.toggle_flag(position)?;
                Ok((vec![Event::flag_toggled(grid, position, outcome)], false))
            }),
        }
    }

    /// Runs a move against the current grid; the move reports its events and whether it hit a mine.
    fn play<F>(&mut self, make_move: F) -> Result<Vec<Event>>
    where
        F: FnOnce(&mut Grid) -> minefield_core::Result<(Vec<Event>, bool)>,
    {
        let grid = self.grid.as_mut().ok_or(SessionError::NoGame)?;
        let (events, hit_mine) = make_move(grid)?;
        Ok(close_events(grid, events, hit_mine))
    }

    fn next_generator(&self) -> RandomGenerator {
        match self.seed {
            Some(seed) => RandomGenerator::new(seed.wrapping_add(self.games_started)),
            None => RandomGenerator::unseeded(),
        }
    }
}

/// Appends the loss exposure, if this move lost the game, and the status.
fn close_events(grid: &Grid, mut events: Vec<Event>, hit_mine: bool) -> Vec<Event> {
    if hit_mine {
        events.push(Event::exposed(grid));
    }
    let status = Event::status(grid);
    if grid.status().is_terminal() {
        log::debug!("Game over: {:?}", grid.status());
    }
    events.push(status);
    events
}
