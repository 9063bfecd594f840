use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minefield_core::{CellCount, Coord, Difficulty, GameConfig};
use minefield_protocol::{Event, Session};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => Difficulty::Beginner,
            Preset::Intermediate => Difficulty::Intermediate,
            Preset::Expert => Difficulty::Expert,
        }
    }
}

/// Plays minefield over line-delimited JSON: commands on stdin, events on stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Board preset for the first game
    #[arg(short, long, value_enum, default_value_t = Preset::Beginner)]
    difficulty: Preset,

    /// Custom board height, replaces the preset
    #[arg(long, requires_all = ["columns", "mines"])]
    rows: Option<Coord>,

    /// Custom board width, replaces the preset
    #[arg(long, requires_all = ["rows", "mines"])]
    columns: Option<Coord>,

    /// Custom mine count, replaces the preset
    #[arg(long, requires_all = ["rows", "columns"])]
    mines: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the board to stderr after every command
    #[arg(short, long)]
    board: bool,
}

impl Args {
    fn config(&self) -> Result<GameConfig> {
        match (self.rows, self.columns, self.mines) {
            (Some(rows), Some(columns), Some(mines)) => GameConfig::new(rows, columns, mines)
                .context("Invalid board configuration"),
            _ => Ok(Difficulty::from(self.difficulty).config()),
        }
    }
}

fn emit(out: &mut impl Write, events: &[Event]) -> Result<()> {
    for event in events {
        writeln!(out, "{}", event.to_json()?)?;
    }
    out.flush()?;
    Ok(())
}

fn show_board(session: &Session) {
    if let Some(grid) = session.grid() {
        eprintln!("{grid}");
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("seed: {:?}", args.seed);

    let config = args.config()?;
    let mut session = match args.seed {
        Some(seed) => Session::with_seed(seed),
        None => Session::new(),
    };

    let mut out = io::stdout().lock();
    emit(&mut out, &session.new_game(config))?;
    if args.board {
        show_board(&session);
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read command")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match session.apply_json(line) {
            Ok(events) => emit(&mut out, &events)?,
            Err(err) => eprintln!("error: {err}"),
        }
        if args.board {
            show_board(&session);
        }
    }

    log::debug!("Input closed");
    Ok(())
}
