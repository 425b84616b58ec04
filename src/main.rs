mod events;
mod game;

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use engine::Board;
use log::{info, warn};

use crate::events::{Event, EventBus, EventSender};
use crate::game::Game;

#[derive(Parser, Debug)]
#[command(version, about = "Resolve short algebraic moves against a board")]
struct Args {
    /// Board setup grid: 8 rows of 8 comma-separated cells like `wR` or `__`
    setup: Option<PathBuf>,

    /// Start from a FEN position instead of a grid file
    #[arg(long, conflicts_with = "setup")]
    fen: Option<String>,

    /// Play these moves and exit instead of reading stdin
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,

    /// Only consider pieces of the side to play when resolving moves
    #[arg(long)]
    strict_turn: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let board = load_board(&args)?;
    info!("starting from {}", board.to_fen());

    let mut bus = EventBus::new();
    bus.register_handler(Box::new(Game::new(board, args.strict_turn, io::stdout())));
    let sender = bus.sender();

    if args.moves.is_empty() {
        thread::spawn(move || read_events(sender));
    } else {
        for mv in args.moves {
            sender.send(Event::Play(mv))?;
        }
        sender.send(Event::Show)?;
        sender.send(Event::Quit)?;
    }

    bus.run()
}

fn load_board(args: &Args) -> Result<Board> {
    if let Some(fen) = &args.fen {
        return Board::from_fen(fen).context("parsing --fen");
    }
    match &args.setup {
        Some(path) => {
            let grid = fs::read_to_string(path)
                .with_context(|| format!("reading board setup {}", path.display()))?;
            Board::from_grid(&grid)
                .with_context(|| format!("parsing board setup {}", path.display()))
        }
        None => Ok(Board::starting_position()),
    }
}

fn read_events(sender: EventSender) {
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match Event::from_line(&line) {
            Ok(Some(event)) => {
                if sender.send(event).is_err() {
                    return;
                }
            }
            Ok(None) => {}
            Err(err) => warn!("ignoring input '{line}': {err}"),
        }
    }
    let _ = sender.send(Event::Quit);
}
