use std::io::Write;

use anyhow::Context;
use engine::{Board, MoveInstruction};
use log::info;

use crate::events::{Event, EventHandler, EventKind};

/*
owns the board for a session: resolves move strings, applies them and
answers board queries. the engine only computes, moves are applied here.
*/

pub struct Game<W: Write> {
    board: Board,
    strict_turn: bool,
    out: W,
}

impl<W: Write> Game<W> {
    pub fn new(board: Board, strict_turn: bool, out: W) -> Self {
        Self {
            board,
            strict_turn,
            out,
        }
    }

    #[cfg(test)]
    pub fn board(&self) -> &Board {
        &self.board
    }

    fn play(&mut self, notation: &str) -> anyhow::Result<()> {
        let resolved = if self.strict_turn {
            self.board.resolve_for(self.board.now_playing(), notation)
        } else {
            self.board.resolve(notation)
        };
        match resolved {
            Ok(instruction) => {
                self.apply(&instruction);
                writeln!(
                    self.out,
                    "{}: {} -> {}",
                    instruction.notation, instruction.origin, instruction.destination
                )?;
            }
            Err(err) => writeln!(self.out, "{notation}: {err}")?,
        }
        Ok(())
    }

    fn apply(&mut self, instruction: &MoveInstruction) {
        let mover = self.board.piece_at(instruction.origin);
        if let Some(captured) = self.board.piece_at(instruction.destination) {
            info!(
                "{:?} {:?} captured on {}",
                captured.color, captured.kind, instruction.destination
            );
        }
        self.board.set(instruction.destination, mover);
        self.board.set(instruction.origin, None);
        if let Some(piece) = mover {
            self.board.set_now_playing(piece.color.opponent());
        }
    }
}

impl<W: Write> EventHandler for Game<W> {
    fn interested_in(&self) -> &'static [EventKind] {
        &[EventKind::Play, EventKind::Show, EventKind::Moves]
    }

    fn handle(&mut self, evt: &Event) -> anyhow::Result<()> {
        match evt {
            Event::Play(notation) => self.play(notation),
            Event::Show => {
                writeln!(self.out, "{}", self.board)?;
                writeln!(self.out, "{:?} to play", self.board.now_playing())?;
                Ok(())
            }
            Event::Moves(square) => {
                let squares = self.board.reachable_squares(*square);
                writeln!(self.out, "{square}: {}", squares.names().join(" "))
                    .context("writing reachable squares")
            }
            Event::Quit => Ok(()),
        }
    }
}
