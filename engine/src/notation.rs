//! Short algebraic move strings (`Nge5`, `Qxh8`, `exd5`) resolved against a
//! board.

use log::debug;

use crate::board::Board;
use crate::types::{Color, EngineError, MoveInstruction, PieceKind, Square};
use crate::util::is_file_letter;

/// Parsed pieces of a move string before any board lookup.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notation {
    pub kind: PieceKind,
    pub file_hint: Option<char>,
    pub capture: bool,
    pub destination: Square,
}

impl Notation {
    pub fn parse(text: &str) -> Result<Self, EngineError> {
        let trimmed = text.trim().trim_end_matches(['+', '#']);
        if !trimmed.is_ascii() || trimmed.len() < 2 {
            return Err(EngineError::MalformedMoveString(text.to_string()));
        }

        let (head, dest) = trimmed.split_at(trimmed.len() - 2);
        let destination = Square::from_name(dest)
            .map_err(|_| EngineError::MalformedMoveString(format!("bad destination in {text}")))?;

        let (head, capture) = match head.strip_suffix('x') {
            Some(rest) => (rest, true),
            None => (head, false),
        };

        let mut chars = head.chars();
        let (kind, hint) = match chars.next() {
            Some(ch) if ch.is_ascii_uppercase() => (PieceKind::from_symbol(ch)?, chars.next()),
            Some(ch) => (PieceKind::Pawn, Some(ch)),
            None => (PieceKind::Pawn, None),
        };
        if chars.next().is_some() {
            return Err(EngineError::MalformedMoveString(text.to_string()));
        }
        if let Some(h) = hint {
            if !is_file_letter(h) {
                return Err(EngineError::MalformedMoveString(format!(
                    "bad file hint '{h}' in {text}"
                )));
            }
        }

        Ok(Self {
            kind,
            file_hint: hint,
            capture,
            destination,
        })
    }

    fn matches(&self, square: Square) -> bool {
        self.file_hint.is_none_or(|hint| square.file_letter() == hint)
    }
}

impl Board {
    /// Resolves `notation` against pieces of either color.
    pub fn resolve(&self, notation: &str) -> Result<MoveInstruction, EngineError> {
        self.resolve_among(notation, None)
    }

    /// Resolves `notation` against the pieces of `color` only.
    pub fn resolve_for(
        &self,
        color: Color,
        notation: &str,
    ) -> Result<MoveInstruction, EngineError> {
        self.resolve_among(notation, Some(color))
    }

    fn resolve_among(
        &self,
        notation: &str,
        color: Option<Color>,
    ) -> Result<MoveInstruction, EngineError> {
        let parsed = Notation::parse(notation)?;

        let candidates: Vec<Square> = self
            .pieces()
            .filter(|(sq, piece)| {
                piece.kind == parsed.kind
                    && color.is_none_or(|c| piece.color == c)
                    && parsed.matches(*sq)
            })
            .map(|(sq, _)| sq)
            .collect();
        if candidates.is_empty() {
            let mut symbol = parsed.kind.symbol().to_string();
            if let Some(hint) = parsed.file_hint {
                symbol.push(hint);
            }
            return Err(EngineError::NoMatchingPiece(symbol));
        }
        debug!("{notation}: candidates {candidates:?}");

        let origins: Vec<Square> = candidates
            .into_iter()
            .filter(|sq| self.reachable_squares(*sq).contains(parsed.destination))
            .collect();

        match origins.as_slice() {
            [] => Err(EngineError::NoPieceCanReach(parsed.destination)),
            [origin] => {
                debug!("{notation}: {origin} -> {}", parsed.destination);
                Ok(MoveInstruction {
                    notation: notation.to_string(),
                    origin: *origin,
                    destination: parsed.destination,
                    capture: parsed.capture,
                })
            }
            _ => Err(EngineError::AmbiguousMove {
                notation: notation.to_string(),
                origins,
            }),
        }
    }
}
