//! Squares a piece can actually reach given the current occupancy.

use log::trace;

use crate::board::Board;
use crate::catalog::{is_castling_shape, shapes, shapes_for};
use crate::classify::{OffsetKind, Ray, Vertical, classify, pseudo_legal};
use crate::types::{Color, EngineError, Offset, Piece, PieceKind, Square, SquareSet};

/// Which rays a sliding evaluation looks at.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Lines {
    Diagonal,
    Orthogonal,
}

impl Lines {
    fn admits(self, ray: Ray) -> bool {
        match self {
            Lines::Diagonal => ray.is_diagonal(),
            Lines::Orthogonal => !ray.is_diagonal(),
        }
    }
}

impl Board {
    /// Offsets of the occupant of `square` that stay on the board. Empty
    /// squares have none.
    pub fn legal_offsets(&self, square: Square) -> Vec<Offset> {
        pseudo_legal(shapes_for(self.piece_at(square)), square)
    }

    /// Squares the occupant of `square` may move to. An empty square yields
    /// an empty set.
    pub fn reachable_squares(&self, square: Square) -> SquareSet {
        let Some(piece) = self.piece_at(square) else {
            return SquareSet::new();
        };
        let squares = match piece.kind {
            PieceKind::Pawn => self.pawn_squares(square, piece),
            PieceKind::Knight => self.knight_squares(square, piece),
            PieceKind::Bishop => self.slide(square, piece, Lines::Diagonal),
            PieceKind::Rook => self.slide(square, piece, Lines::Orthogonal),
            PieceKind::Queen | PieceKind::King => self.queen_squares(square, piece),
        };
        trace!("{:?} on {square} reaches {:?}", piece.kind, squares.names());
        squares
    }

    /// Reachable squares for the piece named by `symbol` as if it stood on
    /// `square` with the color of whatever is there (white if empty).
    pub fn reachable_squares_as(
        &self,
        symbol: char,
        square: Square,
    ) -> Result<SquareSet, EngineError> {
        let kind = PieceKind::from_symbol(symbol)?;
        let color = self.piece_at(square).map_or(Color::White, |p| p.color);
        let mut probe = self.clone();
        probe.set(square, Some(Piece::new(color, kind)));
        Ok(probe.reachable_squares(square))
    }

    fn pawn_squares(&self, square: Square, piece: Piece) -> SquareSet {
        let forward = match piece.color {
            Color::White => Vertical::Up,
            Color::Black => Vertical::Down,
        };
        let mut out = SquareSet::new();
        for offset in pseudo_legal(shapes(piece.kind, piece.color), square) {
            let class = classify(offset);
            if class.vertical != forward {
                continue;
            }
            let Some(dest) = square.offset(offset) else {
                continue;
            };
            match class.kind {
                OffsetKind::Vertical if self.is_empty(dest) => out.insert(dest),
                OffsetKind::Diagonal if self.holds_enemy(dest, piece.color) => out.insert(dest),
                _ => {}
            }
        }
        out
    }

    fn knight_squares(&self, square: Square, piece: Piece) -> SquareSet {
        pseudo_legal(shapes(piece.kind, piece.color), square)
            .into_iter()
            .filter_map(|offset| square.offset(offset))
            .filter(|dest| !self.holds_friend(*dest, piece.color))
            .collect()
    }

    fn queen_squares(&self, square: Square, piece: Piece) -> SquareSet {
        self.slide(square, piece, Lines::Diagonal)
            .union(self.slide(square, piece, Lines::Orthogonal))
    }

    /// Per ray, quiet moves run up to the first occupied square; that square
    /// is a capture only when it holds an enemy.
    fn slide(&self, square: Square, piece: Piece, lines: Lines) -> SquareSet {
        let offsets = pseudo_legal(shapes(piece.kind, piece.color), square);
        let candidates: Vec<(Ray, u8, Square)> = offsets
            .into_iter()
            .filter(|offset| !is_castling_shape(piece.kind, *offset))
            .filter_map(|offset| {
                let ray = classify(offset).ray()?;
                let dest = square.offset(offset)?;
                lines.admits(ray).then_some((ray, offset.magnitude(), dest))
            })
            .collect();

        let mut nearest_blocker = [u8::MAX; 8];
        for (ray, distance, dest) in &candidates {
            if !self.is_empty(*dest) {
                let slot = &mut nearest_blocker[ray.idx()];
                *slot = (*slot).min(*distance);
            }
        }

        let mut out = SquareSet::new();
        for (ray, distance, dest) in candidates {
            let blocker = nearest_blocker[ray.idx()];
            let capture = distance == blocker && self.holds_enemy(dest, piece.color);
            if distance < blocker || capture {
                out.insert(dest);
            }
        }
        out
    }

    fn holds_enemy(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color != color)
    }

    fn holds_friend(&self, square: Square, color: Color) -> bool {
        self.piece_at(square).is_some_and(|p| p.color == color)
    }
}
