//! Movement shapes per piece kind, ignoring occupancy and board edges.

use crate::types::{BOARD_MAX, Color, Offset, Piece, PieceKind};

const RAY_LEN: usize = BOARD_MAX as usize;

const DIAGONAL_DIRS: [(i8, i8); 4] = [(1, 1), (-1, 1), (-1, -1), (1, -1)];
const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

const fn rays(dirs: [(i8, i8); 4]) -> [Offset; 4 * RAY_LEN] {
    let mut out = [Offset::new(0, 0); 4 * RAY_LEN];
    let mut d = 0;
    while d < 4 {
        let mut n = 1;
        while n <= RAY_LEN {
            out[d * RAY_LEN + n - 1] = Offset::new(dirs[d].0 * n as i8, dirs[d].1 * n as i8);
            n += 1;
        }
        d += 1;
    }
    out
}

const fn concat(a: [Offset; 4 * RAY_LEN], b: [Offset; 4 * RAY_LEN]) -> [Offset; 8 * RAY_LEN] {
    let mut out = [Offset::new(0, 0); 8 * RAY_LEN];
    let mut i = 0;
    while i < 4 * RAY_LEN {
        out[i] = a[i];
        out[4 * RAY_LEN + i] = b[i];
        i += 1;
    }
    out
}

// Pawn shapes are written in the mover's forward frame; black mirrors them.
const PAWN_WHITE: [Offset; 3] = [Offset::new(0, 1), Offset::new(-1, 1), Offset::new(1, 1)];
const PAWN_BLACK: [Offset; 3] = [
    Offset::new(0, -1),
    Offset::new(-1, -1),
    Offset::new(1, -1),
];

const KNIGHT: [Offset; 8] = [
    Offset::new(-1, 2),
    Offset::new(1, 2),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(-2, 1),
    Offset::new(-2, -1),
    Offset::new(2, 1),
    Offset::new(2, -1),
];

const BISHOP: [Offset; 4 * RAY_LEN] = rays(DIAGONAL_DIRS);
const ROOK: [Offset; 4 * RAY_LEN] = rays(ORTHO_DIRS);
const QUEEN: [Offset; 8 * RAY_LEN] = concat(BISHOP, ROOK);

const KING: [Offset; 10] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
    // castling shapes, never validated here
    Offset::new(-2, 0),
    Offset::new(2, 0),
];

/// Offsets for the empty square: it never moves.
pub const EMPTY: &[Offset] = &[];

/// Raw shape table of `kind`, oriented for `color`.
pub fn shapes(kind: PieceKind, color: Color) -> &'static [Offset] {
    match kind {
        PieceKind::Pawn => match color {
            Color::White => &PAWN_WHITE,
            Color::Black => &PAWN_BLACK,
        },
        PieceKind::Knight => &KNIGHT,
        PieceKind::Bishop => &BISHOP,
        PieceKind::Rook => &ROOK,
        PieceKind::Queen => &QUEEN,
        PieceKind::King => &KING,
    }
}

/// Shape table of whatever occupies a square; empty squares get [`EMPTY`].
pub fn shapes_for(occupant: Option<Piece>) -> &'static [Offset] {
    match occupant {
        Some(piece) => shapes(piece.kind, piece.color),
        None => EMPTY,
    }
}

pub(crate) fn is_castling_shape(kind: PieceKind, offset: Offset) -> bool {
    kind == PieceKind::King && offset.dy == 0 && offset.dx.unsigned_abs() == 2
}
