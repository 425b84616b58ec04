mod board;
mod catalog;
mod classify;
mod movegen;
mod notation;
mod types;
mod util;

pub use crate::board::Board;
pub use crate::catalog::{EMPTY, shapes, shapes_for};
pub use crate::classify::{
    Classification, Horizontal, OffsetKind, Ray, Vertical, classify, in_bounds, pseudo_legal,
};
pub use crate::notation::Notation;
pub use crate::types::{
    BOARD_MAX, Bitboard, Color, EngineError, MoveInstruction, Offset, Piece, PieceKind, Square,
    SquareSet, State,
};
