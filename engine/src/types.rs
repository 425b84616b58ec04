use std::fmt;

use crate::util::{bit, coord_to_square, square_to_coord};

pub type Bitboard = u64;

/// Highest file/rank index on the board.
pub const BOARD_MAX: i8 = 7;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub(crate) fn from_char(ch: char) -> Option<Color> {
        match ch {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }

    pub(crate) fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
}

/// Alive/dead flag carried by a placed piece. Pieces on the board are always
/// alive; the dead state exists for callers that keep captured material.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum State {
    Alive,
    Dead,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Symbol used by the setup grid and by notation. Pawns are `p`, every
    /// other kind is its uppercase letter.
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_symbol(ch: char) -> Result<PieceKind, EngineError> {
        match ch {
            'p' | 'P' => Ok(PieceKind::Pawn),
            'N' => Ok(PieceKind::Knight),
            'B' => Ok(PieceKind::Bishop),
            'R' => Ok(PieceKind::Rook),
            'Q' => Ok(PieceKind::Queen),
            'K' => Ok(PieceKind::King),
            _ => Err(EngineError::UnknownPieceKind(ch)),
        }
    }

    /// Material value. Informational only, move logic never reads it.
    pub fn value(self) -> u32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 100,
        }
    }

    pub(crate) fn fen_symbol(self, color: Color) -> char {
        let sym = self.symbol().to_ascii_lowercase();
        match color {
            Color::White => sym.to_ascii_uppercase(),
            Color::Black => sym,
        }
    }
}

/// A piece standing on a square. The movement table is shared per kind and
/// looked up from the catalog, so a placed piece only carries what varies.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub state: State,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            kind,
            color,
            state: State::Alive,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    pub fn new(file: u8, rank: u8) -> Option<Square> {
        if file > BOARD_MAX as u8 || rank > BOARD_MAX as u8 {
            return None;
        }
        Some(Square { file, rank })
    }

    pub fn from_name(name: &str) -> Result<Square, EngineError> {
        coord_to_square(name).ok_or_else(|| EngineError::SquareNameInvalid(name.to_string()))
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn file_letter(self) -> char {
        (b'a' + self.file) as char
    }

    pub fn name(self) -> String {
        square_to_coord(self)
    }

    pub(crate) fn index(self) -> u8 {
        self.rank * 8 + self.file
    }

    pub(crate) fn from_index(idx: u8) -> Square {
        Square {
            file: idx % 8,
            rank: idx / 8,
        }
    }

    /// Destination of `offset` from this square, or `None` when it leaves
    /// the board.
    pub fn offset(self, offset: Offset) -> Option<Square> {
        let file = i16::from(self.file) + i16::from(offset.dx);
        let rank = i16::from(self.rank) + i16::from(offset.dy);
        let max = i16::from(BOARD_MAX);
        if !(0..=max).contains(&file) || !(0..=max).contains(&rank) {
            return None;
        }
        Some(Square {
            file: file as u8,
            rank: rank as u8,
        })
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::str::FromStr for Square {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Square::from_name(s)
    }
}

/// Relative displacement applied to a square.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Offset {
    pub dx: i8,
    pub dy: i8,
}

impl Offset {
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// Chebyshev length: the step count along a ray.
    pub fn magnitude(self) -> u8 {
        self.dx.unsigned_abs().max(self.dy.unsigned_abs())
    }
}

/// Set of squares backed by a bitboard.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SquareSet(Bitboard);

impl SquareSet {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, square: Square) {
        self.0 |= bit(square.index());
    }

    pub fn contains(&self, square: Square) -> bool {
        self.0 & bit(square.index()) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(self, other: SquareSet) -> SquareSet {
        SquareSet(self.0 | other.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = Square> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let idx = bits.trailing_zeros() as u8;
            bits &= bits - 1;
            Some(Square::from_index(idx))
        })
    }

    /// Sorted square names, handy for display and assertions.
    pub fn names(&self) -> Vec<String> {
        let mut out: Vec<String> = self.iter().map(Square::name).collect();
        out.sort();
        out
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::new();
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

/// A move string resolved to concrete squares.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MoveInstruction {
    pub notation: String,
    pub origin: Square,
    pub destination: Square,
    pub capture: bool,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum EngineError {
    UnknownPieceKind(char),
    NoMatchingPiece(String),
    NoPieceCanReach(Square),
    AmbiguousMove {
        notation: String,
        origins: Vec<Square>,
    },
    MalformedMoveString(String),
    SquareNameInvalid(String),
    InvalidSetup(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UnknownPieceKind(ch) => write!(f, "unknown piece kind '{ch}'"),
            EngineError::NoMatchingPiece(sym) => write!(f, "no matching pieces found for: {sym}"),
            EngineError::NoPieceCanReach(sq) => write!(f, "no pieces could go to: {sq}"),
            EngineError::AmbiguousMove { notation, origins } => {
                let names: Vec<String> = origins.iter().map(|sq| sq.name()).collect();
                write!(
                    f,
                    "ambiguous move {notation}: found {} origins ({})",
                    origins.len(),
                    names.join(", ")
                )
            }
            EngineError::MalformedMoveString(msg) => write!(f, "malformed move string: {msg}"),
            EngineError::SquareNameInvalid(name) => write!(f, "invalid square: {name}"),
            EngineError::InvalidSetup(msg) => write!(f, "invalid board setup: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
