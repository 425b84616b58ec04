use std::fmt;

use crate::types::{Color, EngineError, Piece, PieceKind, Square, SquareSet};

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Occupancy of every square plus the side to play. A square holds either a
/// piece or nothing; there is no unset state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    now_playing: Color,
}

impl Board {
    pub fn empty(now_playing: Color) -> Self {
        Self {
            squares: [None; 64],
            now_playing,
        }
    }

    pub fn starting_position() -> Self {
        let mut board = Board::empty(Color::White);
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            for (rank, color, kind) in [
                (0, Color::White, *kind),
                (1, Color::White, PieceKind::Pawn),
                (6, Color::Black, PieceKind::Pawn),
                (7, Color::Black, *kind),
            ] {
                board.squares[(rank * 8 + file) as usize] = Some(Piece::new(color, kind));
            }
        }
        board
    }

    /// Builds a board from eight lines of eight comma-separated
    /// `<color><symbol>` cells, rank 8 first. `__` marks an empty square.
    pub fn from_grid(grid: &str) -> Result<Self, EngineError> {
        let rows: Vec<&str> = grid
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(EngineError::InvalidSetup(format!(
                "grid must have 8 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::empty(Color::White);
        for (row_idx, row) in rows.iter().enumerate() {
            let cells: Vec<&str> = row.split(',').map(str::trim).collect();
            if cells.len() != 8 {
                return Err(EngineError::InvalidSetup(format!(
                    "row {} must have 8 cells, found {}",
                    row_idx + 1,
                    cells.len()
                )));
            }
            let rank = 7 - row_idx as u8;
            for (file, cell) in cells.iter().enumerate() {
                let square = Square::from_index(rank * 8 + file as u8);
                board.set(square, parse_cell(cell)?);
            }
        }
        Ok(board)
    }

    /// Reads piece placement and, if present, side to move. Castling, en
    /// passant and clock fields are accepted but not modeled.
    pub fn from_fen(fen: &str) -> Result<Self, EngineError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() || parts.len() > 6 {
            return Err(EngineError::InvalidSetup(
                "FEN must have between 1 and 6 space-separated fields".into(),
            ));
        }

        let mut board = Board::empty(Color::White);
        let mut rank = 7i32;
        let mut file = 0i32;
        for ch in parts[0].chars() {
            match ch {
                '/' => {
                    if file != 8 {
                        return Err(EngineError::InvalidSetup(
                            "rank does not contain 8 squares".into(),
                        ));
                    }
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += ch as i32 - '0' as i32;
                    if file > 8 {
                        return Err(EngineError::InvalidSetup("too many squares in rank".into()));
                    }
                }
                '0' | '9' => {
                    return Err(EngineError::InvalidSetup(format!(
                        "rank digit '{ch}' out of range"
                    )));
                }
                _ => {
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = PieceKind::from_symbol(ch.to_ascii_uppercase())?;
                    if !(0..8).contains(&rank) || !(0..8).contains(&file) {
                        return Err(EngineError::InvalidSetup("square out of range".into()));
                    }
                    let square = Square::from_index((rank * 8 + file) as u8);
                    board.set(square, Some(Piece::new(color, kind)));
                    file += 1;
                }
            }
        }
        if rank != 0 || file != 8 {
            return Err(EngineError::InvalidSetup("invalid board layout".into()));
        }

        board.now_playing = match parts.get(1) {
            None | Some(&"w") => Color::White,
            Some(&"b") => Color::Black,
            Some(_) => return Err(EngineError::InvalidSetup("invalid side to move".into())),
        };
        Ok(board)
    }

    /// Placement and side-to-move fields of FEN.
    pub fn to_fen(&self) -> String {
        let mut rows = Vec::new();
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                if let Some(piece) = self.squares[(rank * 8 + file) as usize] {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.kind.fen_symbol(piece.color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        let stm = self.now_playing.to_char();
        format!("{} {stm}", rows.join("/"))
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index() as usize]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    pub fn set(&mut self, square: Square, occupant: Option<Piece>) {
        self.squares[square.index() as usize] = occupant;
    }

    pub fn now_playing(&self) -> Color {
        self.now_playing
    }

    pub fn set_now_playing(&mut self, color: Color) {
        self.now_playing = color;
    }

    pub fn occupancy(&self) -> SquareSet {
        self.pieces().map(|(sq, _)| sq).collect()
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }
}

fn parse_cell(cell: &str) -> Result<Option<Piece>, EngineError> {
    let mut chars = cell.chars();
    let (Some(color_ch), Some(symbol), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(EngineError::InvalidSetup(format!(
            "cell '{cell}' must be two characters"
        )));
    };
    if color_ch == '_' && symbol == '_' {
        return Ok(None);
    }
    let color = Color::from_char(color_ch)
        .ok_or_else(|| EngineError::InvalidSetup(format!("invalid color in cell '{cell}'")))?;
    let kind = PieceKind::from_symbol(symbol)?;
    Ok(Some(Piece::new(color, kind)))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let ch = match self.squares[(rank * 8 + file) as usize] {
                    Some(piece) => piece.kind.fen_symbol(piece.color),
                    None => '.',
                };
                write!(f, " {ch}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
