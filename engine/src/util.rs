use crate::types::{Bitboard, Square};

pub(crate) fn bit(index: u8) -> Bitboard {
    1u64 << index
}

pub(crate) fn coord_to_square(coord: &str) -> Option<Square> {
    if coord.len() != 2 {
        return None;
    }
    let mut chars = coord.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return None;
    }
    Square::new(file as u8 - b'a', rank as u8 - b'1')
}

pub(crate) fn square_to_coord(square: Square) -> String {
    let mut out = String::new();
    out.push(square.file_letter());
    out.push((b'1' + square.rank()) as char);
    out
}

pub(crate) fn is_file_letter(ch: char) -> bool {
    ('a'..='h').contains(&ch)
}
