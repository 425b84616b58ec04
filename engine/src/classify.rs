//! Bounds checks and geometric classification of offsets.

use crate::types::{Offset, Square};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum OffsetKind {
    Diagonal,
    Horizontal,
    Vertical,
    Unrecognized,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Horizontal {
    Right,
    Left,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Vertical {
    Up,
    Down,
}

/// One of the eight sliding directions.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Ray {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Ray {
    pub(crate) fn idx(self) -> usize {
        self as usize
    }

    pub fn is_diagonal(self) -> bool {
        matches!(
            self,
            Ray::NorthEast | Ray::SouthEast | Ray::SouthWest | Ray::NorthWest
        )
    }
}

/// Shape of an offset plus its two direction flags. For pure vertical
/// offsets the horizontal flag is `Right` and carries no meaning; likewise
/// the vertical flag is `Up` for pure horizontal ones.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    pub kind: OffsetKind,
    pub horizontal: Horizontal,
    pub vertical: Vertical,
}

impl Classification {
    /// The sliding ray this offset lies on, if any.
    pub fn ray(&self) -> Option<Ray> {
        let ray = match (self.kind, self.horizontal, self.vertical) {
            (OffsetKind::Diagonal, Horizontal::Right, Vertical::Up) => Ray::NorthEast,
            (OffsetKind::Diagonal, Horizontal::Right, Vertical::Down) => Ray::SouthEast,
            (OffsetKind::Diagonal, Horizontal::Left, Vertical::Down) => Ray::SouthWest,
            (OffsetKind::Diagonal, Horizontal::Left, Vertical::Up) => Ray::NorthWest,
            (OffsetKind::Vertical, _, Vertical::Up) => Ray::North,
            (OffsetKind::Vertical, _, Vertical::Down) => Ray::South,
            (OffsetKind::Horizontal, Horizontal::Right, _) => Ray::East,
            (OffsetKind::Horizontal, Horizontal::Left, _) => Ray::West,
            (OffsetKind::Unrecognized, _, _) => return None,
        };
        Some(ray)
    }
}

/// Whether `origin + offset` stays on the board.
pub fn in_bounds(offset: Offset, origin: Square) -> bool {
    origin.offset(offset).is_some()
}

/// Drops the offsets of `shapes` that would leave the board from `origin`.
pub fn pseudo_legal(shapes: &[Offset], origin: Square) -> Vec<Offset> {
    shapes
        .iter()
        .copied()
        .filter(|offset| in_bounds(*offset, origin))
        .collect()
}

pub fn classify(offset: Offset) -> Classification {
    // widened so negating i8::MIN stays in range
    let (dx, dy) = (i16::from(offset.dx), i16::from(offset.dy));
    let (kind, horizontal, vertical) = if dx == dy && dx > 0 {
        (OffsetKind::Diagonal, Horizontal::Right, Vertical::Up)
    } else if dx == -dy && dx > 0 {
        (OffsetKind::Diagonal, Horizontal::Right, Vertical::Down)
    } else if dx == dy && dx < 0 {
        (OffsetKind::Diagonal, Horizontal::Left, Vertical::Down)
    } else if dx == -dy && dx < 0 {
        (OffsetKind::Diagonal, Horizontal::Left, Vertical::Up)
    } else if dx == 0 && dy > 0 {
        (OffsetKind::Vertical, Horizontal::Right, Vertical::Up)
    } else if dx == 0 && dy < 0 {
        (OffsetKind::Vertical, Horizontal::Right, Vertical::Down)
    } else if dy == 0 && dx > 0 {
        (OffsetKind::Horizontal, Horizontal::Right, Vertical::Up)
    } else if dy == 0 && dx < 0 {
        (OffsetKind::Horizontal, Horizontal::Left, Vertical::Up)
    } else {
        (OffsetKind::Unrecognized, Horizontal::Right, Vertical::Up)
    };
    Classification {
        kind,
        horizontal,
        vertical,
    }
}
