//! Move types and move list.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleSide;
use super::piece::PieceKind;
use super::square::Square;

/// A move in the shape the notation codec reads and writes.
///
/// Castling carries no squares: they follow from the mover's color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    Normal {
        piece: PieceKind,
        from: Square,
        to: Square,
        capture: bool,
        promotion: Option<PieceKind>,
    },
    Castle(CastleSide),
}

impl Move {
    /// Create a non-promoting move
    #[inline]
    #[must_use]
    pub const fn new(piece: PieceKind, from: Square, to: Square, capture: bool) -> Self {
        Move::Normal {
            piece,
            from,
            to,
            capture,
            promotion: None,
        }
    }

    /// Create a pawn promotion
    #[inline]
    #[must_use]
    pub const fn promotion(from: Square, to: Square, capture: bool, kind: PieceKind) -> Self {
        Move::Normal {
            piece: PieceKind::Pawn,
            from,
            to,
            capture,
            promotion: Some(kind),
        }
    }

    /// Moving piece kind (`King` for castling)
    #[inline]
    #[must_use]
    pub const fn piece(self) -> PieceKind {
        match self {
            Move::Normal { piece, .. } => piece,
            Move::Castle(_) => PieceKind::King,
        }
    }

    /// Origin square; `None` for castling
    #[inline]
    #[must_use]
    pub const fn from(self) -> Option<Square> {
        match self {
            Move::Normal { from, .. } => Some(from),
            Move::Castle(_) => None,
        }
    }

    /// Destination square; `None` for castling
    #[inline]
    #[must_use]
    pub const fn to(self) -> Option<Square> {
        match self {
            Move::Normal { to, .. } => Some(to),
            Move::Castle(_) => None,
        }
    }

    /// Returns true if the move carries the capture marker
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self, Move::Normal { capture: true, .. })
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(self) -> bool {
        matches!(self, Move::Castle(_))
    }

    /// Promotion kind, if any
    #[inline]
    #[must_use]
    pub const fn promotion_kind(self) -> Option<PieceKind> {
        match self {
            Move::Normal { promotion, .. } => promotion,
            Move::Castle(_) => None,
        }
    }

    /// Returns true for a pawn advancing two ranks
    #[inline]
    #[must_use]
    pub fn is_double_pawn_push(self) -> bool {
        match self {
            Move::Normal {
                piece: PieceKind::Pawn,
                from,
                to,
                capture: false,
                ..
            } => from.file() == to.file() && from.rank().abs_diff(to.rank()) == 2,
            _ => false,
        }
    }
}

/// Any token the codec understands: a move or a terminal marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notation {
    Move(Move),
    Checkmate,
    Stalemate,
}

pub(crate) const MAX_MOVES: usize = 256;

/// List of moves kept in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// Render every move in the codec's notation
    #[must_use]
    pub fn to_notations(&self) -> Vec<String> {
        self.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Extend<Move> for MoveList {
    fn extend<I: IntoIterator<Item = Move>>(&mut self, iter: I) {
        for mv in iter {
            self.push(mv);
        }
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        let mv = self.list.get(self.idx)?;
        self.idx += 1;
        Some(mv)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len(),
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len()
        );
        &self.moves[idx]
    }
}
