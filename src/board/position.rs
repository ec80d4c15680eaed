//! Board occupancy as a 64-slot arena indexed by square.

use std::ops::Index;

use super::error::ConsistencyError;
use super::types::{Bitboard, Color, Piece, PieceKind, Square};

/// Named starting arrangements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// The usual opening arrangement
    #[default]
    Standard,
    /// No pieces at all
    Empty,
    /// A single white pawn on e4, for smoke tests
    Placeholder,
}

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

/// Mapping from every square to a piece or `Piece::EMPTY`.
///
/// Holding exactly one `Piece` per slot makes "at most one piece per square"
/// structural.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Piece; 64],
}

impl Position {
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        match layout {
            Layout::Standard => Position::standard(),
            Layout::Empty => Position::empty(),
            Layout::Placeholder => {
                let mut position = Position::empty();
                position.set(Square::at(4, 3), Piece::of(Color::White, PieceKind::Pawn));
                position
            }
        }
    }

    #[must_use]
    pub fn empty() -> Self {
        Position {
            squares: [Piece::EMPTY; 64],
        }
    }

    #[must_use]
    pub fn standard() -> Self {
        let mut position = Position::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            position.set(Square::at(file, 0), Piece::of(Color::White, kind));
            position.set(Square::at(file, 1), Piece::of(Color::White, PieceKind::Pawn));
            position.set(Square::at(file, 6), Piece::of(Color::Black, PieceKind::Pawn));
            position.set(Square::at(file, 7), Piece::of(Color::Black, kind));
        }
        position
    }

    /// Piece on `sq`, `Piece::EMPTY` when unoccupied
    #[inline]
    #[must_use]
    pub fn get(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    /// Place `piece` on `sq`, replacing whatever was there
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = piece;
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.squares[sq.index()] = Piece::EMPTY;
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.get(sq).is_empty()
    }

    /// Squares and pieces of one color, in square order.
    ///
    /// `Color::None` yields the unoccupied squares.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.get(sq)))
            .filter(move |(_, piece)| piece.color() == color)
    }

    /// Squares holding a piece of `color`
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.pieces_of(color).map(|(sq, _)| sq).collect()
    }

    /// The single king of `color`.
    ///
    /// Zero or several kings mean the position is corrupt.
    pub fn king_square(&self, color: Color) -> Result<Square, ConsistencyError> {
        let mut kings = self
            .pieces_of(color)
            .filter(|(_, piece)| piece.kind() == PieceKind::King)
            .map(|(sq, _)| sq);
        let first = kings.next().ok_or(ConsistencyError::MissingKing { color })?;
        let extra = kings.count() as u32;
        if extra > 0 {
            return Err(ConsistencyError::MultipleKings {
                color,
                count: extra + 1,
            });
        }
        Ok(first)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::standard()
    }
}

impl Index<Square> for Position {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.squares[sq.index()]
    }
}

impl std::fmt::Debug for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let piece = self.get(Square::at(file, rank));
                write!(f, "{}", piece.to_char().unwrap_or('.'))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
