//! Piece, kind and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::PieceError;

/// Side owning a piece. `None` only ever appears on the empty piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    None,
    Black,
    White,
}

impl Color {
    /// The two playing colors, white first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Index into per-side arrays (White=0, Black=1, None=2)
    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
            Color::None => 2,
        }
    }

    /// Returns the opposite color. `None` has no opponent.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::None => Color::None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        matches!(self, Color::None)
    }

    /// Back rank for this color (0 for White, 7 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn back_rank(self) -> u8 {
        match self {
            Color::Black => 7,
            _ => 0,
        }
    }

    /// Pawn forward direction (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> i8 {
        match self {
            Color::Black => -1,
            _ => 1,
        }
    }

    /// Pawn starting rank (1 for White, 6 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::Black => 6,
            _ => 1,
        }
    }

    /// Pawn promotion rank (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_promotion_rank(self) -> u8 {
        match self {
            Color::Black => 0,
            _ => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "WHITE"),
            Color::Black => write!(f, "BLACK"),
            Color::None => write!(f, "NONE"),
        }
    }
}

/// Piece kinds. `None` only ever appears on the empty piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceKind {
    None,
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Material values indexed by `PieceKind::index`.
static PIECE_VALUES: [i32; 7] = [-1, 1, 3, 3, 5, 9, 100];

/// Promotion choices in generation order (queen first)
pub(crate) const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

impl PieceKind {
    /// All real piece kinds in generation order
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            PieceKind::None => 0,
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }

    /// Material value; the sentinel `-1` for `None`.
    #[inline]
    #[must_use]
    pub fn value(self) -> i32 {
        PIECE_VALUES[self.index()]
    }

    /// Parse a kind from a letter, ignoring case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    /// Lowercase letter for the kind; `None` has no letter.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> Option<char> {
        match self {
            PieceKind::None => None,
            PieceKind::Pawn => Some('p'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Rook => Some('r'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
        }
    }

    /// Returns true if this kind can promote from a pawn
    #[inline]
    #[must_use]
    pub fn is_promotion_target(self) -> bool {
        PROMOTION_KINDS.contains(&self)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::None => "EMPTY",
            PieceKind::Pawn => "PAWN",
            PieceKind::Knight => "KNIGHT",
            PieceKind::Bishop => "BISHOP",
            PieceKind::Rook => "ROOK",
            PieceKind::Queen => "QUEEN",
            PieceKind::King => "KING",
        };
        f.write_str(name)
    }
}

/// A validated (color, kind) pair.
///
/// The empty piece is `(Color::None, PieceKind::None)`; every other pairing
/// involving a `None` half is rejected by [`Piece::new`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Piece {
    color: Color,
    kind: PieceKind,
}

impl Piece {
    /// The empty square marker
    pub const EMPTY: Piece = Piece {
        color: Color::None,
        kind: PieceKind::None,
    };

    /// Create a piece, rejecting half-empty pairings.
    pub fn new(color: Color, kind: PieceKind) -> Result<Piece, PieceError> {
        if color.is_none() != (kind == PieceKind::None) {
            return Err(PieceError::IllegalPiece { color, kind });
        }
        Ok(Piece { color, kind })
    }

    /// Infallible constructor for a real (colored) piece used inside the crate.
    #[inline]
    pub(crate) const fn of(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> i32 {
        self.kind.value()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self.kind, PieceKind::None)
    }

    #[inline]
    #[must_use]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        self.color == color && self.kind == kind
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    #[must_use]
    pub fn to_char(self) -> Option<char> {
        let c = self.kind.to_char()?;
        if self.color == Color::White {
            Some(c.to_ascii_uppercase())
        } else {
            Some(c)
        }
    }

    /// Parse a FEN letter (case gives the color)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::of(color, kind))
    }
}

impl Default for Piece {
    fn default() -> Self {
        Piece::EMPTY
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "EMPTY")
        } else {
            write!(f, "{} {}", self.color, self.kind)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Piece {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            color: Color,
            kind: PieceKind,
        }
        let raw = Raw::deserialize(deserializer)?;
        Piece::new(raw.color, raw.kind).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_piece_is_valid_and_sentinel_valued() {
        let piece = Piece::new(Color::None, PieceKind::None).unwrap();
        assert_eq!(piece, Piece::EMPTY);
        assert!(piece.is_empty());
        assert_eq!(piece.value(), -1);
    }

    #[test]
    fn half_empty_pairings_are_rejected() {
        for kind in PieceKind::ALL {
            assert_eq!(
                Piece::new(Color::None, kind),
                Err(PieceError::IllegalPiece {
                    color: Color::None,
                    kind
                })
            );
        }
        for color in Color::BOTH {
            assert_eq!(
                Piece::new(color, PieceKind::None),
                Err(PieceError::IllegalPiece {
                    color,
                    kind: PieceKind::None
                })
            );
        }
    }

    #[test]
    fn material_values() {
        let expected = [1, 3, 3, 5, 9, 100];
        for color in Color::BOTH {
            for (kind, value) in PieceKind::ALL.iter().zip(expected) {
                assert_eq!(Piece::new(color, *kind).unwrap().value(), value);
            }
        }
    }

    #[test]
    fn equality_ignores_nothing_but_color_and_kind() {
        let a = Piece::new(Color::White, PieceKind::Knight).unwrap();
        let b = Piece::new(Color::White, PieceKind::Knight).unwrap();
        let c = Piece::new(Color::Black, PieceKind::Knight).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_matches_color_then_kind() {
        let queen = Piece::new(Color::Black, PieceKind::Queen).unwrap();
        assert_eq!(queen.to_string(), "BLACK QUEEN");
        assert_eq!(Piece::EMPTY.to_string(), "EMPTY");
    }

    #[test]
    fn fen_letters() {
        let rook = Piece::new(Color::White, PieceKind::Rook).unwrap();
        assert_eq!(rook.to_char(), Some('R'));
        assert_eq!(Piece::from_char('n'), Piece::new(Color::Black, PieceKind::Knight).ok());
        assert_eq!(Piece::EMPTY.to_char(), None);
        assert_eq!(Piece::from_char('x'), None);
    }
}
