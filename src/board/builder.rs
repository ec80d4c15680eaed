//! Fluent builder for arbitrary game states.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameBuilder, Piece, PieceKind, Square};
//!
//! let game = GameBuilder::new()
//!     .piece(Square::new(4, 0).unwrap(), Piece::new(Color::White, PieceKind::King).unwrap())
//!     .piece(Square::new(4, 7).unwrap(), Piece::new(Color::Black, PieceKind::King).unwrap())
//!     .piece(Square::new(0, 1).unwrap(), Piece::new(Color::White, PieceKind::Pawn).unwrap())
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.legal_moves().unwrap().len(), 7);
//! ```

use super::{
    CastlingRights, Color, ConsistencyError, EnPassantOffer, GameState, Layout, Piece, Position,
    Square,
};

/// Collects pieces and game metadata, then validates them into a [`GameState`].
///
/// A fresh builder is an empty board with white to move and no castling
/// rights.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    position: Position,
    side_to_move: Color,
    castling: [CastlingRights; 2],
    en_passant: EnPassantOffer,
    ply: u32,
    non_capture: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::from_layout(Layout::Empty)
    }

    /// Standard arrangement with full castling rights.
    #[must_use]
    pub fn starting_position() -> Self {
        Self::from_layout(Layout::Standard).all_castling_rights()
    }

    #[must_use]
    pub fn from_layout(layout: Layout) -> Self {
        GameBuilder {
            position: Position::new(layout),
            side_to_move: Color::White,
            castling: [CastlingRights::none(); 2],
            en_passant: EnPassantOffer::none(),
            ply: 0,
            non_capture: 0,
        }
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, piece: Piece) -> Self {
        self.position.set(square, piece);
        self
    }

    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.position.clear(square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the rights of one color; ignored for `Color::None`.
    #[must_use]
    pub fn castling(mut self, color: Color, rights: CastlingRights) -> Self {
        if !color.is_none() {
            self.castling[color.index()] = rights;
        }
        self
    }

    #[must_use]
    pub fn all_castling_rights(self) -> Self {
        self.castling(Color::White, CastlingRights::full())
            .castling(Color::Black, CastlingRights::full())
    }

    #[must_use]
    pub fn no_castling_rights(self) -> Self {
        self.castling(Color::White, CastlingRights::none())
            .castling(Color::Black, CastlingRights::none())
    }

    /// Offer an en-passant capture on `file` to the side to move.
    #[must_use]
    pub const fn en_passant(mut self, file: u8) -> Self {
        self.en_passant = EnPassantOffer::on_file(file);
        self
    }

    #[must_use]
    pub const fn clear_en_passant(mut self) -> Self {
        self.en_passant = EnPassantOffer::none();
        self
    }

    #[must_use]
    pub const fn ply(mut self, ply: u32) -> Self {
        self.ply = ply;
        self
    }

    /// Set the consecutive non-capture counter.
    #[must_use]
    pub const fn non_capture_count(mut self, count: u32) -> Self {
        self.non_capture = count;
        self
    }

    /// Validate and produce the game.
    ///
    /// Both colors need exactly one king, the side to move must be a real
    /// color, and the side not to move must not be in check.
    pub fn build(self) -> Result<GameState, ConsistencyError> {
        if self.side_to_move.is_none() {
            return Err(ConsistencyError::NoSideToMove);
        }
        for color in Color::BOTH {
            self.position.king_square(color)?;
        }
        let waiting = self.side_to_move.opponent();
        if self.position.is_in_check(waiting)? {
            return Err(ConsistencyError::OpponentInCheck { color: waiting });
        }
        Ok(GameState {
            position: self.position,
            castling: self.castling,
            en_passant: self.en_passant,
            side_to_move: self.side_to_move,
            ply: self.ply,
            non_capture: self.non_capture,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{CastleSide, PieceKind};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn kings() -> GameBuilder {
        GameBuilder::new()
            .piece(sq("e1"), Piece::of(Color::White, PieceKind::King))
            .piece(sq("e8"), Piece::of(Color::Black, PieceKind::King))
    }

    #[test]
    fn starting_position_matches_new_game() {
        let built = GameBuilder::starting_position().build().unwrap();
        assert_eq!(built, GameState::new());
    }

    #[test]
    fn kings_only() {
        let game = kings().build().unwrap();
        assert_eq!(game.position().get(sq("e1")).kind(), PieceKind::King);
        assert!(game.position().is_empty(sq("a1")));
        assert!(!game
            .castling_rights(Color::White)
            .allows(CastleSide::Kingside));
    }

    #[test]
    fn per_color_castling_rights() {
        let game = GameBuilder::starting_position()
            .no_castling_rights()
            .castling(Color::White, CastlingRights::from_flags(true, true, false))
            .build()
            .unwrap();
        let white = game.castling_rights(Color::White);
        assert!(white.allows(CastleSide::Kingside));
        assert!(!white.allows(CastleSide::Queenside));
        assert_eq!(game.castling_rights(Color::Black), CastlingRights::none());
    }

    #[test]
    fn side_to_move_and_counters() {
        let game = kings()
            .side_to_move(Color::Black)
            .ply(11)
            .non_capture_count(7)
            .build()
            .unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.ply(), 11);
        assert_eq!(game.non_capture_count(), 7);
    }

    #[test]
    fn clear_square() {
        let game = GameBuilder::starting_position()
            .clear(sq("a1"))
            .build()
            .unwrap();
        assert!(game.position().is_empty(sq("a1")));
        assert!(!game.position().is_empty(sq("b1")));
    }

    #[test]
    fn rejects_missing_or_duplicate_kings() {
        let missing = GameBuilder::new()
            .piece(sq("e1"), Piece::of(Color::White, PieceKind::King))
            .build();
        assert_eq!(
            missing,
            Err(ConsistencyError::MissingKing {
                color: Color::Black
            })
        );

        let doubled = kings()
            .piece(sq("a1"), Piece::of(Color::White, PieceKind::King))
            .build();
        assert_eq!(
            doubled,
            Err(ConsistencyError::MultipleKings {
                color: Color::White,
                count: 2
            })
        );
    }

    #[test]
    fn rejects_side_not_to_move_in_check() {
        let attacked = kings().piece(sq("e4"), Piece::of(Color::White, PieceKind::Rook));
        assert_eq!(
            attacked.clone().build(),
            Err(ConsistencyError::OpponentInCheck {
                color: Color::Black
            })
        );
        // The same position is fine with the checked side to move
        assert!(attacked.side_to_move(Color::Black).build().is_ok());
    }

    #[test]
    fn rejects_missing_side_to_move() {
        assert_eq!(
            kings().side_to_move(Color::None).build(),
            Err(ConsistencyError::NoSideToMove)
        );
    }
}
