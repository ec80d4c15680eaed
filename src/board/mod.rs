//! Board representation and rules.
//!
//! A 64-square [`Position`] arena, per-piece pseudo-legal generators, the
//! check and legality filter, and the [`GameState`] machine that tracks
//! castling rights, en-passant offers and the non-capture counter.
//!
//! # Example
//! ```
//! use chess_rules::board::GameState;
//!
//! let mut game = GameState::new();
//! assert_eq!(game.legal_moves().unwrap().len(), 20);
//! game.apply_notation("e2e4").unwrap();
//! assert!(game.en_passant().is_active());
//! ```

mod apply;
mod attack_tables;
mod builder;
mod error;
mod fen;
pub mod legality;
mod movegen;
mod notation;
mod position;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::GameBuilder;
pub use error::{
    ConsistencyError, FenError, GameError, MoveParseError, PieceError, SquareError,
};
pub use legality::{attacked_squares_by, filter_legal, is_in_check};
pub use position::{Layout, Position};
pub use state::{GameState, Outcome, StalemateReason, NON_CAPTURE_LIMIT};
pub use types::{
    Bitboard, BitboardIter, CastleSide, CastlingRights, Color, EnPassantOffer, Move, MoveList,
    MoveListIntoIter, Notation, Piece, PieceKind, Square,
};

pub(crate) use types::PROMOTION_KINDS;
