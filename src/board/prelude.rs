//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//!
//! let game = GameState::new();
//! assert_eq!(game.outcome().unwrap(), Outcome::Ongoing);
//! ```

pub use super::{
    CastleSide, CastlingRights, Color, ConsistencyError, GameBuilder, GameError, GameState, Move,
    MoveList, Notation, Outcome, Piece, PieceKind, Position, Square,
};
