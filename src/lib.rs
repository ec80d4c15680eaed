//! Legal-move generation and game-state tracking for chess.
//!
//! [`board`] holds the rules core; [`engine`] is the notation-string facade
//! used by renderers, interactive loops and move pickers.

pub mod board;
pub mod engine;

pub use board::{Color, GameState, Move, Outcome, Piece, PieceKind, Square};
