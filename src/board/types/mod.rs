//! Core rules types.
//!
//! This module contains the value types shared by the whole rules core:
//! - `Piece`, `PieceKind` and `Color`
//! - `Square` - compact board square (index 0-63)
//! - `Bitboard` - 64-bit square set, used for attacked squares
//! - `Move`, `Notation` and `MoveList` - move representation
//! - `CastlingRights` and `EnPassantOffer` - per-ply legal state

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleSide, CastlingRights, EnPassantOffer};
pub use moves::{Move, MoveList, MoveListIntoIter, Notation};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_KINDS;
