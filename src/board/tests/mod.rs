//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `perft.rs` - Node counts for the reference positions
//! - `castling.rs` - Castling preconditions and rights bookkeeping
//! - `en_passant.rs` - En-passant offers and captures
//! - `non_capture.rs` - Non-capture counter and the 50-ply draw
//! - `apply.rs` - Applying moves to positions and games
//! - `edge_cases.rs` - Mates, stalemates, promotions and corrupt positions
//! - `proptest.rs` - Property-based tests over random playouts

mod castling;
mod perft;

use crate::board::{GameState, Square};

pub(super) fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

pub(super) fn game(fen: &str) -> GameState {
    GameState::try_from_fen(fen).unwrap()
}

pub(super) fn legal(game: &GameState) -> Vec<String> {
    game.legal_moves().unwrap().to_notations()
}

pub(super) fn play(game: &mut GameState, moves: &[&str]) {
    for notation in moves {
        game.apply_notation(notation)
            .unwrap_or_else(|err| panic!("{notation} rejected: {err}"));
    }
}
