//! Collaborator-facing facade.
//!
//! Renderers, interactive loops and move pickers drive a game through these
//! functions using move notation strings only. [`SharedGame`] serialises
//! access when one game is shared between threads.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameState, Outcome};
//! use chess_rules::engine;
//!
//! let game = GameState::new();
//! let moves = engine::generate_legal_moves(&game).unwrap();
//! let next = engine::apply_move(&game, &moves[0]).unwrap();
//! assert_eq!(engine::is_terminal(&next).unwrap(), Outcome::Ongoing);
//! ```

mod shared;

pub use shared::SharedGame;

use crate::board::{ConsistencyError, GameError, GameState, Outcome};

/// Legal moves for the side to move, rendered in generation order.
pub fn generate_legal_moves(game: &GameState) -> Result<Vec<String>, ConsistencyError> {
    Ok(game.legal_moves()?.to_notations())
}

/// The game after `notation` is played; `game` itself is left as it was.
pub fn apply_move(game: &GameState, notation: &str) -> Result<GameState, GameError> {
    let mut next = game.clone();
    next.apply_notation(notation)?;
    Ok(next)
}

/// Termination status of `game`.
pub fn is_terminal(game: &GameState) -> Result<Outcome, ConsistencyError> {
    game.outcome()
}
