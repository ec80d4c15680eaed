use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;

use crate::board::{ConsistencyError, GameError, GameState, Outcome};

/// One game shared between threads.
///
/// Every call takes the lock for its whole duration, so a `play` is never
/// interleaved with another `play` or observed half-applied. Clones share
/// the same game.
#[derive(Clone, Debug, Default)]
pub struct SharedGame {
    game: Arc<Mutex<GameState>>,
}

impl SharedGame {
    #[must_use]
    pub fn new(game: GameState) -> Self {
        SharedGame {
            game: Arc::new(Mutex::new(game)),
        }
    }

    pub fn legal_moves(&self) -> Result<Vec<String>, ConsistencyError> {
        super::generate_legal_moves(&self.game.lock())
    }

    /// Apply `notation` and report the resulting outcome.
    pub fn play(&self, notation: &str) -> Result<Outcome, GameError> {
        let mut game = self.game.lock();
        game.apply_notation(notation)?;
        let outcome = game.outcome()?;
        if outcome.is_terminal() {
            debug!("shared game finished: {outcome}");
        }
        Ok(outcome)
    }

    pub fn outcome(&self) -> Result<Outcome, ConsistencyError> {
        self.game.lock().outcome()
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.game.lock().clone()
    }
}
