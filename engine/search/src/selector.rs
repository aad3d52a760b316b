//! Top-level move selection: one state snapshot in, one legal move out.

use games_uttt::{GameState, Move};
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use crate::config::SearchConfig;
use crate::mcts::MctsSearch;
use crate::minimax;
use crate::SearchError;

/// Which search strategy answers the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Depth-bounded alpha-beta minimax; deterministic.
    Minimax,
    /// Time-bounded Monte-Carlo tree search.
    Mcts,
}

/// Strategy dispatcher. Holds no per-game state: every call runs an
/// independent search over the snapshot it receives.
#[derive(Debug, Clone)]
pub struct MoveSelector {
    strategy: Strategy,
    config: SearchConfig,
}

impl MoveSelector {
    pub fn new(strategy: Strategy, config: SearchConfig) -> Self {
        Self { strategy, config }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the configured strategy to its budget and return its move.
    ///
    /// Fails with [`SearchError::NoLegalMoves`] when the snapshot offers no
    /// move at all; the host must not ask for moves past game end.
    pub fn select_move(
        &self,
        state: &GameState,
        rng: &mut ChaCha20Rng,
    ) -> Result<Move, SearchError> {
        if state.available_moves().is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        let mv = match self.strategy {
            Strategy::Minimax => minimax::best_move(state, self.config.depth_bound)?,
            Strategy::Mcts => {
                MctsSearch::new(*state, self.config.clone())
                    .run(rng)?
                    .best_move
            }
        };

        debug!(
            strategy = ?self.strategy,
            row = mv.row,
            col = mv.col,
            move_number = state.move_number(),
            "move selected"
        );
        Ok(mv)
    }
}
