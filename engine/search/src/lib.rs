//! Move search strategies for Ultimate Tic-Tac-Toe.
//!
//! Two interchangeable strategies over the `games-uttt` rules engine:
//!
//! - [`minimax`]: depth-bounded minimax with alpha-beta pruning. Fully
//!   deterministic; its budget is a ply count, not wall-clock time.
//! - [`MctsSearch`]: time-bounded Monte-Carlo tree search with UCT
//!   selection. Each call builds its own arena-allocated tree, runs random
//!   rollouts until the deadline, and answers with the root's most-visited
//!   child (robust-child policy).
//!
//! [`MoveSelector`] is the entry point hosts call: one state snapshot in,
//! one legal move out.
//!
//! # Example
//!
//! ```rust
//! use games_uttt::GameState;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use uttt_search::{MoveSelector, SearchConfig, Strategy};
//!
//! let selector = MoveSelector::new(Strategy::Mcts, SearchConfig::for_testing());
//! let mut rng = ChaCha20Rng::seed_from_u64(42);
//! let mv = selector.select_move(&GameState::new(), &mut rng).unwrap();
//! assert!(GameState::new().available_moves().contains(&mv));
//! ```

use thiserror::Error;

pub mod config;
pub mod mcts;
pub mod minimax;
pub mod node;
pub mod selector;
pub mod tree;

pub use config::SearchConfig;
pub use mcts::{MctsSearch, SearchResult};
pub use node::{NodeId, SearchNode};
pub use selector::{MoveSelector, Strategy};
pub use tree::SearchTree;

/// Errors raised by the search strategies and the move selector.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// The input state offers no legal move. The host is responsible for
    /// not asking for a move past game end.
    #[error("no legal moves available")]
    NoLegalMoves,

    /// A strategy proposed an illegal move internally. Always a programming
    /// error, fatal to the current search call.
    #[error(transparent)]
    IllegalMove(#[from] games_uttt::MoveError),
}
