//! Ultimate Tic-Tac-Toe board model and rules engine.
//!
//! The game is played on a 9x9 board partitioned into nine 3x3 zones. Each
//! zone is an ordinary tic-tac-toe board; zone outcomes are collected on a
//! 3x3 macroboard which is itself played as a meta tic-tac-toe board. A move
//! sends the opponent to the zone addressed by the cell's position within
//! its own zone; if that zone is already decided, the opponent may play in
//! any undecided zone ("send-anywhere" rule).
//!
//! This crate owns the state model and the rules only. Move search lives in
//! the `uttt-search` crate, which consumes [`GameState`] snapshots through
//! [`GameState::available_moves`] and [`GameState::apply_move`].
//!
//! # Example
//!
//! ```rust
//! use games_uttt::{GameState, Move};
//!
//! let state = GameState::new();
//! assert_eq!(state.available_moves().len(), 81);
//!
//! // Playing the center of zone (0, 0) sends the opponent to zone (1, 1).
//! let next = state.apply_move(Move::new(1, 1)).unwrap();
//! assert!(next.available_moves().iter().all(|mv| mv.zone() == (1, 1)));
//! ```

pub mod board;
pub mod rules;
pub mod state;

pub use board::{Board, Macroboard, Move, ParseError, Player, ZoneStatus, BOARD_SIZE, ZONE_SIZE};
pub use state::{GameState, MoveError};
