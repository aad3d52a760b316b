//! Time-bounded Monte-Carlo tree search with UCT selection.
//!
//! Each call builds one tree from the input state and repeats the classic
//! four phases until the wall-clock deadline:
//!
//! 1. **Selection**: descend from the root by UCT score while the current
//!    node has children.
//! 2. **Expansion**: attach one child per available move of the selected
//!    node, unless its position is terminal.
//! 3. **Rollout**: play uniformly-random legal moves from a copy of the
//!    start state until the game ends.
//! 4. **Backpropagation**: credit the rollout winner along the path back to
//!    the root.
//!
//! The deadline is polled between iterations only; an iteration in progress
//! runs to completion, so the call may overrun the budget by one iteration.
//! The answer is the root's most-visited child (robust-child policy), with
//! the concrete move recovered by diffing the two boards.

use std::time::{Duration, Instant};

use games_uttt::{GameState, Move, Player};
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use tracing::{debug, trace};

use crate::config::SearchConfig;
use crate::node::NodeId;
use crate::tree::SearchTree;
use crate::SearchError;

/// Reward credited to an ancestor whose parity matches the rollout winner.
const ROLLOUT_REWARD: i64 = 10;

/// Outcome of one MCTS call.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The selected move.
    pub best_move: Move,

    /// Number of completed iterations.
    pub simulations: u32,

    /// Number of nodes in the search tree at the end of the call.
    pub tree_nodes: usize,
}

/// One MCTS search call. Owns its tree; nothing is shared across calls.
pub struct MctsSearch {
    tree: SearchTree,
    config: SearchConfig,
    /// The player who is *not* to move at the root. Rollouts that start in
    /// a position this player has already won poison their parent node.
    opponent: Player,
}

impl MctsSearch {
    /// Set up a search rooted at the given position.
    pub fn new(state: GameState, config: SearchConfig) -> Self {
        let opponent = state.last_mover();
        Self {
            tree: SearchTree::new(state),
            config,
            opponent,
        }
    }

    /// Run iterations until the deadline, then answer with the robust child.
    pub fn run(&mut self, rng: &mut ChaCha20Rng) -> Result<SearchResult, SearchError> {
        let deadline = Instant::now() + Duration::from_millis(self.config.time_budget_ms);
        let mut simulations = 0u32;

        // At least one iteration runs even when the budget is already spent,
        // so a live position always yields a best-effort answer.
        loop {
            self.simulate(rng)?;
            simulations += 1;
            if Instant::now() >= deadline {
                break;
            }
        }

        let root = self.tree.root();
        let best = self
            .tree
            .best_child_by_visits(root)
            .ok_or(SearchError::NoLegalMoves)?;
        let best_move = self
            .tree
            .get(root)
            .state
            .board()
            .diff(self.tree.get(best).state.board())
            .ok_or(SearchError::NoLegalMoves)?;

        debug!(
            simulations,
            tree_nodes = self.tree.len(),
            row = best_move.row,
            col = best_move.col,
            "mcts search complete"
        );

        Ok(SearchResult {
            best_move,
            simulations,
            tree_nodes: self.tree.len(),
        })
    }

    /// The tree built so far (for inspection in tests).
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// One iteration: select, expand, roll out, backpropagate.
    fn simulate(&mut self, rng: &mut ChaCha20Rng) -> Result<(), SearchError> {
        let promising = self.select_promising();

        if !self.tree.get(promising).state.is_terminal() {
            self.expand(promising)?;
        }

        // Roll out from a uniformly-random fresh child, or from the selected
        // node itself when expansion produced nothing.
        let children = &self.tree.get(promising).children;
        let start = if children.is_empty() {
            promising
        } else {
            children[rng.gen_range(0..children.len())]
        };

        let winner = self.rollout(start, rng)?;
        self.tree.backpropagate(start, winner, ROLLOUT_REWARD);

        trace!(start = start.0, winner = ?winner, "mcts iteration complete");
        Ok(())
    }

    /// Descend from the root by UCT score until reaching an unexpanded node.
    fn select_promising(&self) -> NodeId {
        let mut current = self.tree.root();
        while self.tree.get(current).is_expanded() {
            match self.tree.select_child(current, self.config.exploration) {
                Some(child) => current = child,
                None => break,
            }
        }
        current
    }

    /// Attach one child per available move of `node_id`.
    fn expand(&mut self, node_id: NodeId) -> Result<(), SearchError> {
        let state = self.tree.get(node_id).state;
        for mv in state.available_moves() {
            let next = state.apply_move(mv)?;
            self.tree.add_child(node_id, next);
        }
        Ok(())
    }

    /// Play random moves from a copy of the start state until terminal and
    /// report the rollout winner by move-number parity.
    ///
    /// A start position that the opponent has already terminally won is a
    /// branch the search must stop revisiting: its parent's score is forced
    /// to the minimum and the opponent is reported as the winner outright.
    fn rollout(&mut self, start: NodeId, rng: &mut ChaCha20Rng) -> Result<Player, SearchError> {
        let node = self.tree.get(start);
        let mut state = node.state;

        if state.is_terminal() && state.last_mover() == self.opponent {
            let parent = node.parent;
            if parent.is_some() {
                self.tree.get_mut(parent).score = i64::MIN;
            }
            return Ok(self.opponent);
        }

        while !state.is_terminal() {
            let moves = state.available_moves();
            let mv = moves[rng.gen_range(0..moves.len())];
            state = state.apply_move(mv)?;
        }
        Ok(state.last_mover())
    }
}
