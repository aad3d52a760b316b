//! MCTS tree node representation.
//!
//! Each node snapshots the game state reached by one move from its parent,
//! plus the visit/score statistics driving UCT selection. Nodes live in the
//! arena owned by [`SearchTree`](crate::tree::SearchTree); parent links are
//! plain indices, so the tree has single ownership of its children without
//! reference cycles.

use games_uttt::GameState;

/// Index into the node arena. Using a newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel for the root's missing parent.
    pub const NONE: NodeId = NodeId(u32::MAX);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    pub fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// A node in the MCTS tree.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Parent node index (`NONE` for the root).
    pub parent: NodeId,

    /// Position snapshot at this node. Forked by value from the parent, so
    /// sibling branches never alias each other's board storage.
    pub state: GameState,

    /// Number of times this node has been visited during backpropagation.
    pub visits: u32,

    /// Accumulated rollout reward. Forced to `i64::MIN` when the node leads
    /// straight into an opponent win, which keeps selection away from it.
    pub score: i64,

    /// Child indices. Empty until the node is expanded.
    pub children: Vec<NodeId>,
}

impl SearchNode {
    /// Create the root node for a search call.
    pub fn new_root(state: GameState) -> Self {
        Self {
            parent: NodeId::NONE,
            state,
            visits: 0,
            score: 0,
            children: Vec::new(),
        }
    }

    /// Create a child node holding the state after one move.
    pub fn new_child(parent: NodeId, state: GameState) -> Self {
        Self {
            parent,
            state,
            visits: 0,
            score: 0,
            children: Vec::new(),
        }
    }

    /// UCT selection score: `score/visits + C * sqrt(ln(parent_visits) / visits)`.
    ///
    /// An unvisited node has infinite priority and is always selected before
    /// any visited sibling.
    #[inline]
    pub fn uct_score(&self, parent_visits: u32, exploration: f64) -> f64 {
        if self.visits == 0 {
            return f64::INFINITY;
        }
        let exploit = self.score as f64 / self.visits as f64;
        let explore = exploration * ((parent_visits as f64).ln() / self.visits as f64).sqrt();
        exploit + explore
    }

    /// Whether this node has been expanded (has children).
    #[inline]
    pub fn is_expanded(&self) -> bool {
        !self.children.is_empty()
    }
}
