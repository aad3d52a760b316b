//! MCTS tree structure with arena allocation.
//!
//! Nodes are stored in a contiguous `Vec` and referenced by [`NodeId`]
//! indices. The arena is owned by a single search call and dropped at its
//! end; there is no cross-call tree reuse.

use games_uttt::{GameState, Player};

use crate::node::{NodeId, SearchNode};

/// Arena-backed search tree.
#[derive(Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
    root: NodeId,
}

impl SearchTree {
    /// Create a tree with a single root node for the given position.
    pub fn new(root_state: GameState) -> Self {
        Self {
            nodes: vec![SearchNode::new_root(root_state)],
            root: NodeId(0),
        }
    }

    /// Get the root node ID.
    #[inline]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a reference to a node by ID.
    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0 as usize]
    }

    /// Get a mutable reference to a node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0 as usize]
    }

    /// Total number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attach a child holding `state` to `parent_id` and return its ID.
    pub fn add_child(&mut self, parent_id: NodeId, state: GameState) -> NodeId {
        let child_id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SearchNode::new_child(parent_id, state));
        self.get_mut(parent_id).children.push(child_id);
        child_id
    }

    /// Child of `node_id` maximizing the UCT score, if any.
    pub fn select_child(&self, node_id: NodeId, exploration: f64) -> Option<NodeId> {
        let node = self.get(node_id);
        let parent_visits = node.visits;

        node.children
            .iter()
            .max_by(|a, b| {
                let score_a = self.get(**a).uct_score(parent_visits, exploration);
                let score_b = self.get(**b).uct_score(parent_visits, exploration);
                score_a
                    .partial_cmp(&score_b)
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied()
    }

    /// Child of `node_id` with the highest visit count (robust child), if any.
    pub fn best_child_by_visits(&self, node_id: NodeId) -> Option<NodeId> {
        self.get(node_id)
            .children
            .iter()
            .max_by_key(|id| self.get(**id).visits)
            .copied()
    }

    /// Walk from `from` up to the root, crediting the rollout result.
    ///
    /// Every ancestor's visit count is incremented; ancestors whose state's
    /// last mover matches the rollout winner additionally receive `reward`.
    pub fn backpropagate(&mut self, from: NodeId, winner: Player, reward: i64) {
        let mut current = from;
        while current.is_some() {
            let node = self.get_mut(current);
            node.visits += 1;
            if node.state.last_mover() == winner {
                node.score = node.score.saturating_add(reward);
            }
            current = node.parent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_uttt::Move;

    #[test]
    fn test_new_tree() {
        let tree = SearchTree::new(GameState::new());
        assert_eq!(tree.len(), 1);
        assert!(!tree.is_empty());
        assert!(tree.get(tree.root()).parent.is_none());
    }

    #[test]
    fn test_add_child_links_both_ways() {
        let state = GameState::new();
        let mut tree = SearchTree::new(state);

        let next = state.apply_move(Move::new(0, 0)).unwrap();
        let child_id = tree.add_child(tree.root(), next);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get(tree.root()).children, vec![child_id]);
        assert_eq!(tree.get(child_id).parent, tree.root());
        assert_eq!(tree.get(child_id).state, next);
    }

    #[test]
    fn test_select_child_prefers_unvisited() {
        let state = GameState::new();
        let mut tree = SearchTree::new(state);

        let a = tree.add_child(tree.root(), state.apply_move(Move::new(0, 0)).unwrap());
        let b = tree.add_child(tree.root(), state.apply_move(Move::new(0, 1)).unwrap());

        tree.get_mut(tree.root()).visits = 5;
        tree.get_mut(a).visits = 5;
        tree.get_mut(a).score = 50;

        // `b` is unvisited and therefore has infinite priority.
        assert_eq!(tree.select_child(tree.root(), 1.41), Some(b));

        // Once visited with a poor score, the stronger child wins.
        tree.get_mut(b).visits = 5;
        tree.get_mut(b).score = 0;
        assert_eq!(tree.select_child(tree.root(), 1.41), Some(a));
    }

    #[test]
    fn test_best_child_by_visits() {
        let state = GameState::new();
        let mut tree = SearchTree::new(state);

        let a = tree.add_child(tree.root(), state.apply_move(Move::new(0, 0)).unwrap());
        let b = tree.add_child(tree.root(), state.apply_move(Move::new(0, 1)).unwrap());

        tree.get_mut(a).visits = 30;
        tree.get_mut(a).score = 900; // high score must not matter
        tree.get_mut(b).visits = 70;

        assert_eq!(tree.best_child_by_visits(tree.root()), Some(b));
    }

    #[test]
    fn test_backpropagate_parity_credit() {
        // root (move 0) -> child (move 1) -> grandchild (move 2)
        let root_state = GameState::new();
        let child_state = root_state.apply_move(Move::new(4, 4)).unwrap();
        let grandchild_state = child_state.apply_move(Move::new(3, 3)).unwrap();

        let mut tree = SearchTree::new(root_state);
        let child = tree.add_child(tree.root(), child_state);
        let grandchild = tree.add_child(child, grandchild_state);

        let winner = grandchild_state.last_mover();
        tree.backpropagate(grandchild, winner, 10);

        assert_eq!(tree.get(grandchild).visits, 1);
        assert_eq!(tree.get(child).visits, 1);
        assert_eq!(tree.get(tree.root()).visits, 1);

        // Credit lands on alternating plies: the winner's parity matches the
        // grandchild and the root, not the child in between.
        assert_eq!(tree.get(grandchild).score, 10);
        assert_eq!(tree.get(child).score, 0);
        assert_eq!(tree.get(tree.root()).score, 10);
    }

    #[test]
    fn test_backpropagate_saturates_penalized_score() {
        let state = GameState::new();
        let mut tree = SearchTree::new(state);
        let root = tree.root();
        tree.get_mut(root).score = i64::MIN;

        let winner = state.last_mover();
        tree.backpropagate(root, winner, 10);

        // A poisoned score must not wrap around to a huge positive value.
        assert!(tree.get(root).score < 0);
        assert_eq!(tree.get(root).visits, 1);
    }
}
