//! Depth-bounded minimax with alpha-beta pruning.
//!
//! A pure recursive search: no state persists across calls and the budget
//! is a ply count, never wall-clock time, so results are deterministic for
//! a given position and depth. The terminal heuristic is deliberately
//! minimal: +1 when the root player holds a macro-level line, 0 otherwise.
//! It does not distinguish losses or draws from unresolved positions.

use games_uttt::{GameState, Move, Player};
use tracing::debug;

use crate::SearchError;

/// Score of a position where the root player has won.
const WIN_SCORE: i32 = 1;

/// Pick the best move for the player to act, searching `depth_bound` plies.
///
/// Each candidate move is applied to the position first, then the resulting
/// state is scored with the opponent minimizing. Ties break in favor of a
/// certain win over a previously chosen non-winning move.
pub fn best_move(state: &GameState, depth_bound: u32) -> Result<Move, SearchError> {
    let root_player = state.current_player();
    let moves = state.available_moves();
    if moves.is_empty() {
        return Err(SearchError::NoLegalMoves);
    }

    let mut best: Option<Move> = None;
    let mut best_score = i32::MIN;
    for mv in moves {
        let next = state.apply_move(mv)?;
        let score = minimax(
            &next,
            depth_bound.saturating_sub(1),
            i32::MIN,
            i32::MAX,
            root_player,
            false,
        )?;
        if score > best_score || (score == WIN_SCORE && best_score != WIN_SCORE) {
            best_score = score;
            best = Some(mv);
        }
    }

    debug!(score = best_score, depth_bound, "minimax search complete");
    best.ok_or(SearchError::NoLegalMoves)
}

fn minimax(
    state: &GameState,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    root_player: Player,
    maximizing: bool,
) -> Result<i32, SearchError> {
    if depth == 0 || state.is_terminal() {
        return Ok(evaluate(state, root_player));
    }

    let moves = state.available_moves();
    if moves.is_empty() {
        return Ok(0);
    }

    if maximizing {
        let mut best = i32::MIN;
        for mv in moves {
            let next = state.apply_move(mv)?;
            best = best.max(minimax(&next, depth - 1, alpha, beta, root_player, false)?);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    } else {
        let mut best = i32::MAX;
        for mv in moves {
            let next = state.apply_move(mv)?;
            best = best.min(minimax(&next, depth - 1, alpha, beta, root_player, true)?);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }
}

fn evaluate(state: &GameState, root_player: Player) -> i32 {
    if state.winner() == Some(root_player) {
        WIN_SCORE
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use games_uttt::BOARD_SIZE;

    /// Player 0 can win at (0, 8); everything else loses to player 1's
    /// send-anywhere reply at (3, 8).
    fn must_win_now_state() -> GameState {
        let mut board = [["."; BOARD_SIZE]; BOARD_SIZE];
        for (r, c) in [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)] {
            board[r][c] = "0";
        }
        for (r, c) in [(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5)] {
            board[r][c] = "1";
        }
        board[0][6] = "0";
        board[0][7] = "0";
        board[3][6] = "1";
        board[3][7] = "1";

        let macroboard = [
            ["0", "0", "-1"],
            ["1", "1", "."],
            [".", ".", "."],
        ];
        GameState::from_marks(&board, &macroboard, 16, 0, 1000).expect("snapshot decodes")
    }

    #[test]
    fn test_returns_legal_move_from_opening() {
        let state = GameState::new();
        let mv = best_move(&state, 2).unwrap();
        assert!(state.available_moves().contains(&mv));
    }

    #[test]
    fn test_finds_immediate_win() {
        let state = must_win_now_state();
        let mv = best_move(&state, 4).unwrap();
        assert_eq!(mv, Move::new(0, 8));
    }

    #[test]
    fn test_deterministic_for_fixed_depth() {
        let state = must_win_now_state();
        let first = best_move(&state, 4).unwrap();
        let second = best_move(&state, 4).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_win_preferred_even_at_depth_one() {
        // At depth 1 the winning candidate evaluates to +1 right after
        // being applied; every alternative scores 0.
        let state = must_win_now_state();
        let mv = best_move(&state, 1).unwrap();
        assert_eq!(mv, Move::new(0, 8));
    }

    #[test]
    fn test_no_moves_is_an_error() {
        let macroboard = [["0", "0", "0"], [".", ".", "."], [".", ".", "."]];
        let board = [["."; BOARD_SIZE]; BOARD_SIZE];
        let state = GameState::from_marks(&board, &macroboard, 12, 0, 1000).unwrap();
        assert!(matches!(
            best_move(&state, 4),
            Err(SearchError::NoLegalMoves)
        ));
    }

    #[test]
    fn test_evaluate_scores_only_root_wins() {
        let macroboard = [["1", "1", "1"], [".", ".", "."], [".", ".", "."]];
        let board = [["."; BOARD_SIZE]; BOARD_SIZE];
        let state = GameState::from_marks(&board, &macroboard, 9, 0, 1000).unwrap();

        assert_eq!(evaluate(&state, Player::P1), WIN_SCORE);
        // A loss is indistinguishable from an unresolved position.
        assert_eq!(evaluate(&state, Player::P0), 0);
    }
}
