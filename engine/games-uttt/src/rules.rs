//! Line and draw detection, at zone level and macroboard level.
//!
//! Both levels share the same 3x3 geometry: a zone is a 3x3 block of board
//! cells, the macroboard is a 3x3 grid of zone outcomes played as a meta
//! tic-tac-toe board.

use crate::board::{Board, Macroboard, Player, ZoneStatus, ZONE_SIZE};

/// The 8 winning lines of a 3x3 grid (3 rows, 3 columns, 2 diagonals),
/// as `(row, col)` offsets.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Owner of a completed line in the 3x3 grid described by `mark`, if any.
fn line_owner(mark: impl Fn(usize, usize) -> Option<Player>) -> Option<Player> {
    for line in &LINES {
        let [a, b, c] = *line;
        if let Some(player) = mark(a.0, a.1) {
            if mark(b.0, b.1) == Some(player) && mark(c.0, c.1) == Some(player) {
                return Some(player);
            }
        }
    }
    None
}

/// Player holding three-in-a-row inside zone `(zone_row, zone_col)`, if any.
pub fn zone_line(board: &Board, zone_row: usize, zone_col: usize) -> Option<Player> {
    let base_row = zone_row * ZONE_SIZE;
    let base_col = zone_col * ZONE_SIZE;
    line_owner(|r, c| board.cell(base_row + r, base_col + c))
}

/// Whether zone `(zone_row, zone_col)` is full with no line in it.
pub fn zone_drawn(board: &Board, zone_row: usize, zone_col: usize) -> bool {
    if zone_line(board, zone_row, zone_col).is_some() {
        return false;
    }
    let base_row = zone_row * ZONE_SIZE;
    let base_col = zone_col * ZONE_SIZE;
    (0..ZONE_SIZE).all(|r| (0..ZONE_SIZE).all(|c| board.cell(base_row + r, base_col + c).is_some()))
}

/// Player holding a line of won zones on the macroboard, if any.
/// A zone counts as that player's mark only once its status is `Won`.
pub fn macro_line(macroboard: &Macroboard) -> Option<Player> {
    line_owner(|r, c| match macroboard.status(r, c) {
        ZoneStatus::Won(player) => Some(player),
        _ => None,
    })
}
