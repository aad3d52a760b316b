//! Game state and the apply-move transition.
//!
//! `GameState` is a plain value: `apply_move` returns a fresh state and
//! never mutates its input, so search branches can fork positions freely
//! without aliasing each other's storage.

use thiserror::Error;

use crate::board::{Board, Macroboard, Move, ParseError, Player, ZoneStatus, BOARD_SIZE, ZONE_SIZE};
use crate::rules;

/// Errors raised by [`GameState::apply_move`]. The search strategies only
/// propose moves from [`GameState::available_moves`], so hitting one of
/// these mid-search is a programming error, not a recoverable condition.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoveError {
    #[error("move ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("zone ({zone_row}, {zone_col}) is not open for play")]
    ZoneNotAvailable { zone_row: usize, zone_col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },
}

/// A complete snapshot of an Ultimate Tic-Tac-Toe position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    macroboard: Macroboard,
    move_number: u32,
    round_number: u32,
    time_per_move_ms: u64,
}

impl GameState {
    /// Opening position: empty board, every zone open, player 0 to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::empty(),
            macroboard: Macroboard::all_available(),
            move_number: 0,
            round_number: 0,
            time_per_move_ms: 1000,
        }
    }

    /// Decode a host snapshot given as string marks.
    ///
    /// Cells are `"."` (empty), `"0"` or `"1"`; zones are `"."` (empty),
    /// `"-1"` (available), `"-"` (drawn), `"0"`/`"1"` (won).
    pub fn from_marks<S: AsRef<str>>(
        board_marks: &[[S; BOARD_SIZE]; BOARD_SIZE],
        macro_marks: &[[S; ZONE_SIZE]; ZONE_SIZE],
        move_number: u32,
        round_number: u32,
        time_per_move_ms: u64,
    ) -> Result<GameState, ParseError> {
        let mut board = Board::empty();
        for (row, marks) in board_marks.iter().enumerate() {
            for (col, mark) in marks.iter().enumerate() {
                match mark.as_ref() {
                    "." => {}
                    other => match Player::from_mark(other) {
                        Some(player) => board.set(row, col, player),
                        None => {
                            return Err(ParseError::InvalidCellMark {
                                mark: other.to_string(),
                                row,
                                col,
                            })
                        }
                    },
                }
            }
        }

        let mut zones = [[ZoneStatus::Empty; ZONE_SIZE]; ZONE_SIZE];
        for (zone_row, marks) in macro_marks.iter().enumerate() {
            for (zone_col, mark) in marks.iter().enumerate() {
                zones[zone_row][zone_col] =
                    ZoneStatus::from_mark(mark.as_ref()).ok_or_else(|| {
                        ParseError::InvalidZoneMark {
                            mark: mark.as_ref().to_string(),
                            zone_row,
                            zone_col,
                        }
                    })?;
            }
        }

        Ok(GameState {
            board,
            macroboard: Macroboard::from_zones(zones),
            move_number,
            round_number,
            time_per_move_ms,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn macroboard(&self) -> &Macroboard {
        &self.macroboard
    }

    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn time_per_move_ms(&self) -> u64 {
        self.time_per_move_ms
    }

    /// The player to act in this position (move-number parity).
    #[inline]
    pub fn current_player(&self) -> Player {
        Player::from_parity(self.move_number)
    }

    /// The player who made the most recent move: the opponent of
    /// [`current_player`](Self::current_player). At move 0 this is `P1` by
    /// parity, before anyone has actually moved.
    #[inline]
    pub fn last_mover(&self) -> Player {
        Player::from_parity(self.move_number + 1)
    }

    /// All legal moves: the empty cells of every `Available` zone.
    ///
    /// Returns an empty list exactly when the position is terminal. A live
    /// position always carries at least one `Available` zone; if a snapshot
    /// arrives without one, every empty cell of the undecided zones is
    /// treated as legal.
    pub fn available_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        if self.is_terminal() {
            return moves;
        }

        for zone_row in 0..ZONE_SIZE {
            for zone_col in 0..ZONE_SIZE {
                if self.macroboard.status(zone_row, zone_col) == ZoneStatus::Available {
                    self.push_zone_moves(zone_row, zone_col, &mut moves);
                }
            }
        }

        if moves.is_empty() {
            for zone_row in 0..ZONE_SIZE {
                for zone_col in 0..ZONE_SIZE {
                    if self.macroboard.status(zone_row, zone_col).is_undecided() {
                        self.push_zone_moves(zone_row, zone_col, &mut moves);
                    }
                }
            }
        }

        moves
    }

    fn push_zone_moves(&self, zone_row: usize, zone_col: usize, out: &mut Vec<Move>) {
        let base_row = zone_row * ZONE_SIZE;
        let base_col = zone_col * ZONE_SIZE;
        for row in base_row..base_row + ZONE_SIZE {
            for col in base_col..base_col + ZONE_SIZE {
                if self.board.cell(row, col).is_none() {
                    out.push(Move::new(row, col));
                }
            }
        }
    }

    /// Apply a move for the current player and return the successor state.
    ///
    /// In order: the mover's mark is written, the played zone's outcome is
    /// recomputed, zone availability is updated for the opponent, and the
    /// move number is incremented.
    pub fn apply_move(&self, mv: Move) -> Result<GameState, MoveError> {
        if mv.row >= BOARD_SIZE || mv.col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }
        let (zone_row, zone_col) = mv.zone();
        let status = self.macroboard.status(zone_row, zone_col);
        // A snapshot without any available zone falls back to the undecided
        // zones, matching available_moves; the moves it offers must apply.
        let playable = status == ZoneStatus::Available
            || (status.is_undecided() && !self.macroboard.has_available_zone());
        if !playable {
            return Err(MoveError::ZoneNotAvailable { zone_row, zone_col });
        }
        if self.board.cell(mv.row, mv.col).is_some() {
            return Err(MoveError::CellOccupied {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.board.set(mv.row, mv.col, self.current_player());

        // The played zone may have just been decided by this mark.
        if let Some(winner) = rules::zone_line(&next.board, zone_row, zone_col) {
            next.macroboard.set(zone_row, zone_col, ZoneStatus::Won(winner));
        } else if rules::zone_drawn(&next.board, zone_row, zone_col) {
            next.macroboard.set(zone_row, zone_col, ZoneStatus::Drawn);
        }

        // The cell's position within its zone addresses the opponent's next
        // zone. If that zone is undecided it becomes the only available one;
        // if it is already won or drawn, every undecided zone opens up
        // (send-anywhere rule).
        let (target_row, target_col) = mv.zone_cell();
        if next.macroboard.status(target_row, target_col).is_undecided() {
            for zr in 0..ZONE_SIZE {
                for zc in 0..ZONE_SIZE {
                    if zr == target_row && zc == target_col {
                        next.macroboard.set(zr, zc, ZoneStatus::Available);
                    } else if next.macroboard.status(zr, zc) == ZoneStatus::Available {
                        next.macroboard.set(zr, zc, ZoneStatus::Empty);
                    }
                }
            }
        } else {
            for zr in 0..ZONE_SIZE {
                for zc in 0..ZONE_SIZE {
                    if next.macroboard.status(zr, zc) == ZoneStatus::Empty {
                        next.macroboard.set(zr, zc, ZoneStatus::Available);
                    }
                }
            }
        }

        next.move_number += 1;
        Ok(next)
    }

    /// Whether the game is over: a macro-level line exists or no zone is
    /// still undecided.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.macroboard.has_undecided_zone()
    }

    /// Player holding a macro-level line of won zones, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::macro_line(&self.macroboard)
    }
}

impl Default for GameState {
    fn default() -> GameState {
        GameState::new()
    }
}
