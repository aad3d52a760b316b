//! Board-level value types.
//!
//! The 9x9 board is partitioned into nine 3x3 zones; cell `(r, c)` belongs
//! to zone `(r / 3, c / 3)`. Zone outcomes are tracked separately on a 3x3
//! macroboard, which is itself played as a meta tic-tac-toe board.
//!
//! All types here are plain values: forking a position for search is a
//! by-value copy with no shared storage between the branches.

use thiserror::Error;

/// Side length of the full board, in cells.
pub const BOARD_SIZE: usize = 9;

/// Side length of a single zone (and of the macroboard), in cells.
pub const ZONE_SIZE: usize = 3;

/// One of the two players. `P0` moves on even move numbers, `P1` on odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    P0,
    P1,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::P0 => Player::P1,
            Player::P1 => Player::P0,
        }
    }

    /// Player selected by move-number parity: even picks `P0`, odd picks `P1`.
    #[inline]
    pub fn from_parity(move_number: u32) -> Player {
        if move_number % 2 == 0 {
            Player::P0
        } else {
            Player::P1
        }
    }

    /// Host wire mark for this player (`"0"` or `"1"`).
    pub fn mark(self) -> &'static str {
        match self {
            Player::P0 => "0",
            Player::P1 => "1",
        }
    }

    /// Parse a host wire mark. Returns `None` for anything but `"0"`/`"1"`.
    pub fn from_mark(mark: &str) -> Option<Player> {
        match mark {
            "0" => Some(Player::P0),
            "1" => Some(Player::P1),
            _ => None,
        }
    }
}

/// Outcome slot of a single zone on the macroboard.
///
/// `Empty` and `Available` both mean the zone is still undecided;
/// `Available` additionally marks it as legal to play in right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZoneStatus {
    Empty,
    Available,
    Won(Player),
    Drawn,
}

impl ZoneStatus {
    /// Whether the zone outcome is settled (won or drawn).
    #[inline]
    pub fn is_decided(self) -> bool {
        matches!(self, ZoneStatus::Won(_) | ZoneStatus::Drawn)
    }

    /// Whether the zone can still be decided.
    #[inline]
    pub fn is_undecided(self) -> bool {
        !self.is_decided()
    }

    /// Host wire mark for this status.
    pub fn mark(self) -> &'static str {
        match self {
            ZoneStatus::Empty => ".",
            ZoneStatus::Available => "-1",
            ZoneStatus::Won(player) => player.mark(),
            ZoneStatus::Drawn => "-",
        }
    }

    /// Parse a host wire mark. Returns `None` for unrecognized marks.
    pub fn from_mark(mark: &str) -> Option<ZoneStatus> {
        match mark {
            "." => Some(ZoneStatus::Empty),
            "-1" => Some(ZoneStatus::Available),
            "-" => Some(ZoneStatus::Drawn),
            _ => Player::from_mark(mark).map(ZoneStatus::Won),
        }
    }
}

/// A move: zero-based `(row, col)` of the cell to mark, in `[0, 9)^2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(row: usize, col: usize) -> Move {
        Move { row, col }
    }

    /// Zone `(zone_row, zone_col)` containing this cell.
    #[inline]
    pub fn zone(self) -> (usize, usize) {
        (self.row / ZONE_SIZE, self.col / ZONE_SIZE)
    }

    /// Position of this cell within its zone. Under the send-anywhere rule
    /// this addresses the opponent's next zone.
    #[inline]
    pub fn zone_cell(self) -> (usize, usize) {
        (self.row % ZONE_SIZE, self.col % ZONE_SIZE)
    }
}

/// The 9x9 cell grid. Cells are `None` until a player marks them and never
/// revert afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Player>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// An all-empty board.
    pub fn empty() -> Board {
        Board {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Owner of the cell at `(row, col)`, if any.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, player: Player) {
        self.cells[row][col] = Some(player);
    }

    /// First cell (row-major order) where the two boards differ.
    ///
    /// Used to recover the concrete move between a position and its
    /// one-move successor.
    pub fn diff(&self, other: &Board) -> Option<Move> {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col] != other.cells[row][col] {
                    return Some(Move::new(row, col));
                }
            }
        }
        None
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

/// The 3x3 grid of zone outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Macroboard {
    zones: [[ZoneStatus; ZONE_SIZE]; ZONE_SIZE],
}

impl Macroboard {
    /// Opening macroboard: every zone open for play.
    pub fn all_available() -> Macroboard {
        Macroboard {
            zones: [[ZoneStatus::Available; ZONE_SIZE]; ZONE_SIZE],
        }
    }

    /// Build a macroboard from explicit zone statuses.
    pub fn from_zones(zones: [[ZoneStatus; ZONE_SIZE]; ZONE_SIZE]) -> Macroboard {
        Macroboard { zones }
    }

    /// Status of zone `(zone_row, zone_col)`.
    #[inline]
    pub fn status(&self, zone_row: usize, zone_col: usize) -> ZoneStatus {
        self.zones[zone_row][zone_col]
    }

    #[inline]
    pub(crate) fn set(&mut self, zone_row: usize, zone_col: usize, status: ZoneStatus) {
        self.zones[zone_row][zone_col] = status;
    }

    /// Whether any zone is still undecided.
    pub fn has_undecided_zone(&self) -> bool {
        self.zones
            .iter()
            .any(|row| row.iter().any(|status| status.is_undecided()))
    }

    /// Whether any zone is currently marked `Available`.
    pub fn has_available_zone(&self) -> bool {
        self.zones
            .iter()
            .any(|row| row.iter().any(|&status| status == ZoneStatus::Available))
    }
}

/// Errors raised while decoding a host state snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unrecognized cell mark {mark:?} at ({row}, {col})")]
    InvalidCellMark { mark: String, row: usize, col: usize },

    #[error("unrecognized zone mark {mark:?} at ({zone_row}, {zone_col})")]
    InvalidZoneMark {
        mark: String,
        zone_row: usize,
        zone_col: usize,
    },
}
