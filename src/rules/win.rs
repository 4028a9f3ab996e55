//! Win detection logic for tic-tac-toe.

use crate::board::Board;
use crate::types::{Cell, Mark, Player};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player holds a complete line,
/// `None` otherwise. Scanning stops at the first complete line.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    const LINES: [[Cell; 3]; 8] = [
        // Rows
        [Cell::new(0, 0), Cell::new(0, 1), Cell::new(0, 2)],
        [Cell::new(1, 0), Cell::new(1, 1), Cell::new(1, 2)],
        [Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)],
        // Columns
        [Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
        [Cell::new(0, 1), Cell::new(1, 1), Cell::new(2, 1)],
        [Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
        // Diagonals
        [Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)],
        [Cell::new(0, 2), Cell::new(1, 1), Cell::new(2, 0)],
    ];

    for [a, b, c] in LINES {
        let mark = board.marks()[a.index()];
        if mark != Mark::Empty
            && mark == board.marks()[b.index()]
            && mark == board.marks()[c.index()]
        {
            return mark.player();
        }
    }

    None
}
