//! Draw detection logic for tic-tac-toe.

use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument]
pub fn is_full(board: &Board) -> bool {
    board.marks().iter().all(|mark| !mark.is_empty())
}

/// Checks if the position is drawn: a full board with no winner.
///
/// Deciding when the game ends is the driver's call; this is the pure
/// predicate it consumes.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && super::win::check_winner(board).is_none()
}
