//! History bounds invariant: recorded moves name cells of the grid.

use super::Invariant;
use crate::board::Board;

/// Invariant: every recorded move lies within the grid.
///
/// Out-of-bounds attempts error before being recorded, so the history
/// only ever names real cells.
pub struct HistoryInBoundsInvariant;

impl Invariant<Board> for HistoryInBoundsInvariant {
    fn holds(board: &Board) -> bool {
        board.moves_made().iter().all(|cell| cell.in_bounds())
    }

    fn description() -> &'static str {
        "Every recorded move lies within the grid"
    }
}
