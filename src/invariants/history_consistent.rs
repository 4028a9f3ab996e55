//! History consistency invariant: the history accounts for every occupied cell.

use super::Invariant;
use crate::board::Board;
use crate::types::Cell;

/// Invariant: every occupied cell was recorded as a move.
///
/// The history may be longer than the occupied count (rejected
/// attempts are recorded without effect), but a mark can never appear
/// on the grid without a corresponding history entry.
pub struct HistoryConsistentInvariant;

impl Invariant<Board> for HistoryConsistentInvariant {
    fn holds(board: &Board) -> bool {
        if board.occupied_count() > board.moves_made().len() {
            return false;
        }

        Cell::all()
            .filter(|cell| !board.marks()[cell.index()].is_empty())
            .all(|cell| board.moves_made().contains(&cell))
    }

    fn description() -> &'static str {
        "Every occupied cell appears in the move history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Mark, Player};

    #[test]
    fn test_fresh_board_holds() {
        let board = Board::new();
        assert!(HistoryConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_holds_after_moves() {
        let mut board = Board::new();
        board.make_move(Cell::new(0, 0), Player::X).unwrap();
        board.make_move(Cell::new(1, 1), Player::O).unwrap();

        assert!(HistoryConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_holds_with_rejected_attempts() {
        let mut board = Board::new();
        board.make_move(Cell::new(0, 0), Player::X).unwrap();
        board.make_move(Cell::new(0, 0), Player::O).unwrap(); // rejected
        board.make_move(Cell::new(0, 0), Player::O).unwrap(); // rejected

        // History is longer than the occupied count, which is fine
        assert_eq!(board.moves_made().len(), 3);
        assert_eq!(board.occupied_count(), 1);
        assert!(HistoryConsistentInvariant::holds(&board));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut board = Board::new();
        board.make_move(Cell::new(1, 1), Player::X).unwrap();

        // Corrupt the grid without recording a move
        board.marks[Cell::new(0, 0).index()] = Mark::Taken(Player::O);

        assert!(!HistoryConsistentInvariant::holds(&board));
    }
}
