//! Cell conservation invariant: legal moves plus occupied cells cover the grid.

use super::Invariant;
use crate::board::Board;

/// Invariant: every cell is either a legal move or occupied.
///
/// `legal_moves().len() + occupied_count()` always equals the number
/// of cells on the board, so no cell is ever lost or double-counted.
pub struct CellConservationInvariant;

impl Invariant<Board> for CellConservationInvariant {
    fn holds(board: &Board) -> bool {
        board.legal_moves().len() + board.occupied_count() == Board::SIDE * Board::SIDE
    }

    fn description() -> &'static str {
        "Legal moves plus occupied cells cover the grid exactly"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, Player};

    #[test]
    fn test_fresh_board_holds() {
        let board = Board::new();
        assert!(CellConservationInvariant::holds(&board));
        assert_eq!(board.legal_moves().len(), 9);
    }

    #[test]
    fn test_holds_after_moves() {
        let mut board = Board::new();
        board.make_move(Cell::new(0, 0), Player::X).unwrap();
        board.make_move(Cell::new(2, 2), Player::O).unwrap();

        assert!(CellConservationInvariant::holds(&board));
        assert_eq!(board.legal_moves().len(), 7);
    }

    #[test]
    fn test_holds_after_rejected_attempt() {
        let mut board = Board::new();
        board.make_move(Cell::new(0, 0), Player::X).unwrap();
        board.make_move(Cell::new(0, 0), Player::O).unwrap(); // rejected

        assert!(CellConservationInvariant::holds(&board));
        assert_eq!(board.legal_moves().len(), 8);
    }

    #[test]
    fn test_holds_on_full_board() {
        let mut board = Board::new();
        for cell in Cell::all() {
            board.make_move(cell, Player::X).unwrap();
        }

        assert!(CellConservationInvariant::holds(&board));
        assert!(board.legal_moves().is_empty());
    }
}
