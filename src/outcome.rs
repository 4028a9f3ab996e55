//! Move outcomes and the board error taxonomy.
//!
//! An attempt on an occupied cell is a recorded policy outcome, not an
//! error, so the outcome is a first-class type drivers can assert on.

use crate::types::Cell;

/// Result of applying a move to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// The cell was empty; the mark was placed.
    Applied,
    /// The cell was occupied; the attempt was recorded in the history
    /// but the grid is unchanged.
    Rejected,
}

impl MoveOutcome {
    /// Returns true if the move changed the grid.
    pub fn is_applied(self) -> bool {
        matches!(self, MoveOutcome::Applied)
    }
}

/// Error that can occur when querying or mutating the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// No move has been made yet.
    #[display("No moves have been made yet")]
    EmptyHistory,

    /// A coordinate lies outside the grid.
    #[display("Cell {} is outside the board", _0)]
    OutOfBounds(Cell),
}

impl std::error::Error for BoardError {}
