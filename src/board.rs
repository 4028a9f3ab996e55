//! The game board: authoritative state, move application, win detection.

use crate::invariants::{BoardInvariants, InvariantSet};
use crate::outcome::{BoardError, MoveOutcome};
use crate::rules;
use crate::types::{Cell, Mark, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// 3x3 tic-tac-toe board.
///
/// Owns the grid state and the attempt history. The board is mutated
/// only through [`Board::make_move`]; every other operation is a pure
/// query. Turn order, draw decisions, and rendering belong to the
/// driver consuming this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Marks in row-major order.
    pub(crate) marks: [Mark; 9],
    /// Every attempted move in application order, including attempts
    /// rejected for targeting an occupied cell.
    pub(crate) moves_made: Vec<Cell>,
}

impl Board {
    /// Side length of the grid.
    pub const SIDE: usize = 3;

    /// Creates a new empty board with no history.
    #[instrument]
    pub fn new() -> Self {
        Self {
            marks: [Mark::Empty; 9],
            moves_made: Vec::new(),
        }
    }

    /// Side length, for drivers that iterate or render the grid.
    pub fn side_size(&self) -> usize {
        Self::SIDE
    }

    /// Gets the mark at the given cell, or `None` out of bounds.
    pub fn mark(&self, cell: Cell) -> Option<Mark> {
        cell.in_bounds().then(|| self.marks[cell.index()])
    }

    /// Checks if a cell is within bounds and empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        matches!(self.mark(cell), Some(Mark::Empty))
    }

    /// All marks in row-major order.
    pub fn marks(&self) -> &[Mark; 9] {
        &self.marks
    }

    /// The grid as nested rows, for renderers.
    pub fn grid(&self) -> [[Mark; 3]; 3] {
        let mut grid = [[Mark::Empty; 3]; 3];
        for cell in Cell::all() {
            grid[cell.row][cell.col] = self.marks[cell.index()];
        }
        grid
    }

    /// Every attempted move in application order.
    pub fn moves_made(&self) -> &[Cell] {
        &self.moves_made
    }

    /// Returns all currently empty cells in row-major order.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Cell> {
        Cell::all().filter(|cell| self.is_empty(*cell)).collect()
    }

    /// Returns the most recently attempted move.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::EmptyHistory`] if no move has been made.
    pub fn last_move(&self) -> Result<Cell, BoardError> {
        self.moves_made
            .last()
            .copied()
            .ok_or(BoardError::EmptyHistory)
    }

    /// Applies a move for `player` at `cell`.
    ///
    /// The attempt is always appended to the history. If the cell is
    /// empty the mark is placed and the outcome is
    /// [`MoveOutcome::Applied`]; if it is occupied the grid is left
    /// unchanged and the outcome is [`MoveOutcome::Rejected`]. Whose
    /// turn it is, and whether the game is already decided, are not
    /// validated here.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if a coordinate lies
    /// outside the grid; nothing is recorded in that case.
    #[instrument(skip(self), fields(cell = %cell, player = ?player))]
    pub fn make_move(&mut self, cell: Cell, player: Player) -> Result<MoveOutcome, BoardError> {
        if !cell.in_bounds() {
            return Err(BoardError::OutOfBounds(cell));
        }

        let outcome = if self.is_empty(cell) {
            self.marks[cell.index()] = Mark::Taken(player);
            MoveOutcome::Applied
        } else {
            debug!("attempt on occupied cell recorded without effect");
            MoveOutcome::Rejected
        };
        self.moves_made.push(cell);

        self.assert_invariants();

        Ok(outcome)
    }

    /// Checks whether any winning line is complete.
    pub fn has_win(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns the player holding a complete line, if any.
    ///
    /// Computed directly from the grid, independent of move history,
    /// so it is correct whenever it is queried.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.marks.iter().filter(|mark| !mark.is_empty()).count()
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Postcondition check after mutation (debug builds only).
    fn assert_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = BoardInvariants::check_all(self) {
                for violation in &violations {
                    warn!(description = %violation.description, "Board invariant violated");
                }
                panic!("Board invariants violated after move");
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
