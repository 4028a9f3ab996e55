//! Tic-tac-toe rules engine.
//!
//! Pure game logic for a 3x3 board: cell state, move application,
//! legal-move enumeration, and win detection. Rendering, input
//! prompting, turn orchestration, and player decision-making belong
//! to whatever driver consumes this crate.
//!
//! Attempts on an occupied cell are recorded in the move history but
//! never applied and never error; the driver reads the
//! [`MoveOutcome`] to decide whether to re-prompt.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Board, Cell, MoveOutcome, Player};
//!
//! # fn main() -> Result<(), strictly_tictactoe::BoardError> {
//! let mut board = Board::new();
//! assert_eq!(board.make_move(Cell::new(0, 0), Player::X)?, MoveOutcome::Applied);
//! assert_eq!(board.make_move(Cell::new(0, 0), Player::O)?, MoveOutcome::Rejected);
//! assert!(board.winner().is_none());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod outcome;
mod types;

// Public rule and invariant surfaces
pub mod invariants;
pub mod rules;

// Crate-level exports - Board and domain types
pub use board::Board;
pub use types::{Cell, Mark, Player};

// Crate-level exports - Move outcomes and errors
pub use outcome::{BoardError, MoveOutcome};
