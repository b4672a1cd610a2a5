//! Tic-tac-toe rule engine over immutable snapshots.
//!
//! A [`Game`] is one snapshot of a match: the board, the player to move and
//! the win status. The engine is a handful of pure functions that take a
//! snapshot and return the next one; callers hold the current snapshot and
//! replace it after each move.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Mark, Position, initialize, make_move, move_for};
//!
//! let mut game = initialize();
//! for pos in [0usize, 3, 1, 4, 2] {
//!     let pos = Position::try_from(pos)?;
//!     game = make_move(&game, move_for(&game, pos));
//! }
//! assert_eq!(game.status().winner(), Some(Mark::X));
//! assert_eq!(game.status().winning_pattern().map(|p| p.indices()), Some([0, 1, 2]));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod invariants;
mod position;
mod types;

pub mod rules;

pub use engine::{MovePolicy, initialize, is_move_allowed, make_move, move_for, try_move};
pub use error::MoveError;
pub use invariants::{
    GameInvariants, Invariant, InvariantSet, InvariantViolation, MarkBalance, StatusConsistent,
    TurnMatchesBoard, check_invariants,
};
pub use position::Position;
pub use rules::{WINNING_PATTERNS, check_winner, is_draw, is_full};
pub use types::{Board, Game, GameStatus, Mark, Move, Outcome, Tile, WinningPattern};
