//! Errors reported by the strict move API.

use crate::position::Position;
use crate::types::Mark;

/// Why a move was refused.
///
/// The silent engine operations never produce these; they are reported by
/// [`try_move`](crate::try_move) and by position parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name one of the 9 cells.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    PositionOutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game already has a winner or the board is full.
    #[display("Game is already over")]
    GameOver,

    /// The move carries a mark other than the player to move.
    #[display("Move is marked {} but {} is to move", supplied, expected)]
    WrongMark {
        /// Mark supplied with the move.
        supplied: Mark,
        /// Mark of the player to move.
        expected: Mark,
    },
}

impl std::error::Error for MoveError {}
