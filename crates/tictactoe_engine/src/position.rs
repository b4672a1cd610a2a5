//! Board positions for tic-tac-toe moves.

use crate::error::MoveError;
use crate::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the 3x3 board, in row-major order (0-8).
///
/// Holding a `Position` proves the index is in range, so the engine never
/// has to bounds-check. Raw indices come in through `TryFrom<usize>`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(try_from = "usize", into = "usize")]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in board order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Board index of this position (0-8).
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Row of this position (0-2).
    pub const fn row(self) -> usize {
        self.index() / 3
    }

    /// Column of this position (0-2).
    pub const fn col(self) -> usize {
        self.index() % 3
    }

    /// Position at the given row and column, if both are in range.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Some(Self::ALL[row * 3 + col])
        } else {
            None
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Returns the empty positions of a board, in board order.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<usize> for Position {
    type Error = MoveError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(MoveError::PositionOutOfRange(index))
    }
}

impl From<Position> for usize {
    fn from(pos: Position) -> Self {
        pos.index()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.index(), i);
            assert_eq!(Position::ALL[i], pos);
        }
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Position::try_from(4usize), Ok(Position::Center));
        assert_eq!(Position::try_from(9usize), Err(MoveError::PositionOutOfRange(9)));
        assert_eq!(
            Position::try_from(usize::MAX),
            Err(MoveError::PositionOutOfRange(usize::MAX))
        );
    }

    #[test]
    fn test_row_col_round_trip() {
        assert_eq!(Position::BottomCenter.row(), 2);
        assert_eq!(Position::BottomCenter.col(), 1);
        assert_eq!(Position::from_row_col(1, 2), Some(Position::MiddleRight));
        assert_eq!(Position::from_row_col(3, 0), None);
    }

    #[test]
    fn test_serializes_as_index() {
        let json = serde_json::to_string(&Position::Center).unwrap();
        assert_eq!(json, "4");
        let back: Position = serde_json::from_str("8").unwrap();
        assert_eq!(back, Position::BottomRight);
        assert!(serde_json::from_str::<Position>("9").is_err());
    }
}
