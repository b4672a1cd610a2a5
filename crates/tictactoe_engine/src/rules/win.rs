//! Win detection logic for tic-tac-toe.

use crate::position::Position::{self, *};
use crate::types::{Board, GameStatus, Mark, WinningPattern};
use tracing::instrument;

/// The eight lines, in scan order.
pub const WINNING_PATTERNS: [WinningPattern; 8] = [
    // Rows
    WinningPattern::new([TopLeft, TopCenter, TopRight]),
    WinningPattern::new([MiddleLeft, Center, MiddleRight]),
    WinningPattern::new([BottomLeft, BottomCenter, BottomRight]),
    // Columns
    WinningPattern::new([TopLeft, MiddleLeft, BottomLeft]),
    WinningPattern::new([TopCenter, Center, BottomCenter]),
    WinningPattern::new([TopRight, MiddleRight, BottomRight]),
    // Diagonals
    WinningPattern::new([TopLeft, Center, BottomRight]),
    WinningPattern::new([TopRight, Center, BottomLeft]),
];

/// Scan order for players.
const PLAYERS: [Mark; 2] = [Mark::X, Mark::O];

/// Finds the winner of a board.
///
/// X is scanned before O, and within a player the patterns are tried in
/// [`WINNING_PATTERNS`] order; the first complete line is reported. Boards
/// that could not arise in play (two winners) still get this first match.
/// A full board without a line reports no winner.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> GameStatus {
    PLAYERS
        .iter()
        .find_map(|&player| {
            WINNING_PATTERNS
                .iter()
                .find(|pattern| owns_line(board, player, pattern.positions()))
                .map(|&pattern| GameStatus::won(player, pattern))
        })
        .unwrap_or_default()
}

fn owns_line(board: &Board, player: Mark, line: [Position; 3]) -> bool {
    line.iter().all(|&pos| board.mark_at(pos) == Some(player))
}
