//! Snapshot transitions.
//!
//! Every function here takes a snapshot by reference and returns a new one.
//! Nothing is mutated in place and no state is kept between calls.

use crate::error::MoveError;
#[cfg(debug_assertions)]
use crate::invariants::check_invariants;
use crate::position::Position;
use crate::rules::check_winner;
use crate::types::{Game, Move};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};
#[cfg(debug_assertions)]
use tracing::warn;

/// Returns the opening snapshot: empty board, X to move, no winner.
#[instrument]
pub fn initialize() -> Game {
    Game::new()
}

/// Checks whether the target tile of `mv` is empty.
///
/// Only the tile is inspected. The move's mark and a finished game are the
/// caller's concern.
#[instrument(skip(game), fields(position = %mv.position))]
pub fn is_move_allowed(game: &Game, mv: &Move) -> bool {
    game.board.is_empty(mv.position)
}

/// Applies a move, or returns `game` unchanged if the tile is taken.
///
/// The placed mark is always `game.current_player()`; `mv.mark` is ignored.
/// Moves after a win are accepted as long as the tile is empty.
#[instrument(skip(game), fields(position = %mv.position, player = %game.current_player))]
pub fn make_move(game: &Game, mv: Move) -> Game {
    if !is_move_allowed(game, &mv) {
        debug!("Square occupied, snapshot unchanged");
        return *game;
    }

    let board = game.board.with_mark(mv.position, game.current_player);
    let next = Game {
        board,
        current_player: game.current_player.opponent(),
        status: check_winner(&board),
    };
    #[cfg(debug_assertions)]
    if let Err(violations) = check_invariants(&next) {
        warn!(?violations, "Snapshot breaks game invariants");
    }

    debug!(winner = ?next.status.winner(), "Move applied");
    next
}

/// How strictly [`try_move`] treats moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MovePolicy {
    /// Accept whatever [`make_move`] accepts.
    #[default]
    Permissive,
    /// Also refuse moves once the game is over, and moves marked for the
    /// wrong player.
    StopAtGameOver,
}

impl std::str::FromStr for MovePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(MovePolicy::Permissive),
            "stop-at-game-over" => Ok(MovePolicy::StopAtGameOver),
            other => Err(format!("Unknown move policy: {}", other)),
        }
    }
}

/// Applies a move, reporting why it was refused instead of returning the
/// input unchanged.
///
/// Under [`MovePolicy::Permissive`] a successful result is exactly what
/// [`make_move`] would return.
///
/// # Errors
///
/// - [`MoveError::GameOver`] under `StopAtGameOver` when the game is won or the board full.
/// - [`MoveError::WrongMark`] under `StopAtGameOver` when `mv.mark` is not the player to move.
/// - [`MoveError::SquareOccupied`] when the tile is taken.
#[instrument(skip(game), fields(position = %mv.position, player = %game.current_player))]
pub fn try_move(game: &Game, mv: Move, policy: MovePolicy) -> Result<Game, MoveError> {
    if policy == MovePolicy::StopAtGameOver {
        if game.is_over() {
            return Err(MoveError::GameOver);
        }
        if mv.mark != game.current_player {
            return Err(MoveError::WrongMark {
                supplied: mv.mark,
                expected: game.current_player,
            });
        }
    }

    if !is_move_allowed(game, &mv) {
        return Err(MoveError::SquareOccupied(mv.position));
    }

    Ok(make_move(game, mv))
}

/// The move a click on `position` stands for: the player to move claims it.
pub fn move_for(game: &Game, position: Position) -> Move {
    Move::new(position, game.current_player)
}
