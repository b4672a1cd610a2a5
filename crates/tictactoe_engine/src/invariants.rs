//! Invariants every reachable snapshot satisfies.
//!
//! Invariants are logical properties that must hold throughout a match.
//! They are testable independently and checked after each accepted move.

use crate::rules::check_winner;
use crate::types::{Game, Mark};
use tracing::instrument;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

/// X moves first, so there are as many X marks as O marks, or one more.
pub struct MarkBalance;

impl Invariant<Game> for MarkBalance {
    fn holds(game: &Game) -> bool {
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X count minus O count is 0 or 1"
    }
}

/// X is to move exactly when both players have placed the same number of marks.
pub struct TurnMatchesBoard;

impl Invariant<Game> for TurnMatchesBoard {
    fn holds(game: &Game) -> bool {
        let even = game.board().count(Mark::X) == game.board().count(Mark::O);
        (game.current_player() == Mark::X) == even
    }

    fn description() -> &'static str {
        "Player to move follows from the mark counts"
    }
}

/// The recorded status is the one the board produces.
pub struct StatusConsistent;

impl Invariant<Game> for StatusConsistent {
    fn holds(game: &Game) -> bool {
        let status = game.status();
        status.winner().is_some() == status.winning_pattern().is_some()
            && *status == check_winner(game.board())
    }

    fn description() -> &'static str {
        "Status matches the board and names a line iff it names a winner"
    }
}

/// All snapshot invariants as a composable set.
pub type GameInvariants = (MarkBalance, TurnMatchesBoard, StatusConsistent);

/// Checks every snapshot invariant.
#[instrument(skip(game))]
pub fn check_invariants(game: &Game) -> Result<(), Vec<InvariantViolation>> {
    GameInvariants::check_all(game)
}
