//! Core domain types for tic-tac-toe.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A player's symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Mark {
    /// Player X (moves first).
    #[display("X")]
    X,
    /// Player O (moves second).
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One cell of the board. Empty when `mark` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    position: Position,
    mark: Option<Mark>,
}

impl Tile {
    /// Position of this tile.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Mark on this tile, if any.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// Checks whether the tile carries no mark.
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }
}

/// The 3x3 board: nine tiles in row-major order.
///
/// Boards are values. Placing a mark yields a new board through
/// [`Board::with_mark`]; existing boards are never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    tiles: [Tile; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            tiles: Position::ALL.map(|position| Tile { position, mark: None }),
        }
    }

    /// Tile at the given position.
    pub fn tile(&self, pos: Position) -> Tile {
        self.tiles[pos.index()]
    }

    /// Mark at the given position, if any.
    pub fn mark_at(&self, pos: Position) -> Option<Mark> {
        self.tile(pos).mark
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.tile(pos).is_empty()
    }

    /// All tiles in board order.
    pub fn tiles(&self) -> &[Tile; 9] {
        &self.tiles
    }

    /// Number of tiles carrying `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.tiles.iter().filter(|t| t.mark == Some(mark)).count()
    }

    /// Number of occupied tiles.
    pub fn filled(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_empty()).count()
    }

    /// Checks if every tile is occupied.
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|t| !t.is_empty())
    }

    /// Returns a copy of this board with `mark` placed at `pos`.
    ///
    /// No legality check is made here; overwriting is the caller's concern.
    pub fn with_mark(&self, pos: Position, mark: Mark) -> Self {
        let mut tiles = self.tiles;
        tiles[pos.index()] = Tile {
            position: pos,
            mark: Some(mark),
        };
        Self { tiles }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let tile = self.tiles[row * 3 + col];
                match tile.mark {
                    Some(mark) => write!(f, "{}", mark)?,
                    None => write!(f, "{}", tile.position.index() + 1)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Three positions forming a row, column, or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningPattern([Position; 3]);

impl WinningPattern {
    pub(crate) const fn new(positions: [Position; 3]) -> Self {
        Self(positions)
    }

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Checks whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::index)
    }
}

/// Winner and the line that produced it.
///
/// Both fields are set together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameStatus {
    winner: Option<Mark>,
    winning_pattern: Option<WinningPattern>,
}

impl GameStatus {
    /// Status with no winner.
    pub const fn none() -> Self {
        Self {
            winner: None,
            winning_pattern: None,
        }
    }

    /// Status with `winner` completing `pattern`.
    pub const fn won(winner: Mark, pattern: WinningPattern) -> Self {
        Self {
            winner: Some(winner),
            winning_pattern: Some(pattern),
        }
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// The completed line, if any.
    pub fn winning_pattern(&self) -> Option<WinningPattern> {
        self.winning_pattern
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::none()
    }
}

/// A request to place a mark.
///
/// The engine stamps the mark of the player to move; `mark` is only
/// consulted by the strict policy of [`try_move`](crate::try_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target cell.
    pub position: Position,
    /// Mark the caller believes is being played.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(position: Position, mark: Mark) -> Self {
        Self { position, mark }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Derived view of where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner and at least one empty tile.
    InProgress,
    /// A line was completed.
    Won(Mark),
    /// Board full without a winner.
    Draw,
}

/// One immutable snapshot of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) current_player: Mark,
    pub(crate) status: GameStatus,
}

impl Game {
    /// Creates the opening snapshot: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            status: GameStatus::none(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Returns the win status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Where the game stands, including draws.
    pub fn outcome(&self) -> Outcome {
        match self.status.winner {
            Some(mark) => Outcome::Won(mark),
            None if self.board.is_full() => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Checks whether the game has a winner or a full board.
    pub fn is_over(&self) -> bool {
        self.outcome() != Outcome::InProgress
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for (i, tile) in board.tiles().iter().enumerate() {
            assert_eq!(tile.position().index(), i);
            assert!(tile.is_empty());
        }
        assert_eq!(board.filled(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(Position::Center, Mark::X);
        assert!(board.is_empty(Position::Center));
        assert_eq!(next.mark_at(Position::Center), Some(Mark::X));
        assert_eq!(next.count(Mark::X), 1);
        assert_eq!(next.count(Mark::O), 0);
    }

    #[test]
    fn test_board_display() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Mark::X)
            .with_mark(Position::Center, Mark::O);
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }

    #[test]
    fn test_status_json_shape() {
        let status = GameStatus::won(
            Mark::X,
            WinningPattern::new([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        );
        let json = serde_json::to_value(status).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "winner": "X", "winning_pattern": [0, 1, 2] })
        );
    }
}
