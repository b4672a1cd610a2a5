//! Application state and logic.

use crate::config::TuiConfig;
use crate::input::{Action, BoardLayout, move_cursor};
use tictactoe_engine::{Game, MovePolicy, Outcome, Position, initialize, move_for, try_move};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Holds exactly one snapshot. Accepted moves replace it; refused moves
/// leave it alone and explain why in the status line.
#[derive(Debug, Clone)]
pub struct App {
    game: Game,
    policy: MovePolicy,
    cursor: Position,
    status_message: String,
    show_json: bool,
    layout: BoardLayout,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        let game = initialize();
        Self {
            status_message: turn_message(&game),
            game,
            policy: *config.policy(),
            cursor: Position::Center,
            show_json: *config.show_json(),
            layout: BoardLayout::default(),
            should_quit: false,
        }
    }

    /// Gets the current snapshot.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Whether the JSON pane is visible.
    pub fn show_json(&self) -> bool {
        self.show_json
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Cell rectangles from the last draw.
    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    /// Records where the cells were drawn, for mouse hit-testing.
    pub fn set_layout(&mut self, layout: BoardLayout) {
        self.layout = layout;
    }

    /// Applies a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        match action {
            Action::Play(pos) => self.click(pos),
            Action::PlayAtCursor => self.click(self.cursor),
            Action::Cursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::Restart => self.restart(),
            Action::ToggleJson => self.show_json = !self.show_json,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
        }
    }

    /// Plays the player to move at `pos`, as a click on that cell would.
    #[instrument(skip(self), fields(player = %self.game.current_player()))]
    pub fn click(&mut self, pos: Position) {
        self.cursor = pos;
        match try_move(&self.game, move_for(&self.game, pos), self.policy) {
            Ok(next) => {
                debug!(position = %pos, "Move accepted");
                self.game = next;
                self.status_message = turn_message(&self.game);
            }
            Err(e) => {
                debug!(error = %e, "Move refused");
                self.status_message = format!("{}. {}", e, turn_message(&self.game));
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = initialize();
        self.cursor = Position::Center;
        self.status_message = turn_message(&self.game);
    }

    /// The snapshot as pretty JSON.
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string_pretty(&self.game).unwrap_or_else(|e| format!("<unserializable: {}>", e))
    }
}

fn turn_message(game: &Game) -> String {
    match game.outcome() {
        Outcome::InProgress => format!("{} to move", game.current_player()),
        Outcome::Won(mark) => format!("{} wins! Press 'r' to restart or 'q' to quit.", mark),
        Outcome::Draw => "Draw! Press 'r' to restart or 'q' to quit.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Mark;
    use Position::*;

    fn app(policy: MovePolicy) -> App {
        App::new(&TuiConfig::default().with_policy(policy))
    }

    #[test]
    fn test_new_app() {
        let app = app(MovePolicy::Permissive);
        assert_eq!(app.game(), &initialize());
        assert_eq!(app.status_message(), "X to move");
        assert!(!app.show_json());
    }

    #[test]
    fn test_click_replaces_snapshot() {
        let mut app = app(MovePolicy::Permissive);
        app.click(Center);
        assert_eq!(app.game().board().mark_at(Center), Some(Mark::X));
        assert_eq!(app.status_message(), "O to move");
    }

    #[test]
    fn test_click_on_occupied_keeps_snapshot() {
        let mut app = app(MovePolicy::Permissive);
        app.click(Center);
        let before = *app.game();
        app.click(Center);
        assert_eq!(app.game(), &before);
        assert_eq!(app.status_message(), "Square Center is already occupied. O to move");
    }

    #[test]
    fn test_win_message_and_strict_stop() {
        let mut app = app(MovePolicy::StopAtGameOver);
        for pos in [TopLeft, MiddleLeft, TopCenter, Center, TopRight] {
            app.click(pos);
        }
        assert_eq!(app.game().status().winner(), Some(Mark::X));
        assert!(app.status_message().starts_with("X wins!"));

        let won = *app.game();
        app.click(BottomRight);
        assert_eq!(app.game(), &won);
        assert!(app.status_message().starts_with("Game is already over"));
    }

    #[test]
    fn test_permissive_plays_on_after_win() {
        let mut app = app(MovePolicy::Permissive);
        for pos in [TopLeft, MiddleLeft, TopCenter, Center, TopRight, BottomRight] {
            app.click(pos);
        }
        assert_eq!(app.game().board().mark_at(BottomRight), Some(Mark::O));
    }

    #[test]
    fn test_keyboard_actions() {
        let mut app = app(MovePolicy::Permissive);
        app.handle(Action::Cursor(crossterm::event::KeyCode::Up));
        assert_eq!(app.cursor(), TopCenter);
        app.handle(Action::PlayAtCursor);
        assert_eq!(app.game().board().mark_at(TopCenter), Some(Mark::X));

        app.handle(Action::ToggleJson);
        assert!(app.show_json());

        app.handle(Action::Restart);
        assert_eq!(app.game(), &initialize());
        assert_eq!(app.cursor(), Center);

        app.handle(Action::Quit);
        assert!(app.should_quit());
    }

    #[test]
    fn test_snapshot_json() {
        let mut app = app(MovePolicy::Permissive);
        app.click(Center);
        let value: serde_json::Value = serde_json::from_str(&app.snapshot_json()).unwrap();
        assert_eq!(value["current_player"], "O");
        assert_eq!(value["board"]["tiles"][4]["mark"], "X");
    }
}
