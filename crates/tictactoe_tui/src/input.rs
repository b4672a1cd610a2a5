//! Translation of terminal events into app actions.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_engine::Position;

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Claim a cell for the player to move.
    Play(Position),
    /// Claim the cell under the keyboard cursor.
    PlayAtCursor,
    /// Move the keyboard cursor.
    Cursor(KeyCode),
    /// Start a new game.
    Restart,
    /// Show or hide the JSON pane.
    ToggleJson,
    /// Leave the app.
    Quit,
}

/// Screen rectangles of the nine cells, as last drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardLayout {
    cells: [Rect; 9],
}

impl BoardLayout {
    /// Creates a layout from cell rectangles in board order.
    pub fn new(cells: [Rect; 9]) -> Self {
        Self { cells }
    }

    /// Rectangle of a cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.index()]
    }

    /// Cell under the given terminal coordinates.
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let r = self.cell(*pos);
            column >= r.x && column < r.right() && row >= r.y && row < r.bottom()
        })
    }
}

/// Maps a terminal event to an action.
pub fn action_for(event: &Event, layout: &BoardLayout) -> Option<Action> {
    match event {
        Event::Key(key) => action_for_key(key),
        Event::Mouse(mouse) => action_for_mouse(mouse, layout),
        _ => None,
    }
}

fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('j') => Some(Action::ToggleJson),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayAtCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::try_from(d as usize - 1).ok())
            .map(Action::Play),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => Some(Action::Cursor(code)),
        _ => None,
    }
}

fn action_for_mouse(mouse: &MouseEvent, layout: &BoardLayout) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => layout.position_at(mouse.column, mouse.row).map(Action::Play),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseEvent};
    use Position::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn grid() -> BoardLayout {
        // 3x3 cells of 5x3 starting at (10, 4).
        let cells = Position::ALL.map(|p| Rect::new(10 + 5 * p.col() as u16, 4 + 3 * p.row() as u16, 5, 3));
        BoardLayout::new(cells)
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_move_cursor() {
        assert_eq!(move_cursor(TopLeft, KeyCode::Right), TopCenter);
        assert_eq!(move_cursor(Center, KeyCode::Down), BottomCenter);
        assert_eq!(move_cursor(MiddleRight, KeyCode::Left), Center);
        assert_eq!(move_cursor(BottomLeft, KeyCode::Up), MiddleLeft);
    }

    #[test]
    fn test_move_cursor_stops_at_edges() {
        assert_eq!(move_cursor(TopLeft, KeyCode::Up), TopLeft);
        assert_eq!(move_cursor(TopLeft, KeyCode::Left), TopLeft);
        assert_eq!(move_cursor(BottomRight, KeyCode::Down), BottomRight);
        assert_eq!(move_cursor(BottomRight, KeyCode::Right), BottomRight);
    }

    #[test]
    fn test_digit_keys_play_cells() {
        let layout = grid();
        assert_eq!(action_for(&press(KeyCode::Char('1')), &layout), Some(Action::Play(TopLeft)));
        assert_eq!(action_for(&press(KeyCode::Char('9')), &layout), Some(Action::Play(BottomRight)));
        assert_eq!(action_for(&press(KeyCode::Char('0')), &layout), None);
    }

    #[test]
    fn test_command_keys() {
        let layout = grid();
        assert_eq!(action_for(&press(KeyCode::Char('q')), &layout), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Esc), &layout), Some(Action::Quit));
        assert_eq!(action_for(&press(KeyCode::Char('r')), &layout), Some(Action::Restart));
        assert_eq!(action_for(&press(KeyCode::Char('j')), &layout), Some(Action::ToggleJson));
        assert_eq!(action_for(&press(KeyCode::Enter), &layout), Some(Action::PlayAtCursor));
        assert_eq!(action_for(&press(KeyCode::Left), &layout), Some(Action::Cursor(KeyCode::Left)));
    }

    #[test]
    fn test_click_maps_to_cell() {
        let layout = grid();
        assert_eq!(action_for(&click(10, 4), &layout), Some(Action::Play(TopLeft)));
        assert_eq!(action_for(&click(17, 6), &layout), Some(Action::Play(TopCenter)));
        assert_eq!(action_for(&click(24, 12), &layout), Some(Action::Play(BottomRight)));
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let layout = grid();
        assert_eq!(action_for(&click(9, 4), &layout), None);
        assert_eq!(action_for(&click(25, 4), &layout), None);
        assert_eq!(action_for(&click(12, 13), &layout), None);
    }
}
