//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use crate::input::BoardLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};
use tictactoe_engine::{Game, Mark, Position};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Draws the whole screen and returns where the cells ended up.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let [title_area, body, status_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(BOARD_HEIGHT),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let board_area = if app.show_json() {
        let [board_area, json_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
        draw_json(frame, json_area, app);
        board_area
    } else {
        body
    };
    let layout = draw_board(frame, board_area, app.game(), app.cursor());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    layout
}

/// Computes cell rectangles for a board centered in `area`.
pub fn board_layout(area: Rect) -> BoardLayout {
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let cells = Position::ALL.map(|pos| {
        // One separator line/column between cells.
        let x = board.x + pos.col() as u16 * (CELL_WIDTH + 1);
        let y = board.y + pos.row() as u16 * (CELL_HEIGHT + 1);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area)
    });
    BoardLayout::new(cells)
}

fn draw_board(frame: &mut Frame, area: Rect, game: &Game, cursor: Position) -> BoardLayout {
    let layout = board_layout(area);
    let board = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    for row in 1..3u16 {
        let y = board.y + row * (CELL_HEIGHT + 1) - 1;
        draw_separator(frame, Rect::new(board.x, y, board.width, 1).intersection(area));
    }
    for col in 1..3u16 {
        let x = board.x + col * (CELL_WIDTH + 1) - 1;
        draw_separator_vertical(frame, Rect::new(x, board.y, 1, board.height).intersection(area));
    }

    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), game, pos, pos == cursor);
    }

    layout
}

fn draw_cell(frame: &mut Frame, area: Rect, game: &Game, pos: Position, under_cursor: bool) {
    let winning = game
        .status()
        .winning_pattern()
        .is_some_and(|pattern| pattern.contains(pos));

    let (symbol, mut style) = match game.board().mark_at(pos) {
        None => ((pos.index() + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Some(Mark::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Mark::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    if winning {
        style = style.bg(Color::Green);
    }
    if under_cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_json(frame: &mut Frame, area: Rect, app: &App) {
    let json = Paragraph::new(app.snapshot_json())
        .wrap(Wrap { trim: false })
        .block(Block::default().title("Snapshot").borders(Borders::ALL));
    frame.render_widget(json, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = (0..area.height).map(|_| Line::from("│")).collect();
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
