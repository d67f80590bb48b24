//! Stateless rendering helpers shared by the screens.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use teeko_client::{Board, Cell, Coord, Piece};

/// Width of the rendered board in terminal columns.
const BOARD_WIDTH: u16 = 27;
/// Height of the rendered board including its border.
const BOARD_HEIGHT: u16 = 12;

/// Splits the frame into title, body, status, message and help rows.
pub fn frame_layout(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Status
            Constraint::Length(1), // Message
            Constraint::Length(1), // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Renders the bold title bar.
pub fn draw_title(frame: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Renders the boxed status line.
pub fn draw_status(frame: &mut Frame, area: Rect, status: &str) {
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Renders the last user-visible message, if any.
pub fn draw_message(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let message = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(message, area);
    }
}

/// Renders the key help line.
pub fn draw_help(frame: &mut Frame, area: Rect, help: &str) {
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

/// Renders the 5x5 board with the cursor and pending selection highlighted.
pub fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Coord,
    selected: Option<Coord>,
) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let mut lines = Vec::with_capacity(board.rows().len() * 2);
    for (row, cells) in board.rows().iter().enumerate() {
        let mut spans = Vec::with_capacity(cells.len());
        for (col, cell) in cells.iter().enumerate() {
            let coord = Coord::new(row, col).unwrap_or(cursor);
            spans.push(cell_span(*cell, coord == cursor, Some(coord) == selected));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines.pop();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(paragraph, board_area);
}

fn cell_span(cell: Cell, is_cursor: bool, is_selected: bool) -> Span<'static> {
    let (symbol, base_style) = match cell {
        Cell::Empty => (" · ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Piece::Black) => (
            " ● ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Cell::Occupied(Piece::Red) => (
            " ● ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if is_selected {
        base_style.bg(Color::Yellow)
    } else if is_cursor {
        base_style.bg(Color::White)
    } else {
        base_style
    };

    Span::styled(format!("{} ", symbol), style)
}

/// Centers a `width` x `height` rectangle inside `area`.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
