//! Game screen - the board, turn status and move input.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use teeko_client::{Coord, Phase, Session, SessionState, Turn, Winner};
use tracing::instrument;

use crate::tui::input::move_cursor;
use crate::tui::screen::{Screen, ScreenAction};
use crate::tui::ui;

/// Board view with a keyboard cursor.
#[derive(Debug)]
pub struct GameScreen {
    cursor: Coord,
}

impl GameScreen {
    /// Creates the screen with the cursor on the centre cell.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self {
            cursor: Coord::CENTER,
        }
    }
}

fn status_line(session: &Session) -> String {
    let busy = if session.is_busy() {
        "  (waiting for server…)"
    } else {
        ""
    };
    let Some(state) = session.state() else {
        return if session.is_busy() {
            "Loading game state…".to_string()
        } else {
            "No game loaded. Press 'l' to load.".to_string()
        };
    };
    if state.is_over() {
        return format!("{}{}", Winner::banner(state.winner()), busy);
    }
    format!(
        "Turn: {}   Phase: {}   You play: {}{}{}",
        turn_label(state),
        state.phase(),
        state.opponent_piece(),
        selection_hint(session, state),
        busy
    )
}

fn turn_label(state: &SessionState) -> &'static str {
    match state.turn() {
        Turn::Opponent => "You",
        Turn::Ai => "AI (press 'a')",
        Turn::Nobody => "-",
    }
}

fn selection_hint(session: &Session, state: &SessionState) -> String {
    match (state.phase(), session.selected_cell()) {
        (Phase::Slide, Some(source)) => format!("   Moving {} → ?", source),
        _ => String::new(),
    }
}

impl Screen for GameScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, session: &Session, message: Option<&str>) {
        let [title, body, status, message_area, help] = ui::frame_layout(frame.area());
        ui::draw_title(frame, title, "Teeko Game");

        if let Some(state) = session.state() {
            ui::draw_board(frame, body, state.board(), self.cursor, session.selected_cell());
        }

        ui::draw_status(frame, status, &status_line(session));
        ui::draw_message(frame, message_area, message);
        ui::draw_help(
            frame,
            help,
            "arrows move  Enter/Space place  Esc deselect  a AI move  r reset  l reload  q quit",
        );
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenAction::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => ScreenAction::ClickCell(self.cursor),
            KeyCode::Esc => ScreenAction::CancelSelection,
            KeyCode::Char('a') => ScreenAction::AiMove,
            KeyCode::Char('r') => ScreenAction::Reset,
            KeyCode::Char('l') => ScreenAction::Reload,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}
