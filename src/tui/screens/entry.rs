//! Entry screen - choose the AI difficulty before playing.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use teeko_client::{Difficulty, Session};
use tracing::{debug, instrument};

use crate::tui::screen::{Screen, ScreenAction};
use crate::tui::ui;

/// Difficulty picker shown on start and after every reset.
#[derive(Debug, Default)]
pub struct EntryScreen {
    selected: usize,
}

impl EntryScreen {
    /// Creates the screen with the first level highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    fn levels() -> Vec<Difficulty> {
        Difficulty::iter().collect()
    }
}

impl Screen for EntryScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, session: &Session, message: Option<&str>) {
        let [title, body, status, message_area, help] = ui::frame_layout(frame.area());
        ui::draw_title(frame, title, "Teeko");

        let mut lines = vec![Line::from("Select the difficulty level:"), Line::from("")];
        for (idx, level) in Self::levels().into_iter().enumerate() {
            let style = if idx == self.selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(Line::styled(
                format!("  {}  (depth {})  ", level.label(), level.search_depth()),
                style,
            ));
        }
        let list = Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("New game"));
        frame.render_widget(list, ui::center_rect(body, 40, 8));

        let status_text = if session.is_busy() {
            "Contacting the game server..."
        } else {
            "Choose how strong the AI should play."
        };
        ui::draw_status(frame, status, status_text);
        ui::draw_message(frame, message_area, message);
        ui::draw_help(frame, help, "↑/↓ choose  Enter confirm  s skip  q quit");
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        let count = Self::levels().len();
        match key.code {
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                ScreenAction::Stay
            }
            KeyCode::Down => {
                self.selected = (self.selected + 1).min(count - 1);
                ScreenAction::Stay
            }
            KeyCode::Enter => match Self::levels().get(self.selected) {
                Some(level) => {
                    debug!(difficulty = %level, "Difficulty chosen");
                    ScreenAction::ChooseDifficulty(*level)
                }
                None => ScreenAction::Stay,
            },
            KeyCode::Char('s') => ScreenAction::EnterGame,
            KeyCode::Char('q') | KeyCode::Char('Q') => ScreenAction::Quit,
            _ => ScreenAction::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_enter_chooses_highlighted_level() {
        let mut screen = EntryScreen::new();
        screen.handle_key(press(KeyCode::Down));
        screen.handle_key(press(KeyCode::Down));
        screen.handle_key(press(KeyCode::Down));
        assert_eq!(
            screen.handle_key(press(KeyCode::Enter)),
            ScreenAction::ChooseDifficulty(Difficulty::Expert)
        );
    }

    #[test]
    fn test_skip_enters_game() {
        let mut screen = EntryScreen::new();
        assert_eq!(screen.handle_key(press(KeyCode::Char('s'))), ScreenAction::EnterGame);
    }
}
