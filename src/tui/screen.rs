//! Screen trait and the actions screens hand back to the app.

use crossterm::event::KeyEvent;
use ratatui::Frame;
use teeko_client::{Coord, Difficulty, Session};

/// The result of handling a key on a screen.
///
/// Screens never touch the session themselves; the [`App`](super::app::App)
/// turns these into session actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    /// Nothing to do.
    Stay,
    /// Exit the client.
    Quit,
    /// Send the chosen difficulty, then enter the game.
    ChooseDifficulty(Difficulty),
    /// Enter the game without changing difficulty.
    EnterGame,
    /// Re-query the game state.
    Reload,
    /// Click the given board cell.
    ClickCell(Coord),
    /// Ask the AI to move.
    AiMove,
    /// Reset the game.
    Reset,
    /// Drop a pending slide source.
    CancelSelection,
}

/// Implemented by each screen of the client.
pub trait Screen {
    /// Renders the screen.
    fn render(&self, frame: &mut Frame, session: &Session, message: Option<&str>);

    /// Maps a key press to an action.
    fn handle_key(&mut self, key: KeyEvent) -> ScreenAction;
}
