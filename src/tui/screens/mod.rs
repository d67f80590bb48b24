//! Screens of the terminal client.

mod entry;
mod game;

pub use entry::EntryScreen;
pub use game::GameScreen;
