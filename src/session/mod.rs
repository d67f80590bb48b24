//! Session state, the move-input state machine and its async driver.

mod controller;
mod machine;
mod state;

pub use controller::{ClickResult, SessionController};
pub use machine::{ClickOutcome, Completion, ControllerError, InputState, Rejection, Session};
pub use state::SessionState;
