//! Teeko client library - play Teeko against a remote AI service.
//!
//! The game service owns the rules. This crate owns what happens on the
//! client side of each request: gating clicks on turn and game status,
//! collecting the two clicks of a slide, and replacing the local snapshot
//! with whatever the service answers.
//!
//! # Architecture
//!
//! - **Teeko**: board, coordinates, phase derivation, move descriptors
//! - **Service**: the [`GameService`] contract and its HTTP client
//! - **Session**: the sans-IO [`Session`] state machine and the async [`SessionController`]
//! - **Config**: [`ClientConfig`] from TOML, environment and flags
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use teeko_client::{Coord, RestGameClient, SessionController};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = RestGameClient::new("http://127.0.0.1:8000", Duration::from_secs(30))?;
//! let mut controller = SessionController::new(client);
//! controller.load().await?;
//! controller.click(Coord::new(2, 2)?).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod service;
mod session;
mod teeko;

// Crate-level exports - Configuration
pub use config::{BACKEND_URL_ENV, ClientConfig, ConfigError, DEFAULT_BASE_URL};

// Crate-level exports - Game service
pub use service::{
    DifficultyRequest, DifficultyResponse, ErrorBody, GENERIC_FAILURE, GameService,
    GameStateResponse, MoveResponse, OpponentMoveRequest, Request, RequestKind, Response,
    RestGameClient, ServiceError, dispatch,
};

// Crate-level exports - Session
pub use session::{
    ClickOutcome, ClickResult, Completion, ControllerError, InputState, Rejection, Session,
    SessionController, SessionState,
};

// Crate-level exports - Teeko types
pub use teeko::{
    BOARD_SIZE, Board, BoardError, Cell, Coord, CoordError, DescriptorLengthError, Difficulty,
    GameStatus, MoveDescriptor, PLACEMENT_QUOTA, Phase, Piece, Turn, Winner,
};
