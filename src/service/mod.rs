//! Contract with the remote game service.
//!
//! [`GameService`] is the seam the session drives; [`RestGameClient`] is the
//! HTTP implementation. [`Request`] and [`Response`] let callers hand a
//! pending request to another task and feed the outcome back later.

mod client;
mod error;
mod protocol;

pub use client::RestGameClient;
pub use error::{GENERIC_FAILURE, ServiceError};
pub use protocol::{
    DifficultyRequest, DifficultyResponse, ErrorBody, GameStateResponse, MoveResponse,
    OpponentMoveRequest,
};

use crate::teeko::{Difficulty, MoveDescriptor};
use async_trait::async_trait;
use derive_more::Display;
use tracing::instrument;

/// Operations the game service exposes.
#[async_trait]
pub trait GameService: Send + Sync {
    /// Fetches the full authoritative state.
    async fn game_state(&self) -> Result<GameStateResponse, ServiceError>;

    /// Asks the AI to play its move.
    async fn ai_move(&self) -> Result<MoveResponse, ServiceError>;

    /// Submits the human player's move.
    async fn opponent_move(&self, descriptor: MoveDescriptor)
    -> Result<MoveResponse, ServiceError>;

    /// Starts a fresh game on the service.
    async fn reset(&self) -> Result<(), ServiceError>;

    /// Changes the AI search depth.
    async fn set_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<DifficultyResponse, ServiceError>;
}

/// A request the session has decided to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Request {
    /// `GET /`
    #[display("query state")]
    QueryState,
    /// `POST /ai-move/`
    #[display("AI move")]
    AiMove,
    /// `POST /opponent-move/`
    #[display("opponent move ({_0})")]
    OpponentMove(MoveDescriptor),
    /// `POST /reset/`
    #[display("reset")]
    Reset,
    /// `POST /set-difficulty/`
    #[display("set difficulty ({_0})")]
    SetDifficulty(Difficulty),
}

impl Request {
    /// Kind of this request, without its payload.
    pub fn kind(&self) -> RequestKind {
        match self {
            Request::QueryState => RequestKind::QueryState,
            Request::AiMove => RequestKind::AiMove,
            Request::OpponentMove(_) => RequestKind::OpponentMove,
            Request::Reset => RequestKind::Reset,
            Request::SetDifficulty(_) => RequestKind::SetDifficulty,
        }
    }
}

/// Payload-free request tag, used for the busy flag and error prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum RequestKind {
    /// State query.
    QueryState,
    /// AI move.
    AiMove,
    /// Human move.
    OpponentMove,
    /// Reset.
    Reset,
    /// Difficulty change.
    SetDifficulty,
}

impl RequestKind {
    /// Prefix for user-visible failure messages.
    pub fn failure_prefix(self) -> &'static str {
        match self {
            RequestKind::QueryState => "Failed to fetch game state",
            RequestKind::AiMove => "Failed to process AI move",
            RequestKind::OpponentMove => "Invalid move",
            RequestKind::Reset => "Failed to reset game",
            RequestKind::SetDifficulty => "Failed to set difficulty",
        }
    }
}

/// Successful service answer, tagged by request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Answer to [`Request::QueryState`].
    State(GameStateResponse),
    /// Answer to [`Request::AiMove`] or [`Request::OpponentMove`].
    Move(MoveResponse),
    /// Answer to [`Request::Reset`].
    Reset,
    /// Answer to [`Request::SetDifficulty`].
    Difficulty(DifficultyResponse),
}

/// Executes `request` against `service`.
#[instrument(skip(service), fields(request = %request))]
pub async fn dispatch<S: GameService + ?Sized>(
    service: &S,
    request: Request,
) -> Result<Response, ServiceError> {
    match request {
        Request::QueryState => service.game_state().await.map(Response::State),
        Request::AiMove => service.ai_move().await.map(Response::Move),
        Request::OpponentMove(descriptor) => {
            service.opponent_move(descriptor).await.map(Response::Move)
        }
        Request::Reset => service.reset().await.map(|()| Response::Reset),
        Request::SetDifficulty(difficulty) => service
            .set_difficulty(difficulty)
            .await
            .map(Response::Difficulty),
    }
}
