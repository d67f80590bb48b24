//! Shared fixtures for session tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use teeko_client::{
    Board, Difficulty, DifficultyResponse, GameService, GameStateResponse, GameStatus,
    MoveDescriptor, MoveResponse, Piece, Request, Response, ServiceError, Turn, Winner,
};

/// Parses a board fixture like `"b..../...../...../...../....."`.
pub fn board(rows: &str) -> Board {
    rows.parse().expect("valid board fixture")
}

/// Full state response with the human playing black.
pub fn state_response(rows: &str, turn: Turn) -> GameStateResponse {
    GameStateResponse {
        board: board(rows),
        game_status: GameStatus::InProgress,
        turn,
        opponent_piece: Piece::Black,
        winner: None,
    }
}

/// Finished-game state response.
pub fn over_response(rows: &str, winner: Winner) -> GameStateResponse {
    GameStateResponse {
        board: board(rows),
        game_status: GameStatus::Over,
        turn: Turn::Nobody,
        opponent_piece: Piece::Black,
        winner: Some(winner),
    }
}

/// Move response for a running game.
pub fn move_response(rows: &str, turn: Turn) -> MoveResponse {
    MoveResponse {
        board: board(rows),
        applied: Vec::new(),
        turn,
        game_status: GameStatus::InProgress,
        winner: None,
    }
}

/// A 400 with a detail message, as the service sends for illegal moves.
pub fn rejected(detail: &str) -> ServiceError {
    ServiceError::rejected(400, Some(detail.to_string()))
}

/// Four black and four red pieces: the first slide-phase position.
pub const SLIDE_BOARD: &str = "b.r../..br./...b./r..../..r.b";

/// [`SLIDE_BOARD`] after black slides (0, 0) to (1, 1).
pub const SLIDE_BOARD_AFTER: &str = "..r../.bbr./...b./r..../..r.b";

/// Game service double that replays scripted answers and records requests.
#[derive(Debug, Default)]
pub struct FakeService {
    script: Mutex<VecDeque<Result<Response, ServiceError>>>,
    requests: Mutex<Vec<Request>>,
}

impl FakeService {
    /// Creates a fake that will answer with `script`, in order.
    pub fn new(script: Vec<Result<Response, ServiceError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().expect("lock").clone()
    }

    fn answer(&self, request: Request) -> Result<Response, ServiceError> {
        self.requests.lock().expect("lock").push(request);
        self.script
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Err(ServiceError::Transport("script exhausted".to_string())))
    }
}

#[async_trait]
impl GameService for FakeService {
    async fn game_state(&self) -> Result<GameStateResponse, ServiceError> {
        match self.answer(Request::QueryState)? {
            Response::State(state) => Ok(state),
            other => panic!("scripted {other:?} for a state query"),
        }
    }

    async fn ai_move(&self) -> Result<MoveResponse, ServiceError> {
        match self.answer(Request::AiMove)? {
            Response::Move(response) => Ok(response),
            other => panic!("scripted {other:?} for an AI move"),
        }
    }

    async fn opponent_move(
        &self,
        descriptor: MoveDescriptor,
    ) -> Result<MoveResponse, ServiceError> {
        match self.answer(Request::OpponentMove(descriptor))? {
            Response::Move(response) => Ok(response),
            other => panic!("scripted {other:?} for an opponent move"),
        }
    }

    async fn reset(&self) -> Result<(), ServiceError> {
        match self.answer(Request::Reset)? {
            Response::Reset => Ok(()),
            other => panic!("scripted {other:?} for a reset"),
        }
    }

    async fn set_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<DifficultyResponse, ServiceError> {
        match self.answer(Request::SetDifficulty(difficulty))? {
            Response::Difficulty(response) => Ok(response),
            other => panic!("scripted {other:?} for a difficulty change"),
        }
    }
}
