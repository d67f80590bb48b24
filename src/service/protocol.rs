//! Wire records exchanged with the game service.

use crate::teeko::{Board, Difficulty, GameStatus, MoveDescriptor, Piece, Turn, Winner};
use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateResponse {
    /// Current board.
    pub board: Board,
    /// Whether the game is still running.
    pub game_status: GameStatus,
    /// Whose move is expected.
    pub turn: Turn,
    /// Piece colour assigned to the human player.
    pub opponent_piece: Piece,
    /// Winner, once the game is over.
    pub winner: Option<Winner>,
}

/// Body returned by `POST /ai-move/` and `POST /opponent-move/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    /// Board after the move.
    pub board: Board,
    /// Echo of the move the service applied. Informational only.
    #[serde(rename = "move", default)]
    pub applied: Vec<Vec<Option<i64>>>,
    /// Whose move is expected next.
    pub turn: Turn,
    /// Whether the game is still running.
    pub game_status: GameStatus,
    /// Winner, once the game is over.
    pub winner: Option<Winner>,
}

/// Body of `POST /opponent-move/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentMoveRequest {
    /// Move in wire order.
    #[serde(rename = "move")]
    pub descriptor: MoveDescriptor,
}

/// Body of `POST /set-difficulty/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRequest {
    /// Requested level.
    pub difficulty: Difficulty,
}

/// Body returned by `POST /set-difficulty/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyResponse {
    /// Confirmation text.
    pub message: String,
}

/// Error body the service attaches to rejected requests.
///
/// `detail` is a string for rule violations but a structured list for
/// request validation failures, so it is kept as raw JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable reason, when present.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// Returns the detail when it is plain text.
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        }
    }
}
