//! The authoritative session snapshot.

use crate::service::{GameStateResponse, MoveResponse};
use crate::teeko::{Board, GameStatus, Phase, Piece, Turn, Winner};
use derive_getters::Getters;
use derive_new::new;
use tracing::instrument;

/// Snapshot of the game as last reported by the service.
///
/// The record is only ever replaced as a whole. Nothing in the client
/// edits individual fields or board cells.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct SessionState {
    /// Current board.
    board: Board,
    /// Whose move the service expects.
    turn: Turn,
    /// Whether the game is still running.
    game_status: GameStatus,
    /// Raw winner field; read it through [`SessionState::winner`].
    #[getter(skip)]
    winner: Option<Winner>,
    /// Piece colour of the human player, fixed for the session.
    opponent_piece: Piece,
}

impl SessionState {
    /// Builds the record from a state query.
    #[instrument(skip(response))]
    pub fn from_state_response(response: GameStateResponse) -> Self {
        Self::new(
            response.board,
            response.turn,
            response.game_status,
            response.winner,
            response.opponent_piece,
        )
    }

    /// Builds the record from a move response.
    ///
    /// Move responses omit the opponent piece, so the session's piece is carried over.
    #[instrument(skip(response))]
    pub fn from_move_response(response: MoveResponse, opponent_piece: Piece) -> Self {
        Self::new(
            response.board,
            response.turn,
            response.game_status,
            response.winner,
            opponent_piece,
        )
    }

    /// Returns true once the service has declared the game over.
    pub fn is_over(&self) -> bool {
        self.game_status == GameStatus::Over
    }

    /// Winner of a finished game; `None` while the game is running.
    pub fn winner(&self) -> Option<Winner> {
        if self.is_over() { self.winner } else { None }
    }

    /// Piece colour played by the AI.
    pub fn ai_piece(&self) -> Piece {
        self.opponent_piece.other()
    }

    /// Current phase, derived from the board on every call.
    pub fn phase(&self) -> Phase {
        Phase::of(&self.board)
    }
}
