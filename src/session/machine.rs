//! Move-input and turn-synchronization state machine.
//!
//! [`Session`] performs no I/O. Every action either returns a [`Request`]
//! for the caller to execute, or a [`Rejection`] when local gating refuses
//! it. The caller hands the outcome back through [`Session::complete`],
//! which is the only place session state changes.

use crate::service::{Request, RequestKind, Response, ServiceError};
use crate::session::state::SessionState;
use crate::teeko::{Coord, Difficulty, MoveDescriptor, Phase, Turn};
use derive_more::Display;
use tracing::{debug, info, instrument, warn};

/// Progress of a two-click slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No pending selection.
    #[default]
    Idle,
    /// Slide source chosen; the next click is the destination.
    PendingSource(Coord),
}

/// An action refused before any request was sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Rejection {
    /// The game is finished.
    #[display("Game is over.")]
    GameOver,
    /// A board click while the AI is to move.
    #[display("It's AI's turn!")]
    NotYourTurn,
    /// An AI move requested while the human is to move.
    #[display("It's not AI's turn!")]
    NotAiTurn,
    /// Slide source is not one of the player's pieces.
    #[display("You must select one of your pieces to move.")]
    NotYourPiece(Coord),
    /// Another request is still outstanding.
    #[display("Waiting for the server...")]
    Busy,
    /// No state has been fetched yet.
    #[display("Game state has not been loaded yet.")]
    NotLoaded,
}

impl std::error::Error for Rejection {}

/// What a board click amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First click of a slide; nothing is sent yet.
    SourceSelected(Coord),
    /// A complete move is ready to be sent.
    Submit(Request),
}

/// What a successful response did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// State query applied.
    Loaded,
    /// Move response applied.
    Moved,
    /// Game reset; local state discarded. The entry view takes over.
    ReturnToEntry,
    /// Difficulty accepted, with the service's confirmation.
    DifficultySet(String),
}

/// Failures surfaced by the session and its controller.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ControllerError {
    /// Local gating refused the action.
    #[display("{_0}")]
    Rejected(Rejection),
    /// The service or transport failed. Session state is unchanged.
    #[display("{}: {}", kind.failure_prefix(), error)]
    Service {
        /// Request that failed.
        kind: RequestKind,
        /// Underlying failure.
        error: ServiceError,
    },
    /// A response arrived that does not match the outstanding request.
    #[display("Unexpected response to {_0}")]
    UnexpectedResponse(RequestKind),
    /// A response arrived with no request outstanding.
    #[display("No request in flight")]
    NothingInFlight,
}

impl std::error::Error for ControllerError {}

impl From<Rejection> for ControllerError {
    fn from(rejection: Rejection) -> Self {
        ControllerError::Rejected(rejection)
    }
}

/// Client-side session: the authoritative snapshot plus transient input state.
///
/// The selection buffer and the busy flag live beside the snapshot, never
/// inside it, so replacing the snapshot cannot resurrect a stale selection.
#[derive(Debug, Default)]
pub struct Session {
    state: Option<SessionState>,
    input: InputState,
    in_flight: Option<RequestKind>,
}

impl Session {
    /// Creates a session with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Last snapshot from the service, if any.
    pub fn state(&self) -> Option<&SessionState> {
        self.state.as_ref()
    }

    /// Current input state.
    pub fn input(&self) -> InputState {
        self.input
    }

    /// Pending slide source, if one is selected.
    pub fn selected_cell(&self) -> Option<Coord> {
        match self.input {
            InputState::Idle => None,
            InputState::PendingSource(coord) => Some(coord),
        }
    }

    /// Request currently awaiting a response.
    pub fn in_flight(&self) -> Option<RequestKind> {
        self.in_flight
    }

    /// Returns true while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Phase of the loaded board.
    pub fn phase(&self) -> Option<Phase> {
        self.state.as_ref().map(SessionState::phase)
    }

    /// Prepares the initial (or re-entry) state query.
    #[instrument(skip(self))]
    pub fn query_state(&mut self) -> Result<Request, Rejection> {
        self.ensure_idle()?;
        Ok(self.issue(Request::QueryState))
    }

    /// Handles a click on `coord`.
    ///
    /// In the drop phase the click is a complete move. In the slide phase the
    /// first click picks the source and the second submits the slide; the
    /// selection is cleared as soon as the slide is submitted, whatever the
    /// service later says.
    #[instrument(skip(self), fields(coord = %coord))]
    pub fn click_cell(&mut self, coord: Coord) -> Result<ClickOutcome, Rejection> {
        self.ensure_idle()?;
        let state = self.state.as_ref().ok_or(Rejection::NotLoaded)?;
        if state.is_over() {
            warn!("Click ignored: game over");
            return Err(Rejection::GameOver);
        }
        if *state.turn() != Turn::Opponent {
            warn!(turn = %state.turn(), "Click ignored: not the player's turn");
            return Err(Rejection::NotYourTurn);
        }
        let phase = state.phase();
        let source_ok = state.board().get(coord).holds(*state.opponent_piece());

        match (phase, self.input) {
            (Phase::Drop, _) => {
                self.input = InputState::Idle;
                let request = self.issue(Request::OpponentMove(MoveDescriptor::Drop(coord)));
                Ok(ClickOutcome::Submit(request))
            }
            (Phase::Slide, InputState::Idle) => {
                if !source_ok {
                    warn!("Slide source is not the player's piece");
                    return Err(Rejection::NotYourPiece(coord));
                }
                debug!("Slide source selected");
                self.input = InputState::PendingSource(coord);
                Ok(ClickOutcome::SourceSelected(coord))
            }
            (Phase::Slide, InputState::PendingSource(source)) => {
                self.input = InputState::Idle;
                let descriptor = MoveDescriptor::slide(source, coord);
                let request = self.issue(Request::OpponentMove(descriptor));
                Ok(ClickOutcome::Submit(request))
            }
        }
    }

    /// Drops a pending slide source without sending anything.
    #[instrument(skip(self))]
    pub fn cancel_selection(&mut self) {
        if let InputState::PendingSource(coord) = self.input {
            debug!(coord = %coord, "Selection cancelled");
        }
        self.input = InputState::Idle;
    }

    /// Prepares an AI move, gated like a board click.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Result<Request, Rejection> {
        self.ensure_idle()?;
        let state = self.state.as_ref().ok_or(Rejection::NotLoaded)?;
        if state.is_over() {
            warn!("AI move ignored: game over");
            return Err(Rejection::GameOver);
        }
        if *state.turn() != Turn::Ai {
            warn!(turn = %state.turn(), "AI move ignored: not the AI's turn");
            return Err(Rejection::NotAiTurn);
        }
        Ok(self.issue(Request::AiMove))
    }

    /// Prepares a reset.
    #[instrument(skip(self))]
    pub fn request_reset(&mut self) -> Result<Request, Rejection> {
        self.ensure_idle()?;
        Ok(self.issue(Request::Reset))
    }

    /// Prepares a difficulty change.
    #[instrument(skip(self))]
    pub fn request_difficulty(&mut self, difficulty: Difficulty) -> Result<Request, Rejection> {
        self.ensure_idle()?;
        Ok(self.issue(Request::SetDifficulty(difficulty)))
    }

    /// Applies the outcome of the outstanding request.
    ///
    /// Success replaces the whole snapshot. Failure leaves it exactly as it
    /// was and only clears the busy flag.
    #[instrument(skip(self, outcome), fields(in_flight = ?self.in_flight))]
    pub fn complete(
        &mut self,
        outcome: Result<Response, ServiceError>,
    ) -> Result<Completion, ControllerError> {
        let kind = self.in_flight.take().ok_or_else(|| {
            warn!("Response arrived with nothing in flight");
            ControllerError::NothingInFlight
        })?;

        let response = match outcome {
            Ok(response) => response,
            Err(error) => {
                warn!(kind = %kind, error = ?error, "Request failed; state unchanged");
                return Err(ControllerError::Service { kind, error });
            }
        };

        match (kind, response) {
            (RequestKind::QueryState, Response::State(response)) => {
                self.replace(SessionState::from_state_response(response));
                Ok(Completion::Loaded)
            }
            (RequestKind::AiMove | RequestKind::OpponentMove, Response::Move(response)) => {
                let opponent_piece = match &self.state {
                    Some(state) => *state.opponent_piece(),
                    None => return Err(ControllerError::UnexpectedResponse(kind)),
                };
                self.replace(SessionState::from_move_response(response, opponent_piece));
                Ok(Completion::Moved)
            }
            (RequestKind::Reset, Response::Reset) => {
                info!("Game reset; discarding local state");
                self.state = None;
                self.input = InputState::Idle;
                Ok(Completion::ReturnToEntry)
            }
            (RequestKind::SetDifficulty, Response::Difficulty(response)) => {
                info!(message = %response.message, "Difficulty set");
                Ok(Completion::DifficultySet(response.message))
            }
            (kind, response) => {
                warn!(kind = %kind, response = ?response, "Response does not match request");
                Err(ControllerError::UnexpectedResponse(kind))
            }
        }
    }

    fn ensure_idle(&self) -> Result<(), Rejection> {
        match self.in_flight {
            Some(kind) => {
                debug!(in_flight = %kind, "Action rejected while busy");
                Err(Rejection::Busy)
            }
            None => Ok(()),
        }
    }

    fn issue(&mut self, request: Request) -> Request {
        info!(request = %request, "Issuing request");
        self.in_flight = Some(request.kind());
        request
    }

    fn replace(&mut self, state: SessionState) {
        debug!(
            turn = %state.turn(),
            status = %state.game_status(),
            phase = %state.phase(),
            "Replacing session state"
        );
        self.state = Some(state);
        self.input = InputState::Idle;
    }
}
