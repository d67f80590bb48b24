//! Async driver pairing a [`Session`] with a [`GameService`].

use crate::service::{GameService, Request, dispatch};
use crate::session::machine::{ClickOutcome, Completion, ControllerError, Session};
use crate::session::state::SessionState;
use crate::teeko::{Coord, Difficulty};
use tracing::{info, instrument};

/// Result of a board click driven to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickResult {
    /// First click of a slide; awaiting the destination.
    SourceSelected(Coord),
    /// A move was sent and its response applied.
    Completed(Completion),
}

/// Session controller that issues requests and awaits them in line.
///
/// Each call runs one request to completion before returning, so the
/// controller never has two requests outstanding.
#[derive(Debug)]
pub struct SessionController<S> {
    session: Session,
    service: S,
}

impl<S: GameService> SessionController<S> {
    /// Creates a controller with nothing loaded.
    pub fn new(service: S) -> Self {
        Self {
            session: Session::new(),
            service,
        }
    }

    /// Underlying state machine.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Last snapshot, if loaded.
    pub fn state(&self) -> Option<&SessionState> {
        self.session.state()
    }

    /// Service this controller talks to.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetches the authoritative state.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<Completion, ControllerError> {
        let request = self.session.query_state()?;
        self.execute(request).await
    }

    /// Handles a board click, sending the move when one is complete.
    #[instrument(skip(self), fields(coord = %coord))]
    pub async fn click(&mut self, coord: Coord) -> Result<ClickResult, ControllerError> {
        match self.session.click_cell(coord)? {
            ClickOutcome::SourceSelected(source) => Ok(ClickResult::SourceSelected(source)),
            ClickOutcome::Submit(request) => {
                self.execute(request).await.map(ClickResult::Completed)
            }
        }
    }

    /// Asks the AI to move.
    #[instrument(skip(self))]
    pub async fn ai_move(&mut self) -> Result<Completion, ControllerError> {
        let request = self.session.request_ai_move()?;
        self.execute(request).await
    }

    /// Resets the remote game and discards local state.
    #[instrument(skip(self))]
    pub async fn reset(&mut self) -> Result<Completion, ControllerError> {
        let request = self.session.request_reset()?;
        self.execute(request).await
    }

    /// Changes the AI difficulty.
    #[instrument(skip(self))]
    pub async fn set_difficulty(
        &mut self,
        difficulty: Difficulty,
    ) -> Result<Completion, ControllerError> {
        let request = self.session.request_difficulty(difficulty)?;
        self.execute(request).await
    }

    async fn execute(&mut self, request: Request) -> Result<Completion, ControllerError> {
        let outcome = dispatch(&self.service, request).await;
        let completion = self.session.complete(outcome)?;
        info!(request = %request, completion = ?completion, "Request completed");
        Ok(completion)
    }
}
