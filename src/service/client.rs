//! HTTP client for the game service.

use super::GameService;
use super::error::ServiceError;
use super::protocol::{
    DifficultyRequest, DifficultyResponse, ErrorBody, GameStateResponse, MoveResponse,
    OpponentMoveRequest,
};
use crate::ClientConfig;
use crate::teeko::{Difficulty, MoveDescriptor};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Typed REST client for the Teeko game service.
#[derive(Debug, Clone)]
pub struct RestGameClient {
    base_url: String,
    client: reqwest::Client,
}

impl RestGameClient {
    /// Creates a client for `base_url` with the given request timeout.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                error!(error = %e, "Failed to build HTTP client");
                ServiceError::Transport(e.to_string())
            })?;
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!(base_url = %base_url, "Game service client ready");
        Ok(Self { base_url, client })
    }

    /// Creates a client from resolved configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ServiceError> {
        Self::new(config.base_url(), config.timeout())
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Checks the status and decodes the body, mapping failures to [`ServiceError`].
    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ServiceError> {
        let status = response.status();
        let body = response.text().await?;
        debug!(status = %status, body = %body, "Service response");

        if !status.is_success() {
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message());
            warn!(status = %status, detail = ?detail, "Service rejected request");
            return Err(ServiceError::rejected(status.as_u16(), detail));
        }

        serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %body, "Failed to decode service response");
            ServiceError::from(e)
        })
    }
}

#[async_trait]
impl GameService for RestGameClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn game_state(&self) -> Result<GameStateResponse, ServiceError> {
        debug!("Querying game state");
        let response = self.client.get(self.url("/")).send().await?;
        Self::read(response).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn ai_move(&self) -> Result<MoveResponse, ServiceError> {
        info!("Requesting AI move");
        let response = self.client.post(self.url("/ai-move/")).send().await?;
        Self::read(response).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url, descriptor = %descriptor))]
    async fn opponent_move(
        &self,
        descriptor: MoveDescriptor,
    ) -> Result<MoveResponse, ServiceError> {
        info!("Submitting opponent move");
        let response = self
            .client
            .post(self.url("/opponent-move/"))
            .json(&OpponentMoveRequest { descriptor })
            .send()
            .await?;
        Self::read(response).await
    }

    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn reset(&self) -> Result<(), ServiceError> {
        info!("Resetting game");
        let response = self.client.post(self.url("/reset/")).send().await?;
        // Reset body is not used; only the outcome matters.
        let _: serde_json::Value = Self::read(response).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(base_url = %self.base_url, difficulty = %difficulty))]
    async fn set_difficulty(
        &self,
        difficulty: Difficulty,
    ) -> Result<DifficultyResponse, ServiceError> {
        info!("Setting AI difficulty");
        let response = self
            .client
            .post(self.url("/set-difficulty/"))
            .json(&DifficultyRequest { difficulty })
            .send()
            .await?;
        Self::read(response).await
    }
}
