//! The typed API client.

use reqwest::StatusCode;

use romshelf_core::game::{CreateGame, Game};
use romshelf_core::types::DbId;

use crate::cache::ListCache;
use crate::error::{ApiErrorBody, ClientError};

/// Client for the romshelf game-library API.
///
/// Holds its own [`ListCache`]; `create_game` and `delete_game`
/// invalidate it so the next `list_games` refetches.
pub struct GamesClient {
    http: reqwest::Client,
    base_url: String,
    cache: ListCache,
}

impl GamesClient {
    /// Build a client for the API at `base_url` (no trailing `/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: ListCache::new(),
        }
    }

    /// The library page URL for a game on the server this client targets.
    pub fn play_url(&self, id: DbId) -> String {
        format!("{}/play/{id}", self.base_url)
    }

    /// Fetch the whole library, serving the cached copy when one is held.
    pub async fn list_games(&self) -> Result<Vec<Game>, ClientError> {
        if let Some(cached) = self.cache.get() {
            tracing::debug!(count = cached.len(), "Serving game list from cache");
            return Ok(cached);
        }

        let response = self
            .http
            .get(format!("{}/api/games", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let games: Vec<Game> = response.json().await?;
        self.cache.store(games.clone());
        Ok(games)
    }

    /// Fetch a single game.
    ///
    /// A 404 is a typed absence (`Ok(None)`), not an error; any other
    /// non-success status is.
    pub async fn get_game(&self, id: DbId) -> Result<Option<Game>, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/games/{id}", self.base_url))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        Ok(Some(response.json().await?))
    }

    /// Create a game.
    ///
    /// Validates locally first for immediate feedback, using the same
    /// shared schema the server enforces, then submits and parses either
    /// the 201 record or the 400 `{message, field}` body. Invalidates
    /// the list cache on success.
    pub async fn create_game(&self, input: &CreateGame) -> Result<Game, ClientError> {
        if let Some(err) = input.first_validation_error() {
            return Err(ClientError::Validation {
                field: err.field.to_string(),
                message: err.message,
            });
        }

        let response = self
            .http
            .post(format!("{}/api/games", self.base_url))
            .json(input)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        let game: Game = response.json().await?;
        self.cache.invalidate();
        Ok(game)
    }

    /// Delete a game (idempotent server-side). Invalidates the list
    /// cache on success.
    pub async fn delete_game(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/api/games/{id}", self.base_url))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        self.cache.invalidate();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &ListCache {
        &self.cache
    }
}

/// Turn a non-success response into a [`ClientError::Api`], using the
/// structured body when the server sent one.
async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();

    match response.json::<ApiErrorBody>().await {
        Ok(body) => ClientError::Api {
            status,
            message: body.message,
            field: body.field,
        },
        Err(_) => ClientError::Api {
            status,
            message: format!("Request failed with status {status}"),
            field: None,
        },
    }
}
