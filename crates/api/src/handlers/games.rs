//! Handlers for the game library CRUD endpoints.
//!
//! Validation happens once here at the boundary using the shared schema
//! from `romshelf-core`; the repository below assumes valid input.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use romshelf_core::error::CoreError;
use romshelf_core::game::CreateGame;
use romshelf_core::types::DbId;
use romshelf_db::repositories::GameRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/games
///
/// List the whole library as a bare JSON array.
pub async fn list_games(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let games = GameRepo::list(&state.pool).await?;

    Ok(Json(games))
}

/// GET /api/games/{id}
///
/// Fetch a single game, or 404 with `{"message": "Game not found"}`.
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = GameRepo::find_by_id(&state.pool, game_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Game",
            id: game_id,
        }))?;

    Ok(Json(game))
}

/// POST /api/games
///
/// Validate the creation input and insert a new game. Responds 201 with
/// the persisted record, or 400 naming the first invalid field.
pub async fn create_game(
    State(state): State<AppState>,
    Json(input): Json<CreateGame>,
) -> AppResult<impl IntoResponse> {
    if let Some(err) = input.first_validation_error() {
        return Err(AppError::Core(CoreError::Validation {
            field: err.field.to_string(),
            message: err.message,
        }));
    }

    let game = GameRepo::create(&state.pool, &input).await?;

    tracing::info!(game_id = game.id, title = %game.title, "Game created");

    Ok((StatusCode::CREATED, Json(game)))
}

/// DELETE /api/games/{id}
///
/// Hard-delete a game. Idempotent: responds 204 whether or not the id
/// existed.
pub async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = GameRepo::delete(&state.pool, game_id).await?;

    if deleted {
        tracing::info!(game_id, "Game deleted");
    }

    Ok(StatusCode::NO_CONTENT)
}
