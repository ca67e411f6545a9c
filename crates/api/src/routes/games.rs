//! Route definitions for the game library, mounted at `/games`.
//!
//! ```text
//! GET    /        -> list_games
//! POST   /        -> create_game
//! GET    /{id}    -> get_game
//! DELETE /{id}    -> delete_game
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::games;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::list_games).post(games::create_game))
        .route("/{id}", get(games::get_game).delete(games::delete_game))
}
