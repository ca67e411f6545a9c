pub mod games;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /games            list, create
/// /games/{id}       get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/games", games::router())
}
