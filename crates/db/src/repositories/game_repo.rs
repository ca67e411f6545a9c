//! Repository for the `games` table.
//!
//! Validation happens upstream at the API boundary; this layer assumes
//! already-validated input and only talks SQL.

use sqlx::PgPool;

use romshelf_core::game::{CreateGame, Game};
use romshelf_core::types::DbId;

use crate::models::GameRow;

/// Column list for `games` queries.
const GAME_COLUMNS: &str = "id, title, url, platform, description, created_at";

/// Provides data access for the game library.
pub struct GameRepo;

impl GameRepo {
    /// List all games in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        let query = format!("SELECT {GAME_COLUMNS} FROM games ORDER BY id");
        let rows = sqlx::query_as::<_, GameRow>(&query).fetch_all(pool).await?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    /// Find a game by its ID.
    ///
    /// Absence is a plain `None`, never an error.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Game>, sqlx::Error> {
        let query = format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1");
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Game::from))
    }

    /// Insert a game and return the persisted record with its assigned
    /// `id` and `created_at`.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, url, platform, description) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {GAME_COLUMNS}"
        );
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(input.platform_or_default())
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        Ok(Game::from(row))
    }

    /// Delete a game by ID. Returns whether a row was removed; deleting
    /// a missing ID is a no-op, not an error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all games. Used by the startup seed guard.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM games")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
