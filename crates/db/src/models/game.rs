//! Row mapping for the `games` table.
//!
//! The wire-facing [`Game`] type lives in `romshelf-core` so the client
//! crate can share it without pulling in sqlx; this module maps database
//! rows onto it.

use sqlx::FromRow;

use romshelf_core::game::Game;
use romshelf_core::types::{DbId, Timestamp};

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub platform: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: row.id,
            title: row.title,
            url: row.url,
            platform: row.platform,
            description: row.description,
            created_at: row.created_at,
        }
    }
}
