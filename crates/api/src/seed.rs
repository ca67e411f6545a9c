//! One-time startup seeding of the game library.

use romshelf_core::game::CreateGame;
use romshelf_db::repositories::GameRepo;
use romshelf_db::DbPool;

/// Insert the configured seed records if, and only if, the `games`
/// table is empty. Returns the number of records inserted.
///
/// The `count == 0` guard makes this idempotent across restarts: once
/// the library holds anything (seeded or user-created), startup never
/// inserts again.
pub async fn seed_if_empty(pool: &DbPool, seeds: &[CreateGame]) -> Result<usize, sqlx::Error> {
    if GameRepo::count(pool).await? > 0 {
        return Ok(0);
    }

    for seed in seeds {
        GameRepo::create(pool, seed).await?;
    }

    tracing::info!(count = seeds.len(), "Seeded empty game library");
    Ok(seeds.len())
}
