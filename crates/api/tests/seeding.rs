//! Integration tests for first-run seeding of the game library.

use sqlx::PgPool;

use romshelf_api::config::default_seed_games;
use romshelf_api::seed::seed_if_empty;
use romshelf_core::game::CreateGame;
use romshelf_db::repositories::GameRepo;

// ---------------------------------------------------------------------------
// Test: an empty table receives exactly the configured seed records
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn empty_table_receives_two_seed_records(pool: PgPool) {
    let seeds = default_seed_games();
    let inserted = seed_if_empty(&pool, &seeds).await.unwrap();

    assert_eq!(inserted, 2);

    let games = GameRepo::list(&pool).await.unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].title, "Cave Story (Homebrew)");
    assert_eq!(games[1].title, "Add your own game");
}

// ---------------------------------------------------------------------------
// Test: re-running the seed against a non-empty table adds nothing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn seeding_is_idempotent(pool: PgPool) {
    let seeds = default_seed_games();
    seed_if_empty(&pool, &seeds).await.unwrap();

    let inserted = seed_if_empty(&pool, &seeds).await.unwrap();
    assert_eq!(inserted, 0);
    assert_eq!(GameRepo::count(&pool).await.unwrap(), 2);
}

// ---------------------------------------------------------------------------
// Test: any user-created record suppresses seeding on later startups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn user_records_suppress_seeding(pool: PgPool) {
    let user_game = CreateGame {
        title: "My Game".to_string(),
        url: "http://x/y.iso".to_string(),
        platform: None,
        description: None,
    };
    GameRepo::create(&pool, &user_game).await.unwrap();

    let inserted = seed_if_empty(&pool, &default_seed_games()).await.unwrap();
    assert_eq!(inserted, 0);

    let games = GameRepo::list(&pool).await.unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].title, "My Game");
}

// ---------------------------------------------------------------------------
// Test: seed content is configurable, not hard-coded
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn custom_seed_content_is_honoured(pool: PgPool) {
    let seeds = vec![CreateGame {
        title: "House Favourite".to_string(),
        url: "https://host/favourite.pbp".to_string(),
        platform: Some("psp".to_string()),
        description: None,
    }];

    let inserted = seed_if_empty(&pool, &seeds).await.unwrap();
    assert_eq!(inserted, 1);

    let games = GameRepo::list(&pool).await.unwrap();
    assert_eq!(games[0].title, "House Favourite");
}
