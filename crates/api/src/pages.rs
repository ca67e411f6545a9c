//! Server-rendered library and play pages.
//!
//! The library page shows the game grid (or an empty-state prompt) with
//! an inline add-game form; the play page embeds the emulator bootstrap
//! from [`crate::player`]. Both pages talk to the JSON API for
//! mutations, so every state change flows through the same validated
//! boundary the programmatic clients use.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

use romshelf_core::game::Game;
use romshelf_core::types::DbId;
use romshelf_db::repositories::GameRepo;

use crate::player::PlayerConfig;
use crate::state::AppState;

/// Error type for the HTML routes.
///
/// The JSON API keeps its `{"message"}` bodies; a failure while
/// rendering a page gets an error page with a retry action instead.
#[derive(Debug)]
pub struct PageError(sqlx::Error);

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "Failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(render_error())).into_response()
    }
}

/// PSP buttons and their default keyboard bindings, shown below the
/// player as a static reference.
const CONTROL_MAPPING: [(&str, &str); 8] = [
    ("D-Pad", "Arrow Keys"),
    ("Circle", "X"),
    ("Cross", "Z"),
    ("Square", "A"),
    ("Triangle", "S"),
    ("L Trigger", "Q"),
    ("R Trigger", "W"),
    ("Start", "Enter"),
];

/// Mount the HTML pages at the root level.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(library_page))
        .route("/play/{id}", get(play_page))
}

/// GET / -- the library grid with the add-game form.
async fn library_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let games = GameRepo::list(&state.pool).await?;
    Ok(Html(render_library(&games)))
}

/// GET /play/{id} -- the embedded player, or a not-found page with a
/// link back to the library.
async fn play_page(
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> Result<Response, PageError> {
    match GameRepo::find_by_id(&state.pool, game_id).await? {
        Some(game) => {
            let player = PlayerConfig::for_game(&state.config.public_base_url, &game.url);
            Ok(Html(render_play(&game, &player)).into_response())
        }
        None => Ok((StatusCode::NOT_FOUND, Html(render_not_found())).into_response()),
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn render_library(games: &[Game]) -> String {
    let content = if games.is_empty() {
        r#"<p class="empty">No games yet. Add one below to get started.</p>"#.to_string()
    } else {
        let cards: String = games.iter().map(render_card).collect();
        format!(r#"<div class="grid">{cards}</div>"#)
    };

    page(
        "Romshelf",
        &format!(
            r#"<h1>Romshelf</h1>
{content}
<h2>Add a game</h2>
<form id="add-game">
  <label>Title <input name="title" type="text"></label>
  <label>ROM URL <input name="url" type="text" placeholder="https://.../game.iso"></label>
  <label>Description <input name="description" type="text"></label>
  <button type="submit">Add to library</button>
  <p id="add-error" class="error" hidden></p>
</form>
{ADD_AND_DELETE_SCRIPT}"#
        ),
    )
}

fn render_card(game: &Game) -> String {
    let title = escape_html(&game.title);
    let platform = escape_html(&game.platform);
    let description = game
        .description
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();
    let added = game.created_at.format("%Y-%m-%d");
    let id = game.id;

    format!(
        r#"<div class="card">
  <h3>{title}</h3>
  <p class="meta">{platform} &middot; added {added}</p>
  <p>{description}</p>
  <a href="/play/{id}">Play</a>
  <button class="delete" data-id="{id}" data-title="{title}">Delete</button>
</div>"#
    )
}

fn render_play(game: &Game, player: &PlayerConfig) -> String {
    let title = escape_html(&game.title);
    let platform = escape_html(&game.platform);
    let description = game
        .description
        .as_deref()
        .map(escape_html)
        .unwrap_or_default();

    let controls: String = CONTROL_MAPPING
        .iter()
        .map(|(button, key)| format!("<tr><td>{button}</td><td>{key}</td></tr>"))
        .collect();

    let bootstrap = player.render();

    page(
        &format!("{title} - Romshelf"),
        &format!(
            r#"<a href="/">&larr; Back to library</a>
<h1>{title}</h1>
<p class="meta">Platform: {platform}{sep}{description}</p>
<div id="game"></div>
{bootstrap}
<h2>Controls</h2>
<table class="controls"><tbody>{controls}</tbody></table>"#,
            sep = if description.is_empty() { "" } else { " &middot; " },
        ),
    )
}

fn render_not_found() -> String {
    page(
        "Game not found - Romshelf",
        r#"<h1>Game not found</h1>
<p>This entry no longer exists.</p>
<a href="/">Back to library</a>"#,
    )
}

fn render_error() -> String {
    page(
        "Something went wrong - Romshelf",
        r#"<h1>Something went wrong</h1>
<p>The library could not be loaded.</p>
<a href="">Try again</a> &middot; <a href="/">Back to library</a>"#,
    )
}

/// Common page shell.
fn page(title: &str, body: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
body {{ font-family: system-ui, sans-serif; max-width: 64rem; margin: 2rem auto; padding: 0 1rem; background: #111; color: #eee; }}
a {{ color: #7bf; }}
.grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(16rem, 1fr)); gap: 1rem; }}
.card {{ border: 1px solid #333; border-radius: .5rem; padding: 1rem; }}
.meta {{ color: #999; font-size: .85rem; }}
.empty {{ color: #999; }}
.error {{ color: #f77; }}
form label {{ display: block; margin: .5rem 0; }}
form input {{ width: 100%; max-width: 28rem; }}
#game {{ width: 100%; aspect-ratio: 16 / 9; background: #000; }}
table.controls td {{ border-bottom: 1px solid #333; padding: .25rem 1rem .25rem 0; }}
</style>
</head>
<body>
{body}
</body>
</html>
"#
    )
}

/// The add-form and delete-button wiring. Mutations go through the JSON
/// API; validation errors surface the server's `message` verbatim.
const ADD_AND_DELETE_SCRIPT: &str = r#"<script>
document.getElementById('add-game').addEventListener('submit', async (event) => {
  event.preventDefault();
  const form = event.target;
  const errorEl = document.getElementById('add-error');
  const body = {
    title: form.title.value,
    url: form.url.value,
    description: form.description.value || null,
  };
  const res = await fetch('/api/games', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    credentials: 'include',
    body: JSON.stringify(body),
  });
  if (res.status === 201) {
    form.reset();
    location.reload();
  } else if (res.status === 400) {
    const err = await res.json();
    errorEl.textContent = err.message;
    errorEl.hidden = false;
  } else {
    errorEl.textContent = 'Failed to add game';
    errorEl.hidden = false;
  }
});

for (const button of document.querySelectorAll('button.delete')) {
  button.addEventListener('click', async () => {
    if (!confirm('Delete "' + button.dataset.title + '" from the library?')) return;
    const res = await fetch('/api/games/' + button.dataset.id, {
      method: 'DELETE',
      credentials: 'include',
    });
    if (res.status === 204) location.reload();
  });
}
</script>"#;

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
