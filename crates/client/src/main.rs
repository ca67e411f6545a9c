//! `romshelf` -- terminal client for the romshelf game library.
//!
//! Talks to a running `romshelf-api` server through [`GamesClient`].
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                 | Description          |
//! |----------------|----------|-------------------------|----------------------|
//! | `ROMSHELF_URL` | no       | `http://localhost:3000` | API server base URL  |

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use romshelf_client::{ClientError, GamesClient};
use romshelf_core::game::{CreateGame, Game};
use romshelf_core::types::DbId;

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Terminal client for the romshelf game library
#[derive(Parser)]
#[command(name = "romshelf")]
#[command(about = "Terminal client for the romshelf game library")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the library
    List,

    /// Show one entry
    Show { id: DbId },

    /// Register a game
    Add {
        title: String,
        /// URL of the ROM image (.iso, .cso, .zip, .pbp)
        url: String,
        description: Option<String>,
    },

    /// Delete an entry
    Remove { id: DbId },

    /// Print the play-page URL for an entry
    Play { id: DbId },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "romshelf_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let base_url =
        std::env::var("ROMSHELF_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = GamesClient::new(base_url);

    let result = match cli.command {
        Commands::List => list(&client).await,
        Commands::Show { id } => show(&client, id).await,
        Commands::Add {
            title,
            url,
            description,
        } => add(&client, title, url, description).await,
        Commands::Remove { id } => remove(&client, id).await,
        Commands::Play { id } => play(&client, id).await,
    };

    if let Err(err) = result {
        match &err {
            ClientError::Validation { field, message } => {
                eprintln!("Invalid {field}: {message}");
            }
            ClientError::Api { message, .. } => eprintln!("Server error: {message}"),
            ClientError::Transport(_) => eprintln!("Could not reach the server: {err}"),
        }
        std::process::exit(1);
    }
}

async fn list(client: &GamesClient) -> Result<(), ClientError> {
    let games = client.list_games().await?;

    if games.is_empty() {
        println!("The library is empty. Add a game with `romshelf add`.");
        return Ok(());
    }

    for game in &games {
        print_row(game);
    }
    Ok(())
}

async fn show(client: &GamesClient, id: DbId) -> Result<(), ClientError> {
    match client.get_game(id).await? {
        Some(game) => {
            println!("{:>10}  {}", "id", game.id);
            println!("{:>10}  {}", "title", game.title);
            println!("{:>10}  {}", "platform", game.platform);
            println!("{:>10}  {}", "url", game.url);
            if let Some(description) = &game.description {
                println!("{:>10}  {description}", "about");
            }
            println!("{:>10}  {}", "added", game.created_at.format("%Y-%m-%d"));
        }
        None => println!("No game with id {id}."),
    }
    Ok(())
}

async fn add(
    client: &GamesClient,
    title: String,
    url: String,
    description: Option<String>,
) -> Result<(), ClientError> {
    let input = CreateGame {
        title,
        url,
        platform: None,
        description,
    };

    let game = client.create_game(&input).await?;
    println!("Added \"{}\" (id {}).", game.title, game.id);
    Ok(())
}

async fn remove(client: &GamesClient, id: DbId) -> Result<(), ClientError> {
    client.delete_game(id).await?;
    println!("Removed game {id} (if it existed).");
    Ok(())
}

async fn play(client: &GamesClient, id: DbId) -> Result<(), ClientError> {
    match client.get_game(id).await? {
        Some(game) => {
            println!("Play \"{}\" in your browser:", game.title);
            println!("  {}", client.play_url(game.id));
        }
        None => {
            println!("No game with id {id}.");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn print_row(game: &Game) {
    let description = game.description.as_deref().unwrap_or("");
    println!(
        "{:>4}  {:<30}  {:<6}  {}",
        game.id, game.title, game.platform, description
    );
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn non_numeric_id_is_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["romshelf", "show", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn add_accepts_optional_description() {
        let cli = Cli::try_parse_from(["romshelf", "add", "Cave Story", "http://x/y.iso"]).unwrap();
        match cli.command {
            Commands::Add { description, .. } => assert_eq!(description, None),
            _ => panic!("expected add command"),
        }

        let cli = Cli::try_parse_from([
            "romshelf",
            "add",
            "Cave Story",
            "http://x/y.iso",
            "A classic.",
        ])
        .unwrap();
        match cli.command {
            Commands::Add { description, .. } => {
                assert_eq!(description.as_deref(), Some("A classic."))
            }
            _ => panic!("expected add command"),
        }
    }
}
