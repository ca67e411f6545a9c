use romshelf_core::game::CreateGame;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Externally reachable base URL, used to absolutize relative ROM
    /// URLs for the embedded player (default: `http://localhost:3000`).
    pub public_base_url: String,
    /// Records inserted once when the `games` table is empty. Parsed
    /// from the `SEED_GAMES` env var (JSON array of creation inputs);
    /// defaults to a demo entry and an add-your-own placeholder.
    pub seed_games: Vec<CreateGame>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `PUBLIC_BASE_URL`      | `http://localhost:3000`    |
    /// | `SEED_GAMES`           | built-in two-record seed   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:3000".into());

        let seed_games = match std::env::var("SEED_GAMES") {
            Ok(raw) => serde_json::from_str(&raw)
                .expect("SEED_GAMES must be a JSON array of game creation inputs"),
            Err(_) => default_seed_games(),
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            public_base_url,
            seed_games,
        }
    }
}

/// The built-in first-run seed: one playable homebrew demo and one
/// placeholder telling the user how to add their own entries.
pub fn default_seed_games() -> Vec<CreateGame> {
    vec![
        CreateGame {
            title: "Cave Story (Homebrew)".to_string(),
            url: "https://archive.org/download/cave-00992-00000/cavestory.zip".to_string(),
            platform: Some("psp".to_string()),
            description: Some("A classic metroidvania style game ported to PSP.".to_string()),
        },
        CreateGame {
            title: "Add your own game".to_string(),
            url: "https://archive.org/details/softwarelibrary".to_string(),
            platform: Some("psp".to_string()),
            description: Some("Paste a URL to an ISO, CSO, or PBP file to play.".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_has_two_valid_records() {
        let seeds = default_seed_games();
        assert_eq!(seeds.len(), 2);
        for seed in &seeds {
            assert_eq!(seed.first_validation_error(), None);
        }
    }
}
