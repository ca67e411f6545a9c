use serde::Deserialize;

/// Error body returned by the API for 400 and 404 responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub field: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a usable response (connection refused,
    /// timeout, malformed body).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A structured error response from the API.
    #[error("{message}")]
    Api {
        status: u16,
        message: String,
        field: Option<String>,
    },

    /// Input rejected locally before any request was sent.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },
}
