//! The `Game` entity and its creation schema.
//!
//! A game is a library entry pointing at a remotely or locally hosted ROM
//! image (`.iso`, `.cso`, `.zip`, `.pbp`). The URL is never checked for
//! reachability; it is handed verbatim to the embedded player.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{DbId, Timestamp};

/// Platform assigned when the creation input does not name one.
pub const DEFAULT_PLATFORM: &str = "psp";

/// A persisted library entry.
///
/// `id` and `created_at` are assigned by the persistence layer on insert
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub url: String,
    pub platform: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Creation input for a game, as accepted by `POST /api/games`.
///
/// `title` and `url` default to the empty string when absent from the
/// request body, so a missing field and an empty field fail the same
/// non-empty rule and report the same way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateGame {
    #[serde(default)]
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "URL is required"))]
    pub url: String,
    pub platform: Option<String>,
    pub description: Option<String>,
}

/// The first failed validation rule for a creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl CreateGame {
    /// The platform this entry targets, falling back to [`DEFAULT_PLATFORM`].
    pub fn platform_or_default(&self) -> &str {
        self.platform.as_deref().unwrap_or(DEFAULT_PLATFORM)
    }

    /// Validate and report only the first offending field.
    ///
    /// Fields are checked in declaration order (`title`, then `url`) so
    /// the reported field is deterministic even when both are invalid.
    pub fn first_validation_error(&self) -> Option<FieldError> {
        let errors = match self.validate() {
            Ok(()) => return None,
            Err(errors) => errors,
        };

        let by_field = errors.field_errors();
        for field in ["title", "url"] {
            if let Some(field_errors) = by_field.get(field) {
                if let Some(err) = field_errors.first() {
                    let message = err
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value for {field}"));
                    return Some(FieldError { field, message });
                }
            }
        }
        None
    }
}
