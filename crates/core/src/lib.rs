//! Shared domain types for the romshelf game library.
//!
//! Defines the `Game` entity, the creation input schema, and the
//! validation rules enforced at both the API boundary and the client.
//! This crate is the single source of truth for the wire contract.

pub mod error;
pub mod game;
pub mod types;

pub use error::CoreError;
pub use game::{CreateGame, FieldError, Game};
