//! Typed client for the romshelf API.
//!
//! [`GamesClient`] wraps the HTTP contract in the shared types from
//! `romshelf-core` and owns an explicit list cache that the two
//! mutations invalidate. No global state; construct one client and pass
//! it where it is needed.

pub mod cache;
pub mod client;
pub mod error;

pub use client::GamesClient;
pub use error::ClientError;
