//! Romshelf API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! seeding, pages, player adapter) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod player;
pub mod routes;
pub mod seed;
pub mod state;
