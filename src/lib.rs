//! Pokedex - A command-line client for a location and creature catalog
//!
//! Fronts the remote API with an in-memory response cache whose entries
//! expire after a fixed TTL.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
