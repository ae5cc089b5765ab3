//! Error types for the Pokedex client
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; everything here comes from the fetch layer or the command loop.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the client and command loop.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Request could not be sent or its body could not be read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Origin answered with a non-success status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// Body was not the JSON shape we expected
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Terminal read or write failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Command needs an argument the user did not type
    #[error("Usage: {0}")]
    MissingArgument(String),

    /// Name would not form a single URL path segment
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Named Pokemon is not in the Pokedex
    #[error("You have not caught {0}")]
    NotCaught(String),

    /// `mapb` on the first page
    #[error("You're on the first page")]
    NoPreviousPage,

    /// `map` past the last page
    #[error("You're on the last page")]
    NoNextPage,
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex client.
pub type Result<T> = std::result::Result<T, PokedexError>;
