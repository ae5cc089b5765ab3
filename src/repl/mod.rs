//! REPL Module
//!
//! The interactive front end: tokenizer, command table, per-session state
//! and the loop that ties them to the [`PokeApiClient`](crate::client::PokeApiClient).
//!
//! # Commands
//! - `help` - List commands
//! - `exit` - Leave the loop
//! - `map` / `mapb` - Page forward / back through location areas
//! - `explore <area>` - List Pokemon found in an area
//! - `catch <pokemon>` - Try to add a Pokemon to the Pokedex
//! - `inspect <pokemon>` - Show a caught Pokemon
//! - `pokedex` - List caught Pokemon

mod commands;
mod input;
mod runner;
mod session;

pub use commands::{Command, CommandRegistry, CommandSpec};
pub use input::clean_input;
pub use runner::{catch_probability, Flow, Repl, PROMPT};
pub use session::{Pokedex, Session};
