//! Response models for the remote catalog API
//!
//! These mirror the JSON returned by the location and creature endpoints.
//! Only the fields the client reads are declared; anything else in the
//! payload is ignored on decode.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
