//! Client Module
//!
//! HTTP access to the catalog API, fronted by the response cache.
//!
//! # Endpoints
//! - `GET /location-area?offset=&limit=` - Paginated area listing
//! - `GET /location-area/{name}` - One area with its encounters
//! - `GET /pokemon/{name}` - One Pokemon

mod poke_api;

pub use poke_api::PokeApiClient;
