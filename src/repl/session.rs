//! Session state
//!
//! Pagination cursor and the caught-Pokemon collection for one run of the
//! loop. Nothing here outlives the process.

use std::collections::BTreeMap;

use crate::models::Pokemon;

/// Pokemon caught during this session, keyed by name.
#[derive(Debug, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same Pokemon again replaces the entry.
    pub fn add(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caught.contains_key(name)
    }

    /// Caught names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

/// Mutable context handed to each command.
#[derive(Debug)]
pub struct Session {
    /// Page `map` will show next; `None` once the last page was shown
    pub next: Option<String>,
    /// Page `mapb` will show; `None` on the first page
    pub previous: Option<String>,
    pub pokedex: Pokedex,
}

impl Session {
    /// Starts a session whose first `map` shows `first_page`.
    pub fn new(first_page: impl Into<String>) -> Self {
        Self {
            next: Some(first_page.into()),
            previous: None,
            pokedex: Pokedex::new(),
        }
    }

    /// Moves the cursor to the links of the page just shown.
    pub fn turn_page(&mut self, next: Option<String>, previous: Option<String>) {
        self.next = next;
        self.previous = previous;
    }
}
