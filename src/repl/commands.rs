//! Command table
//!
//! The set of commands the loop understands. Built explicitly and owned by
//! the [`Repl`](super::Repl) rather than living in a global.

use std::collections::BTreeMap;

/// Every command the loop can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// Name, help text and usage line for one command.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub command: Command,
    pub name: &'static str,
    pub description: &'static str,
    pub usage: &'static str,
}

const BUILTIN_COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        command: Command::Help,
        name: "help",
        description: "Displays a help message",
        usage: "help",
    },
    CommandSpec {
        command: Command::Exit,
        name: "exit",
        description: "Exit the Pokedex",
        usage: "exit",
    },
    CommandSpec {
        command: Command::Map,
        name: "map",
        description: "Lists the next page of location areas",
        usage: "map",
    },
    CommandSpec {
        command: Command::MapBack,
        name: "mapb",
        description: "Lists the previous page of location areas",
        usage: "mapb",
    },
    CommandSpec {
        command: Command::Explore,
        name: "explore",
        description: "Lists the Pokemon found in a location area",
        usage: "explore <area>",
    },
    CommandSpec {
        command: Command::Catch,
        name: "catch",
        description: "Throws a Pokeball at a Pokemon",
        usage: "catch <pokemon>",
    },
    CommandSpec {
        command: Command::Inspect,
        name: "inspect",
        description: "Shows details of a caught Pokemon",
        usage: "inspect <pokemon>",
    },
    CommandSpec {
        command: Command::Pokedex,
        name: "pokedex",
        description: "Lists every Pokemon you have caught",
        usage: "pokedex",
    },
];

/// Lookup table from typed name to command.
#[derive(Debug, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, CommandSpec>,
}

impl CommandRegistry {
    /// Creates a registry holding every built-in command.
    pub fn new() -> Self {
        let commands = BUILTIN_COMMANDS
            .iter()
            .map(|spec| (spec.name, spec.clone()))
            .collect();
        Self { commands }
    }

    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.get(name)
    }

    /// Commands in name order, for `help`.
    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.values()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
