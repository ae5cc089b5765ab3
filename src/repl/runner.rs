//! Read-eval-print loop
//!
//! Reads one line at a time, tokenizes it, and dispatches the first word
//! through the [`CommandRegistry`]. A failed command prints its error and
//! the loop carries on.

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::client::PokeApiClient;
use crate::error::{PokedexError, Result};
use crate::models::LocationAreaPage;
use crate::repl::{clean_input, Command, CommandRegistry, Session};

pub const PROMPT: &str = "Pokedex > ";

/// Base experience at which a catch is a coin flip.
const CATCH_DIFFICULTY: f64 = 50.0;

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Chance in `(0, 1]` that a throw at a Pokemon with this base experience
/// succeeds. Falls as base experience rises.
pub fn catch_probability(base_experience: u32) -> f64 {
    CATCH_DIFFICULTY / (CATCH_DIFFICULTY + base_experience as f64)
}

/// The interactive command loop and everything it owns.
pub struct Repl<R> {
    client: PokeApiClient,
    registry: CommandRegistry,
    session: Session,
    rng: R,
}

impl<R: Rng> Repl<R> {
    /// Creates a loop whose first `map` shows the client's first page.
    pub fn new(client: PokeApiClient, rng: R) -> Self {
        let session = Session::new(client.first_page_url());
        Self {
            client,
            registry: CommandRegistry::new(),
            session,
            rng,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn client(&self) -> &PokeApiClient {
        &self.client
    }

    /// Stops the response cache's background sweep.
    pub fn shutdown(&self) {
        self.client.cache().shutdown();
    }

    // == Run ==
    /// Prompts, reads and dispatches until `exit` or end of input.
    ///
    /// Only I/O failures on `input` or `output` end the loop with an error.
    pub async fn run<I, O>(&mut self, input: I, output: &mut O) -> Result<()>
    where
        I: AsyncBufRead + Unpin,
        O: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                debug!("Input closed");
                write_line(output, "").await?;
                break;
            };

            let words = clean_input(&line);
            if words.is_empty() {
                continue;
            }

            match self.execute(&words, output).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(err) => {
                    debug!(command = %words[0], error = %err, "Command failed");
                    write_line(output, &format!("Command error: {}", err)).await?;
                }
            }
            output.flush().await?;
        }

        output.flush().await?;
        Ok(())
    }

    // == Execute ==
    /// Runs one tokenized command line.
    pub async fn execute<O>(&mut self, words: &[String], out: &mut O) -> Result<Flow>
    where
        O: AsyncWrite + Unpin,
    {
        let Some((name, args)) = words.split_first() else {
            return Ok(Flow::Continue);
        };
        let Some(spec) = self.registry.lookup(name) else {
            write_line(out, "Unknown command").await?;
            return Ok(Flow::Continue);
        };
        let (command, usage) = (spec.command, spec.usage);

        match command {
            Command::Help => self.help(out).await?,
            Command::Exit => {
                write_line(out, "Closing the Pokedex... Goodbye!").await?;
                return Ok(Flow::Exit);
            }
            Command::Map => self.map(out).await?,
            Command::MapBack => self.map_back(out).await?,
            Command::Explore => self.explore(required_arg(args, usage)?, out).await?,
            Command::Catch => self.catch(required_arg(args, usage)?, out).await?,
            Command::Inspect => self.inspect(required_arg(args, usage)?, out).await?,
            Command::Pokedex => self.pokedex(out).await?,
        }

        Ok(Flow::Continue)
    }

    async fn help<O: AsyncWrite + Unpin>(&self, out: &mut O) -> Result<()> {
        write_line(out, "Welcome to the Pokedex!").await?;
        write_line(out, "Usage:").await?;
        write_line(out, "").await?;
        for spec in self.registry.iter() {
            write_line(out, &format!("{}: {}", spec.usage, spec.description)).await?;
        }
        Ok(())
    }

    async fn map<O: AsyncWrite + Unpin>(&mut self, out: &mut O) -> Result<()> {
        let url = self.session.next.clone().ok_or(PokedexError::NoNextPage)?;
        let page = self.client.location_areas(Some(url.as_str())).await?;
        self.show_page(page, out).await
    }

    async fn map_back<O: AsyncWrite + Unpin>(&mut self, out: &mut O) -> Result<()> {
        let url = self
            .session
            .previous
            .clone()
            .ok_or(PokedexError::NoPreviousPage)?;
        let page = self.client.location_areas(Some(url.as_str())).await?;
        self.show_page(page, out).await
    }

    async fn show_page<O: AsyncWrite + Unpin>(
        &mut self,
        page: LocationAreaPage,
        out: &mut O,
    ) -> Result<()> {
        for area in &page.results {
            write_line(out, &area.name).await?;
        }
        self.session.turn_page(page.next, page.previous);
        Ok(())
    }

    async fn explore<O: AsyncWrite + Unpin>(&mut self, area: &str, out: &mut O) -> Result<()> {
        write_line(out, &format!("Exploring {}...", area)).await?;
        let area = self.client.location_area(area).await?;

        write_line(out, "Found Pokemon:").await?;
        for name in area.pokemon_names() {
            write_line(out, &format!(" - {}", name)).await?;
        }
        Ok(())
    }

    async fn catch<O: AsyncWrite + Unpin>(&mut self, name: &str, out: &mut O) -> Result<()> {
        write_line(out, &format!("Throwing a Pokeball at {}...", name)).await?;
        let pokemon = self.client.pokemon(name).await?;

        let chance = catch_probability(pokemon.base_experience.unwrap_or(0));
        if self.rng.gen_bool(chance) {
            info!(pokemon = %pokemon.name, chance, "Caught");
            write_line(out, &format!("{} was caught!", pokemon.name)).await?;
            write_line(out, "You may now inspect it with the inspect command.").await?;
            self.session.pokedex.add(pokemon);
        } else {
            write_line(out, &format!("{} escaped!", pokemon.name)).await?;
        }
        Ok(())
    }

    async fn inspect<O: AsyncWrite + Unpin>(&self, name: &str, out: &mut O) -> Result<()> {
        let pokemon = self
            .session
            .pokedex
            .get(name)
            .ok_or_else(|| PokedexError::NotCaught(name.to_string()))?;

        write_line(out, &format!("Name: {}", pokemon.name)).await?;
        write_line(out, &format!("Height: {}", pokemon.height)).await?;
        write_line(out, &format!("Weight: {}", pokemon.weight)).await?;
        write_line(out, "Stats:").await?;
        for stat in &pokemon.stats {
            write_line(out, &format!("  -{}: {}", stat.stat.name, stat.base_stat)).await?;
        }
        write_line(out, "Types:").await?;
        for kind in &pokemon.types {
            write_line(out, &format!("  - {}", kind.type_.name)).await?;
        }
        Ok(())
    }

    async fn pokedex<O: AsyncWrite + Unpin>(&self, out: &mut O) -> Result<()> {
        if self.session.pokedex.is_empty() {
            return write_line(out, "Your Pokedex is empty").await;
        }

        write_line(out, "Your Pokedex:").await?;
        for name in self.session.pokedex.names() {
            write_line(out, &format!(" - {}", name)).await?;
        }
        Ok(())
    }
}

fn required_arg<'a>(args: &'a [String], usage: &str) -> Result<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| PokedexError::MissingArgument(usage.to_string()))
}

async fn write_line<O: AsyncWrite + Unpin>(out: &mut O, line: &str) -> Result<()> {
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    Ok(())
}
