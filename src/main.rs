//! Pokedex - A command-line client for a location and creature catalog
//!
//! Browse location areas, explore them, and catch what you find. Responses
//! are cached in memory for a few seconds to spare the remote API.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::io::BufReader;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::{Config, PokeApiClient, Repl};

/// Main entry point for the Pokedex client.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the API client, which starts the response cache reaper
/// 4. Run the command loop on stdin/stdout until `exit`, EOF or Ctrl+C
/// 5. Stop the cache reaper
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to warnings only, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base={}, cache_ttl={}s, page_size={}, http_timeout={}s",
        config.api_base, config.cache_ttl, config.page_size, config.http_timeout
    );

    let client = PokeApiClient::new(&config)?;
    let mut repl = Repl::new(client, StdRng::from_entropy());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let interrupted = tokio::select! {
        result = repl.run(stdin, &mut stdout) => {
            result?;
            false
        }
        _ = signal::ctrl_c() => {
            info!("Received Ctrl+C, shutting down");
            println!();
            true
        }
    };

    repl.shutdown();
    info!("Pokedex closed");

    if interrupted {
        // A stdin read is still parked on the blocking pool and would hold
        // runtime shutdown until the next line arrives.
        std::process::exit(130);
    }
    Ok(())
}
