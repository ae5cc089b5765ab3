//! Catalog API client
//!
//! Cache-aside fetching: every GET first asks the cache for the URL, and
//! only goes to the network on a miss. Raw bodies are cached; decoding
//! happens after retrieval so the cache never sees typed data.

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

/// Client for the location and creature catalog.
///
/// Concurrent misses on the same URL are not coalesced: each caller fetches
/// and the last `add` wins.
#[derive(Debug)]
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: Cache,
    base_url: String,
    page_size: u32,
}

impl PokeApiClient {
    /// Creates a client with a fresh cache using the configured TTL.
    ///
    /// Must be called from within a Tokio runtime, since the cache starts
    /// its reaper here.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_cache(config, Cache::new(config.cache_ttl()))
    }

    /// Creates a client around an existing cache.
    pub fn with_cache(config: &Config, cache: Cache) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.api_base.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// URL of the first page of the area listing.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    // == Fetch Bytes ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// On a miss the body is fetched and stored. Non-success responses are
    /// returned as errors and never cached.
    #[instrument(skip(self))]
    pub async fn fetch_bytes(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url).await {
            debug!("Cache hit");
            return Ok(body);
        }
        debug!("Cache miss, fetching from origin");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch_bytes(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Location Areas ==
    /// Fetches one page of the area listing. `None` means the first page.
    pub async fn location_areas(&self, url: Option<&str>) -> Result<LocationAreaPage> {
        match url {
            Some(url) => self.fetch_json(url).await,
            None => self.fetch_json(&self.first_page_url()).await,
        }
    }

    /// Fetches a single area by name or id.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = self.resource_url("location-area", name)?;
        self.fetch_json(&url).await
    }

    /// Fetches a single Pokemon by name or id.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = self.resource_url("pokemon", name)?;
        self.fetch_json(&url).await
    }

    /// Builds `{base}/{kind}/{name}`, refusing names that would change the
    /// path or add a query. Catalog names are lowercase ASCII words joined by
    /// hyphens, and ids are digits.
    fn resource_url(&self, kind: &str, name: &str) -> Result<String> {
        let valid = !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-');
        if !valid {
            return Err(PokedexError::InvalidName(name.to_string()));
        }
        Ok(format!("{}/{}/{}", self.base_url, kind, name))
    }
}
