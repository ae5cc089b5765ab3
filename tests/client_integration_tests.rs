//! Integration Tests for the cached API client
//!
//! Runs a small catalog origin on an ephemeral port and counts the requests
//! it receives, so cache hits show up as requests that never happened.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use pokedex::{Cache, Config, PokeApiClient, PokedexError, Repl};
use rand::rngs::mock::StepRng;
use serde_json::{json, Value};
use tokio_test::assert_ok;

const AREAS: &[&str] = &["canalave-city-area", "eterna-city-area", "pastoria-city-area"];

// == Test Origin ==

#[derive(Clone)]
struct Origin {
    base: String,
    requests: Arc<AtomicUsize>,
    delay: Duration,
}

impl Origin {
    fn requests(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }

    async fn hit(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

async fn list_areas(
    State(origin): State<Origin>,
    Query(params): Query<HashMap<String, usize>>,
) -> Json<Value> {
    origin.hit().await;
    let offset = params.get("offset").copied().unwrap_or(0);
    let limit = params.get("limit").copied().unwrap_or(20);

    let page_url = |offset: usize| {
        format!("{}/location-area?offset={}&limit={}", origin.base, offset, limit)
    };
    let next = (offset + limit < AREAS.len()).then(|| page_url(offset + limit));
    let previous = (offset > 0).then(|| page_url(offset.saturating_sub(limit)));
    let results: Vec<Value> = AREAS
        .iter()
        .skip(offset)
        .take(limit)
        .map(|name| json!({"name": name, "url": ""}))
        .collect();

    Json(json!({
        "count": AREAS.len(),
        "next": next,
        "previous": previous,
        "results": results,
    }))
}

async fn area(State(origin): State<Origin>, Path(name): Path<String>) -> Json<Value> {
    origin.hit().await;
    Json(json!({
        "id": 1,
        "name": name,
        "pokemon_encounters": [
            {"pokemon": {"name": "tentacool", "url": ""}},
            {"pokemon": {"name": "pikachu", "url": ""}}
        ]
    }))
}

async fn pokemon(
    State(origin): State<Origin>,
    Path(name): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    origin.hit().await;
    if name != "pikachu" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({
        "id": 25,
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "stats": [{"base_stat": 35, "stat": {"name": "hp", "url": ""}}],
        "types": [{"slot": 1, "type": {"name": "electric", "url": ""}}]
    })))
}

async fn spawn_origin(delay: Duration) -> Origin {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let origin = Origin {
        base: format!("http://{}/api/v2", addr),
        requests: Arc::new(AtomicUsize::new(0)),
        delay,
    };

    let app = Router::new()
        .route("/api/v2/location-area", get(list_areas))
        .route("/api/v2/location-area/:name", get(area))
        .route("/api/v2/pokemon/:name", get(pokemon))
        .with_state(origin.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    origin
}

fn config_for(origin: &Origin) -> Config {
    Config {
        api_base: origin.base.clone(),
        page_size: 2,
        ..Config::default()
    }
}

// == Cache-aside Tests ==

#[tokio::test]
async fn test_repeated_fetch_hits_origin_once() {
    let origin = spawn_origin(Duration::ZERO).await;
    let client = PokeApiClient::new(&config_for(&origin)).unwrap();
    let url = format!("{}/pokemon/pikachu", origin.base);

    let first = assert_ok!(client.fetch_bytes(&url).await);
    let second = assert_ok!(client.fetch_bytes(&url).await);

    assert_eq!(first, second);
    assert_eq!(origin.requests(), 1);
    assert_eq!(client.cache().stats().await.hits, 1);
}

#[tokio::test]
async fn test_cached_body_is_raw_origin_bytes() {
    let origin = spawn_origin(Duration::ZERO).await;
    let client = PokeApiClient::new(&config_for(&origin)).unwrap();

    let page = client.location_areas(None).await.unwrap();
    assert_eq!(page.results.len(), 2);

    let cached = client
        .cache()
        .get(&client.first_page_url())
        .await
        .expect("first page should be cached under its URL");
    let decoded: Value = serde_json::from_slice(&cached).unwrap();
    assert_eq!(decoded["count"], 3);
}

#[tokio::test]
async fn test_expired_entry_is_refetched() {
    let origin = spawn_origin(Duration::ZERO).await;
    let cache = Cache::new(Duration::from_millis(100));
    let client = PokeApiClient::with_cache(&config_for(&origin), cache).unwrap();

    client.location_area("canalave-city-area").await.unwrap();
    client.location_area("canalave-city-area").await.unwrap();
    assert_eq!(origin.requests(), 1);

    // Past 2 * ttl the reaper has certainly swept the entry
    tokio::time::sleep(Duration::from_millis(300)).await;

    client.location_area("canalave-city-area").await.unwrap();
    assert_eq!(origin.requests(), 2);
}

#[tokio::test]
async fn test_error_status_is_not_cached() {
    let origin = spawn_origin(Duration::ZERO).await;
    let client = PokeApiClient::new(&config_for(&origin)).unwrap();

    for _ in 0..2 {
        let err = client.pokemon("missingno").await.unwrap_err();
        assert!(matches!(
            err,
            PokedexError::Status {
                status: StatusCode::NOT_FOUND,
                ..
            }
        ));
    }

    assert_eq!(origin.requests(), 2);
    assert!(client.cache().is_empty().await);
}

#[tokio::test]
async fn test_concurrent_misses_are_not_coalesced() {
    let origin = spawn_origin(Duration::from_millis(50)).await;
    let client = PokeApiClient::new(&config_for(&origin)).unwrap();
    let url = format!("{}/location-area/eterna-city-area", origin.base);

    let (a, b) = tokio::join!(client.fetch_bytes(&url), client.fetch_bytes(&url));

    assert_eq!(a.unwrap(), b.unwrap());
    assert_eq!(origin.requests(), 2);
    assert_eq!(client.cache().len().await, 1);
}

#[tokio::test]
async fn test_unreachable_origin_is_http_error() {
    let config = Config {
        api_base: "http://127.0.0.1:9/api/v2".to_string(),
        http_timeout: 2,
        ..Config::default()
    };
    let client = PokeApiClient::new(&config).unwrap();

    let err = client.location_areas(None).await.unwrap_err();
    assert!(matches!(err, PokedexError::Http(_)));
}

// == Command Loop Tests ==

#[tokio::test]
async fn test_session_against_origin() {
    let origin = spawn_origin(Duration::ZERO).await;
    let client = PokeApiClient::new(&config_for(&origin)).unwrap();
    let mut repl = Repl::new(client, StepRng::new(0, 0));

    let input = "map\nmap\nmapb\nexplore canalave-city-area\ncatch pikachu\ncatch missingno\npokedex\nexit\n";
    let mut output = Vec::new();
    repl.run(input.as_bytes(), &mut output).await.unwrap();
    let output = String::from_utf8(output).unwrap();

    assert!(output.contains("canalave-city-area\neterna-city-area\n"));
    assert!(output.contains("pastoria-city-area\n"));
    assert!(output.contains("Found Pokemon:\n - tentacool\n - pikachu\n"));
    assert!(output.contains("pikachu was caught!"));
    assert!(output.contains("Command error:"));
    assert!(output.contains("Your Pokedex:\n - pikachu\n"));
    assert!(output.contains("Closing the Pokedex... Goodbye!"));

    // mapb back to page one is served from the cache
    assert_eq!(origin.requests(), 5);
}
