//! API Handlers
//!
//! HTTP request handlers for each fallback cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{extract::State, Json};
use tracing::info;

use crate::cache::{FallbackCache, Payload};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::loader::load_table;
use crate::models::{
    EntryView, ExplainResponse, HealthResponse, MatchResponse, ProbeView, PutRequest,
    PutResponse, QueryRequest, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Lookups only need the read lock, so any number of them run concurrently;
/// `put` takes the write lock and replaces a whole entry at once.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe fallback cache
    pub cache: Arc<RwLock<FallbackCache<Payload>>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: FallbackCache<Payload>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache from the configured priority list and loads the seed
    /// table, if any, before the state is shared.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut cache = FallbackCache::new(config.priority.iter().cloned())?
            .with_display_order(config.display_order());

        if let Some(path) = &config.table_path {
            load_table(path, &mut cache)?;
        }

        Ok(Self::new(cache))
    }
}

/// Handler for PUT /entries
///
/// Stores or replaces an entry.
pub async fn put_handler(
    State(state): State<AppState>,
    Json(req): Json<PutRequest>,
) -> Result<Json<PutResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    let replaced = cache.put(req.key.clone(), req.value).is_some();
    info!(key = %req.key, replaced, "entry stored");

    Ok(Json(PutResponse::new(req.key, replaced)))
}

/// Handler for POST /match
///
/// Resolves a query key to the most specific stored entry.
pub async fn match_handler(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<MatchResponse>> {
    let cache = state.cache.read().await;
    let matched = cache
        .match_entry(&req.key)?
        .ok_or_else(|| CacheError::NotFound(req.key.to_string()))?;

    Ok(Json(MatchResponse {
        matched_key: matched.key.clone(),
        relaxed: matched.relaxed,
        value: matched.value.clone(),
        query: req.key,
    }))
}

/// Handler for POST /explain
///
/// Lists the probes a lookup would issue and the partially matching entries.
pub async fn explain_handler(
    State(state): State<AppState>,
    Json(req): Json<QueryRequest>,
) -> Result<Json<ExplainResponse>> {
    let cache = state.cache.read().await;

    let probes = cache
        .probe_sequence(&req.key)?
        .into_iter()
        .map(|key| ProbeView {
            stored: cache.get(&key).is_some(),
            key,
        })
        .collect();

    let candidates = cache
        .candidates(&req.key)
        .into_iter()
        .map(|(key, value)| EntryView::new(key, value))
        .collect();

    Ok(Json(ExplainResponse {
        query: req.key,
        probes,
        candidates,
    }))
}

/// Handler for GET /entries
///
/// Returns every stored entry in display order.
pub async fn entries_handler(State(state): State<AppState>) -> Json<Vec<EntryView>> {
    let cache = state.cache.read().await;
    Json(
        cache
            .entries()
            .into_iter()
            .map(|(key, value)| EntryView::new(key, value))
            .collect(),
    )
}

/// Handler for GET /table
///
/// Returns the plain-text rendering of the table.
pub async fn table_handler(State(state): State<AppState>) -> String {
    let cache = state.cache.read().await;
    cache.render()
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
