//! API Handlers
//!
//! HTTP request handlers for each admin API endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    Json,
};
use tracing::info;

use crate::cache::PrefixCache;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearRequest, ClearResponse, DeleteResponse, GetResponse, HealthResponse, KeyQuery,
    KeysResponse, PrefixQuery, PutRequest, PutResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// Holds the process-wide cache handle. One `RwLock` guards the whole
/// cache: puts, deletes and prefix clears take the write lock, lookups
/// take the read lock.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache handle
    pub cache: Arc<RwLock<PrefixCache<String>>>,
    /// Reject callers that are not on the loopback interface
    pub loopback_only: bool,
}

impl AppState {
    /// Creates a new AppState around the given cache, restricted to loopback callers.
    pub fn new(cache: PrefixCache<String>) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            loopback_only: true,
        }
    }

    /// Creates a new AppState with an empty cache from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            loopback_only: config.loopback_only,
            ..Self::new(PrefixCache::new())
        }
    }
}

/// Handler for PUT /entries
pub async fn put_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PutRequest>, JsonRejection>,
) -> Result<Json<PutResponse>> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut cache = state.cache.write().await;
    cache.put(req.key.clone(), req.value)?;

    Ok(Json(PutResponse::new(req.key)))
}

/// Handler for GET /entries?key=...
pub async fn get_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<GetResponse>> {
    let Query(query) = query?;
    let cache = state.cache.read().await;
    let entry = cache.entry(&query.key)?;

    Ok(Json(GetResponse::new(
        query.key.as_str(),
        entry.value.as_str(),
        entry.stored_at,
    )))
}

/// Handler for DELETE /entries?key=...
pub async fn delete_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<KeyQuery>, QueryRejection>,
) -> Result<Json<DeleteResponse>> {
    let Query(query) = query?;
    let mut cache = state.cache.write().await;
    cache.delete(&query.key)?;

    Ok(Json(DeleteResponse::new(query.key)))
}

/// Handler for GET /keys?prefix=...
///
/// Lists matching keys without removing them. No prefix lists everything.
pub async fn keys_handler(
    State(state): State<AppState>,
    query: std::result::Result<Query<PrefixQuery>, QueryRejection>,
) -> Result<Json<KeysResponse>> {
    let Query(query) = query?;
    let prefix = query.prefix.unwrap_or_default();
    let cache = state.cache.read().await;

    Ok(Json(KeysResponse::new(
        prefix.as_str(),
        cache.keys_with_prefix(&prefix),
    )))
}

/// Handler for POST /clear
///
/// Removes every entry under a prefix or directory and reports what went.
pub async fn clear_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ClearRequest>, JsonRejection>,
) -> Result<Json<ClearResponse>> {
    let Json(req) = payload?;
    let prefix = req.resolve_prefix()?;

    let removed: Vec<String> = {
        let mut cache = state.cache.write().await;
        cache
            .drain_prefix(&prefix)
            .into_iter()
            .map(|(key, _)| key)
            .collect()
    };

    info!(prefix = %prefix, removed = removed.len(), "Cache prefix cleared");

    Ok(Json(ClearResponse::new(prefix, removed)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
