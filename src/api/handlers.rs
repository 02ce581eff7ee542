//! API Handlers
//!
//! HTTP request handlers for each item cache endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{HealthResponse, Item, StatsResponse};

/// Application state shared across all handlers.
///
/// Holds the one cache instance for the process. The cache does its own
/// locking, so handlers share it through a plain `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<CacheStore<Item>>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: CacheStore<Item>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(CacheStore::new(config.capacity)?))
    }
}

fn parse_id(raw: &str) -> Result<i64> {
    raw.parse().map_err(|_| {
        warn!(id = %raw, "Invalid item ID");
        CacheError::InvalidRequest(format!("Invalid item ID: {raw}"))
    })
}

fn not_found_by_id(id: i64) -> CacheError {
    warn!(id, "Item not found by ID");
    CacheError::NotFound(format!("no item with ID {id}"))
}

/// Handler for GET /item/id/:id
///
/// Scans for the item with the given ID, then reads it through the cache so
/// that only the matched item is promoted.
pub async fn get_item_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Item>> {
    let id = parse_id(&raw_id)?;

    let key = state
        .cache
        .find_key(|item| item.id == id)
        .ok_or_else(|| not_found_by_id(id))?;

    // The entry may have been deleted, evicted or replaced since the scan.
    let item = state
        .cache
        .get_if(&key, |item| item.id == id)
        .ok_or_else(|| not_found_by_id(id))?;

    info!(id, name = %item.name, "Retrieved item by ID");
    Ok(Json(item))
}

/// Handler for GET /item/name/:name
pub async fn get_item_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Item>> {
    if name.is_empty() {
        warn!("Item name cannot be empty");
        return Err(CacheError::InvalidRequest(
            "Item name cannot be empty".to_string(),
        ));
    }

    let Some(item) = state.cache.get(&name) else {
        warn!(name = %name, "Item not found by name");
        return Err(CacheError::NotFound(format!("no item named {name}")));
    };

    info!(name = %name, "Retrieved item by name");
    Ok(Json(item))
}

/// Handler for DELETE /item/id/:id
pub async fn delete_item_by_id(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&raw_id)?;

    let key = state
        .cache
        .find_key(|item| item.id == id)
        .ok_or_else(|| not_found_by_id(id))?;

    if !state.cache.delete_if(&key, |item| item.id == id) {
        return Err(not_found_by_id(id));
    }

    info!(id, name = %key, "Deleted item by ID");
    Ok(StatusCode::OK)
}

/// Handler for POST /item
///
/// Every decoding failure is reported as 400, as is an incomplete item.
pub async fn add_item(
    State(state): State<AppState>,
    payload: std::result::Result<Json<Item>, JsonRejection>,
) -> Result<StatusCode> {
    let Json(item) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Invalid request payload");
        CacheError::InvalidRequest(format!("Invalid request payload: {}", rejection.body_text()))
    })?;

    if let Some(error_msg) = item.validate() {
        warn!(item = ?item, "{error_msg}");
        return Err(CacheError::InvalidRequest(error_msg));
    }

    info!(id = item.id, name = %item.name, "Cached item");
    state.cache.set(item.name.clone(), item);
    Ok(StatusCode::CREATED)
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
