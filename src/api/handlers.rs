//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::cache::LruCache;
use crate::error::{CacheError, Result};
use crate::models::{GetResponse, HealthResponse, SetRequest, SetResponse};

/// Application state shared across all handlers.
///
/// The cache does its own locking, so handlers only need a shared reference.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache
    pub cache: Arc<LruCache>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: LruCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// # Errors
    /// Fails if the configured capacity is zero.
    pub fn from_config(config: &crate::config::Config) -> Result<Self> {
        Ok(Self::new(LruCache::new(config.capacity)?))
    }
}

/// Handler for POST /set
///
/// Stores a key-value pair in the cache for `expiration` seconds.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<Json<SetResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }
    let ttl = req.ttl_seconds()?;

    debug!(key = %req.key, ttl, "set");
    state.cache.set(req.key.clone(), req.value, ttl);

    Ok(Json(SetResponse::new(req.key, ttl)))
}

/// Handler for GET /get/:key
///
/// Retrieves a value from the cache by key. Expired keys are reported the
/// same way as missing ones.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&key) {
        Some(value) => Ok(Json(GetResponse::new(key, value))),
        None => Err(CacheError::NotFound(key)),
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
