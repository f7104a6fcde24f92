//! API Handlers
//!
//! HTTP request handlers exposing the item pool.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::adapter::{CacheAdapter, LoggingAdapter, MemoryCacheAdapter, NullCacheAdapter};
use crate::config::{AdapterKind, Config};
use crate::error::Result;
use crate::models::{
    ClearResponse, CommitResponse, DeleteResponse, ExistsResponse, HealthResponse, ItemResponse,
    ItemsResponse, KeysRequest, SaveItemRequest, SaveResponse,
};
use crate::pool::ItemPool;

/// Application state shared across all handlers.
///
/// The pool's staging map is not synchronized, so the pool sits behind a lock.
#[derive(Clone)]
pub struct AppState {
    /// Lock-protected item pool
    pub pool: Arc<RwLock<ItemPool>>,
    /// In-memory backend, when selected, for the cleanup task
    pub memory: Option<Arc<MemoryCacheAdapter>>,
}

impl AppState {
    /// Creates a new AppState around the given pool.
    pub fn new(pool: ItemPool) -> Self {
        Self {
            pool: Arc::new(RwLock::new(pool)),
            memory: None,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the configured backend, wraps it in a logging adapter and
    /// resolves the default TTL.
    pub fn from_config(config: &Config) -> Result<Self> {
        let default_ttl = config.default_ttl()?;

        let memory = match config.adapter {
            AdapterKind::Memory => Some(Arc::new(MemoryCacheAdapter::new())),
            AdapterKind::Null => None,
        };
        let backend: Arc<dyn CacheAdapter> = match &memory {
            Some(memory) => memory.clone(),
            None => Arc::new(NullCacheAdapter::new()),
        };

        let mut logging = LoggingAdapter::new(backend)
            .with_level(config.log_level)
            .with_mask(config.log_mask);
        if let Some(label) = &config.adapter_label {
            logging = logging.with_label(label.clone());
        }

        Ok(Self {
            pool: Arc::new(RwLock::new(ItemPool::new(Arc::new(logging), default_ttl))),
            memory,
        })
    }
}

/// Handler for GET /items/:key
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ItemResponse>> {
    let pool = state.pool.read().await;
    let item = pool.get_item(&key)?;

    Ok(Json(ItemResponse::from(&item)))
}

/// Handler for POST /items/lookup
pub async fn lookup_items_handler(
    State(state): State<AppState>,
    Json(req): Json<KeysRequest>,
) -> Result<Json<ItemsResponse>> {
    let pool = state.pool.read().await;
    let items = pool.get_items(&req.keys)?;

    Ok(Json(ItemsResponse::new(&items)))
}

/// Handler for GET /items/:key/exists
pub async fn item_exists_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ExistsResponse>> {
    let pool = state.pool.read().await;
    let exists = pool.has_item(&key)?;

    Ok(Json(ExistsResponse::new(key, exists)))
}

/// Handler for PUT /items
///
/// Saves the item immediately, or stages it when `deferred` is set.
/// An adapter refusal is reported in the body, not as an error status.
pub async fn save_item_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveItemRequest>,
) -> Result<Json<SaveResponse>> {
    let item = req.to_item()?;

    let saved = if req.deferred {
        state.pool.write().await.save_deferred(&item)?
    } else {
        state.pool.read().await.save(&item)?
    };

    Ok(Json(SaveResponse::new(req.key, saved, req.deferred)))
}

/// Handler for POST /commit
pub async fn commit_handler(State(state): State<AppState>) -> Json<CommitResponse> {
    let mut pool = state.pool.write().await;
    let committed = pool.commit();

    Json(CommitResponse {
        committed,
        pending: pool.deferred_len(),
    })
}

/// Handler for DELETE /items/:key
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DeleteResponse>> {
    let pool = state.pool.read().await;
    let deleted = pool.delete_item(&key)?;

    Ok(Json(DeleteResponse { deleted }))
}

/// Handler for POST /items/delete
pub async fn delete_items_handler(
    State(state): State<AppState>,
    Json(req): Json<KeysRequest>,
) -> Result<Json<DeleteResponse>> {
    let pool = state.pool.read().await;
    let deleted = pool.delete_items(&req.keys)?;

    Ok(Json(DeleteResponse { deleted }))
}

/// Handler for POST /clear
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let pool = state.pool.read().await;

    Json(ClearResponse {
        cleared: pool.clear(),
    })
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
