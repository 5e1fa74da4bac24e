//! API Handlers
//!
//! HTTP request handlers for each resize proxy endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::{header, HeaderName},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;

use crate::cache::ResultCache;
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::fetch::HttpFetcher;
use crate::models::{HealthResponse, ResizeParams, StatsResponse};
use crate::pipeline::ResizePipeline;
use crate::transform::JpegResizer;

/// Application state shared across all handlers.
///
/// The cache is the only shared mutable resource; it sits behind one
/// exclusive lock that every cache operation takes.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe result cache
    pub cache: Arc<RwLock<ResultCache>>,
    /// Request orchestrator over cache, fetcher, and transform
    pub pipeline: Arc<ResizePipeline>,
    /// Precomputed `Cache-Control` header value
    pub cache_control: String,
}

impl AppState {
    /// Creates state around an existing cache and pipeline.
    pub fn new(
        cache: Arc<RwLock<ResultCache>>,
        pipeline: Arc<ResizePipeline>,
        entry_ttl_secs: u64,
    ) -> Self {
        Self {
            cache,
            pipeline,
            cache_control: format!("max-age={}", entry_ttl_secs),
        }
    }

    /// Creates state from configuration, wiring the HTTP fetcher and the
    /// JPEG resize transform into the pipeline.
    pub fn from_config(config: &Config) -> Self {
        let cache = Arc::new(RwLock::new(ResultCache::new(
            config.max_entries,
            config.max_item_bytes,
            config.entry_ttl * 1000,
        )));
        let pipeline = Arc::new(ResizePipeline::new(
            Arc::clone(&cache),
            Box::new(HttpFetcher::new(Duration::from_secs(config.fetch_timeout))),
            Box::new(JpegResizer),
            config.max_item_bytes,
        ));
        Self::new(cache, pipeline, config.entry_ttl)
    }
}

/// Handler for GET /resize
///
/// Streams the resized image, serving from the cache when possible. The
/// `X-Cache` header records whether the transform ran.
pub async fn resize_handler(
    State(state): State<AppState>,
    Query(params): Query<ResizeParams>,
) -> Result<Response> {
    // Validate request
    if let Some(error_msg) = params.validate() {
        return Err(ProxyError::InvalidRequest(error_msg));
    }

    let mut body = Vec::new();
    let outcome = state
        .pipeline
        .serve(&params.url, params.width, params.height, &mut body)
        .await?;

    let headers = [
        (header::CONTENT_TYPE, "image/jpeg".to_string()),
        (header::CACHE_CONTROL, state.cache_control.clone()),
        (
            HeaderName::from_static("x-cache"),
            outcome.as_str().to_string(),
        ),
    ];

    Ok((headers, body).into_response())
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    // stats() reads without reordering, the shared lock's read half is enough
    let cache = state.cache.read().await;
    let stats = cache.stats();

    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.expirations,
        stats.total_entries,
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
