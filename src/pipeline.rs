//! Request Pipeline Module
//!
//! Coordinates one resize request: cache lookup first; on a miss, the
//! fetch and transform run with output teed to the caller and a bounded
//! capture buffer, and the capture is committed to the cache only when
//! both the transform and the capture succeeded.

use std::io::Write;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::{key, ResultCache};
use crate::capture::{CaptureBuffer, TeeWriter};
use crate::error::ProxyError;
use crate::fetch::Fetcher;
use crate::transform::Transform;

// == Outcome ==
/// How a request was satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Served from the cache; no fetch, no transform
    Hit,
    /// Transform ran; output streamed fresh
    Miss,
}

impl Outcome {
    /// Value for the `X-Cache` response header.
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Hit => "HIT",
            Outcome::Miss => "MISS",
        }
    }
}

// == Resize Pipeline ==
/// Orchestrates the cache, the fetcher, and the transform for resize
/// requests.
pub struct ResizePipeline {
    cache: Arc<RwLock<ResultCache>>,
    fetcher: Box<dyn Fetcher>,
    transform: Box<dyn Transform>,
    /// Capture buffer size for miss-path requests
    capture_limit: usize,
}

impl ResizePipeline {
    // == Constructor ==
    /// Creates a pipeline over a shared cache and concrete collaborators.
    pub fn new(
        cache: Arc<RwLock<ResultCache>>,
        fetcher: Box<dyn Fetcher>,
        transform: Box<dyn Transform>,
        capture_limit: usize,
    ) -> Self {
        Self {
            cache,
            fetcher,
            transform,
            capture_limit,
        }
    }

    // == Serve ==
    /// Serves one request into `out`.
    ///
    /// On a hit the stored bytes are copied to `out` and nothing else
    /// runs. On a miss the source is fetched, the transform streams
    /// through a tee into `out` and a fresh capture buffer, and the
    /// capture is committed unless it overflowed. Each miss runs exactly
    /// one fetch and one transform, and a request mutates the cache at
    /// most once.
    ///
    /// `out` may already hold partial bytes when an error is returned;
    /// already-streamed output is not rolled back. The cache lock is
    /// never held across fetch, transform, or sink writes.
    pub async fn serve<W: Write>(
        &self,
        url: &str,
        width: u32,
        height: u32,
        out: &mut W,
    ) -> Result<Outcome, ProxyError> {
        let cache_key = key::derive(&format!("{url}{width}{height}"));

        let cached = self.cache.write().await.get(&cache_key);
        if let Some(payload) = cached {
            info!(key = %cache_key, "serving from cache");
            out.write_all(&payload).map_err(ProxyError::Sink)?;
            return Ok(Outcome::Hit);
        }

        info!(key = %cache_key, %url, "serving from source");
        let source = self.fetcher.fetch(url).await?;

        let mut capture = CaptureBuffer::new(self.capture_limit);
        {
            let mut tee = TeeWriter::new(&mut capture, out);
            self.transform.apply(&source, width, height, &mut tee)?;
        }

        match capture.result() {
            Some(data) => self.cache.write().await.add(cache_key, data),
            None => debug!(key = %cache_key, "output exceeded capture limit, not cached"),
        }

        Ok(Outcome::Miss)
    }
}
