//! TTL Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{current_timestamp_ms, ResultCache};

// == Sweep Task ==
/// Handle to a running sweep task.
pub struct SweepTask {
    closed: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl SweepTask {
    /// Signals the sweep to stop at its next wake-up.
    ///
    /// Idempotent and non-blocking. Once the signal is observed (within
    /// one interval) the task exits without touching the cache lock
    /// again.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Relaxed);
    }

    /// Tears the task down immediately.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// True once the task has exited.
    #[allow(dead_code)]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

/// Spawns a background task that periodically sweeps expired entries out
/// of the shared cache.
///
/// Each tick the task sleeps for `interval`, checks for close, then
/// removes every expired entry under the cache's write lock using a
/// single timestamp for the pass. The interval is independent of, and
/// typically much shorter than, the entry lifetime.
///
/// # Arguments
/// * `cache` - Shared reference to the result cache
/// * `interval` - Time between sweep passes
pub fn spawn_sweep_task(cache: Arc<RwLock<ResultCache>>, interval: Duration) -> SweepTask {
    let closed = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&closed);

    let handle = tokio::spawn(async move {
        info!("Starting TTL sweep task with interval of {:?}", interval);

        loop {
            tokio::time::sleep(interval).await;

            if flag.load(Ordering::Relaxed) {
                info!("Sweep task closed, exiting");
                return;
            }

            let removed = {
                let mut cache_guard = cache.write().await;
                cache_guard.remove_expired(current_timestamp_ms())
            };

            if removed > 0 {
                info!("TTL sweep: removed {} expired entries", removed);
            } else {
                debug!("TTL sweep: no expired entries found");
            }
        }
    });

    SweepTask { closed, handle }
}
