//! Cache Entry Module
//!
//! Defines the stored unit for the result cache: captured payload bytes
//! plus their expiry deadline.

use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;

// == Cache Entry ==
/// A single cached transform result.
///
/// The payload is copied in at creation and only ever handed out as an
/// immutable [`Bytes`] clone, so no caller can mutate stored data through
/// an alias.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Cache key the payload is stored under
    pub key: String,
    /// The captured transform output
    pub payload: Bytes,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry expiring `lifetime_ms` from now, copying the payload.
    pub fn new(key: String, payload: &[u8], lifetime_ms: u64) -> Self {
        Self {
            key,
            payload: Bytes::copy_from_slice(payload),
            expires_at: current_timestamp_ms() + lifetime_ms,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time. Promotion on read
    /// never moves this deadline.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
