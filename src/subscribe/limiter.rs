//! Fixed-window rate limiter for the subscribe endpoint.
//!
//! Owned by the serve command and handed to the request handler, so
//! tests can construct one with a short window and nothing leaks into
//! global state.

use std::time::{Duration, Instant};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

struct Entry {
    count: u32,
    reset_at: Instant,
}

/// Per-key request counter with a fixed window.
pub struct RateLimiter {
    limit: u32,
    window: Duration,
    entries: Mutex<FxHashMap<String, Entry>>,
}

impl RateLimiter {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            limit,
            window,
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// Count one request for `key`. Returns false once the key is over
    /// its limit for the current window.
    ///
    /// Expired entries across all keys are evicted here, so the map
    /// stays bounded by the number of clients seen in one window.
    pub fn check(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entries = self.entries.lock();
        entries.retain(|_, e| e.reset_at > now);

        let entry = entries.entry(key.to_string()).or_insert(Entry {
            count: 0,
            reset_at: now + self.window,
        });
        entry.count += 1;
        entry.count <= self.limit
    }
}
