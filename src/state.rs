// Application state module
// Process-wide state shared by every handler

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Notify;

use crate::config::Config;

/// Application state, constructed once at startup and shared as `Arc`
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    request_count: AtomicU64,
    /// Fired when a crash has been requested; the server loop schedules
    /// the fatal exit. Fires once, cannot be cancelled.
    pub crash_signal: Arc<Notify>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
            crash_signal: Arc::new(Notify::new()),
        }
    }

    /// Record one request to the root endpoint, returning the new total
    ///
    /// Atomic so the exactly-one-increment-per-request invariant holds on
    /// a multi-thread runtime.
    pub fn record_request(&self) -> u64 {
        self.request_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Current counter value, without incrementing
    pub fn request_total(&self) -> u64 {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Whole seconds elapsed since process start
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
