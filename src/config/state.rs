// Application state module
// Shared, read-mostly state handed to every connection task

use std::sync::atomic::{AtomicUsize, Ordering};

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    /// Number of connections currently being served
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub const fn new(config: Config) -> Self {
        Self {
            config,
            active_connections: AtomicUsize::new(0),
        }
    }

    /// Whether access log lines should be written
    pub const fn access_log_enabled(&self) -> bool {
        self.config.logging.access_log
    }

    pub fn active_connections(&self) -> usize {
        self.active_connections.load(Ordering::SeqCst)
    }
}
