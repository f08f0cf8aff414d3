use log::{debug, info, trace};
use std::fmt;

/// Thin wrapper over the `log` facade so every stage logs under one target.
pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        info!(target: "echocore", "{}", message);
    }

    /// Per-frame messages; pass `format_args!` so nothing is formatted when the level is off.
    pub fn debug(&self, message: fmt::Arguments<'_>) {
        debug!(target: "echocore", "{}", message);
    }

    pub fn trace(&self, message: fmt::Arguments<'_>) {
        trace!(target: "echocore", "{}", message);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
