//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] reports every delivery on the `tracing` channel.
//! This is primarily useful for development, debugging, and examples.

use std::fmt::Debug;

use crate::subscribers::subscribe::Subscribe;

/// Logging subscriber for any `Debug` payload.
///
/// Enabled via the `logging` feature. Emits one `tracing` event per delivery
/// for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

impl<P: Debug> Subscribe<P> for LogWriter {
    fn on_event(&self, topic: &str, payload: &P) {
        tracing::info!(topic, payload = ?payload, "event delivered");
    }

    fn name(&self) -> &str {
        "log_writer"
    }
}
