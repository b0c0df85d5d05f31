//! Error types used by the signalbus dispatch and catalog components.
//!
//! This module defines two main error enums:
//!
//! - [`DispatchError`] diagnostic conditions raised inside the event bus.
//! - [`CatalogError`] errors returned by track catalog operations.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Bus operations never return a [`DispatchError`]: the bus handles every
//! condition locally and reports it on the log channel (see
//! [`EventBus`](crate::EventBus)). The enum exists so every such report is
//! formatted in one place.

use std::sync::Arc;
use thiserror::Error;

/// # Diagnostic conditions raised by the event bus.
///
/// These are reported via `tracing` and never escape a public bus operation.
/// The offending call is a no-op; it is never fatal to the caller.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DispatchError {
    /// An operation received an empty topic and was ignored.
    #[error("empty topic rejected by {op}")]
    EmptyTopic {
        /// The operation that rejected the topic (`"subscribe"`, `"publish"`).
        op: &'static str,
    },

    /// A subscriber panicked while handling a published event.
    ///
    /// The panic is caught at single-subscriber granularity; remaining
    /// subscribers in the same publish still run.
    #[error("subscriber {subscriber:?} panicked on topic {topic:?}: {detail}")]
    SubscriberPanicked {
        /// Topic that was being published.
        topic: String,
        /// Name of the panicking subscriber.
        subscriber: String,
        /// Extracted panic message.
        detail: String,
    },
}

impl DispatchError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use signalbus::DispatchError;
    ///
    /// let err = DispatchError::EmptyTopic { op: "publish" };
    /// assert_eq!(err.as_label(), "empty_topic");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DispatchError::EmptyTopic { .. } => "empty_topic",
            DispatchError::SubscriberPanicked { .. } => "subscriber_panicked",
        }
    }

    /// Returns a human-readable message with details about the condition.
    pub fn as_message(&self) -> String {
        match self {
            DispatchError::EmptyTopic { op } => {
                format!("empty topic rejected; op={op}")
            }
            DispatchError::SubscriberPanicked {
                topic,
                subscriber,
                detail,
            } => {
                format!("subscriber panicked; topic={topic} subscriber={subscriber} detail={detail}")
            }
        }
    }
}

/// # Errors produced by track catalog operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A track with the same id is already registered.
    #[error("track {id:?} is already registered")]
    DuplicateTrack {
        /// Id of the track that was rejected.
        id: Arc<str>,
    },
}

impl CatalogError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use signalbus::CatalogError;
    ///
    /// let err = CatalogError::DuplicateTrack { id: "intro".into() };
    /// assert_eq!(err.as_label(), "duplicate_track");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            CatalogError::DuplicateTrack { .. } => "duplicate_track",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            CatalogError::DuplicateTrack { id } => format!("duplicate track; id={id}"),
        }
    }
}
