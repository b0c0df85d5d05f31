//! # Event subscribers for the signalbus dispatcher.
//!
//! This module provides the [`Subscribe`] trait, the shared handle type
//! [`SubscriberRef`], and built-in implementations for handling events
//! published through the [`EventBus`](crate::EventBus).
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   publisher ── publish(topic, &payload) ──► EventBus ──► snapshot of topic list
//!                                                              │
//!                                                              ├──► Subscribe::on_event(topic, &payload)
//!                                                              │         │
//!                                                              │    ┌────┴───────┬──────────┐
//!                                                              │    ▼            ▼          ▼
//!                                                              │  SubscriberFn  LogWriter  Custom
//!                                                              │
//!                                                              └──► panic → caught + reported, next subscriber runs
//! ```
//!
//! ## Implementing custom subscribers
//! ```
//! use signalbus::Subscribe;
//!
//! struct Metrics;
//!
//! impl Subscribe<u64> for Metrics {
//!     fn on_event(&self, topic: &str, _payload: &u64) {
//!         match topic {
//!             "score_changed" => {
//!                 // increment counter
//!             }
//!             _ => {}
//!         }
//!     }
//! }
//! ```

#[cfg(feature = "logging")]
mod log;
mod subscribe;
mod subscriber_fn;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use subscribe::{Subscribe, SubscriberRef};
pub use subscriber_fn::SubscriberFn;
