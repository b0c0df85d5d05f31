//! # signalbus
//!
//! **Signalbus** is a lightweight in-process publish/subscribe library for Rust.
//!
//! It provides a topic-keyed event bus with synchronous, inline dispatch:
//! producers publish a payload under a topic name, and every subscriber
//! registered for that topic is invoked in subscription order. The crate is
//! designed as a building block for decoupling modules inside one process.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!  Producers (any module):                 Consumers (any module):
//!
//!    publish("score_changed", &p)            impl Subscribe / SubscriberFn
//!            │                                           ▲
//!            ▼                                           │ on_event(topic, &p)
//!  ┌─────────────────────────────────────────────────────┴─────┐
//!  │  EventBus<P>                                              │
//!  │  registry: topic ──► [subscriber, subscriber, ...]        │
//!  │  - snapshot-before-invoke publish                         │
//!  │  - per-subscriber panic isolation                         │
//!  │  - topic entry removed with its last subscriber           │
//!  └───────────────────────────────────────────────────────────┘
//!            ▲
//!            │ announces TrackRegistered / TrackRemoved / CatalogCleared
//!  ┌─────────┴─────────┐
//!  │  TrackCatalog     │  keyed metadata table + linear-scan queries
//!  └───────────────────┘
//! ```
//!
//! ### Dispatch semantics
//! ```text
//! publish(topic, &payload)
//!   ├─► empty topic ─► report, return
//!   ├─► snapshot = registry[topic].clone()   (read lock, then released)
//!   └─► for subscriber in snapshot:
//!         ├─► catch_unwind(subscriber.on_event(topic, &payload))
//!         └─► panic ─► report (topic, subscriber, detail), continue
//!
//! Consequences:
//!   - a subscriber registered during a publish joins the NEXT publish
//!   - a subscriber removed during a publish still receives the running one
//!   - a panicking subscriber never hides the event from later subscribers
//! ```
//!
//! ## Features
//! | Area             | Description                                                   | Key types / traits                  |
//! |------------------|---------------------------------------------------------------|-------------------------------------|
//! | **Dispatch**     | Topic-keyed subscribe/unsubscribe/publish with bulk clears.   | [`EventBus`]                        |
//! | **Subscribers**  | Named handlers, plain closures, shared handles.               | [`Subscribe`], [`SubscriberFn`]     |
//! | **Errors**       | Typed diagnostic/operation errors with stable log labels.     | [`DispatchError`], [`CatalogError`] |
//! | **Track catalog**| Keyed metadata records, scans, bus announcements.             | [`TrackCatalog`], [`TrackMeta`]     |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use signalbus::{EventBus, SubscriberFn, SubscriberRef};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct ScoreChanged {
//!     score: u32,
//! }
//!
//! let bus = EventBus::new();
//!
//! let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//! let scoreboard: SubscriberRef<ScoreChanged> =
//!     SubscriberFn::arc("scoreboard", move |ev: &ScoreChanged| {
//!         sink.lock().unwrap().push(ev.score);
//!     });
//!
//! bus.subscribe("score_changed", Arc::clone(&scoreboard));
//! bus.publish("score_changed", &ScoreChanged { score: 10 });
//!
//! bus.unsubscribe("score_changed", &scoreboard);
//! bus.publish("score_changed", &ScoreChanged { score: 20 });
//!
//! assert_eq!(*seen.lock().unwrap(), vec![10]);
//! assert!(!bus.has_subscribers("score_changed"));
//! ```

mod error;
mod events;
mod subscribers;
mod tracks;

// ---- Public re-exports ----

pub use error::{CatalogError, DispatchError};
pub use events::EventBus;
pub use subscribers::{Subscribe, SubscriberFn, SubscriberRef};
pub use tracks::{topics, CatalogEvent, Tier, TrackCatalog, TrackMeta};

// Optional: expose a simple built-in logging subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
