//! Event dispatch: the topic registry and publish pipeline.
//!
//! ## Contents
//! - [`EventBus`] topic-keyed registry with snapshot-before-invoke publish
//!
//! ## Quick reference
//! - **Publishers**: any code holding (a reference to) the bus.
//! - **Consumers**: [`Subscribe`](crate::Subscribe) implementations registered
//!   per topic, e.g. [`SubscriberFn`](crate::SubscriberFn) closures or the
//!   track catalog's announcement listeners.

mod bus;

pub use bus::EventBus;
