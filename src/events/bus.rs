//! # Topic-keyed event bus with inline dispatch.
//!
//! [`EventBus`] maps topic names to ordered lists of subscriber handles and
//! invokes subscribers synchronously, inline within `publish`.
//!
//! ## Architecture
//! ```text
//! Publishers (many):                      Subscribers (per topic, ordered):
//!   module A ──┐
//!   module B ──┼── publish(topic, &p) ──► registry[topic] ── snapshot ──► s1.on_event()
//!   module C ──┘                          (RwLock<HashMap>)               s2.on_event()
//!                                                                         s3.on_event()
//! ```
//!
//! ## Rules
//! - **Snapshot-before-invoke**: `publish` copies the topic's subscriber list
//!   under the read lock, releases the lock, then iterates the copy. A
//!   subscriber registered during a publish is not invoked by that publish;
//!   a subscriber removed mid-publish still receives the running one.
//! - **Panic isolation**: each invocation is wrapped in `catch_unwind`; a
//!   panicking subscriber is reported and the remaining subscribers run.
//! - **No empty entries**: a topic is removed from the registry as soon as its
//!   last subscriber is removed.
//! - **No delivery guarantees across topics**: only subscription order within
//!   a single publish is guaranteed.
//!
//! ## Reentrancy
//! No lock is held while subscribers run, so a subscriber may call any bus
//! operation (including `publish`) without deadlocking. Cross-thread ordering
//! of two publishes to the same topic is caller-determined, not bus-determined.

use std::any::Any;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::DispatchError;
use crate::subscribers::{Subscribe, SubscriberRef};

/// Topic-keyed publish/subscribe registry.
///
/// Generic over the payload type `P`: one bus instance carries one payload
/// type, and subscribers receive `&P`. Construct it explicitly and hand it to
/// the modules that need it (wrap in [`Arc`] to share across threads); there
/// is no global instance.
///
/// ### Properties
/// - **Synchronous**: subscribers run inline within [`EventBus::publish`].
/// - **Infallible surface**: no operation returns an error; invalid input is
///   reported on the log channel and ignored.
/// - **Order-preserving**: subscribers fire in subscription order.
pub struct EventBus<P: 'static> {
    registry: RwLock<HashMap<String, Vec<SubscriberRef<P>>>>,
}

impl<P> EventBus<P> {
    /// Creates an empty bus.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a subscriber for a topic, creating the topic entry if absent.
    ///
    /// Registration is append-only and not de-duplicated: subscribing the same
    /// handle twice means two invocations per publish.
    ///
    /// An empty topic is rejected (reported, no registration). A "null"
    /// subscriber cannot be expressed; the type system discharges that check.
    pub fn subscribe(&self, topic: &str, subscriber: SubscriberRef<P>) {
        if topic.is_empty() {
            report_empty_topic("subscribe");
            return;
        }
        let mut registry = self.registry.write();
        registry.entry(topic.to_owned()).or_default().push(subscriber);
    }

    /// Removes the first occurrence of `subscriber` from a topic.
    ///
    /// Matching is by `Arc` pointer identity, so pass a clone of the handle
    /// that was registered. If duplicates exist, one occurrence is removed per
    /// call. An unknown topic or an unregistered handle is a benign no-op.
    ///
    /// Removing the last subscriber removes the topic entry entirely.
    pub fn unsubscribe(&self, topic: &str, subscriber: &SubscriberRef<P>) {
        let mut registry = self.registry.write();
        let Some(subscribers) = registry.get_mut(topic) else {
            tracing::debug!(topic, "unsubscribe on unknown topic ignored");
            return;
        };
        let Some(pos) = subscribers
            .iter()
            .position(|s| Arc::ptr_eq(s, subscriber))
        else {
            tracing::debug!(
                topic,
                subscriber = subscriber.name(),
                "unsubscribe on unregistered subscriber ignored"
            );
            return;
        };
        subscribers.remove(pos);
        if subscribers.is_empty() {
            registry.remove(topic);
        }
    }

    /// Publishes a payload to every subscriber of a topic, in subscription order.
    ///
    /// Takes a snapshot of the topic's subscriber list, releases the registry
    /// lock, then invokes each subscriber with `payload`. Each invocation is
    /// individually fault-isolated: a panic is caught, reported with the topic
    /// and subscriber name, and iteration continues. A panicking subscriber
    /// never prevents later subscribers from receiving the event, nor does the
    /// panic reach the publisher.
    ///
    /// Publishing to a topic with no subscribers is a silent no-op; an empty
    /// topic is reported and ignored.
    pub fn publish(&self, topic: &str, payload: &P) {
        if topic.is_empty() {
            report_empty_topic("publish");
            return;
        }
        let snapshot = {
            let registry = self.registry.read();
            match registry.get(topic) {
                Some(subscribers) => subscribers.clone(),
                None => return,
            }
        };
        for subscriber in &snapshot {
            let call = catch_unwind(AssertUnwindSafe(|| subscriber.on_event(topic, payload)));
            if let Err(panic) = call {
                let err = DispatchError::SubscriberPanicked {
                    topic: topic.to_owned(),
                    subscriber: subscriber.name().to_owned(),
                    detail: panic_detail(panic),
                };
                tracing::error!(label = err.as_label(), "{}", err.as_message());
            }
        }
    }

    /// Publishes the payload type's default value to a topic.
    ///
    /// Shorthand for `publish(topic, &P::default())`, for events where the
    /// topic itself is the whole message.
    pub fn publish_default(&self, topic: &str)
    where
        P: Default,
    {
        self.publish(topic, &P::default());
    }

    /// Returns true iff the topic currently has at least one subscriber.
    ///
    /// Empty topics are never present in the registry, and neither are topics
    /// whose last subscriber was removed, so presence alone answers this.
    pub fn has_subscribers(&self, topic: &str) -> bool {
        self.registry.read().contains_key(topic)
    }

    /// Returns the number of subscribers currently registered for a topic.
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.registry.read().get(topic).map_or(0, Vec::len)
    }

    /// Removes all subscribers for a topic; no-op if the topic is absent.
    pub fn clear_topic(&self, topic: &str) {
        self.registry.write().remove(topic);
    }

    /// Empties the entire registry in one atomic step.
    pub fn clear_all(&self) {
        self.registry.write().clear();
    }

    /// Returns the sorted list of topics that currently have subscribers.
    pub fn topics(&self) -> Vec<String> {
        let registry = self.registry.read();
        let mut names: Vec<String> = registry.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Returns true if no topic has any subscriber.
    pub fn is_empty(&self) -> bool {
        self.registry.read().is_empty()
    }
}

impl<P> Default for EventBus<P> {
    fn default() -> Self {
        Self::new()
    }
}

fn report_empty_topic(op: &'static str) {
    let err = DispatchError::EmptyTopic { op };
    tracing::error!(label = err.as_label(), "{}", err.as_message());
}

/// Extracts a printable message from a caught panic payload.
fn panic_detail(panic: Box<dyn Any + Send>) -> String {
    if let Some(msg) = panic.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
