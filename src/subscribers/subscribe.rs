//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event handlers into the
//! bus. Subscribers are held as shared handles ([`SubscriberRef`]) in the
//! per-topic registry owned by [`EventBus`](crate::EventBus).
//!
//! ## Contract
//! - [`Subscribe::on_event`] is invoked synchronously, inline within `publish`,
//!   in subscription order.
//! - A panic inside `on_event` is caught by the bus, reported, and does not
//!   reach other subscribers or the publisher.
//! - Handle identity is `Arc` pointer identity: unsubscribing requires a clone
//!   of the handle that was registered.

use std::sync::Arc;

/// Contract for event subscribers.
///
/// Called inline from [`EventBus::publish`](crate::EventBus::publish).
/// Implementations should return promptly; a slow subscriber delays every
/// subscriber behind it in the same publish.
///
/// # Example
/// ```
/// use signalbus::Subscribe;
///
/// struct Scoreboard;
///
/// impl Subscribe<u32> for Scoreboard {
///     fn on_event(&self, topic: &str, score: &u32) {
///         println!("{topic}: {score}");
///     }
///
///     fn name(&self) -> &str {
///         "scoreboard"
///     }
/// }
/// ```
pub trait Subscribe<P>: Send + Sync + 'static {
    /// Handles a single published event.
    ///
    /// # Parameters
    /// - `topic`: the topic the event was published on
    /// - `payload`: reference to the published payload (shared by all subscribers)
    fn on_event(&self, topic: &str, payload: &P);

    /// Human-readable name (for logs).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared subscriber handle, suitable for registering with a bus.
///
/// The handle doubles as the subscriber's identity: [`EventBus::unsubscribe`](crate::EventBus::unsubscribe)
/// matches by `Arc` pointer equality, so keep a clone of the handle around for
/// as long as you may want to remove it.
pub type SubscriberRef<P> = Arc<dyn Subscribe<P>>;
