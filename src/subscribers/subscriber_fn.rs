//! # Function-backed subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure `F: Fn(&P)` together with a stable name,
//! so ad-hoc subscribers don't require a dedicated type. The closure receives
//! the payload only; implement [`Subscribe`] directly when the topic matters.

use std::borrow::Cow;
use std::sync::Arc;

use crate::subscribers::subscribe::Subscribe;

/// Function-backed subscriber implementation.
///
/// Wraps a payload-handling closure and a name used in panic reports.
#[derive(Debug)]
pub struct SubscriberFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> SubscriberFn<F> {
    /// Creates a new function-backed subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need a [`SubscriberRef`](crate::SubscriberRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self { name: name.into(), f }
    }

    /// Creates the subscriber and returns it as a shared handle.
    ///
    /// ## Example
    /// ```
    /// use signalbus::{Subscribe, SubscriberFn, SubscriberRef};
    ///
    /// let printer: SubscriberRef<u32> = SubscriberFn::arc("printer", |score: &u32| {
    ///     println!("score={score}");
    /// });
    /// assert_eq!(printer.name(), "printer");
    /// ```
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<P, F> Subscribe<P> for SubscriberFn<F>
where
    F: Fn(&P) + Send + Sync + 'static, // Fn, not FnMut
{
    fn on_event(&self, _topic: &str, payload: &P) {
        (self.f)(payload)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
