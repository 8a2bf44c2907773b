mod browser;

pub use browser::BrowserHost;

use crate::scroll::{ScrollAxis, ScrollGeometry};
use std::rc::Rc;

/// Handle returned by [`GradientHost::set_timeout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// A cancelable listener registration.
///
/// Dropping the subscription cancels it.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to release (listener could not be added).
    pub fn empty() -> Self {
        Self { cancel: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Everything the gradient controller needs from its environment.
///
/// The browser implementation is [`BrowserHost`]; tests drive the controller
/// through an in-memory host with a manual clock.
pub trait GradientHost: 'static {
    type Element: Clone + 'static;
    type Event: 'static;

    /// `None` when the node cannot report geometry (not scrollable, not in
    /// the document, ...).
    fn read_geometry(&self, element: &Self::Element, axis: ScrollAxis) -> Option<ScrollGeometry>;

    /// Monotonic milliseconds.
    fn now_ms(&self) -> f64;

    fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> Option<TimerId>;

    fn clear_timeout(&self, id: TimerId);

    fn listen_scroll(&self, element: &Self::Element, callback: Rc<dyn Fn(&Self::Event)>) -> Subscription;

    fn listen_resize(&self, callback: Rc<dyn Fn()>) -> Subscription;
}
