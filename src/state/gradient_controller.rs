use crate::config::GradientConfig;
use crate::host::{GradientHost, Subscription, TimerId};
use crate::scroll::{classify, EdgeVisibility, ScrollAxis, ScrollState};
use crate::throttle::{Throttle, ThrottleDecision};
use leptos::logging::debug_warn;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type ChangeObserver = Rc<dyn Fn(ScrollState)>;
type RawScrollObserver<E> = Rc<dyn Fn(&E)>;

/// Keeps a [`ScrollState`] in sync with one scrollable element.
///
/// Responsibilities:
/// - element `scroll` + window `resize` subscriptions
/// - throttled classification (leading edge, optional trailing run)
/// - change-only notification of observers
///
/// Non-responsibilities:
/// - rendering; callers derive overlays from [`Self::edge_visibility`]
///
/// Cheap to clone; clones share the same state.
pub struct GradientController<H: GradientHost> {
    inner: Rc<ControllerInner<H>>,
}

impl<H: GradientHost> Clone for GradientController<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct Attachment<H: GradientHost> {
    element: Option<H::Element>,
    axis: ScrollAxis,
    _subscriptions: Vec<Subscription>,
}

struct ControllerInner<H: GradientHost> {
    host: H,
    state: Cell<ScrollState>,
    hide_start: Cell<bool>,
    classifications: Cell<u64>,

    throttle: RefCell<Throttle>,
    trailing_timer: Cell<Option<TimerId>>,

    attachment: RefCell<Option<Attachment<H>>>,

    on_change: RefCell<Option<ChangeObserver>>,
    on_raw_scroll: RefCell<Option<RawScrollObserver<H::Event>>>,
}

impl<H: GradientHost> GradientController<H> {
    pub fn new(host: H, config: &GradientConfig) -> Self {
        Self {
            inner: Rc::new(ControllerInner {
                host,
                state: Cell::new(ScrollState::None),
                hide_start: Cell::new(false),
                classifications: Cell::new(0),
                throttle: RefCell::new(Throttle::new(config.throttle_ms, config.trailing)),
                trailing_timer: Cell::new(None),
                attachment: RefCell::new(None),
                on_change: RefCell::new(None),
                on_raw_scroll: RefCell::new(None),
            }),
        }
    }

    fn from_weak(weak: &Weak<ControllerInner<H>>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    pub fn state(&self) -> ScrollState {
        self.inner.state.get()
    }

    pub fn edge_visibility(&self) -> EdgeVisibility {
        EdgeVisibility::derive(self.state(), self.inner.hide_start.get())
    }

    pub fn is_attached(&self) -> bool {
        self.inner.attachment.borrow().is_some()
    }

    /// Number of times the classifier actually ran.
    pub fn classification_count(&self) -> u64 {
        self.inner.classifications.get()
    }

    /// Called with the new state, only when it differs from the held one.
    pub fn set_on_change(&self, f: impl Fn(ScrollState) + 'static) {
        *self.inner.on_change.borrow_mut() = Some(Rc::new(f));
    }

    /// Called for every raw scroll notification, before throttling.
    pub fn set_on_raw_scroll(&self, f: impl Fn(&H::Event) + 'static) {
        *self.inner.on_raw_scroll.borrow_mut() = Some(Rc::new(f));
    }

    /// Bind to `element`, replacing any previous attachment, and classify
    /// right away.
    ///
    /// `None` keeps the controller attached but inert: signals are no-ops and
    /// the held state is left untouched until a real element is attached.
    pub fn attach(&self, element: Option<H::Element>, axis: ScrollAxis, hide_start: bool) {
        self.detach();

        let subscriptions = match &element {
            Some(el) => self.subscribe(el),
            None => {
                debug_warn!("scroll gradient attached without an element; keeping state {}", self.state());
                Vec::new()
            }
        };

        self.inner.hide_start.set(hide_start);
        *self.inner.attachment.borrow_mut() = Some(Attachment {
            element,
            axis,
            _subscriptions: subscriptions,
        });

        self.on_geometry_changed_signal();
    }

    fn subscribe(&self, element: &H::Element) -> Vec<Subscription> {
        let weak = Rc::downgrade(&self.inner);
        let on_scroll = self.inner.host.listen_scroll(
            element,
            Rc::new(move |ev: &H::Event| {
                if let Some(c) = Self::from_weak(&weak) {
                    c.handle_raw_scroll(ev);
                }
            }),
        );

        let weak = Rc::downgrade(&self.inner);
        let on_resize = self.inner.host.listen_resize(Rc::new(move || {
            if let Some(c) = Self::from_weak(&weak) {
                c.on_geometry_changed_signal();
            }
        }));

        vec![on_scroll, on_resize]
    }

    /// Release listeners and any pending trailing run. Safe to call twice.
    pub fn detach(&self) {
        let previous = self.inner.attachment.borrow_mut().take();
        // Subscriptions cancel on drop.
        drop(previous);

        self.cancel_trailing_timer();
        self.inner.throttle.borrow_mut().reset();
    }

    fn handle_raw_scroll(&self, ev: &H::Event) {
        if !self.is_attached() {
            return;
        }

        let observer = self.inner.on_raw_scroll.borrow().clone();
        if let Some(f) = observer {
            f(ev);
        }

        self.on_geometry_changed_signal();
    }

    /// Scroll, resize or attach happened; classify subject to the throttle.
    pub fn on_geometry_changed_signal(&self) {
        if !self.is_attached() {
            return;
        }

        let now = self.inner.host.now_ms();
        let decision = self.inner.throttle.borrow_mut().signal(now);

        match decision {
            ThrottleDecision::RunNow => {
                self.cancel_trailing_timer();
                self.update_state();
            }
            ThrottleDecision::ScheduleTrailing { delay_ms } => {
                let weak = Rc::downgrade(&self.inner);
                let timer = self.inner.host.set_timeout(
                    delay_ms,
                    Box::new(move || {
                        if let Some(c) = Self::from_weak(&weak) {
                            c.run_trailing();
                        }
                    }),
                );
                self.inner.trailing_timer.set(timer);
            }
            ThrottleDecision::Coalesced => {}
        }
    }

    fn run_trailing(&self) {
        self.inner.trailing_timer.set(None);
        if !self.is_attached() {
            return;
        }

        let now = self.inner.host.now_ms();
        let owed = self.inner.throttle.borrow_mut().fire_trailing(now);
        if owed {
            self.update_state();
        }
    }

    fn cancel_trailing_timer(&self) {
        if let Some(id) = self.inner.trailing_timer.take() {
            self.inner.host.clear_timeout(id);
        }
    }

    fn update_state(&self) {
        let read = {
            let attachment = self.inner.attachment.borrow();
            let Some(Attachment {
                element: Some(element),
                axis,
                ..
            }) = attachment.as_ref()
            else {
                return;
            };
            let axis = *axis;
            let geometry = self.inner.host.read_geometry(element, axis);
            geometry.map(move |g| (g, axis))
        };

        let Some((geometry, axis)) = read else {
            debug_warn!("scroll geometry unavailable; keeping state {}", self.state());
            return;
        };

        let next = classify(&geometry, axis);
        self.inner.classifications.set(self.inner.classifications.get() + 1);

        if next == self.inner.state.get() {
            return;
        }
        self.inner.state.set(next);

        let observer = self.inner.on_change.borrow().clone();
        if let Some(f) = observer {
            f(next);
        }
    }
}

impl<H: GradientHost> Drop for ControllerInner<H> {
    fn drop(&mut self) {
        if let Some(id) = self.trailing_timer.take() {
            self.host.clear_timeout(id);
        }
    }
}

impl<H: GradientHost> std::fmt::Debug for GradientController<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GradientController")
            .field("state", &self.state())
            .field("attached", &self.is_attached())
            .field("classifications", &self.classification_count())
            .finish()
    }
}
