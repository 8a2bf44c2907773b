use super::{GradientHost, Subscription, TimerId};
use crate::scroll::{AxisMetrics, ScrollAxis, ScrollGeometry};
use leptos::ev;
use leptos_dom::helpers::window_event_listener;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// DOM-backed host: `window` timers, `performance.now()`, element `scroll`
/// and window `resize` listeners.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

// `Element::scroll_top()` truncates to i32; going through the property keeps
// the fractional offsets the browser actually reports.
fn read_number(target: &JsValue, key: &str) -> Option<f64> {
    js_sys::Reflect::get(target, &JsValue::from_str(key))
        .ok()?
        .as_f64()
}

fn read_axis(target: &JsValue, scroll: &str, client: &str, offset: &str) -> Option<AxisMetrics> {
    Some(AxisMetrics::new(
        read_number(target, scroll)?,
        read_number(target, client)?,
        read_number(target, offset)?,
    ))
}

impl GradientHost for BrowserHost {
    type Element = web_sys::HtmlElement;
    type Event = web_sys::Event;

    fn read_geometry(&self, element: &Self::Element, _axis: ScrollAxis) -> Option<ScrollGeometry> {
        if !element.is_connected() {
            return None;
        }

        let target: &JsValue = element.as_ref();
        Some(ScrollGeometry {
            horizontal: read_axis(target, "scrollWidth", "clientWidth", "scrollLeft")?,
            vertical: read_axis(target, "scrollHeight", "clientHeight", "scrollTop")?,
        })
    }

    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }

    fn set_timeout(&self, delay_ms: f64, callback: Box<dyn FnOnce()>) -> Option<TimerId> {
        let win = web_sys::window()?;
        let cb = Closure::once_into_js(move || callback());

        win.set_timeout_with_callback_and_timeout_and_arguments_0(
            cb.as_ref().unchecked_ref(),
            delay_ms.ceil() as i32,
        )
        .ok()
        .map(TimerId)
    }

    fn clear_timeout(&self, id: TimerId) {
        if let Some(win) = web_sys::window() {
            win.clear_timeout_with_handle(id.0);
        }
    }

    fn listen_scroll(&self, element: &Self::Element, callback: Rc<dyn Fn(&Self::Event)>) -> Subscription {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |ev: web_sys::Event| {
            callback(&ev);
        });

        if element
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .is_err()
        {
            return Subscription::empty();
        }

        let target = element.clone();
        Subscription::new(move || {
            let _ = target.remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        })
    }

    fn listen_resize(&self, callback: Rc<dyn Fn()>) -> Subscription {
        let handle = window_event_listener(ev::resize, move |_| {
            callback();
        });
        Subscription::new(move || handle.remove())
    }
}
