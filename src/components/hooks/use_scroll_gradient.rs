use crate::config::GradientConfig;
use crate::host::BrowserHost;
use crate::scroll::{EdgeVisibility, ScrollAxis, ScrollState};
use crate::state::GradientController;
use leptos::html;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct ScrollGradientHandle {
    pub state: ReadSignal<ScrollState>,
    pub visibility: Signal<EdgeVisibility>,
}

/// Hook tracking the scroll state of the element behind `node_ref`
///
/// - attaches a [`GradientController`] once the node mounts (and again if it
///   is replaced), detaches on cleanup
/// - `on_scroll` receives every raw `scroll` event, unthrottled
/// - `on_node` is told when the scrollable node appears (`Some`) or goes
///   away (`None`)
///
/// The returned `state` only changes when the classification changes, so
/// bouncing inside one state does not re-render.
pub fn use_scroll_gradient(
    node_ref: NodeRef<html::Div>,
    axis: ScrollAxis,
    hide_start: bool,
    config: &GradientConfig,
    on_scroll: Option<Callback<web_sys::Event>>,
    on_node: Option<Callback<Option<web_sys::HtmlElement>>>,
) -> ScrollGradientHandle {
    let state = RwSignal::new(ScrollState::default());

    let controller = GradientController::new(BrowserHost, config);
    controller.set_on_change(move |s| state.set(s));
    if let Some(cb) = on_scroll {
        controller.set_on_raw_scroll(move |ev: &web_sys::Event| cb.run(ev.clone()));
    }

    // Rc-based controller; keep it in local arena storage.
    let controller = StoredValue::new_local(controller);

    Effect::new(move |_| {
        let element: Option<web_sys::HtmlElement> = node_ref.get().map(Into::into);
        controller.with_value(|c| c.attach(element.clone(), axis, hide_start));
        // Only `node_ref` may drive re-attachment; whatever the callback reads
        // must not subscribe this effect.
        if let Some(cb) = on_node {
            untrack(move || cb.run(element));
        }
    });

    on_cleanup(move || {
        let _ = controller.try_with_value(|c| c.detach());
        if let Some(cb) = on_node {
            cb.run(None);
        }
    });

    let visibility = Signal::derive(move || EdgeVisibility::derive(state.get(), hide_start));

    ScrollGradientHandle {
        state: state.read_only(),
        visibility,
    }
}
