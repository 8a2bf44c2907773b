use leptos::html;
use leptos::logging::debug_warn;
use leptos::prelude::*;
use leptos_ui::void;
use tw_merge::*;

use crate::components::hooks::use_scroll_gradient;
use crate::config::GradientConfig;
use crate::scroll::ScrollAxis;
use crate::util::{fade_gradient_css, parse_color_to_rgb, FadeDirection, Rgb};

mod components {
    use super::*;
    void! {ScrollGradientOverlay, div, "pointer-events-none absolute z-10"}
}

pub use components::*;

/* ========================================================== */
/*                     ✨ COMPONENTS ✨                       */
/* ========================================================== */

/// Scroll container with fades on the edges that still have content behind
/// them.
///
/// The root carries `scroll-gradient--{none|initial|started|end}` for custom
/// styling.
#[component]
pub fn ScrollGradient(
    children: Children,
    #[prop(into, optional)] axis: ScrollAxis,
    #[prop(optional)] hide_start_gradient: bool,
    /// `#rgb`, `#rrggbb`, `rgb(..)` or `rgba(..)`; invalid values fall back to white.
    #[prop(into, optional)]
    color: Option<String>,
    /// Fade length in px along the scroll axis.
    #[prop(optional)]
    fade_size: Option<u32>,
    /// Every raw `scroll` event, unthrottled.
    #[prop(optional)]
    on_scroll: Option<Callback<web_sys::Event>>,
    /// Scrollable node mounted (`Some`) / unmounted (`None`).
    #[prop(optional)]
    on_node: Option<Callback<Option<web_sys::HtmlElement>>>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let config = GradientConfig::new();
    let fade_size = fade_size.unwrap_or(config.fade_size_px);
    let rgb = resolve_color(color.as_deref().unwrap_or(&config.color));

    let viewport_ref: NodeRef<html::Div> = NodeRef::new();
    let handle = use_scroll_gradient(viewport_ref, axis, hide_start_gradient, &config, on_scroll, on_node);

    let root_class = move || {
        let modifier = format!("scroll-gradient scroll-gradient--{}", handle.state.get());
        tw_merge!("relative overflow-hidden", modifier, class.clone())
    };

    let viewport_class = GradientViewportClass {
        axis: GradientViewportAxis::from(axis),
    }
    .with_class(String::new());

    let (start_placement, end_placement, start_dir, end_dir) = match axis {
        ScrollAxis::Vertical => ("inset-x-0 top-0", "inset-x-0 bottom-0", FadeDirection::Bottom, FadeDirection::Top),
        ScrollAxis::Horizontal => ("inset-y-0 left-0", "inset-y-0 right-0", FadeDirection::Right, FadeDirection::Left),
    };
    let start_style = overlay_style(rgb, start_dir, axis, fade_size);
    let end_style = overlay_style(rgb, end_dir, axis, fade_size);

    view! {
        <div data-name="ScrollGradient" class=root_class>
            <Show when=move || handle.visibility.get().start fallback=|| ().into_view()>
                <ScrollGradientOverlay
                    class=format!("scroll-gradient__start {start_placement}")
                    attr:style=start_style.clone()
                    attr:aria-hidden="true"
                />
            </Show>
            <div data-name="ScrollGradientViewport" class=viewport_class node_ref=viewport_ref>
                {children()}
            </div>
            <Show when=move || handle.visibility.get().end fallback=|| ().into_view()>
                <ScrollGradientOverlay
                    class=format!("scroll-gradient__end {end_placement}")
                    attr:style=end_style.clone()
                    attr:aria-hidden="true"
                />
            </Show>
        </div>
    }
}

fn resolve_color(raw: &str) -> Rgb {
    match parse_color_to_rgb(raw) {
        Ok(rgb) => rgb,
        Err(e) => {
            debug_warn!("scroll gradient color {raw:?}: {e}; using white");
            Rgb::WHITE
        }
    }
}

fn overlay_style(rgb: Rgb, direction: FadeDirection, axis: ScrollAxis, size_px: u32) -> String {
    let dimension = match axis {
        ScrollAxis::Vertical => "height",
        ScrollAxis::Horizontal => "width",
    };
    format!("{dimension}: {size_px}px; background: {};", fade_gradient_css(rgb, direction))
}

/* ========================================================== */
/*                       🧬 STRUCT 🧬                         */
/* ========================================================== */

#[derive(TwClass, Default)]
#[tw(class = "size-full")]
pub struct GradientViewportClass {
    axis: GradientViewportAxis,
}

#[derive(TwVariant)]
pub enum GradientViewportAxis {
    #[tw(default, class = "overflow-y-auto overflow-x-hidden")]
    Vertical,
    #[tw(class = "overflow-x-auto overflow-y-hidden")]
    Horizontal,
}

impl From<ScrollAxis> for GradientViewportAxis {
    fn from(axis: ScrollAxis) -> Self {
        match axis {
            ScrollAxis::Vertical => Self::Vertical,
            ScrollAxis::Horizontal => Self::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_style_uses_axis_dimension() {
        let s = overlay_style(Rgb::WHITE, FadeDirection::Right, ScrollAxis::Horizontal, 24);
        assert_eq!(
            s,
            "width: 24px; background: linear-gradient(to right, rgba(255, 255, 255, 1), rgba(255, 255, 255, 0));"
        );
        assert!(overlay_style(Rgb::WHITE, FadeDirection::Bottom, ScrollAxis::Vertical, 40).starts_with("height: 40px;"));
    }

    #[test]
    fn test_invalid_color_falls_back_to_white() {
        assert_eq!(resolve_color("not-a-color"), Rgb::WHITE);
        assert_eq!(resolve_color("#000"), Rgb { r: 0, g: 0, b: 0 });
    }
}
