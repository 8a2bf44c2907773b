use leptos::logging::debug_warn;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, IntoStaticStr};

/// Which scroll direction the classifier reads.
///
/// Unknown strings parse to `Vertical` instead of failing, so a bad prop or
/// config value degrades to the common case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, IntoStaticStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(from = "String", into = "&'static str")]
pub enum ScrollAxis {
    Horizontal,
    #[default]
    Vertical,
}

impl ScrollAxis {
    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            other => {
                debug_warn!("unsupported scroll axis {other:?}, falling back to vertical");
                Self::Vertical
            }
        }
    }
}

impl From<String> for ScrollAxis {
    fn from(raw: String) -> Self {
        Self::parse_lenient(&raw)
    }
}

impl From<&str> for ScrollAxis {
    fn from(raw: &str) -> Self {
        Self::parse_lenient(raw)
    }
}

/// Discrete scroll position of a container on its active axis.
///
/// The lowercase name doubles as the CSS modifier (`scroll-gradient--initial`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScrollState {
    /// Content fits; nothing to scroll.
    #[default]
    None,
    /// Scrollable and resting at the start edge.
    Initial,
    /// Somewhere between the two edges.
    Started,
    /// Scrolled exactly to the end edge.
    End,
}

/// Scroll metrics along one axis, in the units the host reports.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisMetrics {
    pub scroll_extent: f64,
    pub client_extent: f64,
    pub offset: f64,
}

impl AxisMetrics {
    pub fn new(scroll_extent: f64, client_extent: f64, offset: f64) -> Self {
        Self {
            scroll_extent,
            client_extent,
            offset,
        }
    }
}

/// Snapshot of an element's scroll geometry on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollGeometry {
    pub horizontal: AxisMetrics,
    pub vertical: AxisMetrics,
}

impl ScrollGeometry {
    pub fn metrics(&self, axis: ScrollAxis) -> AxisMetrics {
        match axis {
            ScrollAxis::Horizontal => self.horizontal,
            ScrollAxis::Vertical => self.vertical,
        }
    }

    /// Geometry with only `axis` populated; the other axis is left empty.
    pub fn along(axis: ScrollAxis, metrics: AxisMetrics) -> Self {
        match axis {
            ScrollAxis::Horizontal => Self {
                horizontal: metrics,
                ..Self::default()
            },
            ScrollAxis::Vertical => Self {
                vertical: metrics,
                ..Self::default()
            },
        }
    }
}

/// Classify a geometry snapshot on `axis`.
///
/// Comparisons are exact. Browsers report fractional offsets on zoomed or
/// high-DPI pages, so a container can flip between `Started` and `End` near
/// the boundary; that matches what the DOM reports and is left as is.
pub fn classify(geometry: &ScrollGeometry, axis: ScrollAxis) -> ScrollState {
    let m = geometry.metrics(axis);

    if m.scroll_extent == m.client_extent {
        ScrollState::None
    } else if m.offset == 0.0 {
        ScrollState::Initial
    } else if m.offset + m.client_extent == m.scroll_extent {
        ScrollState::End
    } else {
        ScrollState::Started
    }
}

/// Which fade overlays should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeVisibility {
    pub start: bool,
    pub end: bool,
}

impl EdgeVisibility {
    // NOTE: there is no `hide_end`; the end fade always follows the state.
    pub fn derive(state: ScrollState, hide_start: bool) -> Self {
        let scrollable = state != ScrollState::None;
        Self {
            start: !hide_start && scrollable,
            end: scrollable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical(scroll: f64, client: f64, offset: f64) -> ScrollGeometry {
        ScrollGeometry::along(ScrollAxis::Vertical, AxisMetrics::new(scroll, client, offset))
    }

    #[test]
    fn test_classify_fitting_content_is_none_regardless_of_offset() {
        for offset in [0.0, 1.0, 250.5, 500.0, -3.0] {
            assert_eq!(classify(&vertical(500.0, 500.0, offset), ScrollAxis::Vertical), ScrollState::None);
        }
    }

    #[test]
    fn test_classify_zero_size_container_is_none() {
        assert_eq!(classify(&ScrollGeometry::default(), ScrollAxis::Vertical), ScrollState::None);
        assert_eq!(classify(&ScrollGeometry::default(), ScrollAxis::Horizontal), ScrollState::None);
    }

    #[test]
    fn test_classify_scenarios() {
        assert_eq!(classify(&vertical(1000.0, 400.0, 0.0), ScrollAxis::Vertical), ScrollState::Initial);
        assert_eq!(classify(&vertical(1000.0, 400.0, 600.0), ScrollAxis::Vertical), ScrollState::End);
        assert_eq!(classify(&vertical(1000.0, 400.0, 300.0), ScrollAxis::Vertical), ScrollState::Started);
    }

    #[test]
    fn test_classify_initial_for_any_scrollable_at_zero() {
        for (scroll, client) in [(1000.0, 400.0), (401.0, 400.0), (10.5, 0.0)] {
            assert_eq!(classify(&vertical(scroll, client, 0.0), ScrollAxis::Vertical), ScrollState::Initial);
        }
    }

    #[test]
    fn test_classify_end_requires_exact_sum() {
        assert_eq!(classify(&vertical(1000.0, 400.0, 599.5), ScrollAxis::Vertical), ScrollState::Started);
        assert_eq!(classify(&vertical(1000.0, 400.5, 599.5), ScrollAxis::Vertical), ScrollState::End);
    }

    #[test]
    fn test_classify_none_wins_over_end_when_offset_is_zero() {
        // offset + client == scroll also holds here, but rule 1 comes first.
        assert_eq!(classify(&vertical(400.0, 400.0, 0.0), ScrollAxis::Vertical), ScrollState::None);
    }

    #[test]
    fn test_classify_reads_only_the_active_axis() {
        let g = ScrollGeometry {
            horizontal: AxisMetrics::new(800.0, 200.0, 600.0),
            vertical: AxisMetrics::new(300.0, 300.0, 0.0),
        };
        assert_eq!(classify(&g, ScrollAxis::Horizontal), ScrollState::End);
        assert_eq!(classify(&g, ScrollAxis::Vertical), ScrollState::None);
    }

    #[test]
    fn test_edge_visibility_derivation() {
        assert_eq!(
            EdgeVisibility::derive(ScrollState::None, false),
            EdgeVisibility { start: false, end: false }
        );
        assert_eq!(
            EdgeVisibility::derive(ScrollState::Initial, false),
            EdgeVisibility { start: true, end: true }
        );
        for state in [ScrollState::None, ScrollState::Initial, ScrollState::Started, ScrollState::End] {
            let v = EdgeVisibility::derive(state, true);
            assert!(!v.start);
            assert_eq!(v.end, state != ScrollState::None);
        }
    }

    #[test]
    fn test_state_modifier_names() {
        assert_eq!(ScrollState::None.as_ref(), "none");
        assert_eq!(ScrollState::Initial.as_ref(), "initial");
        assert_eq!(ScrollState::Started.to_string(), "started");
        assert_eq!(ScrollState::End.as_ref(), "end");
    }

    #[test]
    fn test_axis_parse_falls_back_to_vertical() {
        assert_eq!(ScrollAxis::parse_lenient("Horizontal"), ScrollAxis::Horizontal);
        assert_eq!(ScrollAxis::parse_lenient(" vertical "), ScrollAxis::Vertical);
        assert_eq!(ScrollAxis::parse_lenient("diagonal"), ScrollAxis::Vertical);
        assert_eq!(ScrollAxis::from(""), ScrollAxis::Vertical);
    }

    #[test]
    fn test_axis_serde_is_lenient() {
        let axis: ScrollAxis = serde_json::from_str(r#""horizontal""#).expect("should parse");
        assert_eq!(axis, ScrollAxis::Horizontal);
        let axis: ScrollAxis = serde_json::from_str(r#""sideways""#).expect("should fall back");
        assert_eq!(axis, ScrollAxis::Vertical);
        assert_eq!(serde_json::to_string(&ScrollAxis::Horizontal).expect("should serialize"), r#""horizontal""#);
    }
}
