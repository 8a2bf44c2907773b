pub mod use_scroll_gradient;

pub use use_scroll_gradient::{use_scroll_gradient, ScrollGradientHandle};
