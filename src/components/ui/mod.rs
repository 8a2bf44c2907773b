pub mod scroll_gradient;

// Re-export component symbols so callers can `use crate::components::ui::ScrollGradient` etc.
pub use scroll_gradient::*;
