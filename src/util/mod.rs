pub mod color;

pub use color::{fade_gradient_css, parse_color_to_rgb, ColorParseError, FadeDirection, Rgb};
