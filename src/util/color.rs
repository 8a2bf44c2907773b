use strum::{AsRefStr, Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub fn rgba_css(&self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorParseErrorKind {
    Empty,
    Hex,
    Function,
    Channel,
}

#[derive(Clone, Debug)]
pub struct ColorParseError {
    pub kind: ColorParseErrorKind,
    pub message: String,
}

impl std::fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ColorParseError {}

impl ColorParseError {
    fn new(kind: ColorParseErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Parse `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`.
///
/// Alpha is validated but dropped: fades always run from opaque to clear.
pub fn parse_color_to_rgb(input: &str) -> Result<Rgb, ColorParseError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorParseError::new(ColorParseErrorKind::Empty, "empty color"));
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba") {
        return parse_channels(args, true);
    }
    if let Some(args) = function_args(&lower, "rgb") {
        return parse_channels(args, false);
    }

    Err(ColorParseError::new(
        ColorParseErrorKind::Function,
        format!("unsupported color {s:?}"),
    ))
}

fn function_args<'a>(s: &'a str, name: &str) -> Option<&'a str> {
    s.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorParseError> {
    let bad = || ColorParseError::new(ColorParseErrorKind::Hex, format!("invalid hex color #{hex}"));

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }

    let channel = |i: usize, width: usize| -> Result<u8, ColorParseError> {
        let v = u8::from_str_radix(&hex[i * width..(i + 1) * width], 16).map_err(|_| bad())?;
        // #abc expands to #aabbcc
        Ok(if width == 1 { v * 17 } else { v })
    };

    match hex.len() {
        3 => Ok(Rgb {
            r: channel(0, 1)?,
            g: channel(1, 1)?,
            b: channel(2, 1)?,
        }),
        6 => Ok(Rgb {
            r: channel(0, 2)?,
            g: channel(1, 2)?,
            b: channel(2, 2)?,
        }),
        _ => Err(bad()),
    }
}

fn parse_channels(args: &str, with_alpha: bool) -> Result<Rgb, ColorParseError> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return Err(ColorParseError::new(
            ColorParseErrorKind::Function,
            format!("expected {expected} components, got {}", parts.len()),
        ));
    }

    let channel = |raw: &str| -> Result<u8, ColorParseError> {
        raw.parse::<u8>()
            .map_err(|_| ColorParseError::new(ColorParseErrorKind::Channel, format!("invalid channel {raw:?}")))
    };

    if with_alpha {
        let alpha = parts[3]
            .parse::<f32>()
            .map_err(|_| ColorParseError::new(ColorParseErrorKind::Channel, format!("invalid alpha {:?}", parts[3])))?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColorParseError::new(
                ColorParseErrorKind::Channel,
                format!("alpha out of range: {alpha}"),
            ));
        }
    }

    Ok(Rgb {
        r: channel(parts[0])?,
        g: channel(parts[1])?,
        b: channel(parts[2])?,
    })
}

/// CSS direction keyword the fade runs towards (from opaque to clear).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FadeDirection {
    Top,
    Bottom,
    Left,
    Right,
}

pub fn fade_gradient_css(color: Rgb, direction: FadeDirection) -> String {
    format!(
        "linear-gradient(to {}, {}, {})",
        direction,
        color.rgba_css(1.0),
        color.rgba_css(0.0)
    )
}
