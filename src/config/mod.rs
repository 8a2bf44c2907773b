use crate::throttle::DEFAULT_THROTTLE_MS;
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_FADE_COLOR: &str = "#ffffff";
pub(crate) const DEFAULT_FADE_SIZE_PX: u32 = 40;

/// Key under `window.ENV` that may hold overrides, e.g.
/// `window.ENV = { SCROLL_GRADIENT: { throttle_ms: 100 } }`.
const ENV_KEY: &str = "SCROLL_GRADIENT";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GradientConfig {
    /// Minimum time between two classifications.
    pub throttle_ms: f64,
    /// Run once more at the end of a throttled burst so the final position
    /// is classified. `false` is a strict leading-edge throttle: signals
    /// inside the window are dropped until it elapses.
    pub trailing: bool,
    pub fade_size_px: u32,
    pub color: String,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            throttle_ms: DEFAULT_THROTTLE_MS,
            trailing: true,
            fade_size_px: DEFAULT_FADE_SIZE_PX,
            color: DEFAULT_FADE_COLOR.to_string(),
        }
    }
}

impl GradientConfig {
    /// Defaults, overridden by `window.ENV.SCROLL_GRADIENT` when present.
    pub fn new() -> Self {
        Self::from_env().unwrap_or_default()
    }

    fn from_env() -> Option<Self> {
        let env = web_sys::window()?.get("ENV")?;
        if env.is_undefined() || !env.is_object() {
            return None;
        }

        let raw = js_sys::Reflect::get(&env, &ENV_KEY.into()).ok()?;
        if raw.is_undefined() || raw.is_null() {
            return None;
        }

        let json = js_sys::JSON::stringify(&raw).ok()?.as_string()?;
        match Self::from_json(&json) {
            Ok(config) => Some(config),
            Err(e) => {
                leptos::logging::debug_warn!("ignoring invalid window.ENV.{ENV_KEY}: {e}");
                None
            }
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(json)?;
        if !config.throttle_ms.is_finite() || config.throttle_ms < 0.0 {
            config.throttle_ms = DEFAULT_THROTTLE_MS;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GradientConfig::default();
        assert_eq!(c.throttle_ms, 150.0);
        assert!(c.trailing);
        assert_eq!(c.fade_size_px, 40);
        assert_eq!(c.color, "#ffffff");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let c = GradientConfig::from_json(r##"{"throttle_ms": 100, "color": "#000"}"##)
            .expect("config should parse");
        assert_eq!(c.throttle_ms, 100.0);
        assert_eq!(c.color, "#000");
        assert!(c.trailing);
        assert_eq!(c.fade_size_px, 40);
    }

    #[test]
    fn test_negative_throttle_falls_back() {
        let c = GradientConfig::from_json(r#"{"throttle_ms": -5}"#).expect("config should parse");
        assert_eq!(c.throttle_ms, DEFAULT_THROTTLE_MS);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(GradientConfig::from_json(r#"{"trailing": "yes"}"#).is_err());
    }
}
