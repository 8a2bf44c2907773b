mod app;
pub mod components;
pub mod config;
pub mod host;
pub mod scroll;
pub mod state;
pub mod throttle;
pub mod util;

pub use app::App;
pub use components::hooks::{use_scroll_gradient, ScrollGradientHandle};
pub use components::ui::ScrollGradient;
pub use config::GradientConfig;
pub use scroll::{classify, EdgeVisibility, ScrollAxis, ScrollGeometry, ScrollState};
pub use state::GradientController;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;


// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
