//! Browser backend (feature `web`).
//!
//! [`DomSurface`] implements [`Surface`](crate::Surface) with `web-sys`:
//! element lookups go through the document, geometry through
//! `getBoundingClientRect`, animation through the Web Animations API and
//! the frame clock through `requestAnimationFrame`.

mod dom;

pub use dom::DomSurface;
use wasm_bindgen::JsValue;

use crate::error::LightboxError;

/// Route `log` output to the browser console and install the panic hook.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

impl From<JsValue> for LightboxError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}
