// SPDX-License-Identifier: MPL-2.0
//! Browser adapters (`wasm32` only).
//!
//! - [`WebDom`]: the [`Dom`](crate::application::port::Dom) port over `web-sys`
//! - [`WebStorage`]: the storage port over `localStorage`
//! - [`runtime`]: boot, event listeners, timers, clipboard and the functions
//!   exported to page scripts

mod dom;
pub mod runtime;
mod storage;

pub use dom::WebDom;
pub use storage::WebStorage;

use wasm_bindgen::JsValue;

/// Human-readable text for a thrown JS value.
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    js_sys::Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{value:?}"))
}
