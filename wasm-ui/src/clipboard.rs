//! Browser clipboard adapter.
//!
//! Wraps the asynchronous `navigator.clipboard` API and maps host faults
//! into [`ClipboardError`], so the resolved outcome can be recorded on the
//! tutorial state like any other copy result.

use gsi_tutorial_rs::ClipboardError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Place `text` on the system clipboard.
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::Unavailable)?;
    let clipboard = window.navigator().clipboard();

    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|err| ClipboardError::WriteFailed(js_error_message(&err)))
}

/// Extract a readable message from a thrown JS value.
fn js_error_message(err: &JsValue) -> String {
    match err.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{err:?}"),
    }
}
