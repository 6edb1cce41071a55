//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Failures are non-fatal: they are logged
//! and reported through the failure callback so the UI can toast.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard, reporting the outcome.
pub fn copy_to_clipboard_with_feedback<S, F>(text: &str, on_success: S, on_failure: F)
where
    S: FnOnce() + 'static,
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            log::warn!("clipboard unavailable: no window");
            on_failure();
            return;
        };
        let clipboard = window.navigator().clipboard();
        match wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            Ok(_) => on_success(),
            Err(e) => {
                log::warn!("clipboard write failed: {:?}", e);
                on_failure();
            }
        }
    });
}
