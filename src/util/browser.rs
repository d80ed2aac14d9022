//! Clipboard and file-download helpers.
//!
//! Browser-only; without the `csr` feature every call is a no-op that
//! reports failure, which keeps native test builds free of `web-sys`.

/// Write `text` to the system clipboard. Returns whether the write was issued.
pub fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Some(clipboard) = window.navigator().clipboard() {
            let _ = clipboard.write_text(text);
            return true;
        }
        log::warn!("clipboard API unavailable");
        false
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        false
    }
}

/// Offer `content` as a downloaded file named `file_name`.
pub fn download_text(file_name: &str, mime: &str, content: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        match trigger_download(file_name, mime, content) {
            Ok(()) => true,
            Err(err) => {
                log::error!("download of {file_name} failed: {err:?}");
                false
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_name, mime, content);
        false
    }
}

#[cfg(feature = "csr")]
fn trigger_download(file_name: &str, mime: &str, content: &str) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(content));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url)
}

/// Ask the user to confirm a destructive action. Without a browser there is
/// no one to ask, so the action proceeds.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}
