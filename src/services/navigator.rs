//! Address-bar access for the session controller.
//!
//! The controller reads the authorization code from the current URL and
//! rewrites the URL once the code has been consumed, without a reload.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use url::Url;

use super::auth_strategy::CALLBACK_ROUTE;

/// Query parameters the identity provider appends to the callback URL.
const AUTH_PARAMS: [&str; 4] = ["code", "state", "session_state", "iss"];

pub trait Navigator {
    fn current_url(&self) -> String;

    /// Scheme, host, and port of the page, without a trailing slash.
    fn origin(&self) -> String;

    /// Swap the visible URL in place (no navigation, no history entry).
    fn replace_url(&self, url: &str);

    /// Leave the app for `url`.
    fn redirect(&self, url: &str);
}

/// Percent-decoded value of the `code` query parameter, if present and non-empty.
pub fn authorization_code(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    parsed
        .query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// `url` without identity-provider parameters; a `/callback` path becomes `/`.
/// Unparseable input is returned unchanged.
pub fn strip_auth_params(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_owned();
    };

    if let Some(prefix) = parsed.path().strip_suffix(CALLBACK_ROUTE) {
        let path = format!("{prefix}/");
        parsed.set_path(&path);
    }

    let total = parsed.query_pairs().count();
    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !AUTH_PARAMS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();
    if kept.is_empty() {
        parsed.set_query(None);
    } else if kept.len() < total {
        parsed.query_pairs_mut().clear().extend_pairs(kept);
    }
    parsed.into()
}

/// `window.location` / `window.history` navigator.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

#[cfg(feature = "csr")]
impl Navigator for BrowserNavigator {
    fn current_url(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_default()
    }

    fn origin(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }

    fn replace_url(&self, url: &str) {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            log::warn!("history API unavailable; URL left unchanged");
            return;
        };
        if let Err(err) = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url)) {
            log::warn!("replaceState failed: {err:?}");
        }
    }

    fn redirect(&self, url: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_href(url) {
            log::error!("redirect to identity provider failed: {err:?}");
        }
    }
}
