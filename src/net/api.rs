//! Typed REST client for the dashboard backend.
//!
//! DESIGN
//! ======
//! One `ApiClient` exists per session controller and carries that session's
//! bearer token. Every outgoing request reads the bearer at send time, so a
//! token change made through [`ApiClient::set_bearer`] is visible to the very
//! next request without any process-wide header state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::cell::RefCell;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, Method, Transport};
use super::types::{
    DashboardSnapshot, ErrorDetail, LoginRequest, Note, NotePayload, RefreshTokenRequest, TokenPair, VerifyResponse,
};

pub(crate) const LOGIN_PATH: &str = "/api/login";
pub(crate) const VERIFY_PATH: &str = "/api/verify";
pub(crate) const CALLBACK_PATH: &str = "/api/callback";
pub(crate) const REFRESH_PATH: &str = "/api/refresh";
pub(crate) const LOGOUT_PATH: &str = "/api/logout";
pub(crate) const DASHBOARD_PATH: &str = "/api/dashboard";
pub(crate) const NOTES_PATH: &str = "/api/notes";

fn note_path(id: i64) -> String {
    format!("{NOTES_PATH}/{id}")
}

/// Query filters for `GET /api/notes`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoteQuery {
    /// Exact cloud name; `None` lists notes for all clouds.
    pub cloud_name: Option<String>,
    /// Free-text search over title, content, and IP.
    pub search: Option<String>,
}

impl NoteQuery {
    fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(cloud) = self.cloud_name.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("cloud_name".to_owned(), cloud.to_owned()));
        }
        if let Some(search) = self.search.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            pairs.push(("search".to_owned(), search.to_owned()));
        }
        pairs
    }
}

/// Per-session API client binding a transport, a base URL, and a bearer token.
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
    bearer: RefCell<Option<String>>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self { transport, base_url: base_url.into(), bearer: RefCell::new(None) }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replace the bearer attached to subsequent requests; `None` removes it.
    pub fn set_bearer(&self, token: Option<&str>) {
        *self.bearer.borrow_mut() = token.map(str::to_owned);
    }

    pub fn bearer(&self) -> Option<String> {
        self.bearer.borrow().clone()
    }

    /// Exchange credentials for tokens via `POST /api/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] carrying the server `detail` on rejection.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let body = to_body(&LoginRequest { username, password })?;
        self.request_json(Method::Post, LOGIN_PATH, Vec::new(), Some(body)).await
    }

    /// Check the current bearer via `GET /api/verify`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the token is rejected outright.
    pub async fn verify(&self) -> Result<VerifyResponse, ApiError> {
        self.request_json(Method::Get, VERIFY_PATH, Vec::new(), None).await
    }

    /// Exchange an OAuth authorization code via `GET /api/callback?code=`.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity provider or backend rejects the code.
    pub async fn exchange_code(&self, code: &str) -> Result<TokenPair, ApiError> {
        let query = vec![("code".to_owned(), code.to_owned())];
        self.request_json(Method::Get, CALLBACK_PATH, query, None).await
    }

    /// Mint a new access token via `POST /api/refresh`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Unauthorized`] when the refresh token is no longer valid.
    pub async fn refresh(&self, refresh_token: &str) -> Result<TokenPair, ApiError> {
        let body = to_body(&RefreshTokenRequest { refresh_token })?;
        self.request_json(Method::Post, REFRESH_PATH, Vec::new(), Some(body)).await
    }

    /// Ask the backend to invalidate a refresh token via `POST /api/logout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the notification could not be delivered.
    pub async fn logout(&self, refresh_token: &str) -> Result<(), ApiError> {
        let body = to_body(&RefreshTokenRequest { refresh_token })?;
        self.request(Method::Post, LOGOUT_PATH, Vec::new(), Some(body)).await?;
        Ok(())
    }

    /// Fetch the aggregated snapshot via `GET /api/dashboard`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a snapshot.
    pub async fn fetch_dashboard(&self) -> Result<DashboardSnapshot, ApiError> {
        self.request_json(Method::Get, DASHBOARD_PATH, Vec::new(), None).await
    }

    /// List notes matching `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a note list.
    pub async fn list_notes(&self, query: &NoteQuery) -> Result<Vec<Note>, ApiError> {
        self.request_json(Method::Get, NOTES_PATH, query.to_pairs(), None).await
    }

    /// Create a note.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the note.
    pub async fn create_note(&self, payload: &NotePayload) -> Result<(), ApiError> {
        let body = to_body(payload)?;
        self.request(Method::Post, NOTES_PATH, Vec::new(), Some(body)).await?;
        Ok(())
    }

    /// Replace the fields of note `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the update.
    pub async fn update_note(&self, id: i64, payload: &NotePayload) -> Result<(), ApiError> {
        let body = to_body(payload)?;
        self.request(Method::Put, &note_path(id), Vec::new(), Some(body)).await?;
        Ok(())
    }

    /// Delete note `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend refuses the deletion.
    pub async fn delete_note(&self, id: i64) -> Result<(), ApiError> {
        self.request(Method::Delete, &note_path(id), Vec::new(), None).await?;
        Ok(())
    }

    async fn request_json<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
    ) -> Result<R, ApiError> {
        let resp = self.request(method, path, query, body).await?;
        Ok(serde_json::from_str(&resp.body)?)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: Vec<(String, String)>,
        body: Option<serde_json::Value>,
    ) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest { method, url: self.url(path), query, bearer: self.bearer(), body };
        let resp = self.transport.send(request).await?;
        check_status(resp)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url.trim_end_matches('/'))
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    Ok(serde_json::to_value(body)?)
}

fn check_status(resp: ApiResponse) -> Result<ApiResponse, ApiError> {
    if resp.is_success() {
        return Ok(resp);
    }
    let detail = serde_json::from_str::<ErrorDetail>(&resp.body).ok().map(|d| d.message());
    if resp.status == 401 {
        return Err(ApiError::Unauthorized(detail));
    }
    Err(ApiError::Status { status: resp.status, detail })
}
