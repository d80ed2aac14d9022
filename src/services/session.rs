//! Session controller: authentication lifecycle plus dashboard loading.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the per-session [`ApiClient`], the token store, and the in-memory
//! [`Session`] / [`DashboardState`]. The root component drives it from UI
//! events and mirrors every change into signals through the listener.
//!
//! DESIGN
//! ======
//! All methods take `&self` and run on the single-threaded browser executor,
//! so state lives in `RefCell`s that are never borrowed across an `.await`.
//! Every transition that changes who is signed in bumps a generation counter;
//! async work captures the generation before awaiting and drops its result if
//! the counter has moved on. A response that lands after logout can therefore
//! neither repopulate the dashboard nor re-authenticate.
//!
//! ERROR HANDLING
//! ==============
//! API failures are handled here and never propagate. Anything that cannot
//! confirm the session (invalid token, network failure during verify, code
//! exchange, or token refresh, or a 401 anywhere) ends Unauthenticated with
//! local tokens cleared. Storage failures are logged only.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};

use super::auth_strategy::{AuthStrategy, LoginStep, validate_credentials};
use super::navigator::{Navigator, authorization_code, strip_auth_params};
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::transport::Transport;
use crate::net::types::TokenPair;
use crate::state::dashboard::{DashboardState, LOAD_FAILED_MESSAGE};
use crate::state::session::{Session, SessionPhase};
use crate::state::token_store::{StoredTokens, TokenStore};

pub const CODE_EXCHANGE_FAILED_MESSAGE: &str = "Failed to exchange code for token.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid username or password";
pub const REFRESH_FAILED_MESSAGE: &str = "Failed to refresh the session.";

/// Receives the current session and dashboard state after every change.
pub type Listener = Box<dyn Fn(&Session, &DashboardState)>;

pub struct SessionController<T, S, N> {
    api: ApiClient<T>,
    store: S,
    navigator: N,
    strategy: AuthStrategy,
    session: RefCell<Session>,
    dashboard: RefCell<DashboardState>,
    generation: Cell<u64>,
    listener: RefCell<Option<Listener>>,
}

impl<T: Transport, S: TokenStore, N: Navigator> SessionController<T, S, N> {
    pub fn new(api: ApiClient<T>, store: S, navigator: N, strategy: AuthStrategy) -> Self {
        Self {
            api,
            store,
            navigator,
            strategy,
            session: RefCell::new(Session::default()),
            dashboard: RefCell::new(DashboardState::default()),
            generation: Cell::new(0),
            listener: RefCell::new(None),
        }
    }

    pub fn set_listener(&self, listener: impl Fn(&Session, &DashboardState) + 'static) {
        *self.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn dashboard(&self) -> DashboardState {
        self.dashboard.borrow().clone()
    }

    pub fn strategy(&self) -> &AuthStrategy {
        &self.strategy
    }

    pub(crate) fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn generation(&self) -> u64 {
        self.generation.get()
    }

    /// Whether no sign-in or sign-out happened since `generation` was read.
    pub fn is_current(&self, generation: u64) -> bool {
        !self.is_stale(generation)
    }

    /// Decide the startup phase from stored tokens and the current URL.
    pub async fn start(&self) -> SessionPhase {
        let stored = self.store.load().unwrap_or_else(|err| {
            log::warn!("session: token store unreadable: {err}");
            StoredTokens::default()
        });

        if let Some(access_token) = stored.access_token {
            self.resume(access_token, stored.refresh_token).await;
        } else if let Some(code) = authorization_code(&self.navigator.current_url()) {
            self.exchange_code(&code).await;
        } else {
            log::debug!("session: no stored session");
            self.notify();
        }
        self.session.borrow().phase()
    }

    async fn resume(&self, access_token: String, refresh_token: Option<String>) {
        let generation = self.generation.get();
        self.api.set_bearer(Some(&access_token));

        let result = self.api.verify().await;
        if self.is_stale(generation) {
            return;
        }
        match result {
            Ok(verified) if verified.valid => {
                log::info!("session: resumed stored session");
                self.session.borrow_mut().authenticate(access_token, refresh_token, verified.username);
                self.bump();
                self.notify();
                self.load().await;
            }
            Ok(_) => {
                log::info!("session: stored token rejected");
                self.clear_local(None);
            }
            Err(err) => {
                log::warn!("session: could not verify stored token: {err}");
                self.clear_local(None);
            }
        }
    }

    /// Exchange an identity-provider authorization code for tokens.
    pub async fn exchange_code(&self, code: &str) {
        self.session.borrow_mut().begin_callback();
        let generation = self.bump();
        self.notify();

        let result = self.api.exchange_code(code).await;
        if self.is_stale(generation) {
            return;
        }
        let clean_url = strip_auth_params(&self.navigator.current_url());
        self.navigator.replace_url(&clean_url);

        match result {
            Ok(tokens) => {
                log::info!("session: authorization code exchanged");
                self.establish(tokens, None);
                self.load().await;
            }
            Err(err) => {
                log::error!("session: code exchange failed: {err}");
                self.clear_local(Some(CODE_EXCHANGE_FAILED_MESSAGE.to_owned()));
            }
        }
    }

    /// Start a login with the configured strategy. OIDC leaves the app.
    pub fn initiate_login(&self) -> LoginStep {
        let step = self.strategy.initiate(&self.navigator.origin());
        if let LoginStep::Redirect(url) = &step {
            log::info!("session: redirecting to identity provider");
            self.navigator.redirect(url);
        }
        step
    }

    /// Direct login; returns whether the session is now authenticated.
    pub async fn submit_credentials(&self, username: &str, password: &str) -> bool {
        let (username, password) = match validate_credentials(username, password) {
            Ok(credentials) => credentials,
            Err(message) => {
                self.session.borrow_mut().set_error(Some(message.to_owned()));
                self.notify();
                return false;
            }
        };

        let generation = self.generation.get();
        let result = self.api.login(&username, &password).await;
        if self.is_stale(generation) {
            return false;
        }
        match result {
            Ok(tokens) => {
                log::info!("session: signed in as {username}");
                self.establish(tokens, Some(username));
                self.load().await;
                true
            }
            Err(err) => {
                log::warn!("session: login rejected: {err}");
                self.session.borrow_mut().sign_out(Some(err.user_message(INVALID_CREDENTIALS_MESSAGE)));
                self.notify();
                false
            }
        }
    }

    /// Mint a new access token, then reload the dashboard with it.
    pub async fn refresh_session(&self) {
        let refresh_token = self.session.borrow().refresh_token().map(str::to_owned);
        let Some(refresh_token) = refresh_token else {
            log::info!("session: no refresh token, signing out");
            self.logout().await;
            return;
        };

        let generation = self.generation.get();
        self.dashboard.borrow_mut().begin_load(true);
        self.notify();

        let result = self.api.refresh(&refresh_token).await;
        if self.is_stale(generation) {
            return;
        }
        match result {
            Ok(tokens) => {
                if let Err(err) = self.store.save(&tokens.access_token, tokens.refresh_token.as_deref()) {
                    log::warn!("session: could not persist refreshed tokens: {err}");
                }
                self.api.set_bearer(Some(&tokens.access_token));
                self.session.borrow_mut().replace_tokens(tokens.access_token, tokens.refresh_token);
                self.fetch(true).await;
            }
            Err(err) if err.is_unauthorized() || err.is_network() => {
                log::warn!("session: refresh could not confirm session: {err}");
                self.logout().await;
            }
            Err(err) => {
                log::error!("session: token refresh failed: {err}");
                {
                    let mut dashboard = self.dashboard.borrow_mut();
                    dashboard.apply_failure(err.user_message(REFRESH_FAILED_MESSAGE));
                    dashboard.finish();
                }
                self.notify();
            }
        }
    }

    /// Fetch the dashboard snapshot.
    pub async fn load(&self) {
        self.fetch(false).await;
    }

    /// [`Self::load`] with the transient `refreshing` flag raised.
    pub async fn reload(&self) {
        self.fetch(true).await;
    }

    async fn fetch(&self, refreshing: bool) {
        if !self.session.borrow().is_authenticated() {
            log::debug!("dashboard: skipping load without a session");
            return;
        }
        let generation = self.generation.get();
        self.dashboard.borrow_mut().begin_load(refreshing);
        self.notify();

        let result = self.api.fetch_dashboard().await;
        if self.is_stale(generation) {
            log::debug!("dashboard: discarding response from an ended session");
            return;
        }
        match result {
            Ok(snapshot) => {
                log::debug!(
                    "dashboard: loaded {} clouds, {} conflicts",
                    snapshot.clouds.len(),
                    snapshot.conflicts.len()
                );
                self.dashboard.borrow_mut().apply_snapshot(snapshot);
            }
            Err(ApiError::Unauthorized(_)) => {
                log::info!("dashboard: session expired");
                self.logout().await;
                return;
            }
            Err(err) => {
                log::error!("dashboard: load failed: {err}");
                self.dashboard.borrow_mut().apply_failure(LOAD_FAILED_MESSAGE);
            }
        }
        self.dashboard.borrow_mut().finish();
        self.notify();
    }

    /// Sign out locally, then tell the backend on a best-effort basis.
    pub async fn logout(&self) {
        let refresh_token = self
            .session
            .borrow()
            .refresh_token()
            .map(str::to_owned)
            .or_else(|| self.store.load().ok().and_then(|t| t.refresh_token));

        self.clear_local(None);

        if let Some(refresh_token) = refresh_token
            && let Err(err) = self.api.logout(&refresh_token).await
        {
            log::warn!("session: logout notification failed: {err}");
        }
    }

    pub fn dismiss_conflicts(&self) {
        self.dashboard.borrow_mut().dismiss_conflicts();
        self.notify();
    }

    pub fn toggle_conflicts(&self) {
        self.dashboard.borrow_mut().toggle_conflicts();
        self.notify();
    }

    /// Pass `result` through, signing out first when it is a 401.
    pub(crate) async fn guard<R>(&self, result: Result<R, ApiError>) -> Result<R, ApiError> {
        if matches!(result, Err(ApiError::Unauthorized(_))) {
            log::info!("session: request unauthorized, signing out");
            self.logout().await;
        }
        result
    }

    /// Persist tokens, point the client at the new bearer, and authenticate.
    fn establish(&self, tokens: TokenPair, user: Option<String>) {
        if let Err(err) = self.store.save(&tokens.access_token, tokens.refresh_token.as_deref()) {
            log::warn!("session: could not persist tokens: {err}");
        }
        self.api.set_bearer(Some(&tokens.access_token));
        self.session.borrow_mut().authenticate(tokens.access_token, tokens.refresh_token, user);
        self.bump();
        self.notify();
    }

    fn clear_local(&self, error: Option<String>) {
        self.bump();
        if let Err(err) = self.store.clear() {
            log::warn!("session: could not clear token store: {err}");
        }
        self.api.set_bearer(None);
        self.session.borrow_mut().sign_out(error);
        self.dashboard.borrow_mut().reset();
        self.notify();
    }

    fn bump(&self) -> u64 {
        let next = self.generation.get().wrapping_add(1);
        self.generation.set(next);
        next
    }

    fn is_stale(&self, generation: u64) -> bool {
        self.generation.get() != generation
    }

    fn notify(&self) {
        let session = self.session.borrow().clone();
        let dashboard = self.dashboard.borrow().clone();
        if let Some(listener) = self.listener.borrow().as_ref() {
            listener(&session, &dashboard);
        }
    }
}
