//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the root component to choose between the login screen, the
//! callback spinner, and the dashboard. Mutated only by the session
//! controller through the transition methods below.
//!
//! INVARIANTS
//! ==========
//! `Authenticated` is only reachable through [`Session::authenticate`], which
//! requires an access token, and every exit path goes through
//! [`Session::sign_out`], which clears tokens and user together.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// The three mutually exclusive session phases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    Unauthenticated,
    /// An authorization code from the identity provider is being exchanged.
    CallbackPending,
    Authenticated,
}

/// In-memory session; tokens mirror what the token store holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    phase: SessionPhase,
    access_token: Option<String>,
    refresh_token: Option<String>,
    current_user: Option<String>,
    error: Option<String>,
}

impl Session {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == SessionPhase::Authenticated && self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// User-facing message from the last failed authentication attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter `Authenticated` with a freshly issued or verified token.
    pub fn authenticate(&mut self, access_token: String, refresh_token: Option<String>, user: Option<String>) {
        self.phase = SessionPhase::Authenticated;
        self.access_token = Some(access_token);
        self.refresh_token = refresh_token;
        self.current_user = user;
        self.error = None;
    }

    /// Enter `CallbackPending`; any stale tokens are dropped.
    pub fn begin_callback(&mut self) {
        *self = Self { phase: SessionPhase::CallbackPending, ..Self::default() };
    }

    /// Swap in tokens from a refresh. No-op unless authenticated.
    pub fn replace_tokens(&mut self, access_token: String, refresh_token: Option<String>) {
        if self.phase != SessionPhase::Authenticated {
            return;
        }
        self.access_token = Some(access_token);
        if refresh_token.is_some() {
            self.refresh_token = refresh_token;
        }
    }

    /// Return to `Unauthenticated`, clearing every field; `error` is surfaced
    /// on the login screen.
    pub fn sign_out(&mut self, error: Option<String>) {
        *self = Self { error, ..Self::default() };
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
