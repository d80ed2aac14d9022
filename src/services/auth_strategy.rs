//! Login strategies.
//!
//! DESIGN
//! ======
//! Both strategies share one capability set: *initiate* a login from the
//! login screen, then *exchange* or *verify* whatever the initiation produced.
//! `Direct` initiates by prompting for credentials that the controller posts
//! to the backend. `Oidc` initiates by redirecting to the identity provider,
//! whose callback carries an authorization code exchanged on next startup.

#[cfg(test)]
#[path = "auth_strategy_test.rs"]
mod auth_strategy_test;

/// Path the identity provider redirects back to.
pub const CALLBACK_ROUTE: &str = "/callback";
const OIDC_SCOPE: &str = "openid profile email";

/// Identity-provider coordinates for the authorization-code flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OidcSettings {
    pub base_url: String,
    pub realm: String,
    pub client_id: String,
}

impl OidcSettings {
    /// Authorization endpoint URL for a dashboard served at `origin`.
    pub fn authorize_url(&self, origin: &str) -> String {
        let redirect_uri = format!("{}{CALLBACK_ROUTE}", origin.trim_end_matches('/'));
        format!(
            "{}/realms/{}/protocol/openid-connect/auth?client_id={}&redirect_uri={}&response_type=code&scope={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.realm),
            urlencoding::encode(&self.client_id),
            urlencoding::encode(&redirect_uri),
            urlencoding::encode(OIDC_SCOPE),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStrategy {
    Direct,
    Oidc(OidcSettings),
}

/// What the login screen must do to start authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginStep {
    /// Show the username/password form.
    PromptCredentials,
    /// Navigate the browser away to this URL.
    Redirect(String),
}

impl AuthStrategy {
    pub fn initiate(&self, origin: &str) -> LoginStep {
        match self {
            Self::Direct => LoginStep::PromptCredentials,
            Self::Oidc(settings) => LoginStep::Redirect(settings.authorize_url(origin)),
        }
    }

    pub fn uses_credentials(&self) -> bool {
        matches!(self, Self::Direct)
    }
}

/// Validate direct-login input, returning trimmed username and raw password.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}
