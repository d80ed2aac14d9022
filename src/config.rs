//! Dashboard configuration resolved from build-time environment variables.
//!
//! WASM bundles have no runtime environment, so values are captured with
//! `option_env!` when the bundle is compiled. Resolution itself goes through
//! [`DashboardConfig::from_lookup`] so any key source can drive it.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;
use url::Url;

use crate::services::auth_strategy::{AuthStrategy, OidcSettings};

pub const API_URL_VAR: &str = "IPAM_API_URL";
pub const AUTH_MODE_VAR: &str = "IPAM_AUTH_MODE";
pub const OIDC_URL_VAR: &str = "IPAM_OIDC_URL";
pub const OIDC_REALM_VAR: &str = "IPAM_OIDC_REALM";
pub const OIDC_CLIENT_ID_VAR: &str = "IPAM_OIDC_CLIENT_ID";
pub const LOG_LEVEL_VAR: &str = "IPAM_LOG_LEVEL";

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_OIDC_URL: &str = "https://sso-ttc.t-cloud.kz";
pub const DEFAULT_OIDC_REALM: &str = "prod-v1";
pub const DEFAULT_OIDC_CLIENT_ID: &str = "vcd-ip-manager";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must use http:// or https:// and include a host, got `{value}`")]
    InvalidUrl { var: &'static str, value: String },
    #[error("unknown IPAM_AUTH_MODE `{0}` (expected `oidc` or `direct`)")]
    UnknownAuthMode(String),
    #[error("unknown IPAM_LOG_LEVEL `{0}`")]
    UnknownLogLevel(String),
    #[error("{var} must not be empty")]
    Empty { var: &'static str },
}

/// How the login screen authenticates the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Redirect to the external identity provider (authorization-code flow).
    Oidc,
    /// Post username/password to the backend.
    Direct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub api_base_url: String,
    pub auth_mode: AuthMode,
    pub oidc: OidcSettings,
    pub log_level: LevelFilter,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_owned(),
            auth_mode: AuthMode::Oidc,
            oidc: OidcSettings {
                base_url: DEFAULT_OIDC_URL.to_owned(),
                realm: DEFAULT_OIDC_REALM.to_owned(),
                client_id: DEFAULT_OIDC_CLIENT_ID.to_owned(),
            },
            log_level: LevelFilter::Info,
        }
    }
}

impl DashboardConfig {
    /// Build config from a key lookup.
    ///
    /// Optional (all):
    /// - `IPAM_API_URL`: default `http://localhost:8000`
    /// - `IPAM_AUTH_MODE`: `oidc` (default) or `direct`
    /// - `IPAM_OIDC_URL`, `IPAM_OIDC_REALM`, `IPAM_OIDC_CLIENT_ID`
    /// - `IPAM_LOG_LEVEL`: `error|warn|info|debug|trace`, default `info`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] for malformed URLs, unknown modes or levels.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base_url = normalize_base_url(API_URL_VAR, get(API_URL_VAR).as_deref().unwrap_or(DEFAULT_API_URL))?;
        let auth_mode = parse_auth_mode(get(AUTH_MODE_VAR).as_deref())?;
        let oidc = OidcSettings {
            base_url: normalize_base_url(OIDC_URL_VAR, get(OIDC_URL_VAR).as_deref().unwrap_or(DEFAULT_OIDC_URL))?,
            realm: get(OIDC_REALM_VAR).unwrap_or_else(|| DEFAULT_OIDC_REALM.to_owned()),
            client_id: get(OIDC_CLIENT_ID_VAR).unwrap_or_else(|| DEFAULT_OIDC_CLIENT_ID.to_owned()),
        };
        let log_level = parse_log_level(get(LOG_LEVEL_VAR).as_deref())?;

        Ok(Self { api_base_url, auth_mode, oidc, log_level })
    }

    /// Build config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// See [`DashboardConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(build_env)
    }

    /// Build-time config, falling back to defaults when it does not parse.
    pub fn resolve() -> Self {
        Self::from_build_env().unwrap_or_else(|err| {
            log::warn!("invalid build configuration, using defaults: {err}");
            Self::default()
        })
    }

    pub fn strategy(&self) -> AuthStrategy {
        match self.auth_mode {
            AuthMode::Direct => AuthStrategy::Direct,
            AuthMode::Oidc => AuthStrategy::Oidc(self.oidc.clone()),
        }
    }
}

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        API_URL_VAR => option_env!("IPAM_API_URL"),
        AUTH_MODE_VAR => option_env!("IPAM_AUTH_MODE"),
        OIDC_URL_VAR => option_env!("IPAM_OIDC_URL"),
        OIDC_REALM_VAR => option_env!("IPAM_OIDC_REALM"),
        OIDC_CLIENT_ID_VAR => option_env!("IPAM_OIDC_CLIENT_ID"),
        LOG_LEVEL_VAR => option_env!("IPAM_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_owned)
}

fn normalize_base_url(var: &'static str, raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Empty { var });
    }
    let invalid = || ConfigError::InvalidUrl { var, value: raw.to_owned() };
    let parsed = Url::parse(trimmed).map_err(|_| invalid())?;

    // http(s) parsing skips extra slashes, so `https:///x` would get host `x`.
    let empty_authority = trimmed[parsed.scheme().len()..].starts_with(":///");
    if !matches!(parsed.scheme(), "http" | "https")
        || empty_authority
        || parsed.host_str().is_none_or(str::is_empty)
        || !parsed.username().is_empty()
        || parsed.password().is_some()
        || parsed.query().is_some()
        || parsed.fragment().is_some()
    {
        return Err(invalid());
    }
    Ok(parsed.as_str().trim_end_matches('/').to_owned())
}

fn parse_auth_mode(raw: Option<&str>) -> Result<AuthMode, ConfigError> {
    match raw.unwrap_or("oidc") {
        "oidc" | "keycloak" => Ok(AuthMode::Oidc),
        "direct" => Ok(AuthMode::Direct),
        other => Err(ConfigError::UnknownAuthMode(other.to_owned())),
    }
}

fn parse_log_level(raw: Option<&str>) -> Result<LevelFilter, ConfigError> {
    match raw.unwrap_or("info").to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        other => Err(ConfigError::UnknownLogLevel(other.to_owned())),
    }
}
