//! Durable storage for the access and refresh tokens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens outlive a page reload so the session can be re-verified on startup.
//! Browser builds persist them in `localStorage`; tests and non-browser builds
//! use the in-memory store. Both keys are written and cleared together.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Token material as found in storage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StoredTokens {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("token storage is unavailable")]
    Unavailable,
    #[error("token storage rejected write of `{key}`")]
    WriteRejected { key: &'static str },
}

/// Persistent key/value home for session tokens.
pub trait TokenStore {
    /// Read both tokens; missing or empty entries come back as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] when storage cannot be opened.
    fn load(&self) -> Result<StoredTokens, StoreError>;

    /// Persist the access token, and the refresh token when one is given.
    /// An absent refresh token leaves the stored one untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if either write fails.
    fn save(&self, access_token: &str, refresh_token: Option<&str>) -> Result<(), StoreError>;

    /// Remove both tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be opened or refuses a removal.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Process-local store; clones share the same slots.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Rc<RefCell<StoredTokens>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tokens(access_token: &str, refresh_token: Option<&str>) -> Self {
        let store = Self::new();
        *store.tokens.borrow_mut() = StoredTokens {
            access_token: Some(access_token.to_owned()),
            refresh_token: refresh_token.map(str::to_owned),
        };
        store
    }

    pub fn snapshot(&self) -> StoredTokens {
        self.tokens.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        let tokens = self.tokens.borrow();
        tokens.access_token.is_none() && tokens.refresh_token.is_none()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<StoredTokens, StoreError> {
        let tokens = self.tokens.borrow();
        Ok(StoredTokens {
            access_token: non_empty(tokens.access_token.clone()),
            refresh_token: non_empty(tokens.refresh_token.clone()),
        })
    }

    fn save(&self, access_token: &str, refresh_token: Option<&str>) -> Result<(), StoreError> {
        let mut tokens = self.tokens.borrow_mut();
        tokens.access_token = Some(access_token.to_owned());
        if let Some(refresh) = refresh_token {
            tokens.refresh_token = Some(refresh.to_owned());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.tokens.borrow_mut() = StoredTokens::default();
        Ok(())
    }
}

/// Run `remove` for every token key, even after a failure; the first failing
/// key is reported.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
fn remove_keys<E>(mut remove: impl FnMut(&'static str) -> Result<(), E>) -> Result<(), StoreError> {
    [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY]
        .into_iter()
        .filter(|&key| remove(key).is_err())
        .map(|key| StoreError::WriteRejected { key })
        .fold(Ok(()), |acc, err| acc.and(Err(err)))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Browser `localStorage` store.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokenStore;

#[cfg(feature = "csr")]
impl LocalStorageTokenStore {
    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StoreError::Unavailable)
    }
}

#[cfg(feature = "csr")]
impl TokenStore for LocalStorageTokenStore {
    fn load(&self) -> Result<StoredTokens, StoreError> {
        let storage = Self::storage()?;
        Ok(StoredTokens {
            access_token: non_empty(storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()),
            refresh_token: non_empty(storage.get_item(REFRESH_TOKEN_KEY).ok().flatten()),
        })
    }

    fn save(&self, access_token: &str, refresh_token: Option<&str>) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        storage
            .set_item(ACCESS_TOKEN_KEY, access_token)
            .map_err(|_| StoreError::WriteRejected { key: ACCESS_TOKEN_KEY })?;
        if let Some(refresh) = refresh_token {
            storage
                .set_item(REFRESH_TOKEN_KEY, refresh)
                .map_err(|_| StoreError::WriteRejected { key: REFRESH_TOKEN_KEY })?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        remove_keys(|key| storage.remove_item(key))
    }
}
