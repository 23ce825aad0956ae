//! Credential persistence and the session gate.
//!
//! The access credential's presence is the only client-side signal of
//! authentication. Nothing here inspects token contents or expiry.

use leptos::prelude::*;

use super::storage::{BrowserStorage, KeyValueStorage, PrefixedStorage};
use crate::bindings::core::{ApiClient, FetchTransport};
use crate::bindings::AuthData;
use crate::config::AppConfig;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

pub const LOGIN_PATH: &str = "/login";

// ============================================================================
// Credential Store
// ============================================================================

/// Access and refresh credentials held in prefixed storage.
#[derive(Debug, Clone)]
pub struct CredentialStore<S> {
    storage: PrefixedStorage<S>,
}

impl<S: KeyValueStorage> CredentialStore<S> {
    pub fn new(backend: S, prefix: impl Into<String>) -> Self {
        Self {
            storage: PrefixedStorage::new(backend, prefix),
        }
    }

    /// Stored access credential, `None` when absent or empty.
    pub fn access_token(&self) -> Option<String> {
        self.storage
            .get::<String>(ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.storage
            .get::<String>(REFRESH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    pub fn store(&self, access_token: &str, refresh_token: &str) {
        self.storage.set(ACCESS_TOKEN_KEY, &access_token);
        self.storage.set(REFRESH_TOKEN_KEY, &refresh_token);
    }

    /// Drop every key owned by the app, credentials included.
    pub fn clear(&self) {
        self.storage.clear();
    }
}

// ============================================================================
// Session Context
// ============================================================================

/// Reactive view of the credential store, shared through context.
#[derive(Clone, Copy)]
pub struct SessionState {
    /// Mirrors `CredentialStore::is_authenticated`; refreshed on login, logout and 401.
    pub authenticated: RwSignal<bool>,
    base_url: StoredValue<String>,
    prefix: StoredValue<String>,
}

impl SessionState {
    pub fn new(config: &AppConfig) -> Self {
        let credentials = CredentialStore::new(BrowserStorage, config.storage.prefix.clone());
        Self {
            authenticated: RwSignal::new(credentials.is_authenticated()),
            base_url: StoredValue::new(config.api.base_url.clone()),
            prefix: StoredValue::new(config.storage.prefix.clone()),
        }
    }

    pub fn credentials(&self) -> CredentialStore<BrowserStorage> {
        CredentialStore::new(BrowserStorage, self.prefix.get_value())
    }

    /// A client bound to this session. A 401 wipes credentials and sends the browser to `/login`.
    pub fn api(&self) -> ApiClient<FetchTransport, BrowserStorage> {
        let authenticated = self.authenticated;
        ApiClient::new(self.base_url.get_value(), FetchTransport, self.credentials())
            .with_unauthorized_handler(move || {
                authenticated.set(false);
                redirect_to_login();
            })
    }

    /// Marks the session live after `login`/`register`, which persist the credentials themselves.
    pub fn sign_in(&self, auth: &AuthData) {
        self.authenticated.set(true);
        log::info!("Signed in as {}", auth.user.email);
    }

    pub fn sign_out(&self) {
        self.credentials().clear();
        self.authenticated.set(false);
        log::info!("Signed out");
    }

    /// Re-read the store. Another tab may have changed it.
    pub fn sync(&self) {
        self.authenticated.set(self.credentials().is_authenticated());
    }
}

fn redirect_to_login() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_href(LOGIN_PATH) {
        log::error!("Failed to redirect to {LOGIN_PATH}: {:?}", e);
    }
}

pub fn provide_session(config: &AppConfig) {
    provide_context(SessionState::new(config));
}

pub fn use_session() -> SessionState {
    expect_context::<SessionState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::MemoryStorage;

    fn store() -> (MemoryStorage, CredentialStore<MemoryStorage>) {
        let backend = MemoryStorage::new();
        (backend.clone(), CredentialStore::new(backend, "watchdog_"))
    }

    #[test]
    fn test_empty_store_is_unauthenticated() {
        let (_, credentials) = store();
        assert!(!credentials.is_authenticated());
        assert_eq!(credentials.access_token(), None);
    }

    #[test]
    fn test_store_writes_json_encoded_keys() {
        let (backend, credentials) = store();
        credentials.store("acc", "ref");

        assert_eq!(
            backend.get_item("watchdog_access_token").as_deref(),
            Some("\"acc\"")
        );
        assert_eq!(
            backend.get_item("watchdog_refresh_token").as_deref(),
            Some("\"ref\"")
        );
        assert!(credentials.is_authenticated());
        assert_eq!(credentials.refresh_token().as_deref(), Some("ref"));
    }

    #[test]
    fn test_empty_access_token_is_not_a_session() {
        let (_, credentials) = store();
        credentials.store("", "ref");
        assert!(!credentials.is_authenticated());
    }

    #[test]
    fn test_clear_removes_both_credentials() {
        let (backend, credentials) = store();
        credentials.store("acc", "ref");
        backend.set_item("unrelated", "1").unwrap();

        credentials.clear();

        assert!(!credentials.is_authenticated());
        assert_eq!(credentials.refresh_token(), None);
        assert_eq!(backend.get_item("unrelated").as_deref(), Some("1"));
    }
}
