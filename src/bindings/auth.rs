use serde::{Deserialize, Serialize};

use super::core::{ApiClient, Transport};
use super::endpoints;
use super::envelope::ApiError;
use crate::services::storage::KeyValueStorage;

// ============================================================================
// Auth Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Returned by both login and registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthData {
    pub user: User,
    pub access_token: String,
    pub refresh_token: String,
    /// Lifetime of the access token in seconds. Informational only.
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterPayload {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Auth Commands
// ============================================================================

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    /// Log in and persist the returned credential pair.
    pub async fn login(&self, payload: &LoginPayload) -> Result<AuthData, ApiError> {
        let auth: AuthData = self.post(endpoints::AUTH_LOGIN, payload).await?;
        self.credentials()
            .store(&auth.access_token, &auth.refresh_token);
        Ok(auth)
    }

    /// Create an account and persist the returned credential pair.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<AuthData, ApiError> {
        let auth: AuthData = self.post(endpoints::AUTH_REGISTER, payload).await?;
        self.credentials()
            .store(&auth.access_token, &auth.refresh_token);
        Ok(auth)
    }

    pub async fn me(&self) -> Result<User, ApiError> {
        self.get(endpoints::AUTH_ME).await
    }
}
