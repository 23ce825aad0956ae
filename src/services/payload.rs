//! Outgoing request bodies assembled from form state.

use indexmap::IndexMap;

use super::wizard_state::{HeaderEntry, ServiceDraft};
use crate::bindings::{
    HttpMethod, LoginPayload, RegisterPayload, ServicePayload, TestConnectionPayload,
};

// ============================================================================
// Service Payloads
// ============================================================================

/// Non-blank keys, trimmed, in first-seen order. A repeated key keeps its
/// first position and takes the last value. `None` when nothing survives.
pub fn assemble_headers(headers: &[HeaderEntry]) -> Option<IndexMap<String, String>> {
    let mut map = IndexMap::new();
    for header in headers {
        let key = header.key.trim();
        if key.is_empty() {
            continue;
        }
        map.insert(key.to_string(), header.value.clone());
    }
    (!map.is_empty()).then_some(map)
}

/// Trimmed body for POST/PUT, if anything is left after trimming.
pub fn assemble_body(method: HttpMethod, body: &str) -> Option<String> {
    let trimmed = body.trim();
    (method.has_body() && !trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Create/update body. Timeout and certificate checks stay client-side.
pub fn assemble_service_payload(draft: &ServiceDraft) -> ServicePayload {
    ServicePayload {
        service_name: draft.service_name.trim().to_string(),
        endpoint_url: draft.endpoint_url.trim().to_string(),
        method: draft.method,
        check_interval: draft.check_interval,
        expected_status_codes: draft.expected_status_codes.clone(),
        failure_threshold: draft.failure_threshold,
        headers: assemble_headers(&draft.headers),
        body: assemble_body(draft.method, &draft.body),
    }
}

/// Probe body. The endpoint and body go out exactly as typed.
pub fn test_connection_payload(draft: &ServiceDraft) -> TestConnectionPayload {
    TestConnectionPayload {
        endpoint_url: draft.endpoint_url.clone(),
        method: draft.method,
        headers: assemble_headers(&draft.headers),
        body: (draft.has_body() && !draft.body.is_empty()).then(|| draft.body.clone()),
    }
}

// ============================================================================
// Auth Forms
// ============================================================================

pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

impl LoginForm {
    pub fn is_valid(&self) -> bool {
        self.email.contains('@') && !self.password.is_empty()
    }

    pub fn to_payload(&self) -> LoginPayload {
        LoginPayload {
            email: normalize_email(&self.email),
            password: self.password.clone(),
        }
    }
}

pub const MIN_FULL_NAME_LEN: usize = 2;
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn passwords_match(&self) -> bool {
        !self.confirm_password.is_empty() && self.password == self.confirm_password
    }

    pub fn passwords_mismatch(&self) -> bool {
        !self.confirm_password.is_empty() && self.password != self.confirm_password
    }

    pub fn is_valid(&self) -> bool {
        self.full_name.trim().chars().count() >= MIN_FULL_NAME_LEN
            && self.email.contains('@')
            && self.password.chars().count() >= MIN_PASSWORD_LEN
            && self.passwords_match()
    }

    pub fn to_payload(&self) -> RegisterPayload {
        RegisterPayload {
            full_name: self.full_name.trim().to_string(),
            email: normalize_email(&self.email),
            password: self.password.clone(),
        }
    }
}
