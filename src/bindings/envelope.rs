use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Response Envelope
// ============================================================================

/// One structured field rejection from the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiFieldError {
    pub path: String,
    pub msg: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub location: String,
}

/// Body of a `success: false` envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ApiFailure {
    /// Machine-readable code, e.g. `EMAIL_TAKEN` or `VALIDATION_ERROR`.
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<ApiFieldError>>,
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message.as_deref().filter(|m| !m.is_empty()) {
            Some(message) => write!(f, "{}", message),
            None => write!(f, "{}", self.error),
        }
    }
}

/// Every response from the backend, branched on the `success` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T> {
    Success { message: String, data: T },
    Failure(ApiFailure),
}

/// Wire shape before the tag is inspected.
#[derive(Deserialize)]
#[serde(bound = "T: Deserialize<'de>")]
struct RawEnvelope<T> {
    success: bool,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    fields: Option<Vec<ApiFieldError>>,
}

impl<T: DeserializeOwned> ApiResponse<T> {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let envelope: RawEnvelope<T> = serde_json::from_str(raw)?;

        if !envelope.success {
            return Ok(ApiResponse::Failure(ApiFailure {
                error: envelope.error.unwrap_or_default(),
                message: envelope.message,
                fields: envelope.fields,
            }));
        }

        // `data: null` or an absent field still decodes for unit-like payloads
        let data = match envelope.data {
            Some(data) => data,
            None => serde_json::from_value(serde_json::Value::Null)?,
        };

        Ok(ApiResponse::Success {
            message: envelope.message.unwrap_or_default(),
            data,
        })
    }
}

impl<T> ApiResponse<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Success { data, .. } => Ok(data),
            ApiResponse::Failure(failure) => Err(ApiError::Server(failure)),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success { .. })
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The backend answered with a failure envelope.
    #[error("{0}")]
    Server(ApiFailure),
    /// HTTP 401. Credentials have already been cleared.
    #[error("session expired")]
    Unauthorized,
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The response was not a valid envelope.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided message, if any. Transport failures carry none.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Server(failure) => failure.message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            ApiError::Server(failure) if !failure.error.is_empty() => Some(&failure.error),
            _ => None,
        }
    }

    /// Structured field errors, only when the list is non-empty.
    pub fn fields(&self) -> Option<&[ApiFieldError]> {
        match self {
            ApiError::Server(ApiFailure {
                fields: Some(fields),
                ..
            }) if !fields.is_empty() => Some(fields),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message for a banner, falling back to `fallback` when the server gave none.
    pub fn user_message(&self, fallback: &str) -> String {
        self.message().unwrap_or(fallback).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    #[test]
    fn test_success_envelope() {
        let raw = r#"{"success": true, "message": "ok", "data": {"id": "svc_1"}}"#;
        let response = ApiResponse::<Item>::from_json(raw).unwrap();
        assert!(response.is_success());
        assert_eq!(
            response.into_result().unwrap(),
            Item {
                id: "svc_1".to_string()
            }
        );
    }

    #[test]
    fn test_failure_envelope_with_fields() {
        let raw = r#"{
            "success": false,
            "error": "VALIDATION_ERROR",
            "message": "Invalid input",
            "fields": [{"type": "field", "value": "", "msg": "Required", "path": "endpoint_url", "location": "body"}]
        }"#;
        let err = ApiResponse::<Item>::from_json(raw)
            .unwrap()
            .into_result()
            .unwrap_err();

        assert_eq!(err.code(), Some("VALIDATION_ERROR"));
        assert_eq!(err.message(), Some("Invalid input"));
        let fields = err.fields().unwrap();
        assert_eq!(fields[0].path, "endpoint_url");
        assert_eq!(fields[0].kind, "field");
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let raw = r#"{"success": false, "error": "INTERNAL"}"#;
        let err = ApiResponse::<Item>::from_json(raw)
            .unwrap()
            .into_result()
            .unwrap_err();
        assert_eq!(err.message(), None);
        assert_eq!(err.user_message("Try again"), "Try again");
        assert_eq!(err.to_string(), "INTERNAL");
    }

    #[test]
    fn test_empty_field_list_is_not_fields() {
        let err = ApiError::Server(ApiFailure {
            error: "X".to_string(),
            message: Some("m".to_string()),
            fields: Some(vec![]),
        });
        assert!(err.fields().is_none());
    }

    #[test]
    fn test_success_without_data_decodes_unit() {
        let response = ApiResponse::<()>::from_json(r#"{"success": true, "message": "done"}"#).unwrap();
        assert!(response.into_result().is_ok());
    }

    #[test]
    fn test_success_missing_required_data_is_error() {
        assert!(ApiResponse::<Item>::from_json(r#"{"success": true, "message": "x"}"#).is_err());
    }

    #[test]
    fn test_network_error_has_no_message() {
        let err = ApiError::Network("offline".to_string());
        assert_eq!(err.message(), None);
        assert_eq!(err.user_message("SYSTEM_ERROR: CONNECTION_FAILED"), "SYSTEM_ERROR: CONNECTION_FAILED");
    }
}
