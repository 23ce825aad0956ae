//! Turning rejected submissions into form state.

use super::wizard_state::{FieldErrors, WizardStep};
use crate::bindings::ApiError;

pub const CONNECTION_FAILED_MESSAGE: &str = "SYSTEM_ERROR: CONNECTION_FAILED";

const ENDPOINT_FIELDS: [&str; 3] = ["service_name", "endpoint_url", "method"];
const SETTINGS_FIELDS: [&str; 2] = ["check_interval", "failure_threshold"];

/// What a form should show after a failed submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconciliation {
    pub field_errors: FieldErrors,
    pub banner: Option<String>,
    /// Wizard step owning the first rejected field, if any.
    pub target_step: Option<WizardStep>,
}

/// Server field errors win over the banner. A 401 yields nothing: the
/// session layer has already redirected.
pub fn reconcile_submit_error(error: &ApiError, fallback: &str) -> Reconciliation {
    if error.is_unauthorized() {
        return Reconciliation::default();
    }

    let Some(fields) = error.fields() else {
        return Reconciliation {
            banner: Some(error.user_message(fallback)),
            ..Reconciliation::default()
        };
    };

    let field_errors: FieldErrors = fields
        .iter()
        .map(|f| (f.path.clone(), f.msg.clone()))
        .collect();

    let target_step = if ENDPOINT_FIELDS.iter().any(|f| field_errors.contains(f)) {
        Some(WizardStep::Endpoint)
    } else if SETTINGS_FIELDS.iter().any(|f| field_errors.contains(f)) {
        Some(WizardStep::Settings)
    } else {
        None
    };

    Reconciliation {
        field_errors,
        banner: None,
        target_step,
    }
}

/// Registration variant: `EMAIL_TAKEN` lands on the email field and
/// `VALIDATION_ERROR` shows only field errors.
pub fn reconcile_registration_error(error: &ApiError) -> Reconciliation {
    if error.is_unauthorized() {
        return Reconciliation::default();
    }

    let mut field_errors: FieldErrors = error
        .fields()
        .unwrap_or_default()
        .iter()
        .map(|f| (f.path.clone(), f.msg.clone()))
        .collect();

    let banner = match error.code() {
        Some("EMAIL_TAKEN") => {
            field_errors.insert("email", error.message().unwrap_or("Email already registered"));
            None
        }
        Some("VALIDATION_ERROR") => None,
        _ => Some(error.user_message(CONNECTION_FAILED_MESSAGE)),
    };

    Reconciliation {
        field_errors,
        banner,
        target_step: None,
    }
}

/// Login shows one banner for every failure.
pub fn login_error_message(error: &ApiError) -> Option<String> {
    (!error.is_unauthorized()).then(|| error.user_message(CONNECTION_FAILED_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{ApiFailure, ApiFieldError};

    fn server(code: &str, message: Option<&str>, paths: &[&str]) -> ApiError {
        ApiError::Server(ApiFailure {
            error: code.to_string(),
            message: message.map(str::to_string),
            fields: (!paths.is_empty()).then(|| {
                paths
                    .iter()
                    .map(|p| ApiFieldError {
                        path: p.to_string(),
                        msg: format!("{p} invalid"),
                        kind: "field".to_string(),
                        value: serde_json::Value::Null,
                        location: "body".to_string(),
                    })
                    .collect()
            }),
        })
    }

    #[test]
    fn test_endpoint_fields_target_first_step() {
        for path in ["service_name", "endpoint_url", "method"] {
            let outcome = reconcile_submit_error(&server("VALIDATION_ERROR", None, &[path]), "f");
            assert_eq!(outcome.target_step, Some(WizardStep::Endpoint), "{path}");
        }
    }

    #[test]
    fn test_endpoint_wins_over_settings() {
        let outcome = reconcile_submit_error(
            &server("VALIDATION_ERROR", None, &["check_interval", "endpoint_url"]),
            "f",
        );
        assert_eq!(outcome.target_step, Some(WizardStep::Endpoint));
        assert_eq!(outcome.field_errors.len(), 2);
    }

    #[test]
    fn test_settings_fields_target_second_step() {
        let outcome =
            reconcile_submit_error(&server("VALIDATION_ERROR", None, &["failure_threshold"]), "f");
        assert_eq!(outcome.target_step, Some(WizardStep::Settings));
    }

    #[test]
    fn test_unknown_field_keeps_step() {
        let outcome = reconcile_submit_error(&server("VALIDATION_ERROR", None, &["headers"]), "f");
        assert_eq!(outcome.target_step, None);
        assert_eq!(outcome.field_errors.get("headers"), Some("headers invalid"));
        assert_eq!(outcome.banner, None);
    }

    #[test]
    fn test_banner_uses_message_then_fallback() {
        let outcome = reconcile_submit_error(&server("CONFLICT", Some("Duplicate"), &[]), "f");
        assert_eq!(outcome.banner.as_deref(), Some("Duplicate"));

        let outcome = reconcile_submit_error(&server("CONFLICT", None, &[]), "fallback");
        assert_eq!(outcome.banner.as_deref(), Some("fallback"));
    }

    #[test]
    fn test_unauthorized_shows_nothing() {
        assert_eq!(
            reconcile_submit_error(&ApiError::Unauthorized, "f"),
            Reconciliation::default()
        );
        assert_eq!(login_error_message(&ApiError::Unauthorized), None);
    }

    #[test]
    fn test_registration_email_taken() {
        let outcome =
            reconcile_registration_error(&server("EMAIL_TAKEN", Some("Email already in use"), &[]));
        assert_eq!(outcome.field_errors.get("email"), Some("Email already in use"));
        assert_eq!(outcome.banner, None);
    }

    #[test]
    fn test_registration_validation_error_has_no_banner() {
        let outcome = reconcile_registration_error(&server(
            "VALIDATION_ERROR",
            Some("Invalid"),
            &["password"],
        ));
        assert_eq!(outcome.banner, None);
        assert_eq!(outcome.field_errors.get("password"), Some("password invalid"));
    }

    #[test]
    fn test_registration_transport_failure() {
        let outcome = reconcile_registration_error(&ApiError::Network("offline".to_string()));
        assert_eq!(outcome.banner.as_deref(), Some(CONNECTION_FAILED_MESSAGE));
    }
}
