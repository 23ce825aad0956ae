//! Create Wizard Flow Tests
//!
//! Walks `ServiceWizard` from an empty draft to a submitted payload, including
//! rejected submissions coming back from the API.

use watchdog_frontend::bindings::{ApiError, ApiFailure, ApiFieldError, HttpMethod};
use watchdog_frontend::services::wizard_state::{
    ServiceWizard, WizardStep, CREATE_FAILED_MESSAGE,
};

fn filled_wizard() -> ServiceWizard {
    let mut wizard = ServiceWizard::new();
    wizard.update(|d| {
        d.service_name = "  Payments API  ".to_string();
        d.endpoint_url = "https://api.example.com/health".to_string();
        d.method = HttpMethod::Post;
        d.body = "{\"ping\":true}".to_string();
        d.add_header();
        let id = d.headers[0].id.clone();
        d.set_header_key(&id, "Authorization");
        d.set_header_value(&id, "Bearer token");
        d.add_header();
    });
    wizard
}

fn validation_failure(paths: &[&str]) -> ApiError {
    ApiError::Server(ApiFailure {
        error: "VALIDATION_ERROR".to_string(),
        message: Some("Validation failed".to_string()),
        fields: Some(
            paths
                .iter()
                .map(|p| ApiFieldError {
                    path: p.to_string(),
                    msg: format!("{p} rejected"),
                    kind: "field".to_string(),
                    value: serde_json::Value::Null,
                    location: "body".to_string(),
                })
                .collect(),
        ),
    })
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_empty_draft_cannot_leave_endpoint_step() {
    let mut wizard = ServiceWizard::new();
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Endpoint);
    assert!(wizard.errors().contains("service_name"));
    assert!(wizard.errors().contains("endpoint_url"));
}

#[test]
fn test_editing_clears_errors() {
    let mut wizard = ServiceWizard::new();
    wizard.advance();
    assert!(!wizard.errors().is_empty());
    wizard.update(|d| d.service_name = "x".to_string());
    assert!(wizard.errors().is_empty());
}

#[test]
fn test_full_walk_to_confirm() {
    let mut wizard = filled_wizard();
    assert!(wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Settings);
    assert!(wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Confirm);

    wizard.retreat();
    assert_eq!(wizard.step(), WizardStep::Settings);
    wizard.jump_to(WizardStep::Confirm);
    assert_eq!(wizard.step(), WizardStep::Confirm);
}

#[test]
fn test_settings_rejects_interval_out_of_range() {
    let mut wizard = filled_wizard();
    wizard.advance();
    wizard.update(|d| d.check_interval = 5_000);
    assert!(!wizard.advance());
    assert_eq!(wizard.step(), WizardStep::Settings);
    assert!(wizard.errors().contains("check_interval"));
}

// ============================================================================
// Submission
// ============================================================================

#[test]
fn test_submit_requires_acknowledgment() {
    let mut wizard = filled_wizard();
    wizard.advance();
    wizard.advance();
    assert!(!wizard.can_submit());
    assert!(wizard.begin_submit().is_none());

    wizard.set_confirmed(true);
    let payload = wizard.begin_submit().expect("payload once confirmed");
    assert!(wizard.is_submitting());
    assert!(!wizard.can_submit(), "second submit blocked while in flight");

    assert_eq!(payload.service_name, "Payments API");
    assert_eq!(payload.method, HttpMethod::Post);
    assert_eq!(payload.body.as_deref(), Some("{\"ping\":true}"));
    let headers = payload.headers.expect("one active header");
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer token"));
}

#[test]
fn test_acknowledgment_alone_does_not_enable_submit_off_confirm() {
    let mut wizard = filled_wizard();
    wizard.advance();
    wizard.advance();
    wizard.set_confirmed(true);
    assert!(wizard.can_submit());

    wizard.jump_to(WizardStep::Endpoint);
    assert!(wizard.is_confirmed());
    assert!(!wizard.can_submit());
    assert!(wizard.begin_submit().is_none());
    assert!(!wizard.is_submitting());

    wizard.jump_to(WizardStep::Confirm);
    wizard.retreat();
    assert_eq!(wizard.step(), WizardStep::Settings);
    assert!(!wizard.can_submit());
    assert!(wizard.begin_submit().is_none());

    wizard.jump_to(WizardStep::Confirm);
    assert!(wizard.begin_submit().is_some());
}

#[test]
fn test_rejected_endpoint_field_from_settings_returns_to_first_step() {
    let mut wizard = filled_wizard();
    wizard.advance();
    assert_eq!(wizard.step(), WizardStep::Settings);

    wizard.fail_submit(&validation_failure(&["endpoint_url"]), CREATE_FAILED_MESSAGE);
    assert_eq!(wizard.step(), WizardStep::Endpoint);
    assert_eq!(wizard.errors().get("endpoint_url"), Some("endpoint_url rejected"));
}

#[test]
fn test_rejected_interval_from_first_step_moves_to_settings() {
    let mut wizard = filled_wizard();
    assert_eq!(wizard.step(), WizardStep::Endpoint);

    wizard.fail_submit(&validation_failure(&["check_interval"]), CREATE_FAILED_MESSAGE);
    assert_eq!(wizard.step(), WizardStep::Settings);
    assert!(wizard.errors().contains("check_interval"));
}

#[test]
fn test_rejected_endpoint_field_returns_to_first_step() {
    let mut wizard = filled_wizard();
    wizard.advance();
    wizard.advance();
    wizard.set_confirmed(true);
    wizard.begin_submit();

    wizard.fail_submit(&validation_failure(&["endpoint_url"]), CREATE_FAILED_MESSAGE);
    assert!(!wizard.is_submitting());
    assert_eq!(wizard.step(), WizardStep::Endpoint);
    assert_eq!(wizard.errors().get("endpoint_url"), Some("endpoint_url rejected"));
    assert_eq!(wizard.submit_error(), None);
}

#[test]
fn test_transport_failure_shows_banner_and_stays() {
    let mut wizard = filled_wizard();
    wizard.advance();
    wizard.advance();
    wizard.set_confirmed(true);
    wizard.begin_submit();

    wizard.fail_submit(&ApiError::Network("offline".to_string()), CREATE_FAILED_MESSAGE);
    assert_eq!(wizard.step(), WizardStep::Confirm);
    assert_eq!(wizard.submit_error(), Some(CREATE_FAILED_MESSAGE));
    assert!(wizard.can_submit());
}
