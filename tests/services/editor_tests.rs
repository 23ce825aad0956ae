//! Edit Form Tests
//!
//! `ServiceEditor` hydration from a saved service and whole-form validation.

use watchdog_frontend::bindings::{ApiError, HttpMethod, ServiceInfo, ServiceStatus};
use watchdog_frontend::services::wizard_state::{ServiceEditor, UPDATE_FAILED_MESSAGE};

fn saved_service() -> ServiceInfo {
    ServiceInfo {
        id: "svc-1".to_string(),
        name: "Billing".to_string(),
        endpoint: "https://billing.example.com/ping".to_string(),
        method: "put".to_string(),
        status: ServiceStatus::Active,
        check_interval: 60_000,
        failure_threshold: 5,
        created_at: "2026-01-05T10:00:00Z".to_string(),
    }
}

#[test]
fn test_editor_hydrates_saved_fields() {
    let editor = ServiceEditor::new(&saved_service());
    assert_eq!(editor.service_id(), "svc-1");
    let draft = editor.draft();
    assert_eq!(draft.service_name, "Billing");
    assert_eq!(draft.method, HttpMethod::Put);
    assert_eq!(draft.check_interval, 60_000);
    assert_eq!(draft.failure_threshold, 5);
    assert_eq!(draft.expected_status_codes, vec![200, 201, 204]);
}

#[test]
fn test_editor_validates_every_field_before_saving() {
    let mut editor = ServiceEditor::new(&saved_service());
    editor.update(|d| {
        d.service_name = "   ".to_string();
        d.check_interval = 1_000;
    });
    assert!(editor.begin_save().is_none());
    assert!(editor.errors().contains("service_name"));
    assert!(editor.errors().contains("check_interval"));
    assert!(!editor.is_saving());
}

#[test]
fn test_editor_save_round() {
    let mut editor = ServiceEditor::new(&saved_service());
    let payload = editor.begin_save().expect("valid draft");
    assert_eq!(payload.endpoint_url, "https://billing.example.com/ping");
    assert!(editor.is_saving());

    editor.fail_save(&ApiError::Network("timeout".to_string()));
    assert!(!editor.is_saving());
    assert_eq!(editor.submit_error(), Some(UPDATE_FAILED_MESSAGE));
}
