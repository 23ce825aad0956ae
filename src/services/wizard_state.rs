//! Service Wizard State Management
//!
//! Holds the draft service record edited by the create wizard and the edit
//! form, the step validators, and the reactive context the wizard screens
//! share.
//!
//! # Architecture
//! - `ServiceDraft` - the record being edited
//! - `ServiceWizard` - step controller for the create flow; every draft mutation goes through it
//! - `ServiceEditor` - single-page variant for editing an existing service
//! - `WizardContext` - reactive wrapper provided to the wizard component tree

use indexmap::IndexMap;
use leptos::prelude::*;
use leptos::task::spawn_local;
use once_cell::sync::Lazy;
use regex::Regex;

use super::payload::{assemble_service_payload, test_connection_payload};
use super::query_cache::{Mutation, QueryInvalidation};
use super::reconcile::reconcile_submit_error;
use super::session::SessionState;
use crate::bindings::{
    ApiError, CreateServiceResponse, HttpMethod, ServiceInfo, ServicePayload,
    TestConnectionResponse,
};

// ============================================================================
// Limits
// ============================================================================

pub const MIN_CHECK_INTERVAL_MS: u64 = 15_000;
pub const MAX_CHECK_INTERVAL_MS: u64 = 3_600_000;
pub const MIN_REQUEST_TIMEOUT_SECS: u32 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u32 = 60;
pub const MIN_FAILURE_THRESHOLD: u32 = 1;
pub const MAX_FAILURE_THRESHOLD: u32 = 10;
pub const MIN_STATUS_CODE: u16 = 100;
pub const MAX_STATUS_CODE: u16 = 599;
pub const MAX_SERVICE_NAME_LEN: usize = 100;

pub const CREATE_FAILED_MESSAGE: &str = "Failed to create service. Please try again.";
pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update service. Please try again.";
pub const TEST_FAILED_MESSAGE: &str =
    "Connection test failed. Check the endpoint URL and try again.";

static ENDPOINT_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://.+").expect("Invalid endpoint URL regex"));

// ============================================================================
// Steps
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WizardStep {
    #[default]
    Endpoint,
    Settings,
    Confirm,
}

impl WizardStep {
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::Endpoint => "Endpoint",
            WizardStep::Settings => "Settings",
            WizardStep::Confirm => "Confirm",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            WizardStep::Endpoint => "Target URL, method and request shape",
            WizardStep::Settings => "Check interval and alerting",
            WizardStep::Confirm => "Review and start monitoring",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            WizardStep::Endpoint => 0,
            WizardStep::Settings => 1,
            WizardStep::Confirm => 2,
        }
    }

    /// Share of the flow completed once this step is reached, rounded.
    pub fn progress_percent(&self) -> u32 {
        let total = Self::all().len() as f64;
        ((self.index() + 1) as f64 / total * 100.0).round() as u32
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }

    pub fn all() -> Vec<Self> {
        vec![WizardStep::Endpoint, WizardStep::Settings, WizardStep::Confirm]
    }

    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Endpoint => Some(WizardStep::Settings),
            WizardStep::Settings => Some(WizardStep::Confirm),
            WizardStep::Confirm => None,
        }
    }

    pub fn previous(&self) -> Option<Self> {
        match self {
            WizardStep::Endpoint => None,
            WizardStep::Settings => Some(WizardStep::Endpoint),
            WizardStep::Confirm => Some(WizardStep::Settings),
        }
    }
}

// ============================================================================
// Draft
// ============================================================================

/// One editable request header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderEntry {
    /// Stable row identity for keyed rendering.
    pub id: String,
    pub key: String,
    pub value: String,
}

impl HeaderEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Default for HeaderEntry {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// Why a status code was not added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCodeRejection {
    NotANumber,
    OutOfRange,
    Duplicate,
}

impl StatusCodeRejection {
    pub fn message(&self) -> &'static str {
        match self {
            StatusCodeRejection::NotANumber => "Status code must be a number",
            StatusCodeRejection::OutOfRange => "Status code must be between 100 and 599",
            StatusCodeRejection::Duplicate => "Status code already added",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceDraft {
    pub service_name: String,
    pub endpoint_url: String,
    pub method: HttpMethod,
    pub headers: Vec<HeaderEntry>,
    /// Sent only for POST and PUT.
    pub body: String,
    pub check_interval: u64,
    pub request_timeout: u32,
    pub failure_threshold: u32,
    pub expected_status_codes: Vec<u16>,
    pub ssl_verify: bool,
}

impl Default for ServiceDraft {
    fn default() -> Self {
        Self {
            service_name: String::new(),
            endpoint_url: String::new(),
            method: HttpMethod::Get,
            headers: Vec::new(),
            body: String::new(),
            check_interval: 30_000,
            request_timeout: 10,
            failure_threshold: 3,
            expected_status_codes: vec![200, 201, 204],
            ssl_verify: true,
        }
    }
}

impl ServiceDraft {
    /// Hydrate from a saved service. Headers, body, timeout, codes and
    /// certificate checks are not returned by the backend and start from defaults.
    pub fn from_service(service: &ServiceInfo) -> Self {
        Self {
            service_name: service.name.clone(),
            endpoint_url: service.endpoint.clone(),
            method: HttpMethod::parse(&service.method).unwrap_or_default(),
            check_interval: service.check_interval,
            failure_threshold: service.failure_threshold,
            ..Self::default()
        }
    }

    pub fn has_body(&self) -> bool {
        self.method.has_body()
    }

    /// Unparseable input becomes the minimum.
    pub fn set_request_timeout_input(&mut self, raw: &str) {
        self.request_timeout =
            clamp_input(raw, MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
    }

    pub fn set_failure_threshold_input(&mut self, raw: &str) {
        self.failure_threshold = clamp_input(raw, MIN_FAILURE_THRESHOLD, MAX_FAILURE_THRESHOLD);
    }

    pub fn add_status_code(&mut self, raw: &str) -> Result<u16, StatusCodeRejection> {
        let parsed: i64 = raw
            .trim()
            .parse()
            .map_err(|_| StatusCodeRejection::NotANumber)?;
        if !(MIN_STATUS_CODE as i64..=MAX_STATUS_CODE as i64).contains(&parsed) {
            return Err(StatusCodeRejection::OutOfRange);
        }
        let code = parsed as u16;
        if self.expected_status_codes.contains(&code) {
            return Err(StatusCodeRejection::Duplicate);
        }
        self.expected_status_codes.push(code);
        Ok(code)
    }

    pub fn remove_status_code(&mut self, code: u16) {
        self.expected_status_codes.retain(|c| *c != code);
    }

    pub fn add_header(&mut self) {
        self.headers.push(HeaderEntry::default());
    }

    pub fn set_header_key(&mut self, id: &str, key: &str) {
        if let Some(header) = self.headers.iter_mut().find(|h| h.id == id) {
            header.key = key.to_string();
        }
    }

    pub fn set_header_value(&mut self, id: &str, value: &str) {
        if let Some(header) = self.headers.iter_mut().find(|h| h.id == id) {
            header.value = value.to_string();
        }
    }

    pub fn remove_header(&mut self, id: &str) {
        self.headers.retain(|h| h.id != id);
    }

    /// Rows with a non-blank key.
    pub fn active_headers(&self) -> Vec<&HeaderEntry> {
        self.headers
            .iter()
            .filter(|h| !h.key.trim().is_empty())
            .collect()
    }
}

fn clamp_input(raw: &str, min: u32, max: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(value) => value.clamp(min as i64, max as i64) as u32,
        Err(_) => min,
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Field name to message. Replaced wholesale, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(IndexMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

pub fn validate_endpoint_step(draft: &ServiceDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name = draft.service_name.trim();
    if name.is_empty() {
        errors.insert("service_name", "Service name is required");
    } else if name.chars().count() > MAX_SERVICE_NAME_LEN {
        errors.insert("service_name", "Service name must be under 100 characters");
    }

    let endpoint = draft.endpoint_url.trim();
    if endpoint.is_empty() {
        errors.insert("endpoint_url", "Endpoint URL is required");
    } else if !ENDPOINT_URL.is_match(endpoint) {
        errors.insert("endpoint_url", "A valid HTTP/HTTPS URL is required");
    }

    errors
}

pub fn validate_settings_step(draft: &ServiceDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if !(MIN_CHECK_INTERVAL_MS..=MAX_CHECK_INTERVAL_MS).contains(&draft.check_interval) {
        errors.insert("check_interval", "Check interval must be between 15s and 1h");
    }
    errors
}

/// Validator for a step. Confirm has none.
pub fn validate_step(step: WizardStep, draft: &ServiceDraft) -> FieldErrors {
    match step {
        WizardStep::Endpoint => validate_endpoint_step(draft),
        WizardStep::Settings => validate_settings_step(draft),
        WizardStep::Confirm => FieldErrors::new(),
    }
}

/// Both validators at once, for the edit form.
pub fn validate_all(draft: &ServiceDraft) -> FieldErrors {
    validate_endpoint_step(draft)
        .iter()
        .chain(validate_settings_step(draft).iter())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Create Wizard
// ============================================================================

/// Step controller for the create flow.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceWizard {
    step: WizardStep,
    draft: ServiceDraft,
    errors: FieldErrors,
    submit_error: Option<String>,
    confirmed: bool,
    submitting: bool,
}

impl ServiceWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &ServiceDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Mutate the draft. Clears field errors and the submission error.
    pub fn update(&mut self, f: impl FnOnce(&mut ServiceDraft)) {
        f(&mut self.draft);
        self.errors = FieldErrors::new();
        self.submit_error = None;
    }

    pub fn replace_draft(&mut self, draft: ServiceDraft) {
        self.update(|d| *d = draft);
    }

    /// Validate the current step and move forward. Returns whether the step changed
    /// or the wizard was already on its last step with a clean validation.
    pub fn advance(&mut self) -> bool {
        let errors = validate_step(self.step, &self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }
        self.errors = FieldErrors::new();
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        true
    }

    pub fn retreat(&mut self) {
        self.errors = FieldErrors::new();
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
    }

    /// Move without validation.
    pub fn jump_to(&mut self, step: WizardStep) {
        self.step = step;
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    pub fn can_submit(&self) -> bool {
        self.step == WizardStep::Confirm && self.confirmed && !self.submitting
    }

    /// Mark the submission in flight and hand back its payload, or `None` when blocked.
    pub fn begin_submit(&mut self) -> Option<ServicePayload> {
        if !self.can_submit() {
            return None;
        }
        self.submitting = true;
        self.submit_error = None;
        Some(assemble_service_payload(&self.draft))
    }

    pub fn finish_submit(&mut self) {
        self.submitting = false;
    }

    /// Apply a rejected submission: field errors (possibly moving the wizard) or a banner.
    pub fn fail_submit(&mut self, error: &ApiError, fallback: &str) {
        self.submitting = false;
        let outcome = reconcile_submit_error(error, fallback);
        self.errors = outcome.field_errors;
        self.submit_error = outcome.banner;
        if let Some(step) = outcome.target_step {
            self.step = step;
        }
    }
}

// ============================================================================
// Edit Form
// ============================================================================

/// Single-page edit of an existing service. Validates everything at once and never moves steps.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEditor {
    service_id: String,
    draft: ServiceDraft,
    errors: FieldErrors,
    submit_error: Option<String>,
    saving: bool,
}

impl ServiceEditor {
    pub fn new(service: &ServiceInfo) -> Self {
        Self {
            service_id: service.id.clone(),
            draft: ServiceDraft::from_service(service),
            errors: FieldErrors::new(),
            submit_error: None,
            saving: false,
        }
    }

    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    pub fn draft(&self) -> &ServiceDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn update(&mut self, f: impl FnOnce(&mut ServiceDraft)) {
        f(&mut self.draft);
        self.errors = FieldErrors::new();
        self.submit_error = None;
    }

    pub fn replace_draft(&mut self, draft: ServiceDraft) {
        self.update(|d| *d = draft);
    }

    pub fn begin_save(&mut self) -> Option<ServicePayload> {
        if self.saving {
            return None;
        }
        let errors = validate_all(&self.draft);
        if !errors.is_empty() {
            self.errors = errors;
            return None;
        }
        self.saving = true;
        self.submit_error = None;
        Some(assemble_service_payload(&self.draft))
    }

    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    pub fn fail_save(&mut self, error: &ApiError) {
        self.saving = false;
        let outcome = reconcile_submit_error(error, UPDATE_FAILED_MESSAGE);
        self.errors = outcome.field_errors;
        self.submit_error = outcome.banner;
    }
}

// ============================================================================
// Connection Test
// ============================================================================

/// Result of the last "Test Connection" press.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConnectionTest {
    pub running: bool,
    pub result: Option<TestConnectionResponse>,
    pub error: Option<String>,
}

impl ConnectionTest {
    pub fn can_start(&self, draft: &ServiceDraft) -> bool {
        !self.running && !draft.endpoint_url.is_empty()
    }
}

/// Run a connection test against the draft's endpoint, reporting into `state`.
pub fn test_connection_action(
    session: SessionState,
    state: RwSignal<ConnectionTest>,
) -> impl Fn(ServiceDraft) + Clone {
    move |draft: ServiceDraft| {
        if !state.with_untracked(|s| s.can_start(&draft)) {
            return;
        }
        state.set(ConnectionTest {
            running: true,
            result: None,
            error: None,
        });

        let payload = test_connection_payload(&draft);
        let api = session.api();
        spawn_local(async move {
            let outcome = api.test_connection(&payload).await;
            state.set(match outcome {
                Ok(result) => ConnectionTest {
                    running: false,
                    result: Some(result),
                    error: None,
                },
                Err(e) if e.is_unauthorized() => ConnectionTest::default(),
                Err(_) => ConnectionTest {
                    running: false,
                    result: None,
                    error: Some(TEST_FAILED_MESSAGE.to_string()),
                },
            });
        });
    }
}

// ============================================================================
// Wizard Context - Reactive State Management
// ============================================================================

/// Reactive context for the create wizard
#[derive(Clone, Copy)]
pub struct WizardContext {
    pub wizard: RwSignal<ServiceWizard>,
    pub connection_test: RwSignal<ConnectionTest>,
}

impl WizardContext {
    pub fn new() -> Self {
        Self {
            wizard: RwSignal::new(ServiceWizard::new()),
            connection_test: RwSignal::new(ConnectionTest::default()),
        }
    }

    pub fn step(&self) -> WizardStep {
        self.wizard.with(|w| w.step())
    }

    pub fn draft(&self) -> ServiceDraft {
        self.wizard.with(|w| w.draft().clone())
    }

    pub fn errors(&self) -> FieldErrors {
        self.wizard.with(|w| w.errors().clone())
    }

    pub fn replace_draft(&self, draft: ServiceDraft) {
        self.wizard.update(|w| w.replace_draft(draft));
    }

    pub fn advance(&self) -> bool {
        self.wizard.try_update(|w| w.advance()).unwrap_or(false)
    }

    pub fn retreat(&self) {
        self.wizard.update(|w| w.retreat());
    }

    pub fn jump_to(&self, step: WizardStep) {
        self.wizard.update(|w| w.jump_to(step));
    }
}

impl Default for WizardContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide wizard context to the component tree
pub fn provide_wizard_context() {
    provide_context(WizardContext::new());
}

/// Use the wizard context from anywhere in the tree
pub fn use_wizard_context() -> WizardContext {
    expect_context::<WizardContext>()
}

// ============================================================================
// Wizard Actions - Async operations
// ============================================================================

/// Submit the wizard. No-op unless the wizard is on Confirm, acknowledged and idle.
pub fn submit_service_action(
    ctx: WizardContext,
    session: SessionState,
    cache: QueryInvalidation,
    on_created: impl Fn(CreateServiceResponse) + Clone + 'static,
) -> impl Fn() + Clone {
    move || {
        let Some(payload) = ctx.wizard.try_update(|w| w.begin_submit()).flatten() else {
            return;
        };

        let api = session.api();
        let on_created = on_created.clone();
        spawn_local(async move {
            match api.create_service(&payload).await {
                Ok(created) => {
                    log::info!("Created service {}", created.service_id);
                    ctx.wizard.update(|w| w.finish_submit());
                    cache.invalidate(Mutation::Create);
                    on_created(created);
                }
                Err(e) => {
                    ctx.wizard
                        .update(|w| w.fail_submit(&e, CREATE_FAILED_MESSAGE));
                }
            }
        });
    }
}

/// Save the edit form. Validation failures never reach the network.
pub fn save_service_action(
    editor: RwSignal<Option<ServiceEditor>>,
    session: SessionState,
    cache: QueryInvalidation,
    on_saved: impl Fn(String) + Clone + 'static,
) -> impl Fn() + Clone {
    move || {
        let begun = editor
            .try_update(|slot| {
                let editor = slot.as_mut()?;
                let payload = editor.begin_save()?;
                Some((editor.service_id().to_string(), payload))
            })
            .flatten();
        let Some((service_id, payload)) = begun else {
            return;
        };

        let api = session.api();
        let on_saved = on_saved.clone();
        spawn_local(async move {
            match api.update_service(&service_id, &payload).await {
                Ok(_) => {
                    log::info!("Updated service {service_id}");
                    editor.update(|e| {
                        if let Some(e) = e {
                            e.finish_save();
                        }
                    });
                    cache.invalidate(Mutation::Update);
                    on_saved(service_id);
                }
                Err(err) => editor.update(|e| {
                    if let Some(e) = e {
                        e.fail_save(&err);
                    }
                }),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{ApiFailure, ApiFieldError, ServiceStatus};

    fn valid_draft() -> ServiceDraft {
        ServiceDraft {
            service_name: "Payments API".to_string(),
            endpoint_url: "https://api.example.com/health".to_string(),
            ..ServiceDraft::default()
        }
    }

    fn at_confirm() -> ServiceWizard {
        let mut wizard = ServiceWizard::new();
        wizard.replace_draft(valid_draft());
        assert!(wizard.advance());
        assert!(wizard.advance());
        wizard
    }

    fn field_error(path: &str) -> ApiError {
        ApiError::Server(ApiFailure {
            error: "VALIDATION_ERROR".to_string(),
            message: Some("Invalid input".to_string()),
            fields: Some(vec![ApiFieldError {
                path: path.to_string(),
                msg: format!("bad {path}"),
                kind: "field".to_string(),
                value: serde_json::Value::Null,
                location: "body".to_string(),
            }]),
        })
    }

    // --- Steps ---

    #[test]
    fn test_step_navigation_bounds() {
        assert_eq!(WizardStep::Endpoint.previous(), None);
        assert_eq!(WizardStep::Confirm.next(), None);
        assert_eq!(WizardStep::from_index(1), Some(WizardStep::Settings));
        assert_eq!(WizardStep::from_index(3), None);
        assert_eq!(WizardStep::Endpoint.progress_percent(), 33);
        assert_eq!(WizardStep::Settings.progress_percent(), 67);
        assert_eq!(WizardStep::Confirm.progress_percent(), 100);
        for (i, step) in WizardStep::all().iter().enumerate() {
            assert_eq!(step.index(), i);
        }
    }

    // --- Draft ---

    #[test]
    fn test_default_draft() {
        let draft = ServiceDraft::default();
        assert_eq!(draft.method, HttpMethod::Get);
        assert_eq!(draft.check_interval, 30_000);
        assert_eq!(draft.request_timeout, 10);
        assert_eq!(draft.failure_threshold, 3);
        assert_eq!(draft.expected_status_codes, vec![200, 201, 204]);
        assert!(draft.ssl_verify);
    }

    #[test]
    fn test_clamped_inputs() {
        let mut draft = ServiceDraft::default();
        draft.set_request_timeout_input("120");
        assert_eq!(draft.request_timeout, 60);
        draft.set_request_timeout_input("0");
        assert_eq!(draft.request_timeout, 1);
        draft.set_request_timeout_input("abc");
        assert_eq!(draft.request_timeout, 1);
        draft.set_failure_threshold_input("7");
        assert_eq!(draft.failure_threshold, 7);
        draft.set_failure_threshold_input("-3");
        assert_eq!(draft.failure_threshold, 1);
        draft.set_failure_threshold_input("99");
        assert_eq!(draft.failure_threshold, 10);
    }

    #[test]
    fn test_status_code_rules() {
        let mut draft = ServiceDraft::default();
        assert_eq!(draft.add_status_code("301"), Ok(301));
        assert_eq!(draft.add_status_code("301"), Err(StatusCodeRejection::Duplicate));
        assert_eq!(draft.add_status_code("99"), Err(StatusCodeRejection::OutOfRange));
        assert_eq!(draft.add_status_code("600"), Err(StatusCodeRejection::OutOfRange));
        assert_eq!(draft.add_status_code("ok"), Err(StatusCodeRejection::NotANumber));
        draft.remove_status_code(200);
        assert_eq!(draft.expected_status_codes, vec![201, 204, 301]);
    }

    #[test]
    fn test_header_rows_by_id() {
        let mut draft = ServiceDraft::default();
        draft.add_header();
        draft.add_header();
        let first = draft.headers[0].id.clone();
        let second = draft.headers[1].id.clone();
        assert_ne!(first, second);

        draft.set_header_key(&first, "X-Api-Key");
        draft.set_header_value(&first, "secret");
        assert_eq!(draft.active_headers().len(), 1);

        draft.remove_header(&first);
        assert_eq!(draft.headers.len(), 1);
        assert_eq!(draft.headers[0].id, second);
    }

    #[test]
    fn test_from_service_resets_unsaved_fields() {
        let info = ServiceInfo {
            id: "s1".to_string(),
            name: "API".to_string(),
            endpoint: "https://api.example.com".to_string(),
            method: "post".to_string(),
            status: ServiceStatus::Active,
            check_interval: 60_000,
            failure_threshold: 5,
            created_at: String::new(),
        };
        let draft = ServiceDraft::from_service(&info);
        assert_eq!(draft.method, HttpMethod::Post);
        assert_eq!(draft.check_interval, 60_000);
        assert_eq!(draft.failure_threshold, 5);
        assert!(draft.headers.is_empty());
        assert_eq!(draft.request_timeout, 10);
        assert_eq!(draft.expected_status_codes, vec![200, 201, 204]);
    }

    // --- Validation ---

    #[test]
    fn test_endpoint_messages() {
        let errors = validate_endpoint_step(&ServiceDraft::default());
        assert_eq!(errors.get("service_name"), Some("Service name is required"));
        assert_eq!(errors.get("endpoint_url"), Some("Endpoint URL is required"));

        let draft = ServiceDraft {
            service_name: "x".repeat(101),
            endpoint_url: "ftp://example.com".to_string(),
            ..ServiceDraft::default()
        };
        let errors = validate_endpoint_step(&draft);
        assert_eq!(
            errors.get("service_name"),
            Some("Service name must be under 100 characters")
        );
        assert_eq!(
            errors.get("endpoint_url"),
            Some("A valid HTTP/HTTPS URL is required")
        );
    }

    #[test]
    fn test_name_length_counts_trimmed() {
        let draft = ServiceDraft {
            service_name: format!("  {}  ", "a".repeat(100)),
            ..valid_draft()
        };
        assert!(validate_endpoint_step(&draft).is_empty());
    }

    #[test]
    fn test_scheme_only_url_rejected() {
        let draft = ServiceDraft {
            endpoint_url: "https://".to_string(),
            ..valid_draft()
        };
        assert!(validate_endpoint_step(&draft).contains("endpoint_url"));
    }

    #[test]
    fn test_interval_bounds() {
        for (interval, ok) in [
            (14_999, false),
            (15_000, true),
            (3_600_000, true),
            (3_600_001, false),
        ] {
            let draft = ServiceDraft {
                check_interval: interval,
                ..valid_draft()
            };
            assert_eq!(validate_settings_step(&draft).is_empty(), ok, "{interval}");
        }
    }

    #[test]
    fn test_validate_all_combines() {
        let draft = ServiceDraft {
            check_interval: 1_000,
            ..ServiceDraft::default()
        };
        let errors = validate_all(&draft);
        assert_eq!(errors.len(), 3);
        assert!(errors.contains("check_interval"));
    }

    // --- Wizard ---

    #[test]
    fn test_advance_blocked_by_errors() {
        let mut wizard = ServiceWizard::new();
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), WizardStep::Endpoint);
        assert!(wizard.errors().contains("service_name"));
    }

    #[test]
    fn test_update_clears_errors() {
        let mut wizard = ServiceWizard::new();
        wizard.advance();
        assert!(!wizard.errors().is_empty());

        wizard.update(|d| d.service_name = "A".to_string());
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn test_retreat_is_unconditional() {
        let mut wizard = at_confirm();
        wizard.update(|d| d.check_interval = 0);
        wizard.retreat();
        assert_eq!(wizard.step(), WizardStep::Settings);
        wizard.retreat();
        wizard.retreat();
        assert_eq!(wizard.step(), WizardStep::Endpoint);
    }

    #[test]
    fn test_submit_requires_acknowledgment() {
        let mut wizard = at_confirm();
        assert!(!wizard.can_submit());
        assert!(wizard.begin_submit().is_none());

        wizard.set_confirmed(true);
        assert!(wizard.can_submit());
        let payload = wizard.begin_submit().unwrap();
        assert_eq!(payload.service_name, "Payments API");
        assert!(wizard.is_submitting());
        assert!(!wizard.can_submit());
        assert!(wizard.begin_submit().is_none());
    }

    #[test]
    fn test_server_field_error_moves_to_endpoint() {
        let mut wizard = at_confirm();
        wizard.set_confirmed(true);
        wizard.begin_submit();

        wizard.fail_submit(&field_error("endpoint_url"), CREATE_FAILED_MESSAGE);

        assert_eq!(wizard.step(), WizardStep::Endpoint);
        assert_eq!(wizard.errors().get("endpoint_url"), Some("bad endpoint_url"));
        assert_eq!(wizard.submit_error(), None);
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_server_global_error_becomes_banner() {
        let mut wizard = at_confirm();
        wizard.set_confirmed(true);
        wizard.begin_submit();

        wizard.fail_submit(&ApiError::Network("down".to_string()), CREATE_FAILED_MESSAGE);

        assert_eq!(wizard.step(), WizardStep::Confirm);
        assert_eq!(wizard.submit_error(), Some(CREATE_FAILED_MESSAGE));
    }

    #[test]
    fn test_jump_skips_validation() {
        let mut wizard = at_confirm();
        wizard.jump_to(WizardStep::Endpoint);
        assert_eq!(wizard.step(), WizardStep::Endpoint);
        wizard.jump_to(WizardStep::Confirm);
        assert_eq!(wizard.step(), WizardStep::Confirm);
    }

    // --- Editor ---

    fn editor() -> ServiceEditor {
        ServiceEditor::new(&ServiceInfo {
            id: "s1".to_string(),
            name: "API".to_string(),
            endpoint: "https://api.example.com".to_string(),
            method: "GET".to_string(),
            status: ServiceStatus::Active,
            check_interval: 30_000,
            failure_threshold: 3,
            created_at: String::new(),
        })
    }

    #[test]
    fn test_editor_validates_everything() {
        let mut editor = editor();
        editor.update(|d| {
            d.service_name = " ".to_string();
            d.check_interval = 10;
        });
        assert!(editor.begin_save().is_none());
        assert!(editor.errors().contains("service_name"));
        assert!(editor.errors().contains("check_interval"));
        assert!(!editor.is_saving());
    }

    #[test]
    fn test_editor_server_errors_stay_put() {
        let mut editor = editor();
        assert!(editor.begin_save().is_some());
        editor.fail_save(&field_error("check_interval"));
        assert_eq!(editor.errors().get("check_interval"), Some("bad check_interval"));

        editor.update(|d| d.service_name = "API v2".to_string());
        editor.begin_save();
        editor.fail_save(&ApiError::Decode("x".to_string()));
        assert_eq!(editor.submit_error(), Some(UPDATE_FAILED_MESSAGE));
    }

    #[test]
    fn test_connection_test_gate() {
        let state = ConnectionTest::default();
        assert!(!state.can_start(&ServiceDraft::default()));
        assert!(state.can_start(&valid_draft()));
        let running = ConnectionTest {
            running: true,
            ..ConnectionTest::default()
        };
        assert!(!running.can_start(&valid_draft()));
    }
}
