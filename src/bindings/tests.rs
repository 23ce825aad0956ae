use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use futures::executor::block_on;
use indexmap::IndexMap;
use serde_json::json;

use super::*;
use crate::services::session::CredentialStore;
use crate::services::storage::{KeyValueStorage, MemoryStorage};

#[derive(Clone, Default)]
struct MockTransport {
    sent: Rc<RefCell<Vec<HttpRequest>>>,
    replies: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
}

impl MockTransport {
    fn reply(&self, status: u16, body: serde_json::Value) {
        self.replies.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    fn fail(&self, error: ApiError) {
        self.replies.borrow_mut().push_back(Err(error));
    }

    fn last(&self) -> HttpRequest {
        self.sent.borrow().last().cloned().unwrap()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.sent.borrow_mut().push(request);
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_string())))
    }
}

fn client() -> (
    ApiClient<MockTransport, MemoryStorage>,
    MockTransport,
    MemoryStorage,
) {
    let transport = MockTransport::default();
    let backend = MemoryStorage::new();
    let credentials = CredentialStore::new(backend.clone(), "watchdog_");
    let client = ApiClient::new("http://api.test/", transport.clone(), credentials);
    (client, transport, backend)
}

fn ok(data: serde_json::Value) -> serde_json::Value {
    json!({"success": true, "message": "ok", "data": data})
}

fn auth_data() -> serde_json::Value {
    json!({
        "user": {"id": "u1", "email": "ada@example.com", "full_name": "Ada"},
        "access_token": "acc",
        "refresh_token": "ref",
        "expires_in": 900
    })
}

// --- Request shaping ---

#[test]
fn test_anonymous_request_has_no_bearer() {
    let (client, transport, _) = client();
    transport.reply(200, ok(json!(null)));

    block_on(client.get::<()>("/api/auth/me")).unwrap();

    let request = transport.last();
    assert_eq!(request.url, "http://api.test/api/auth/me");
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("authorization"), None);
}

#[test]
fn test_stored_token_becomes_bearer() {
    let (client, transport, _) = client();
    client.credentials().store("acc", "ref");
    transport.reply(200, ok(json!(null)));

    block_on(client.get::<()>("/api/auth/me")).unwrap();

    assert_eq!(transport.last().header("Authorization"), Some("Bearer acc"));
}

#[test]
fn test_get_never_sends_body() {
    let (client, transport, _) = client();
    transport.reply(200, ok(json!(null)));

    block_on(client.request::<(), _>(RequestMethod::Get, "/x", Some(&json!({"a": 1})))).unwrap();

    assert_eq!(transport.last().body, None);
}

#[test]
fn test_post_serializes_body() {
    let (client, transport, _) = client();
    transport.reply(200, ok(json!(null)));

    block_on(client.post::<(), _>("/x", &json!({"a": 1}))).unwrap();

    let request = transport.last();
    assert_eq!(request.method, RequestMethod::Post);
    assert_eq!(request.body.as_deref(), Some(r#"{"a":1}"#));
}

// --- Response handling ---

#[test]
fn test_unauthorized_clears_credentials_and_runs_hook() {
    let (client, transport, backend) = client();
    let redirected = Rc::new(Cell::new(false));
    let flag = redirected.clone();
    let client = client.with_unauthorized_handler(move || flag.set(true));
    client.credentials().store("acc", "ref");
    transport.reply(401, json!({"success": false, "error": "UNAUTHORIZED", "message": "bad"}));

    let result = block_on(client.dashboard_overview());

    assert_eq!(result.unwrap_err(), ApiError::Unauthorized);
    assert!(redirected.get());
    assert_eq!(backend.get_item("watchdog_access_token"), None);
    assert_eq!(backend.get_item("watchdog_refresh_token"), None);
}

#[test]
fn test_unauthorized_ignores_body_shape() {
    let (client, transport, _) = client();
    transport.replies.borrow_mut().push_back(Ok(HttpResponse {
        status: 401,
        body: "<html>nope</html>".to_string(),
    }));

    let err = block_on(client.get::<()>("/x")).unwrap_err();
    assert!(err.is_unauthorized());
}

#[test]
fn test_failure_envelope_becomes_server_error() {
    let (client, transport, _) = client();
    transport.reply(
        422,
        json!({
            "success": false,
            "error": "VALIDATION_ERROR",
            "message": "Invalid input",
            "fields": [{"type": "field", "value": "x", "msg": "Bad URL", "path": "endpoint_url", "location": "body"}]
        }),
    );

    let err = block_on(client.get::<()>("/x")).unwrap_err();

    assert_eq!(err.code(), Some("VALIDATION_ERROR"));
    assert_eq!(err.fields().unwrap()[0].msg, "Bad URL");
}

#[test]
fn test_network_failure_propagates() {
    let (client, transport, _) = client();
    transport.fail(ApiError::Network("offline".to_string()));

    let err = block_on(client.get::<()>("/x")).unwrap_err();
    assert_eq!(err, ApiError::Network("offline".to_string()));
}

#[test]
fn test_garbage_body_is_decode_error() {
    let (client, transport, _) = client();
    transport.replies.borrow_mut().push_back(Ok(HttpResponse {
        status: 502,
        body: "Bad Gateway".to_string(),
    }));

    let err = block_on(client.get::<()>("/x")).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// --- Auth ---

#[test]
fn test_login_persists_credentials() {
    let (client, transport, _) = client();
    transport.reply(200, ok(auth_data()));

    let payload = LoginPayload {
        email: "ada@example.com".to_string(),
        password: "secret".to_string(),
    };
    let auth = block_on(client.login(&payload)).unwrap();

    assert_eq!(auth.user.full_name, "Ada");
    assert_eq!(client.credentials().access_token().as_deref(), Some("acc"));
    assert_eq!(client.credentials().refresh_token().as_deref(), Some("ref"));
    assert_eq!(transport.last().url, "http://api.test/api/auth/login");
}

#[test]
fn test_register_writes_json_encoded_pair_once() {
    let (client, transport, backend) = client();
    transport.reply(201, ok(auth_data()));

    let payload = RegisterPayload {
        full_name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "password1".to_string(),
    };
    block_on(client.register(&payload)).unwrap();

    assert_eq!(backend.get_item("watchdog_access_token").as_deref(), Some("\"acc\""));
    assert_eq!(backend.get_item("watchdog_refresh_token").as_deref(), Some("\"ref\""));
    assert_eq!(backend.len(), 2);
    assert_eq!(transport.last().url, "http://api.test/api/auth/register");
}

#[test]
fn test_failed_register_stores_nothing() {
    let (client, transport, _) = client();
    transport.reply(
        409,
        json!({"success": false, "error": "EMAIL_TAKEN", "message": "Email already registered"}),
    );

    let payload = RegisterPayload {
        full_name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        password: "password1".to_string(),
    };
    let err = block_on(client.register(&payload)).unwrap_err();

    assert_eq!(err.code(), Some("EMAIL_TAKEN"));
    assert!(!client.credentials().is_authenticated());
}

// --- Services ---

#[test]
fn test_services_query_string() {
    let query = ServicesQuery {
        page: Some(2),
        limit: Some(5),
        search: "api gw".to_string(),
        status: Some(ServiceStatus::Down),
        sort_by: None,
        sort_order: None,
    };
    assert_eq!(
        query.to_query_string(),
        "?page=2&limit=5&search=api+gw&status=down"
    );
    assert_eq!(ServicesQuery::default().to_query_string(), "");
}

#[test]
fn test_list_services_decodes() {
    let (client, transport, _) = client();
    transport.reply(
        200,
        ok(json!({
            "overview": {"total_services": 1, "active_count": 1, "down_count": 0, "warning_count": 0, "paused_count": 0},
            "items": [{
                "id": "s1", "status": "active", "name": "API", "endpoint": "https://api.example.com/health",
                "method": "GET", "interval": 30000, "uptime_percentage": 99.5, "avg_response": 120,
                "last_check": null, "failure_count": 0, "success_count": 10
            }],
            "page": 1, "limit": 5, "total": 1, "total_pages": 1
        })),
    );

    let query = ServicesQuery {
        page: Some(1),
        limit: Some(5),
        ..Default::default()
    };
    let list = block_on(client.list_services(&query)).unwrap();

    assert_eq!(list.items[0].status, ServiceStatus::Active);
    assert_eq!(list.items[0].last_check, None);
    assert_eq!(transport.last().url, "http://api.test/api/services?page=1&limit=5");
}

#[test]
fn test_pause_posts_without_body() {
    let (client, transport, _) = client();
    transport.reply(200, ok(json!({"service_id": "s1", "status": "paused", "paused_at": "2024-01-01T00:00:00Z"})));

    let response = block_on(client.pause_service("s1")).unwrap();

    assert_eq!(response.status, "paused");
    let request = transport.last();
    assert_eq!(request.url, "http://api.test/api/services/s1/pause");
    assert_eq!(request.body, None);
}

#[test]
fn test_update_uses_patch() {
    let (client, transport, _) = client();
    transport.reply(200, ok(json!({"service_id": "s1"})));

    let payload = ServicePayload {
        service_name: "API".to_string(),
        endpoint_url: "https://api.example.com".to_string(),
        method: HttpMethod::Get,
        check_interval: 30_000,
        expected_status_codes: vec![200],
        failure_threshold: 3,
        headers: None,
        body: None,
    };
    block_on(client.update_service("s1", &payload)).unwrap();

    let request = transport.last();
    assert_eq!(request.method, RequestMethod::Patch);
    assert_eq!(request.url, "http://api.test/api/services/s1");
}

#[test]
fn test_payload_omits_empty_optionals() {
    let payload = ServicePayload {
        service_name: "API".to_string(),
        endpoint_url: "https://api.example.com".to_string(),
        method: HttpMethod::Post,
        check_interval: 30_000,
        expected_status_codes: vec![200, 201, 204],
        failure_threshold: 3,
        headers: None,
        body: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("headers").is_none());
    assert!(value.get("body").is_none());
    assert_eq!(value["method"], "POST");

    let mut headers = IndexMap::new();
    headers.insert("X-Key".to_string(), "1".to_string());
    let with_headers = ServicePayload {
        headers: Some(headers),
        ..payload
    };
    let value = serde_json::to_value(&with_headers).unwrap();
    assert_eq!(value["headers"]["X-Key"], "1");
}

#[test]
fn test_detail_decodes_with_missing_logs() {
    let raw = ok(json!({
        "service": {
            "id": "s1", "name": "API", "endpoint": "https://api.example.com/v1/health",
            "method": "GET", "status": "paused", "check_interval": 60000, "failure_threshold": 3
        },
        "quick_metrics": {"status": "paused", "uptime_30d": 99.95, "avg_response": 230, "errors_7d": 2}
    }));
    let detail = ApiResponse::<ServiceDetailData>::from_json(&raw.to_string())
        .unwrap()
        .into_result()
        .unwrap();
    assert_eq!(detail.service.status, ServiceStatus::Paused);
    assert!(detail.health_check_log.is_empty());
    assert!(detail.errors.is_empty());
}

#[test]
fn test_http_method_parse() {
    assert_eq!(HttpMethod::parse("post"), Some(HttpMethod::Post));
    assert_eq!(HttpMethod::parse("PATCH"), None);
    assert!(HttpMethod::Put.has_body());
    assert!(!HttpMethod::Delete.has_body());
}
