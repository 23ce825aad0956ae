use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::core::{ApiClient, Transport};
use super::endpoints;
use super::envelope::ApiError;
use crate::services::storage::KeyValueStorage;

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Active,
    Down,
    Warning,
    Paused,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Active => "active",
            ServiceStatus::Down => "down",
            ServiceStatus::Warning => "warning",
            ServiceStatus::Paused => "paused",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.as_str() == value)
    }

    pub fn all() -> Vec<Self> {
        vec![
            ServiceStatus::Active,
            ServiceStatus::Down,
            ServiceStatus::Warning,
            ServiceStatus::Paused,
        ]
    }
}

/// Probe method. Only POST and PUT carry a body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Case-insensitive parse. Unknown methods read as `None`.
    pub fn parse(value: &str) -> Option<Self> {
        Self::all()
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(value.trim()))
    }

    pub fn all() -> Vec<Self> {
        vec![
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ]
    }

    pub fn has_body(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Uptime,
    LastCheck,
    CreatedAt,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Uptime => "uptime",
            SortField::LastCheck => "last_check",
            SortField::CreatedAt => "created_at",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

// ============================================================================
// List
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceItem {
    pub id: String,
    pub status: ServiceStatus,
    pub name: String,
    pub endpoint: String,
    pub method: String,
    /// Check interval in milliseconds.
    pub interval: u64,
    pub uptime_percentage: f64,
    /// Average response in milliseconds; 0 when never checked.
    pub avg_response: f64,
    pub last_check: Option<String>,
    #[serde(default)]
    pub failure_count: u32,
    #[serde(default)]
    pub success_count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServicesOverviewStats {
    pub total_services: u32,
    pub active_count: u32,
    pub down_count: u32,
    pub warning_count: u32,
    pub paused_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicesListData {
    pub overview: ServicesOverviewStats,
    pub items: Vec<ServiceItem>,
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
}

/// Filters for `GET /api/services`. Unset and empty values are left out of the query string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServicesQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: String,
    pub status: Option<ServiceStatus>,
    pub sort_by: Option<SortField>,
    pub sort_order: Option<SortOrder>,
}

impl ServicesQuery {
    /// `?page=2&limit=5...`, or `""` when nothing is set.
    pub fn to_query_string(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        if let Some(page) = self.page.filter(|p| *p > 0) {
            serializer.append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            serializer.append_pair("limit", &limit.to_string());
        }
        if !self.search.is_empty() {
            serializer.append_pair("search", &self.search);
        }
        if let Some(status) = self.status {
            serializer.append_pair("status", status.as_str());
        }
        if let Some(sort_by) = self.sort_by {
            serializer.append_pair("sort_by", sort_by.as_str());
        }
        if let Some(sort_order) = self.sort_order {
            serializer.append_pair("sort_order", sort_order.as_str());
        }

        let qs = serializer.finish();
        if qs.is_empty() {
            qs
        } else {
            format!("?{qs}")
        }
    }

    /// No search text and no status filter.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty() && self.status.is_none()
    }
}

// ============================================================================
// Mutations
// ============================================================================

/// Body of create (`POST`) and update (`PATCH`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePayload {
    pub service_name: String,
    pub endpoint_url: String,
    pub method: HttpMethod,
    pub check_interval: u64,
    pub expected_status_codes: Vec<u16>,
    pub failure_threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateServiceResponse {
    pub service_id: String,
    pub service_name: String,
    pub endpoint_url: String,
    pub method: String,
    pub status: String,
    #[serde(default)]
    pub monitoring_started: bool,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateServiceResponse {
    pub service_id: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteServiceResponse {
    pub service_id: String,
    pub deleted_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PauseResumeResponse {
    pub service_id: String,
    pub status: String,
    #[serde(default)]
    pub paused_at: Option<String>,
    #[serde(default)]
    pub resumed_at: Option<String>,
}

/// Ad-hoc probe of an endpoint that is not saved yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConnectionPayload {
    pub endpoint_url: String,
    pub method: HttpMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<IndexMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestConnectionResponse {
    pub connection_established: bool,
    pub status_code: u16,
    #[serde(default)]
    pub status_text: String,
    pub response_time: f64,
    #[serde(default = "default_time_unit")]
    pub response_time_unit: String,
}

fn default_time_unit() -> String {
    "ms".to_string()
}

// ============================================================================
// Detail
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub endpoint: String,
    pub method: String,
    pub status: ServiceStatus,
    pub check_interval: u64,
    pub failure_threshold: u32,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickMetrics {
    pub status: ServiceStatus,
    pub uptime_30d: f64,
    pub avg_response: f64,
    pub errors_7d: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseTimePoint {
    /// ISO-8601 timestamp.
    pub time: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCheckEntry {
    pub id: String,
    pub status_code: u16,
    #[serde(default)]
    pub status_text: String,
    pub response_time: f64,
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDetailData {
    pub service: ServiceInfo,
    pub quick_metrics: QuickMetrics,
    #[serde(default)]
    pub response_time_history: Vec<ResponseTimePoint>,
    #[serde(default)]
    pub health_check_log: Vec<HealthCheckEntry>,
    #[serde(default)]
    pub errors: Vec<HealthCheckEntry>,
}

// ============================================================================
// Service Commands
// ============================================================================

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub async fn list_services(&self, query: &ServicesQuery) -> Result<ServicesListData, ApiError> {
        let path = format!("{}{}", endpoints::SERVICES, query.to_query_string());
        self.get(&path).await
    }

    pub async fn create_service(
        &self,
        payload: &ServicePayload,
    ) -> Result<CreateServiceResponse, ApiError> {
        self.post(endpoints::SERVICES, payload).await
    }

    pub async fn test_connection(
        &self,
        payload: &TestConnectionPayload,
    ) -> Result<TestConnectionResponse, ApiError> {
        self.post(endpoints::SERVICES_TEST, payload).await
    }

    pub async fn service_detail(&self, id: &str) -> Result<ServiceDetailData, ApiError> {
        self.get(&endpoints::service(id)).await
    }

    pub async fn update_service(
        &self,
        id: &str,
        payload: &ServicePayload,
    ) -> Result<UpdateServiceResponse, ApiError> {
        self.patch(&endpoints::service(id), payload).await
    }

    pub async fn delete_service(&self, id: &str) -> Result<DeleteServiceResponse, ApiError> {
        self.delete(&endpoints::service(id)).await
    }

    pub async fn pause_service(&self, id: &str) -> Result<PauseResumeResponse, ApiError> {
        self.post_empty(&endpoints::service_pause(id)).await
    }

    pub async fn resume_service(&self, id: &str) -> Result<PauseResumeResponse, ApiError> {
        self.post_empty(&endpoints::service_resume(id)).await
    }

    /// Ask the backend to run one check now. The result shape is backend-defined.
    pub async fn run_service_check(&self, id: &str) -> Result<serde_json::Value, ApiError> {
        self.post_empty(&endpoints::service_manual_test(id)).await
    }
}
