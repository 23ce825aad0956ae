use serde::{Deserialize, Serialize};

use super::core::{ApiClient, Transport};
use super::endpoints;
use super::envelope::ApiError;
use super::services::ServiceItem;
use crate::services::storage::KeyValueStorage;

// ============================================================================
// Dashboard Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub timestamp: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TelemetryMetric {
    pub current: f64,
    pub unit: String,
    /// 0 means no threshold line.
    #[serde(default)]
    pub threshold: f64,
    #[serde(default)]
    pub chart_data: Vec<ChartDataPoint>,
}

impl TelemetryMetric {
    pub fn values(&self) -> Vec<f64> {
        self.chart_data.iter().map(|p| p.value).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RealTimeTelemetry {
    pub response_time: TelemetryMetric,
    pub request_rate: TelemetryMetric,
    pub error_rate: TelemetryMetric,
    pub latency_p99: TelemetryMetric,
}

/// One probe result, as shown in the diagnostics and alert consoles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckLog {
    pub id: String,
    #[serde(default)]
    pub node_id: String,
    pub status_code: u16,
    #[serde(default)]
    pub status_text: String,
    pub response_time: f64,
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ServiceDiagnostics {
    #[serde(default)]
    pub check_logs: Vec<CheckLog>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusOverview {
    pub total_services: u32,
    pub active: u32,
    pub down: u32,
    pub warning: u32,
    pub paused: u32,
    #[serde(default)]
    pub monitoring_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    #[default]
    Operational,
    Degraded,
}

impl SystemStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Operational => "ALL SYSTEMS OPERATIONAL",
            SystemStatus::Degraded => "SYSTEM DEGRADED",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardMetadata {
    pub timestamp: String,
    pub system_status: SystemStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub services_overview: Vec<ServiceItem>,
    pub real_time_telemetry: RealTimeTelemetry,
    #[serde(default)]
    pub service_diagnostics: ServiceDiagnostics,
    #[serde(default)]
    pub error_logs: Vec<CheckLog>,
    pub status_overview: StatusOverview,
    pub metadata: DashboardMetadata,
}

// ============================================================================
// Dashboard Commands
// ============================================================================

impl<T: Transport, S: KeyValueStorage> ApiClient<T, S> {
    pub async fn dashboard_overview(&self) -> Result<DashboardData, ApiError> {
        self.get(endpoints::DASHBOARD_OVERVIEW).await
    }

    /// Backend status report; shape is backend-defined.
    pub async fn system_status(&self) -> Result<serde_json::Value, ApiError> {
        self.get(endpoints::SYSTEM_STATUS).await
    }

    pub async fn system_health(&self) -> Result<serde_json::Value, ApiError> {
        self.get(endpoints::SYSTEM_HEALTH).await
    }
}
