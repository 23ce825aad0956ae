//! Shell chrome state: sidebar visibility and the status strip fed by the
//! latest dashboard snapshot.

use leptos::prelude::*;

use super::metrics::{average_latency, average_uptime, ResponseTier};
use crate::bindings::{DashboardData, StatusOverview, SystemStatus};
use crate::utils::formatting::format_metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Ok,
    Warn,
    Error,
    /// No data yet.
    Idle,
}

impl Indicator {
    pub fn dot_class(&self) -> &'static str {
        match self {
            Indicator::Ok => "bg-status-success",
            Indicator::Warn => "bg-status-warning",
            Indicator::Error => "bg-status-error animate-pulse",
            Indicator::Idle => "bg-text-muted",
        }
    }
}

/// What the top bar and footer show between dashboard fetches.
#[derive(Debug, Clone, PartialEq)]
pub struct ShellSnapshot {
    pub overview: StatusOverview,
    pub system_status: SystemStatus,
    pub uptime_avg: f64,
    pub latency_avg: f64,
}

impl ShellSnapshot {
    pub fn from_dashboard(data: &DashboardData) -> Self {
        Self {
            overview: data.status_overview.clone(),
            system_status: data.metadata.system_status,
            uptime_avg: average_uptime(&data.services_overview),
            latency_avg: average_latency(&data.services_overview),
        }
    }

    pub fn system_indicator(&self) -> Indicator {
        match self.system_status {
            SystemStatus::Operational => Indicator::Ok,
            SystemStatus::Degraded => Indicator::Error,
        }
    }

    pub fn services_indicator(&self) -> Indicator {
        if self.overview.down > 0 {
            Indicator::Error
        } else if self.overview.warning > 0 {
            Indicator::Warn
        } else {
            Indicator::Ok
        }
    }

    pub fn alerts_indicator(&self) -> Indicator {
        if self.alert_count() > 0 {
            Indicator::Warn
        } else {
            Indicator::Ok
        }
    }

    pub fn latency_indicator(&self) -> Indicator {
        match ResponseTier::from_ms(self.latency_avg) {
            ResponseTier::Unknown => Indicator::Idle,
            ResponseTier::Fast => Indicator::Ok,
            ResponseTier::Slow => Indicator::Warn,
            ResponseTier::Critical => Indicator::Error,
        }
    }

    /// Services that are down or degraded.
    pub fn alert_count(&self) -> u32 {
        self.overview.down + self.overview.warning
    }

    pub fn uptime_label(&self) -> String {
        if self.overview.total_services == 0 {
            "--".to_string()
        } else {
            format!("{}%", format_metric(self.uptime_avg))
        }
    }

    pub fn instances_label(&self) -> String {
        format!(
            "{} Online / {} Offline",
            self.overview.active, self.overview.down
        )
    }
}

/// Engine state from a `/api/system/status` body, read from `status` or `data.status`.
pub fn engine_status_label(body: &serde_json::Value) -> Option<String> {
    body.get("status")
        .or_else(|| body.get("data").and_then(|d| d.get("status")))
        .and_then(|s| s.as_str())
        .map(str::to_uppercase)
}

#[derive(Clone, Copy)]
pub struct LayoutState {
    pub sidebar_open: RwSignal<bool>,
    pub snapshot: RwSignal<Option<ShellSnapshot>>,
    /// Set when the last dashboard refetch failed.
    pub sync_failed: RwSignal<bool>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self {
            sidebar_open: RwSignal::new(true),
            snapshot: RwSignal::new(None),
            sync_failed: RwSignal::new(false),
        }
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_open.update(|open| *open = !*open);
    }

    pub fn record(&self, data: &DashboardData) {
        self.snapshot.set(Some(ShellSnapshot::from_dashboard(data)));
        self.sync_failed.set(false);
    }

    pub fn record_failure(&self) {
        self.sync_failed.set(true);
    }
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_layout_state() {
    provide_context(LayoutState::new());
}

pub fn use_layout_state() -> LayoutState {
    expect_context::<LayoutState>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(active: u32, down: u32, warning: u32, latency: f64) -> ShellSnapshot {
        ShellSnapshot {
            overview: StatusOverview {
                total_services: active + down + warning,
                active,
                down,
                warning,
                paused: 0,
                monitoring_active: true,
            },
            system_status: SystemStatus::Operational,
            uptime_avg: 99.5,
            latency_avg: latency,
        }
    }

    #[test]
    fn test_services_indicator_prefers_down() {
        assert_eq!(snapshot(3, 1, 1, 100.0).services_indicator(), Indicator::Error);
        assert_eq!(snapshot(3, 0, 1, 100.0).services_indicator(), Indicator::Warn);
        assert_eq!(snapshot(3, 0, 0, 100.0).services_indicator(), Indicator::Ok);
    }

    #[test]
    fn test_alert_count_sums_down_and_warning() {
        let s = snapshot(2, 2, 1, 100.0);
        assert_eq!(s.alert_count(), 3);
        assert_eq!(s.alerts_indicator(), Indicator::Warn);
        assert_eq!(s.instances_label(), "2 Online / 2 Offline");
    }

    #[test]
    fn test_latency_indicator_follows_response_tiers() {
        assert_eq!(snapshot(1, 0, 0, 0.0).latency_indicator(), Indicator::Idle);
        assert_eq!(snapshot(1, 0, 0, 120.0).latency_indicator(), Indicator::Ok);
        assert_eq!(snapshot(1, 0, 0, 700.0).latency_indicator(), Indicator::Warn);
        assert_eq!(snapshot(1, 0, 0, 1500.0).latency_indicator(), Indicator::Error);
    }

    #[test]
    fn test_uptime_label() {
        assert_eq!(snapshot(1, 0, 0, 1.0).uptime_label(), "99.5%");
        assert_eq!(snapshot(0, 0, 0, 1.0).uptime_label(), "--");
    }

    #[test]
    fn test_engine_status_label() {
        let flat = serde_json::json!({"status": "running"});
        assert_eq!(engine_status_label(&flat).as_deref(), Some("RUNNING"));
        let nested = serde_json::json!({"data": {"status": "idle"}});
        assert_eq!(engine_status_label(&nested).as_deref(), Some("IDLE"));
        assert_eq!(engine_status_label(&serde_json::json!({"uptime": 5})), None);
    }

    #[test]
    fn test_degraded_system() {
        let mut s = snapshot(1, 0, 0, 1.0);
        s.system_status = SystemStatus::Degraded;
        assert_eq!(s.system_indicator(), Indicator::Error);
    }
}
