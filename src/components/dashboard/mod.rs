//! Dashboard overview: health matrix, telemetry, diagnostics and alerts.
//!
//! The overview is fetched on mount, on every poll tick and whenever a
//! mutation invalidates `QueryKey::DashboardOverview`. Each successful fetch
//! also refreshes the shell's status strip.

mod alert_console;
mod diagnostics;
mod health_matrix;
mod telemetry_panel;

use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;

pub use alert_console::AlertConsole;
pub use diagnostics::DiagnosticsTable;
pub use health_matrix::HealthMatrix;
pub use telemetry_panel::{TelemetryGrid, TelemetryPanel};

use crate::bindings::{DashboardData, SystemStatus};
use crate::components::design_system::{ErrorPanel, LoadingPanel};
use crate::config::use_app_config;
use crate::services::layout_state::use_layout_state;
use crate::services::query_cache::{use_query_invalidation, QueryKey};
use crate::services::session::use_session;
use crate::services::timers::use_poll_trigger;
use crate::utils::formatting::format_clock_millis;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard data";

#[component]
pub fn Dashboard() -> impl IntoView {
    let session = use_session();
    let cache = use_query_invalidation();
    let layout = use_layout_state();
    let config = use_app_config();

    let data = RwSignal::new(Option::<DashboardData>::None);
    let failed = RwSignal::new(false);
    let poll = use_poll_trigger(Duration::from_millis(config.polling.refetch_interval_ms));

    Effect::new(move |_| {
        cache.track(QueryKey::DashboardOverview);
        poll.track();

        let api = session.api();
        spawn_local(async move {
            match api.dashboard_overview().await {
                Ok(overview) => {
                    layout.record(&overview);
                    data.set(Some(overview));
                    failed.set(false);
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    log::warn!("Dashboard refresh failed: {e}");
                    layout.record_failure();
                    failed.set(true);
                }
            }
        });
    });

    view! {
        {move || {
            // Stale data stays on screen when a refetch fails
            match data.get() {
                Some(overview) => view! { <DashboardContent data=overview /> }.into_any(),
                None if failed.get() => view! { <ErrorPanel message=LOAD_FAILED_MESSAGE /> }.into_any(),
                None => view! { <LoadingPanel message="Loading dashboard..." /> }.into_any(),
            }
        }}
    }
}

#[component]
fn DashboardContent(data: DashboardData) -> impl IntoView {
    let status_class = match data.metadata.system_status {
        SystemStatus::Operational => "text-status-success border-status-success/40",
        SystemStatus::Degraded => "text-status-error border-status-error/40",
    };
    let updated = format_clock_millis(&data.metadata.timestamp);
    let services = data.services_overview.clone();

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-xl font-bold uppercase tracking-widest">"Dashboard"</h1>
                    <p class="text-xs font-mono text-text-muted">"Last update: " {updated}</p>
                </div>
                <span class=format!("px-3 py-1 border rounded font-mono text-xs {status_class}")>
                    {data.metadata.system_status.label()}
                </span>
            </div>

            <HealthMatrix services=data.services_overview />
            <TelemetryGrid telemetry=data.real_time_telemetry />

            <div class="grid grid-cols-1 xl:grid-cols-3 gap-6">
                <div class="xl:col-span-2">
                    <DiagnosticsTable
                        logs=data.service_diagnostics.check_logs
                        services=services.clone()
                    />
                </div>
                <AlertConsole logs=data.error_logs services=services />
            </div>
        </div>
    }
}
