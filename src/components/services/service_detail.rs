use std::time::Duration;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use super::detail_panels::{HealthCheckLog, IncidentHistory, ResponseTimeChart};
use crate::bindings::{QuickMetrics, ServiceDetailData, ServiceInfo, ServiceStatus};
use crate::components::design_system::{ConfirmDialog, ErrorPanel, LoadingPanel};
use crate::config::use_app_config;
use crate::services::metrics::{reliability_label, status_label, status_text_class, TimeRange};
use crate::services::notification_service::use_notification_state;
use crate::services::query_cache::{use_query_invalidation, QueryKey};
use crate::services::service_actions::{
    delete_confirmation_message, delete_service_action, run_check_action, toggle_pause_action,
    ActionKind, PendingActions, ServiceActionDeps,
};
use crate::services::session::use_session;
use crate::services::timers::use_poll_trigger;
use crate::utils::formatting::{format_date, format_metric};

pub const SERVICES_PATH: &str = "/services";
const LOAD_FAILED_MESSAGE: &str = "Service not found or failed to load";

#[component]
pub fn ServiceDetail() -> impl IntoView {
    let session = use_session();
    let cache = use_query_invalidation();
    let notifications = use_notification_state();
    let config = use_app_config();
    let navigate = use_navigate();
    let params = use_params_map();
    let service_id = Memo::new(move |_| params.with(|p| p.get("service_id").unwrap_or_default()));

    let poll = use_poll_trigger(Duration::from_millis(config.polling.refetch_interval_ms));
    let data = RwSignal::new(Option::<ServiceDetailData>::None);
    let failed = RwSignal::new(false);
    let range = RwSignal::new(TimeRange::default());

    Effect::new(move |previous: Option<String>| {
        cache.track(QueryKey::ServiceDetail);
        poll.track();
        let id = service_id.get();
        if previous.as_deref() != Some(id.as_str()) {
            data.set(None);
            failed.set(false);
        }

        let api = session.api();
        let requested = id.clone();
        spawn_local(async move {
            match api.service_detail(&requested).await {
                Ok(detail) => {
                    data.set(Some(detail));
                    failed.set(false);
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    log::warn!("Service detail {requested} failed: {e}");
                    failed.set(true);
                }
            }
        });
        id
    });

    let deps = ServiceActionDeps {
        session,
        cache,
        notifications,
        pending: RwSignal::new(PendingActions::default()),
    };
    let toggle = toggle_pause_action(deps);
    let run_check = run_check_action(deps);
    let deleted = RwSignal::new(false);
    let delete = delete_service_action(deps, move |_| deleted.set(true));

    Effect::new(move |_| {
        if deleted.get() {
            navigate(SERVICES_PATH, NavigateOptions::default());
        }
    });

    let confirm_open = RwSignal::new(false);
    let service_name = move || data.with(|d| d.as_ref().map(|d| d.service.name.clone()).unwrap_or_default());
    let busy = move |kind: ActionKind| Signal::derive(move || deps.is_pending(kind, &service_id.get()));
    let toggle_busy = busy(ActionKind::Toggle);
    let check_busy = busy(ActionKind::Check);
    let delete_busy = busy(ActionKind::Delete);

    let on_toggle = Callback::new(move |_: ()| {
        if let Some(status) = data.with_untracked(|d| d.as_ref().map(|d| d.service.status)) {
            toggle(service_id.get_untracked(), status);
        }
    });
    let on_run_check = Callback::new(move |_: ()| run_check(service_id.get_untracked()));
    let on_delete_request = Callback::new(move |_: ()| confirm_open.set(true));
    let confirm_delete = Callback::new(move |_: ()| {
        confirm_open.set(false);
        delete(service_id.get_untracked(), service_name());
    });

    view! {
        <div class="flex flex-col gap-6">
            {move || match data.get() {
                None if failed.get() => view! { <ErrorPanel message=LOAD_FAILED_MESSAGE /> }.into_any(),
                None => view! { <LoadingPanel message="Loading service..." /> }.into_any(),
                Some(detail) => view! {
                    <DetailHeader
                        service=detail.service.clone()
                        toggle_busy=toggle_busy
                        check_busy=check_busy
                        delete_busy=delete_busy
                        on_toggle=on_toggle
                        on_run_check=on_run_check
                        on_delete=on_delete_request
                    />
                    <DetailMetrics metrics=detail.quick_metrics />
                    <ResponseTimeChart points=detail.response_time_history range=range />
                    <div class="grid grid-cols-1 gap-4 lg:grid-cols-2">
                        <HealthCheckLog logs=detail.health_check_log endpoint=detail.service.endpoint />
                        <IncidentHistory errors=detail.errors />
                    </div>
                }.into_any(),
            }}

            <ConfirmDialog
                open=confirm_open
                title="Delete Service"
                message=Signal::derive(move || delete_confirmation_message(&service_name()))
                confirm_label="Delete"
                busy=delete_busy
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| confirm_open.set(false))
            />
        </div>
    }
}

const ACTION_CLASS: &str = "flex items-center gap-1.5 rounded-md border px-4 py-2 text-[10px] font-bold uppercase tracking-wider transition-colors disabled:opacity-40";

#[component]
fn DetailHeader(
    service: ServiceInfo,
    toggle_busy: Signal<bool>,
    check_busy: Signal<bool>,
    delete_busy: Signal<bool>,
    on_toggle: Callback<()>,
    on_run_check: Callback<()>,
    on_delete: Callback<()>,
) -> impl IntoView {
    let paused = service.status == ServiceStatus::Paused;
    let (toggle_label, toggle_tone) = if paused {
        ("▶ Resume", "border-status-success/40 text-status-success hover:bg-status-success/10")
    } else {
        ("❚❚ Pause", "border-border-light text-text-secondary hover:border-border hover:text-text-primary")
    };
    let edit_href = format!("{SERVICES_PATH}/{}/edit", service.id);

    view! {
        <div class="flex flex-col gap-4">
            <nav class="flex items-center gap-1.5 text-[10px] uppercase tracking-wider">
                <A href=SERVICES_PATH attr:class="text-primary hover:text-primary-hover">"Services"</A>
                <span class="text-text-muted">"›"</span>
                <span class="text-text-primary">{service.name.clone()}</span>
            </nav>

            <div class="flex flex-col gap-4 rounded-lg border border-border-light bg-surface p-5 sm:flex-row sm:items-center sm:justify-between">
                <div class="flex flex-col gap-1.5">
                    <h1 class="text-xl font-bold uppercase tracking-wider text-text-primary">{service.name}</h1>
                    <div class="flex flex-wrap items-center gap-3 text-[11px] tracking-wider text-text-secondary">
                        <span>"Endpoint: "<span class="font-mono text-primary">{service.endpoint}</span></span>
                        <span>"|"</span>
                        <span>
                            "Status: "
                            <span class=format!("font-bold {}", status_text_class(service.status))>
                                {status_label(service.status)}
                            </span>
                        </span>
                        <span>"|"</span>
                        <span>"Added: " {format_date(&service.created_at)}</span>
                    </div>
                </div>
                <div class="flex flex-wrap items-center gap-2">
                    <button
                        type="button"
                        class=format!("{ACTION_CLASS} border-border-light text-text-secondary hover:text-text-primary")
                        disabled=move || check_busy.get()
                        on:click=move |_| on_run_check.run(())
                    >
                        "↻ Run Check"
                    </button>
                    <button
                        type="button"
                        class=format!("{ACTION_CLASS} {toggle_tone}")
                        disabled=move || toggle_busy.get()
                        on:click=move |_| on_toggle.run(())
                    >
                        {toggle_label}
                    </button>
                    <A
                        href=edit_href
                        attr:class=format!("{ACTION_CLASS} border-primary/40 bg-primary/10 text-primary hover:bg-primary/20")
                    >
                        "✎ Edit"
                    </A>
                    <button
                        type="button"
                        class=format!("{ACTION_CLASS} border-status-error/40 text-status-error hover:bg-status-error/10")
                        disabled=move || delete_busy.get()
                        on:click=move |_| on_delete.run(())
                    >
                        "✕ Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

const TILE_CLASS: &str = "flex flex-col gap-2 rounded-lg border border-border-light bg-surface p-4";
const TILE_LABEL_CLASS: &str = "text-[9px] font-bold uppercase tracking-wider text-text-secondary";

#[component]
fn DetailMetrics(metrics: QuickMetrics) -> impl IntoView {
    let response_class = if metrics.avg_response > 500.0 {
        "text-status-warning"
    } else {
        "text-primary"
    };
    let (errors_class, errors_caption) = if metrics.errors_7d > 0 {
        ("text-status-error", format!("{} errors (7d)", metrics.errors_7d))
    } else {
        ("text-text-primary", "System clear".to_string())
    };

    view! {
        <div class="grid grid-cols-1 gap-3 sm:grid-cols-2 lg:grid-cols-4">
            <div class=TILE_CLASS>
                <span class=TILE_LABEL_CLASS>"Current Status"</span>
                <span class=format!("text-lg font-bold uppercase tracking-wider {}", status_text_class(metrics.status))>
                    {status_label(metrics.status)}
                </span>
            </div>
            <div class=TILE_CLASS>
                <span class=TILE_LABEL_CLASS>"Uptime (30D)"</span>
                <span class="font-mono text-2xl font-bold text-status-success">
                    {format!("{}%", format_metric(metrics.uptime_30d))}
                </span>
                <span class="text-[10px] tracking-wider text-text-secondary">
                    {format!("Reliability: {}", reliability_label(metrics.uptime_30d))}
                </span>
            </div>
            <div class=TILE_CLASS>
                <span class=TILE_LABEL_CLASS>"Avg Response"</span>
                <span class=format!("font-mono text-2xl font-bold {response_class}")>
                    {format!("{}ms", metrics.avg_response.round())}
                </span>
            </div>
            <div class=TILE_CLASS>
                <span class=TILE_LABEL_CLASS>"Active Incidents"</span>
                <span class=format!("font-mono text-2xl font-bold {errors_class}")>{metrics.errors_7d.to_string()}</span>
                <span class="text-[10px] uppercase tracking-wider text-text-secondary">{errors_caption}</span>
            </div>
        </div>
    }
}
