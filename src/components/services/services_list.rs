use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::pagination::Pagination;
use super::services_table::ServicesTable;
use crate::bindings::{ServiceItem, ServiceStatus, ServicesListData, ServicesOverviewStats, ServicesQuery};
use crate::components::design_system::{ConfirmDialog, EmptyState, ErrorPanel, Input, LoadingPanel, Select};
use crate::config::use_app_config;
use crate::services::metrics::{average_latency, average_uptime};
use crate::services::notification_service::use_notification_state;
use crate::services::query_cache::{use_query_invalidation, QueryKey};
use crate::services::service_actions::{
    delete_confirmation_message, delete_service_action, toggle_pause_action, PendingActions,
    ServiceActionDeps,
};
use crate::services::session::use_session;
use crate::services::timers::use_debounced;
use crate::utils::formatting::format_metric;

pub const CREATE_PATH: &str = "/services/create";
const LOAD_FAILED_MESSAGE: &str = "Failed to load services";

const STATUS_OPTIONS: [(&str, &str); 5] = [
    ("", "All Status"),
    ("active", "Active"),
    ("down", "Down"),
    ("warning", "Warning"),
    ("paused", "Paused"),
];

#[component]
pub fn ServicesList() -> impl IntoView {
    let session = use_session();
    let cache = use_query_invalidation();
    let notifications = use_notification_state();
    let config = use_app_config();
    let navigate = use_navigate();
    let limit = config.services.page_limit;

    let search_input = RwSignal::new(String::new());
    let search = use_debounced(search_input, config.services.search_debounce_ms);
    let status_filter = RwSignal::new(Option::<ServiceStatus>::None);
    let page = RwSignal::new(1_u32);

    // The query travels with its result so empty states judge the filters that produced it
    let result = RwSignal::new(Option::<(ServicesQuery, ServicesListData)>::None);
    let failed = RwSignal::new(false);

    Effect::new(move |_| {
        cache.track(QueryKey::ServicesList);
        let query = ServicesQuery {
            page: Some(page.get()),
            limit: Some(limit),
            search: search.get(),
            status: status_filter.get(),
            ..Default::default()
        };

        let api = session.api();
        spawn_local(async move {
            match api.list_services(&query).await {
                Ok(list) => {
                    result.set(Some((query, list)));
                    failed.set(false);
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    log::warn!("Services list failed: {e}");
                    failed.set(true);
                }
            }
        });
    });

    let deps = ServiceActionDeps {
        session,
        cache,
        notifications,
        pending: RwSignal::new(PendingActions::default()),
    };
    let toggle = toggle_pause_action(deps);
    let delete = delete_service_action(deps, |_| {});

    let delete_target = RwSignal::new(Option::<(String, String)>::None);
    let on_toggle = Callback::new(move |(id, status): (String, ServiceStatus)| toggle(id, status));
    let on_delete_request = Callback::new(move |target: (String, String)| delete_target.set(Some(target)));
    let confirm_delete = Callback::new(move |_: ()| {
        if let Some((id, name)) = delete_target.get_untracked() {
            delete_target.set(None);
            delete(id, name);
        }
    });

    let on_search = Callback::new(move |_: String| page.set(1));
    let on_filter = Callback::new(move |value: String| {
        status_filter.set(ServiceStatus::from_str_opt(&value));
        page.set(1);
    });
    let on_page_change = Callback::new(move |p: u32| page.set(p));

    let add_service = move |_: ev::MouseEvent| navigate(CREATE_PATH, Default::default());

    view! {
        <div class="flex flex-col gap-6">
            <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
                <div>
                    <h1 class="text-2xl font-bold uppercase tracking-wider">"Services Overview"</h1>
                    <p class="text-[11px] uppercase tracking-wider text-text-secondary">"Real-time Backend Control Panel"</p>
                </div>
                <div class="flex items-center gap-3">
                    <Input
                        value=search_input
                        placeholder="Search services"
                        on_input=on_search
                        class="w-48 lg:w-64"
                    />
                    <Select
                        value=Signal::derive(move || {
                            status_filter.get().map(|s| s.as_str().to_string()).unwrap_or_default()
                        })
                        options=&STATUS_OPTIONS
                        on_change=on_filter
                    />
                    <button
                        type="button"
                        class="h-9 px-4 rounded bg-primary text-background text-[10px] font-bold uppercase tracking-wider hover:bg-primary-hover"
                        on:click=add_service
                    >
                        "+ Add Service"
                    </button>
                </div>
            </div>

            {move || match result.get() {
                None if failed.get() => view! { <ErrorPanel message=LOAD_FAILED_MESSAGE /> }.into_any(),
                None => view! { <LoadingPanel message="Loading services..." /> }.into_any(),
                Some((query, list)) if list.total == 0 && query.is_unfiltered() => view! {
                    <EmptyState
                        title="No services configured"
                        hint="Add your first service to start monitoring endpoints, APIs, and infrastructure"
                    >
                        <A
                            href=CREATE_PATH
                            attr:class="mt-2 px-4 py-2 rounded bg-primary text-background text-[10px] font-bold uppercase tracking-wider hover:bg-primary-hover"
                        >
                            "Add Your First Service"
                        </A>
                    </EmptyState>
                }.into_any(),
                Some((_, list)) if list.items.is_empty() => view! {
                    <ServicesStats overview=list.overview items=Vec::new() />
                    <div class="rounded-lg border border-border-light bg-surface">
                        <EmptyState title="No services match your filters" />
                    </div>
                }.into_any(),
                Some((_, list)) => {
                    let show_pages = list.total_pages > 1;
                    view! {
                        <ServicesStats overview=list.overview items=list.items.clone() />
                        <ServicesTable
                            items=list.items
                            pending=deps.pending
                            on_toggle=on_toggle
                            on_delete=on_delete_request
                        />
                        {show_pages.then(|| view! {
                            <Pagination
                                page=list.page
                                total_pages=list.total_pages
                                total=list.total
                                limit=list.limit
                                on_page_change=on_page_change
                            />
                        })}
                    }.into_any()
                }
            }}

            <ConfirmDialog
                open=Signal::derive(move || delete_target.with(|t| t.is_some()))
                title="Delete Service"
                message=Signal::derive(move || {
                    delete_target.with(|t| t.as_ref().map(|(_, name)| delete_confirmation_message(name)).unwrap_or_default())
                })
                confirm_label="Delete"
                on_confirm=confirm_delete
                on_cancel=Callback::new(move |_| delete_target.set(None))
            />
        </div>
    }
}

#[component]
fn StatTile(
    label: &'static str,
    #[prop(into)] value: String,
    #[prop(into)] suffix: String,
    #[prop(default = "text-text-primary")] value_class: &'static str,
    #[prop(default = "text-text-muted")] suffix_class: &'static str,
    #[prop(default = "border-border-light bg-surface")] frame_class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("flex flex-col gap-1 rounded-lg border p-4 {frame_class}")>
            <span class="text-[9px] font-bold uppercase tracking-wider text-text-muted">{label}</span>
            <div class="flex items-baseline gap-1.5">
                <span class=format!("font-mono text-3xl font-bold {value_class}")>{value}</span>
                <span class=format!("text-[10px] uppercase tracking-wider {suffix_class}")>{suffix}</span>
            </div>
        </div>
    }
}

/// Header tiles. Averages cover the current page only.
#[component]
pub fn ServicesStats(overview: ServicesOverviewStats, items: Vec<ServiceItem>) -> impl IntoView {
    let critical = overview.down_count;
    let alerts = overview.down_count + overview.warning_count;

    let (critical_label, critical_value, critical_suffix, critical_frame) = if critical > 0 {
        ("pulsing", "text-status-error", "text-status-error", "border-status-error/40 bg-status-error/5")
    } else {
        ("clear", "text-text-primary", "text-text-muted", "border-border-light bg-surface")
    };
    let (alerts_label, alerts_value) = if alerts > 0 {
        ("Normal range", "text-status-warning")
    } else {
        ("clear", "text-text-primary")
    };

    view! {
        <div class="grid grid-cols-2 gap-3 sm:grid-cols-3 lg:grid-cols-5">
            <StatTile
                label="Uptime Avg"
                value=format_metric(average_uptime(&items))
                suffix="%"
                value_class="text-status-success"
                suffix_class="text-status-success"
            />
            <StatTile label="Total Services" value=overview.total_services.to_string() suffix="stable" />
            <StatTile
                label="Critical"
                value=critical.to_string()
                suffix=critical_label
                value_class=critical_value
                suffix_class=critical_suffix
                frame_class=critical_frame
            />
            <StatTile label="Latency" value=format!("{:.0}", average_latency(&items)) suffix="ms" />
            <StatTile
                label="Active Alerts"
                value=alerts.to_string()
                suffix=alerts_label
                value_class=alerts_value
            />
        </div>
    }
}
