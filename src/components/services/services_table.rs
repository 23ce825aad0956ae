use chrono::Utc;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::bindings::{ServiceItem, ServiceStatus};
use crate::services::metrics::{
    reported_method_badge_class, status_dot_class, status_table_label, ResponseTier, UptimeTier,
};
use crate::services::service_actions::{ActionKind, PendingActions};
use crate::utils::formatting::{format_interval_compact, format_last_check, format_metric, format_response_ms};

const COLUMNS: [&str; 9] = [
    "Status",
    "Service Name",
    "Endpoint",
    "Method",
    "Interval",
    "Uptime",
    "Avg Resp",
    "Last Check",
    "Actions",
];

#[component]
pub fn ServicesTable(
    items: Vec<ServiceItem>,
    pending: RwSignal<PendingActions>,
    on_toggle: Callback<(String, ServiceStatus)>,
    /// Asks for confirmation of `(id, name)`
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto rounded-lg border border-border-light bg-surface">
            <table class="w-full text-left text-xs">
                <thead class="border-b border-border-light bg-surface-raised">
                    <tr>
                        {COLUMNS.iter().map(|c| view! {
                            <th class="px-4 py-3 text-[9px] font-bold uppercase tracking-wider text-text-muted">{*c}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {items.into_iter().map(|service| view! {
                        <ServiceRow service=service pending=pending on_toggle=on_toggle on_delete=on_delete />
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn ServiceRow(
    service: ServiceItem,
    pending: RwSignal<PendingActions>,
    on_toggle: Callback<(String, ServiceStatus)>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let detail_href = format!("/services/{}", service.id);
    let edit_href = format!("{detail_href}/edit");
    let uptime_tier = UptimeTier::from_percentage(service.uptime_percentage);
    let uptime_width = format!("width: {}%", service.uptime_percentage.clamp(0.0, 100.0));
    let response_class = ResponseTier::from_ms(service.avg_response).text_class();
    let toggle_label = if service.status == ServiceStatus::Paused { "Resume" } else { "Pause" };

    let busy = |kind: ActionKind| {
        let id = service.id.clone();
        Signal::derive(move || pending.with(|p| p.is_pending(kind, &id)))
    };
    let toggle_busy = busy(ActionKind::Toggle);
    let delete_busy = busy(ActionKind::Delete);

    let open_detail = {
        let navigate = navigate.clone();
        let href = detail_href.clone();
        move |_: ev::MouseEvent| navigate(&href, Default::default())
    };
    let view_detail = {
        let navigate = navigate.clone();
        let href = detail_href;
        move |evt: ev::MouseEvent| {
            evt.stop_propagation();
            navigate(&href, Default::default());
        }
    };
    let edit = move |evt: ev::MouseEvent| {
        evt.stop_propagation();
        navigate(&edit_href, Default::default());
    };
    let toggle = {
        let id = service.id.clone();
        let status = service.status;
        move |evt: ev::MouseEvent| {
            evt.stop_propagation();
            menu_open.set(false);
            on_toggle.run((id.clone(), status));
        }
    };
    let delete = {
        let id = service.id.clone();
        let name = service.name.clone();
        move |evt: ev::MouseEvent| {
            evt.stop_propagation();
            menu_open.set(false);
            on_delete.run((id.clone(), name.clone()));
        }
    };

    view! {
        <tr
            class="cursor-pointer border-b border-border-light last:border-b-0 hover:bg-surface-hover transition-colors"
            on:click=open_detail
        >
            <td class="px-4 py-3">
                <div class="flex items-center gap-2">
                    <span class=format!("h-2 w-2 rounded-full {}", status_dot_class(service.status))></span>
                    <span class="text-[10px] font-bold uppercase tracking-wider text-text-secondary">
                        {status_table_label(service.status)}
                    </span>
                </div>
            </td>
            <td class="px-4 py-3 font-semibold text-text-primary">{service.name.clone()}</td>
            <td class="px-4 py-3 max-w-xs truncate font-mono text-text-secondary" title=service.endpoint.clone()>
                {service.endpoint.clone()}
            </td>
            <td class="px-4 py-3">
                <span class=format!(
                    "rounded border px-1.5 py-0.5 font-mono text-[9px] font-bold {}",
                    reported_method_badge_class(&service.method),
                )>
                    {service.method.to_uppercase()}
                </span>
            </td>
            <td class="px-4 py-3 font-mono text-text-secondary">{format_interval_compact(service.interval)}</td>
            <td class="px-4 py-3">
                <div class="flex items-center gap-2">
                    <div class="h-1.5 w-16 overflow-hidden rounded-full bg-surface-raised">
                        <div class=format!("h-full {}", uptime_tier.bar_class()) style=uptime_width></div>
                    </div>
                    <span class=format!("font-mono {}", uptime_tier.text_class())>
                        {format!("{}%", format_metric(service.uptime_percentage))}
                    </span>
                </div>
            </td>
            <td class=format!("px-4 py-3 font-mono {response_class}")>{format_response_ms(service.avg_response)}</td>
            <td class="px-4 py-3 font-mono text-text-muted">
                {format_last_check(service.last_check.as_deref(), Utc::now())}
            </td>
            <td class="relative px-4 py-3" on:click=|evt: ev::MouseEvent| evt.stop_propagation()>
                <div class="flex items-center gap-1">
                    <button
                        type="button"
                        class="rounded px-2 py-1 text-text-muted hover:bg-surface-raised hover:text-primary"
                        title="View details"
                        on:click=view_detail
                    >
                        "◉"
                    </button>
                    <button
                        type="button"
                        class="rounded px-2 py-1 text-text-muted hover:bg-surface-raised hover:text-primary"
                        title="Edit service"
                        on:click=edit
                    >
                        "✎"
                    </button>
                    <button
                        type="button"
                        class="rounded px-2 py-1 text-text-muted hover:bg-surface-raised hover:text-text-primary"
                        title="More actions"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "⋮"
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="absolute right-4 top-full z-20 mt-1 w-32 overflow-hidden rounded border border-border bg-surface-raised shadow-lg">
                        <button
                            type="button"
                            class="block w-full px-3 py-2 text-left text-[11px] text-text-secondary hover:bg-surface-hover disabled:opacity-50"
                            disabled=move || toggle_busy.get()
                            on:click=toggle.clone()
                        >
                            {toggle_label}
                        </button>
                        <button
                            type="button"
                            class="block w-full px-3 py-2 text-left text-[11px] text-status-error hover:bg-status-error/10 disabled:opacity-50"
                            disabled=move || delete_busy.get()
                            on:click=delete.clone()
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </td>
        </tr>
    }
}
