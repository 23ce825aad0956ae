use leptos::prelude::*;

use crate::bindings::{CheckLog, ServiceItem};
use crate::components::design_system::{Card, CardBody, CardHeader, CardTitle};
use crate::utils::formatting::{format_clock, short_id};

#[component]
pub fn AlertConsole(logs: Vec<CheckLog>, services: Vec<ServiceItem>) -> impl IntoView {
    let count = logs.len();
    let count_class = if count > 0 {
        "text-xs font-mono text-status-error"
    } else {
        "text-xs font-mono text-text-muted"
    };
    let lines = logs
        .into_iter()
        .map(|log| {
            let source = services
                .iter()
                .find(|s| s.id == log.node_id)
                .map_or_else(|| short_id(&log.node_id), |s| s.name.clone());
            let message = log
                .error_message
                .clone()
                .unwrap_or_else(|| format!("HTTP {} {}", log.status_code, log.status_text));

            view! {
                <li class="flex gap-2">
                    <span class="text-text-muted">{format!("[{}]", format_clock(&log.created_at))}</span>
                    <span class="text-status-error">{source}</span>
                    <span class="text-text-secondary break-all">{message}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Card class="h-full">
            <CardHeader>
                <CardTitle>"Alert Console"</CardTitle>
                <span class=count_class>
                    {format!("{count} events")}
                </span>
            </CardHeader>
            <CardBody class="max-h-80 overflow-y-auto">
                {if lines.is_empty() {
                    view! { <p class="text-xs font-mono text-text-muted">"> No active alerts"</p> }.into_any()
                } else {
                    view! { <ul class="flex flex-col gap-1 text-xs font-mono">{lines}</ul> }.into_any()
                }}
            </CardBody>
        </Card>
    }
}
