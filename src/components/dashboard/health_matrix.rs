use chrono::Utc;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::bindings::ServiceItem;
use crate::components::design_system::{Card, CardBody, CardHeader, CardTitle, EmptyState};
use crate::services::metrics::{status_badge, status_badge_class, UptimeTier};
use crate::utils::formatting::{format_metric, format_uptime_since};

#[component]
pub fn HealthMatrix(services: Vec<ServiceItem>) -> impl IntoView {
    let count = services.len();

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"System Health Matrix"</CardTitle>
                <span class="text-xs font-mono text-text-muted">{format!("{count} nodes")}</span>
            </CardHeader>
            <CardBody>
                {if services.is_empty() {
                    view! { <EmptyState title="No services configured" /> }.into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-3 xl:grid-cols-5 gap-3">
                            {services.into_iter().map(|service| view! { <HealthCard service=service /> }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </CardBody>
        </Card>
    }
}

#[component]
fn HealthCard(service: ServiceItem) -> impl IntoView {
    let uptime_class = UptimeTier::from_percentage(service.uptime_percentage).text_class();
    let since = format_uptime_since(service.last_check.as_deref(), Utc::now());
    let href = format!("/services/{}", service.id);

    view! {
        <A href=href attr:class="block p-3 rounded border border-border bg-background hover:border-primary/60 transition-colors">
            <div class="flex items-start justify-between gap-2">
                <span class="text-sm font-semibold truncate">{service.name}</span>
                <span class=format!("px-1.5 py-0.5 border rounded text-[10px] font-mono {}", status_badge_class(service.status))>
                    {status_badge(service.status)}
                </span>
            </div>
            <div class=format!("mt-3 text-2xl font-mono {uptime_class}")>
                {format!("{}%", format_metric(service.uptime_percentage))}
            </div>
            <div class="mt-2 flex justify-between text-[10px] font-mono text-text-muted">
                <span>{format!("Alerts: {}", service.failure_count)}</span>
                <span>{since}</span>
            </div>
        </A>
    }
}
