use leptos::prelude::*;

use crate::bindings::{CheckLog, ServiceItem};
use crate::components::design_system::{Card, CardHeader, CardTitle, EmptyState};
use crate::services::metrics::ResponseTier;
use crate::utils::formatting::{endpoint_path, format_response_ms, short_id};

/// Check id as shown in the table: first eight characters, upper-cased.
fn check_label(id: &str) -> String {
    id.chars().take(8).collect::<String>().to_uppercase()
}

fn find_service<'a>(services: &'a [ServiceItem], id: &str) -> Option<&'a ServiceItem> {
    services.iter().find(|s| s.id == id)
}

#[component]
pub fn DiagnosticsTable(logs: Vec<CheckLog>, services: Vec<ServiceItem>) -> impl IntoView {
    let rows = logs
        .into_iter()
        .map(|log| {
            let service = find_service(&services, &log.node_id);
            let name = service.map_or_else(|| short_id(&log.node_id), |s| s.name.clone());
            let path = service.map_or_else(|| "--".to_string(), |s| endpoint_path(&s.endpoint));
            let latency_class = ResponseTier::from_ms(log.response_time).text_class();
            let (outcome, outcome_class) = if log.success {
                ("OK", "text-status-success")
            } else {
                ("FAIL", "text-status-error")
            };

            view! {
                <tr class="border-t border-border">
                    <td class="px-4 py-2 text-text-muted">{check_label(&log.id)}</td>
                    <td class="px-4 py-2">{name}</td>
                    <td class="px-4 py-2 text-text-secondary truncate max-w-[12rem]">{path}</td>
                    <td class="px-4 py-2">{format!("{} {}", log.status_code, log.status_text)}</td>
                    <td class=format!("px-4 py-2 {latency_class}")>{format_response_ms(log.response_time)}</td>
                    <td class=format!("px-4 py-2 font-semibold {outcome_class}")>{outcome}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Card>
            <CardHeader>
                <CardTitle>"Service Diagnostics"</CardTitle>
            </CardHeader>
            {if rows.is_empty() {
                view! {
                    <EmptyState
                        title="Awaiting health checks"
                        hint="Diagnostics will appear here once your services start running"
                    />
                }.into_any()
            } else {
                view! {
                    <div class="overflow-x-auto">
                        <table class="w-full text-xs font-mono">
                            <thead class="text-left text-text-muted uppercase">
                                <tr>
                                    <th class="px-4 py-2">"ID"</th>
                                    <th class="px-4 py-2">"Service"</th>
                                    <th class="px-4 py-2">"Endpoint"</th>
                                    <th class="px-4 py-2">"Value"</th>
                                    <th class="px-4 py-2">"Latency"</th>
                                    <th class="px-4 py-2">"Status"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                }.into_any()
            }}
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_label() {
        assert_eq!(check_label("a1b2c3d4e5f6"), "A1B2C3D4");
        assert_eq!(check_label("ab"), "AB");
    }
}
