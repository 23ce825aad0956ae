//! Lower half of the service detail screen: response chart, check log and incidents.

use chrono::Utc;
use leptos::prelude::*;

use crate::bindings::{HealthCheckEntry, ResponseTimePoint};
use crate::services::metrics::{
    response_time_chart, IncidentSeverity, ResponseTier, TimeRange, CHART_HEIGHT, CHART_PAD_LEFT,
    CHART_PAD_RIGHT, CHART_WIDTH,
};
use crate::utils::formatting::{endpoint_path, format_clock_millis, format_incident_date};

const SECTION_CLASS: &str = "flex flex-col gap-3 rounded-lg border border-border-light bg-surface p-4";
const SECTION_TITLE_CLASS: &str = "text-xs font-bold uppercase tracking-wider text-text-primary";
const LINE_COLOR: &str = "#00ff88";

/// The range lives with the screen so a refetch does not reset it.
#[component]
pub fn ResponseTimeChart(points: Vec<ResponseTimePoint>, range: RwSignal<TimeRange>) -> impl IntoView {
    let chart = Memo::new(move |_| response_time_chart(&points, range.get(), Utc::now()));
    let x1 = CHART_PAD_LEFT.to_string();
    let x2 = (CHART_WIDTH - CHART_PAD_RIGHT).to_string();

    view! {
        <section class=SECTION_CLASS>
            <div class="flex items-center justify-between">
                <h2 class=SECTION_TITLE_CLASS>"Response Time History"</h2>
                <div class="flex items-center gap-1">
                    {TimeRange::all().into_iter().map(|r| {
                        let class = move || {
                            let state = if range.get() == r {
                                "border-primary/40 bg-primary/10 text-primary"
                            } else {
                                "border-border-light text-text-secondary hover:text-text-primary"
                            };
                            format!("rounded border px-2.5 py-1 text-[10px] font-bold uppercase tracking-wider transition-colors {state}")
                        };
                        view! {
                            <button type="button" class=class on:click=move |_| range.set(r)>
                                {r.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>

            {move || match chart.get() {
                None => view! {
                    <div class="flex h-52 items-center justify-center">
                        <span class="text-xs uppercase tracking-wider text-text-secondary">
                            "Not enough data for this time range"
                        </span>
                    </div>
                }.into_any(),
                Some(chart) => {
                    let threshold_y = chart.threshold_y.to_string();
                    let label_y = (chart.threshold_y - 4.0).to_string();
                    let label_x = (CHART_WIDTH - CHART_PAD_RIGHT - 2.0).to_string();
                    view! {
                        <div class="overflow-x-auto">
                            <svg
                                viewBox=format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}")
                                class="h-52 w-full min-w-[500px]"
                                preserveAspectRatio="xMidYMid meet"
                            >
                                {chart.grid_ys.iter().map(|y| {
                                    let y = y.to_string();
                                    view! {
                                        <line x1=x1.clone() y1=y.clone() x2=x2.clone() y2=y stroke="#2a2a2a" stroke-width="0.5" />
                                    }
                                }).collect_view()}
                                <line
                                    x1=x1.clone()
                                    y1=threshold_y.clone()
                                    x2=x2.clone()
                                    y2=threshold_y
                                    stroke="#ff3333"
                                    stroke-width="1"
                                    stroke-dasharray="6 4"
                                    opacity="0.6"
                                />
                                <text x=label_x y=label_y text-anchor="end" class="fill-status-error text-[8px] font-bold uppercase">
                                    "200ms Threshold"
                                </text>
                                <path
                                    d=chart.path.clone()
                                    fill="none"
                                    stroke=LINE_COLOR
                                    stroke-width="2"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                />
                                <path
                                    d=chart.path
                                    fill="none"
                                    stroke=LINE_COLOR
                                    stroke-width="6"
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    opacity="0.15"
                                />
                                {chart.ticks.into_iter().map(|tick| view! {
                                    <text
                                        x=tick.x.to_string()
                                        y=(CHART_HEIGHT - 6.0).to_string()
                                        text-anchor="middle"
                                        class="fill-text-secondary text-[9px]"
                                    >
                                        {tick.label}
                                    </text>
                                }).collect_view()}
                            </svg>
                        </div>
                    }.into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn HealthCheckLog(logs: Vec<HealthCheckEntry>, endpoint: String) -> impl IntoView {
    if logs.is_empty() {
        return view! {
            <section class=SECTION_CLASS>
                <h2 class=SECTION_TITLE_CLASS>"Health Check Log"</h2>
                <div class="flex h-32 items-center justify-center">
                    <span class="text-xs uppercase tracking-wider text-text-secondary">"No health checks recorded yet"</span>
                </div>
            </section>
        }
        .into_any();
    }

    let path = endpoint_path(&endpoint);
    view! {
        <section class=SECTION_CLASS>
            <h2 class=SECTION_TITLE_CLASS>"Health Check Log"</h2>
            <div class="overflow-x-auto">
                <table class="w-full text-left">
                    <thead>
                        <tr class="border-b border-border-light">
                            {["Timestamp", "Endpoint", "Latency", "Status"].into_iter().map(|h| view! {
                                <th class="px-3 py-2 text-[9px] font-bold uppercase tracking-wider text-text-secondary">{h}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {logs.into_iter().map(|log| {
                            let time_class = if log.success { "text-text-secondary" } else { "text-status-error" };
                            let (badge_class, outcome) = if log.success {
                                ("bg-status-success/10 text-status-success", "OK")
                            } else {
                                ("bg-status-error/10 text-status-error", "ERR")
                            };
                            view! {
                                <tr class="border-b border-border-light/50 last:border-0">
                                    <td class=format!("px-3 py-2.5 font-mono text-[11px] tracking-wider {time_class}")>
                                        {format_clock_millis(&log.created_at)}
                                    </td>
                                    <td class="px-3 py-2.5 font-mono text-[11px] tracking-wider text-text-secondary">{path.clone()}</td>
                                    <td class=format!(
                                        "px-3 py-2.5 font-mono text-[11px] tracking-wider {}",
                                        ResponseTier::from_ms(log.response_time).text_class(),
                                    )>
                                        {format!("{}ms", log.response_time.round())}
                                    </td>
                                    <td class="px-3 py-2.5">
                                        <span class=format!("rounded px-2 py-0.5 text-[9px] font-bold uppercase tracking-widest {badge_class}")>
                                            {format!("{} {outcome}", log.status_code)}
                                        </span>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </section>
    }
    .into_any()
}

/// Headline of a failed check: the backend's message, else the HTTP status.
pub fn incident_summary(entry: &HealthCheckEntry) -> String {
    match entry.error_message.as_deref().filter(|m| !m.is_empty()) {
        Some(message) => message.to_string(),
        None => format!("HTTP {} {}", entry.status_code, entry.status_text),
    }
}

#[component]
pub fn IncidentHistory(errors: Vec<HealthCheckEntry>) -> impl IntoView {
    let body = if errors.is_empty() {
        view! {
            <div class="flex h-24 items-center justify-center gap-2">
                <span class="text-xs uppercase tracking-wider text-status-success">"✓ No incidents recorded"</span>
            </div>
        }
        .into_any()
    } else {
        view! {
            <div class="flex flex-col gap-3 overflow-y-auto">
                {errors.into_iter().map(|entry| {
                    let severity = IncidentSeverity::classify(entry.status_code, entry.response_time);
                    view! {
                        <div class="flex items-start gap-3 border-l-2 border-status-error/40 py-2 pl-4">
                            <span class="mt-0.5 text-status-error">"⚠"</span>
                            <div class="flex min-w-0 flex-1 flex-col gap-1">
                                <div class="flex items-center justify-between gap-2">
                                    <span class=format!("text-[11px] font-bold uppercase tracking-wider {}", severity.text_class())>
                                        {format!("{}: {}", severity.label(), incident_summary(&entry))}
                                    </span>
                                    <span class="shrink-0 text-[10px] tracking-wider text-text-secondary">
                                        {format_incident_date(&entry.created_at)}
                                    </span>
                                </div>
                                <span class="text-[10px] tracking-wider text-text-secondary">
                                    {format!(
                                        "Response time: {}ms | Status: {} {}",
                                        entry.response_time.round(),
                                        entry.status_code,
                                        entry.status_text,
                                    )}
                                </span>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        }
        .into_any()
    };

    view! {
        <section class=format!("{SECTION_CLASS} max-h-[500px]")>
            <h2 class=SECTION_TITLE_CLASS>"Incident History"</h2>
            {body}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(error_message: Option<&str>) -> HealthCheckEntry {
        HealthCheckEntry {
            id: "c1".to_string(),
            status_code: 503,
            status_text: "Service Unavailable".to_string(),
            response_time: 120.0,
            success: false,
            error_message: error_message.map(str::to_string),
            created_at: "2026-01-05T14:03:07Z".to_string(),
        }
    }

    #[test]
    fn test_incident_summary_prefers_message() {
        assert_eq!(incident_summary(&entry(Some("Connection refused"))), "Connection refused");
    }

    #[test]
    fn test_incident_summary_falls_back_to_status() {
        assert_eq!(incident_summary(&entry(None)), "HTTP 503 Service Unavailable");
        assert_eq!(incident_summary(&entry(Some(""))), "HTTP 503 Service Unavailable");
    }
}
