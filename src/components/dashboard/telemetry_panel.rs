use leptos::prelude::*;

use crate::bindings::{RealTimeTelemetry, TelemetryMetric};
use crate::components::design_system::CardTitle;
use crate::services::metrics::sparkline_points;
use crate::utils::formatting::format_metric;

const SPARK_WIDTH: f64 = 200.0;
const SPARK_HEIGHT: f64 = 60.0;
const SPARK_PADDING: f64 = 4.0;

#[component]
pub fn TelemetryGrid(telemetry: RealTimeTelemetry) -> impl IntoView {
    view! {
        <section class="flex flex-col gap-3">
            <CardTitle>"Real-Time Telemetry"</CardTitle>
            <div class="grid grid-cols-1 md:grid-cols-2 xl:grid-cols-4 gap-4">
                <TelemetryPanel label="Response Time" metric=telemetry.response_time stroke="#00aaff" show_threshold=true />
                <TelemetryPanel label="Request Rate" metric=telemetry.request_rate stroke="#00ff88" />
                <TelemetryPanel label="Error Rate" metric=telemetry.error_rate stroke="#ffaa00" />
                <TelemetryPanel label="Latency P99" metric=telemetry.latency_p99 stroke="#ff3333" />
            </div>
        </section>
    }
}

/// Current value, sparkline and the configured limit for one metric.
#[component]
pub fn TelemetryPanel(
    label: &'static str,
    metric: TelemetryMetric,
    stroke: &'static str,
    /// Dashed guide at mid-height when the metric has a threshold
    #[prop(default = false)]
    show_threshold: bool,
) -> impl IntoView {
    let points = sparkline_points(&metric.values(), SPARK_WIDTH, SPARK_HEIGHT, SPARK_PADDING);
    let has_threshold = show_threshold && metric.threshold > 0.0;
    let limit = (metric.threshold > 0.0)
        .then(|| format!("Limit: {}{}", format_metric(metric.threshold), metric.unit));
    let mid = (SPARK_HEIGHT / 2.0).to_string();

    view! {
        <div class="p-4 rounded-lg border border-border bg-surface flex flex-col gap-2">
            <div class="flex items-baseline justify-between">
                <span class="text-xs font-mono uppercase tracking-wider text-text-secondary">{label}</span>
                <span class="text-xl font-mono">
                    {format_metric(metric.current)}
                    <span class="ml-1 text-xs text-text-muted">{metric.unit.clone()}</span>
                </span>
            </div>
            <svg
                class="w-full h-[60px]"
                viewBox=format!("0 0 {SPARK_WIDTH} {SPARK_HEIGHT}")
                preserveAspectRatio="none"
            >
                {has_threshold.then(|| view! {
                    <line
                        x1="0" y1=mid.clone() x2=SPARK_WIDTH.to_string() y2=mid
                        stroke="#ff3333" stroke-width="1" stroke-dasharray="4 4" opacity="0.6"
                    />
                })}
                <polyline fill="none" stroke=stroke stroke-width="2" points=points />
            </svg>
            {limit.map(|text| view! {
                <span class="text-[10px] font-mono text-text-muted">{text}</span>
            })}
        </div>
    }
}
