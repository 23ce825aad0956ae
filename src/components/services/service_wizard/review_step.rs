//! Confirm step: read-only summary of the draft plus the acknowledgment box.

use leptos::prelude::*;

use crate::services::metrics::method_badge_class;
use crate::services::wizard_state::{use_wizard_context, WizardStep};
use crate::utils::formatting::format_interval;

pub const ACKNOWLEDGMENT_TEXT: &str = "I confirm this configuration is correct and authorize the monitoring engine to begin monitoring the specified endpoint with the defined parameters.";

const CARD_CLASS: &str = "rounded-lg border border-border-light bg-surface p-6";
const CAPTION_CLASS: &str = "text-[9px] uppercase tracking-wider text-text-secondary";
const VALUE_CLASS: &str = "text-sm font-semibold text-text-primary";

/// "--" stands in for fields left empty.
fn or_placeholder(value: &str) -> String {
    if value.is_empty() {
        "--".to_string()
    } else {
        value.to_string()
    }
}

#[component]
fn ReviewCard(title: &'static str, edit_step: WizardStep, children: Children) -> impl IntoView {
    let ctx = use_wizard_context();

    view! {
        <div class=CARD_CLASS>
            <div class="mb-4 flex items-center justify-between">
                <h3 class="text-[10px] font-bold uppercase tracking-wider text-text-primary">{title}</h3>
                <button
                    type="button"
                    class="text-[10px] font-bold uppercase tracking-wider text-primary hover:text-primary-hover"
                    on:click=move |_| ctx.jump_to(edit_step)
                >
                    "Edit"
                </button>
            </div>
            {children()}
        </div>
    }
}

#[component]
pub fn ReviewStep() -> impl IntoView {
    let ctx = use_wizard_context();
    let draft = ctx.draft();
    let confirmed = Signal::derive(move || ctx.wizard.with(|w| w.is_confirmed()));
    let toggle_confirmed = move |_| ctx.wizard.update(|w| {
        let next = !w.is_confirmed();
        w.set_confirmed(next);
    });

    let headers: Vec<(String, String)> = draft
        .active_headers()
        .into_iter()
        .map(|h| (h.key.clone(), h.value.clone()))
        .collect();
    let codes = draft.expected_status_codes.clone();
    let (ssl_dot, ssl_label) = if draft.ssl_verify {
        ("bg-status-success", "SSL: Enabled")
    } else {
        ("bg-text-secondary", "SSL: Disabled")
    };

    view! {
        <div class="flex flex-col gap-4">
            <ReviewCard title="Endpoint Details" edit_step=WizardStep::Endpoint>
                <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                    <div class="flex flex-col gap-1">
                        <span class=CAPTION_CLASS>"Service Name"</span>
                        <span class=VALUE_CLASS>{or_placeholder(&draft.service_name)}</span>
                    </div>
                    <div class="flex flex-col gap-1">
                        <span class=CAPTION_CLASS>"Target URL"</span>
                        <span class="break-all font-mono text-sm text-primary">{or_placeholder(&draft.endpoint_url)}</span>
                    </div>
                    <div class="flex flex-col gap-1">
                        <span class=CAPTION_CLASS>"Request Method"</span>
                        <span class=format!(
                            "w-fit rounded border px-2 py-0.5 text-[9px] font-bold uppercase tracking-widest {}",
                            method_badge_class(draft.method),
                        )>
                            {draft.method.as_str()}
                        </span>
                    </div>
                </div>
                {(!headers.is_empty()).then(|| view! {
                    <div class="mt-4 border-t border-border-light/50 pt-4">
                        <span class=CAPTION_CLASS>{format!("Headers ({})", headers.len())}</span>
                        <div class="mt-2 flex flex-wrap gap-2">
                            {headers.into_iter().map(|(key, value)| view! {
                                <span class="rounded border border-border-light bg-surface-raised px-2 py-0.5 font-mono text-[10px] text-text-secondary">
                                    {format!("{key}: {value}")}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                })}
            </ReviewCard>

            <ReviewCard title="Monitoring Settings" edit_step=WizardStep::Settings>
                <div class="grid grid-cols-2 gap-4 sm:grid-cols-4">
                    <div class="flex flex-col gap-1">
                        <span class=CAPTION_CLASS>"Check Interval"</span>
                        <span class=VALUE_CLASS>{format!("{} Interval", format_interval(draft.check_interval))}</span>
                    </div>
                    <div class="flex flex-col gap-1">
                        <span class=CAPTION_CLASS>"Request Timeout"</span>
                        <span class=VALUE_CLASS>{format!("{}s Timeout", draft.request_timeout)}</span>
                    </div>
                    <div class="flex flex-col gap-1">
                        <span class=CAPTION_CLASS>"Failure Threshold"</span>
                        <span class=VALUE_CLASS>{format!("{} Failure Threshold", draft.failure_threshold)}</span>
                    </div>
                    <div class="flex flex-col gap-1">
                        <span class=CAPTION_CLASS>"Encryption"</span>
                        <div class="flex items-center gap-1.5">
                            <span class=format!("h-1.5 w-1.5 rounded-full {ssl_dot}")></span>
                            <span class=VALUE_CLASS>{ssl_label}</span>
                        </div>
                    </div>
                </div>
                {(!codes.is_empty()).then(|| view! {
                    <div class="mt-4 border-t border-border-light/50 pt-4">
                        <span class=CAPTION_CLASS>"Expected Status Codes"</span>
                        <div class="mt-2 flex flex-wrap gap-2">
                            {codes.into_iter().map(|code| view! {
                                <span class="rounded border border-primary/30 bg-primary/10 px-2 py-0.5 text-xs font-bold text-primary">
                                    {code.to_string()}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                })}
            </ReviewCard>

            <div class="rounded-lg border border-border-light bg-surface p-5">
                <label class="flex cursor-pointer items-start gap-3">
                    <input
                        type="checkbox"
                        class="mt-0.5 h-4 w-4 accent-primary"
                        prop:checked=move || confirmed.get()
                        on:change=toggle_confirmed
                    />
                    <span class="text-[11px] leading-relaxed tracking-wider text-text-secondary">
                        {ACKNOWLEDGMENT_TEXT}
                    </span>
                </label>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(""), "--");
        assert_eq!(or_placeholder("Payments API"), "Payments API");
    }
}
