//! Endpoint and monitoring-settings forms shared by the create wizard and the edit screen.
//!
//! Both forms are controlled: they read the draft through a signal and hand every
//! change back as a whole new draft through `on_change`.

use leptos::ev;
use leptos::prelude::*;

use crate::bindings::HttpMethod;
use crate::services::session::use_session;
use crate::services::wizard_state::{
    test_connection_action, ConnectionTest, FieldErrors, ServiceDraft, MAX_FAILURE_THRESHOLD,
    MAX_REQUEST_TIMEOUT_SECS, MIN_FAILURE_THRESHOLD, MIN_REQUEST_TIMEOUT_SECS,
};
use crate::utils::formatting::{
    closest_interval, failure_hint, format_interval, interval_recommendation, join_endpoint_url,
    sanitize_status_code_input, slider_percent, split_endpoint_url, INTERVAL_OPTIONS, PROTOCOLS,
};

const LABEL_CLASS: &str = "text-[10px] font-bold uppercase tracking-wider text-text-secondary";
const TEXT_INPUT_CLASS: &str = "h-11 rounded-lg border border-border-light bg-background px-4 text-sm text-text-primary outline-none transition-colors placeholder:text-text-muted focus:border-primary/40";
const NUMBER_INPUT_CLASS: &str = "h-12 w-20 rounded-lg border border-border-light bg-background px-3 text-center font-mono text-lg font-bold text-text-primary outline-none transition-colors focus:border-primary/40";

fn apply(draft: Signal<ServiceDraft>, on_change: Callback<ServiceDraft>, f: impl FnOnce(&mut ServiceDraft)) {
    let mut next = draft.get_untracked();
    f(&mut next);
    on_change.run(next);
}

#[component]
fn FieldMessage(errors: Signal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| e.get(field).map(str::to_string)).map(|msg| view! {
            <span class="text-[10px] tracking-wider text-status-error">{msg}</span>
        })
    }
}

// ============================================================================
// Endpoint
// ============================================================================

#[component]
pub fn EndpointForm(
    #[prop(into)]
    draft: Signal<ServiceDraft>,
    #[prop(into)]
    errors: Signal<FieldErrors>,
    on_change: Callback<ServiceDraft>,
    connection_test: RwSignal<ConnectionTest>,
) -> impl IntoView {
    let session = use_session();
    let run_test = test_connection_action(session, connection_test);

    // Protocol and remainder are edited separately and joined on every change
    let (initial_protocol, initial_rest) = draft.with_untracked(|d| {
        let (protocol, rest) = split_endpoint_url(&d.endpoint_url);
        (protocol.to_string(), rest.to_string())
    });
    let url_protocol = RwSignal::new(initial_protocol);
    let url_rest = RwSignal::new(initial_rest);

    let set_rest = move |evt: ev::Event| {
        let rest = event_target_value(&evt);
        url_rest.set(rest.clone());
        apply(draft, on_change, |d| d.endpoint_url = join_endpoint_url(&url_protocol.get_untracked(), &rest));
    };
    let set_protocol = move |evt: ev::Event| {
        let protocol = event_target_value(&evt);
        url_protocol.set(protocol.clone());
        apply(draft, on_change, |d| d.endpoint_url = join_endpoint_url(&protocol, &url_rest.get_untracked()));
    };

    let test_disabled = move || connection_test.with(|t| !draft.with(|d| t.can_start(d)));
    let start_test = move |_: ev::MouseEvent| run_test(draft.get_untracked());

    view! {
        <div class="flex flex-col gap-6 rounded-lg border border-border-light bg-surface p-6">
            <div class="grid grid-cols-1 gap-4 md:grid-cols-2">
                <div class="flex flex-col gap-2">
                    <label class=LABEL_CLASS>"Service Name"</label>
                    <input
                        type="text"
                        class=TEXT_INPUT_CLASS
                        placeholder="API Gateway"
                        prop:value=move || draft.with(|d| d.service_name.clone())
                        on:input=move |evt| {
                            let name = event_target_value(&evt);
                            apply(draft, on_change, |d| d.service_name = name);
                        }
                    />
                    <FieldMessage errors=errors field="service_name" />
                </div>
                <div class="flex flex-col gap-2">
                    <label class=LABEL_CLASS>"Endpoint URL"</label>
                    <div class="flex">
                        <select
                            class="h-11 rounded-l-lg border border-r-0 border-border-light bg-surface-raised px-3 text-xs font-bold text-primary outline-none"
                            prop:value=move || url_protocol.get()
                            on:change=set_protocol
                        >
                            {PROTOCOLS.iter().map(|p| view! { <option value=*p>{*p}</option> }).collect_view()}
                        </select>
                        <input
                            type="text"
                            class=format!("{TEXT_INPUT_CLASS} flex-1 rounded-l-none")
                            placeholder="api.example.com/v1/health"
                            prop:value=move || url_rest.get()
                            on:input=set_rest
                        />
                    </div>
                    <FieldMessage errors=errors field="endpoint_url" />
                </div>
            </div>

            <div class="flex flex-col gap-2">
                <label class=LABEL_CLASS>"Request Method"</label>
                <div class="grid grid-cols-2 gap-3 sm:grid-cols-4">
                    {HttpMethod::all().into_iter().map(|method| {
                        let class = move || {
                            let state = if draft.with(|d| d.method == method) {
                                "border-primary bg-primary/10 text-primary"
                            } else {
                                "border-border-light bg-surface-raised text-text-secondary hover:text-text-primary"
                            };
                            format!("flex h-12 items-center justify-center rounded-lg border text-xs font-bold uppercase tracking-widest transition-colors {state}")
                        };
                        view! {
                            <button
                                type="button"
                                class=class
                                on:click=move |_| apply(draft, on_change, |d| d.method = method)
                            >
                                {method.as_str()}
                            </button>
                        }
                    }).collect_view()}
                </div>
                <FieldMessage errors=errors field="method" />
            </div>

            <HeadersEditor draft=draft on_change=on_change />

            <Show when=move || draft.with(|d| d.has_body())>
                <div class="flex flex-col gap-2">
                    <label class=LABEL_CLASS>"Request Body (JSON)"</label>
                    <textarea
                        class="w-full resize-none rounded-lg border border-border-light bg-background p-4 font-mono text-sm leading-relaxed text-primary outline-none placeholder:text-text-muted"
                        rows="8"
                        spellcheck="false"
                        placeholder="{\n  \"key\": \"value\"\n}"
                        prop:value=move || draft.with(|d| d.body.clone())
                        on:input=move |evt| {
                            let body = event_target_value(&evt);
                            apply(draft, on_change, |d| d.body = body);
                        }
                    ></textarea>
                </div>
            </Show>

            <div class="flex flex-wrap items-center gap-4">
                <button
                    type="button"
                    class="flex h-11 items-center gap-2 rounded-lg bg-primary px-6 text-[10px] font-bold uppercase tracking-wider text-background transition-colors hover:bg-primary-hover disabled:opacity-40"
                    disabled=test_disabled
                    on:click=start_test
                >
                    {move || if connection_test.with(|t| t.running) { "Testing..." } else { "⚡ Test Connection" }}
                </button>
                <ConnectionTestResult state=connection_test />
            </div>
        </div>
    }
}

#[component]
fn HeadersEditor(draft: Signal<ServiceDraft>, on_change: Callback<ServiceDraft>) -> impl IntoView {
    let active_count = move || draft.with(|d| d.active_headers().len());

    view! {
        <div class="flex flex-col gap-3">
            <div class="flex items-center justify-between">
                <label class=LABEL_CLASS>"Request Headers"</label>
                <span class="text-[10px] uppercase tracking-wider text-text-secondary">
                    {move || format!("{} active headers", active_count())}
                </span>
            </div>
            <For
                each=move || draft.with(|d| d.headers.clone())
                key=|header| header.id.clone()
                let:header
            >
                {
                    let key_id = header.id.clone();
                    let value_id = header.id.clone();
                    let remove_id = header.id.clone();
                    view! {
                        <div class="flex items-center gap-2">
                            <input
                                type="text"
                                class=format!("{TEXT_INPUT_CLASS} h-10 flex-1")
                                placeholder="Header-Name"
                                prop:value=header.key
                                on:input=move |evt| {
                                    let key = event_target_value(&evt);
                                    apply(draft, on_change, |d| d.set_header_key(&key_id, &key));
                                }
                            />
                            <input
                                type="text"
                                class=format!("{TEXT_INPUT_CLASS} h-10 flex-1")
                                placeholder="value"
                                prop:value=header.value
                                on:input=move |evt| {
                                    let value = event_target_value(&evt);
                                    apply(draft, on_change, |d| d.set_header_value(&value_id, &value));
                                }
                            />
                            <button
                                type="button"
                                class="flex h-10 w-10 shrink-0 items-center justify-center rounded-lg text-text-secondary hover:bg-surface-raised hover:text-text-primary"
                                title="Remove header"
                                on:click=move |_| apply(draft, on_change, |d| d.remove_header(&remove_id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
            <button
                type="button"
                class="flex h-10 w-full items-center justify-center gap-2 rounded-lg border border-dashed border-border-light text-[10px] font-bold uppercase tracking-wider text-text-secondary hover:border-border hover:text-text-primary"
                on:click=move |_| apply(draft, on_change, |d| d.add_header())
            >
                "+ Add Header"
            </button>
        </div>
    }
}

#[component]
fn ConnectionTestResult(state: RwSignal<ConnectionTest>) -> impl IntoView {
    move || {
        let test = state.get();
        if let Some(result) = test.result {
            let (dot, text) = if result.connection_established {
                ("bg-status-success", "text-status-success")
            } else {
                ("bg-status-error", "text-status-error")
            };
            view! {
                <div class="flex items-center gap-3">
                    <div class="flex items-center gap-1.5">
                        <span class=format!("h-2 w-2 rounded-full {dot}")></span>
                        <span class=format!("text-xs font-bold uppercase tracking-wider {text}")>
                            {format!("HTTP {} {}", result.status_code, result.status_text)}
                        </span>
                    </div>
                    <span class="font-mono text-[11px] tracking-wider text-text-secondary">
                        {format!("{}{} response time", result.response_time, result.response_time_unit)}
                    </span>
                </div>
            }
            .into_any()
        } else if let Some(error) = test.error {
            view! { <span class="text-xs tracking-wider text-status-error">{error}</span> }.into_any()
        } else {
            ().into_any()
        }
    }
}

// ============================================================================
// Monitoring Settings
// ============================================================================

#[component]
pub fn SettingsForm(
    #[prop(into)]
    draft: Signal<ServiceDraft>,
    #[prop(into)]
    errors: Signal<FieldErrors>,
    on_change: Callback<ServiceDraft>,
) -> impl IntoView {
    let code_input = RwSignal::new(String::new());
    let code_error = RwSignal::new(Option::<&'static str>::None);

    let add_code = move |evt: ev::KeyboardEvent| {
        if evt.key() != "Enter" {
            return;
        }
        evt.prevent_default();
        let mut next = draft.get_untracked();
        match next.add_status_code(&code_input.get_untracked()) {
            Ok(_) => {
                code_input.set(String::new());
                code_error.set(None);
                on_change.run(next);
            }
            Err(rejection) => code_error.set(Some(rejection.message())),
        }
    };

    let interval = move || draft.with(|d| d.check_interval);
    let ssl_on = move || draft.with(|d| d.ssl_verify);

    view! {
        <div class="flex flex-col gap-8 rounded-lg border border-border-light bg-surface p-6">
            <div class="flex flex-col gap-4">
                <div class="flex items-baseline justify-between">
                    <label class=LABEL_CLASS>"Check Interval"</label>
                    <div class="flex items-baseline gap-2">
                        <span class="font-mono text-2xl font-bold text-primary">{move || format_interval(interval())}</span>
                        <span class="text-[10px] italic tracking-wider text-primary/60">
                            {move || interval_recommendation(interval())}
                        </span>
                    </div>
                </div>
                <div>
                    <input
                        type="range"
                        min="0"
                        max="100"
                        step="0.1"
                        class="h-1.5 w-full cursor-pointer appearance-none rounded-full bg-surface-raised accent-primary"
                        prop:value=move || slider_percent(interval()).to_string()
                        on:input=move |evt| {
                            let percent = event_target_value(&evt).parse::<f64>().unwrap_or(0.0);
                            apply(draft, on_change, |d| d.check_interval = closest_interval(percent));
                        }
                    />
                    <div class="mt-2 flex justify-between">
                        {INTERVAL_OPTIONS.iter().map(|option| {
                            let value = option.value_ms;
                            let class = move || {
                                let state = if interval() == value {
                                    "text-primary"
                                } else {
                                    "text-text-secondary hover:text-text-primary"
                                };
                                format!("text-[10px] font-bold uppercase tracking-wider transition-colors {state}")
                            };
                            view! {
                                <button
                                    type="button"
                                    class=class
                                    on:click=move |_| apply(draft, on_change, |d| d.check_interval = value)
                                >
                                    {option.label}
                                </button>
                            }
                        }).collect_view()}
                    </div>
                </div>
                <FieldMessage errors=errors field="check_interval" />
            </div>

            <div class="grid grid-cols-1 gap-6 md:grid-cols-2">
                <div class="flex flex-col gap-2">
                    <label class=LABEL_CLASS>"Request Timeout"</label>
                    <div class="flex items-center gap-3">
                        <input
                            type="number"
                            min=MIN_REQUEST_TIMEOUT_SECS.to_string()
                            max=MAX_REQUEST_TIMEOUT_SECS.to_string()
                            class=NUMBER_INPUT_CLASS
                            prop:value=move || draft.with(|d| d.request_timeout.to_string())
                            on:input=move |evt| {
                                let raw = event_target_value(&evt);
                                apply(draft, on_change, |d| d.set_request_timeout_input(&raw));
                            }
                        />
                        <span class="text-xs font-bold uppercase tracking-wider text-text-secondary">"Seconds"</span>
                    </div>
                    <span class="text-[10px] tracking-wider text-text-secondary">"Maximum duration for a single request"</span>
                </div>
                <div class="flex flex-col gap-2">
                    <label class=LABEL_CLASS>"Failure Threshold"</label>
                    <input
                        type="number"
                        min=MIN_FAILURE_THRESHOLD.to_string()
                        max=MAX_FAILURE_THRESHOLD.to_string()
                        class=NUMBER_INPUT_CLASS
                        prop:value=move || draft.with(|d| d.failure_threshold.to_string())
                        on:input=move |evt| {
                            let raw = event_target_value(&evt);
                            apply(draft, on_change, |d| d.set_failure_threshold_input(&raw));
                        }
                    />
                    <span class="text-[10px] tracking-wider text-text-secondary">
                        {move || draft.with(|d| failure_hint(d.failure_threshold, d.check_interval))}
                    </span>
                    <FieldMessage errors=errors field="failure_threshold" />
                </div>
            </div>

            <div class="flex flex-col gap-2">
                <label class=LABEL_CLASS>"Expected Status Codes"</label>
                <div class="flex flex-wrap items-center gap-2 rounded-lg border border-border-light bg-background p-3">
                    {move || draft.with(|d| d.expected_status_codes.clone()).into_iter().map(|code| view! {
                        <span class="flex items-center gap-1.5 rounded border border-primary/30 bg-primary/10 px-2.5 py-1 text-xs font-bold text-primary">
                            {code.to_string()}
                            <button
                                type="button"
                                class="text-primary/60 hover:text-primary"
                                title="Remove status code"
                                on:click=move |_| apply(draft, on_change, |d| d.remove_status_code(code))
                            >
                                "✕"
                            </button>
                        </span>
                    }).collect_view()}
                    <input
                        type="text"
                        class="h-7 w-24 bg-transparent text-sm text-text-primary outline-none placeholder:text-text-muted"
                        placeholder="Add code..."
                        prop:value=move || code_input.get()
                        on:input=move |evt| code_input.set(sanitize_status_code_input(&event_target_value(&evt)))
                        on:keydown=add_code
                    />
                </div>
                {move || code_error.get().map(|msg| view! {
                    <span class="text-[10px] tracking-wider text-status-error">{msg}</span>
                })}
            </div>

            <div class="flex items-center justify-between rounded-lg border border-border-light bg-background p-4">
                <div class="flex flex-col gap-0.5">
                    <span class=LABEL_CLASS>"SSL/TLS Verification"</span>
                    <span class="text-[10px] uppercase tracking-wider text-text-secondary">
                        "Validate certificates for encrypted traffic"
                    </span>
                </div>
                <button
                    type="button"
                    class="flex items-center gap-2"
                    role="switch"
                    aria-checked=move || ssl_on().to_string()
                    on:click=move |_| apply(draft, on_change, |d| d.ssl_verify = !d.ssl_verify)
                >
                    <div class=move || format!(
                        "relative h-6 w-11 rounded-full transition-colors {}",
                        if ssl_on() { "bg-primary" } else { "bg-surface-raised" },
                    )>
                        <div class=move || format!(
                            "absolute top-0.5 h-5 w-5 rounded-full bg-white shadow transition-transform {}",
                            if ssl_on() { "translate-x-5" } else { "translate-x-0.5" },
                        )></div>
                    </div>
                    <span class=move || format!(
                        "text-[10px] font-bold uppercase tracking-wider {}",
                        if ssl_on() { "text-primary" } else { "text-text-secondary" },
                    )>
                        {move || if ssl_on() { "Enabled" } else { "Disabled" }}
                    </span>
                </button>
            </div>
        </div>
    }
}
