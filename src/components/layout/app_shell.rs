//! Application chrome around every signed-in screen.

use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use crate::config::use_app_config;
use crate::services::layout_state::{engine_status_label, use_layout_state, Indicator};
use crate::services::query_cache::use_query_invalidation;
use crate::services::session::{use_session, LOGIN_PATH};
use crate::services::timers::use_poll_trigger;
use crate::utils::formatting::format_utc_timestamp;

const CLOCK_TICK_MS: u64 = 100;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let layout = use_layout_state();

    view! {
        <div class="h-screen flex flex-col bg-background text-text-primary">
            <TopBar />
            <div class="flex flex-1 min-h-0">
                <Show when=move || layout.sidebar_open.get()>
                    <Sidebar />
                </Show>
                <main class="flex-1 overflow-y-auto p-6">
                    {children()}
                </main>
            </div>
            <StatusFooter />
        </div>
    }
}

#[component]
fn StatusDot(label: &'static str, #[prop(into)] indicator: Signal<Indicator>) -> impl IntoView {
    view! {
        <span class="flex items-center gap-1.5">
            <span class=move || format!("w-2 h-2 rounded-full {}", indicator.get().dot_class())></span>
            <span class="text-text-secondary">{label}</span>
        </span>
    }
}

#[component]
pub fn TopBar() -> impl IntoView {
    let layout = use_layout_state();
    let cache = use_query_invalidation();

    let now = RwSignal::new(Utc::now());
    match set_interval_with_handle(
        move || now.set(Utc::now()),
        Duration::from_millis(CLOCK_TICK_MS),
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::warn!("Failed to start clock: {:?}", e),
    }

    let snapshot = layout.snapshot;
    let system = Signal::derive(move || {
        if layout.sync_failed.get() {
            return Indicator::Error;
        }
        snapshot.with(|s| s.as_ref().map_or(Indicator::Idle, |s| s.system_indicator()))
    });
    let services = Signal::derive(move || {
        snapshot.with(|s| s.as_ref().map_or(Indicator::Idle, |s| s.services_indicator()))
    });
    let alerts = Signal::derive(move || {
        snapshot.with(|s| s.as_ref().map_or(Indicator::Idle, |s| s.alerts_indicator()))
    });
    let latency = Signal::derive(move || {
        snapshot.with(|s| s.as_ref().map_or(Indicator::Idle, |s| s.latency_indicator()))
    });
    let alert_count = move || snapshot.with(|s| s.as_ref().map_or(0, |s| s.alert_count()));

    view! {
        <header class="h-12 flex items-center justify-between px-4 border-b border-border bg-surface font-mono text-xs">
            <div class="flex items-center gap-4">
                <button
                    type="button"
                    class="text-text-secondary hover:text-text-primary"
                    aria-label="Toggle sidebar"
                    on:click=move |_| layout.toggle_sidebar()
                >
                    "☰"
                </button>
                <span class="text-primary font-semibold tracking-widest">"Monitor-Central-01"</span>
                <div class="hidden md:flex items-center gap-4">
                    <StatusDot label="System" indicator=system />
                    <StatusDot label="Services" indicator=services />
                    <StatusDot label="Alerts" indicator=alerts />
                    <StatusDot label="Latency" indicator=latency />
                </div>
            </div>
            <div class="flex items-center gap-4">
                <button
                    type="button"
                    class="text-text-secondary hover:text-primary"
                    title="Refresh"
                    on:click=move |_| cache.invalidate_all()
                >
                    "⟳"
                </button>
                <span class=move || {
                    if alert_count() > 0 { "text-status-warning" } else { "text-text-secondary" }
                }>
                    {move || format!("{} Active", alert_count())}
                </span>
                <span class="text-text-muted">{move || format_utc_timestamp(now.get())}</span>
            </div>
        </header>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    let pathname = use_location().pathname;
    let is_active = move || pathname.with(|path| path.starts_with(href));

    view! {
        <A
            href=href
            attr:class=move || {
                if is_active() {
                    "block px-4 py-2 rounded border-l-2 border-primary bg-primary/10 text-primary"
                } else {
                    "block px-4 py-2 rounded border-l-2 border-transparent text-text-secondary hover:text-text-primary hover:bg-white/5"
                }
            }
        >
            {label}
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let operator = RwSignal::new(Option::<(String, String)>::None);
    let api = session.api();
    spawn_local(async move {
        match api.me().await {
            Ok(user) => operator.set(Some((user.full_name, user.email))),
            Err(e) if e.is_unauthorized() => {}
            Err(e) => log::warn!("Loading profile failed: {e}"),
        }
    });

    let logout = move |_| {
        session.sign_out();
        navigate(
            LOGIN_PATH,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        );
    };

    view! {
        <nav class="w-56 shrink-0 flex flex-col justify-between border-r border-border bg-surface p-3 font-mono text-sm uppercase tracking-wide">
            <div class="flex flex-col gap-1">
                <NavLink href="/dashboard" label="Dashboard" />
                <NavLink href="/services" label="Services" />
            </div>
            <div class="flex flex-col gap-2">
                {move || operator.get().map(|(name, email)| view! {
                    <div class="px-4 py-2 normal-case tracking-normal">
                        <p class="truncate text-xs text-text-primary">{name}</p>
                        <p class="truncate text-[10px] text-text-muted">{email}</p>
                    </div>
                })}
                <button
                    type="button"
                    class="px-4 py-2 text-left text-text-muted hover:text-status-error"
                    on:click=logout
                >
                    "Logout"
                </button>
            </div>
        </nav>
    }
}

#[component]
pub fn StatusFooter() -> impl IntoView {
    let layout = use_layout_state();
    let session = use_session();
    let config = use_app_config();
    let snapshot = layout.snapshot;

    let reachable = RwSignal::new(Option::<bool>::None);
    let engine = RwSignal::new(Option::<String>::None);
    let poll = use_poll_trigger(Duration::from_millis(config.polling.refetch_interval_ms));
    Effect::new(move |_| {
        poll.track();
        let api = session.api();
        spawn_local(async move {
            let healthy = api.system_health().await.is_ok();
            reachable.set(Some(healthy));
            match api.system_status().await {
                Ok(body) => engine.set(engine_status_label(&body)),
                Err(e) => log::debug!("System status unavailable: {e}"),
            }
        });
    });

    let uptime = move || snapshot.with(|s| s.as_ref().map_or("--".to_string(), |s| s.uptime_label()));
    let instances = move || {
        snapshot.with(|s| s.as_ref().map_or("--".to_string(), |s| s.instances_label()))
    };

    view! {
        <footer class="h-8 flex items-center justify-between px-4 border-t border-border bg-surface font-mono text-[11px] text-text-muted">
            <div class="flex items-center gap-6">
                <span>"Uptime: " {uptime}</span>
                <span>"Cluster: US-East-Prod-01"</span>
                <span>"Instances: " {instances}</span>
            </div>
            <div class="flex items-center gap-6">
                <span>"Engine: " {move || engine.get().unwrap_or_else(|| "--".to_string())}</span>
                {move || match reachable.get() {
                    Some(true) => view! { <span class="text-status-success">"API: Reachable"</span> }.into_any(),
                    Some(false) => view! { <span class="text-status-error">"API: Unreachable"</span> }.into_any(),
                    None => view! { <span>"API: --"</span> }.into_any(),
                }}
                {move || {
                    if layout.sync_failed.get() {
                        view! { <span class="text-status-error">"Sync Error"</span> }.into_any()
                    } else {
                        view! { <span class="text-status-success">"Sync Active"</span> }.into_any()
                    }
                }}
            </div>
        </footer>
    }
}
