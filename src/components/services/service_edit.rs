use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use super::forms::{EndpointForm, SettingsForm};
use super::service_detail::SERVICES_PATH;
use crate::components::design_system::{ErrorPanel, LoadingPanel};
use crate::services::notification_service::use_notification_state;
use crate::services::query_cache::use_query_invalidation;
use crate::services::session::use_session;
use crate::services::wizard_state::{save_service_action, ConnectionTest, ServiceDraft, ServiceEditor};

const LOAD_FAILED_MESSAGE: &str = "Service not found or failed to load";
const SECTION_TITLE_CLASS: &str = "mb-3 text-[10px] font-bold uppercase tracking-wider text-text-secondary";

#[component]
pub fn ServiceEdit() -> impl IntoView {
    let session = use_session();
    let cache = use_query_invalidation();
    let notifications = use_notification_state();
    let navigate = use_navigate();
    let params = use_params_map();
    let service_id = Memo::new(move |_| params.with(|p| p.get("service_id").unwrap_or_default()));

    let editor = RwSignal::new(Option::<ServiceEditor>::None);
    let service_name = RwSignal::new(String::new());
    let failed = RwSignal::new(false);
    let connection_test = RwSignal::new(ConnectionTest::default());

    // Hydrated once per service id
    Effect::new(move |_| {
        let id = service_id.get();
        editor.set(None);
        failed.set(false);

        let api = session.api();
        spawn_local(async move {
            match api.service_detail(&id).await {
                Ok(detail) => {
                    service_name.set(detail.service.name.clone());
                    editor.set(Some(ServiceEditor::new(&detail.service)));
                }
                Err(e) if e.is_unauthorized() => {}
                Err(e) => {
                    log::warn!("Loading service {id} for edit failed: {e}");
                    failed.set(true);
                }
            }
        });
    });

    let saved = RwSignal::new(Option::<String>::None);
    let save = save_service_action(editor, session, cache, move |id| {
        notifications.success("Service updated", None);
        saved.set(Some(id));
    });
    Effect::new(move |_| {
        if let Some(id) = saved.get() {
            navigate(&format!("{SERVICES_PATH}/{id}"), NavigateOptions::default());
        }
    });

    let draft = Signal::derive(move || {
        editor.with(|e| e.as_ref().map(|e| e.draft().clone()).unwrap_or_default())
    });
    let errors = Signal::derive(move || {
        editor.with(|e| e.as_ref().map(|e| e.errors().clone()).unwrap_or_default())
    });
    let banner = move || editor.with(|e| e.as_ref().and_then(|e| e.submit_error().map(str::to_string)));
    let saving = move || editor.with(|e| e.as_ref().is_some_and(|e| e.is_saving()));
    let on_change = Callback::new(move |next: ServiceDraft| {
        editor.update(|e| {
            if let Some(e) = e {
                e.replace_draft(next);
            }
        });
    });
    let back_href = move || format!("{SERVICES_PATH}/{}", service_id.get());

    view! {
        <div class="flex flex-col">
            <Show when=move || editor.with(|e| e.is_none())>
                {move || if failed.get() {
                    view! { <ErrorPanel message=LOAD_FAILED_MESSAGE /> }.into_any()
                } else {
                    view! { <LoadingPanel message="Loading service..." /> }.into_any()
                }}
            </Show>

            <Show when=move || editor.with(|e| e.is_some())>
                <div class="mx-auto flex w-full max-w-4xl flex-col gap-6 pb-6">
                    <div>
                        <A href=back_href attr:class="mb-3 inline-block text-[10px] uppercase tracking-wider text-primary hover:text-primary-hover">
                            "← Back to Service"
                        </A>
                        <h1 class="text-xl font-bold uppercase tracking-wider text-text-primary">"Edit Service"</h1>
                        <p class="text-[11px] uppercase tracking-wider text-text-secondary">{move || service_name.get()}</p>
                    </div>
                    <div>
                        <h2 class=SECTION_TITLE_CLASS>"Endpoint Configuration"</h2>
                        <EndpointForm draft=draft errors=errors on_change=on_change connection_test=connection_test />
                    </div>
                    <div>
                        <h2 class=SECTION_TITLE_CLASS>"Monitoring Settings"</h2>
                        <SettingsForm draft=draft errors=errors on_change=on_change />
                    </div>
                    {move || banner().map(|msg| view! {
                        <div class="rounded-lg border border-status-error/30 bg-status-error/5 px-4 py-3">
                            <span class="text-xs tracking-wider text-status-error">{msg}</span>
                        </div>
                    })}
                </div>
            </Show>

            <div class="sticky bottom-0 border-t border-border-light bg-background py-4">
                <div class="mx-auto flex w-full max-w-4xl items-center justify-between">
                    <A
                        href=back_href
                        attr:class="rounded-lg border border-border-light px-6 py-3 text-[10px] font-bold uppercase tracking-wider text-text-secondary hover:border-border hover:text-text-primary"
                    >
                        "← Cancel"
                    </A>
                    <button
                        type="button"
                        class="rounded-lg bg-primary px-8 py-3 text-[10px] font-bold uppercase tracking-wider text-background hover:bg-primary-hover disabled:opacity-40"
                        disabled=move || saving() || editor.with(|e| e.is_none())
                        on:click=move |_| save()
                    >
                        {move || if saving() { "Saving..." } else { "Save Changes ✓" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
