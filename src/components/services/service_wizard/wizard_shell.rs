//! Wizard Shell Component
//!
//! Main container for the create-service wizard.
//! Owns the wizard context, step navigation and submission.

use leptos::ev;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::review_step::ReviewStep;
use super::step_progress::StepProgress;
use crate::components::services::forms::{EndpointForm, SettingsForm};
use crate::components::services::service_detail::SERVICES_PATH;
use crate::services::notification_service::use_notification_state;
use crate::services::query_cache::use_query_invalidation;
use crate::services::session::use_session;
use crate::services::wizard_state::{
    provide_wizard_context, submit_service_action, use_wizard_context, ServiceDraft, WizardStep,
};

const SECONDARY_BUTTON_CLASS: &str = "flex items-center gap-2 rounded-lg border border-border-light px-6 py-3 text-[10px] font-bold uppercase tracking-wider text-text-secondary transition-colors hover:border-border hover:text-text-primary";
const PRIMARY_BUTTON_CLASS: &str = "flex items-center gap-2 rounded-lg bg-primary px-8 py-3 text-[10px] font-bold uppercase tracking-wider text-background transition-colors hover:bg-primary-hover disabled:opacity-40";

fn shown(class: &str, visible: bool) -> String {
    if visible {
        class.to_string()
    } else {
        format!("{class} hidden")
    }
}

/// Bottom bar: Cancel/Back on the left, Next/Create on the right.
#[component]
fn WizardNavigation<F>(on_submit: F) -> impl IntoView
where
    F: Fn() + Clone + 'static,
{
    let ctx = use_wizard_context();
    let step = Memo::new(move |_| ctx.step());
    let is_first_step = move || step.get().previous().is_none();
    let is_last_step = move || step.get().next().is_none();
    let submitting = move || ctx.wizard.with(|w| w.is_submitting());
    let can_submit = move || ctx.wizard.with(|w| w.can_submit());

    let handle_back = move |_: ev::MouseEvent| ctx.retreat();
    let handle_next = move |_: ev::MouseEvent| {
        if !ctx.advance() {
            log::debug!("Step {:?} has validation errors", ctx.step());
        }
    };
    let handle_submit = move |_: ev::MouseEvent| on_submit();

    view! {
        <div class="sticky bottom-0 border-t border-border-light bg-background px-4 py-4">
            <div class="mx-auto flex w-full max-w-4xl items-center justify-between">
                <div>
                    <A
                        href=SERVICES_PATH
                        attr:class=move || shown(
                            "flex items-center gap-2 text-[10px] font-bold uppercase tracking-wider text-text-secondary transition-colors hover:text-text-primary",
                            is_first_step(),
                        )
                    >
                        "✕ Cancel"
                    </A>
                    <button
                        type="button"
                        class=move || shown(SECONDARY_BUTTON_CLASS, !is_first_step())
                        on:click=handle_back
                    >
                        "← Back"
                    </button>
                </div>

                <div>
                    <button
                        type="button"
                        class=move || shown(PRIMARY_BUTTON_CLASS, !is_last_step())
                        on:click=handle_next
                    >
                        "Next Step →"
                    </button>
                    <button
                        type="button"
                        class=move || shown(PRIMARY_BUTTON_CLASS, is_last_step())
                        disabled=move || !can_submit()
                        on:click=handle_submit
                    >
                        {move || if submitting() { "Creating..." } else { "Create Service ✓" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Error display component
#[component]
fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="rounded-lg border border-status-error/30 bg-status-error/5 px-4 py-3">
                <span class="text-xs tracking-wider text-status-error">
                    {move || message.get().unwrap_or_default()}
                </span>
            </div>
        </Show>
    }
}

/// Step content renderer
#[component]
fn StepContent() -> impl IntoView {
    let ctx = use_wizard_context();
    // Forms keep their local state while the user types.
    let step = Memo::new(move |_| ctx.step());

    let draft = Signal::derive(move || ctx.draft());
    let errors = Signal::derive(move || ctx.errors());
    let on_change = Callback::new(move |next: ServiceDraft| ctx.replace_draft(next));

    view! {
        {move || match step.get() {
            WizardStep::Endpoint => view! {
                <EndpointForm
                    draft=draft
                    errors=errors
                    on_change=on_change
                    connection_test=ctx.connection_test
                />
            }.into_any(),
            WizardStep::Settings => view! {
                <SettingsForm draft=draft errors=errors on_change=on_change />
            }.into_any(),
            WizardStep::Confirm => view! { <ReviewStep /> }.into_any(),
        }}
    }
}

/// Main wizard shell component
#[component]
pub fn ServiceWizard() -> impl IntoView {
    provide_wizard_context();
    let ctx = use_wizard_context();
    let session = use_session();
    let cache = use_query_invalidation();
    let notifications = use_notification_state();
    let navigate = use_navigate();

    let created = RwSignal::new(false);
    let submit = submit_service_action(ctx, session, cache, move |response| {
        notifications.success("Service created", Some(&response.service_name));
        created.set(true);
    });
    Effect::new(move |_| {
        if created.get() {
            navigate(SERVICES_PATH, NavigateOptions::default());
        }
    });

    let current = Signal::derive(move || ctx.step());
    let submit_error = Signal::derive(move || ctx.wizard.with(|w| w.submit_error().map(str::to_string)));

    view! {
        <div class="flex flex-1 flex-col overflow-y-auto">
            <div class="mx-auto flex w-full max-w-4xl flex-1 flex-col gap-6 p-4 pb-6">
                <StepProgress current=current />
                <div class="flex-1">
                    <StepContent />
                </div>
                <ErrorBanner message=submit_error />
            </div>
            <WizardNavigation on_submit=submit />
        </div>
    }
}
