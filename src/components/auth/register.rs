use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::password_strength::PasswordStrengthMeter;
use super::AFTER_AUTH_PATH;
use crate::components::design_system::Input;
use crate::services::payload::RegisterForm;
use crate::services::reconcile::reconcile_registration_error;
use crate::services::session::use_session;
use crate::services::wizard_state::FieldErrors;

#[component]
fn FieldError(errors: RwSignal<FieldErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.get(field).map(|msg| {
                let msg = msg.to_string();
                view! { <span class="text-xs text-status-error font-mono">{msg}</span> }
            })
        })
    }
}

#[component]
pub fn Register() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(FieldErrors::new());
    let banner = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    let form = move || RegisterForm {
        full_name: full_name.get(),
        email: email.get(),
        password: password.get(),
        confirm_password: confirm_password.get(),
    };
    let mismatch = Signal::derive(move || form().passwords_mismatch());
    let can_submit = move || !submitting.get() && form().is_valid();

    let clear_errors = move |_: String| {
        field_errors.set(FieldErrors::new());
        banner.set(None);
    };

    let handle_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        let form = form();
        if submitting.get_untracked() || !form.is_valid() {
            return;
        }
        submitting.set(true);
        banner.set(None);
        field_errors.set(FieldErrors::new());

        let api = session.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.register(&form.to_payload()).await {
                Ok(auth) => {
                    session.sign_in(&auth);
                    navigate(AFTER_AUTH_PATH, Default::default());
                }
                Err(e) => {
                    submitting.set(false);
                    let outcome = reconcile_registration_error(&e);
                    field_errors.set(outcome.field_errors);
                    banner.set(outcome.banner);
                }
            }
        });
    };

    let label_class = "text-xs font-mono uppercase tracking-wider text-text-secondary";

    view! {
        <div class="min-h-screen flex flex-col bg-background">
            <div class="flex-1 flex items-center justify-center px-4 py-12">
                <div class="w-full max-w-md bg-surface border border-border rounded-lg p-8 shadow-2xl">
                    <div class="mb-8">
                        <p class="text-xs font-mono uppercase tracking-widest text-primary">"Signup"</p>
                        <h1 class="mt-1 text-2xl font-bold text-text-primary">"WatchDog"</h1>
                        <p class="mt-2 text-sm text-text-muted">
                            "Create an account to monitor your systems and receive real-time alerts on WatchDog."
                        </p>
                    </div>

                    {move || banner.get().map(|msg| view! {
                        <div class="mb-6 px-4 py-3 border border-status-error/40 bg-status-error/10 rounded text-status-error text-sm font-mono">
                            {msg}
                        </div>
                    })}

                    <form class="flex flex-col gap-5" on:submit=handle_submit>
                        <label class="flex flex-col gap-2">
                            <span class=label_class>"Full Name"</span>
                            <Input
                                value=full_name
                                placeholder="OPERATOR_FULL_NAME"
                                autocomplete="name"
                                invalid=Signal::derive(move || field_errors.with(|e| e.contains("full_name")))
                                on_input=clear_errors
                            />
                            <FieldError errors=field_errors field="full_name" />
                        </label>

                        <label class="flex flex-col gap-2">
                            <span class=label_class>"Email Address"</span>
                            <Input
                                value=email
                                r#type="email"
                                placeholder="operator@system.local"
                                autocomplete="email"
                                invalid=Signal::derive(move || field_errors.with(|e| e.contains("email")))
                                on_input=clear_errors
                            />
                            <FieldError errors=field_errors field="email" />
                        </label>

                        <label class="flex flex-col gap-2">
                            <span class=label_class>"Password"</span>
                            <Input
                                value=password
                                r#type="password"
                                autocomplete="new-password"
                                invalid=Signal::derive(move || field_errors.with(|e| e.contains("password")))
                                on_input=clear_errors
                            />
                            <PasswordStrengthMeter password=password />
                            <FieldError errors=field_errors field="password" />
                        </label>

                        <label class="flex flex-col gap-2">
                            <span class=label_class>"Confirm Password"</span>
                            <Input
                                value=confirm_password
                                r#type="password"
                                autocomplete="new-password"
                                invalid=mismatch
                            />
                            <Show when=move || mismatch.get()>
                                <span class="text-xs text-status-error font-mono">"PASSWORDS DO NOT MATCH"</span>
                            </Show>
                        </label>

                        <button
                            type="submit"
                            class="w-full py-3 rounded bg-primary text-background font-semibold uppercase tracking-widest hover:bg-primary-hover disabled:opacity-50 disabled:cursor-not-allowed"
                            disabled=move || !can_submit()
                        >
                            {move || if submitting.get() { "Processing..." } else { "Signup" }}
                        </button>
                    </form>

                    <p class="mt-6 text-center text-sm text-text-muted">
                        "Already have an account? "
                        <A href="/login" attr:class="text-primary hover:underline">"Sign In"</A>
                    </p>
                </div>
            </div>
            <footer class="py-4 text-center text-xs font-mono text-text-muted">"© 2026 WatchDog"</footer>
        </div>
    }
}
