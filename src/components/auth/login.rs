use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::AFTER_AUTH_PATH;
use crate::components::design_system::Input;
use crate::services::payload::LoginForm;
use crate::services::reconcile::login_error_message;
use crate::services::session::use_session;

#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let show_password = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let submitting = RwSignal::new(false);

    let form = move || LoginForm {
        email: email.get(),
        password: password.get(),
        remember_me: remember_me.get(),
    };
    let can_submit = move || !submitting.get() && form().is_valid();

    let handle_submit = move |evt: ev::SubmitEvent| {
        evt.prevent_default();
        let form = form();
        if submitting.get_untracked() || !form.is_valid() {
            return;
        }
        submitting.set(true);
        error.set(None);

        let api = session.api();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api.login(&form.to_payload()).await {
                Ok(auth) => {
                    session.sign_in(&auth);
                    navigate(AFTER_AUTH_PATH, Default::default());
                }
                Err(e) => {
                    submitting.set(false);
                    error.set(login_error_message(&e));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-background px-4">
            <div class="w-full max-w-md bg-surface border border-border rounded-lg p-8 shadow-2xl">
                <div class="mb-8 text-center">
                    <h1 class="text-2xl font-bold tracking-widest uppercase text-text-primary">"System Access"</h1>
                    <p class="mt-2 text-sm text-text-muted">"Enter your credentials to continue"</p>
                </div>

                {move || error.get().map(|msg| view! {
                    <div class="mb-6 px-4 py-3 border border-status-error/40 bg-status-error/10 rounded text-status-error text-sm font-mono">
                        {msg}
                    </div>
                })}

                <form class="flex flex-col gap-5" on:submit=handle_submit>
                    <label class="flex flex-col gap-2">
                        <span class="text-xs font-mono uppercase tracking-wider text-text-secondary">"Email Address"</span>
                        <Input
                            value=email
                            r#type="email"
                            placeholder="user@monitor.central"
                            autocomplete="email"
                        />
                    </label>

                    <label class="flex flex-col gap-2">
                        <span class="text-xs font-mono uppercase tracking-wider text-text-secondary">"Password"</span>
                        <div class="relative">
                            <Input
                                value=password
                                r#type=Signal::derive(move || {
                                    if show_password.get() { "text".to_string() } else { "password".to_string() }
                                })
                                autocomplete="current-password"
                                class="pr-16"
                            />
                            <button
                                type="button"
                                class="absolute inset-y-0 right-3 text-xs font-mono uppercase text-text-muted hover:text-primary"
                                on:click=move |_| show_password.update(|v| *v = !*v)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </label>

                    <label class="flex items-center gap-2 text-sm text-text-secondary">
                        <input
                            type="checkbox"
                            class="accent-primary"
                            prop:checked=move || remember_me.get()
                            on:change=move |evt| remember_me.set(event_target_checked(&evt))
                        />
                        "Remember me"
                    </label>

                    <button
                        type="submit"
                        class="w-full py-3 rounded bg-primary text-background font-semibold uppercase tracking-widest hover:bg-primary-hover disabled:opacity-50 disabled:cursor-not-allowed"
                        disabled=move || !can_submit()
                    >
                        {move || if submitting.get() { "Authenticating..." } else { "Login" }}
                    </button>
                </form>

                <p class="mt-6 text-center text-sm text-text-muted">
                    "Don't have an account? "
                    <A href="/register" attr:class="text-primary hover:underline">"Sign Up"</A>
                </p>
            </div>
        </div>
    }
}
