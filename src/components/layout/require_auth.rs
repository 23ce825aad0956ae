use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use super::app_shell::AppShell;
use crate::services::session::{use_session, LOGIN_PATH};

/// Session gate. Without an access credential the route is replaced by `/login`.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    // Another tab may have logged out since this one loaded
    session.sync();

    Effect::new(move |_| {
        if !session.authenticated.get() {
            log::info!("No session; redirecting to {LOGIN_PATH}");
            navigate(
                LOGIN_PATH,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || session.authenticated.get()>
            {children()}
        </Show>
    }
}

/// A gated screen inside the application shell.
#[component]
pub fn Protected(children: ChildrenFn) -> impl IntoView {
    view! {
        <RequireAuth>
            {
                let children = children.clone();
                view! {
                    <AppShell>
                        {children()}
                    </AppShell>
                }
            }
        </RequireAuth>
    }
}
