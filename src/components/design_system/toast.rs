use leptos::prelude::*;

use crate::services::notification_service::{
    use_notification_state, Notification, ToastType,
};

#[component]
pub fn ToastContainer() -> impl IntoView {
    let state = use_notification_state();

    view! {
        <div class="fixed bottom-4 right-4 z-50 flex flex-col gap-2 pointer-events-none">
            {move || state.notifications.get().into_iter().map(|notification| {
                view! {
                    <Toast notification=notification />
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn Toast(notification: Notification) -> impl IntoView {
    let state = use_notification_state();
    let (is_exiting, set_is_exiting) = signal(false);
    let id = notification.id;

    let close = move || {
        set_is_exiting.set(true);
        // Wait for the slide-out before dropping it
        set_timeout(
            move || state.remove(id),
            std::time::Duration::from_millis(300),
        );
    };

    let icon = match notification.toast_type {
        ToastType::Success => "✓",
        ToastType::Error => "⚠",
        ToastType::Info => "i",
    };
    let accent = notification.toast_type.accent_class();

    view! {
        <div
            class=move || format!(
                "pointer-events-auto min-w-[300px] max-w-md p-4 rounded bg-surface border border-border border-l-4 shadow-lg flex gap-3 transition-all duration-300 transform {} {}",
                accent,
                if is_exiting.get() { "translate-x-full opacity-0" } else { "translate-x-0 opacity-100" }
            )
            role="alert"
        >
            <div class="flex-shrink-0 font-mono font-bold">{icon}</div>
            <div class="flex-1 flex flex-col gap-1">
                <div class="font-medium text-text-primary">{notification.title}</div>
                {notification.message.map(|msg| view! {
                    <div class="text-sm text-text-muted break-words">{msg}</div>
                })}
            </div>
            <button
                type="button"
                class="flex-shrink-0 text-text-muted hover:text-text-primary self-start -mt-1 -mr-1"
                on:click=move |_| close()
                aria-label="Close"
            >
                "×"
            </button>
        </div>
    }
}
