use leptos::prelude::*;

use super::button::{Button, ButtonVariant};

/// Modal confirmation for destructive actions. Rendered only while `open` is set.
#[component]
pub fn ConfirmDialog(
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    #[prop(into, default = "Confirm".to_string())]
    confirm_label: String,
    /// Disables both buttons while the action is in flight
    #[prop(into, default = false.into())]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let confirm_label = StoredValue::new(confirm_label);

    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-40 flex items-center justify-center bg-black/70 backdrop-blur-sm">
                <div
                    class="w-full max-w-md mx-4 bg-surface border border-border rounded-lg shadow-2xl"
                    role="dialog"
                    aria-modal="true"
                >
                    <div class="px-6 pt-6">
                        <h2 class="text-lg font-semibold text-text-primary">{title.get_value()}</h2>
                        <p class="mt-2 text-sm text-text-secondary">{move || message.get()}</p>
                    </div>
                    <div class="flex justify-end gap-3 px-6 py-4 mt-4 border-t border-border">
                        <Button
                            variant=ButtonVariant::Ghost
                            disabled=busy
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            variant=ButtonVariant::Danger
                            loading=busy
                            on_click=move |_| on_confirm.run(())
                        >
                            {confirm_label.get_value()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
