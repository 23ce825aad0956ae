use leptos::ev;
use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full h-9 px-3 rounded border bg-background font-mono text-sm text-text-primary placeholder-text-muted outline-none transition-colors focus:ring-1";

/// Text field bound to a string signal. `on_input` fires after the signal is written.
#[component]
pub fn Input(
    value: RwSignal<String>,
    #[prop(into, optional)]
    placeholder: Signal<String>,
    #[prop(into, optional)]
    on_input: Option<Callback<String>>,
    /// Error border, e.g. while a field error is shown
    #[prop(into, default = false.into())]
    invalid: Signal<bool>,
    /// `text` when empty
    #[prop(into, optional)]
    r#type: Signal<String>,
    #[prop(into, optional)]
    autocomplete: String,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let input_type = move || {
        let kind = r#type.get();
        if kind.is_empty() { "text".to_string() } else { kind }
    };

    let border_class = move || {
        let tone = if invalid.get() {
            "border-status-error focus:ring-status-error"
        } else {
            "border-border focus:border-primary focus:ring-primary"
        };
        format!("{INPUT_CLASS} {tone} {class}")
    };

    let handle_input = move |evt: ev::Event| {
        let text = event_target_value(&evt);
        value.set(text.clone());
        if let Some(callback) = on_input {
            callback.run(text);
        }
    };

    view! {
        <input
            type=input_type
            class=border_class
            autocomplete=autocomplete
            placeholder=move || placeholder.get()
            prop:value=move || value.get()
            on:input=handle_input
        />
    }
}
