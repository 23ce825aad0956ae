use leptos::ev;
use leptos::prelude::*;

/// Dropdown over fixed `(value, label)` pairs.
#[component]
pub fn Select(
    #[prop(into)]
    value: Signal<String>,
    options: &'static [(&'static str, &'static str)],
    on_change: Callback<String>,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let handle_change = move |evt: ev::Event| {
        let select = event_target::<web_sys::HtmlSelectElement>(&evt);
        on_change.run(select.value());
    };

    view! {
        <select
            class=format!("h-9 rounded border border-border bg-background px-3 font-mono text-sm text-text-primary focus:border-primary focus:outline-none {class}")
            prop:value=move || value.get()
            on:change=handle_change
        >
            {options.iter().map(|(option, label)| view! {
                <option value=*option>{*label}</option>
            }).collect_view()}
        </select>
    }
}
