use leptos::prelude::*;

/// A bordered panel on the surface colour
#[component]
pub fn Card(
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "bg-surface border border-border rounded-lg overflow-hidden";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Card header section with distinct background
#[component]
pub fn CardHeader(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class =
        "px-4 py-3 bg-surface-raised/50 border-b border-border flex justify-between items-center";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

#[component]
pub fn CardBody(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "p-4";
    let full_class = format!("{base_class} {class}");

    view! {
        <div class=full_class>
            {children()}
        </div>
    }
}

/// Upper-case monospace section title
#[component]
pub fn CardTitle(
    #[prop(into, optional)]
    class: String,
    children: Children,
) -> impl IntoView {
    let base_class = "text-xs font-mono font-semibold uppercase tracking-widest text-text-secondary";
    let full_class = format!("{base_class} {class}");

    view! {
        <h3 class=full_class>
            {children()}
        </h3>
    }
}
