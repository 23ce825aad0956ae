use leptos::prelude::*;

/// A loading spinner component
#[component]
pub fn LoadingSpinner(
    /// Size: "sm", "md", or "lg"
    #[prop(default = "md")]
    size: &'static str,
) -> impl IntoView {
    let size_class = match size {
        "sm" => "w-4 h-4",
        "lg" => "w-8 h-8",
        _ => "w-6 h-6",
    };

    view! {
        <div class=format!("{} animate-spin rounded-full border-2 border-border-light border-t-primary", size_class)></div>
    }
}

/// Full-width placeholder while a screen's first fetch is in flight.
#[component]
pub fn LoadingPanel(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-4 py-24 text-text-secondary">
            <LoadingSpinner size="lg" />
            <span class="font-mono text-sm uppercase tracking-widest">{message}</span>
        </div>
    }
}

#[component]
pub fn ErrorPanel(
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-24">
            <div class="px-6 py-4 border border-status-error/40 bg-status-error/10 rounded text-status-error font-mono text-sm">
                {message}
            </div>
        </div>
    }
}

/// Centered title and hint, with optional call to action below.
#[component]
pub fn EmptyState(
    #[prop(into)]
    title: String,
    #[prop(into, optional)]
    hint: String,
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-16 text-center">
            <div class="w-12 h-12 rounded-full border border-border-light flex items-center justify-center text-text-muted">
                "∅"
            </div>
            <p class="text-text-primary font-semibold">{title}</p>
            {(!hint.is_empty()).then(|| view! {
                <p class="text-text-muted text-sm max-w-md">{hint}</p>
            })}
            {children.map(|c| c())}
        </div>
    }
}
