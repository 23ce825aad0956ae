use super::loading::LoadingSpinner;
use leptos::ev;
use leptos::prelude::*;

/// Button variant styles
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
    Outline,
}

impl ButtonVariant {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => {
                "bg-primary hover:bg-primary-hover text-background border border-transparent shadow-glow"
            }
            ButtonVariant::Secondary => {
                "bg-surface-raised hover:bg-surface-hover text-text-primary border border-border"
            }
            ButtonVariant::Danger => {
                "bg-status-error/10 hover:bg-status-error/20 text-status-error border border-status-error/40"
            }
            ButtonVariant::Ghost => {
                "bg-transparent hover:bg-white/5 text-text-secondary hover:text-text-primary border border-transparent"
            }
            ButtonVariant::Outline => {
                "bg-transparent border border-border-light text-text-secondary hover:border-primary hover:text-primary"
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub(crate) fn class(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "px-2.5 py-1 text-xs",
            ButtonSize::Md => "px-4 py-2 text-sm",
            ButtonSize::Lg => "px-6 py-3 text-base",
        }
    }
}

/// A styled button component with multiple variants
#[component]
pub fn Button<F>(
    /// The visual variant of the button
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Click handler
    on_click: F,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Shows a spinner and blocks clicks
    #[prop(into, default = false.into())]
    loading: Signal<bool>,
    /// Additional CSS classes
    #[prop(into, optional)]
    class: String,
    /// Title/tooltip text
    #[prop(into, optional)]
    title: String,
    children: Children,
) -> impl IntoView
where
    F: Fn(ev::MouseEvent) + 'static,
{
    let base_class = "rounded transition-all duration-200 inline-flex items-center justify-center gap-2 font-medium uppercase tracking-wide focus:outline-none focus:ring-2 focus:ring-primary/50";
    let variant_class = variant.class();
    let size_class = size.class();

    let is_disabled = move || disabled.get() || loading.get();

    let state_class = move || {
        if is_disabled() {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer active:scale-95"
        }
    };

    let full_class =
        move || format!("{base_class} {variant_class} {size_class} {} {class}", state_class());

    let handle_click = move |evt: ev::MouseEvent| {
        if !is_disabled() {
            on_click(evt);
        }
    };

    view! {
        <button
            type="button"
            class=full_class
            on:click=handle_click
            disabled=is_disabled
            title=title
        >
            {move || loading.get().then(|| view! { <LoadingSpinner size="sm" /> })}
            {children()}
        </button>
    }
}
