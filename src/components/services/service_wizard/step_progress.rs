//! Step Progress Component
//!
//! Header of the create wizard: position, percentage and one bar per step.

use leptos::prelude::*;

use crate::services::wizard_state::WizardStep;

#[component]
fn StepMarker(step: WizardStep, current: Signal<WizardStep>) -> impl IntoView {
    let is_current = Signal::derive(move || current.get() == step);
    let is_completed = Signal::derive(move || step.index() < current.get().index());
    let reached = Signal::derive(move || step.index() <= current.get().index());

    let circle_class = move || {
        let state = if is_current.get() || is_completed.get() {
            "border-primary bg-primary text-background"
        } else {
            "border-border-light text-text-secondary"
        };
        format!("flex h-5 w-5 items-center justify-center rounded-full border text-[10px] font-bold {state}")
    };

    view! {
        <div class="flex items-center gap-1.5">
            <div class=circle_class>
                {move || if is_completed.get() {
                    "✓".to_string()
                } else {
                    (step.index() + 1).to_string()
                }}
            </div>
            <span class=move || format!(
                "text-[10px] font-bold uppercase tracking-wider {}",
                if reached.get() { "text-primary" } else { "text-text-secondary" },
            )>
                {step.label()}
            </span>
        </div>
    }
}

#[component]
pub fn StepProgress(#[prop(into)] current: Signal<WizardStep>) -> impl IntoView {
    let steps = WizardStep::all();
    let total = steps.len();

    view! {
        <div class="flex flex-col gap-4">
            <div class="flex items-baseline justify-between">
                <div>
                    <span class="text-[10px] font-bold uppercase tracking-wider text-primary">
                        {move || format!("Step {} of {}", current.get().index() + 1, total)}
                    </span>
                    <h2 class="text-xl font-bold uppercase tracking-wider text-text-primary">
                        {move || current.get().label()}
                    </h2>
                    <p class="text-[11px] text-text-muted">{move || current.get().description()}</p>
                </div>
                <span class="font-mono text-2xl font-bold text-primary">
                    {move || format!("{}%", current.get().progress_percent())}
                </span>
            </div>

            <div class="flex gap-1">
                {steps.iter().map(|step| {
                    let step = *step;
                    let width = move || {
                        let filled = step.index() <= current.get().index();
                        format!("width: {}", if filled { "100%" } else { "0%" })
                    };
                    view! {
                        <div class="h-1 flex-1 overflow-hidden rounded-full bg-surface-raised">
                            <div class="h-full rounded-full bg-primary transition-all duration-300" style=width></div>
                        </div>
                    }
                }).collect_view()}
            </div>

            <div class="flex justify-between">
                {steps.into_iter().map(|step| view! { <StepMarker step=step current=current /> }).collect_view()}
            </div>
        </div>
    }
}
