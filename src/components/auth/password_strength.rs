use leptos::prelude::*;

use crate::services::metrics::{password_strength, StrengthLevel};

const BAR_COUNT: usize = 4;

/// Four bars, the level label and one row per requirement.
#[component]
pub fn PasswordStrengthMeter(#[prop(into)] password: Signal<String>) -> impl IntoView {
    let strength = Memo::new(move |_| password.with(|pw| password_strength(pw)));

    view! {
        <div class="flex flex-col gap-2">
            <div class="flex items-center gap-2">
                <div class="flex flex-1 gap-1">
                    {(0..BAR_COUNT).map(|i| view! {
                        <div class=move || {
                            let s = strength.get();
                            let fill = if i < s.passed_count { s.level.bar_class() } else { StrengthLevel::None.bar_class() };
                            format!("h-1 flex-1 rounded {fill}")
                        }></div>
                    }).collect_view()}
                </div>
                <span class="text-[10px] font-mono text-text-muted">
                    {move || format!("LEVEL_{}", strength.get().level.label())}
                </span>
            </div>
            <ul class="grid grid-cols-2 gap-1 text-[10px] font-mono">
                {move || strength.get().requirements.into_iter().map(|req| {
                    let (class, mark) = if req.passed {
                        ("text-status-success", "[x] ")
                    } else {
                        ("text-text-muted", "[ ] ")
                    };
                    view! { <li class=class>{mark}{req.label}</li> }
                }).collect_view()}
            </ul>
        </div>
    }
}
