use leptos::prelude::*;

use crate::utils::formatting::{page_numbers, page_range, PageItem};

const NAV_BUTTON_CLASS: &str = "h-8 px-3 rounded border border-border-light text-[10px] font-bold uppercase tracking-wider text-text-secondary hover:bg-surface-hover disabled:opacity-40 disabled:cursor-not-allowed";

#[component]
pub fn Pagination(
    page: u32,
    total_pages: u32,
    total: u32,
    limit: u32,
    on_page_change: Callback<u32>,
) -> impl IntoView {
    let (from, to) = page_range(page, limit, total as u64);
    let at_first = page <= 1;
    let at_last = page >= total_pages;

    view! {
        <div class="flex flex-col items-center justify-between gap-3 sm:flex-row">
            <span class="text-[11px] text-text-muted">
                {format!("Showing {from} to {to} of {total} services")}
            </span>
            <div class="flex items-center gap-1">
                <button
                    type="button"
                    class=NAV_BUTTON_CLASS
                    disabled=at_first
                    on:click=move |_| on_page_change.run(page.saturating_sub(1).max(1))
                >
                    "Prev"
                </button>
                {page_numbers(page, total_pages).into_iter().map(|item| match item {
                    PageItem::Gap => view! {
                        <span class="px-2 text-text-muted">"..."</span>
                    }.into_any(),
                    PageItem::Page(n) => {
                        let state = if n == page {
                            "border-primary bg-primary/10 text-primary"
                        } else {
                            "border-border-light text-text-secondary hover:bg-surface-hover"
                        };
                        view! {
                            <button
                                type="button"
                                class=format!("h-8 min-w-8 px-2 rounded border font-mono text-[11px] {state}")
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n.to_string()}
                            </button>
                        }.into_any()
                    }
                }).collect_view()}
                <button
                    type="button"
                    class=NAV_BUTTON_CLASS
                    disabled=at_last
                    on:click=move |_| on_page_change.run(page + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
