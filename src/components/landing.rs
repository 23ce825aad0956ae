//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::services::session::use_session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqCategory {
    All,
    Pricing,
    Technical,
    Security,
}

impl FaqCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FaqCategory::All => "All",
            FaqCategory::Pricing => "Pricing",
            FaqCategory::Technical => "Technical",
            FaqCategory::Security => "Security",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::All, Self::Pricing, Self::Technical, Self::Security]
    }
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
    pub categories: &'static [FaqCategory],
}

pub const FAQ_ITEMS: [FaqItem; 4] = [
    FaqItem {
        question: "What protocols can I monitor?",
        answer: "WatchDog supports HTTP and HTTPS endpoints. You can configure GET, POST, PUT, PATCH and DELETE requests with custom headers and request bodies.",
        categories: &[FaqCategory::Technical],
    },
    FaqItem {
        question: "How often are health checks performed?",
        answer: "Check intervals are configured per service, from 15 seconds up to one hour. Each service is checked independently at its own interval.",
        categories: &[FaqCategory::Technical],
    },
    FaqItem {
        question: "What metrics are tracked?",
        answer: "For each service we track uptime percentage, average response time, status codes and success/failure counts, and keep a log of every health check with timestamps.",
        categories: &[FaqCategory::Technical],
    },
    FaqItem {
        question: "Does it support alerts or notifications?",
        answer: "Alerting is not available yet. The dashboard gives real-time visibility into service health, response times and error logs.",
        categories: &[FaqCategory::Pricing, FaqCategory::Technical],
    },
];

/// Indices of the FAQ entries visible under `category` whose question or
/// answer contains `query`, case-insensitively.
pub fn filter_faq(category: FaqCategory, query: &str) -> Vec<usize> {
    let needle = query.trim().to_lowercase();
    FAQ_ITEMS
        .iter()
        .enumerate()
        .filter(|(_, item)| category == FaqCategory::All || item.categories.contains(&category))
        .filter(|(_, item)| {
            needle.is_empty()
                || item.question.to_lowercase().contains(&needle)
                || item.answer.to_lowercase().contains(&needle)
        })
        .map(|(i, _)| i)
        .collect()
}

const STATS: [(&str, &str); 4] = [
    ("30s", "Check Interval"),
    ("142 ms", "Avg Response"),
    ("99.2 %", "Uptime Tracked"),
    ("HTTP", "Protocol Support"),
];

const FEATURES: [(&str, &str, &str); 6] = [
    ("◉", "Endpoint Monitoring", "Monitor any HTTP/HTTPS endpoint with configurable check intervals. Track status codes and response times in real-time."),
    ("◷", "Health Check Logs", "Complete history of every health check with timestamps, status codes, and response times for troubleshooting."),
    ("▮", "Uptime Tracking", "Track uptime percentage over time with detailed metrics showing success rates and failure counts."),
    ("≡", "Custom Configuration", "Configure HTTP methods, headers, request bodies, expected status codes, and failure thresholds per service."),
    ("⚑", "Service Diagnostics", "View recent check logs and error history in a clean dashboard. Quickly identify when and why services went down."),
    ("{}", "REST API", "Full REST API for programmatic access to create, update, pause, resume, and delete monitored services."),
];

const STEPS: [(&str, &str); 3] = [
    ("Add Your Endpoint", "Enter your URL, configure method and check interval."),
    ("We Check Continuously", "Automated health checks at your chosen interval."),
    ("View Status Dashboard", "Monitor uptime, response times, and error logs."),
];

const FOOTER_COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Product", ["Features", "Dashboard", "FAQ"]),
    ("Resources", ["Documentation", "REST API", "Status"]),
    ("Company", ["About", "Open Source", "MIT License"]),
];

const SECTION_BADGE_CLASS: &str = "text-[10px] font-bold uppercase tracking-widest text-primary";

#[component]
fn LandingNavbar(#[prop(into)] cta_href: Signal<String>) -> impl IntoView {
    view! {
        <header class="fixed left-0 right-0 top-0 z-50 flex items-center justify-between bg-background/80 px-6 py-4 backdrop-blur md:px-10">
            <A href="/" attr:class="flex items-center gap-2.5">
                <div class="flex h-10 w-10 items-center justify-center rounded-lg border border-primary/30 bg-primary/10 text-primary">
                    "◉"
                </div>
                <span class="text-lg font-bold uppercase tracking-wider text-text-primary">"WatchDog"</span>
            </A>
            <nav class="hidden items-center gap-8 md:flex">
                <a href="#features" class="text-[11px] font-bold uppercase tracking-widest text-text-secondary hover:text-text-primary">"Features"</a>
                <a href="#how-it-works" class="text-[11px] font-bold uppercase tracking-widest text-text-secondary hover:text-text-primary">"How It Works"</a>
                <a href="#faq" class="text-[11px] font-bold uppercase tracking-widest text-text-secondary hover:text-text-primary">"FAQ"</a>
            </nav>
            <div class="flex items-center gap-3">
                <A href="/login" attr:class="hidden text-sm font-semibold text-text-secondary hover:text-text-primary sm:block">
                    "Sign In"
                </A>
                <A
                    href=move || cta_href.get()
                    attr:class="rounded-lg border border-primary px-5 py-2 text-[11px] font-bold uppercase tracking-wider text-primary hover:bg-primary hover:text-background"
                >
                    "Start Free"
                </A>
            </div>
        </header>
    }
}

#[component]
fn HeroSection(#[prop(into)] cta_href: Signal<String>, #[prop(into)] cta_label: Signal<&'static str>) -> impl IntoView {
    view! {
        <section class="flex flex-col items-center justify-center gap-8 px-4 pb-16 pt-36 text-center">
            <span class=SECTION_BADGE_CLASS>"Uptime Monitoring"</span>
            <h1 class="text-4xl font-bold text-text-primary md:text-5xl">"Monitor Central"</h1>
            <p class="max-w-lg text-lg text-text-secondary">
                "Real-time uptime monitoring for your infrastructure. Never miss a downtime."
            </p>
            <div class="flex gap-4">
                <A
                    href=move || cta_href.get()
                    attr:class="flex items-center gap-2 rounded-lg bg-primary px-6 py-3 font-semibold text-background hover:bg-primary-hover"
                >
                    {move || cta_label.get()}
                    " →"
                </A>
                <A
                    href="/login"
                    attr:class="flex items-center gap-2 rounded-lg border border-border-light px-6 py-3 font-semibold text-text-primary hover:border-status-info hover:bg-status-info/5"
                >
                    "Go to Login →"
                </A>
            </div>
        </section>
    }
}

#[component]
fn StatsSection() -> impl IntoView {
    view! {
        <section class="mx-auto grid w-full max-w-5xl grid-cols-2 gap-4 px-4 py-12 md:grid-cols-4">
            {STATS.into_iter().map(|(value, label)| view! {
                <div class="rounded-lg border border-border-light bg-surface p-6 text-center">
                    <p class="font-mono text-2xl font-bold text-primary">{value}</p>
                    <p class="mt-1 text-[10px] uppercase tracking-widest text-text-secondary">{label}</p>
                </div>
            }).collect_view()}
        </section>
    }
}

#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="mx-auto w-full max-w-5xl px-4 py-16">
            <div class="mb-10 text-center">
                <span class=SECTION_BADGE_CLASS>"Features"</span>
                <h2 class="mt-2 text-3xl font-bold text-text-primary">"Everything you need to stay up"</h2>
            </div>
            <div class="grid grid-cols-1 gap-4 md:grid-cols-3">
                {FEATURES.into_iter().map(|(icon, title, description)| view! {
                    <div class="rounded-lg border border-border-light bg-surface p-6 hover:border-primary/40">
                        <div class="mb-4 flex h-10 w-10 items-center justify-center rounded-lg bg-primary/10 text-primary">{icon}</div>
                        <h3 class="mb-2 text-sm font-bold uppercase tracking-wider text-text-primary">{title}</h3>
                        <p class="text-sm text-text-secondary">{description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="how-it-works" class="mx-auto w-full max-w-5xl px-4 py-16">
            <div class="mb-10 text-center">
                <span class=SECTION_BADGE_CLASS>"How It Works"</span>
                <h2 class="mt-2 text-3xl font-bold text-text-primary">"3 Simple Steps"</h2>
            </div>
            <div class="grid grid-cols-1 gap-6 md:grid-cols-3">
                {STEPS.into_iter().enumerate().map(|(i, (title, description))| view! {
                    <div class="flex flex-col gap-3 rounded-lg border border-border-light bg-surface p-6">
                        <span class="font-mono text-3xl font-bold text-primary/60">{format!("0{}", i + 1)}</span>
                        <h3 class="text-sm font-bold uppercase tracking-wider text-text-primary">{title}</h3>
                        <p class="text-sm text-text-secondary">{description}</p>
                    </div>
                }).collect_view()}
            </div>
            <div class="mx-auto mt-10 max-w-xl rounded-lg border border-border-light bg-surface p-4 font-mono text-xs text-text-secondary">
                <p class="text-primary">"$ monitor init"</p>
                <p>"? Enter Endpoint URL: https://api.example.com/health"</p>
                <p class="text-text-muted">"// validating handshake..."</p>
                <p class="text-status-success">"✓ 200 OK in 142ms"</p>
            </div>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let category = RwSignal::new(FaqCategory::All);
    let query = RwSignal::new(String::new());
    let open = RwSignal::new(Some(0usize));
    let visible = Memo::new(move |_| query.with(|q| filter_faq(category.get(), q)));

    view! {
        <section id="faq" class="mx-auto w-full max-w-3xl px-4 py-16">
            <div class="mb-8 text-center">
                <span class=SECTION_BADGE_CLASS>"FAQ"</span>
                <h2 class="mt-2 text-3xl font-bold text-text-primary">"Questions"</h2>
            </div>
            <div class="mb-6 flex flex-col gap-3 sm:flex-row sm:items-center sm:justify-between">
                <div class="flex gap-2">
                    {FaqCategory::all().into_iter().map(|c| view! {
                        <button
                            type="button"
                            class=move || if category.get() == c {
                                "rounded border border-primary bg-primary/10 px-3 py-1 text-[10px] font-bold uppercase tracking-wider text-primary"
                            } else {
                                "rounded border border-border-light px-3 py-1 text-[10px] font-bold uppercase tracking-wider text-text-secondary hover:text-text-primary"
                            }
                            on:click=move |_| category.set(c)
                        >
                            {c.label()}
                        </button>
                    }).collect_view()}
                </div>
                <input
                    type="text"
                    placeholder="Search questions..."
                    class="rounded border border-border-light bg-surface px-3 py-1.5 text-xs text-text-primary placeholder:text-text-muted focus:border-primary focus:outline-none"
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>
            <div class="flex flex-col gap-2">
                {move || {
                    let indices = visible.get();
                    if indices.is_empty() {
                        return view! {
                            <p class="py-8 text-center text-sm text-text-muted">"No questions match your search."</p>
                        }.into_any();
                    }
                    indices.into_iter().map(|i| {
                        let item = &FAQ_ITEMS[i];
                        let is_open = move || open.get() == Some(i);
                        view! {
                            <div class="rounded-lg border border-border-light bg-surface">
                                <button
                                    type="button"
                                    class="flex w-full items-center justify-between px-5 py-4 text-left text-sm font-semibold text-text-primary"
                                    on:click=move |_| open.update(|o| *o = if *o == Some(i) { None } else { Some(i) })
                                >
                                    {item.question}
                                    <span class="text-primary">{move || if is_open() { "−" } else { "+" }}</span>
                                </button>
                                <Show when=is_open>
                                    <p class="px-5 pb-4 text-sm text-text-secondary">{item.answer}</p>
                                </Show>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </section>
    }
}

#[component]
fn FooterSection(#[prop(into)] cta_href: Signal<String>) -> impl IntoView {
    view! {
        <footer class="border-t border-border-light px-4 pt-16 pb-8">
            <div class="mx-auto flex max-w-5xl flex-col gap-12">
                <div class="flex flex-col items-center gap-4 text-center">
                    <h2 class="text-2xl font-bold text-text-primary">"Start monitoring in 60 Seconds"</h2>
                    <p class="font-mono text-[11px] text-text-muted">"// CREDIT_CARD_REQUIRED: FALSE"</p>
                    <A
                        href=move || cta_href.get()
                        attr:class="rounded-lg bg-primary px-8 py-3 text-[11px] font-bold uppercase tracking-wider text-background hover:bg-primary-hover"
                    >
                        "Get Started"
                    </A>
                </div>
                <div class="grid grid-cols-3 gap-8">
                    {FOOTER_COLUMNS.into_iter().map(|(title, links)| view! {
                        <div class="flex flex-col gap-2">
                            <h4 class="text-[10px] font-bold uppercase tracking-widest text-text-primary">{title}</h4>
                            {links.into_iter().map(|link| view! {
                                <span class="text-xs text-text-secondary">{link}</span>
                            }).collect_view()}
                        </div>
                    }).collect_view()}
                </div>
                <div class="flex flex-col items-center justify-between gap-2 border-t border-border-light pt-6 font-mono text-[10px] text-text-muted sm:flex-row">
                    <span>"© WatchDog Systems. All Rights Reserved."</span>
                    <span>{format!("Lang: EN-US · v{}", crate::VERSION)}</span>
                </div>
            </div>
        </footer>
    }
}

#[component]
pub fn Landing() -> impl IntoView {
    let session = use_session();
    let cta_href = Signal::derive(move || {
        let path = if session.authenticated.get() { "/dashboard" } else { "/register" };
        path.to_string()
    });
    let cta_label = Signal::derive(move || {
        if session.authenticated.get() { "Go to Dashboard" } else { "Create Account" }
    });

    view! {
        <div class="min-h-screen bg-background text-text-primary">
            <LandingNavbar cta_href=cta_href />
            <main>
                <HeroSection cta_href=cta_href cta_label=cta_label />
                <StatsSection />
                <FeaturesSection />
                <HowItWorksSection />
                <FaqSection />
            </main>
            <FooterSection cta_href=cta_href />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_faq_all_returns_every_entry() {
        assert_eq!(filter_faq(FaqCategory::All, ""), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_filter_faq_by_category() {
        assert_eq!(filter_faq(FaqCategory::Pricing, ""), vec![3]);
        assert!(filter_faq(FaqCategory::Security, "").is_empty());
    }

    #[test]
    fn test_filter_faq_search_is_case_insensitive() {
        assert_eq!(filter_faq(FaqCategory::All, "  PROTOCOLS "), vec![0]);
        assert_eq!(filter_faq(FaqCategory::Technical, "uptime percentage"), vec![2]);
    }
}
