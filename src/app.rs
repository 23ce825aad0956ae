use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::auth::{Login, Register};
use crate::components::dashboard::Dashboard;
use crate::components::design_system::ToastContainer;
use crate::components::landing::Landing;
use crate::components::layout::Protected;
use crate::components::services::{ServiceDetail, ServiceEdit, ServiceWizard, ServicesList};
use crate::config::{provide_app_config, AppConfig};
use crate::services::layout_state::provide_layout_state;
use crate::services::notification_service::provide_notification_state;
use crate::services::query_cache::provide_query_invalidation;
use crate::services::session::provide_session;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col items-center justify-center gap-4 bg-background text-center">
            <span class="font-mono text-5xl font-bold text-primary">"404"</span>
            <p class="text-sm uppercase tracking-wider text-text-secondary">"Page Not Found"</p>
            <A href="/" attr:class="text-[11px] font-bold uppercase tracking-wider text-primary hover:text-primary-hover">
                "← Back to Home"
            </A>
        </div>
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide global services
    provide_session(&config);
    provide_app_config(config);
    provide_notification_state();
    provide_query_invalidation();
    provide_layout_state();

    view! {
        <Router>
            <ToastContainer />
            <Routes fallback=NotFound>
                <Route path=path!("/") view=Landing />
                <Route path=path!("/login") view=Login />
                <Route path=path!("/register") view=Register />
                <Route path=path!("/dashboard") view=|| view! { <Protected><Dashboard /></Protected> } />
                <Route path=path!("/services") view=|| view! { <Protected><ServicesList /></Protected> } />
                <Route path=path!("/services/create") view=|| view! { <Protected><ServiceWizard /></Protected> } />
                <Route path=path!("/services/:service_id") view=|| view! { <Protected><ServiceDetail /></Protected> } />
                <Route path=path!("/services/:service_id/edit") view=|| view! { <Protected><ServiceEdit /></Protected> } />
            </Routes>
        </Router>
    }
}
