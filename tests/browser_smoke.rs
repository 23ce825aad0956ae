//! Browser smoke tests: global state and screens that need a DOM.

#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use leptos_router::components::Router;
use wasm_bindgen_test::*;
use watchdog_frontend::components::landing::Landing;
use watchdog_frontend::config::{provide_app_config, AppConfig};
use watchdog_frontend::services::layout_state::LayoutState;
use watchdog_frontend::services::notification_service::{NotificationState, ToastType};
use watchdog_frontend::services::session::provide_session;

wasm_bindgen_test_configure!(run_in_browser);

// ============================================================================
// Notification State
// ============================================================================

#[wasm_bindgen_test]
fn test_notification_add_and_remove() {
    let state = NotificationState::new();
    let id = state.add(ToastType::Success, "Service created".to_string(), None);
    state.error("Failed", Some("details"));
    assert_eq!(state.notifications.with(|n| n.len()), 2);

    state.remove(id);
    let remaining = state.notifications.get();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].toast_type, ToastType::Error);
    assert_eq!(remaining[0].message.as_deref(), Some("details"));
}

// ============================================================================
// Layout State
// ============================================================================

#[wasm_bindgen_test]
fn test_sidebar_toggle() {
    let layout = LayoutState::new();
    assert!(layout.sidebar_open.get());
    layout.toggle_sidebar();
    assert!(!layout.sidebar_open.get());
    layout.record_failure();
    assert!(layout.sync_failed.get());
}

// ============================================================================
// Landing
// ============================================================================

#[wasm_bindgen_test]
fn test_landing_mounts_without_session() {
    leptos::mount::mount_to_body(|| {
        let config = AppConfig::default();
        provide_session(&config);
        provide_app_config(config);

        view! {
            <Router>
                <Landing />
            </Router>
        }
    });

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("browser document");
    let faq = document.get_element_by_id("faq");
    assert!(faq.is_some(), "FAQ section rendered");
}
