pub mod layout_state;
pub mod metrics;
pub mod notification_service;
pub mod payload;
pub mod query_cache;
pub mod reconcile;
pub mod service_actions;
pub mod session;
pub mod storage;
pub mod timers;
pub mod wizard_state;
