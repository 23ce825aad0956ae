//! REST paths, relative to the configured API base URL.

pub const AUTH_REGISTER: &str = "/api/auth/register";
pub const AUTH_LOGIN: &str = "/api/auth/login";
pub const AUTH_ME: &str = "/api/auth/me";

pub const DASHBOARD_OVERVIEW: &str = "/api/dashboard/overview";

pub const SERVICES: &str = "/api/services";
pub const SERVICES_TEST: &str = "/api/services/test";

pub const SYSTEM_STATUS: &str = "/api/system/status";
pub const SYSTEM_HEALTH: &str = "/api/system/health";

pub fn service(id: &str) -> String {
    format!("{SERVICES}/{id}")
}

pub fn service_pause(id: &str) -> String {
    format!("{SERVICES}/{id}/pause")
}

pub fn service_resume(id: &str) -> String {
    format!("{SERVICES}/{id}/resume")
}

pub fn service_manual_test(id: &str) -> String {
    format!("{SERVICES}/{id}/test")
}
