pub mod app_shell;
pub mod require_auth;

pub use app_shell::{AppShell, Sidebar, StatusFooter, TopBar};
pub use require_auth::{Protected, RequireAuth};
