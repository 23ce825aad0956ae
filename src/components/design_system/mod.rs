//! Design System Components for Leptos
//!
//! Reusable UI pieces shared by every screen.

mod button;
mod card;
mod confirm_dialog;
mod input;
mod loading;
mod select;
mod toast;

#[cfg(test)]
mod tests;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardBody, CardHeader, CardTitle};
pub use confirm_dialog::ConfirmDialog;
pub use input::Input;
pub use loading::{EmptyState, ErrorPanel, LoadingPanel, LoadingSpinner};
pub use select::Select;
pub use toast::{Toast, ToastContainer};
