//! Create-Service Wizard Components
//!
//! Three-step flow for registering a monitored endpoint:
//! - `ServiceWizard`: shell owning context, navigation and submission
//! - `StepProgress`: step counter, percentage and progress bars
//! - `ReviewStep`: read-only summary with the acknowledgment checkbox
//!
//! The first two steps reuse the controlled forms from `services::forms`.

mod review_step;
mod step_progress;
mod wizard_shell;

pub use review_step::{ReviewStep, ACKNOWLEDGMENT_TEXT};
pub use step_progress::StepProgress;
pub use wizard_shell::ServiceWizard;
