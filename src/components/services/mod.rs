//! Service management screens: list, create wizard, detail and edit.

pub mod detail_panels;
pub mod forms;
pub mod pagination;
pub mod service_detail;
pub mod service_edit;
pub mod service_wizard;
pub mod services_list;
pub mod services_table;

pub use forms::{EndpointForm, SettingsForm};
pub use service_detail::{ServiceDetail, SERVICES_PATH};
pub use service_edit::ServiceEdit;
pub use service_wizard::ServiceWizard;
pub use services_list::{ServicesList, ServicesStats};
