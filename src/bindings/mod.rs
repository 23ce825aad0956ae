pub mod auth;
pub mod core;
pub mod dashboard;
pub mod endpoints;
pub mod envelope;
pub mod services;

#[cfg(test)]
mod tests;

pub use auth::*;
pub use self::core::*;
pub use dashboard::*;
pub use envelope::*;
pub use services::*;
