//! Login and registration screens.

mod login;
mod password_strength;
mod register;

pub use login::Login;
pub use password_strength::PasswordStrengthMeter;
pub use register::Register;

/// Navigation target after a successful login or registration.
pub const AFTER_AUTH_PATH: &str = "/dashboard";
