//! Services the sign-up feature talks to
//!
//! - **auth**: account creation collaborator and its HTTP implementation
//! - **config**: sign-up configuration with LocalStorage override
//! - **navigation**: post-signup navigation seam

pub mod auth;
pub mod config;
pub mod navigation;

pub use auth::{AuthError, AuthService, AuthServiceHandle, HttpAuthService};
pub use config::SignUpConfig;
pub use navigation::Navigator;
