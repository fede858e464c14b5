//! This crate contains the sign-up page: form state, validation, submission
//! and the Dioxus components that render it.

pub mod app;
pub use app::{PendingVerification, SignUpService};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
