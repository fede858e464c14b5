//! User Interface Components
//!
//! Reusable Dioxus components for the sign-up page:
//!
//! - **forms**: the sign-up form itself
//! - **display**: loading indicators
//! - **inputs**: validated inputs, password inputs with visibility toggle, inline errors

pub mod display;
pub mod forms;
pub mod inputs;
