//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: input styling derived from field validation state

pub mod console_macros;
pub mod validation;

pub use validation::*;
