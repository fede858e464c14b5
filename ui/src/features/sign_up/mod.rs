//! Sign-up form feature
//!
//! - **types**: form state, actions and the in-place reducer
//! - **validation**: pure field validators and the recompute pass
//! - **messages**: inline error message mapping
//! - **submission**: validity-gated submission through the auth collaborator
//! - **federated**: placeholder Google/Facebook flows

pub mod federated;
pub mod messages;
pub mod submission;
pub mod types;
pub mod validation;


pub use federated::run_federated_placeholder;
pub use messages::*;
pub use submission::submit_sign_up;
pub use types::*;
pub use validation::MIN_PASSWORD_LENGTH;
