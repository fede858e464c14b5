//! Auth collaborator used to create accounts
//!
//! The sign-up form only depends on the [`AuthService`] trait. The default
//! implementation talks to an HTTP endpoint; tests and host applications can
//! provide their own through Dioxus context ([`AuthServiceHandle`]).

pub mod errors;
pub mod http_client;

pub use errors::*;
pub use http_client::HttpAuthService;

use async_trait::async_trait;
use std::rc::Rc;

use crate::features::sign_up::SignUpRequest;

#[async_trait(?Send)]
pub trait AuthService {
    /// Create an account for the given credentials
    async fn create_account(&self, request: &SignUpRequest) -> AuthResult<()>;
}

/// Shared handle so components can pull the collaborator out of context
#[derive(Clone)]
pub struct AuthServiceHandle(pub Rc<dyn AuthService>);

impl AuthServiceHandle {
    pub fn new(service: impl AuthService + 'static) -> Self {
        Self(Rc::new(service))
    }
}

impl PartialEq for AuthServiceHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
