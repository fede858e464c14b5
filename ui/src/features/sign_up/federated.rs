//! Federated sign-up placeholders.
//!
//! Google and Facebook sign-up are not wired to any provider yet: starting one
//! shows the loading state for a fixed delay and then clears it.

use std::future::Future;
use tracing::info;

use super::types::{FederatedProvider, SignUpAction, SignUpState};

impl SignUpState {
    pub(crate) fn begin_federated(&mut self, provider: FederatedProvider) {
        info!("[SignUp] {} sign up initiated", provider.label());
        self.ui.is_loading = true;
        self.ui.error_message.clear();
    }

    pub(crate) fn finish_federated(&mut self) {
        self.ui.is_loading = false;
    }
}

/// Runs one placeholder flow; `delay` is awaited between start and finish
pub async fn run_federated_placeholder<D, F>(provider: FederatedProvider, delay: D, dispatch: F)
where
    D: Future<Output = ()>,
    F: Fn(SignUpAction),
{
    dispatch(SignUpAction::FederatedStarted(provider));
    delay.await;
    dispatch(SignUpAction::FederatedFinished);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sign_up::SubmissionState;
    use std::cell::RefCell;

    #[tokio::test]
    async fn test_placeholder_flickers_loading() {
        let state = RefCell::new(SignUpState::default());
        state.borrow_mut().ui.error_message = "old error".to_string();

        run_federated_placeholder(
            FederatedProvider::Google,
            async {
                let s = state.borrow();
                assert!(s.ui.is_loading);
                assert_eq!(s.ui.error_message, "");
            },
            |action| state.borrow_mut().reduce_in_place(action),
        )
        .await;

        let s = state.borrow();
        assert!(!s.ui.is_loading);
        assert_eq!(s.submission, SubmissionState::Idle);
    }

    #[test]
    fn test_finish_clears_loading_even_with_submission_running() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetEmail("user@example.com".to_string()));
        state.reduce_in_place(SignUpAction::SetDisplayName("User".to_string()));
        state.reduce_in_place(SignUpAction::SetPassword("secret1".to_string()));
        state.reduce_in_place(SignUpAction::SetConfirmPassword("secret1".to_string()));
        state.reduce_in_place(SignUpAction::SetAcceptTerms(true));

        state.reduce_in_place(SignUpAction::FederatedStarted(FederatedProvider::Google));
        assert!(state.begin_submission().is_some());

        state.reduce_in_place(SignUpAction::FederatedFinished);
        assert!(!state.ui.is_loading);
        assert_eq!(state.submission, SubmissionState::Submitting);
    }
}
