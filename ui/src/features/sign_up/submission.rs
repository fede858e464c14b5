//! Submission flow: `Idle -> Submitting -> {Idle (error), Navigating}`
//!
//! The synchronous transitions live on [`SignUpState`]; [`submit_sign_up`]
//! drives the asynchronous part and reports back through `dispatch`, the
//! same way the page component does with its Signal.

use tracing::{debug, info, instrument, warn};

use super::messages::SIGN_UP_FALLBACK_MESSAGE;
use super::types::{SignUpAction, SignUpRequest, SignUpState, SubmissionState};
use crate::services::auth::{AuthResult, AuthService};
use crate::services::navigation::Navigator;

impl SignUpState {
    /// Enters `Submitting` and returns the payload for the collaborator.
    ///
    /// Returns `None` without touching the state when the form is invalid or
    /// a submission is already running.
    pub fn begin_submission(&mut self) -> Option<SignUpRequest> {
        if !self.is_valid() {
            debug!("[SignUp] Submit ignored: form invalid");
            return None;
        }
        if self.submission != SubmissionState::Idle {
            debug!("[SignUp] Submit ignored: state is {:?}", self.submission);
            return None;
        }

        self.ui.error_message.clear();
        self.ui.is_loading = true;
        self.submission = SubmissionState::Submitting;

        Some(SignUpRequest {
            email: self.fields.email.clone(),
            password: self.fields.password.clone(),
            display_name: self.fields.display_name.clone(),
        })
    }

    pub(crate) fn finish_submission(&mut self, outcome: Result<(), String>) {
        if self.submission != SubmissionState::Submitting {
            warn!(
                "[SignUp] Submission result arrived in state {:?}, ignoring",
                self.submission
            );
            return;
        }

        match outcome {
            Ok(()) => {
                // is_loading stays set; the page is about to be replaced
                self.submission = SubmissionState::Navigating;
            }
            Err(message) => {
                self.submission = SubmissionState::Idle;
                self.ui.error_message = if message.is_empty() {
                    SIGN_UP_FALLBACK_MESSAGE.to_string()
                } else {
                    message
                };
                self.ui.is_loading = false;
            }
        }
    }
}

/// Calls the collaborator for `request`, then either navigates to
/// `post_signup_route` or surfaces the failure through `dispatch`.
#[instrument(skip_all, fields(route = %post_signup_route), err)]
pub async fn submit_sign_up<F>(
    auth: &dyn AuthService,
    navigator: &dyn Navigator,
    post_signup_route: &str,
    request: SignUpRequest,
    dispatch: F,
) -> AuthResult<()>
where
    F: Fn(SignUpAction),
{
    match auth.create_account(&request).await {
        Ok(()) => {
            info!("Sign up succeeded, navigating");
            dispatch(SignUpAction::SubmissionSucceeded);
            navigator.navigate_to(post_signup_route);
            Ok(())
        }
        Err(e) => {
            dispatch(SignUpAction::SubmissionFailed(e.user_message()));
            Err(e)
        }
    }
}
