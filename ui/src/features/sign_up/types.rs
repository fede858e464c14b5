// Core types for the sign-up form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

use super::validation::recompute;

/// Validation failure codes attached to a field or to the whole form
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ErrorCode {
    Required,
    InvalidEmail,
    TooShort(usize),
    MustAcceptTerms,
    PasswordMismatch,
}

/// Inputs of the sign-up form
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
    DisplayName,
    AcceptTerms,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::DisplayName,
        Field::AcceptTerms,
    ];

    /// Name used when a message interpolates the field
    pub fn name(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::DisplayName => "displayName",
            Field::AcceptTerms => "acceptTerms",
        }
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormFields {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub display_name: String,
    pub accept_terms: bool,
}

/// Interaction markers and current errors for one field
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FieldStatus {
    pub touched: bool,
    pub dirty: bool,
    pub errors: BTreeSet<ErrorCode>,
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_interacted(&self) -> bool {
        self.touched || self.dirty
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct FormStatus {
    pub email: FieldStatus,
    pub password: FieldStatus,
    pub confirm_password: FieldStatus,
    pub display_name: FieldStatus,
    pub accept_terms: FieldStatus,
    /// Cross-field errors
    pub errors: BTreeSet<ErrorCode>,
}

impl FormStatus {
    pub fn field(&self, field: Field) -> &FieldStatus {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::DisplayName => &self.display_name,
            Field::AcceptTerms => &self.accept_terms,
        }
    }

    pub fn field_mut(&mut self, field: Field) -> &mut FieldStatus {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::DisplayName => &mut self.display_name,
            Field::AcceptTerms => &mut self.accept_terms,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && Field::ALL.iter().all(|f| self.field(*f).is_valid())
    }
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct UiState {
    pub show_password: bool,
    pub show_confirm_password: bool,
    pub is_loading: bool,
    pub error_message: String,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Navigating,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FederatedProvider {
    Google,
    Facebook,
}

impl FederatedProvider {
    pub fn label(&self) -> &'static str {
        match self {
            FederatedProvider::Google => "Google",
            FederatedProvider::Facebook => "Facebook",
        }
    }
}

/// Payload handed to the auth collaborator
#[derive(Serialize, Deserialize, Clone, PartialEq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl std::fmt::Debug for SignUpRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignUpRequest")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum SignUpAction {
    // Field edits (mark the field dirty)
    SetEmail(String),
    SetPassword(String),
    SetConfirmPassword(String),
    SetDisplayName(String),
    SetAcceptTerms(bool),

    // Field left by the user
    MarkTouched(Field),

    TogglePasswordVisibility,
    ToggleConfirmPasswordVisibility,

    // Submission lifecycle
    SubmissionSucceeded,
    SubmissionFailed(String),

    // Federated placeholders
    FederatedStarted(FederatedProvider),
    FederatedFinished,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SignUpState {
    pub fields: FormFields,
    pub status: FormStatus,
    pub ui: UiState,
    pub submission: SubmissionState,
}

impl Default for SignUpState {
    fn default() -> Self {
        let fields = FormFields::default();
        let mut status = FormStatus::default();
        recompute(&fields, &mut status);
        Self {
            fields,
            status,
            ui: UiState::default(),
            submission: SubmissionState::Idle,
        }
    }
}

impl SignUpState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: SignUpAction) {
        match action {
            SignUpAction::SetEmail(email) => {
                self.fields.email = email;
                self.mark_dirty(Field::Email);
            }
            SignUpAction::SetPassword(password) => {
                self.fields.password = password;
                self.mark_dirty(Field::Password);
            }
            SignUpAction::SetConfirmPassword(password) => {
                self.fields.confirm_password = password;
                self.mark_dirty(Field::ConfirmPassword);
            }
            SignUpAction::SetDisplayName(name) => {
                self.fields.display_name = name;
                self.mark_dirty(Field::DisplayName);
            }
            SignUpAction::SetAcceptTerms(accepted) => {
                self.fields.accept_terms = accepted;
                self.mark_dirty(Field::AcceptTerms);
            }
            SignUpAction::MarkTouched(field) => {
                self.status.field_mut(field).touched = true;
            }
            SignUpAction::TogglePasswordVisibility => {
                self.ui.show_password = !self.ui.show_password;
            }
            SignUpAction::ToggleConfirmPasswordVisibility => {
                self.ui.show_confirm_password = !self.ui.show_confirm_password;
            }
            SignUpAction::SubmissionSucceeded => self.finish_submission(Ok(())),
            SignUpAction::SubmissionFailed(message) => self.finish_submission(Err(message)),
            SignUpAction::FederatedStarted(provider) => self.begin_federated(provider),
            SignUpAction::FederatedFinished => self.finish_federated(),
        }
    }

    fn mark_dirty(&mut self, field: Field) {
        self.status.field_mut(field).dirty = true;
        recompute(&self.fields, &mut self.status);
        debug!(
            "[SignUp] {} changed, form valid: {}",
            field.name(),
            self.status.is_valid()
        );
    }

    /// Helper methods for common state queries
    pub fn is_valid(&self) -> bool {
        self.status.is_valid()
    }

    pub fn is_loading(&self) -> bool {
        self.ui.is_loading
    }

    pub fn can_submit(&self) -> bool {
        self.is_valid() && self.submission == SubmissionState::Idle
    }
}
