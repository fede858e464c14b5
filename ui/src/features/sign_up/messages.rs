use super::types::{ErrorCode, Field, FormStatus, SignUpState};

pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const ACCEPT_TERMS_MESSAGE: &str = "You must accept the terms and conditions";
pub const SIGN_UP_FALLBACK_MESSAGE: &str = "An error occurred during sign up";

/// Inline message for a field, or an empty string when nothing should be shown.
///
/// Nothing is shown until the user has touched or edited the field. After that
/// a `Required` error wins over field-specific errors, which win over the
/// form-level password mismatch (only reported on the confirmation field).
pub fn field_error_message(field: Field, status: &FormStatus) -> String {
    let field_status = status.field(field);
    // Covers the password mismatch too: an untouched confirmation stays quiet
    // while the password above it is being typed.
    if !field_status.has_interacted() {
        return String::new();
    }

    let errors = &field_status.errors;
    if errors.contains(&ErrorCode::Required) {
        return required_message(field);
    }

    for code in errors {
        match code {
            ErrorCode::InvalidEmail => return INVALID_EMAIL_MESSAGE.to_string(),
            ErrorCode::TooShort(min) => {
                return format!("{} must be at least {} characters", field.name(), min)
            }
            ErrorCode::MustAcceptTerms => return ACCEPT_TERMS_MESSAGE.to_string(),
            _ => {}
        }
    }

    if field == Field::ConfirmPassword && status.errors.contains(&ErrorCode::PasswordMismatch) {
        return PASSWORD_MISMATCH_MESSAGE.to_string();
    }

    String::new()
}

fn required_message(field: Field) -> String {
    match field {
        Field::DisplayName => "Display name is required".to_string(),
        Field::AcceptTerms => ACCEPT_TERMS_MESSAGE.to_string(),
        _ => format!("{} is required", field.name()),
    }
}

impl SignUpState {
    pub fn field_error(&self, field: Field) -> String {
        field_error_message(field, &self.status)
    }

    pub fn has_visible_error(&self, field: Field) -> bool {
        !self.field_error(field).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sign_up::types::SignUpAction;

    #[test]
    fn test_untouched_fields_show_nothing() {
        let state = SignUpState::default();
        for field in Field::ALL {
            assert!(!state.status.field(field).is_valid());
            assert_eq!(state.field_error(field), "");
        }
    }

    #[test]
    fn test_required_messages() {
        let mut state = SignUpState::default();
        for field in Field::ALL {
            state.reduce_in_place(SignUpAction::MarkTouched(field));
        }

        assert_eq!(state.field_error(Field::Email), "email is required");
        assert_eq!(state.field_error(Field::Password), "password is required");
        assert_eq!(
            state.field_error(Field::ConfirmPassword),
            "confirmPassword is required"
        );
        assert_eq!(
            state.field_error(Field::DisplayName),
            "Display name is required"
        );
        assert_eq!(
            state.field_error(Field::AcceptTerms),
            "You must accept the terms and conditions"
        );
    }

    #[test]
    fn test_dirty_is_enough_to_show_errors() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetEmail("nope".to_string()));
        assert!(!state.status.email.touched);
        assert_eq!(
            state.field_error(Field::Email),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_too_short_interpolates_field_and_length() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetPassword("abc".to_string()));
        assert_eq!(
            state.field_error(Field::Password),
            "password must be at least 6 characters"
        );
    }

    #[test]
    fn test_mismatch_only_on_confirmation_field() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetPassword("secret1".to_string()));
        state.reduce_in_place(SignUpAction::SetConfirmPassword("secret2".to_string()));
        state.reduce_in_place(SignUpAction::MarkTouched(Field::Password));
        state.reduce_in_place(SignUpAction::MarkTouched(Field::ConfirmPassword));

        assert_eq!(
            state.field_error(Field::ConfirmPassword),
            "Passwords do not match"
        );
        assert_eq!(state.field_error(Field::Password), "");
    }

    #[test]
    fn test_required_beats_mismatch() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetPassword("secret1".to_string()));
        state.reduce_in_place(SignUpAction::MarkTouched(Field::ConfirmPassword));

        assert!(state.status.errors.contains(&ErrorCode::PasswordMismatch));
        assert_eq!(
            state.field_error(Field::ConfirmPassword),
            "confirmPassword is required"
        );
    }

    #[test]
    fn test_mismatch_hidden_until_confirmation_interacted() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetPassword("secret1".to_string()));
        assert!(state.status.errors.contains(&ErrorCode::PasswordMismatch));
        assert_eq!(state.field_error(Field::ConfirmPassword), "");
    }

    #[test]
    fn test_unchecking_terms_after_checking() {
        let mut state = SignUpState::default();
        state.reduce_in_place(SignUpAction::SetAcceptTerms(true));
        assert_eq!(state.field_error(Field::AcceptTerms), "");
        state.reduce_in_place(SignUpAction::SetAcceptTerms(false));
        assert_eq!(
            state.field_error(Field::AcceptTerms),
            "You must accept the terms and conditions"
        );
    }
}
