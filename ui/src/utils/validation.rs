use crate::features::sign_up::{Field, SignUpState};

/// Input class for a field: flagged only once its error is visible
pub fn field_input_class(state: &SignUpState, field: Field) -> &'static str {
    if state.has_visible_error(field) {
        "input-field input-invalid"
    } else {
        "input-field"
    }
}

pub fn field_input_style(state: &SignUpState, field: Field) -> &'static str {
    if state.has_visible_error(field) {
        "border: 2px solid #ef4444; background-color: #fef2f2;"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::sign_up::SignUpAction;

    #[test]
    fn test_class_follows_visible_error() {
        let mut state = SignUpState::default();
        assert_eq!(field_input_class(&state, Field::Email), "input-field");
        assert_eq!(field_input_style(&state, Field::Email), "");

        state.reduce_in_place(SignUpAction::MarkTouched(Field::Email));
        assert_eq!(
            field_input_class(&state, Field::Email),
            "input-field input-invalid"
        );

        state.reduce_in_place(SignUpAction::SetEmail("user@example.com".to_string()));
        assert_eq!(field_input_class(&state, Field::Email), "input-field");
    }
}
