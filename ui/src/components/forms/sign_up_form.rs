use dioxus::prelude::*;

use crate::components::{
    display::LoadingIndicator,
    inputs::{FieldError, InputType, PasswordInput, ValidatedInput},
};
use crate::features::sign_up::{FederatedProvider, Field, SignUpAction, SignUpState};
use crate::utils::validation::{field_input_class, field_input_style};

#[derive(Props, PartialEq, Clone)]
pub struct SignUpFormProps {
    pub state: Signal<SignUpState>,
    pub dispatch: EventHandler<SignUpAction>,
    pub on_submit: EventHandler<()>,
    pub on_federated: EventHandler<FederatedProvider>,
}

#[component]
pub fn SignUpForm(props: SignUpFormProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let on_submit = props.on_submit;
    let on_federated = props.on_federated;

    let current = state();
    let loading = current.is_loading();

    rsx! {
        form {
            class: "sign-up-form",
            onsubmit: move |event| {
                event.prevent_default();
                on_submit.call(());
            },

            h2 {
                class: "form-title",
                "Create your account"
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Email:"
                }
                ValidatedInput {
                    value: current.fields.email.clone(),
                    placeholder: "you@example.com".to_string(),
                    input_type: InputType::Email,
                    input_class: field_input_class(&current, Field::Email).to_string(),
                    input_style: field_input_style(&current, Field::Email).to_string(),
                    on_change: move |value: String| dispatch.call(SignUpAction::SetEmail(value)),
                    on_blur: move |_| dispatch.call(SignUpAction::MarkTouched(Field::Email))
                }
                FieldError { message: current.field_error(Field::Email) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Display name:"
                }
                ValidatedInput {
                    value: current.fields.display_name.clone(),
                    placeholder: "How should we call you?".to_string(),
                    input_type: InputType::Text,
                    input_class: field_input_class(&current, Field::DisplayName).to_string(),
                    input_style: field_input_style(&current, Field::DisplayName).to_string(),
                    on_change: move |value: String| dispatch.call(SignUpAction::SetDisplayName(value)),
                    on_blur: move |_| dispatch.call(SignUpAction::MarkTouched(Field::DisplayName))
                }
                FieldError { message: current.field_error(Field::DisplayName) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Password:"
                }
                PasswordInput {
                    value: current.fields.password.clone(),
                    placeholder: "At least 6 characters".to_string(),
                    input_class: field_input_class(&current, Field::Password).to_string(),
                    input_style: field_input_style(&current, Field::Password).to_string(),
                    visible: current.ui.show_password,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetPassword(value)),
                    on_blur: move |_| dispatch.call(SignUpAction::MarkTouched(Field::Password)),
                    on_toggle: move |_| dispatch.call(SignUpAction::TogglePasswordVisibility)
                }
                FieldError { message: current.field_error(Field::Password) }
            }

            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Confirm password:"
                }
                PasswordInput {
                    value: current.fields.confirm_password.clone(),
                    placeholder: "Repeat your password".to_string(),
                    input_class: field_input_class(&current, Field::ConfirmPassword).to_string(),
                    input_style: field_input_style(&current, Field::ConfirmPassword).to_string(),
                    visible: current.ui.show_confirm_password,
                    on_change: move |value: String| dispatch.call(SignUpAction::SetConfirmPassword(value)),
                    on_blur: move |_| dispatch.call(SignUpAction::MarkTouched(Field::ConfirmPassword)),
                    on_toggle: move |_| dispatch.call(SignUpAction::ToggleConfirmPasswordVisibility)
                }
                FieldError { message: current.field_error(Field::ConfirmPassword) }
            }

            div {
                class: "input-section terms-section",
                label {
                    class: "checkbox-label",
                    input {
                        r#type: "checkbox",
                        checked: current.fields.accept_terms,
                        onchange: move |event| dispatch.call(SignUpAction::SetAcceptTerms(event.checked())),
                        onblur: move |_| dispatch.call(SignUpAction::MarkTouched(Field::AcceptTerms))
                    }
                    " I accept the terms and conditions"
                }
                FieldError { message: current.field_error(Field::AcceptTerms) }
            }

            if !current.ui.error_message.is_empty() {
                div {
                    class: "auth-result error",
                    div {
                        class: "result-message",
                        "✗ {current.ui.error_message}"
                    }
                }
            }

            div {
                class: "button-section",
                button {
                    class: "sign-up-button",
                    r#type: "submit",
                    disabled: loading,
                    if loading {
                        LoadingIndicator { message: "Creating account...".to_string(), inline: true }
                    } else {
                        "Sign up"
                    }
                }
            }

            div {
                class: "federated-section",
                p {
                    class: "federated-divider",
                    "or sign up with"
                }
                for provider in [FederatedProvider::Google, FederatedProvider::Facebook] {
                    button {
                        key: "{provider.label()}",
                        class: "federated-button",
                        r#type: "button",
                        disabled: loading,
                        onclick: move |_| on_federated.call(provider),
                        "{provider.label()}"
                    }
                }
            }
        }
    }
}
