//! Input components for form validation and display

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    #[props(default)]
    pub input_style: String,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_blur: EventHandler<()>,
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            style: "{props.input_style}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value()),
            onblur: move |_| props.on_blur.call(())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct PasswordInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_class: String,
    #[props(default)]
    pub input_style: String,
    pub visible: bool,
    #[props(default)]
    pub disabled: bool,
    pub on_change: EventHandler<String>,
    pub on_blur: EventHandler<()>,
    pub on_toggle: EventHandler<()>,
}

/// Password field with a show/hide toggle
#[component]
pub fn PasswordInput(props: PasswordInputProps) -> Element {
    let input_type = if props.visible {
        InputType::Text
    } else {
        InputType::Password
    };

    rsx! {
        div {
            class: "password-input-container",
            ValidatedInput {
                value: props.value,
                placeholder: props.placeholder,
                input_type: input_type,
                input_class: props.input_class,
                input_style: props.input_style,
                disabled: props.disabled,
                on_change: props.on_change,
                on_blur: props.on_blur
            }
            button {
                class: "password-toggle",
                r#type: "button",
                title: if props.visible { "Hide password" } else { "Show password" },
                onclick: move |_| props.on_toggle.call(()),
                if props.visible { "🙈" } else { "👁" }
            }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorProps {
    pub message: String,
}

/// Inline error under a field; renders nothing for an empty message
#[component]
pub fn FieldError(props: FieldErrorProps) -> Element {
    if props.message.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "validation-feedback invalid",
            style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
            "⚠ {props.message}"
        }
    }
}
