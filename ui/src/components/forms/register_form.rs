use dioxus::prelude::*;

use crate::auth::browser::browser_controller;
use crate::auth::{AuthAction, AuthState, AuthView};
use crate::components::inputs::{
    EmailValidationFeedback, InputType, PasswordValidationFeedback, ValidatedInput,
};
use crate::utils::{
    email_validation_class, email_validation_style, password_validation_class,
    password_validation_style,
};

#[derive(Props, PartialEq, Clone)]
pub struct RegisterFormComponentProps {
    pub state: Signal<AuthState>,
    pub dispatch: EventHandler<AuthAction>,
    pub modal_open: Signal<bool>,
}

/// Registration form. Password and email fields recolor as the user types,
/// but submission-blocking checks run in the controller so the rules stay
/// identical for both entry points.
#[component]
pub fn RegisterFormComponent(props: RegisterFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let modal_open = props.modal_open;

    let password_validation = state().validate_passwords();
    let email_validation = state().validate_email();

    rsx! {
        div {
            class: "auth-form register-form",

            // Name Section
            div {
                class: "input-row",
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "First Name:"
                    }
                    ValidatedInput {
                        value: state().register_form.first_name,
                        placeholder: "First name".to_string(),
                        input_type: InputType::Text,
                        input_class: "input-field".to_string(),
                        input_style: "".to_string(),
                        disabled: false,
                        on_change: move |data: String| {
                            dispatch.call(AuthAction::SetFirstName(data));
                        }
                    }
                }
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Last Name:"
                    }
                    ValidatedInput {
                        value: state().register_form.last_name,
                        placeholder: "Last name".to_string(),
                        input_type: InputType::Text,
                        input_class: "input-field".to_string(),
                        input_style: "".to_string(),
                        disabled: false,
                        on_change: move |data: String| {
                            dispatch.call(AuthAction::SetLastName(data));
                        }
                    }
                }
            }

            // Email Input Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Email:"
                }
                ValidatedInput {
                    value: state().register_form.email,
                    placeholder: "Enter your email".to_string(),
                    input_type: InputType::Email,
                    input_class: email_validation_class(&email_validation).to_string(),
                    input_style: email_validation_style(&email_validation).to_string(),
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(AuthAction::SetRegisterEmail(data));
                    }
                }
                EmailValidationFeedback {
                    validation: email_validation,
                }
            }

            // Phone Input Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Phone Number:"
                }
                ValidatedInput {
                    value: state().register_form.phone_number,
                    placeholder: "Enter your phone number".to_string(),
                    input_type: InputType::Tel,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(AuthAction::SetPhoneNumber(data));
                    }
                }
            }

            // Password Input Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Password:"
                }
                ValidatedInput {
                    value: state().register_form.password,
                    placeholder: "At least 6 characters".to_string(),
                    input_type: InputType::Password,
                    input_class: password_validation_class(&password_validation).to_string(),
                    input_style: password_validation_style(&password_validation).to_string(),
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(AuthAction::SetRegisterPassword(data));
                    }
                }
            }

            // Confirm Password Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Confirm Password:"
                }
                ValidatedInput {
                    value: state().register_form.confirm_password,
                    placeholder: "Re-enter your password".to_string(),
                    input_type: InputType::Password,
                    input_class: password_validation_class(&password_validation).to_string(),
                    input_style: password_validation_style(&password_validation).to_string(),
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(AuthAction::SetConfirmPassword(data));
                    }
                }
                PasswordValidationFeedback {
                    validation: password_validation,
                }
            }

            // Expertise Section - mentors only
            if state().expertise_visible() {
                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Area of Expertise:"
                    }
                    ValidatedInput {
                        value: state().register_form.expertise,
                        placeholder: "e.g. Mathematics, Physics".to_string(),
                        input_type: InputType::Text,
                        input_class: "input-field".to_string(),
                        input_style: "".to_string(),
                        disabled: false,
                        on_change: move |data: String| {
                            dispatch.call(AuthAction::SetExpertise(data));
                        }
                    }
                }
            }

            // Register Button
            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().is_busy(),
                    onclick: move |_| {
                        let controller = browser_controller(state, modal_open);
                        spawn(async move {
                            controller.submit_register().await;
                        });
                    },
                    if state().is_busy() {
                        "Creating account..."
                    } else {
                        "Register"
                    }
                }
            }

            // Switch to Login
            div {
                class: "switch-section",
                "Already have an account? "
                a {
                    href: "#",
                    class: "switch-link",
                    onclick: move |event| {
                        event.prevent_default();
                        dispatch.call(AuthAction::SwitchView(AuthView::Login));
                    },
                    "Login here"
                }
            }
        }
    }
}
