use dioxus::prelude::*;

use crate::auth::browser::browser_controller;
use crate::auth::{AuthAction, AuthState, AuthView};
use crate::components::inputs::{InputType, ValidatedInput};

#[derive(Props, PartialEq, Clone)]
pub struct LoginFormComponentProps {
    pub state: Signal<AuthState>,
    pub dispatch: EventHandler<AuthAction>,
    pub modal_open: Signal<bool>,
}

#[component]
pub fn LoginFormComponent(props: LoginFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;
    let modal_open = props.modal_open;

    rsx! {
        div {
            class: "auth-form login-form",

            // Email Input Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Email:"
                }
                ValidatedInput {
                    value: state().login_form.email,
                    placeholder: "Enter your email".to_string(),
                    input_type: InputType::Email,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(AuthAction::SetLoginEmail(data));
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
                    value: state().login_form.password,
                    placeholder: "Enter your password".to_string(),
                    input_type: InputType::Password,
                    input_class: "input-field".to_string(),
                    input_style: "".to_string(),
                    disabled: false,
                    on_change: move |data: String| {
                        dispatch.call(AuthAction::SetLoginPassword(data));
                    }
                }
            }

            // Login Button
            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: state().is_busy(),
                    onclick: move |_| {
                        let controller = browser_controller(state, modal_open);
                        spawn(async move {
                            controller.submit_login().await;
                        });
                    },
                    if state().is_busy() {
                        "Logging in..."
                    } else {
                        "Login"
                    }
                }
            }

            // Switch to Register
            div {
                class: "switch-section",
                "Don't have an account? "
                a {
                    href: "#",
                    class: "switch-link",
                    onclick: move |event| {
                        event.prevent_default();
                        dispatch.call(AuthAction::SwitchView(AuthView::Register));
                    },
                    "Register here"
                }
            }
        }
    }
}
