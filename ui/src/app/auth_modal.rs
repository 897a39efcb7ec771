use crate::auth::{AuthAction, AuthState};
use crate::components::display::StatusMessageDisplay;
use crate::components::forms::{LoginFormComponent, RegisterFormComponent, RoleSelector};
use crate::console_info;
use dioxus::prelude::*;

const AUTH_MODAL_CSS: Asset = asset!("/assets/styling/auth_modal.css");

#[derive(Props, PartialEq, Clone)]
pub struct AuthModalProps {
    pub open: Signal<bool>,
}

/// Modal dialog hosting the complete authentication flow: role selection,
/// login/register view switching, the status message slot, and both forms.
///
/// The `open` flag is owned by the embedding page; "Join Now" buttons flip it
/// on, the close button and a completed submission flip it off.
#[component]
pub fn AuthModal(props: AuthModalProps) -> Element {
    let mut open = props.open;

    // Consolidated state management
    let mut state = use_signal(AuthState::default);

    // Every open starts from a fresh login view
    use_effect(move || {
        if open() {
            console_info!("[Auth Modal] Opened - resetting to a fresh login view");
            state.with_mut(|s| s.reduce_in_place(AuthAction::ResetAll));
        }
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: AuthAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: AUTH_MODAL_CSS }

        if open() {
            div {
                class: "auth-modal-backdrop",
                div {
                    class: "auth-modal",

                    // Header with close control
                    div {
                        class: "auth-modal-header",
                        h2 {
                            class: "auth-title",
                            if state().shows_login_form() {
                                "Login to EduForAll"
                            } else {
                                "Create Your Account"
                            }
                        }
                        button {
                            class: "close-button",
                            onclick: move |_| {
                                // Resetting bumps the submission sequence, so a
                                // pending redirect timer is abandoned too.
                                dispatch.call(AuthAction::ResetAll);
                                open.set(false);
                            },
                            "×"
                        }
                    }

                    // Role Selection
                    RoleSelector {
                        state: state,
                        dispatch: dispatch,
                    }

                    // Status Message
                    StatusMessageDisplay {
                        message: state().message_slot,
                    }

                    // Active Form (exactly one of the two renders)
                    if state().shows_login_form() {
                        LoginFormComponent {
                            state: state,
                            dispatch: dispatch,
                            modal_open: open,
                        }
                    }
                    if state().shows_register_form() {
                        RegisterFormComponent {
                            state: state,
                            dispatch: dispatch,
                            modal_open: open,
                        }
                    }
                }
            }
        }
    }
}
