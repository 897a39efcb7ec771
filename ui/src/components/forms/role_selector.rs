use dioxus::prelude::*;

use crate::auth::{AuthAction, AuthState, Role};

#[derive(Props, PartialEq, Clone)]
pub struct RoleSelectorProps {
    pub state: Signal<AuthState>,
    pub dispatch: EventHandler<AuthAction>,
}

/// The student/mentor radio pair at the top of the modal.
///
/// Selecting a role resets both forms and clears the message, so the radios
/// stay live even while a submission is running; the in-flight attempt
/// notices the change and abandons itself.
#[component]
pub fn RoleSelector(props: RoleSelectorProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    rsx! {
        div {
            class: "role-selector",

            label {
                class: "role-option",
                input {
                    r#type: "radio",
                    name: "auth_role",
                    value: "student",
                    checked: state().current_role == Role::Student,
                    onchange: move |_| dispatch.call(AuthAction::SelectRole(Role::Student)),
                }
                "Student"
            }
            label {
                class: "role-option",
                input {
                    r#type: "radio",
                    name: "auth_role",
                    value: "mentor",
                    checked: state().current_role == Role::Mentor,
                    onchange: move |_| dispatch.call(AuthAction::SelectRole(Role::Mentor)),
                }
                "Mentor"
            }
        }
    }
}
