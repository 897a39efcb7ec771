use crate::auth::StatusMessage;
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct StatusMessageDisplayProps {
    pub message: Option<StatusMessage>,
}

/// The single feedback line of the modal.
///
/// Whatever message is in the slot gets rendered; an empty slot renders
/// nothing. Errors and successes differ only in styling.
#[component]
pub fn StatusMessageDisplay(props: StatusMessageDisplayProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: if message.is_error { "auth-message error" } else { "auth-message success" },
                "{message.text}"
            }
        },
        None => rsx! { div {} },
    }
}
