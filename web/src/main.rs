use auth_ui::services::client::{compat, SessionRecord};
use auth_ui::AuthModal;
use dioxus::prelude::*;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

/// Render the signed-in banner or the "Join Now" entry point
fn render_account_banner(
    mut session: Signal<Option<SessionRecord>>,
    mut modal_open: Signal<bool>,
) -> Element {
    match session() {
        Some(record) => {
            let role = record.user_role.as_str();
            rsx! {
                div {
                    class: "account-banner",
                    span {
                        class: "account-name",
                        "Signed in as {record.user_name} ({role})"
                    }
                    button {
                        class: "logout-button",
                        onclick: move |_| {
                            compat::clear_session();
                            session.set(None);
                        },
                        "Log out"
                    }
                }
            }
        }
        None => rsx! {
            button {
                class: "join-button",
                onclick: move |_| {
                    modal_open.set(true);
                },
                "Join Now"
            }
        },
    }
}

#[component]
fn Home() -> Element {
    let modal_open = use_signal(|| false);
    // A session persisted by an earlier visit survives until the tab closes
    let session = use_signal(compat::current_session);

    rsx! {
        div {
            class: "home-container",

            header {
                class: "home-header",
                h1 {
                    class: "home-title",
                    "EduForAll"
                }
                {render_account_banner(session, modal_open)}
            }

            main {
                class: "home-body",
                p { "Connect students with mentors for personalized learning." }
            }

            AuthModal { open: modal_open }
        }
    }
}
