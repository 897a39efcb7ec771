//! Browser wiring for the submission controller
//!
//! Adapts the controller's collaborator seams to Dioxus signals and real
//! browser APIs. Forms build a controller at the point of use and hand it
//! to `spawn` for the lifetime of one submission.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::auth::controller::{AuthController, StateHost};
use crate::auth::types::{AuthAction, AuthState};
use crate::console_error;
use crate::services::client::{ApiClient, BrowserSessionStore, ModalHandle, Navigator};
use crate::services::config::get_auth_config;

/// State host backed by the modal's Dioxus signal.
#[derive(Clone)]
pub struct SignalHost {
    state: Signal<AuthState>,
}

impl SignalHost {
    pub fn new(state: Signal<AuthState>) -> Self {
        Self { state }
    }
}

impl StateHost for SignalHost {
    fn apply(&self, action: AuthAction) {
        let mut state = self.state;
        state.with_mut(|s| s.reduce_in_place(action));
    }

    fn snapshot(&self) -> AuthState {
        self.state.peek().clone()
    }
}

/// Modal visibility backed by the host page's `open` signal.
#[derive(Clone)]
pub struct SignalModal {
    open: Signal<bool>,
}

impl SignalModal {
    pub fn new(open: Signal<bool>) -> Self {
        Self { open }
    }
}

impl ModalHandle for SignalModal {
    fn hide(&self) {
        let mut open = self.open;
        open.set(false);
    }
}

/// Navigation through the real browser window.
#[derive(Clone, Default)]
pub struct WindowNavigator;

impl Navigator for WindowNavigator {
    fn redirect_home(&self) {
        let Some(window) = web_sys::window() else {
            console_error!("[Auth] No window available for redirect");
            return;
        };

        if let Err(e) = window.location().set_href("/") {
            console_error!("[Auth] Redirect failed: {:?}", e);
        }
    }
}

/// Build the production controller around the modal's signals.
pub fn browser_controller(state: Signal<AuthState>, modal_open: Signal<bool>) -> AuthController {
    let config = get_auth_config();
    AuthController::new(
        Rc::new(SignalHost::new(state)),
        Rc::new(ApiClient::new()),
        Rc::new(BrowserSessionStore::new()),
        Rc::new(SignalModal::new(modal_open)),
        Rc::new(WindowNavigator),
        config.timing.redirect_delay_ms,
    )
}
