//! Submission controller for the authentication modal
//!
//! Runs the two-phase login protocol and the single-call registration
//! against the collaborator seams, applying every result back through the
//! state host. Each submission captures the state's submission sequence up
//! front and re-checks it after every await, so an attempt that lost its
//! claim on the modal (role switched, view switched, modal reset) backs out
//! without touching state, hiding the modal, or redirecting.

use std::rc::Rc;

use crate::auth::types::{AuthAction, AuthState, StatusMessage, SubmitPhase};
use crate::auth::validation::{validate_login_submission, validate_register_submission};
use crate::services::client::{
    AuthBackend, AuthError, AuthFlow, CheckUserRequest, LoginRequest, ModalHandle, Navigator,
    RegisterRequest, SessionRecord, SessionStore,
};
use crate::utils::platform::sleep_ms;
use crate::{console_info, console_warn};

/// Bridge between the controller and wherever the state actually lives.
///
/// In the browser this wraps the modal's Dioxus signal; in tests it wraps
/// a plain `RefCell`.
pub trait StateHost {
    fn apply(&self, action: AuthAction);
    fn snapshot(&self) -> AuthState;
}

/// Drives one submission attempt from validation through to redirect.
pub struct AuthController {
    host: Rc<dyn StateHost>,
    backend: Rc<dyn AuthBackend>,
    sessions: Rc<dyn SessionStore>,
    modal: Rc<dyn ModalHandle>,
    navigator: Rc<dyn Navigator>,
    redirect_delay_ms: u32,
}

impl AuthController {
    pub fn new(
        host: Rc<dyn StateHost>,
        backend: Rc<dyn AuthBackend>,
        sessions: Rc<dyn SessionStore>,
        modal: Rc<dyn ModalHandle>,
        navigator: Rc<dyn Navigator>,
        redirect_delay_ms: u32,
    ) -> Self {
        Self {
            host,
            backend,
            sessions,
            modal,
            navigator,
            redirect_delay_ms,
        }
    }

    /// Run the two-phase login protocol for the current form contents.
    pub async fn submit_login(&self) {
        let before = self.host.snapshot();
        if before.is_busy() {
            console_warn!("[Auth] Ignoring login submit while a submission is already running");
            return;
        }

        // Capture the form exactly as it stood when the button was clicked.
        let role = before.current_role;
        let email = before.login_form.email.trim().to_string();
        let password = before.login_form.password.clone();

        self.host.apply(AuthAction::BeginSubmit);
        let seq = self.host.snapshot().submit_seq;

        console_info!("[Auth] Step 1: Validating login form");
        if let Err(error) = validate_login_submission(&before) {
            self.fail(seq, AuthFlow::Login, error);
            return;
        }

        self.host.apply(AuthAction::SetPhase(SubmitPhase::Submitting));

        console_info!(
            "[Auth] Step 2: Checking for an existing {} account",
            role.as_str()
        );
        let check_request = CheckUserRequest {
            email: email.clone(),
            role,
        };
        let exists = match self.backend.check_user(&check_request).await {
            Ok(response) => response.exists,
            Err(error) => {
                self.fail(seq, AuthFlow::Login, error);
                return;
            }
        };

        if !self.still_current(seq) {
            console_warn!("[Auth] Discarding existence check result for a superseded submission");
            return;
        }

        if !exists {
            self.fail(
                seq,
                AuthFlow::Login,
                AuthError::AccountNotFound {
                    role: role.as_str().to_string(),
                },
            );
            return;
        }

        self.host
            .apply(AuthAction::SetPhase(SubmitPhase::AwaitingServerDecision));

        console_info!("[Auth] Step 3: Verifying credentials");
        let login_request = LoginRequest {
            email: email.clone(),
            password,
            role,
        };
        let response = match self.backend.login(&login_request).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(seq, AuthFlow::Login, error);
                return;
            }
        };

        if !self.still_current(seq) {
            console_warn!("[Auth] Discarding login decision for a superseded submission");
            return;
        }

        if !response.success {
            let message = response.error.unwrap_or_else(|| "Login failed".to_string());
            self.fail(seq, AuthFlow::Login, AuthError::Rejected { message });
            return;
        }

        let record = SessionRecord {
            user_id: response.user_id.unwrap_or(0),
            user_name: response.user_name.unwrap_or_default(),
            user_email: response.email.unwrap_or(email),
            user_role: response.role.unwrap_or(role),
        };
        console_info!("[Auth] Step 4: Login accepted for user: {}", record.user_name);

        self.host
            .apply(AuthAction::ShowMessage(StatusMessage::success(&format!(
                "Welcome back, {}!",
                record.user_name
            ))));

        if let Err(error) = self.sessions.store(&record) {
            self.fail(seq, AuthFlow::Login, error);
            return;
        }

        self.host.apply(AuthAction::SetPhase(SubmitPhase::Success));
        self.finish(seq).await;
    }

    /// Run the single-call registration for the current form contents.
    pub async fn submit_register(&self) {
        let before = self.host.snapshot();
        if before.is_busy() {
            console_warn!("[Auth] Ignoring register submit while a submission is already running");
            return;
        }

        let role = before.current_role;
        let first_name = before.register_form.first_name.trim().to_string();
        let last_name = before.register_form.last_name.trim().to_string();
        let email = before.register_form.email.trim().to_string();
        let phone_number = before.register_form.phone_number.trim().to_string();
        let password = before.register_form.password.clone();
        let expertise = before.register_form.expertise.trim().to_string();

        self.host.apply(AuthAction::BeginSubmit);
        let seq = self.host.snapshot().submit_seq;

        console_info!("[Auth] Step 1: Validating registration form");
        if let Err(error) = validate_register_submission(&before) {
            self.fail(seq, AuthFlow::Register, error);
            return;
        }

        self.host.apply(AuthAction::SetPhase(SubmitPhase::Submitting));

        // Expertise travels only for mentors who actually filled it in.
        let expertise = match (before.expertise_visible(), expertise.is_empty()) {
            (true, false) => Some(expertise),
            _ => None,
        };
        let request = RegisterRequest {
            first_name: first_name.clone(),
            last_name: last_name.clone(),
            email: email.clone(),
            phone_number,
            password,
            role,
            expertise,
        };

        self.host
            .apply(AuthAction::SetPhase(SubmitPhase::AwaitingServerDecision));

        console_info!(
            "[Auth] Step 2: Creating {} account for {} {}",
            role.as_str(),
            first_name,
            last_name
        );
        let response = match self.backend.register(&request).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(seq, AuthFlow::Register, error);
                return;
            }
        };

        if !self.still_current(seq) {
            console_warn!("[Auth] Discarding registration decision for a superseded submission");
            return;
        }

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Registration failed".to_string());
            self.fail(seq, AuthFlow::Register, AuthError::Rejected { message });
            return;
        }

        // The server does not echo a display name back; synthesize it the
        // same way the profile pages render it.
        let record = SessionRecord {
            user_id: response.user_id.unwrap_or(0),
            user_name: format!("{} {}", first_name, last_name),
            user_email: email,
            user_role: response.role.unwrap_or(role),
        };
        console_info!(
            "[Auth] Step 3: Registration accepted for user: {}",
            record.user_name
        );

        let message = response
            .message
            .unwrap_or_else(|| "Registration successful".to_string());
        self.host
            .apply(AuthAction::ShowMessage(StatusMessage::success(&message)));

        if let Err(error) = self.sessions.store(&record) {
            self.fail(seq, AuthFlow::Register, error);
            return;
        }

        self.host.apply(AuthAction::SetPhase(SubmitPhase::Success));
        self.finish(seq).await;
    }

    fn still_current(&self, seq: u64) -> bool {
        self.host.snapshot().submit_seq == seq
    }

    /// Surface a failure for the attempt `seq`, unless the attempt has been
    /// superseded, in which case the failure is logged and dropped.
    fn fail(&self, seq: u64, flow: AuthFlow, error: AuthError) {
        if !self.still_current(seq) {
            console_warn!(
                "[Auth] Dropping {:?} failure for a superseded submission: {}",
                flow,
                error
            );
            return;
        }

        console_warn!("[Auth] {:?} attempt failed: {}", flow, error);
        self.host
            .apply(AuthAction::ShowMessage(StatusMessage::error(
                &error.user_message(flow),
            )));
        self.host.apply(AuthAction::SetPhase(SubmitPhase::Idle));
    }

    /// Let the success message sit for the configured delay, then close the
    /// modal and leave the page. The delay is the last chance for the modal
    /// to be reset under us, so the sequence is checked one final time.
    async fn finish(&self, seq: u64) {
        console_info!(
            "[Auth] Submission accepted; closing modal in {}ms",
            self.redirect_delay_ms
        );
        sleep_ms(self.redirect_delay_ms).await;

        if !self.still_current(seq) {
            console_warn!("[Auth] Skipping modal close for a superseded submission");
            return;
        }

        self.host.apply(AuthAction::SetPhase(SubmitPhase::Closed));
        self.modal.hide();
        self.navigator.redirect_home();
    }
}
