//! Scenario tests for the submission controller
//!
//! These drive the full protocol against in-memory doubles: a scripted
//! backend, a recording state host, and recording modal/navigation seams.
//! The controller future is `?Send`, so the interleaving tests that mutate
//! state mid-flight run inside a tokio `LocalSet`.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::VecDeque;
    use std::rc::Rc;
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::auth::controller::{AuthController, StateHost};
    use crate::auth::types::{AuthAction, AuthState, AuthView, Role, SubmitPhase};
    use crate::services::client::{
        AuthBackend, AuthError, CheckUserRequest, CheckUserResponse, ClientResult, LoginRequest,
        LoginResponse, MemorySessionStore, ModalHandle, Navigator, RegisterRequest,
        RegisterResponse, SessionRecord,
    };

    #[derive(Default)]
    struct MemoryHost {
        state: RefCell<AuthState>,
        actions: RefCell<Vec<AuthAction>>,
    }

    impl MemoryHost {
        fn state(&self) -> AuthState {
            self.state.borrow().clone()
        }

        fn dispatched(&self) -> Vec<AuthAction> {
            self.actions.borrow().clone()
        }

        fn message_text(&self) -> Option<String> {
            self.state.borrow().message_slot.as_ref().map(|m| m.text.clone())
        }
    }

    impl StateHost for MemoryHost {
        fn apply(&self, action: AuthAction) {
            self.actions.borrow_mut().push(action.clone());
            self.state.borrow_mut().reduce_in_place(action);
        }

        fn snapshot(&self) -> AuthState {
            self.state.borrow().clone()
        }
    }

    /// Backend double that replies from scripted queues and records every
    /// request. An exhausted queue panics: the test scripted too few replies.
    #[derive(Default)]
    struct ScriptedBackend {
        check_responses: RefCell<VecDeque<ClientResult<CheckUserResponse>>>,
        login_responses: RefCell<VecDeque<ClientResult<LoginResponse>>>,
        register_responses: RefCell<VecDeque<ClientResult<RegisterResponse>>>,
        check_requests: RefCell<Vec<CheckUserRequest>>,
        login_requests: RefCell<Vec<LoginRequest>>,
        register_requests: RefCell<Vec<RegisterRequest>>,
        // One-shot hooks that fire while the matching call is "in flight",
        // for simulating state changes during an await.
        before_check: RefCell<Option<Box<dyn Fn()>>>,
        before_login: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl ScriptedBackend {
        fn push_check(&self, response: ClientResult<CheckUserResponse>) {
            self.check_responses.borrow_mut().push_back(response);
        }

        fn push_login(&self, response: ClientResult<LoginResponse>) {
            self.login_responses.borrow_mut().push_back(response);
        }

        fn push_register(&self, response: ClientResult<RegisterResponse>) {
            self.register_responses.borrow_mut().push_back(response);
        }

        fn on_check(&self, hook: impl Fn() + 'static) {
            *self.before_check.borrow_mut() = Some(Box::new(hook));
        }

        fn on_login(&self, hook: impl Fn() + 'static) {
            *self.before_login.borrow_mut() = Some(Box::new(hook));
        }
    }

    #[async_trait(?Send)]
    impl AuthBackend for ScriptedBackend {
        async fn check_user(&self, request: &CheckUserRequest) -> ClientResult<CheckUserResponse> {
            self.check_requests.borrow_mut().push(request.clone());
            let hook = self.before_check.borrow_mut().take();
            if let Some(hook) = hook {
                hook();
            }
            self.check_responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted check-user response left")
        }

        async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
            self.login_requests.borrow_mut().push(request.clone());
            let hook = self.before_login.borrow_mut().take();
            if let Some(hook) = hook {
                hook();
            }
            self.login_responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted login response left")
        }

        async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse> {
            self.register_requests.borrow_mut().push(request.clone());
            self.register_responses
                .borrow_mut()
                .pop_front()
                .expect("no scripted register response left")
        }
    }

    #[derive(Default)]
    struct RecordingModal {
        hides: Cell<u32>,
    }

    impl RecordingModal {
        fn hides(&self) -> u32 {
            self.hides.get()
        }
    }

    impl ModalHandle for RecordingModal {
        fn hide(&self) {
            self.hides.set(self.hides.get() + 1);
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        redirects: Cell<u32>,
    }

    impl RecordingNavigator {
        fn redirects(&self) -> u32 {
            self.redirects.get()
        }
    }

    impl Navigator for RecordingNavigator {
        fn redirect_home(&self) {
            self.redirects.set(self.redirects.get() + 1);
        }
    }

    struct Rig {
        host: Rc<MemoryHost>,
        backend: Rc<ScriptedBackend>,
        sessions: Rc<MemorySessionStore>,
        modal: Rc<RecordingModal>,
        navigator: Rc<RecordingNavigator>,
        controller: AuthController,
    }

    fn rig_with_delay(redirect_delay_ms: u32) -> Rig {
        let host = Rc::new(MemoryHost::default());
        let backend = Rc::new(ScriptedBackend::default());
        let sessions = Rc::new(MemorySessionStore::new());
        let modal = Rc::new(RecordingModal::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let controller = AuthController::new(
            host.clone(),
            backend.clone(),
            sessions.clone(),
            modal.clone(),
            navigator.clone(),
            redirect_delay_ms,
        );
        Rig {
            host,
            backend,
            sessions,
            modal,
            navigator,
            controller,
        }
    }

    fn rig() -> Rig {
        rig_with_delay(5)
    }

    fn fill_login(host: &MemoryHost, email: &str, password: &str) {
        host.apply(AuthAction::SetLoginEmail(email.to_string()));
        host.apply(AuthAction::SetLoginPassword(password.to_string()));
    }

    fn fill_register(host: &MemoryHost) {
        host.apply(AuthAction::SwitchView(AuthView::Register));
        host.apply(AuthAction::SetFirstName("Jane".to_string()));
        host.apply(AuthAction::SetLastName("Doe".to_string()));
        host.apply(AuthAction::SetRegisterEmail("jane@example.com".to_string()));
        host.apply(AuthAction::SetPhoneNumber("555-0101".to_string()));
        host.apply(AuthAction::SetRegisterPassword("secret99".to_string()));
        host.apply(AuthAction::SetConfirmPassword("secret99".to_string()));
    }

    fn login_accepted() -> LoginResponse {
        LoginResponse {
            success: true,
            user_id: Some(7),
            user_name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            role: Some(Role::Mentor),
            error: None,
        }
    }

    fn login_rejected(error: Option<&str>) -> LoginResponse {
        LoginResponse {
            success: false,
            user_id: None,
            user_name: None,
            email: None,
            role: None,
            error: error.map(str::to_string),
        }
    }

    fn register_accepted(message: Option<&str>) -> RegisterResponse {
        RegisterResponse {
            success: true,
            message: message.map(str::to_string),
            user_id: Some(9),
            role: Some(Role::Mentor),
            error: None,
        }
    }

    #[tokio::test]
    async fn login_with_empty_fields_fails_without_any_network_call() {
        let rig = rig();

        rig.controller.submit_login().await;

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("Please fill in all fields")
        );
        let state = rig.host.state();
        assert!(state.message_slot.unwrap().is_error);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(rig.backend.check_requests.borrow().is_empty());
        assert!(rig.backend.login_requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn login_for_unknown_account_reports_not_found_and_skips_credentials() {
        let rig = rig();
        fill_login(&rig.host, "ghost@example.com", "secret99");
        rig.backend.push_check(Ok(CheckUserResponse { exists: false }));

        rig.controller.submit_login().await;

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("No student account found with this email. Please register first.")
        );
        assert_eq!(rig.host.state().phase, SubmitPhase::Idle);
        assert!(rig.backend.login_requests.borrow().is_empty());
        assert!(rig.sessions.stored().is_none());
        assert_eq!(rig.modal.hides(), 0);
    }

    #[tokio::test]
    async fn successful_mentor_login_stores_session_and_closes_after_delay() {
        let rig = rig();
        rig.host.apply(AuthAction::SelectRole(Role::Mentor));
        fill_login(&rig.host, "  jane@example.com  ", "secret99");
        rig.backend.push_check(Ok(CheckUserResponse { exists: true }));
        rig.backend.push_login(Ok(login_accepted()));

        rig.controller.submit_login().await;

        // The checked email is trimmed and the role travels with it.
        let check = rig.backend.check_requests.borrow()[0].clone();
        assert_eq!(check.email, "jane@example.com");
        assert_eq!(check.role, Role::Mentor);

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("Welcome back, Jane Doe!")
        );
        assert!(!rig.host.state().message_slot.unwrap().is_error);
        assert_eq!(
            rig.sessions.stored(),
            Some(SessionRecord {
                user_id: 7,
                user_name: "Jane Doe".to_string(),
                user_email: "jane@example.com".to_string(),
                user_role: Role::Mentor,
            })
        );
        assert_eq!(rig.modal.hides(), 1);
        assert_eq!(rig.navigator.redirects(), 1);
        assert_eq!(rig.host.state().phase, SubmitPhase::Closed);
    }

    #[tokio::test]
    async fn login_rejection_shows_the_server_error_and_returns_to_idle() {
        let rig = rig();
        fill_login(&rig.host, "jane@example.com", "wrong");
        rig.backend.push_check(Ok(CheckUserResponse { exists: true }));
        rig.backend.push_login(Ok(login_rejected(Some("Invalid password"))));

        rig.controller.submit_login().await;

        assert_eq!(rig.host.message_text().as_deref(), Some("Invalid password"));
        assert_eq!(rig.host.state().phase, SubmitPhase::Idle);
        assert!(rig.sessions.stored().is_none());
        assert_eq!(rig.modal.hides(), 0);
        assert_eq!(rig.navigator.redirects(), 0);
    }

    #[tokio::test]
    async fn login_rejection_without_detail_falls_back_to_login_failed() {
        let rig = rig();
        fill_login(&rig.host, "jane@example.com", "wrong");
        rig.backend.push_check(Ok(CheckUserResponse { exists: true }));
        rig.backend.push_login(Ok(login_rejected(None)));

        rig.controller.submit_login().await;

        assert_eq!(rig.host.message_text().as_deref(), Some("Login failed"));
    }

    #[tokio::test]
    async fn network_failure_shows_the_generic_message_and_allows_retry() {
        let rig = rig();
        fill_login(&rig.host, "jane@example.com", "secret99");
        rig.backend.push_check(Err(AuthError::Network {
            message: "connection refused".to_string(),
        }));

        rig.controller.submit_login().await;

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("An error occurred during login")
        );
        assert_eq!(rig.host.state().phase, SubmitPhase::Idle);

        // A retry starts the whole protocol over from the existence check.
        rig.backend.push_check(Ok(CheckUserResponse { exists: true }));
        rig.backend.push_login(Ok(login_accepted()));

        rig.controller.submit_login().await;

        assert_eq!(rig.backend.check_requests.borrow().len(), 2);
        assert_eq!(rig.host.state().phase, SubmitPhase::Closed);
        assert_eq!(rig.modal.hides(), 1);
    }

    #[tokio::test]
    async fn login_success_with_a_sparse_response_falls_back_to_typed_values() {
        let rig = rig();
        fill_login(&rig.host, "jane@example.com", "secret99");
        rig.backend.push_check(Ok(CheckUserResponse { exists: true }));
        rig.backend.push_login(Ok(LoginResponse {
            success: true,
            user_id: None,
            user_name: None,
            email: None,
            role: None,
            error: None,
        }));

        rig.controller.submit_login().await;

        assert_eq!(
            rig.sessions.stored(),
            Some(SessionRecord {
                user_id: 0,
                user_name: String::new(),
                user_email: "jane@example.com".to_string(),
                user_role: Role::Student,
            })
        );
        assert_eq!(rig.host.state().phase, SubmitPhase::Closed);
    }

    #[tokio::test]
    async fn register_with_mismatched_passwords_fails_locally() {
        let rig = rig();
        fill_register(&rig.host);
        rig.host
            .apply(AuthAction::SetConfirmPassword("different".to_string()));

        rig.controller.submit_register().await;

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("Passwords do not match")
        );
        assert!(rig.backend.register_requests.borrow().is_empty());
        assert_eq!(rig.host.state().phase, SubmitPhase::Idle);
    }

    #[tokio::test]
    async fn register_with_a_short_password_fails_locally() {
        let rig = rig();
        fill_register(&rig.host);
        rig.host
            .apply(AuthAction::SetRegisterPassword("abc12".to_string()));
        rig.host
            .apply(AuthAction::SetConfirmPassword("abc12".to_string()));

        rig.controller.submit_register().await;

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("Password must be at least 6 characters long")
        );
        assert!(rig.backend.register_requests.borrow().is_empty());
    }

    #[tokio::test]
    async fn mentor_register_with_blank_expertise_omits_the_field() {
        let rig = rig();
        rig.host.apply(AuthAction::SelectRole(Role::Mentor));
        fill_register(&rig.host);
        rig.host
            .apply(AuthAction::SetExpertise("   ".to_string()));
        rig.backend.push_register(Ok(register_accepted(Some(
            "Registration successful! Welcome aboard.",
        ))));

        rig.controller.submit_register().await;

        let request = rig.backend.register_requests.borrow()[0].clone();
        assert!(request.expertise.is_none());
        assert_eq!(request.role, Role::Mentor);

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("Registration successful! Welcome aboard.")
        );
        assert_eq!(
            rig.sessions.stored().map(|r| r.user_name),
            Some("Jane Doe".to_string())
        );
        assert_eq!(rig.host.state().phase, SubmitPhase::Closed);
        assert_eq!(rig.modal.hides(), 1);
        assert_eq!(rig.navigator.redirects(), 1);
    }

    #[tokio::test]
    async fn mentor_register_sends_trimmed_expertise_when_present() {
        let rig = rig();
        rig.host.apply(AuthAction::SelectRole(Role::Mentor));
        fill_register(&rig.host);
        rig.host
            .apply(AuthAction::SetExpertise("  Mathematics  ".to_string()));
        rig.backend.push_register(Ok(register_accepted(None)));

        rig.controller.submit_register().await;

        let request = rig.backend.register_requests.borrow()[0].clone();
        assert_eq!(request.expertise.as_deref(), Some("Mathematics"));
    }

    #[tokio::test]
    async fn student_register_never_sends_expertise_even_when_typed() {
        let rig = rig();
        fill_register(&rig.host);
        rig.host
            .apply(AuthAction::SetExpertise("Mathematics".to_string()));
        rig.backend.push_register(Ok(RegisterResponse {
            success: true,
            message: None,
            user_id: Some(3),
            role: Some(Role::Student),
            error: None,
        }));

        rig.controller.submit_register().await;

        let request = rig.backend.register_requests.borrow()[0].clone();
        assert!(request.expertise.is_none());
        assert_eq!(request.role, Role::Student);
    }

    #[tokio::test]
    async fn register_success_without_a_message_uses_the_fallback() {
        let rig = rig();
        fill_register(&rig.host);
        rig.backend.push_register(Ok(RegisterResponse {
            success: true,
            message: None,
            user_id: Some(3),
            role: None,
            error: None,
        }));

        rig.controller.submit_register().await;

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("Registration successful")
        );
        // Role falls back to the one selected in the modal.
        assert_eq!(
            rig.sessions.stored().map(|r| r.user_role),
            Some(Role::Student)
        );
    }

    #[tokio::test]
    async fn register_rejection_shows_the_server_error() {
        let rig = rig();
        fill_register(&rig.host);
        rig.backend.push_register(Ok(RegisterResponse {
            success: false,
            message: None,
            user_id: None,
            role: None,
            error: Some("Email already registered".to_string()),
        }));

        rig.controller.submit_register().await;

        assert_eq!(
            rig.host.message_text().as_deref(),
            Some("Email already registered")
        );
        assert_eq!(rig.host.state().phase, SubmitPhase::Idle);
        assert!(rig.sessions.stored().is_none());
    }

    #[tokio::test]
    async fn role_switch_during_the_existence_check_discards_the_result() {
        let rig = rig();
        fill_login(&rig.host, "jane@example.com", "secret99");
        rig.backend.push_check(Ok(CheckUserResponse { exists: true }));
        // No login response scripted: reaching the credential call would
        // panic, proving the stale result was acted on.
        let host = rig.host.clone();
        rig.backend
            .on_check(move || host.apply(AuthAction::SelectRole(Role::Mentor)));

        rig.controller.submit_login().await;

        assert!(rig.backend.login_requests.borrow().is_empty());
        assert!(rig.sessions.stored().is_none());
        let state = rig.host.state();
        assert_eq!(state.current_role, Role::Mentor);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(state.message_slot.is_none());
        assert!(!rig
            .host
            .dispatched()
            .iter()
            .any(|a| matches!(a, AuthAction::ShowMessage(_))));
    }

    #[tokio::test]
    async fn view_switch_during_the_credential_check_discards_the_decision() {
        let rig = rig();
        fill_login(&rig.host, "jane@example.com", "secret99");
        rig.backend.push_check(Ok(CheckUserResponse { exists: true }));
        rig.backend.push_login(Ok(login_accepted()));
        let host = rig.host.clone();
        rig.backend
            .on_login(move || host.apply(AuthAction::SwitchView(AuthView::Register)));

        rig.controller.submit_login().await;

        assert!(rig.sessions.stored().is_none());
        assert_eq!(rig.modal.hides(), 0);
        assert_eq!(rig.navigator.redirects(), 0);
        let state = rig.host.state();
        assert_eq!(state.active_view, AuthView::Register);
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(state.message_slot.is_none());
    }

    #[tokio::test]
    async fn modal_reset_during_the_redirect_delay_keeps_the_modal_open() {
        let Rig {
            host,
            backend,
            sessions,
            modal,
            navigator,
            controller,
        } = rig_with_delay(50);
        fill_login(&host, "jane@example.com", "secret99");
        backend.push_check(Ok(CheckUserResponse { exists: true }));
        backend.push_login(Ok(login_accepted()));

        let local = tokio::task::LocalSet::new();
        local
            .run_until(async move {
                let submission = tokio::task::spawn_local(async move {
                    controller.submit_login().await;
                });

                // Let the submission reach the redirect delay, then reset the
                // modal as an opening would.
                tokio::time::sleep(Duration::from_millis(5)).await;
                assert_eq!(host.state().phase, SubmitPhase::Success);
                host.apply(AuthAction::ResetAll);

                submission.await.unwrap();

                assert_eq!(modal.hides(), 0);
                assert_eq!(navigator.redirects(), 0);
                let state = host.state();
                assert_eq!(state.phase, SubmitPhase::Idle);
                assert!(state.message_slot.is_none());
                // The session write itself happened before the delay and is
                // deliberately left in place.
                assert!(sessions.stored().is_some());
            })
            .await;
    }

    #[tokio::test]
    async fn a_second_submit_while_busy_is_ignored() {
        let rig = rig();
        fill_login(&rig.host, "jane@example.com", "secret99");
        rig.host
            .apply(AuthAction::SetPhase(SubmitPhase::Submitting));
        let dispatched_before = rig.host.dispatched().len();

        rig.controller.submit_login().await;

        assert!(rig.backend.check_requests.borrow().is_empty());
        assert_eq!(rig.host.dispatched().len(), dispatched_before);
    }
}
