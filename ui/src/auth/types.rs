// Core types for the authentication flow - no dioxus imports needed here
use serde::{Deserialize, Serialize};

/// Account role selected at the top of the modal.
///
/// Serialized in lowercase because the backend and `sessionStorage` both
/// traffic in `"student"` / `"mentor"`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Mentor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Mentor => "mentor",
        }
    }

    /// Parse the lowercase wire/storage form back into a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "student" => Some(Role::Student),
            "mentor" => Some(Role::Mentor),
            _ => None,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::Student
    }
}

// Which of the two forms the modal is presenting
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthView {
    Login,
    Register,
}

/// Lifecycle of a single submission attempt.
///
/// `Validating` through `Success` count as busy; the forms disable their
/// submit buttons for the whole window so a second click cannot start an
/// overlapping attempt.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SubmitPhase {
    Idle,
    Validating,
    Submitting,
    AwaitingServerDecision,
    Success,
    Closed,
}

/// The single feedback line shown between the role selector and the form.
#[derive(Clone, PartialEq, Debug)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

impl StatusMessage {
    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: true,
        }
    }

    pub fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_error: false,
        }
    }
}

// Validation status enums for the live register-form feedback
#[derive(Clone, PartialEq, Debug)]
pub enum PasswordValidation {
    None,
    TooShort,
    Match,
    NoMatch,
}

#[derive(Clone, PartialEq, Debug)]
pub enum EmailValidation {
    None,
    Valid,
    Invalid,
}

// Action enum for state mutations
#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    // Modal-level actions
    SelectRole(Role),
    SwitchView(AuthView),
    ResetAll,

    // Login form actions
    SetLoginEmail(String),
    SetLoginPassword(String),

    // Register form actions
    SetFirstName(String),
    SetLastName(String),
    SetRegisterEmail(String),
    SetPhoneNumber(String),
    SetRegisterPassword(String),
    SetConfirmPassword(String),
    SetExpertise(String),

    // Message slot actions
    ShowMessage(StatusMessage),
    HideMessage,

    // Submission lifecycle actions
    BeginSubmit,
    SetPhase(SubmitPhase),
}

// Form state structs
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginFormState {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegisterFormState {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub expertise: String,
}

/// Full client-side state of the authentication modal.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub current_role: Role,
    pub active_view: AuthView,
    pub message_slot: Option<StatusMessage>,
    pub login_form: LoginFormState,
    pub register_form: RegisterFormState,
    pub phase: SubmitPhase,
    /// Monotonic submission sequence. Bumped by every action that starts or
    /// invalidates an attempt, so an in-flight submission can detect that the
    /// state it captured no longer describes the modal.
    pub submit_seq: u64,
}

impl AuthState {
    /// Reduces the state based on an action in-place (preserves Dioxus Signal reactivity)
    pub fn reduce_in_place(&mut self, action: AuthAction) {
        match action {
            // Modal-level actions
            AuthAction::SelectRole(role) => {
                crate::console_info!(
                    "[STATE] Role changing: {:?} -> {:?}",
                    self.current_role,
                    role
                );
                // Role change abandons both forms, the message, and any
                // in-flight attempt, even when the same radio is re-selected.
                self.current_role = role;
                self.login_form = LoginFormState::default();
                self.register_form = RegisterFormState::default();
                self.message_slot = None;
                self.phase = SubmitPhase::Idle;
                self.submit_seq += 1;
            }
            AuthAction::SwitchView(view) => {
                crate::console_info!(
                    "[FORM] Switching view from {:?} to {:?}",
                    self.active_view,
                    view
                );
                // Only the form being left behind is cleared; the one being
                // entered keeps whatever the visitor already typed into it.
                match view {
                    AuthView::Login => self.register_form = RegisterFormState::default(),
                    AuthView::Register => self.login_form = LoginFormState::default(),
                }
                self.active_view = view;
                self.message_slot = None;
                self.phase = SubmitPhase::Idle;
                self.submit_seq += 1;
            }
            AuthAction::ResetAll => {
                crate::console_info!("[STATE] Resetting modal to its opening state");
                *self = AuthState {
                    submit_seq: self.submit_seq + 1,
                    ..AuthState::default()
                };
            }

            // Login form actions
            AuthAction::SetLoginEmail(email) => {
                self.login_form.email = email;
            }
            AuthAction::SetLoginPassword(password) => {
                self.login_form.password = password;
            }

            // Register form actions
            AuthAction::SetFirstName(first_name) => {
                self.register_form.first_name = first_name;
            }
            AuthAction::SetLastName(last_name) => {
                self.register_form.last_name = last_name;
            }
            AuthAction::SetRegisterEmail(email) => {
                self.register_form.email = email;
            }
            AuthAction::SetPhoneNumber(phone_number) => {
                self.register_form.phone_number = phone_number;
            }
            AuthAction::SetRegisterPassword(password) => {
                self.register_form.password = password;
            }
            AuthAction::SetConfirmPassword(confirm) => {
                self.register_form.confirm_password = confirm;
            }
            AuthAction::SetExpertise(expertise) => {
                self.register_form.expertise = expertise;
            }

            // Message slot actions
            AuthAction::ShowMessage(message) => {
                // Single slot: a new message always replaces the old one.
                self.message_slot = Some(message);
            }
            AuthAction::HideMessage => {
                self.message_slot = None;
            }

            // Submission lifecycle actions
            AuthAction::BeginSubmit => {
                self.phase = SubmitPhase::Validating;
                self.submit_seq += 1;
                crate::console_info!(
                    "[REDUCER] BeginSubmit: entering Validating, submission sequence {}",
                    self.submit_seq
                );
            }
            AuthAction::SetPhase(phase) => {
                crate::console_info!(
                    "[STATE] Submit phase changing: {:?} -> {:?}",
                    self.phase,
                    phase
                );
                self.phase = phase;
            }
        }
    }

    /// Helper methods for common state queries
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            SubmitPhase::Validating
                | SubmitPhase::Submitting
                | SubmitPhase::AwaitingServerDecision
                | SubmitPhase::Success
        )
    }

    pub fn shows_login_form(&self) -> bool {
        self.active_view == AuthView::Login
    }

    pub fn shows_register_form(&self) -> bool {
        self.active_view == AuthView::Register
    }

    pub fn expertise_visible(&self) -> bool {
        self.current_role == Role::Mentor
    }

    pub fn message_visible(&self) -> bool {
        self.message_slot.is_some()
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            current_role: Role::Student,
            active_view: AuthView::Login,
            message_slot: None,
            login_form: LoginFormState::default(),
            register_form: RegisterFormState::default(),
            phase: SubmitPhase::Idle,
            submit_seq: 0,
        }
    }
}
