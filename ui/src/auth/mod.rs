//! Authentication Flow Core
//!
//! Client-side authentication state and the submission controller:
//!
//! - **types**: reducer-style modal state, actions, and the submission lifecycle
//! - **validation**: the pre-submit gates for both forms
//! - **controller**: the two-phase login / single-call register protocol
//! - **browser**: Dioxus signal and browser wiring for the controller seams

pub mod browser;
pub mod controller;
pub mod controller_test;
pub mod types;
pub mod validation;

pub use browser::{browser_controller, SignalHost, SignalModal, WindowNavigator};
pub use controller::{AuthController, StateHost};
pub use types::{
    AuthAction, AuthState, AuthView, EmailValidation, LoginFormState, PasswordValidation,
    RegisterFormState, Role, StatusMessage, SubmitPhase,
};
pub use validation::{validate_login_submission, validate_register_submission};
