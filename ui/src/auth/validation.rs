//! Submission gate validation
//!
//! These checks run once per submit click, in the order a visitor reads the
//! form. The first failure wins and nothing is sent to the server.

use crate::auth::types::AuthState;
use crate::services::client::{AuthError, ClientResult};

/// Gate for the login form, ahead of the two-phase protocol.
pub fn validate_login_submission(state: &AuthState) -> ClientResult<()> {
    if state.login_form.email.trim().is_empty() || state.login_form.password.is_empty() {
        return Err(AuthError::validation("Please fill in all fields"));
    }

    Ok(())
}

/// Gate for the register form, ahead of the single-call registration.
///
/// Expertise is never required, not even for mentors.
pub fn validate_register_submission(state: &AuthState) -> ClientResult<()> {
    let form = &state.register_form;

    if form.first_name.trim().is_empty()
        || form.last_name.trim().is_empty()
        || form.email.trim().is_empty()
        || form.phone_number.trim().is_empty()
        || form.password.is_empty()
    {
        return Err(AuthError::validation("Please fill in all required fields"));
    }

    if form.password != form.confirm_password {
        return Err(AuthError::validation("Passwords do not match"));
    }

    if form.password.chars().count() < 6 {
        return Err(AuthError::validation(
            "Password must be at least 6 characters long",
        ));
    }

    Ok(())
}
