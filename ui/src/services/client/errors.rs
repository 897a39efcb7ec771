use thiserror::Error;

/// Client-side authentication errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    /// Local form validation failed before any request was sent
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// The existence check came back negative for this email/role pair
    #[error("No {role} account found for this email")]
    AccountNotFound { role: String },

    /// The server answered but refused the request
    #[error("Request rejected: {message}")]
    Rejected { message: String },

    /// Transport failure or an unreadable response body
    #[error("Network error: {message}")]
    Network { message: String },

    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Browser storage refused a session write
    #[error("Storage error: {message}")]
    Storage { message: String },
}

/// Which user flow an error surfaced in, for picking the fallback message.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AuthFlow {
    Login,
    Register,
}

impl AuthError {
    pub fn validation(message: &str) -> Self {
        AuthError::Validation {
            message: message.to_string(),
        }
    }

    /// The exact text the message presenter shows for this error.
    ///
    /// Validation and rejection errors carry user-facing text already; the
    /// not-found case names the role it was checked against; everything else
    /// collapses to the generic per-flow message so internal failure detail
    /// never reaches the visitor.
    pub fn user_message(&self, flow: AuthFlow) -> String {
        match self {
            AuthError::Validation { message } | AuthError::Rejected { message } => message.clone(),
            AuthError::AccountNotFound { role } => format!(
                "No {} account found with this email. Please register first.",
                role
            ),
            _ => match flow {
                AuthFlow::Login => "An error occurred during login".to_string(),
                AuthFlow::Register => "An error occurred during registration".to_string(),
            },
        }
    }
}

impl From<serde_json::Error> for AuthError {
    fn from(error: serde_json::Error) -> Self {
        AuthError::Serialization {
            message: error.to_string(),
        }
    }
}

pub type ClientResult<T> = Result<T, AuthError>;
