//! Collaborator seams for the authentication controller
//!
//! The submission protocol drives everything through these traits, so the
//! same controller runs against the real browser stack in WASM builds and
//! against in-memory doubles in native tests.

use async_trait::async_trait;

use super::errors::ClientResult;
use super::types::{
    CheckUserRequest, CheckUserResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, SessionRecord,
};

/// Trait for the authentication API endpoints
#[async_trait(?Send)]
pub trait AuthBackend {
    /// Ask whether an account exists for this email under this role
    async fn check_user(&self, request: &CheckUserRequest) -> ClientResult<CheckUserResponse>;

    /// Verify credentials for an existing account
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;

    /// Create a new account in a single call
    async fn register(&self, request: &RegisterRequest) -> ClientResult<RegisterResponse>;
}

/// Trait for session persistence
pub trait SessionStore {
    /// Persist a signed-in identity for the rest of the browser session
    fn store(&self, record: &SessionRecord) -> ClientResult<()>;

    /// Load the stored identity, if a complete one exists
    fn load(&self) -> ClientResult<Option<SessionRecord>>;

    /// Forget the stored identity
    fn clear(&self) -> ClientResult<()>;
}

/// Trait for the surrounding modal widget
pub trait ModalHandle {
    /// Dismiss the modal once a submission has fully succeeded
    fn hide(&self);
}

/// Trait for leaving the page after a successful submission
pub trait Navigator {
    fn redirect_home(&self);
}
