// Client-side functionality for the authentication modal
//
// This module provides a complete client-side implementation for:
// - The two-phase login protocol (existence check, then credential check)
// - Single-call registration
// - Session persistence in browser sessionStorage
//
// Everything the submission controller needs is expressed as traits here, so
// the same protocol runs in the browser and natively under test.

pub mod api_client;
pub mod errors;
pub mod session;
pub mod traits;
pub mod types;

// Re-export core types for easy access
pub use types::{
    CheckUserRequest, CheckUserResponse, LoginRequest, LoginResponse, RegisterRequest,
    RegisterResponse, SessionRecord,
};

// Re-export error types
pub use errors::{AuthError, AuthFlow, ClientResult};

// Re-export client classes and seams
pub use api_client::ApiClient;
pub use session::{BrowserSessionStore, MemorySessionStore};
pub use traits::{AuthBackend, ModalHandle, Navigator, SessionStore};

// Convenience functions for host pages outside the modal
pub mod compat {
    //! Session helpers for host pages that only need to know who is signed
    //! in, without constructing the full client stack.

    use super::*;

    /// The identity stored by the last successful login, if any.
    pub fn current_session() -> Option<SessionRecord> {
        BrowserSessionStore::new().load().ok().flatten()
    }

    /// Drop the stored identity (logout). A storage failure is logged rather
    /// than surfaced; the host page has no recovery beyond retrying.
    pub fn clear_session() {
        if let Err(e) = BrowserSessionStore::new().clear() {
            crate::console_error!("[Auth] Failed to clear stored session: {}", e);
        }
    }
}
