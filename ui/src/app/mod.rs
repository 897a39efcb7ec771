pub mod auth_modal;

pub use auth_modal::AuthModal;
