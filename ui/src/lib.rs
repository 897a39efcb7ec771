//! This crate contains all shared UI components for the authentication front end.

pub mod app;
pub use app::AuthModal;

pub mod auth;
pub mod components;
pub mod services;
pub mod utils;
