//! User Interface Components
//!
//! This module contains reusable Dioxus components for the authentication UI:
//!
//! - **forms**: Login, registration, and role selection forms
//! - **display**: The single-slot status message banner
//! - **inputs**: Validated input fields and inline validation feedback
//!
//! All components are designed to work within the Dioxus framework and render
//! inside the authentication modal.

pub mod display;
pub mod forms;
pub mod inputs;
