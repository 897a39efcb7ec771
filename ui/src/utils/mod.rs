//! Utility Functions and Cross-Cutting Concerns
//!
//! This module provides utility functions and macros used throughout the application:
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **platform**: Cross-target timing helpers for delayed UI actions
//! - **validation**: Live form validation backing the registration inputs
//!
//! These utilities are designed to work consistently across native test runs
//! and WASM deployment targets.

pub mod console_macros;
pub mod platform;
pub mod validation;

pub use platform::*;
pub use validation::*;
