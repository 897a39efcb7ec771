//! Infrastructure Services
//!
//! This module provides the core infrastructure services for the authentication UI:
//!
//! - **client**: API client, session persistence, and the trait seams the
//!   submission controller drives
//! - **config**: Configuration management and global settings
//!
//! The services are designed to be WASM-first, using browser APIs and async
//! traits without Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
