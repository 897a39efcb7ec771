//! Status and information display components

pub mod status_message;

pub use status_message::StatusMessageDisplay;
