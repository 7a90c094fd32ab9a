//! Application layer: use cases and configuration.

pub mod authenticate;
pub mod config;
pub mod sign_in;
