//! Portal Authentication Client
//!
//! Clean Architecture structure:
//! - `domain/` - Validated value objects, gateway trait
//! - `application/` - Use cases and configuration
//! - `infra/` - reqwest transport implementation
//!
//! ## Features
//! - Pure credential validation (email shape + length, password length)
//! - Two-step anti-forgery handshake: cookie fetch, then login submit
//! - Total classification of every attempt into [`AuthOutcome`]
//! - Field-attached error messages for form rendering
//!
//! ## Failure Model
//! - Validation failures never reach the network
//! - Handshake failures are folded into the outcome enum at the
//!   authenticator boundary; nothing propagates as an uncaught error
//! - No automatic retries; every attempt is a fresh handshake

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::authenticate::{AuthOutcome, Authenticator};
pub use application::config::ClientConfig;
pub use application::sign_in::{SignInInput, SignInUseCase};
pub use domain::credentials::Credentials;
pub use domain::gateway::{ServerReply, SessionGateway, TransportError};
pub use error::{Field, FieldErrors};
pub use infra::http::HttpSessionGateway;
