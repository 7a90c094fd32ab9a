//! Sign In Use Case
//!
//! Validates raw input, runs the authentication handshake, and converts
//! the outcome into the field-attached messages the caller renders.
//! Validation failures never reach the gateway.

use crate::application::authenticate::{AuthOutcome, Authenticator};
use crate::domain::credentials::Credentials;
use crate::domain::gateway::SessionGateway;
use crate::error::{Field, FieldErrors};

/// Shown when the request went out but nothing came back.
pub const NO_RESPONSE_MESSAGE: &str = "No response from the server. Please try again later.";

/// Shown when the request could not be constructed locally.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Sign in input
#[derive(Debug, Clone)]
pub struct SignInInput {
    /// Email as typed
    pub email: String,
    /// Password as typed
    pub password: String,
}

/// Sign in use case
pub struct SignInUseCase<G>
where
    G: SessionGateway,
{
    authenticator: Authenticator<G>,
}

impl<G> SignInUseCase<G>
where
    G: SessionGateway,
{
    pub fn new(gateway: G) -> Self {
        Self {
            authenticator: Authenticator::new(gateway),
        }
    }

    /// Run one sign-in attempt
    ///
    /// `Ok(())` means the caller should transition to the authenticated
    /// view. Every failure comes back as a message on a specific field;
    /// handshake failures attach to the email field, matching the form's
    /// established contract.
    pub async fn execute(&self, input: SignInInput) -> Result<(), FieldErrors> {
        let credentials = Credentials::parse(input.email, input.password)?;

        match self.authenticator.authenticate(&credentials).await {
            AuthOutcome::Success => Ok(()),
            AuthOutcome::InvalidCredentials(message) => {
                Err(FieldErrors::single(Field::Email, message))
            }
            AuthOutcome::NetworkUnreachable => {
                Err(FieldErrors::single(Field::Email, NO_RESPONSE_MESSAGE))
            }
            AuthOutcome::ClientError(_) => {
                Err(FieldErrors::single(Field::Email, UNEXPECTED_ERROR_MESSAGE))
            }
        }
    }
}
