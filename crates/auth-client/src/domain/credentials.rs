//! Credentials
//!
//! A validated email/password pair, immutable for the lifetime of one
//! submit attempt. Validation is pure and runs before any network call.

use serde::Serialize;

use crate::domain::value_object::{email::Email, password::Password};
use crate::error::{Field, FieldErrors};

/// Validated login credentials
///
/// Serializes to the login request body: `{"email": ..., "password": ...}`.
#[derive(Debug, Serialize)]
pub struct Credentials {
    email: Email,
    password: Password,
}

impl Credentials {
    /// Validate raw input strings into credentials
    ///
    /// Both fields are checked so the caller receives every violation in
    /// one pass, keyed by field name.
    pub fn parse(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let email = match Email::new(email) {
            Ok(email) => Some(email),
            Err(e) => {
                errors.insert(Field::Email, e.to_string());
                None
            }
        };

        let password = match Password::new(password) {
            Ok(password) => Some(password),
            Err(e) => {
                errors.insert(Field::Password, e.to_string());
                None
            }
        };

        match (email, password) {
            (Some(email), Some(password)) if errors.is_empty() => {
                Ok(Self { email, password })
            }
            _ => Err(errors),
        }
    }

    /// The validated email address
    pub fn email(&self) -> &Email {
        &self.email
    }
}
