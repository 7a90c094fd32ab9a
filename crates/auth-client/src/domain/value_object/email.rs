//! Email Value Object
//!
//! Represents a validated email address.
//! Basic shape validation only - the portal submits the address exactly
//! as typed, so no trimming or case normalization is applied.

use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Minimum email length
pub const EMAIL_MIN_LENGTH: usize = 2;

/// Maximum email length
pub const EMAIL_MAX_LENGTH: usize = 50;

/// Email validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmailError {
    /// Email is too short
    #[error("Email must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Email is too long
    #[error("Email must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Email does not look like an address
    #[error("Invalid email address")]
    InvalidFormat,
}

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> Result<Self, EmailError> {
        let email = email.into();

        let char_count = email.chars().count();

        if char_count < EMAIL_MIN_LENGTH {
            return Err(EmailError::TooShort {
                min: EMAIL_MIN_LENGTH,
                actual: char_count,
            });
        }

        if char_count > EMAIL_MAX_LENGTH {
            return Err(EmailError::TooLong {
                max: EMAIL_MAX_LENGTH,
                actual: char_count,
            });
        }

        if !Self::is_valid_format(&email) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(email))
    }

    /// Basic email format validation
    fn is_valid_format(email: &str) -> bool {
        // Must contain exactly one @
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() != 2 {
            return false;
        }

        let local = parts[0];
        let domain = parts[1];

        // Local part checks
        if local.is_empty() || local.len() > 64 {
            return false;
        }

        // Domain checks
        if domain.is_empty() || !domain.contains('.') {
            return false;
        }

        // Check domain has valid characters
        if !domain
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return false;
        }

        // Domain shouldn't start or end with dot or hyphen
        if domain.starts_with('.') || domain.ends_with('.') {
            return false;
        }
        if domain.starts_with('-') || domain.ends_with('-') {
            return false;
        }

        true
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Email {
    type Err = EmailError;

    fn from_str(s: &str) -> Result<Self, EmailError> {
        Email::new(s)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("hassan@example.com").is_ok());
    }

    #[test]
    fn test_email_invalid_format() {
        assert_eq!(
            Email::new("userexample.com"),
            Err(EmailError::InvalidFormat)
        );
        assert_eq!(Email::new("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(Email::new("@example.com"), Err(EmailError::InvalidFormat));
        assert_eq!(
            Email::new("user@@example.com"),
            Err(EmailError::InvalidFormat)
        );
        assert_eq!(Email::new("user@example"), Err(EmailError::InvalidFormat));
        assert_eq!(
            Email::new("user@.example.com"),
            Err(EmailError::InvalidFormat)
        );
    }

    #[test]
    fn test_email_too_short() {
        assert!(matches!(
            Email::new(""),
            Err(EmailError::TooShort { actual: 0, .. })
        ));
        assert!(matches!(
            Email::new("a"),
            Err(EmailError::TooShort { actual: 1, .. })
        ));
    }

    #[test]
    fn test_email_too_long() {
        // 64-char local part keeps the shape valid while exceeding the cap
        let local = "a".repeat(EMAIL_MAX_LENGTH);
        let email = format!("{}@example.com", local);
        assert!(matches!(email.parse::<Email>(), Err(EmailError::TooLong { .. })));
    }

    #[test]
    fn test_email_not_normalized() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
    }
}
