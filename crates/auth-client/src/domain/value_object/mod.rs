//! Value objects validated at construction.

pub mod email;
pub mod password;

pub use email::{Email, EmailError};
pub use password::{Password, PasswordError};
