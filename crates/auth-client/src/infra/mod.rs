//! Infrastructure layer: HTTP transport implementation.

pub mod http;
