//! Session Gateway Trait
//!
//! Interface to the remote session service. Implementation is in the
//! infrastructure layer; tests substitute scripted gateways.

use http::StatusCode;
use thiserror::Error;

use crate::domain::credentials::Credentials;

/// A response the server actually produced
///
/// `message` carries the server-supplied `message` body field when one
/// was present on an error reply; success replies have no message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReply {
    /// HTTP status of the reply
    pub status: StatusCode,
    /// Server-supplied message, if the body carried one
    pub message: Option<String>,
}

impl ServerReply {
    pub fn new(status: StatusCode, message: Option<String>) -> Self {
        Self { status, message }
    }
}

/// Transport-level failure of a single request
///
/// The three variants partition every failure mode: the server replied
/// with an error status, the request went out but nothing came back, or
/// the request was never built.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The server responded with an error status
    #[error("server replied with status {}", .0.status)]
    Response(ServerReply),

    /// The request was sent but no response was received
    #[error("no response received: {0}")]
    NoResponse(String),

    /// The request could not be constructed
    #[error("failed to set up request: {0}")]
    Setup(String),
}

/// Session service gateway trait
#[trait_variant::make(SessionGateway: Send)]
pub trait LocalSessionGateway {
    /// Prime the anti-forgery cookie
    ///
    /// Must complete before [`submit_login`](Self::submit_login) is
    /// issued; the response body is ignored.
    async fn fetch_csrf_cookie(&self) -> Result<(), TransportError>;

    /// Submit the login request carrying the credentials
    ///
    /// The anti-forgery state established by the cookie fetch is attached
    /// by the transport automatically.
    async fn submit_login(
        &self,
        credentials: &Credentials,
    ) -> Result<ServerReply, TransportError>;
}
