//! Authenticate Use Case
//!
//! Runs the two-step handshake against the session service and folds
//! every possible outcome into [`AuthOutcome`]. Nothing escapes as an
//! error; the enum is total over the failure taxonomy.

use http::StatusCode;

use crate::domain::credentials::Credentials;
use crate::domain::gateway::{ServerReply, SessionGateway, TransportError};

/// Fallback shown when the server accepted the request without the
/// expected empty-success status.
pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";

/// Fallback shown when an error reply carried no message body.
pub const LOGIN_ERROR_MESSAGE: &str = "An error occurred during login.";

/// Classified result of one authentication attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// Server accepted the credentials (204 No Content)
    Success,
    /// Server rejected the credentials, or replied with an unexpected
    /// success status (treated as rejection, see below)
    InvalidCredentials(String),
    /// Request was sent but no response arrived (timeout, dropped
    /// connection)
    NetworkUnreachable,
    /// Request could not be constructed locally
    ClientError(String),
}

/// Authentication client
///
/// Each [`authenticate`](Self::authenticate) call performs a fresh,
/// independent handshake. Overlapping calls are allowed but not
/// deduplicated; the gateway's ambient cookie state is shared between
/// them.
pub struct Authenticator<G>
where
    G: SessionGateway,
{
    gateway: G,
}

impl<G> Authenticator<G>
where
    G: SessionGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Access the underlying gateway (for test assertions)
    #[cfg(test)]
    pub(crate) fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Run the handshake and classify the result
    ///
    /// The anti-forgery cookie fetch completes before the login submit
    /// begins; a failed fetch short-circuits the attempt.
    pub async fn authenticate(&self, credentials: &Credentials) -> AuthOutcome {
        let reply = match self.handshake(credentials).await {
            Ok(reply) => reply,
            Err(e) => return Self::classify_failure(e),
        };

        if reply.status == StatusCode::NO_CONTENT {
            tracing::debug!("login accepted");
            return AuthOutcome::Success;
        }

        // A success status other than 204 is treated as a rejection, the
        // same way the portal always has. The server did respond, so this
        // conflates a misbehaving server with bad credentials.
        tracing::warn!(
            status = %reply.status,
            "login replied with unexpected success status"
        );
        AuthOutcome::InvalidCredentials(LOGIN_FAILED_MESSAGE.to_string())
    }

    async fn handshake(&self, credentials: &Credentials) -> Result<ServerReply, TransportError> {
        self.gateway.fetch_csrf_cookie().await?;
        self.gateway.submit_login(credentials).await
    }

    fn classify_failure(error: TransportError) -> AuthOutcome {
        match error {
            TransportError::Response(reply) => {
                tracing::warn!(status = %reply.status, "login rejected by server");
                let message = reply
                    .message
                    .unwrap_or_else(|| LOGIN_ERROR_MESSAGE.to_string());
                AuthOutcome::InvalidCredentials(message)
            }
            TransportError::NoResponse(detail) => {
                tracing::warn!(detail = %detail, "no response from session service");
                AuthOutcome::NetworkUnreachable
            }
            TransportError::Setup(detail) => {
                tracing::error!(detail = %detail, "failed to construct login request");
                AuthOutcome::ClientError(detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Scripted gateway recording call order
    struct ScriptedGateway {
        csrf: Result<(), TransportError>,
        login: Result<ServerReply, TransportError>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl ScriptedGateway {
        fn new(
            csrf: Result<(), TransportError>,
            login: Result<ServerReply, TransportError>,
        ) -> Self {
            Self {
                csrf,
                login,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl SessionGateway for ScriptedGateway {
        async fn fetch_csrf_cookie(&self) -> Result<(), TransportError> {
            self.calls.lock().unwrap().push("csrf");
            self.csrf.clone()
        }

        async fn submit_login(
            &self,
            _credentials: &Credentials,
        ) -> Result<ServerReply, TransportError> {
            self.calls.lock().unwrap().push("login");
            self.login.clone()
        }
    }

    fn credentials() -> Credentials {
        Credentials::parse("hassan@example.com", "12345678").unwrap()
    }

    fn no_content() -> Result<ServerReply, TransportError> {
        Ok(ServerReply::new(StatusCode::NO_CONTENT, None))
    }

    #[tokio::test]
    async fn test_no_content_is_success() {
        let authenticator = Authenticator::new(ScriptedGateway::new(Ok(()), no_content()));
        let outcome = authenticator.authenticate(&credentials()).await;
        assert_eq!(outcome, AuthOutcome::Success);
    }

    #[tokio::test]
    async fn test_csrf_fetched_before_login() {
        let gateway = ScriptedGateway::new(Ok(()), no_content());
        let authenticator = Authenticator::new(gateway);
        authenticator.authenticate(&credentials()).await;
        assert_eq!(authenticator.gateway.calls(), vec!["csrf", "login"]);
    }

    #[tokio::test]
    async fn test_failed_csrf_short_circuits() {
        let gateway = ScriptedGateway::new(
            Err(TransportError::NoResponse("connection refused".into())),
            no_content(),
        );
        let authenticator = Authenticator::new(gateway);
        let outcome = authenticator.authenticate(&credentials()).await;
        assert_eq!(outcome, AuthOutcome::NetworkUnreachable);
        assert_eq!(authenticator.gateway.calls(), vec!["csrf"]);
    }

    #[tokio::test]
    async fn test_unexpected_success_status_is_rejection() {
        let authenticator = Authenticator::new(ScriptedGateway::new(
            Ok(()),
            Ok(ServerReply::new(StatusCode::OK, None)),
        ));
        let outcome = authenticator.authenticate(&credentials()).await;
        assert_eq!(
            outcome,
            AuthOutcome::InvalidCredentials(LOGIN_FAILED_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_error_status_uses_server_message() {
        let authenticator = Authenticator::new(ScriptedGateway::new(
            Ok(()),
            Err(TransportError::Response(ServerReply::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                Some("Bad password".to_string()),
            ))),
        ));
        let outcome = authenticator.authenticate(&credentials()).await;
        assert_eq!(
            outcome,
            AuthOutcome::InvalidCredentials("Bad password".to_string())
        );
    }

    #[tokio::test]
    async fn test_error_status_without_message_uses_fallback() {
        let authenticator = Authenticator::new(ScriptedGateway::new(
            Ok(()),
            Err(TransportError::Response(ServerReply::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                None,
            ))),
        ));
        let outcome = authenticator.authenticate(&credentials()).await;
        assert_eq!(
            outcome,
            AuthOutcome::InvalidCredentials(LOGIN_ERROR_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_no_response_is_network_unreachable() {
        let authenticator = Authenticator::new(ScriptedGateway::new(
            Ok(()),
            Err(TransportError::NoResponse("timed out".into())),
        ));
        let outcome = authenticator.authenticate(&credentials()).await;
        assert_eq!(outcome, AuthOutcome::NetworkUnreachable);
    }

    #[tokio::test]
    async fn test_setup_failure_is_client_error() {
        let authenticator = Authenticator::new(ScriptedGateway::new(
            Ok(()),
            Err(TransportError::Setup("invalid header value".into())),
        ));
        let outcome = authenticator.authenticate(&credentials()).await;
        assert_eq!(
            outcome,
            AuthOutcome::ClientError("invalid header value".to_string())
        );
    }

    #[tokio::test]
    async fn test_repeat_attempts_classify_identically() {
        let authenticator = Authenticator::new(ScriptedGateway::new(
            Ok(()),
            Err(TransportError::Response(ServerReply::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                Some("Bad password".to_string()),
            ))),
        ));
        let credentials = credentials();
        let first = authenticator.authenticate(&credentials).await;
        let second = authenticator.authenticate(&credentials).await;
        assert_eq!(first, second);
        assert_eq!(
            authenticator.gateway.calls(),
            vec!["csrf", "login", "csrf", "login"]
        );
    }
}
