//! HTTP Session Gateway
//!
//! reqwest-backed implementation of [`SessionGateway`]. The client's
//! cookie store holds the anti-forgery token set by the csrf-cookie
//! fetch and attaches it to the login submit automatically.

use http::header;
use reqwest::Url;
use serde::Deserialize;

use crate::application::config::ClientConfig;
use crate::domain::credentials::Credentials;
use crate::domain::gateway::{ServerReply, SessionGateway, TransportError};

/// Anti-forgery cookie endpoint
const CSRF_COOKIE_PATH: &str = "/sanctum/csrf-cookie";

/// Login endpoint
const LOGIN_PATH: &str = "/login";

/// Error body shape the session service uses for rejections
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Session gateway over HTTP
pub struct HttpSessionGateway {
    http: reqwest::Client,
    base_url: Url,
}

impl HttpSessionGateway {
    /// Build a gateway from configuration
    ///
    /// Fails with [`TransportError::Setup`] when the base URL does not
    /// parse or the underlying client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| TransportError::Setup(format!("invalid base URL: {e}")))?;

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| TransportError::Setup(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url, TransportError> {
        self.base_url
            .join(path)
            .map_err(|e| TransportError::Setup(format!("invalid endpoint {path}: {e}")))
    }

    /// Map a reqwest send failure onto the transport taxonomy
    ///
    /// Builder errors mean the request never left the client; everything
    /// else means it went out and nothing usable came back.
    fn classify_send_error(error: reqwest::Error) -> TransportError {
        if error.is_builder() {
            TransportError::Setup(error.to_string())
        } else {
            TransportError::NoResponse(error.to_string())
        }
    }

    /// Convert an error-status response, probing the body for a message
    async fn rejection(response: reqwest::Response) -> TransportError {
        let status = response.status();
        let message = response.json::<ErrorBody>().await.ok().map(|b| b.message);
        TransportError::Response(ServerReply::new(status, message))
    }
}

impl SessionGateway for HttpSessionGateway {
    async fn fetch_csrf_cookie(&self) -> Result<(), TransportError> {
        let url = self.endpoint(CSRF_COOKIE_PATH)?;
        let response = self
            .http
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(Self::classify_send_error)?;

        if response.status().is_success() {
            // Body ignored; the Set-Cookie side effect is all we need.
            return Ok(());
        }

        Err(Self::rejection(response).await)
    }

    async fn submit_login(
        &self,
        credentials: &Credentials,
    ) -> Result<ServerReply, TransportError> {
        let url = self.endpoint(LOGIN_PATH)?;
        let response = self
            .http
            .post(url)
            .header(header::ACCEPT, "application/json")
            .json(credentials)
            .send()
            .await
            .map_err(Self::classify_send_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(ServerReply::new(status, None));
        }

        Err(Self::rejection(response).await)
    }
}
