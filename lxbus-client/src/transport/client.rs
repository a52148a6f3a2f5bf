//! Lookup server HTTP client.
//!
//! Speaks the two-endpoint contract of the lookup server: one call to
//! register a request for a stop code, one to ask how that request is
//! doing.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{RequestId, StopCode};

use super::TransportClient;
use super::convert::{convert_create_reply, convert_status_reply};
use super::error::TransportError;
use super::reply::{CreateReply, StatusReply};
use super::types::{CreateReplyDto, OneOrMany, StatusReplyDto};

/// Default path for registering a new lookup.
const DEFAULT_NEW_REQUEST_PATH: &str = "/api/newBusRequest";

/// Default path for polling a lookup.
const DEFAULT_STATUS_PATH: &str = "/api/updateBusRequest";

/// Default per-call timeout.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Server origin, e.g. `https://lxbus.example.org`
    pub base_url: String,
    /// Path of the create-request endpoint
    pub new_request_path: String,
    /// Path of the status endpoint
    pub status_path: String,
    /// Timeout for a single call in seconds
    pub timeout_secs: u64,
}

impl TransportConfig {
    /// Create a new config for the server at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            new_request_path: DEFAULT_NEW_REQUEST_PATH.to_string(),
            status_path: DEFAULT_STATUS_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Override the endpoint paths.
    pub fn with_paths(
        mut self,
        new_request_path: impl Into<String>,
        status_path: impl Into<String>,
    ) -> Self {
        self.new_request_path = new_request_path.into();
        self.status_path = status_path.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP implementation of [`TransportClient`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    new_request_url: String,
    status_url: String,
}

impl HttpTransport {
    /// Create a new transport with the given configuration.
    pub fn new(config: TransportConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        let base = config.base_url.trim_end_matches('/');
        Ok(Self {
            http,
            new_request_url: format!("{}{}", base, config.new_request_path),
            status_url: format!("{}{}", base, config.status_path),
        })
    }

    /// Turn an HTTP response into the first reply object it carries.
    ///
    /// The server answers finished polls with 400, so a body that parses
    /// as a reply wins over the status code.
    async fn read_reply<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, TransportError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(TransportError::Unauthorized);
        }

        let body = response.text().await?;

        if body.trim().is_empty() {
            return if status.is_success() {
                Err(TransportError::Empty)
            } else {
                Err(TransportError::Api {
                    status: status.as_u16(),
                    message: String::new(),
                })
            };
        }

        match serde_json::from_str::<OneOrMany<T>>(&body) {
            Ok(reply) => reply.into_first().ok_or(TransportError::Empty),
            Err(_) if !status.is_success() => Err(TransportError::Api {
                status: status.as_u16(),
                message: body,
            }),
            Err(e) => Err(TransportError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            }),
        }
    }
}

impl TransportClient for HttpTransport {
    async fn create_request(&self, stop_code: &StopCode) -> Result<CreateReply, TransportError> {
        debug!(%stop_code, url = %self.new_request_url, "creating lookup request");

        let response = self
            .http
            .post(&self.new_request_url)
            .form(&[("stopcode", stop_code.as_str())])
            .send()
            .await?;

        let dto: CreateReplyDto = Self::read_reply(response).await?;
        Ok(convert_create_reply(dto))
    }

    async fn get_status(&self, request_id: &RequestId) -> Result<StatusReply, TransportError> {
        debug!(%request_id, "polling lookup request");

        let response = self
            .http
            .get(&self.status_url)
            .query(&[("requestid", request_id.as_str())])
            .send()
            .await?;

        let dto: StatusReplyDto = Self::read_reply(response).await?;
        Ok(convert_status_reply(dto))
    }
}
