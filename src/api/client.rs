//! HTTP client for the remote game authority
//!
//! The authority owns the secret word and all evaluation logic; the
//! client only issues the four API calls and hands back the decoded
//! responses. Any non-2xx response is treated uniformly as a failure
//! carrying the status code and the body text.

use super::types::{GuessRequest, GuessResponse, StateResponse};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Error type for remote authority calls
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (connection refused, timeout, ...)
    Http(reqwest::Error),
    /// Non-2xx response; carries the status code and body text
    Status { code: u16, body: String },
    /// 2xx response whose body did not match the expected shape
    Decode(serde_json::Error),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "{err}"),
            Self::Status { code, body } => {
                if body.is_empty() {
                    write!(f, "HTTP {code}")
                } else {
                    write!(f, "HTTP {code}: {body}")
                }
            }
            Self::Decode(err) => write!(f, "resposta inválida do servidor: {err}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::Decode(err) => Some(err),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

/// The remote game authority, seen from the client
///
/// The seam between the session machinery and the network; tests
/// substitute an in-memory implementation.
pub trait GameAuthority {
    /// Start a session (POST)
    fn start(&self) -> Result<StateResponse, ApiError>;

    /// Fetch the current session state (GET)
    fn fetch_state(&self) -> Result<StateResponse, ApiError>;

    /// Submit a guess (POST)
    fn submit(&self, guess: &str) -> Result<GuessResponse, ApiError>;

    /// Start a new game (POST)
    fn new_game(&self) -> Result<StateResponse, ApiError>;
}

/// Blocking HTTP implementation of [`GameAuthority`]
pub struct HttpAuthority {
    base_url: String,
    client: Client,
}

impl HttpAuthority {
    /// Create a client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Ok(Self { base_url, client })
    }

    /// Base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn post<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.post(url).send()?;
        decode(path, response)
    }

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(url).send()?;
        decode(path, response)
    }
}

fn decode<T: DeserializeOwned>(
    path: &str,
    response: reqwest::blocking::Response,
) -> Result<T, ApiError> {
    let code = response.status();
    let body = response.text()?;

    if !code.is_success() {
        warn!(path, code = code.as_u16(), "request failed");
        return Err(ApiError::Status {
            code: code.as_u16(),
            body,
        });
    }

    debug!(path, code = code.as_u16(), "request ok");
    serde_json::from_str(&body).map_err(ApiError::Decode)
}

impl GameAuthority for HttpAuthority {
    fn start(&self) -> Result<StateResponse, ApiError> {
        self.post("/api/start")
    }

    fn fetch_state(&self) -> Result<StateResponse, ApiError> {
        self.get("/api/state")
    }

    fn submit(&self, guess: &str) -> Result<GuessResponse, ApiError> {
        let url = format!("{}/api/guess", self.base_url);
        let response = self
            .client
            .post(url)
            .json(&GuessRequest { guess })
            .send()?;
        decode("/api/guess", response)
    }

    fn new_game(&self) -> Result<StateResponse, ApiError> {
        self.post("/api/new-game")
    }
}
