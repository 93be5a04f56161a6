//! Per-resource fetch outcome.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;
use url::Url;

use super::ResourceKind;

/// Why a resource fetch did not succeed.
///
/// Recorded on the [`FetchResult`]; never propagated as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum FetchFailure {
    /// The request exceeded its timeout.
    Timeout,
    /// DNS resolution or TCP connection failed.
    Connect(String),
    /// TLS handshake or certificate validation failed.
    Tls(String),
    /// A response arrived with a status outside 2xx/3xx.
    Status(u16),
    /// Headers arrived but the body could not be read.
    Body(String),
    /// Anything else the transport reported.
    Unexpected(String),
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timed out"),
            Self::Connect(msg) => write!(f, "connection failed: {}", msg),
            Self::Tls(msg) => write!(f, "TLS error: {}", msg),
            Self::Status(code) => write!(f, "HTTP {}", code),
            Self::Body(msg) => write!(f, "body unreadable: {}", msg),
            Self::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

/// What happened when one resource was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResult {
    /// Which resource this is.
    pub kind: ResourceKind,
    /// The URL that was requested.
    pub url: Url,
    /// Final status was 2xx or 3xx and the body (if read) was readable.
    pub success: bool,
    /// HTTP status, if any response arrived.
    pub status: Option<u16>,
    /// Wall-clock time from send until the body was read.
    pub elapsed: Duration,
    /// Response headers, names lower-cased.
    pub headers: BTreeMap<String, String>,
    /// Response body as text (empty when not read or not received).
    pub body: String,
    /// Why the fetch failed, if it did.
    pub failure: Option<FetchFailure>,
}

impl FetchResult {
    /// A result for a response with the given status and no body.
    ///
    /// Success is derived from the status: 2xx and 3xx succeed, everything
    /// else records [`FetchFailure::Status`].
    pub fn from_response(kind: ResourceKind, url: Url, status: u16, elapsed: Duration) -> Self {
        let success = is_success_status(status);
        Self {
            kind,
            url,
            success,
            status: Some(status),
            elapsed,
            headers: BTreeMap::new(),
            body: String::new(),
            failure: (!success).then_some(FetchFailure::Status(status)),
        }
    }

    /// A result for a request that produced no usable response.
    pub fn from_failure(kind: ResourceKind, url: Url, failure: FetchFailure) -> Self {
        let status = match failure {
            FetchFailure::Status(code) => Some(code),
            _ => None,
        };
        Self {
            kind,
            url,
            success: false,
            status,
            elapsed: Duration::ZERO,
            headers: BTreeMap::new(),
            body: String::new(),
            failure: Some(failure),
        }
    }

    /// Attach a body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Whether any HTTP response arrived, successful or not.
    pub fn connected(&self) -> bool {
        self.status.is_some()
    }

    /// Short human description of the outcome, e.g. `HTTP 404` or `timed out`.
    pub fn describe(&self) -> String {
        match (&self.failure, self.status) {
            (Some(failure), _) => failure.to_string(),
            (None, Some(code)) => format!("HTTP {}", code),
            (None, None) => "no response".to_string(),
        }
    }
}

/// 2xx and 3xx count as success.
pub fn is_success_status(status: u16) -> bool {
    (200..400).contains(&status)
}
