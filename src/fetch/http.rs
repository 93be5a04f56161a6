//! HTTP resource fetching.
//!
//! Provides [`HttpFetcher`], the [`Fetcher`] used for real audits. Each
//! request gets its own timeout; transport errors are classified into
//! [`FetchFailure`] instead of being returned.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::time::{Duration, Instant};

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use url::Url;

use crate::config::FetchConfig;
use crate::error::{LaunchError, Result};

use super::{FetchFailure, FetchResult, Fetcher, ResourceKind};

/// Redirects followed before giving up.
pub const MAX_REDIRECTS: usize = 10;

/// Fetches resources over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    page_timeout: Duration,
    resource_timeout: Duration,
}

impl HttpFetcher {
    /// Create a fetcher from configuration.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        Self::with_timeouts(
            config.page_timeout(),
            config.resource_timeout(),
            &config.user_agent,
        )
    }

    /// Create a fetcher with explicit timeouts.
    pub fn with_timeouts(
        page_timeout: Duration,
        resource_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| LaunchError::HttpClient {
                message: error_chain(&e),
            })?;

        Ok(Self {
            client,
            page_timeout,
            resource_timeout,
        })
    }

    /// Timeout applied to requests for the given resource.
    pub fn timeout_for(&self, kind: ResourceKind) -> Duration {
        match kind {
            ResourceKind::Page => self.page_timeout,
            _ => self.resource_timeout,
        }
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, kind: ResourceKind, url: &Url) -> FetchResult {
        let start = Instant::now();

        let response = match self
            .client
            .get(url.clone())
            .timeout(self.timeout_for(kind))
            .send()
        {
            Ok(response) => response,
            Err(e) => {
                let failure = classify(&e);
                tracing::debug!("GET {} failed: {}", url, error_chain(&e));
                let mut result = FetchResult::from_failure(kind, url.clone(), failure);
                result.elapsed = start.elapsed();
                return result;
            }
        };

        let status = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_ascii_lowercase(), v.to_string()))
            })
            .collect();

        let (body, body_failure) = if kind.reads_body() {
            match response.text() {
                Ok(text) => (text, None),
                Err(e) => {
                    tracing::debug!("Reading body of {} failed: {}", url, error_chain(&e));
                    let failure = if e.is_timeout() {
                        FetchFailure::Timeout
                    } else {
                        FetchFailure::Body(error_chain(&e))
                    };
                    (String::new(), Some(failure))
                }
            }
        } else {
            (String::new(), None)
        };

        let elapsed = start.elapsed();
        let mut result = FetchResult::from_response(kind, url.clone(), status, elapsed);
        result.headers = headers;
        result.body = body;
        if let Some(failure) = body_failure {
            result.success = false;
            result.failure = Some(failure);
        }
        result
    }
}

/// Map a transport error onto a [`FetchFailure`].
fn classify(error: &reqwest::Error) -> FetchFailure {
    let detail = error_chain(error);
    if error.is_timeout() {
        return FetchFailure::Timeout;
    }
    // The outermost message embeds the URL, so only the causes are inspected.
    let causes = error
        .source()
        .map(|cause| error_chain(cause))
        .unwrap_or_default();
    if looks_like_tls(&causes) {
        return FetchFailure::Tls(detail);
    }
    if error.is_connect() {
        return FetchFailure::Connect(detail);
    }
    if let Some(status) = error.status() {
        return FetchFailure::Status(status.as_u16());
    }
    FetchFailure::Unexpected(detail)
}

fn looks_like_tls(detail: &str) -> bool {
    let lower = detail.to_ascii_lowercase();
    ["certificate", "tls", "ssl", "handshake"]
        .iter()
        .any(|needle| lower.contains(needle))
}

/// Flatten an error and its sources into `outer: inner: root`.
fn error_chain(error: &dyn StdError) -> String {
    let mut parts = vec![error.to_string()];
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if parts.last() != Some(&text) {
            parts.push(text);
        }
        source = cause.source();
    }
    parts.join(": ")
}
