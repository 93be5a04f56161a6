//! Launch platform presence lookup.
//!
//! An optional, unscored extra: searches launch platforms for the product
//! name (derived from the target host) to show whether the product has been
//! posted anywhere yet. Lookup failures are reported as unknown, never as
//! errors.

use anyhow::{Context, Result as AnyResult};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use url::Url;

use crate::config::{FetchConfig, PresenceConfig};
use crate::error::{LaunchError, Result};
use crate::target::Target;

/// Outcome of one platform lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenceResult {
    /// Platform display name.
    pub platform: &'static str,
    /// Term searched for.
    pub query: String,
    /// `Some(true)` if mentioned, `Some(false)` if not, `None` if unknown.
    pub found: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Vec<serde_json::Value>,
}

/// Looks up the target on launch platforms.
pub struct PresenceChecker {
    client: Client,
    hacker_news_url: String,
}

impl PresenceChecker {
    /// Create a checker using the resource timeout and user agent.
    pub fn new(presence: &PresenceConfig, fetch: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(fetch.user_agent.as_str())
            .timeout(fetch.resource_timeout())
            .build()
            .map_err(|e| LaunchError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            hacker_news_url: presence.hacker_news_url.clone(),
        })
    }

    /// Look up the target on every platform.
    pub fn check(&self, target: &Target) -> Vec<PresenceResult> {
        let Some(term) = search_term(target.host()) else {
            tracing::debug!("No search term for host {}", target.host());
            return Vec::new();
        };

        let found = match self.hacker_news(&term) {
            Ok(hits) => Some(hits > 0),
            Err(e) => {
                tracing::debug!("Hacker News lookup failed: {:#}", e);
                None
            }
        };

        vec![PresenceResult {
            platform: "Hacker News",
            query: term,
            found,
        }]
    }

    /// Number of Hacker News stories matching `term`.
    fn hacker_news(&self, term: &str) -> AnyResult<usize> {
        let url = Url::parse_with_params(
            &self.hacker_news_url,
            &[("query", term), ("tags", "story")],
        )
        .with_context(|| format!("Invalid search URL {}", self.hacker_news_url))?;

        let response = self
            .client
            .get(url)
            .send()
            .context("Search request failed")?
            .error_for_status()
            .context("Search returned an error status")?;

        let body: SearchResponse = response.json().context("Unexpected search response")?;
        Ok(body.hits.len())
    }
}

/// Product name guessed from a host: first label, ignoring `www.`.
///
/// Returns `None` for IP literals.
pub fn search_term(host: &str) -> Option<String> {
    let host = host.trim_end_matches('.');
    if host.is_empty() || host.trim_matches(['[', ']']).parse::<IpAddr>().is_ok() {
        return None;
    }
    let host = host.strip_prefix("www.").unwrap_or(host);
    host.split('.')
        .next()
        .filter(|label| !label.is_empty())
        .map(str::to_ascii_lowercase)
}
