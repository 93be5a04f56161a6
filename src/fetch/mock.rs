//! Canned fetcher for testing.
//!
//! `StaticFetcher` implements [`Fetcher`] without touching the network. Each
//! resource kind is answered from a pre-configured response or failure;
//! unconfigured kinds fail with a connection error. Every request is
//! recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use launchcheck::fetch::{fetch_site, FetchFailure, ResourceKind, StaticFetcher};
//! use launchcheck::target::resolve_target;
//! use std::time::Duration;
//!
//! let fetcher = StaticFetcher::new()
//!     .with_page(200, Duration::from_millis(300), "<html></html>")
//!     .with_status(ResourceKind::Robots, 200)
//!     .with_failure(ResourceKind::Sitemap, FetchFailure::Timeout);
//!
//! let target = resolve_target("example.com").unwrap();
//! let site = fetch_site(&target, &fetcher);
//!
//! assert!(site.page.success);
//! assert!(site.robots.success);
//! assert!(!site.sitemap.success);
//! assert_eq!(fetcher.requested().len(), 4);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use super::{FetchFailure, FetchResult, Fetcher, ResourceKind};

#[derive(Debug, Clone)]
enum Canned {
    Response {
        status: u16,
        elapsed: Duration,
        body: String,
    },
    Failure(FetchFailure),
}

/// Fetcher answering from canned responses.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    canned: HashMap<ResourceKind, Canned>,
    requested: RefCell<Vec<(ResourceKind, Url)>>,
}

impl StaticFetcher {
    /// A fetcher where every resource fails to connect.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the page request.
    pub fn with_page(self, status: u16, elapsed: Duration, body: &str) -> Self {
        self.with_response(ResourceKind::Page, status, elapsed, body)
    }

    /// Answer a request with a status and an empty body.
    pub fn with_status(self, kind: ResourceKind, status: u16) -> Self {
        self.with_response(kind, status, Duration::from_millis(10), "")
    }

    /// Answer a request with a full response.
    pub fn with_response(
        mut self,
        kind: ResourceKind,
        status: u16,
        elapsed: Duration,
        body: &str,
    ) -> Self {
        self.canned.insert(
            kind,
            Canned::Response {
                status,
                elapsed,
                body: body.to_string(),
            },
        );
        self
    }

    /// Fail a request.
    pub fn with_failure(mut self, kind: ResourceKind, failure: FetchFailure) -> Self {
        self.canned.insert(kind, Canned::Failure(failure));
        self
    }

    /// Every `(kind, url)` requested so far, in order.
    pub fn requested(&self) -> Vec<(ResourceKind, Url)> {
        self.requested.borrow().clone()
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, kind: ResourceKind, url: &Url) -> FetchResult {
        self.requested.borrow_mut().push((kind, url.clone()));

        match self.canned.get(&kind) {
            Some(Canned::Response {
                status,
                elapsed,
                body,
            }) => FetchResult::from_response(kind, url.clone(), *status, *elapsed)
                .with_body(body.clone()),
            Some(Canned::Failure(failure)) => {
                FetchResult::from_failure(kind, url.clone(), failure.clone())
            }
            None => FetchResult::from_failure(
                kind,
                url.clone(),
                FetchFailure::Connect("no canned response".to_string()),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://example.com/").unwrap()
    }

    #[test]
    fn unconfigured_kind_fails_to_connect() {
        let fetcher = StaticFetcher::new();
        let result = fetcher.fetch(ResourceKind::Favicon, &url());
        assert!(!result.success);
        assert!(matches!(result.failure, Some(FetchFailure::Connect(_))));
    }

    #[test]
    fn canned_response_carries_body_and_elapsed() {
        let fetcher = StaticFetcher::new().with_page(200, Duration::from_secs(1), "<p>hi</p>");
        let result = fetcher.fetch(ResourceKind::Page, &url());
        assert!(result.success);
        assert_eq!(result.elapsed, Duration::from_secs(1));
        assert_eq!(result.body, "<p>hi</p>");
    }

    #[test]
    fn canned_failure_is_returned() {
        let fetcher = StaticFetcher::new().with_failure(ResourceKind::Page, FetchFailure::Timeout);
        let result = fetcher.fetch(ResourceKind::Page, &url());
        assert_eq!(result.failure, Some(FetchFailure::Timeout));
    }

    #[test]
    fn records_requests() {
        let fetcher = StaticFetcher::new();
        fetcher.fetch(ResourceKind::Robots, &url());
        fetcher.fetch(ResourceKind::Page, &url());
        let kinds: Vec<_> = fetcher.requested().into_iter().map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![ResourceKind::Robots, ResourceKind::Page]);
    }
}
