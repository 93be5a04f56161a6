//! Fetching the page and its auxiliary resources.
//!
//! Network access is isolated behind the [`Fetcher`] trait so that the
//! checks and the scorer only ever see plain [`FetchResult`] data.
//!
//! - [`http`] - the production fetcher, built on `reqwest`'s blocking client
//! - [`mock`] - a canned fetcher for tests
//! - [`result`] - per-resource outcome types

pub mod http;
pub mod mock;
pub mod result;

pub use http::HttpFetcher;
pub use mock::StaticFetcher;
pub use result::{FetchFailure, FetchResult};

use serde::Serialize;
use url::Url;

use crate::target::Target;

/// The resources fetched for every audit, in fetch order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    /// The page itself.
    Page,
    /// `/robots.txt`
    Robots,
    /// `/sitemap.xml`
    Sitemap,
    /// `/favicon.ico`
    Favicon,
}

impl ResourceKind {
    /// All kinds, in fetch order.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Page,
        ResourceKind::Robots,
        ResourceKind::Sitemap,
        ResourceKind::Favicon,
    ];

    /// Path of the resource relative to the target origin.
    pub fn path(self) -> &'static str {
        match self {
            Self::Page => "/",
            Self::Robots => "/robots.txt",
            Self::Sitemap => "/sitemap.xml",
            Self::Favicon => "/favicon.ico",
        }
    }

    /// Whether the body is worth reading as text.
    pub fn reads_body(self) -> bool {
        !matches!(self, Self::Favicon)
    }
}

/// Something that can GET one resource and describe what happened.
///
/// Implementations must never panic or error out: every failure is folded
/// into the returned [`FetchResult`].
pub trait Fetcher {
    /// Fetch `url` as a resource of the given kind.
    fn fetch(&self, kind: ResourceKind, url: &Url) -> FetchResult;
}

/// Everything fetched for one audit, one slot per [`ResourceKind`].
#[derive(Debug, Clone)]
pub struct SiteSnapshot {
    pub page: FetchResult,
    pub robots: FetchResult,
    pub sitemap: FetchResult,
    pub favicon: FetchResult,
}

impl SiteSnapshot {
    /// Look up the result for a kind.
    pub fn get(&self, kind: ResourceKind) -> &FetchResult {
        match kind {
            ResourceKind::Page => &self.page,
            ResourceKind::Robots => &self.robots,
            ResourceKind::Sitemap => &self.sitemap,
            ResourceKind::Favicon => &self.favicon,
        }
    }

    /// The page body, but only if the page fetch succeeded.
    pub fn page_body(&self) -> &str {
        if self.page.success {
            &self.page.body
        } else {
            ""
        }
    }
}

/// Fetch every resource for `target`, one request each, in fixed order.
///
/// A failure on one resource never prevents the others from being fetched.
pub fn fetch_site(target: &Target, fetcher: &dyn Fetcher) -> SiteSnapshot {
    let fetch = |kind: ResourceKind| {
        let url = target.url_for(kind);
        let result = fetcher.fetch(kind, url);
        tracing::debug!(
            "Fetched {} -> success={} status={:?} in {:?}",
            url,
            result.success,
            result.status,
            result.elapsed
        );
        result
    };

    SiteSnapshot {
        page: fetch(ResourceKind::Page),
        robots: fetch(ResourceKind::Robots),
        sitemap: fetch(ResourceKind::Sitemap),
        favicon: fetch(ResourceKind::Favicon),
    }
}
