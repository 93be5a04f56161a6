//! Target resolution.
//!
//! Turns whatever the user typed (`example.com`, `http://localhost:8080/`,
//! `https://shop.example.com/landing?ref=hn`) into a [`Target`]: a parsed
//! absolute URL plus the URLs of the auxiliary resources checked alongside it.
//!
//! No network access happens here.

use std::fmt;

use url::Url;

use crate::error::{LaunchError, Result};
use crate::fetch::ResourceKind;

/// Scheme assumed when the input does not carry one.
pub const DEFAULT_SCHEME: &str = "https";

/// The resolved URL under audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    page: Url,
    robots: Url,
    sitemap: Url,
    favicon: Url,
}

impl Target {
    /// The page URL, as it will be requested.
    pub fn url(&self) -> &Url {
        &self.page
    }

    /// The host name (or IP literal) of the target.
    pub fn host(&self) -> &str {
        self.page.host_str().unwrap_or_default()
    }

    /// Whether the page is requested over TLS.
    pub fn is_https(&self) -> bool {
        self.page.scheme() == "https"
    }

    /// URL of the given resource, relative to the target's origin.
    pub fn url_for(&self, kind: ResourceKind) -> &Url {
        match kind {
            ResourceKind::Page => &self.page,
            ResourceKind::Robots => &self.robots,
            ResourceKind::Sitemap => &self.sitemap,
            ResourceKind::Favicon => &self.favicon,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.page)
    }
}

/// Resolve raw user input into a [`Target`].
///
/// # Errors
///
/// Returns [`LaunchError::InvalidTarget`] for empty input, embedded
/// whitespace, schemes other than `http`/`https`, or anything `url` refuses
/// to parse as an absolute URL with a host.
///
/// # Example
///
/// ```
/// use launchcheck::target::resolve_target;
///
/// let target = resolve_target("  example.com ").unwrap();
/// assert_eq!(target.url().as_str(), "https://example.com/");
/// assert!(target.is_https());
/// ```
pub fn resolve_target(raw: &str) -> Result<Target> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(LaunchError::invalid_target(raw, "target is empty"));
    }
    if input.chars().any(char::is_whitespace) {
        return Err(LaunchError::invalid_target(raw, "target contains whitespace"));
    }

    let candidate = match explicit_scheme(input) {
        Some(scheme) => {
            let scheme = scheme.to_ascii_lowercase();
            if scheme != "http" && scheme != "https" {
                return Err(LaunchError::invalid_target(
                    raw,
                    format!("unsupported scheme '{}'", scheme),
                ));
            }
            input.to_string()
        }
        None => format!("{}://{}", DEFAULT_SCHEME, input),
    };

    let page = Url::parse(&candidate)
        .map_err(|e| LaunchError::invalid_target(raw, e.to_string()))?;

    if page.host_str().map(str::is_empty).unwrap_or(true) {
        return Err(LaunchError::invalid_target(raw, "missing host"));
    }

    let join = |kind: ResourceKind| {
        page.join(kind.path())
            .map_err(|e| LaunchError::invalid_target(raw, e.to_string()))
    };

    let target = Target {
        robots: join(ResourceKind::Robots)?,
        sitemap: join(ResourceKind::Sitemap)?,
        favicon: join(ResourceKind::Favicon)?,
        page,
    };

    tracing::debug!("Resolved target {:?} -> {}", raw, target);
    Ok(target)
}

/// The scheme of `input`, if it starts with `<scheme>://`.
///
/// A scheme is an ASCII letter followed by letters, digits, `+`, `-` or `.`,
/// so a `://` inside a path or query is not mistaken for one.
fn explicit_scheme(input: &str) -> Option<&str> {
    let (scheme, _) = input.split_once("://")?;
    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let rest_valid = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    (starts_alpha && rest_valid).then_some(scheme)
}
