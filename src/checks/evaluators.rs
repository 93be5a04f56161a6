//! One function per launch check.
//!
//! Body-dependent checks read [`SiteSnapshot::page_body`], which is empty
//! whenever the page fetch failed, so they degrade to a failure instead of
//! inspecting an error page.

use super::html;
use super::{CheckContext, CheckId, CheckOutcome};
use crate::fetch::{FetchResult, SiteSnapshot};

/// Target is served over HTTPS and the TLS connection produced a response.
pub fn ssl(ctx: &CheckContext<'_>) -> CheckOutcome {
    let page = &ctx.site.page;
    if !ctx.target.is_https() {
        return CheckOutcome::fail(
            CheckId::Ssl,
            format!(
                "Serve the site over HTTPS (target uses {})",
                ctx.target.url().scheme()
            ),
        );
    }
    if !page.connected() {
        return CheckOutcome::fail(
            CheckId::Ssl,
            format!("HTTPS connection failed: {}", page.describe()),
        );
    }
    CheckOutcome::pass(CheckId::Ssl)
}

/// Page loaded successfully within the speed budget.
pub fn page_speed(ctx: &CheckContext<'_>) -> CheckOutcome {
    let page = &ctx.site.page;
    if !page.success {
        return CheckOutcome::fail(
            CheckId::PageSpeed,
            format!("Page did not load ({})", page.describe()),
        );
    }
    if page.elapsed >= ctx.speed_threshold {
        return CheckOutcome::fail(
            CheckId::PageSpeed,
            format!(
                "Loaded in {:.2}s; aim for under {:.1}s",
                page.elapsed.as_secs_f64(),
                ctx.speed_threshold.as_secs_f64()
            ),
        );
    }
    CheckOutcome::pass(CheckId::PageSpeed)
}

pub fn robots_txt(ctx: &CheckContext<'_>) -> CheckOutcome {
    file_present(CheckId::RobotsTxt, &ctx.site.robots)
}

pub fn sitemap(ctx: &CheckContext<'_>) -> CheckOutcome {
    file_present(CheckId::Sitemap, &ctx.site.sitemap)
}

fn file_present(id: CheckId, result: &FetchResult) -> CheckOutcome {
    if result.success {
        CheckOutcome::pass(id)
    } else {
        CheckOutcome::fail(
            id,
            format!("Add {} ({})", result.url.path(), result.describe()),
        )
    }
}

/// Properties required for a usable link preview.
const REQUIRED_OG_PROPERTIES: [&str; 2] = ["og:title", "og:description"];

/// Both `og:title` and `og:description` property tags are present.
pub fn open_graph(ctx: &CheckContext<'_>) -> CheckOutcome {
    if let Some(outcome) = body_unavailable(CheckId::OpenGraph, ctx.site) {
        return outcome;
    }
    let body = ctx.site.page_body();
    let missing: Vec<&str> = REQUIRED_OG_PROPERTIES
        .iter()
        .copied()
        .filter(|property| !html::has_meta_property(body, property))
        .collect();

    if missing.is_empty() {
        CheckOutcome::pass(CheckId::OpenGraph)
    } else {
        let tags = if missing.len() == 1 { "tag" } else { "tags" };
        CheckOutcome::fail(
            CheckId::OpenGraph,
            format!("Add {} meta {}", missing.join(" and "), tags),
        )
    }
}

/// A description meta tag with non-blank content.
pub fn meta_description(ctx: &CheckContext<'_>) -> CheckOutcome {
    if let Some(outcome) = body_unavailable(CheckId::MetaDescription, ctx.site) {
        return outcome;
    }
    match html::meta_name_content(ctx.site.page_body(), "description") {
        Some(content) if !content.trim().is_empty() => {
            CheckOutcome::pass(CheckId::MetaDescription)
        }
        Some(_) => CheckOutcome::fail(
            CheckId::MetaDescription,
            "Description meta tag has empty content",
        ),
        None => CheckOutcome::fail(
            CheckId::MetaDescription,
            r#"Add <meta name="description" content="...">"#,
        ),
    }
}

pub fn mobile_viewport(ctx: &CheckContext<'_>) -> CheckOutcome {
    if let Some(outcome) = body_unavailable(CheckId::MobileViewport, ctx.site) {
        return outcome;
    }
    if html::meta_name_content(ctx.site.page_body(), "viewport").is_some() {
        CheckOutcome::pass(CheckId::MobileViewport)
    } else {
        CheckOutcome::fail(
            CheckId::MobileViewport,
            r#"Add <meta name="viewport" content="width=device-width, initial-scale=1">"#,
        )
    }
}

/// `/favicon.ico` resolves, or the page links an icon.
pub fn favicon(ctx: &CheckContext<'_>) -> CheckOutcome {
    if ctx.site.favicon.success || html::has_icon_link(ctx.site.page_body()) {
        CheckOutcome::pass(CheckId::Favicon)
    } else {
        CheckOutcome::fail(
            CheckId::Favicon,
            format!(
                r#"Add /favicon.ico or a <link rel="icon"> tag (favicon.ico: {})"#,
                ctx.site.favicon.describe()
            ),
        )
    }
}

fn body_unavailable(id: CheckId, site: &SiteSnapshot) -> Option<CheckOutcome> {
    if site.page.success {
        None
    } else {
        Some(CheckOutcome::fail(
            id,
            format!("Page body unavailable ({})", site.page.describe()),
        ))
    }
}
