//! Lightweight HTML tag scanning.
//!
//! Only `<meta>` and `<link>` tags are of interest, so rather than building a
//! DOM this scans for those tags with regexes and splits out their
//! attributes. Attribute names are matched case-insensitively; values may be
//! double-quoted, single-quoted or bare. Malformed markup simply yields fewer
//! tags.

use regex::Regex;
use std::sync::LazyLock;

// --- Compiled regexes (one-time via LazyLock) ---

static META_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<meta\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#).unwrap()
});

static LINK_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<link\b((?:[^>"']|"[^"]*"|'[^']*')*)>"#).unwrap()
});

static ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+)))?"#)
        .unwrap()
});

/// One scanned tag and its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTag {
    attrs: Vec<(String, String)>,
}

impl HtmlTag {
    fn parse(attr_text: &str) -> Self {
        // Drop the self-closing marker of `<link ... />`.
        let attr_text = attr_text.trim_end();
        let attr_text = attr_text.strip_suffix('/').unwrap_or(attr_text);
        let attrs = ATTRIBUTE
            .captures_iter(attr_text)
            .map(|caps| {
                let name = caps[1].to_ascii_lowercase();
                let value = caps
                    .get(2)
                    .or_else(|| caps.get(3))
                    .or_else(|| caps.get(4))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                (name, value)
            })
            .collect();
        Self { attrs }
    }

    /// Value of the first attribute with this name (case-insensitive).
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Whether the attribute equals `value`, ignoring ASCII case and
    /// surrounding whitespace.
    pub fn attr_is(&self, name: &str, value: &str) -> bool {
        self.attr(name)
            .map(|v| v.trim().eq_ignore_ascii_case(value))
            .unwrap_or(false)
    }
}

/// All `<meta>` tags in document order.
pub fn meta_tags(html: &str) -> Vec<HtmlTag> {
    META_TAG
        .captures_iter(html)
        .map(|caps| HtmlTag::parse(&caps[1]))
        .collect()
}

/// All `<link>` tags in document order.
pub fn link_tags(html: &str) -> Vec<HtmlTag> {
    LINK_TAG
        .captures_iter(html)
        .map(|caps| HtmlTag::parse(&caps[1]))
        .collect()
}

/// Whether a `<meta property="...">` tag with this property exists.
pub fn has_meta_property(html: &str, property: &str) -> bool {
    meta_tags(html)
        .iter()
        .any(|tag| tag.attr_is("property", property))
}

/// Content of the first `<meta name="...">` tag with this name.
///
/// Returns `Some("")` when the tag exists without a `content` attribute.
pub fn meta_name_content(html: &str, name: &str) -> Option<String> {
    meta_tags(html)
        .into_iter()
        .find(|tag| tag.attr_is("name", name))
        .map(|tag| tag.attr("content").unwrap_or_default().to_string())
}

/// Whether the page links a favicon.
///
/// Any `<link>` with an `icon`-style `rel` token (`icon`, `shortcut icon`,
/// `apple-touch-icon`, `mask-icon`) counts, as does one whose `href`
/// mentions `favicon`.
pub fn has_icon_link(html: &str) -> bool {
    link_tags(html).iter().any(|tag| {
        let rel_is_icon = tag
            .attr("rel")
            .map(|rel| {
                rel.split_ascii_whitespace().any(|token| {
                    let token = token.to_ascii_lowercase();
                    token == "icon" || token.ends_with("-icon")
                })
            })
            .unwrap_or(false);
        let href_is_favicon = tag
            .attr("href")
            .map(|href| href.to_ascii_lowercase().contains("favicon"))
            .unwrap_or(false);
        rel_is_icon || href_is_favicon
    })
}
