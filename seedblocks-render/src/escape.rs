//! Context-appropriate output escaping.
//!
//! Plain text and attribute values are entity-encoded via `html-escape`.
//! Rich text passes through a constrained-markup filter that keeps a fixed
//! tag allowlist (anchor tags keep only a sanitized `href`) and drops
//! everything else.

use regex::Regex;
use std::sync::OnceLock;

/// Tags the rich-text filter lets through.
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "em", "h1", "h2", "h3", "h4", "i", "li", "ol", "p", "strong",
    "u",
];

/// Escape for plain text contexts.
pub fn text(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

/// Escape for double-quoted attribute values.
pub fn attr(value: &str) -> String {
    html_escape::encode_double_quoted_attribute(value).into_owned()
}

/// Sanitize a URL for href/src use. Only http(s), mailto, tel, and
/// relative/fragment URLs pass; anything else collapses to empty.
pub fn url(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_ascii_lowercase();
    let allowed_scheme = lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:");
    let relative = !lower.contains(':')
        && (trimmed.starts_with('/') || trimmed.starts_with('#') || trimmed.starts_with('.')
            || !trimmed.contains("//"));
    if allowed_scheme || relative {
        attr(trimmed)
    } else {
        tracing::debug!(url = trimmed, "rejected URL with disallowed scheme");
        String::new()
    }
}

fn tag_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?s)<\s*(/?)\s*([a-zA-Z][a-zA-Z0-9]*)([^>]*)>").unwrap())
}

fn href_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#"href\s*=\s*["']([^"']*)["']"#).unwrap())
}

/// Filter rich text down to the constrained markup subset.
///
/// Allowed tags survive with their attributes stripped (`<a>` keeps a
/// sanitized `href`); disallowed tags are removed while their inner text is
/// kept, matching the host CMS's post-content filter behavior.
pub fn rich_text(value: &str) -> String {
    tag_pattern()
        .replace_all(value, |caps: &regex::Captures<'_>| {
            let closing = &caps[1];
            let name = caps[2].to_ascii_lowercase();
            if !ALLOWED_TAGS.contains(&name.as_str()) {
                return String::new();
            }
            if !closing.is_empty() {
                return format!("</{name}>");
            }
            if name == "br" {
                return "<br />".to_string();
            }
            if name == "a" {
                let href = href_pattern()
                    .captures(&caps[3])
                    .map(|h| url(&h[1]))
                    .unwrap_or_default();
                if href.is_empty() {
                    return "<a>".to_string();
                }
                return format!(r#"<a href="{href}">"#);
            }
            format!("<{name}>")
        })
        .into_owned()
}

/// Wrap blank-line-separated chunks in paragraph tags, converting single
/// newlines to line breaks.
pub fn autop(value: &str) -> String {
    let normalized = value.replace("\r\n", "\n");
    normalized
        .split("\n\n")
        .map(str::trim)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| format!("<p>{}</p>", chunk.replace('\n', "<br />\n")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_encodes_entities() {
        assert_eq!(text("a < b & c"), "a &lt; b &amp; c");
    }

    #[test]
    fn attr_encodes_quotes() {
        assert_eq!(attr(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn url_allows_http_and_relative() {
        assert_eq!(url("https://example.com/a"), "https://example.com/a");
        assert_eq!(url("/posts/hello"), "/posts/hello");
        assert_eq!(url("#section"), "#section");
    }

    #[test]
    fn url_rejects_script_schemes() {
        assert_eq!(url("javascript:alert(1)"), "");
        assert_eq!(url("data:text/html,x"), "");
        assert_eq!(url(""), "");
    }

    #[test]
    fn rich_text_keeps_allowed_tags() {
        let input = "<p>Hello <strong>world</strong></p>";
        assert_eq!(rich_text(input), input);
    }

    #[test]
    fn rich_text_strips_disallowed_tags() {
        assert_eq!(rich_text("<script>alert(1)</script>"), "alert(1)");
        assert_eq!(rich_text("<div><p>kept</p></div>"), "<p>kept</p>");
    }

    #[test]
    fn rich_text_strips_attributes() {
        assert_eq!(
            rich_text(r#"<p class="x" onclick="evil()">hi</p>"#),
            "<p>hi</p>"
        );
    }

    #[test]
    fn rich_text_sanitizes_anchor_href() {
        assert_eq!(
            rich_text(r#"<a href="https://example.com" onclick="evil()">go</a>"#),
            r#"<a href="https://example.com">go</a>"#
        );
        assert_eq!(
            rich_text(r#"<a href="javascript:alert(1)">go</a>"#),
            "<a>go</a>"
        );
    }

    #[test]
    fn autop_wraps_paragraphs() {
        assert_eq!(
            autop("first\n\nsecond"),
            "<p>first</p>\n<p>second</p>"
        );
    }

    #[test]
    fn autop_converts_single_newlines() {
        assert_eq!(autop("a\nb"), "<p>a<br />\nb</p>");
    }

    #[test]
    fn autop_empty_is_empty() {
        assert_eq!(autop(""), "");
        assert_eq!(autop("\n\n"), "");
    }
}
