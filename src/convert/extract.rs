//! Title and body extraction from raw HTML text.
//!
//! Both extractors are plain regex scans over the whole file. The markup is
//! never parsed or validated, so malformed documents only ever hit the
//! fallbacks below.

use regex::Regex;
use std::sync::LazyLock;

/// Title used when a document has no `<title>` element.
pub const FALLBACK_TITLE: &str = "Documentation";

/// First `<title ...>...</title>`, shortest inner match.
static RE_TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

/// `<body ...>` up to the last `</body>`.
static RE_BODY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<body[^>]*>(.*)</body>").unwrap());

/// Trimmed text of the first `<title>` element, or `fallback`
/// (normally [`FALLBACK_TITLE`] through the config default).
pub fn extract_title<'a>(html: &'a str, fallback: &'a str) -> &'a str {
    RE_TITLE
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(fallback, |m| m.as_str().trim())
}

/// Trimmed inner markup of the `<body>` element.
///
/// Without a body element the whole input comes back untouched, so content is
/// never dropped.
pub fn extract_body_inner(html: &str) -> &str {
    RE_BODY
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map_or(html, |m| m.as_str().trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(html: &str) -> &str {
        extract_title(html, FALLBACK_TITLE)
    }

    // ------------------------------------------------------------------------
    // extract_title tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_title_simple() {
        let html = "<html><head><title>Home</title></head></html>";
        assert_eq!(title(html), "Home");
    }

    #[test]
    fn test_title_trimmed() {
        let html = "<title>\n    Class Foo | API   \n</title>";
        assert_eq!(title(html), "Class Foo | API");
    }

    #[test]
    fn test_title_case_insensitive() {
        let html = "<HEAD><TITLE>Upper</TITLE></HEAD>";
        assert_eq!(title(html), "Upper");

        let html = "<Title>Mixed</tItLe>";
        assert_eq!(title(html), "Mixed");
    }

    #[test]
    fn test_title_with_attributes() {
        let html = r#"<title lang="en" data-x="1">Attributed</title>"#;
        assert_eq!(title(html), "Attributed");
    }

    #[test]
    fn test_title_spans_lines() {
        let html = "<title>First\nSecond</title>";
        assert_eq!(title(html), "First\nSecond");
    }

    #[test]
    fn test_title_first_match_wins() {
        let html = "<title>One</title><svg><title>Two</title></svg>";
        assert_eq!(title(html), "One");
    }

    #[test]
    fn test_title_not_anchored_to_line_start() {
        let html = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Inline</title>";
        assert_eq!(title(html), "Inline");
    }

    #[test]
    fn test_title_missing_uses_fallback() {
        assert_eq!(title("<html><body>no title</body></html>"), "Documentation");
        assert_eq!(title(""), "Documentation");
    }

    #[test]
    fn test_title_unclosed_uses_fallback() {
        assert_eq!(title("<title>never closed"), "Documentation");
    }

    #[test]
    fn test_title_custom_fallback() {
        assert_eq!(extract_title("<p>x</p>", "API Reference"), "API Reference");
        assert_eq!(extract_title("<title>Set</title>", "API Reference"), "Set");
    }

    #[test]
    fn test_title_empty_element() {
        assert_eq!(title("<title>   </title>"), "");
    }

    #[test]
    fn test_title_unicode() {
        assert_eq!(title("<title>文档 · Référence</title>"), "文档 · Référence");
    }

    // ------------------------------------------------------------------------
    // extract_body_inner tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_body_simple() {
        let html = "<html><body><p>Hi</p></body></html>";
        assert_eq!(extract_body_inner(html), "<p>Hi</p>");
    }

    #[test]
    fn test_body_with_attributes() {
        let html = r#"<body class="phpdocumentor" id="top">
            <main>content</main>
        </body>"#;
        assert_eq!(extract_body_inner(html), "<main>content</main>");
    }

    #[test]
    fn test_body_case_insensitive() {
        let html = "<BODY>\n<p>Upper</p>\n</BODY>";
        assert_eq!(extract_body_inner(html), "<p>Upper</p>");
    }

    #[test]
    fn test_body_multiline_kept_inside() {
        let html = "<body>\n  <h1>A</h1>\n  <p>B</p>\n</body>";
        assert_eq!(extract_body_inner(html), "<h1>A</h1>\n  <p>B</p>");
    }

    #[test]
    fn test_body_runs_to_last_closing_tag() {
        let html = "<body><pre>&lt;/body&gt;</pre><code></body></code>tail</body>";
        assert_eq!(
            extract_body_inner(html),
            "<pre>&lt;/body&gt;</pre><code></body></code>tail"
        );
    }

    #[test]
    fn test_body_missing_returns_input() {
        let html = "  <div>fragment only</div>\n";
        assert_eq!(extract_body_inner(html), html);
    }

    #[test]
    fn test_body_unclosed_returns_input() {
        let html = "<html><body><p>cut off";
        assert_eq!(extract_body_inner(html), html);
    }

    #[test]
    fn test_body_empty() {
        assert_eq!(extract_body_inner("<body>\n\n</body>"), "");
    }
}
