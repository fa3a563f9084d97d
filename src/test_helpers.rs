//! Shared test utilities for inspecting rendered HTML.
//!
//! Maud escapes text, so assertions against literal page strings go through
//! these helpers rather than raw `contains` on markup.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let html = render_html(&landing_page(), &SiteConfig::default());
//! assert!(visible_text(&html).contains("ocr.py"));
//! assert_eq!(element_text(&html, "pre").unwrap(), QUICK_START);
//! ```

/// Undo the entity escaping maud applies to text and attributes.
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Text content of the `<body>`, tags removed and entities decoded.
///
/// Skips `<head>` so stylesheet text never leaks into assertions.
pub fn visible_text(html: &str) -> String {
    let body = html.split_once("<body").map(|(_, rest)| rest).unwrap_or(html);
    let mut result = String::with_capacity(body.len());
    // `body` starts inside the opening tag
    let mut in_tag = body.len() != html.len();
    for c in body.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }
    unescape(&result)
}

/// Decoded inner text of the first `<tag ...>...</tag>` element.
pub fn element_text(html: &str, tag: &str) -> Option<String> {
    let open = html.find(&format!("<{tag}"))?;
    let content_start = open + html[open..].find('>')? + 1;
    let close = content_start + html[content_start..].find(&format!("</{tag}>"))?;
    Some(unescape(&html[content_start..close]))
}

#[test]
fn visible_text_strips_head_and_tags() {
    let html = "<html><head><style>.a{}</style></head><body class=\"x\"><p>a &amp; b</p></body></html>";
    assert_eq!(visible_text(html), "a & b");
}

#[test]
fn element_text_decodes_inner_text() {
    let html = "<div><pre class=\"q\">1 &lt; 2\nok</pre></div>";
    assert_eq!(element_text(html, "pre").as_deref(), Some("1 < 2\nok"));
    assert_eq!(element_text(html, "code"), None);
}
