//! HTML text helpers.

use std::borrow::Cow;

/// Escapes `value` for HTML text and double-quoted attribute positions.
pub fn escape_html(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|ch| matches!(ch, '&' | '<' | '>' | '"' | '\''))
    {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 16);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    Cow::Owned(escaped)
}

/// Joins an opaque asset reference onto the configured prefix.
///
/// Absolute URLs and root-relative paths are kept as-is.
pub fn asset_url(prefix: &str, reference: &str) -> String {
    if reference.contains("://") || reference.starts_with('/') {
        return reference.to_string();
    }
    if prefix.is_empty() {
        return reference.to_string();
    }
    format!("{}/{}", prefix.trim_end_matches('/'), reference)
}

#[cfg(test)]
mod tests {
    use super::{asset_url, escape_html};
    use std::borrow::Cow;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(escape_html("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn asset_url_joins_prefix_once() {
        assert_eq!(asset_url("/", "projects/a.jpg"), "/projects/a.jpg");
        assert_eq!(asset_url("/static/", "projects/a.jpg"), "/static/projects/a.jpg");
        assert_eq!(asset_url("", "projects/a.jpg"), "projects/a.jpg");
        assert_eq!(asset_url("/static", "https://cdn/x.png"), "https://cdn/x.png");
        assert_eq!(asset_url("/static", "/abs.png"), "/abs.png");
    }
}
