//! Plain-text excerpts for text-card surfaces.

use once_cell::sync::Lazy;
use regex::Regex;

/// Max characters kept in a text-card preview.
pub const TEXT_CARD_PREVIEW_CHARS: usize = 280;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_RULE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^\s*(-{3,}|\*{3,})\s*$").expect("valid rule regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\*_`#>~\[\]]+").expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Reduces markdown-ish `content` to a single-line excerpt.
///
/// Rules:
/// - images are dropped, links keep their label;
/// - horizontal rules and emphasis/heading symbols are removed;
/// - whitespace collapses to single spaces;
/// - at most `max_chars` characters are kept, `...` marks a cut.
///
/// Returns `None` when nothing readable remains.
pub fn derive_text_preview(content: &str, max_chars: usize) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_rules = MARKDOWN_RULE_RE.replace_all(&without_links, " ");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_rules, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut excerpt = trimmed.chars().take(max_chars).collect::<String>();
    if trimmed.chars().count() > max_chars {
        excerpt.truncate(excerpt.trim_end().len());
        excerpt.push_str("...");
    }
    Some(excerpt)
}

#[cfg(test)]
mod tests {
    use super::derive_text_preview;

    #[test]
    fn strips_markdown_symbols() {
        let source = "# Title\n\n---\n* **bold** and `code` with [link](https://example.com)";
        let preview = derive_text_preview(source, 200).expect("preview should exist");
        assert_eq!(preview, "Title bold and code with link");
    }

    #[test]
    fn keeps_hyphenated_words() {
        let preview = derive_text_preview("0-DTE step-by-step", 200).expect("preview");
        assert_eq!(preview, "0-DTE step-by-step");
    }

    #[test]
    fn truncates_with_ellipsis() {
        let preview = derive_text_preview("abcdef ghijkl", 7).expect("preview");
        assert_eq!(preview, "abcdef...");
    }

    #[test]
    fn empty_after_stripping_returns_none() {
        assert_eq!(derive_text_preview("# **\n---", 10), None);
        assert_eq!(derive_text_preview("", 10), None);
    }
}
