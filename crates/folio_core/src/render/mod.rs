//! HTML rendering of view models.
//!
//! # Responsibility
//! - Produce complete HTML documents for listing, detail and missing pages.
//! - Emit the open overlay at the top layer of `<body>`.
//!
//! # Invariants
//! - Every text and attribute value passes through `escape_html`.
//! - Asset references are joined onto a prefix but never inspected.

pub mod html;
pub mod page;

/// Document-level rendering knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// `<title>` suffix; falls back to the profile name when `None`.
    pub site_title: Option<String>,
    /// Stylesheet href emitted in `<head>`.
    pub stylesheet: String,
    /// Prefix joined onto relative asset references.
    pub asset_prefix: String,
    /// Footer copyright year.
    pub copyright_year: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_title: None,
            stylesheet: "/index.css".to_string(),
            asset_prefix: "/".to_string(),
            copyright_year: current_year(),
        }
    }
}

/// Current calendar year in UTC.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
