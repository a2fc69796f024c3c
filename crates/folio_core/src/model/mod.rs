//! Portfolio content model.
//!
//! # Responsibility
//! - Define the canonical records shared by the listing and detail views.
//! - Keep the serialized shape compatible with JSON content bundles.
//!
//! # Invariants
//! - Every project is identified by a stable, URL-safe string id.
//! - Records are immutable after load; there is no write path.
//! - Optional text fields never hold empty strings (normalized to `None`).
//! - Unrecognized optional tags load as absent; they never fail a bundle.

pub mod profile;
pub mod project;

use log::debug;
use serde::{Deserialize, Deserializer};

/// Normalizes optional text so blank values behave like absent ones.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

/// Serde adapter for `Option<String>` fields where `""` means "absent".
pub(crate) fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(non_empty(value))
}

/// Maps an optional tag through `parse`; unknown tags become `None`.
pub(crate) fn known_tag<T>(
    field: &str,
    tag: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    let tag = tag?;
    let parsed = parse(tag.trim());
    if parsed.is_none() {
        debug!("event=unknown_tag module=model field={field} tag_len={}", tag.len());
    }
    parsed
}
