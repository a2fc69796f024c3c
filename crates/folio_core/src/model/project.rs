//! Project domain model.
//!
//! # Responsibility
//! - Define the project record, its detail sub-record and gallery items.
//! - Resolve gallery alignment from declared tags or position parity.
//!
//! # Invariants
//! - `Project::id` is a URL-safe slug so `/project/{id}` round-trips.
//! - Gallery order is display order.
//! - `visual_content` and `text_content` are independent optional fields.

use crate::model::{deserialize_non_empty, known_tag, non_empty};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

static PROJECT_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9]+(-[a-z0-9]+)*$").expect("valid project id regex"));

/// Horizontal placement of one gallery block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    Right,
    Center,
}

impl Alignment {
    /// Alignment used when an item declares none: even index left, odd right.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            Self::Left
        } else {
            Self::Right
        }
    }

    /// Stable tag string (`left|right|center`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// CSS class applied to the gallery block.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Left => "align-left",
            Self::Right => "align-right",
            Self::Center => "align-center",
        }
    }
}

/// Declared visual variant of a gallery item.
///
/// Absence, or an unrecognized tag, means the item is rendered as an image
/// when one is set, or as a placeholder otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VisualType {
    /// Primary surface is rendered text instead of an image.
    TextCard,
}

impl VisualType {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text-card" => Some(Self::TextCard),
            _ => None,
        }
    }
}

fn deserialize_align<'de, D>(deserializer: D) -> Result<Option<Alignment>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = deserialize_non_empty(deserializer)?;
    Ok(known_tag("align", tag, Alignment::from_tag))
}

fn deserialize_visual_type<'de, D>(deserializer: D) -> Result<Option<VisualType>, D::Error>
where
    D: Deserializer<'de>,
{
    let tag = deserialize_non_empty(deserializer)?;
    Ok(known_tag("visual_type", tag, VisualType::from_tag))
}

/// One step/phase within a project's narrative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    /// Phase label such as `Step 1`. Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    /// Declared placement; unknown tags fall back to index parity.
    #[serde(
        default,
        deserialize_with = "deserialize_align",
        skip_serializing_if = "Option::is_none"
    )]
    pub align: Option<Alignment>,
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
    /// Short display text next to the visual surface.
    #[serde(default)]
    pub text: String,
    #[serde(
        default,
        deserialize_with = "deserialize_visual_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub visual_type: Option<VisualType>,
    /// Long text shown in the overlay from the visual surface.
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub visual_content: Option<String>,
    /// Second long text (e.g. the originating prompt), read from the text side.
    #[serde(
        default,
        deserialize_with = "deserialize_non_empty",
        skip_serializing_if = "Option::is_none"
    )]
    pub text_content: Option<String>,
}

impl GalleryItem {
    /// Creates an item with only the mandatory label and display text.
    pub fn new(kind: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: None,
            align: None,
            image: None,
            text: text.into(),
            visual_type: None,
            visual_content: None,
            text_content: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = non_empty(Some(title.into()));
        self
    }

    pub fn with_align(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = non_empty(Some(image.into()));
        self
    }

    /// Marks the item as a text card whose surface shows `content`.
    pub fn text_card(mut self, content: impl Into<String>) -> Self {
        self.visual_type = Some(VisualType::TextCard);
        self.visual_content = non_empty(Some(content.into()));
        self
    }

    pub fn with_visual_content(mut self, content: impl Into<String>) -> Self {
        self.visual_content = non_empty(Some(content.into()));
        self
    }

    pub fn with_text_content(mut self, content: impl Into<String>) -> Self {
        self.text_content = non_empty(Some(content.into()));
        self
    }

    pub fn is_text_card(&self) -> bool {
        self.visual_type == Some(VisualType::TextCard)
    }

    /// Non-empty visual content, if any.
    pub fn visual_content(&self) -> Option<&str> {
        self.visual_content
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Non-empty text content, if any.
    pub fn text_content(&self) -> Option<&str> {
        self.text_content
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    }

    /// Declared alignment, else parity of the zero-based `index`.
    pub fn alignment_at(&self, index: usize) -> Alignment {
        self.align.unwrap_or_else(|| Alignment::for_index(index))
    }

    /// Title when present, otherwise the phase label.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(self.kind.as_str())
    }
}

/// Narrative detail of one project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetail {
    pub story: String,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<GalleryItem>,
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique slug used in `/project/{id}`.
    pub id: String,
    pub title: String,
    pub category: String,
    /// Opaque asset path resolved by the hosting environment.
    pub thumbnail: String,
    pub description: String,
    pub details: ProjectDetail,
}

impl Project {
    /// Validates load-time invariants of one record.
    ///
    /// Uniqueness across records is checked by the content store.
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.id.trim().is_empty() {
            return Err(ProjectValidationError::EmptyId);
        }
        if !is_valid_project_id(self.id.as_str()) {
            return Err(ProjectValidationError::InvalidId(self.id.clone()));
        }
        if self.title.trim().is_empty() {
            return Err(ProjectValidationError::EmptyTitle(self.id.clone()));
        }
        Ok(())
    }
}

/// Returns whether `id` is a lowercase, dash-separated slug.
pub fn is_valid_project_id(id: &str) -> bool {
    PROJECT_ID_RE.is_match(id)
}

/// Invariant violations for a single project record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectValidationError {
    EmptyId,
    InvalidId(String),
    EmptyTitle(String),
}

impl Display for ProjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "project id must not be empty"),
            Self::InvalidId(id) => write!(
                f,
                "project id `{id}` must be a lowercase slug (a-z, 0-9, single dashes)"
            ),
            Self::EmptyTitle(id) => write!(f, "project `{id}` must have a title"),
        }
    }
}

impl Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::{is_valid_project_id, Alignment, GalleryItem, VisualType};

    #[test]
    fn alignment_alternates_by_index_parity() {
        assert_eq!(Alignment::for_index(0), Alignment::Left);
        assert_eq!(Alignment::for_index(1), Alignment::Right);
        assert_eq!(Alignment::for_index(2), Alignment::Left);
    }

    #[test]
    fn tags_parse_known_values_only() {
        assert_eq!(Alignment::from_tag("center"), Some(Alignment::Center));
        assert_eq!(Alignment::from_tag("justify"), None);
        assert_eq!(Alignment::from_tag("Left"), None);
        assert_eq!(VisualType::from_tag("text-card"), Some(VisualType::TextCard));
        assert_eq!(VisualType::from_tag("video"), None);
    }

    #[test]
    fn unknown_tags_deserialize_as_absent() {
        let item: GalleryItem = serde_json::from_str(
            r#"{"type":"Step 2","text":"t","align":"justify","visualType":"video","image":"a.png"}"#,
        )
        .expect("unknown tags should not fail");
        assert_eq!(item.align, None);
        assert_eq!(item.visual_type, None);
        assert_eq!(item.alignment_at(1), Alignment::Right);
        assert!(!item.is_text_card());
    }

    #[test]
    fn declared_alignment_wins_over_index() {
        let item = GalleryItem::new("Step", "text").with_align(Alignment::Center);
        assert_eq!(item.alignment_at(0), Alignment::Center);
        assert_eq!(item.alignment_at(1), Alignment::Center);
    }

    #[test]
    fn builders_drop_blank_optional_text() {
        let item = GalleryItem::new("Step", "text")
            .with_title("   ")
            .with_image("")
            .with_text_content("");
        assert_eq!(item.title, None);
        assert_eq!(item.image, None);
        assert_eq!(item.text_content(), None);
    }

    #[test]
    fn text_card_keeps_variant_even_without_content() {
        let item = GalleryItem::new("Step", "text").text_card("");
        assert!(item.is_text_card());
        assert_eq!(item.visual_type, Some(VisualType::TextCard));
        assert_eq!(item.visual_content(), None);
    }

    #[test]
    fn display_title_falls_back_to_kind() {
        let untitled = GalleryItem::new("Phase 2", "text");
        assert_eq!(untitled.display_title(), "Phase 2");
        let titled = untitled.with_title("Refining");
        assert_eq!(titled.display_title(), "Refining");
    }

    #[test]
    fn project_id_pattern_accepts_slugs_only() {
        assert!(is_valid_project_id("t2i-dashboard"));
        assert!(is_valid_project_id("a"));
        assert!(!is_valid_project_id("Specs AI"));
        assert!(!is_valid_project_id("double--dash"));
        assert!(!is_valid_project_id("-leading"));
        assert!(!is_valid_project_id(""));
    }
}
