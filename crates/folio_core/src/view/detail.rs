//! Project detail page view model and interaction state.
//!
//! # Responsibility
//! - Resolve a project id into `Resolved` or terminal `NotFound` state.
//! - Resolve each gallery item once into a tagged `GallerySurface`.
//! - Own the overlay sub-machine and apply click events to it.
//! - Enumerate the overlay states a resolved page can reach.
//!
//! # Invariants
//! - Surface precedence: text card, then image, then placeholder.
//! - Alignment: declared tag, else index parity (even left, odd right).
//! - `NotFound` exposes no gallery and ignores every event.
//! - Only `dispatch` mutates overlay state; renderers get it by reference.

use crate::model::project::{Alignment, GalleryItem, Project};
use crate::repo::content_repo::ContentRepository;
use crate::view::overlay::OverlayState;
use crate::view::preview::{derive_text_preview, TEXT_CARD_PREVIEW_CHARS};
use log::debug;

/// Notice rendered for unknown project ids.
pub const NOT_FOUND_NOTICE: &str = "Project not found";
/// Text-card preview shown when the card has no content.
pub const EMPTY_TEXT_CARD_NOTICE: &str = "No content available.";
/// Overlay title for the "Read Full Response" affordance.
pub const FULL_RESPONSE_TITLE: &str = "Full Model Response";

/// Primary visual surface of one gallery block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GallerySurface {
    /// Rendered text excerpt instead of an image.
    TextCard { preview: String },
    /// Image with an optional "View Details" hint when details exist.
    Image {
        src: String,
        alt: String,
        detail_hint: bool,
    },
    /// Neither image nor text card is available.
    Placeholder,
}

impl GallerySurface {
    /// Applies the first-match-wins surface policy to `item`.
    pub fn resolve(item: &GalleryItem) -> Self {
        if item.is_text_card() {
            let preview = item
                .visual_content()
                .and_then(|content| derive_text_preview(content, TEXT_CARD_PREVIEW_CHARS))
                .unwrap_or_else(|| EMPTY_TEXT_CARD_NOTICE.to_string());
            return Self::TextCard { preview };
        }

        if let Some(src) = item.image.as_deref() {
            return Self::Image {
                src: src.to_string(),
                alt: item.kind.clone(),
                detail_hint: item.visual_content().is_some(),
            };
        }

        Self::Placeholder
    }
}

/// Affordance buttons on the text side of a gallery block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    ReadFullPrompt,
    ReadFullResponse,
}

impl GalleryAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::ReadFullPrompt => "Read Full Prompt",
            Self::ReadFullResponse => "Read Full Response",
        }
    }
}

/// Content an overlay opens on: the visual surface or one affordance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayTarget {
    Visual,
    Prompt,
    Response,
}

impl OverlayTarget {
    /// Path segment used by overlay routes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Visual => "visual",
            Self::Prompt => "prompt",
            Self::Response => "response",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "visual" => Some(Self::Visual),
            "prompt" => Some(Self::Prompt),
            "response" => Some(Self::Response),
            _ => None,
        }
    }

    /// Click event that opens this target on the block at `index`.
    pub fn event(self, index: usize) -> DetailEvent {
        match self {
            Self::Visual => DetailEvent::ClickVisual(index),
            Self::Prompt => DetailEvent::ReadFullPrompt(index),
            Self::Response => DetailEvent::ReadFullResponse(index),
        }
    }
}

impl From<GalleryAction> for OverlayTarget {
    fn from(value: GalleryAction) -> Self {
        match value {
            GalleryAction::ReadFullPrompt => Self::Prompt,
            GalleryAction::ReadFullResponse => Self::Response,
        }
    }
}

/// One rendered gallery step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryBlock {
    /// Zero-based display position.
    pub index: usize,
    pub alignment: Alignment,
    pub surface: GallerySurface,
    /// Whether clicking the surface opens the overlay.
    pub clickable: bool,
    /// Uppercased phase label.
    pub step_label: String,
    pub title: Option<String>,
    pub text: String,
    /// Available affordances, prompt before response.
    pub actions: Vec<GalleryAction>,
}

impl GalleryBlock {
    pub(crate) fn from_item(index: usize, item: &GalleryItem) -> Self {
        let mut actions = Vec::new();
        if item.text_content().is_some() {
            actions.push(GalleryAction::ReadFullPrompt);
        }
        if item.is_text_card() && item.visual_content().is_some() {
            actions.push(GalleryAction::ReadFullResponse);
        }

        Self {
            index,
            alignment: item.alignment_at(index),
            surface: GallerySurface::resolve(item),
            clickable: item.visual_content().is_some(),
            step_label: item.kind.to_uppercase(),
            title: item.title.clone(),
            text: item.text.clone(),
            actions,
        }
    }

    pub fn has_action(&self, action: GalleryAction) -> bool {
        self.actions.contains(&action)
    }

    /// Overlay targets this block can open: visual first, then affordances.
    pub fn overlay_targets(&self) -> Vec<OverlayTarget> {
        let visual = self.clickable.then_some(OverlayTarget::Visual);
        visual
            .into_iter()
            .chain(self.actions.iter().copied().map(OverlayTarget::from))
            .collect()
    }
}

/// Resolved project page content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPage {
    pub id: String,
    pub title: String,
    pub category: String,
    pub story: String,
    pub tech: Vec<String>,
    pub blocks: Vec<GalleryBlock>,
}

impl ProjectPage {
    fn from_project(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            category: project.category.clone(),
            story: project.details.story.clone(),
            tech: project.details.tech.clone(),
            blocks: project
                .details
                .gallery
                .iter()
                .enumerate()
                .map(|(index, item)| GalleryBlock::from_item(index, item))
                .collect(),
        }
    }
}

/// Resolution outcome of a detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Resolved(ProjectPage),
    /// Terminal: the requested id has no matching record.
    NotFound { id: String },
}

/// User input events on a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailEvent {
    /// Click on the visual surface of the block at this index.
    ClickVisual(usize),
    /// "Read Full Prompt" on the block at this index.
    ReadFullPrompt(usize),
    /// "Read Full Response" on the block at this index.
    ReadFullResponse(usize),
    ClickBackdrop,
    ClickClose,
}

/// One detail page instance with its own overlay state.
#[derive(Debug, Clone)]
pub struct DetailView<'a> {
    project: Option<&'a Project>,
    state: DetailState,
    overlay: OverlayState,
}

impl<'a> DetailView<'a> {
    /// Resolves `id` against `repo`. Unknown ids yield `NotFound`.
    pub fn resolve<R: ContentRepository + ?Sized>(repo: &'a R, id: &str) -> Self {
        let project = repo.project(id);
        let state = match project {
            Some(project) => DetailState::Resolved(ProjectPage::from_project(project)),
            None => {
                debug!("event=project_not_found module=view id_len={}", id.len());
                DetailState::NotFound { id: id.to_string() }
            }
        };

        Self {
            project,
            state,
            overlay: OverlayState::Closed,
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub fn page(&self) -> Option<&ProjectPage> {
        match &self.state {
            DetailState::Resolved(page) => Some(page),
            DetailState::NotFound { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.page().is_some()
    }

    pub fn overlay(&self) -> &OverlayState {
        &self.overlay
    }

    /// Every `(block index, target)` pair that opens the overlay, in
    /// display order. Empty for `NotFound`.
    pub fn overlay_targets(&self) -> Vec<(usize, OverlayTarget)> {
        self.page()
            .map(|page| {
                page.blocks
                    .iter()
                    .flat_map(|block| {
                        block
                            .overlay_targets()
                            .into_iter()
                            .map(move |target| (block.index, target))
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Applies one click event to the overlay.
    ///
    /// Returns whether the overlay state changed. Requests that target a
    /// missing block, an affordance the block lacks, or blank content are
    /// ignored.
    pub fn dispatch(&mut self, event: DetailEvent) -> bool {
        let Some(project) = self.project else {
            return false;
        };

        let before = self.overlay.clone();
        match event {
            DetailEvent::ClickVisual(index) => {
                if let Some(item) = project.details.gallery.get(index) {
                    if let Some(content) = item.visual_content() {
                        self.overlay
                            .open(content, format!("Viewing {} Content", item.kind));
                    }
                }
            }
            DetailEvent::ReadFullPrompt(index) => {
                if let Some(item) = project.details.gallery.get(index) {
                    if let Some(content) = item.text_content() {
                        self.overlay
                            .open(content, format!("Full Prompt: {}", item.display_title()));
                    }
                }
            }
            DetailEvent::ReadFullResponse(index) => {
                if let Some(item) = project
                    .details
                    .gallery
                    .get(index)
                    .filter(|item| item.is_text_card())
                {
                    if let Some(content) = item.visual_content() {
                        self.overlay.open(content, FULL_RESPONSE_TITLE);
                    }
                }
            }
            DetailEvent::ClickBackdrop | DetailEvent::ClickClose => self.overlay.close(),
        }

        let changed = before != self.overlay;
        if changed {
            debug!(
                "event=overlay_transition module=view project={} open={}",
                project.id,
                self.overlay.is_open()
            );
        }
        changed
    }
}
