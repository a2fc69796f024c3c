//! Core of the folio portfolio site.
//! Owns content, navigation, view state and static HTML output.

pub mod logging;
pub mod model;
pub mod render;
pub mod repo;
pub mod route;
pub mod site;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::profile::Profile;
pub use model::project::{
    Alignment, GalleryItem, Project, ProjectDetail, ProjectValidationError, VisualType,
};
pub use render::page::{render_page, PAGE_NOT_FOUND_NOTICE};
pub use render::RenderOptions;
pub use repo::content_repo::{
    ContentBundle, ContentError, ContentRepository, ContentResult, ContentStore,
};
pub use route::Route;
pub use site::builder::{BuildReport, SiteBuilder, SiteError};
pub use site::config::{ConfigError, SiteConfig};
pub use site::{Page, Site};
pub use view::detail::{
    DetailEvent, DetailState, DetailView, GalleryAction, GalleryBlock, GallerySurface,
    OverlayTarget, ProjectPage, NOT_FOUND_NOTICE,
};
pub use view::listing::{ListingView, ProfileSummary, ProjectRow};
pub use view::overlay::OverlayState;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
