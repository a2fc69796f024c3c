//! View models for the listing and detail pages.
//!
//! # Responsibility
//! - Turn repository records into render-ready view models.
//! - Own the detail page's transient overlay state.
//!
//! # Invariants
//! - Views only read through `ContentRepository`.
//! - Overlay state is local to one `DetailView`; nothing here is global.

pub mod detail;
pub mod listing;
pub mod overlay;
pub mod preview;
