//! Navigation paths.
//!
//! # Responsibility
//! - Map request paths to the listing, a project detail route, or a detail
//!   route with one overlay open.
//! - Produce canonical paths for links and output files.
//!
//! # Invariants
//! - `Route::parse(route.path()) == route` for every variant but `Unknown`.
//! - Unknown project ids still parse as `Project`; resolution against the
//!   store happens in the detail view.

use crate::view::detail::OverlayTarget;
use std::fmt::{Display, Formatter};

const PROJECT_PREFIX: &str = "project";
const OVERLAY_SEGMENT: &str = "view";

/// A navigable location in the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Listing page at `/`.
    Home,
    /// Detail page at `/project/{id}`.
    Project(String),
    /// Detail page with an overlay open, at
    /// `/project/{id}/view/{index}/{visual|prompt|response}`.
    Overlay {
        id: String,
        index: usize,
        target: OverlayTarget,
    },
    /// Anything else, kept verbatim for diagnostics.
    Unknown(String),
}

impl Route {
    /// Parses a request path.
    ///
    /// Accepts optional leading/trailing slashes and a trailing
    /// `index.html` segment, so generated file paths parse back to routes.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let without_query = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        let segments = match segments.last() {
            Some(&"index.html") => &segments[..segments.len() - 1],
            _ => &segments[..],
        };

        match segments {
            [] => Self::Home,
            [prefix, id] if *prefix == PROJECT_PREFIX => Self::Project((*id).to_string()),
            [prefix, id, view, index, target]
                if *prefix == PROJECT_PREFIX && *view == OVERLAY_SEGMENT =>
            {
                match (index.parse::<usize>(), OverlayTarget::from_segment(target)) {
                    (Ok(index), Some(target)) => Self::Overlay {
                        id: (*id).to_string(),
                        index,
                        target,
                    },
                    _ => Self::Unknown(trimmed.to_string()),
                }
            }
            _ => Self::Unknown(trimmed.to_string()),
        }
    }

    /// Detail route the overlay of this route closes back to.
    pub fn close_target(&self) -> Option<Route> {
        match self {
            Self::Overlay { id, .. } => Some(Self::Project(id.clone())),
            _ => None,
        }
    }

    /// Canonical URL path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Project(id) => format!("/{PROJECT_PREFIX}/{id}"),
            Self::Overlay { id, index, target } => format!(
                "/{PROJECT_PREFIX}/{id}/{OVERLAY_SEGMENT}/{index}/{}",
                target.as_str()
            ),
            Self::Unknown(path) => path.clone(),
        }
    }

    /// Output file path relative to the site root, if the route is buildable.
    pub fn output_file(&self) -> Option<String> {
        match self {
            Self::Home => Some("index.html".to_string()),
            Self::Project(_) | Self::Overlay { .. } => {
                let path = self.path();
                Some(format!("{}/index.html", path.trim_start_matches('/')))
            }
            Self::Unknown(_) => None,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
