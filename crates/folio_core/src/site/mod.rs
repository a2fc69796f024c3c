//! Site navigation and static output.
//!
//! # Responsibility
//! - Resolve request paths into page view models (`Site::open`).
//! - Load site configuration and write the static site to disk.
//!
//! # Invariants
//! - Unknown project ids open a `Detail` page in `NotFound` state; only
//!   unrecognized path shapes open `Missing`.
//! - Overlay routes are opened by dispatching the matching click event; a
//!   target the block does not expose opens `Missing`.

pub mod builder;
pub mod config;

use crate::repo::content_repo::ContentRepository;
use crate::route::Route;
use crate::view::detail::DetailView;
use crate::view::listing::ListingView;

/// A resolved page ready for rendering or interaction.
#[derive(Debug, Clone)]
pub enum Page<'a> {
    Listing(ListingView),
    Detail(DetailView<'a>),
    /// Path shape not served by the site.
    Missing(String),
}

/// Navigation entry point over one content repository.
pub struct Site<'a, R: ContentRepository + ?Sized> {
    repo: &'a R,
}

impl<'a, R: ContentRepository + ?Sized> Site<'a, R> {
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &'a R {
        self.repo
    }

    /// Parses `path` and opens the matching page.
    pub fn open(&self, path: &str) -> Page<'a> {
        self.open_route(&Route::parse(path))
    }

    /// Opens the page for an already parsed route.
    pub fn open_route(&self, route: &Route) -> Page<'a> {
        match route {
            Route::Home => Page::Listing(ListingView::build(self.repo)),
            Route::Project(id) => Page::Detail(DetailView::resolve(self.repo, id.as_str())),
            Route::Overlay { id, index, target } => {
                let mut view = DetailView::resolve(self.repo, id.as_str());
                if !view.is_resolved() || view.dispatch(target.event(*index)) {
                    Page::Detail(view)
                } else {
                    Page::Missing(route.path())
                }
            }
            Route::Unknown(path) => Page::Missing(path.clone()),
        }
    }

    /// Every buildable route: the listing, then each project in store order
    /// followed by the overlay routes its gallery exposes.
    pub fn routes(&self) -> Vec<Route> {
        let mut routes = vec![Route::Home];
        for project in self.repo.projects() {
            routes.push(Route::Project(project.id.clone()));
            let view = DetailView::resolve(self.repo, project.id.as_str());
            routes.extend(
                view.overlay_targets()
                    .into_iter()
                    .map(|(index, target)| Route::Overlay {
                        id: project.id.clone(),
                        index,
                        target,
                    }),
            );
        }
        routes
    }
}
