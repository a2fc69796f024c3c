//! Listing (home) page view model.
//!
//! # Responsibility
//! - Project the profile into the hero section fields.
//! - Produce one navigable summary row per project, in store order.
//!
//! # Invariants
//! - Row order equals repository order.
//! - Every row href is `Route::Project(id).path()`.
//! - An empty project list yields zero rows, never an error.

use crate::repo::content_repo::ContentRepository;
use crate::route::Route;

/// Hero section fields derived from the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: String,
    /// Uppercase display heading of the owner name.
    pub heading: String,
    pub role: String,
    pub tagline: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub mailto: String,
    pub link: String,
    pub bio: String,
    pub skills: Vec<String>,
}

/// One project summary row acting as a navigation trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: String,
    pub href: String,
    pub thumbnail: String,
    pub category: String,
    pub title: String,
    pub description: String,
}

/// Complete listing page model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    pub profile: ProfileSummary,
    pub rows: Vec<ProjectRow>,
}

impl ListingView {
    /// Builds the listing page from repository content.
    pub fn build<R: ContentRepository + ?Sized>(repo: &R) -> Self {
        let profile = repo.profile();
        let summary = ProfileSummary {
            name: profile.name.clone(),
            heading: profile.name.to_uppercase(),
            role: profile.title.clone(),
            tagline: profile.tagline.clone(),
            location: profile.location.clone(),
            phone: profile.phone.clone(),
            email: profile.email.clone(),
            mailto: profile.mailto(),
            link: profile.link.clone(),
            bio: profile.bio.clone(),
            skills: profile.skills.clone(),
        };

        let rows = repo
            .projects()
            .iter()
            .map(|project| ProjectRow {
                id: project.id.clone(),
                href: Route::Project(project.id.clone()).path(),
                thumbnail: project.thumbnail.clone(),
                category: project.category.clone(),
                title: project.title.clone(),
                description: project.description.clone(),
            })
            .collect();

        Self {
            profile: summary,
            rows,
        }
    }

    /// Count shown next to the "Selected Works" label.
    pub fn project_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolves the navigation target of the row at `position`.
    pub fn select(&self, position: usize) -> Option<Route> {
        self.rows
            .get(position)
            .map(|row| Route::Project(row.id.clone()))
    }
}
