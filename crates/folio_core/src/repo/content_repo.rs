//! Content repository contract and in-memory store.
//!
//! # Responsibility
//! - Expose the profile and ordered project list through read accessors.
//! - Load alternative content bundles from JSON.
//!
//! # Invariants
//! - `ContentStore::from_bundle` rejects duplicate or malformed project ids.
//! - `ContentRepository::project` returns `None` for unknown ids; not-found
//!   is a value, never an error.

use crate::model::profile::Profile;
use crate::model::project::{Project, ProjectValidationError};
use crate::repo::builtin::builtin_bundle;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type ContentResult<T> = Result<T, ContentError>;

/// Load-time content failures.
#[derive(Debug)]
pub enum ContentError {
    Validation(ProjectValidationError),
    DuplicateProjectId(String),
    EmptyProfileName,
    Json(serde_json::Error),
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for ContentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateProjectId(id) => write!(f, "duplicate project id: `{id}`"),
            Self::EmptyProfileName => write!(f, "profile name must not be empty"),
            Self::Json(err) => write!(f, "invalid content bundle: {err}"),
            Self::Io { path, source } => {
                write!(f, "failed to read content `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for ContentError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Io { source, .. } => Some(source),
            Self::DuplicateProjectId(_) | Self::EmptyProfileName => None,
        }
    }
}

impl From<ProjectValidationError> for ContentError {
    fn from(value: ProjectValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Read-only accessors the views are written against.
pub trait ContentRepository {
    fn profile(&self) -> &Profile;
    fn projects(&self) -> &[Project];

    /// Looks up one project by id.
    fn project(&self, id: &str) -> Option<&Project> {
        self.projects().iter().find(|project| project.id == id)
    }
}

/// Unvalidated profile + projects pair, the unit a store is built from.
///
/// JSON shape: `{ "profile": {...}, "projects": [...] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBundle {
    pub profile: Profile,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ContentBundle {
    /// Parses a bundle from JSON text. Does not validate invariants.
    pub fn from_json_str(json: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a bundle file.
    pub fn from_path(path: impl AsRef<Path>) -> ContentResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(raw.as_str())
    }

    /// Serializes the bundle as pretty JSON.
    pub fn to_json_pretty(&self) -> ContentResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Validated, immutable in-memory content store.
#[derive(Debug, Clone)]
pub struct ContentStore {
    profile: Profile,
    projects: Vec<Project>,
    index: HashMap<String, usize>,
}

impl ContentStore {
    /// Validates `bundle` and builds an id index over its projects.
    ///
    /// # Errors
    /// - `EmptyProfileName` when the profile has no name.
    /// - `Validation` when a project id or title is malformed.
    /// - `DuplicateProjectId` on the first repeated id.
    pub fn from_bundle(bundle: ContentBundle) -> ContentResult<Self> {
        if bundle.profile.name.trim().is_empty() {
            return Err(ContentError::EmptyProfileName);
        }

        let mut index = HashMap::with_capacity(bundle.projects.len());
        for (position, project) in bundle.projects.iter().enumerate() {
            project.validate()?;
            if index.insert(project.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateProjectId(project.id.clone()));
            }
            debug!(
                "event=project_loaded module=repo id={} gallery_items={}",
                project.id,
                project.details.gallery.len()
            );
        }

        info!(
            "event=content_loaded module=repo status=ok projects={}",
            bundle.projects.len()
        );

        Ok(Self {
            profile: bundle.profile,
            projects: bundle.projects,
            index,
        })
    }

    /// Store over the compiled-in portfolio content.
    ///
    /// # Panics
    /// Panics if the compiled-in literal data breaks store invariants, which
    /// is a build defect rather than a runtime condition.
    pub fn builtin() -> Self {
        Self::from_bundle(builtin_bundle()).expect("built-in content must satisfy store invariants")
    }

    /// Loads and validates a JSON bundle file.
    pub fn from_json_path(path: impl AsRef<Path>) -> ContentResult<Self> {
        Self::from_bundle(ContentBundle::from_path(path)?)
    }

    /// Project ids in display order.
    pub fn project_ids(&self) -> Vec<&str> {
        self.projects
            .iter()
            .map(|project| project.id.as_str())
            .collect()
    }

    /// Copies the store back into a bundle (e.g. for exporting JSON).
    pub fn to_bundle(&self) -> ContentBundle {
        ContentBundle {
            profile: self.profile.clone(),
            projects: self.projects.clone(),
        }
    }
}

impl ContentRepository for ContentStore {
    fn profile(&self) -> &Profile {
        &self.profile
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn project(&self, id: &str) -> Option<&Project> {
        self.index
            .get(id)
            .and_then(|position| self.projects.get(*position))
    }
}
