//! Static site writer.
//!
//! # Responsibility
//! - Render every buildable route plus a `404.html` page.
//! - Pre-render each reachable overlay state as its own document so full
//!   prompt and response texts are served without scripts.
//! - Write documents under the configured output directory.
//!
//! # Invariants
//! - Output paths come from `Route::output_file`, never from raw content.
//! - A failed write aborts the build and reports the offending path.

use crate::render::page::{render_missing, render_page};
use crate::repo::content_repo::ContentRepository;
use crate::route::Route;
use crate::site::config::SiteConfig;
use crate::site::Site;
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const NOT_FOUND_FILE: &str = "404.html";

/// Site build failures.
#[derive(Debug)]
pub enum SiteError {
    Io { path: PathBuf, source: std::io::Error },
}

impl Display for SiteError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to write `{}`: {source}", path.display()),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// One written document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenPage {
    /// Route path, or `None` for the 404 document.
    pub route: Option<String>,
    pub file: PathBuf,
    pub bytes: usize,
}

/// Summary of a finished build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: Vec<WrittenPage>,
}

impl BuildReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.pages.iter().map(|page| page.bytes).sum()
    }
}

/// Writes the static site for one repository.
pub struct SiteBuilder<'a> {
    config: &'a SiteConfig,
}

impl<'a> SiteBuilder<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Renders and writes every page.
    ///
    /// # Errors
    /// Returns `SiteError::Io` for the first directory or file that cannot be
    /// written.
    pub fn build<R: ContentRepository + ?Sized>(&self, repo: &R) -> Result<BuildReport, SiteError> {
        let options = self.config.render_options();
        let site = Site::new(repo);
        let out_dir = self.config.out_dir.as_path();
        let mut report = BuildReport {
            out_dir: out_dir.to_path_buf(),
            pages: Vec::new(),
        };

        let mut overlay_pages = 0usize;
        for route in site.routes() {
            let Some(relative) = route.output_file() else {
                continue;
            };
            let html = render_page(&site.open_route(&route), &options);
            let file = write_document(out_dir, relative.as_str(), &html)?;
            if matches!(route, Route::Overlay { .. }) {
                overlay_pages += 1;
            }
            report.pages.push(WrittenPage {
                route: Some(route.path()),
                file,
                bytes: html.len(),
            });
        }

        let html = render_missing(&options);
        let file = write_document(out_dir, NOT_FOUND_FILE, &html)?;
        report.pages.push(WrittenPage {
            route: None,
            file,
            bytes: html.len(),
        });

        info!(
            "event=site_build module=site status=ok pages={} overlays={} bytes={} out_dir={}",
            report.page_count(),
            overlay_pages,
            report.total_bytes(),
            out_dir.display()
        );
        Ok(report)
    }
}

fn write_document(out_dir: &Path, relative: &str, html: &str) -> Result<PathBuf, SiteError> {
    let file = out_dir.join(relative);
    if let Some(parent) = file.parent() {
        std::fs::create_dir_all(parent).map_err(|source| {
            error!(
                "event=site_write module=site status=error path={}",
                parent.display()
            );
            SiteError::Io {
                path: parent.to_path_buf(),
                source,
            }
        })?;
    }
    std::fs::write(&file, html).map_err(|source| {
        error!(
            "event=site_write module=site status=error path={}",
            file.display()
        );
        SiteError::Io {
            path: file.clone(),
            source,
        }
    })?;
    Ok(file)
}
