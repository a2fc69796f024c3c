//! Site configuration.
//!
//! # Responsibility
//! - Load optional TOML settings for the static build.
//! - Normalize values before they reach the builder or renderer.
//!
//! # Invariants
//! - A missing config file yields defaults, not an error.
//! - `out_dir` is never empty after `normalize`.

use crate::render::{current_year, RenderOptions};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const DEFAULT_OUT_DIR: &str = "dist";
const DEFAULT_STYLESHEET: &str = "/index.css";
const DEFAULT_ASSET_PREFIX: &str = "/";

/// Config load/normalize failures.
#[derive(Debug)]
pub enum ConfigError {
    Io { path: PathBuf, source: std::io::Error },
    Toml(toml::de::Error),
    InvalidValue { field: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Toml(err) => write!(f, "invalid config: {err}"),
            Self::InvalidValue { field, message } => write!(f, "invalid `{field}`: {message}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Toml(err) => Some(err),
            Self::InvalidValue { .. } => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        Self::Toml(value)
    }
}

/// Static build settings, e.g. `folio.toml`:
///
/// ```toml
/// out_dir = "public"
/// asset_prefix = "/static"
/// stylesheet = "/static/site.css"
/// site_title = "Portfolio"
/// copyright_year = 2026
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub out_dir: PathBuf,
    pub asset_prefix: String,
    pub stylesheet: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,
    /// Footer year; the current UTC year when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copyright_year: Option<i32>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            stylesheet: DEFAULT_STYLESHEET.to_string(),
            site_title: None,
            copyright_year: None,
        }
    }
}

impl SiteConfig {
    /// Parses TOML text. Unknown keys are ignored; missing keys use defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.normalize()
    }

    /// Loads config from `path`, returning defaults when the file is absent.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(raw.as_str())
    }

    /// Trims text values and checks required ones.
    ///
    /// # Errors
    /// - `InvalidValue` when `out_dir` is empty.
    /// - `InvalidValue` when `copyright_year` is not positive.
    pub fn normalize(mut self) -> Result<Self, ConfigError> {
        let out_dir = self.out_dir.to_string_lossy().trim().to_string();
        if out_dir.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "out_dir",
                message: "must not be empty".to_string(),
            });
        }
        self.out_dir = PathBuf::from(out_dir);

        self.asset_prefix = self.asset_prefix.trim().to_string();
        self.stylesheet = self.stylesheet.trim().to_string();
        if self.stylesheet.is_empty() {
            self.stylesheet = DEFAULT_STYLESHEET.to_string();
        }
        self.site_title = self
            .site_title
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty());

        if let Some(year) = self.copyright_year {
            if year <= 0 {
                return Err(ConfigError::InvalidValue {
                    field: "copyright_year",
                    message: format!("must be positive, got {year}"),
                });
            }
        }
        Ok(self)
    }

    /// Renderer settings derived from this config.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            site_title: self.site_title.clone(),
            stylesheet: self.stylesheet.clone(),
            asset_prefix: self.asset_prefix.clone(),
            copyright_year: self.copyright_year.unwrap_or_else(current_year),
        }
    }
}
