//! Site configuration (`site.toml`).
//!
//! Loaded once at command start and passed by reference into every render
//! entry point. Nothing in the workspace reads configuration ambiently.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use ampress_amp::{ShareAffordance, ShareNetwork};

/// Top-level configuration, one per site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,

    #[serde(default)]
    pub build: BuildSection,

    #[serde(default)]
    pub share: ShareSection,
}

/// `[site]` - display settings merged into every page.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Site name, appended to every page title
    pub name: String,

    /// BCP 47 language tag for the html element
    pub language: String,

    /// Base URL used for canonical and feed links
    pub base_url: String,

    /// Default byline author for posts that omit one
    pub author: Option<String>,

    /// Default byline link for posts that omit one
    pub author_link: Option<String>,

    /// Site description for the feed channel
    pub description: Option<String>,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Blog".to_string(),
            language: "en-US".to_string(),
            base_url: "/".to_string(),
            author: None,
            author_link: None,
            description: None,
        }
    }
}

/// `[build]` - input/output locations and output processing.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    /// Source directory for posts
    pub content_dir: PathBuf,

    /// Output directory for the generated site
    pub output_dir: PathBuf,

    /// Minify the assembled stylesheet
    pub minify: bool,

    /// Paths to extra CSS files included ahead of the built-in styles
    pub styles: Vec<String>,
}

impl Default for BuildSection {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            output_dir: PathBuf::from("dist"),
            minify: true,
            styles: vec![],
        }
    }
}

/// `[share]` - per-network flags for the share row.
///
/// The set and its order are fixed; configuration only flips entries on or
/// off.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShareSection {
    pub twitter: bool,
    pub hatena_bookmark: bool,
    pub facebook: bool,
    pub line: bool,
}

impl Default for ShareSection {
    fn default() -> Self {
        Self {
            twitter: true,
            hatena_bookmark: true,
            facebook: true,
            line: false,
        }
    }
}

impl ShareSection {
    /// Map the flags onto the fixed-order affordance set.
    pub fn affordances(&self) -> [ShareAffordance; 4] {
        [
            ShareAffordance::new(ShareNetwork::Twitter, self.twitter),
            ShareAffordance::new(ShareNetwork::HatenaBookmark, self.hatena_bookmark),
            ShareAffordance::new(ShareNetwork::Facebook, self.facebook),
            ShareAffordance::new(ShareNetwork::Line, self.line),
        ]
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration, falling back to defaults when the file does not
    /// exist. A present but malformed file is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config = Self::load(path)?;
            tracing::info!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }
}
