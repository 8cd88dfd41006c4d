//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;
use walkdir::WalkDir;

use ampress_mdx::{parse_document, ParsedDoc};

use crate::config::SiteConfig;
use crate::feed::{manifest_json, rss_xml, FeedItem};
use crate::page::{canonical_url, PageMeta, PageRenderer};

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read content directory: {0}")]
    ReadError(String),

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to render page: {0}")]
    RenderError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// A page to be built.
#[derive(Debug)]
struct PageInfo {
    /// Source file path
    source_path: PathBuf,

    /// Relative path from the content directory
    relative_path: PathBuf,

    /// Output path
    output_path: PathBuf,

    /// Parsed document
    doc: ParsedDoc,
}

/// Static site builder.
pub struct StaticBuilder {
    config: SiteConfig,
    live_reload: bool,
}

impl StaticBuilder {
    /// Create a new static builder.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            live_reload: false,
        }
    }

    /// Inject the dev reload client into every generated page.
    pub fn with_live_reload(mut self, enabled: bool) -> Self {
        self.live_reload = enabled;
        self
    }

    /// Build the static site.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        // Ensure output directory exists
        fs::create_dir_all(&self.config.build.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Extra stylesheets are re-read on every build so dev rebuilds pick
        // up edits.
        let renderer = PageRenderer::new(self.config.clone())
            .with_extra_styles(self.load_extra_styles())
            .with_live_reload(self.live_reload);

        // Find all content files
        let pages = self.discover_pages()?;

        // Render and write pages in parallel
        let results: Vec<Result<usize, BuildError>> = pages
            .par_iter()
            .map(|page| self.build_page(&renderer, page))
            .collect();

        let mut total_pages = 0;
        for result in results {
            total_pages += result?;
        }

        // Generate site-wide artifacts
        self.generate_feeds(&pages)?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: total_pages,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.build.output_dir.clone(),
        })
    }

    /// Discover all posts in the content directory.
    fn discover_pages(&self) -> Result<Vec<PageInfo>, BuildError> {
        let mut pages = Vec::new();

        if !self.config.build.content_dir.exists() {
            return Err(BuildError::ReadError(format!(
                "Content directory not found: {}",
                self.config.build.content_dir.display()
            )));
        }

        for entry in WalkDir::new(&self.config.build.content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();

            if !path.is_file() {
                continue;
            }

            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            if ext != "mdx" && ext != "md" {
                continue;
            }

            let content = fs::read_to_string(path)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;

            let doc = parse_document(&content).map_err(|e| BuildError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

            let relative_path = path
                .strip_prefix(&self.config.build.content_dir)
                .unwrap_or(path)
                .to_path_buf();

            let output_path = self.output_path(&relative_path);

            pages.push(PageInfo {
                source_path: path.to_path_buf(),
                relative_path,
                output_path,
                doc,
            });
        }

        // Deterministic ordering for the feed
        pages.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));

        Ok(pages)
    }

    /// Calculate the output path for a page.
    fn output_path(&self, relative: &Path) -> PathBuf {
        let stem = relative
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("index");
        let parent = relative.parent().unwrap_or(Path::new(""));

        if stem == "index" {
            // content/index.mdx -> dist/index.html
            self.config.build.output_dir.join(parent).join("index.html")
        } else {
            // content/hello.mdx -> dist/hello/index.html
            self.config
                .build
                .output_dir
                .join(parent)
                .join(stem)
                .join("index.html")
        }
    }

    /// Convert an output path to a site-absolute URL path.
    fn page_url(&self, output_path: &Path) -> String {
        let relative = output_path
            .strip_prefix(&self.config.build.output_dir)
            .unwrap_or(output_path);

        let url = relative
            .parent()
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();

        if url.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", url)
        }
    }

    /// Render and write a single page.
    fn build_page(&self, renderer: &PageRenderer, page: &PageInfo) -> Result<usize, BuildError> {
        let meta = PageMeta::resolve(&self.config, page.doc.frontmatter.as_ref());
        if meta.title.is_empty() {
            tracing::warn!("Missing title in {}", page.source_path.display());
        }
        if meta.author.is_empty() {
            tracing::warn!("Missing author in {}", page.source_path.display());
        }

        let url = self.page_url(&page.output_path);
        let html = renderer
            .render_page(&page.doc, &url)
            .map_err(|e| BuildError::RenderError(format!("{}: {}", page.source_path.display(), e)))?;

        if let Some(parent) = page.output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&page.output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(1)
    }

    /// Read configured extra stylesheets, skipping any that are missing.
    fn load_extra_styles(&self) -> Vec<String> {
        let mut styles = Vec::new();

        for style_path in &self.config.build.styles {
            let path = PathBuf::from(style_path);
            match fs::read_to_string(&path) {
                Ok(content) => {
                    tracing::info!("Loaded stylesheet {}", path.display());
                    styles.push(content);
                }
                Err(e) => {
                    tracing::warn!("Skipping stylesheet {}: {}", path.display(), e);
                }
            }
        }

        styles
    }

    /// Write manifest.json and rss.xml into the output directory.
    fn generate_feeds(&self, pages: &[PageInfo]) -> Result<(), BuildError> {
        let manifest = manifest_json(&self.config);
        fs::write(self.config.build.output_dir.join("manifest.json"), manifest)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let items: Vec<FeedItem> = pages
            .iter()
            .map(|page| {
                let meta = PageMeta::resolve(&self.config, page.doc.frontmatter.as_ref());
                FeedItem {
                    title: meta.title,
                    url: canonical_url(
                        &self.config.site.base_url,
                        &self.page_url(&page.output_path),
                    ),
                    description: meta.description,
                }
            })
            .collect();

        let rss = rss_xml(&self.config, &items);
        fs::write(self.config.build.output_dir.join("rss.xml"), rss)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}
