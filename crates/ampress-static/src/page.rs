//! Per-page assembly: metadata resolution and full AMP document rendering.

use ampress_amp::{render_beacon, render_share_row, AmpComponent};
use ampress_mdx::{render_html, Frontmatter, ParsedDoc};
use thiserror::Error;

use crate::config::SiteConfig;
use crate::styles::{assemble_styles, minify_css, StyleCollector};
use crate::templates::{Context, TemplateEngine};

// AMP rejects inline style attributes, so the share row spacing ships in
// the stylesheet.
const SHARE_ROW_CSS: &str = ".share-row { padding-top: 15px; }";

/// Resolved display metadata for one page.
///
/// A field present in frontmatter always wins; site configuration fills the
/// rest. Anything still missing resolves to an empty string and the page
/// renders regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMeta {
    pub title: String,
    pub author: String,
    pub author_link: String,
    pub description: Option<String>,
}

impl PageMeta {
    pub fn resolve(config: &SiteConfig, frontmatter: Option<&Frontmatter>) -> Self {
        let title = frontmatter
            .and_then(|fm| fm.title.clone())
            .unwrap_or_default();

        let author = frontmatter
            .and_then(|fm| fm.author.clone())
            .or_else(|| config.site.author.clone())
            .unwrap_or_default();

        let author_link = frontmatter
            .and_then(|fm| fm.author_link.clone())
            .or_else(|| config.site.author_link.clone())
            .unwrap_or_default();

        let description = frontmatter
            .and_then(|fm| fm.description.clone())
            .or_else(|| config.site.description.clone());

        Self {
            title,
            author,
            author_link,
            description,
        }
    }
}

/// Join the configured base URL with a site-absolute page path.
pub fn canonical_url(base_url: &str, page_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), page_url)
}

/// Errors that can occur while rendering a page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Failed to minify styles: {0}")]
    Minify(String),
}

/// Renders parsed documents into complete AMP pages.
pub struct PageRenderer {
    config: SiteConfig,
    engine: TemplateEngine,
    extra_styles: Vec<String>,
    live_reload: bool,
}

impl PageRenderer {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config,
            engine: TemplateEngine::new(),
            extra_styles: vec![],
            live_reload: false,
        }
    }

    /// Extra stylesheet contents, rendered ahead of the built-in bundle.
    pub fn with_extra_styles(mut self, styles: Vec<String>) -> Self {
        self.extra_styles = styles;
        self
    }

    /// Inject the dev reload client into every rendered page.
    pub fn with_live_reload(mut self, enabled: bool) -> Self {
        self.live_reload = enabled;
        self
    }

    /// Render one document into a full AMP page.
    ///
    /// `page_url` is the site-absolute path of the page, with a leading
    /// slash.
    pub fn render_page(&self, doc: &ParsedDoc, page_url: &str) -> Result<String, RenderError> {
        let meta = PageMeta::resolve(&self.config, doc.frontmatter.as_ref());
        let content = render_html(&doc.content);

        let mut collector = StyleCollector::new();
        collector.register("share-row", SHARE_ROW_CSS);

        let css = assemble_styles(&self.extra_styles, collector).join("\n");
        let css = if self.config.build.minify {
            minify_css(&css).map_err(RenderError::Minify)?
        } else {
            css
        };

        let lang = if self.config.site.language.is_empty() {
            "en-US".to_string()
        } else {
            self.config.site.language.clone()
        };

        let context = Context {
            title: meta.title,
            site_name: self.config.site.name.clone(),
            lang,
            canonical_url: canonical_url(&self.config.site.base_url, page_url),
            description: meta.description,
            author: meta.author,
            author_link: meta.author_link,
            content,
            analytics: render_beacon(),
            share_row: render_share_row(&self.config.share.affordances()),
            component_scripts: vec![
                AmpComponent::SocialShare.script_include(),
                AmpComponent::Analytics.script_include(),
            ],
            css,
            live_reload: self.live_reload,
        };

        Ok(self.engine.render_page("item.html", &context)?)
    }
}
