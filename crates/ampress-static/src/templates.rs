//! Template engine for rendering AMP pages.

use ampress_amp::{AMP_BOILERPLATE, AMP_RUNTIME_SCRIPT};
use minijinja::{context, Environment};

/// Context for rendering a page template.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Context {
    /// Page title
    pub title: String,
    /// Site name, appended to the page title
    pub site_name: String,
    /// Document language
    pub lang: String,
    /// Canonical URL of this page
    pub canonical_url: String,
    /// Optional meta description
    pub description: Option<String>,
    /// Author display name
    pub author: String,
    /// Author profile URL
    pub author_link: String,
    /// Rendered article HTML
    pub content: String,
    /// Pre-rendered analytics beacon markup
    pub analytics: String,
    /// Pre-rendered social share buttons
    pub share_row: String,
    /// AMP component script tags to include in the head
    pub component_scripts: Vec<String>,
    /// Assembled page CSS for the single amp-custom block
    pub css: String,
    /// Whether to inject the dev reload client
    pub live_reload: bool,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with default templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_global("amp_boilerplate", AMP_BOILERPLATE);
        env.add_global("amp_runtime", AMP_RUNTIME_SCRIPT);

        // Add shell template
        env.add_template_owned("shell.html".to_string(), SHELL_TEMPLATE.to_string())
            .expect("Failed to add shell template");

        // Add item template
        env.add_template_owned("item.html".to_string(), ITEM_TEMPLATE.to_string())
            .expect("Failed to add item template");

        Self { env }
    }

    /// Render a page using the specified template.
    pub fn render_page(
        &self,
        template: &str,
        context: &Context,
    ) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template(template)?;

        tmpl.render(context! {
            title => &context.title,
            site_name => &context.site_name,
            lang => &context.lang,
            canonical_url => &context.canonical_url,
            description => &context.description,
            author => &context.author,
            author_link => &context.author_link,
            content => &context.content,
            analytics => &context.analytics,
            share_row => &context.share_row,
            component_scripts => &context.component_scripts,
            css => &context.css,
            live_reload => &context.live_reload,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const SHELL_TEMPLATE: &str = r##"<!doctype html>
<html ⚡ lang="{{ lang }}">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width,minimum-scale=1,initial-scale=1">
  <title>{{ title }} - {{ site_name }}</title>
  <link rel="canonical" href="{{ canonical_url }}">
  {% if description %}<meta name="description" content="{{ description }}">
  {% endif %}<link rel="manifest" href="/manifest.json">
  <link rel="alternate" type="application/rss+xml" href="/rss.xml">
  {% for script in component_scripts %}{{ script | safe }}
  {% endfor %}<style amp-custom>{{ css | safe }}</style>
  {{ amp_boilerplate | safe }}
  {{ amp_runtime | safe }}
</head>
<body>
  {% block body %}{% endblock %}
  {% if live_reload %}<script src="/__reload.js" async></script>
  {% endif %}</body>
</html>"##;

const ITEM_TEMPLATE: &str = r##"{% extends "shell.html" %}

{% block body %}{{ analytics | safe }}
  <div class="markdown-body">
    <h1>{{ title }}</h1>
    <p>
      by <a href="{{ author_link }}">{{ author }}</a>
    </p>
    {{ content | safe }}
  </div>
  <div class="share-row">
    {{ share_row | safe }}
  </div>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_context() -> Context {
        Context {
            title: "Hello".to_string(),
            site_name: "Blog".to_string(),
            lang: "en-US".to_string(),
            canonical_url: "https://example.com/hello/".to_string(),
            description: None,
            author: "Alice".to_string(),
            author_link: "/alice".to_string(),
            content: "<p>Hello world</p>".to_string(),
            analytics: String::new(),
            share_row: String::new(),
            component_scripts: vec![],
            css: String::new(),
            live_reload: false,
        }
    }

    #[test]
    fn renders_title_with_site_name() {
        let engine = TemplateEngine::new();

        let html = engine.render_page("item.html", &sample_context()).unwrap();

        assert!(html.contains("<title>Hello - Blog</title>"));
        assert!(html.contains("<p>Hello world</p>"));
    }

    #[test]
    fn renders_byline_link() {
        let engine = TemplateEngine::new();

        let html = engine.render_page("item.html", &sample_context()).unwrap();

        assert!(html.contains(r#"by <a href="/alice">Alice</a>"#));
    }

    #[test]
    fn byline_survives_empty_author() {
        let engine = TemplateEngine::new();

        let mut context = sample_context();
        context.author = String::new();
        context.author_link = String::new();

        let html = engine.render_page("item.html", &context).unwrap();

        assert!(html.contains(r#"by <a href=""></a>"#));
    }

    #[test]
    fn escapes_untrusted_title() {
        let engine = TemplateEngine::new();

        let mut context = sample_context();
        context.title = "<script>alert(1)</script>".to_string();

        let html = engine.render_page("item.html", &context).unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn includes_amp_runtime_and_boilerplate() {
        let engine = TemplateEngine::new();

        let html = engine.render_page("item.html", &sample_context()).unwrap();

        assert!(html.contains(r#"<html ⚡ lang="en-US">"#));
        assert!(html.contains(r#"<script async src="https://cdn.ampproject.org/v0.js"></script>"#));
        assert!(html.contains("<style amp-boilerplate>"));
        assert!(html.contains("<noscript><style amp-boilerplate>"));
    }

    #[test]
    fn includes_component_scripts_unescaped() {
        let engine = TemplateEngine::new();

        let mut context = sample_context();
        context.component_scripts = vec![
            r#"<script async custom-element="amp-social-share" src="https://cdn.ampproject.org/v0/amp-social-share-0.1.js"></script>"#.to_string(),
        ];

        let html = engine.render_page("item.html", &context).unwrap();

        assert!(html.contains(r#"custom-element="amp-social-share""#));
    }

    #[test]
    fn single_custom_style_block() {
        let engine = TemplateEngine::new();

        let mut context = sample_context();
        context.css = ".markdown-body{color:#000}".to_string();

        let html = engine.render_page("item.html", &context).unwrap();

        assert_eq!(html.matches("<style amp-custom>").count(), 1);
        assert!(html.contains("<style amp-custom>.markdown-body{color:#000}</style>"));
    }

    #[test]
    fn reload_client_only_in_dev() {
        let engine = TemplateEngine::new();

        let mut context = sample_context();
        let html = engine.render_page("item.html", &context).unwrap();
        assert!(!html.contains("/__reload.js"));

        context.live_reload = true;
        let html = engine.render_page("item.html", &context).unwrap();
        assert!(html.contains(r#"<script src="/__reload.js" async></script>"#));
    }

    #[test]
    fn canonical_and_feed_links_present() {
        let engine = TemplateEngine::new();

        let html = engine.render_page("item.html", &sample_context()).unwrap();

        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/hello/">"#));
        assert!(html.contains(r#"<link rel="manifest" href="/manifest.json">"#));
        assert!(html.contains(r#"<link rel="alternate" type="application/rss+xml" href="/rss.xml">"#));
    }
}
