//! Style pipeline: built-in stylesheets and per-render style collection.
//!
//! AMP allows exactly one `<style amp-custom>` per page, so everything a
//! page needs is assembled into a single ordered list here and joined by
//! the shell.

/// Collects component style fragments during one page render.
///
/// Fragments are keyed: the first registration wins and later registrations
/// under the same key are ignored, so a component rendered many times
/// contributes its style once. The collector is consumed by value during
/// final assembly, which releases it on every path.
#[derive(Debug, Default)]
pub struct StyleCollector {
    fragments: Vec<(String, String)>,
}

impl StyleCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style fragment under a stable key.
    pub fn register(&mut self, key: &str, css: &str) {
        if self.fragments.iter().any(|(k, _)| k == key) {
            return;
        }
        self.fragments.push((key.to_string(), css.to_string()));
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    fn into_fragments(self) -> Vec<String> {
        self.fragments.into_iter().map(|(_, css)| css).collect()
    }
}

/// Assemble the final style list for one page.
///
/// Order is fixed: configured extra stylesheets first, then the static
/// bundle as one contiguous block, then the collected component styles.
pub fn assemble_styles(extra: &[String], collector: StyleCollector) -> Vec<String> {
    let mut styles = Vec::with_capacity(extra.len() + 1 + collector.len());
    styles.extend(extra.iter().cloned());
    styles.push(static_bundle());
    styles.extend(collector.into_fragments());
    styles
}

/// The built-in stylesheet text as a single block: markdown body styles,
/// syntax highlighting, then site chrome.
pub fn static_bundle() -> String {
    format!("{}\n{}\n{}", MARKDOWN_CSS, SYNTAX_CSS, SITE_CSS)
}

/// Minify CSS using lightningcss.
pub fn minify_css(css: &str) -> Result<String, String> {
    use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

    let stylesheet = StyleSheet::parse(css, ParserOptions::default())
        .map_err(|e| format!("CSS parse error: {}", e))?;

    let minified = stylesheet
        .to_css(PrinterOptions {
            minify: true,
            ..Default::default()
        })
        .map_err(|e| format!("CSS minify error: {}", e))?;

    Ok(minified.code)
}

// Markdown body styles in the GitHub manner.
const MARKDOWN_CSS: &str = r#"/* markdown body */
.markdown-body {
  font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  font-size: 16px;
  line-height: 1.5;
  word-wrap: break-word;
  color: #24292e;
}

.markdown-body h1 {
  font-size: 2em;
  margin: 0.67em 0;
  padding-bottom: 0.3em;
  border-bottom: 1px solid #eaecef;
}

.markdown-body h2 {
  font-size: 1.5em;
  margin-top: 24px;
  margin-bottom: 16px;
  padding-bottom: 0.3em;
  border-bottom: 1px solid #eaecef;
}

.markdown-body h3 {
  font-size: 1.25em;
  margin-top: 24px;
  margin-bottom: 16px;
}

.markdown-body p {
  margin-top: 0;
  margin-bottom: 16px;
}

.markdown-body a {
  color: #0366d6;
  text-decoration: none;
}

.markdown-body a:hover {
  text-decoration: underline;
}

.markdown-body blockquote {
  margin: 0 0 16px;
  padding: 0 1em;
  color: #6a737d;
  border-left: 0.25em solid #dfe2e5;
}

.markdown-body ul,
.markdown-body ol {
  margin-top: 0;
  margin-bottom: 16px;
  padding-left: 2em;
}

.markdown-body table {
  border-spacing: 0;
  border-collapse: collapse;
  margin-bottom: 16px;
}

.markdown-body table th,
.markdown-body table td {
  padding: 6px 13px;
  border: 1px solid #dfe2e5;
}

.markdown-body table tr:nth-child(2n) {
  background-color: #f6f8fa;
}

.markdown-body img {
  max-width: 100%;
  box-sizing: content-box;
}

.markdown-body code {
  font-family: "SFMono-Regular", Consolas, "Liberation Mono", Menlo, monospace;
  font-size: 85%;
  padding: 0.2em 0.4em;
  margin: 0;
  background-color: rgba(27, 31, 35, 0.05);
  border-radius: 3px;
}

.markdown-body pre {
  padding: 16px;
  overflow: auto;
  font-size: 85%;
  line-height: 1.45;
  background-color: #f6f8fa;
  border-radius: 3px;
  margin-bottom: 16px;
}

.markdown-body pre code {
  padding: 0;
  background-color: transparent;
}
"#;

// Code block token colors.
const SYNTAX_CSS: &str = r#"/* syntax highlighting */
pre[class*="language-"] {
  color: #393a34;
  background: #f6f8fa;
}

.token.comment,
.token.prolog,
.token.doctype,
.token.cdata {
  color: #999988;
  font-style: italic;
}

.token.string,
.token.attr-value {
  color: #e3116c;
}

.token.punctuation,
.token.operator {
  color: #393a34;
}

.token.keyword,
.token.atrule,
.token.selector {
  color: #00a4db;
}

.token.function,
.token.deleted {
  color: #9a050f;
}

.token.boolean,
.token.number,
.token.constant,
.token.property {
  color: #36acaa;
}

.token.tag,
.token.attr-name {
  color: #00009f;
}
"#;

// Site chrome around the rendered body.
const SITE_CSS: &str = r#"/* site */
body {
  margin: 0 auto;
  max-width: 740px;
  padding: 0 16px 48px;
}

amp-social-share {
  margin-right: 8px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_bundle_is_contiguous() {
        let bundle = static_bundle();

        assert!(bundle.contains(".markdown-body"));
        assert!(bundle.contains(".token.comment"));
        assert!(bundle.contains("amp-social-share"));
    }

    #[test]
    fn assembled_list_contains_bundle_exactly_once() {
        let mut collector = StyleCollector::new();
        collector.register("widget", ".widget { color: red; }");
        collector.register("other", ".other { color: blue; }");

        let styles = assemble_styles(&[], collector);

        let bundle = static_bundle();
        let hits = styles.iter().filter(|s| **s == bundle).count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn assembly_order_is_extra_then_bundle_then_collected() {
        let mut collector = StyleCollector::new();
        collector.register("widget", ".widget {}");

        let extra = vec!["/* user */".to_string()];
        let styles = assemble_styles(&extra, collector);

        assert_eq!(styles[0], "/* user */");
        assert_eq!(styles[1], static_bundle());
        assert_eq!(styles[2], ".widget {}");
    }

    #[test]
    fn repeated_registration_is_ignored() {
        let mut collector = StyleCollector::new();
        collector.register("widget", ".widget { color: red; }");
        collector.register("widget", ".widget { color: green; }");

        assert_eq!(collector.len(), 1);

        let styles = assemble_styles(&[], collector);
        assert!(styles.iter().any(|s| s.contains("red")));
        assert!(!styles.iter().any(|s| s.contains("green")));
    }

    #[test]
    fn empty_collector_still_yields_bundle() {
        let styles = assemble_styles(&[], StyleCollector::new());

        assert_eq!(styles.len(), 1);
        assert_eq!(styles[0], static_bundle());
    }

    #[test]
    fn minifies_css() {
        let css = r#"
.share-row {
    padding-top: 15px;
}
        "#;

        let minified = minify_css(css).unwrap();

        assert!(!minified.contains('\n'));
        assert!(minified.contains(".share-row"));
    }
}
