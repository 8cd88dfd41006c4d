//! Post document parser.

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// A parsed post document.
#[derive(Debug, Clone)]
pub struct ParsedDoc {
    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// Markdown content (without frontmatter)
    pub content: String,
}

/// Errors that can occur when parsing a post.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}

/// Parse a post document into its metadata record and Markdown body.
pub fn parse_document(source: &str) -> Result<ParsedDoc, ParseError> {
    let (frontmatter, content) = extract_frontmatter(source)?;

    Ok(ParsedDoc {
        frontmatter,
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_complete_post() {
        let source = r#"---
title: Hello World
author: Alice
author_link: /alice
---

# Hello World

First post.
"#;

        let doc = parse_document(source).unwrap();

        let fm = doc.frontmatter.unwrap();
        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.author, Some("Alice".to_string()));
        assert!(doc.content.starts_with("# Hello World"));
        assert!(!doc.content.contains("---"));
    }

    #[test]
    fn parses_without_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter.";

        let doc = parse_document(source).unwrap();

        assert!(doc.frontmatter.is_none());
        assert_eq!(doc.content, source);
    }

    #[test]
    fn propagates_frontmatter_errors() {
        let source = "---\ntitle: Test\nno closing fence";

        let result = parse_document(source);

        assert!(matches!(
            result,
            Err(ParseError::Frontmatter(FrontmatterError::Unclosed))
        ));
    }
}
