//! Frontmatter extraction and parsing.

use serde::Deserialize;

/// Parsed frontmatter from a post.
///
/// Every field is optional: a post without an author still builds, the
/// byline just renders empty. Resolution against site defaults happens
/// later, in the page binding.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Post title
    #[serde(default)]
    pub title: Option<String>,

    /// Author display name
    #[serde(default)]
    pub author: Option<String>,

    /// Link target for the author byline. `authorLink` is accepted for
    /// content carried over from camelCase frontmatter.
    #[serde(default, alias = "authorLink")]
    pub author_link: Option<String>,

    /// Short description used in the feed
    #[serde(default)]
    pub description: Option<String>,
}

/// Extract frontmatter from post content.
///
/// Returns the parsed frontmatter and the remaining content after the
/// frontmatter block. Content without a leading `---` fence is returned
/// untouched with no frontmatter.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_valid_frontmatter() {
        let source = r#"---
title: Hello World
author: Alice
author_link: /alice
---

# Hello
"#;

        let (fm, content) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, Some("Hello World".to_string()));
        assert_eq!(fm.author, Some("Alice".to_string()));
        assert_eq!(fm.author_link, Some("/alice".to_string()));
        assert!(content.starts_with("# Hello"));
    }

    #[test]
    fn accepts_camel_case_author_link() {
        let source = "---\ntitle: Hi\nauthorLink: /alice\n---\nBody";

        let (fm, _) = extract_frontmatter(source).unwrap();

        assert_eq!(fm.unwrap().author_link, Some("/alice".to_string()));
    }

    #[test]
    fn missing_fields_are_none() {
        let source = "---\ntitle: Only a title\n---\nBody";

        let (fm, _) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, Some("Only a title".to_string()));
        assert_eq!(fm.author, None);
        assert_eq!(fm.author_link, None);
        assert_eq!(fm.description, None);
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
