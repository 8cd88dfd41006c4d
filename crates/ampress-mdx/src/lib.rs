//! MDX content boundary: frontmatter extraction and body rendering.
//!
//! Posts are MDX/Markdown files with an optional YAML frontmatter block.
//! This crate extracts the metadata record and renders the body to HTML;
//! everything downstream consumes only those two results.

pub mod frontmatter;
pub mod parser;
pub mod render;

pub use frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};
pub use parser::{parse_document, ParseError, ParsedDoc};
pub use render::render_html;
