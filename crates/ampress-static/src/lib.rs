//! Static site generator core.
//!
//! Builds an AMP blog from MDX posts: one page per post, a single
//! assembled stylesheet per page, and the manifest/RSS artifacts the page
//! heads link to.

pub mod builder;
pub mod config;
pub mod feed;
pub mod page;
pub mod styles;
pub mod templates;

pub use builder::{BuildError, BuildResult, StaticBuilder};
pub use config::{ConfigError, SiteConfig};
pub use page::{PageMeta, PageRenderer, RenderError};
