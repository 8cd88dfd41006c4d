//! Initialize a site in the current directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing site...");

    let content_dir = Path::new("content");

    // Check if content already exists
    if content_dir.exists() {
        if !yes {
            tracing::warn!("content/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(content_dir).context("Failed to create content directory")?;
    }

    // Create default config
    let config_path = Path::new("site.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write site.toml")?;
        tracing::info!("Created site.toml");
    }

    // Create first post
    let hello_path = content_dir.join("helloworld.mdx");
    if !hello_path.exists() || yes {
        fs::write(&hello_path, DEFAULT_HELLOWORLD).context("Failed to write helloworld.mdx")?;
        tracing::info!("Created content/helloworld.mdx");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'ampress dev' to start the development server.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Site configuration

[site]
# Site name, appended to every page title
name = "Blog"

# Document language
language = "en-US"

# Base URL for canonical and feed links
base_url = "/"

# Default author for posts that do not set one
# author = "you"
# author_link = "/about"

[build]
# Source directory for posts
content_dir = "content"

# Output directory for the generated site
output_dir = "dist"

# Minify the assembled stylesheet
minify = true

# Extra stylesheets, included ahead of the built-in styles
# styles = ["theme.css"]

[share]
twitter = true
hatena_bookmark = true
facebook = true
line = false
"#;

const DEFAULT_HELLOWORLD: &str = r#"---
title: helloworld
author: you
authorLink: /
---

# Hello World

Write posts as `.mdx` files in the `content/` directory.

## Frontmatter

Each post can set `title`, `author`, `authorLink`, and `description`.
Values a post omits fall back to `site.toml`.

## Commands

```bash
ampress new my-post      # scaffold a post
ampress dev              # develop with live reload
ampress build            # build into dist/
```
"#;
