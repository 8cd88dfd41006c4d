//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use ampress_static::{SiteConfig, StaticBuilder};

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building site...");

    let mut config = SiteConfig::load_or_default(config_path)?;

    if let Some(output) = output {
        config.build.output_dir = output;
    }
    if let Some(minify) = minify {
        config.build.minify = minify;
    }

    let result = StaticBuilder::new(config).build().await?;

    tracing::info!("Built {} pages in {}ms", result.pages, result.duration_ms);
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
