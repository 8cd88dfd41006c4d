//! Create a new post.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use ampress_static::SiteConfig;

/// Run the new command.
pub async fn run(config_path: &Path, slug: &str, title: Option<String>) -> Result<()> {
    let config = SiteConfig::load_or_default(config_path)?;

    let content_dir = &config.build.content_dir;
    fs::create_dir_all(content_dir).context("Failed to create content directory")?;

    let post_path = content_dir.join(format!("{}.mdx", slug));
    if post_path.exists() {
        anyhow::bail!("{} already exists", post_path.display());
    }

    let title = title.unwrap_or_else(|| slug.to_string());

    let mut post = String::from("---\n");
    post.push_str(&format!("title: {}\n", yaml_quote(&title)));
    if let Some(author) = &config.site.author {
        post.push_str(&format!("author: {}\n", yaml_quote(author)));
    }
    if let Some(author_link) = &config.site.author_link {
        post.push_str(&format!("authorLink: {}\n", yaml_quote(author_link)));
    }
    post.push_str("---\n\n");
    post.push_str(&format!("# {}\n", title));

    fs::write(&post_path, post).context("Failed to write post")?;

    tracing::info!("Created {}", post_path.display());

    Ok(())
}

/// Quote a value as a YAML double-quoted scalar.
fn yaml_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn scaffolds_post_with_config_author() {
        let temp = tempdir().unwrap();
        let content_dir = temp.path().join("posts");
        let config_path = temp.path().join("site.toml");

        fs::write(
            &config_path,
            format!(
                "[site]\nauthor = \"Alice\"\nauthor_link = \"/alice\"\n\n[build]\ncontent_dir = \"{}\"\n",
                content_dir.display()
            ),
        )
        .unwrap();

        run(&config_path, "first-post", Some("My First Post".to_string()))
            .await
            .unwrap();

        let post = fs::read_to_string(content_dir.join("first-post.mdx")).unwrap();
        assert!(post.contains("title: \"My First Post\""));
        assert!(post.contains("author: \"Alice\""));
        assert!(post.contains("authorLink: \"/alice\""));
        assert!(post.contains("# My First Post"));
    }

    #[tokio::test]
    async fn refuses_to_overwrite_existing_post() {
        let temp = tempdir().unwrap();
        let content_dir = temp.path().join("posts");
        let config_path = temp.path().join("site.toml");

        fs::write(
            &config_path,
            format!("[build]\ncontent_dir = \"{}\"\n", content_dir.display()),
        )
        .unwrap();

        fs::create_dir_all(&content_dir).unwrap();
        fs::write(content_dir.join("taken.mdx"), "existing").unwrap();

        let err = run(&config_path, "taken", None).await.unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(
            fs::read_to_string(content_dir.join("taken.mdx")).unwrap(),
            "existing"
        );
    }

    #[test]
    fn quotes_awkward_titles() {
        assert_eq!(yaml_quote("Plain"), "\"Plain\"");
        assert_eq!(yaml_quote("Colon: separated"), "\"Colon: separated\"");
        assert_eq!(yaml_quote("Say \"hi\""), "\"Say \\\"hi\\\"\"");
    }
}
