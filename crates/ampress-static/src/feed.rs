//! Site-wide artifacts linked from every page head: the web app manifest
//! and the RSS channel.

use serde::Serialize;

use crate::config::SiteConfig;

/// One entry in the RSS channel.
#[derive(Debug, Clone)]
pub struct FeedItem {
    /// Item title
    pub title: String,
    /// Canonical URL of the page
    pub url: String,
    /// Optional item description
    pub description: Option<String>,
}

#[derive(Serialize)]
struct Manifest<'a> {
    name: &'a str,
    short_name: &'a str,
    start_url: &'a str,
    display: &'a str,
    lang: &'a str,
}

/// Render `manifest.json` for the site.
pub fn manifest_json(config: &SiteConfig) -> String {
    let manifest = Manifest {
        name: &config.site.name,
        short_name: &config.site.name,
        start_url: "/",
        display: "minimal-ui",
        lang: &config.site.language,
    };

    serde_json::to_string_pretty(&manifest).expect("manifest serializes")
}

/// Render `rss.xml` for the site.
pub fn rss_xml(config: &SiteConfig, items: &[FeedItem]) -> String {
    let mut out = String::new();
    out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<rss version=\"2.0\">\n");
    out.push_str("<channel>\n");
    out.push_str(&format!("  <title>{}</title>\n", xml_escape(&config.site.name)));
    out.push_str(&format!("  <link>{}</link>\n", xml_escape(&config.site.base_url)));
    out.push_str(&format!(
        "  <description>{}</description>\n",
        xml_escape(config.site.description.as_deref().unwrap_or_default())
    ));
    out.push_str(&format!("  <language>{}</language>\n", xml_escape(&config.site.language)));

    for item in items {
        out.push_str("  <item>\n");
        out.push_str(&format!("    <title>{}</title>\n", xml_escape(&item.title)));
        out.push_str(&format!("    <link>{}</link>\n", xml_escape(&item.url)));
        if let Some(description) = &item.description {
            out.push_str(&format!(
                "    <description>{}</description>\n",
                xml_escape(description)
            ));
        }
        out.push_str("  </item>\n");
    }

    out.push_str("</channel>\n");
    out.push_str("</rss>\n");
    out
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_uses_site_name() {
        let mut config = SiteConfig::default();
        config.site.name = "My Blog".to_string();

        let manifest = manifest_json(&config);
        let value: serde_json::Value = serde_json::from_str(&manifest).unwrap();

        assert_eq!(value["name"], "My Blog");
        assert_eq!(value["short_name"], "My Blog");
        assert_eq!(value["start_url"], "/");
    }

    #[test]
    fn rss_lists_items_in_order() {
        let config = SiteConfig::default();
        let items = vec![
            FeedItem {
                title: "First".to_string(),
                url: "https://example.com/first/".to_string(),
                description: None,
            },
            FeedItem {
                title: "Second".to_string(),
                url: "https://example.com/second/".to_string(),
                description: Some("More".to_string()),
            },
        ];

        let rss = rss_xml(&config, &items);

        let first = rss.find("<title>First</title>").unwrap();
        let second = rss.find("<title>Second</title>").unwrap();
        assert!(first < second);
        assert!(rss.contains("<link>https://example.com/second/</link>"));
        assert!(rss.contains("<description>More</description>"));
    }

    #[test]
    fn rss_escapes_markup_in_titles() {
        let config = SiteConfig::default();
        let items = vec![FeedItem {
            title: "Tips & <tricks>".to_string(),
            url: "/tips/".to_string(),
            description: None,
        }];

        let rss = rss_xml(&config, &items);

        assert!(rss.contains("Tips &amp; &lt;tricks&gt;"));
        assert!(!rss.contains("<tricks>"));
    }

    #[test]
    fn channel_carries_site_description() {
        let mut config = SiteConfig::default();
        config.site.name = "Field Notes".to_string();
        config.site.description = Some("Notes from the field".to_string());

        let rss = rss_xml(&config, &[]);

        assert!(rss.contains("<title>Field Notes</title>"));
        assert!(rss.contains("<description>Notes from the field</description>"));
        assert!(rss.contains("<language>en-US</language>"));
    }
}
