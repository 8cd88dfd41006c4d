//! Social share affordances.

/// Share endpoint for Hatena Bookmark. The AMP runtime substitutes
/// `CANONICAL_URL` at click time.
pub const HATENA_SHARE_ENDPOINT: &str = "http://b.hatena.ne.jp/entry/CANONICAL_URL";

/// A social network the share row can offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareNetwork {
    Twitter,
    HatenaBookmark,
    Facebook,
    Line,
}

impl ShareNetwork {
    /// AMP `type` attribute value for this network.
    pub fn amp_type(&self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::HatenaBookmark => "hatena_bookmark",
            Self::Facebook => "facebook",
            Self::Line => "line",
        }
    }

    /// Render the `<amp-social-share>` element for this network.
    ///
    /// Hatena Bookmark has no built-in provider in the AMP runtime, so it
    /// carries an explicit container layout and share endpoint.
    pub fn render(&self) -> String {
        match self {
            Self::HatenaBookmark => format!(
                r#"<amp-social-share type="{}" layout="container" data-share-endpoint="{}"></amp-social-share>"#,
                self.amp_type(),
                HATENA_SHARE_ENDPOINT
            ),
            _ => format!(
                r#"<amp-social-share type="{}"></amp-social-share>"#,
                self.amp_type()
            ),
        }
    }
}

/// One entry of the share row: a network plus whether it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareAffordance {
    pub network: ShareNetwork,
    pub enabled: bool,
}

impl ShareAffordance {
    pub fn new(network: ShareNetwork, enabled: bool) -> Self {
        Self { network, enabled }
    }
}

/// The full affordance set in render order. Line is part of the set but
/// ships disabled.
pub fn default_affordances() -> [ShareAffordance; 4] {
    [
        ShareAffordance::new(ShareNetwork::Twitter, true),
        ShareAffordance::new(ShareNetwork::HatenaBookmark, true),
        ShareAffordance::new(ShareNetwork::Facebook, true),
        ShareAffordance::new(ShareNetwork::Line, false),
    ]
}

/// Render every enabled affordance in declaration order.
pub fn render_share_row(affordances: &[ShareAffordance]) -> String {
    affordances
        .iter()
        .filter(|a| a.enabled)
        .map(|a| a.network.render())
        .collect::<Vec<_>>()
        .join("\n")
}
