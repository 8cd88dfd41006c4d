//! AMP runtime and boilerplate constants.

/// The AMP runtime loader, required in every page head.
pub const AMP_RUNTIME_SCRIPT: &str =
    r#"<script async src="https://cdn.ampproject.org/v0.js"></script>"#;

/// Mandatory AMP boilerplate style pair. Must be emitted verbatim; the
/// validator rejects any mutation.
pub const AMP_BOILERPLATE: &str = "<style amp-boilerplate>body{-webkit-animation:-amp-start 8s steps(1,end) 0s 1 normal both;-moz-animation:-amp-start 8s steps(1,end) 0s 1 normal both;-ms-animation:-amp-start 8s steps(1,end) 0s 1 normal both;animation:-amp-start 8s steps(1,end) 0s 1 normal both}@-webkit-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-moz-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-ms-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@-o-keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}@keyframes -amp-start{from{visibility:hidden}to{visibility:visible}}</style><noscript><style amp-boilerplate>body{-webkit-animation:none;-moz-animation:none;-ms-animation:none;animation:none}</style></noscript>";

/// AMP extension components a page can request in its head.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmpComponent {
    SocialShare,
    Analytics,
}

impl AmpComponent {
    /// Custom element name.
    pub fn element(&self) -> &'static str {
        match self {
            Self::SocialShare => "amp-social-share",
            Self::Analytics => "amp-analytics",
        }
    }

    /// `<script custom-element>` include for the page head.
    pub fn script_include(&self) -> String {
        format!(
            r#"<script async custom-element="{name}" src="https://cdn.ampproject.org/v0/{name}-0.1.js"></script>"#,
            name = self.element()
        )
    }
}
