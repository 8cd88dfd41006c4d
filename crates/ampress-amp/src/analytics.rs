//! Analytics beacon markup.
//!
//! The beacon configuration is a compile-time constant serialized to JSON
//! and embedded verbatim in every page. None of it is user input.

use std::collections::BTreeMap;

use serde::Serialize;

/// Analytics property the beacon reports to.
pub const GTAG_ID: &str = "UA-165420141-1";

#[derive(Serialize)]
struct BeaconConfig<'a> {
    vars: BeaconVars<'a>,
}

#[derive(Serialize)]
struct BeaconVars<'a> {
    gtag_id: &'a str,
    config: BTreeMap<&'a str, PropertyGroups<'a>>,
}

#[derive(Serialize)]
struct PropertyGroups<'a> {
    groups: &'a str,
}

/// The beacon configuration serialized to JSON.
///
/// Byte-stable output: struct fields serialize in declaration order and the
/// only map holds a single key.
pub fn beacon_json() -> String {
    let mut config = BTreeMap::new();
    config.insert(GTAG_ID, PropertyGroups { groups: "default" });

    let beacon = BeaconConfig {
        vars: BeaconVars {
            gtag_id: GTAG_ID,
            config,
        },
    };

    serde_json::to_string(&beacon).expect("beacon config serializes")
}

/// Render the `<amp-analytics>` element with the embedded beacon config.
pub fn render_beacon() -> String {
    format!(
        r#"<amp-analytics type="gtag" data-credentials="include"><script type="application/json">{}</script></amp-analytics>"#,
        beacon_json()
    )
}
