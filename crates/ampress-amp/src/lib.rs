//! AMP chrome for generated pages.
//!
//! Fixed markup only: the social-share affordance set, the analytics beacon,
//! and the runtime/boilerplate includes. Widget behavior belongs to the AMP
//! runtime, not to this crate.

pub mod analytics;
pub mod runtime;
pub mod share;

pub use analytics::{beacon_json, render_beacon, GTAG_ID};
pub use runtime::{AmpComponent, AMP_BOILERPLATE, AMP_RUNTIME_SCRIPT};
pub use share::{default_affordances, render_share_row, ShareAffordance, ShareNetwork};
