use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_V1: &str = "agegate.config.v1";

/// `agegate.toml` schema v1.
///
/// Every field is optional; absent values take the engine defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct AgegateConfigV1 {
    /// Optional schema string for tooling (`agegate.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Lookahead window for upcoming unlocks, in years (default 5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizon_years: Option<u32>,

    /// Feb 29 birthdays in common years: `feb28` (default) or `mar1`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leap_day: Option<String>,

    /// Attach upcoming unlocks to results (default true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_upcoming: Option<bool>,

    /// Attach the advisory disclaimer to envelopes (default true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<bool>,
}
