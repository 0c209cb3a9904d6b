use crate::date::iso_date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Stable schema identifiers for agegate envelopes.
pub const SCHEMA_CHECK_V1: &str = "agegate.check.v1";
pub const SCHEMA_BATCH_V1: &str = "agegate.batch.v1";

pub const DISCLAIMER: &str =
    "This response provides general guidance only and does not constitute legal advice.";

/// Reason codes form a closed set: a decision is either allowed or age restricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReasonCode {
    Allowed,
    AgeRestricted,
}

impl ReasonCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ReasonCode::Allowed => crate::ids::REASON_ALLOWED,
            ReasonCode::AgeRestricted => crate::ids::REASON_AGE_RESTRICTED,
        }
    }
}

/// Regulatory reference for a region.
///
/// Regions without metadata get a generic "standard practices" reference with only `region` and
/// `law` populated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Regulation {
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub law: String,
    /// General threshold for display only; per-feature rules always win.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub general_age: Option<u32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub exceptions: BTreeMap<String, u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The per-feature part of an eligibility decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Decision {
    pub feature: String,
    pub min_age: u32,
    pub allowed: bool,
    pub reason_code: ReasonCode,
    pub reason: String,
    /// Present only when denied.
    #[serde(default)]
    pub years_until_eligible: Option<u32>,
    /// Present only when denied.
    #[schemars(with = "Option<String>")]
    #[serde(default, with = "iso_date::option")]
    pub next_eligible_date: Option<Date>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UpcomingUnlock {
    pub feature: String,
    pub display_name: String,
    pub min_age: u32,
    pub years_until_unlock: u32,
    #[schemars(with = "String")]
    #[serde(with = "iso_date")]
    pub unlock_date: Date,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct EligibilityResult {
    #[serde(flatten)]
    pub decision: Decision,
    pub age: u32,
    pub age_band: String,
    pub region: String,
    pub regulation: Regulation,
    /// `None` (JSON `null`) when nothing unlocks within the horizon; never an empty list.
    #[serde(default)]
    pub upcoming_unlocks: Option<Vec<UpcomingUnlock>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchSummary {
    pub allowed_count: u32,
    pub restricted_count: u32,
    pub total_checked: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchResult {
    pub age: u32,
    pub age_band: String,
    pub region: String,
    pub regulation: Regulation,
    pub results: Vec<Decision>,
    /// Requested feature keys that matched no rule and were dropped.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
    pub summary: BatchSummary,
    #[serde(default)]
    pub upcoming_unlocks: Option<Vec<UpcomingUnlock>>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    pub schema: String,
    pub catalog_version: String,
    #[schemars(with = "String")]
    #[serde(with = "iso_date")]
    pub evaluated_on: Date,
    pub result: EligibilityResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchReport {
    pub schema: String,
    pub catalog_version: String,
    #[schemars(with = "String")]
    #[serde(with = "iso_date")]
    pub evaluated_on: Date,
    pub result: BatchResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureInfo {
    pub key: String,
    pub display_name: String,
    pub description: String,
    pub category: String,
}

/// Minimum ages for one feature across every catalog region.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FeatureRequirements {
    pub feature: String,
    pub by_region: BTreeMap<String, u32>,
    /// `None` when only region tables define the feature.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_age: Option<u32>,
    pub strictest_age: u32,
    pub most_lenient_age: u32,
    /// Mode of `by_region`; ties resolve to the smallest age.
    pub most_common_age: u32,
}

/// A drift between rule tables and presentation metadata.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub struct CatalogIssue {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    pub message: String,
}
