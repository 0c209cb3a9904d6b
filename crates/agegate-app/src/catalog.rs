//! Read-only catalog queries: regions, features, requirements, and verification.

use agegate_types::{CatalogIssue, FeatureInfo, FeatureRequirements, Regulation};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VerifyOutput {
    pub catalog_version: String,
    pub issues: Vec<CatalogIssue>,
}

/// Every region with a rule table, with its regulatory reference, sorted by code.
pub fn run_regions() -> Vec<Regulation> {
    let catalog = agegate_catalog::builtin();
    catalog
        .all_regions()
        .into_iter()
        .map(|code| catalog.regulation(code))
        .collect()
}

pub fn run_features() -> Vec<FeatureInfo> {
    agegate_catalog::builtin().all_features().to_vec()
}

pub fn run_requirements(feature: &str) -> anyhow::Result<FeatureRequirements> {
    let req = agegate_catalog::requirements(agegate_catalog::builtin(), feature.trim())?;
    Ok(req)
}

pub fn run_verify_catalog() -> VerifyOutput {
    let catalog = agegate_catalog::builtin();
    let issues = agegate_catalog::verify(catalog);
    if issues.is_empty() {
        tracing::info!(version = catalog.version(), "catalog verified");
    } else {
        tracing::warn!(
            version = catalog.version(),
            issues = issues.len(),
            "catalog has inconsistencies"
        );
    }
    VerifyOutput {
        catalog_version: catalog.version().to_string(),
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_carry_regulations() {
        let regions = run_regions();
        let us = regions.iter().find(|r| r.region == "US").unwrap();
        assert_eq!(us.law, "COPPA");
        assert!(regions.windows(2).all(|w| w[0].region < w[1].region));
    }

    #[test]
    fn features_are_listed() {
        let features = run_features();
        assert!(features.iter().any(|f| f.key == "voice_recording"));
    }

    #[test]
    fn requirements_for_known_and_unknown_features() {
        let req = run_requirements("free_chat").unwrap();
        assert_eq!(req.by_region.get("US"), Some(&13));
        assert_eq!(req.by_region.get("DE"), Some(&16));
        assert!(req.strictest_age >= req.most_common_age);
        assert!(req.most_common_age >= req.most_lenient_age);

        let err = run_requirements("teleport").unwrap_err();
        assert_eq!(err.to_string(), "unsupported feature: teleport");
    }

    #[test]
    fn builtin_catalog_verifies_clean() {
        let out = run_verify_catalog();
        assert_eq!(out.catalog_version, "2024.1");
        assert!(out.issues.is_empty(), "{:?}", out.issues);
    }
}
