use crate::catalog::RuleCatalog;
use agegate_types::CatalogIssue;
use agegate_types::ids::{
    ISSUE_EXCEPTION_MISMATCH, ISSUE_MISSING_FEATURE, ISSUE_MISSING_METADATA,
    ISSUE_UNKNOWN_FEATURE_RULE,
};
use std::collections::BTreeSet;

/// Cross-check the rule tables against region and feature metadata.
///
/// Returns issues sorted by `(code, region, feature, message)`; an empty list means consistent.
pub fn verify(catalog: &RuleCatalog) -> Vec<CatalogIssue> {
    let mut issues = Vec::new();
    let described: BTreeSet<&str> = catalog
        .all_features()
        .iter()
        .map(|f| f.key.as_str())
        .collect();

    for feature in catalog.defaults().keys() {
        if !described.contains(feature.as_str()) {
            issues.push(issue(
                ISSUE_UNKNOWN_FEATURE_RULE,
                None,
                Some(feature.as_str()),
                format!("default rules define '{feature}' which has no feature metadata"),
            ));
        }
    }

    for region in catalog.all_regions() {
        let Some(rules) = catalog.region_rules(region) else {
            continue;
        };

        for feature in &described {
            if !rules.contains_key(*feature) {
                issues.push(issue(
                    ISSUE_MISSING_FEATURE,
                    Some(region),
                    Some(*feature),
                    format!("region '{region}' does not define '{feature}'; default rules apply"),
                ));
            }
        }

        for feature in rules.keys() {
            if !described.contains(feature.as_str()) {
                issues.push(issue(
                    ISSUE_UNKNOWN_FEATURE_RULE,
                    Some(region),
                    Some(feature.as_str()),
                    format!("region '{region}' defines '{feature}' which has no feature metadata"),
                ));
            }
        }

        if catalog.region(region).is_none() {
            issues.push(issue(
                ISSUE_MISSING_METADATA,
                Some(region),
                None,
                format!("region '{region}' has rules but no regulatory metadata"),
            ));
        }
    }

    for (region, profile) in catalog.profiles() {
        for (feature, stated) in &profile.exceptions {
            let Ok(actual) = catalog.lookup(region, feature) else {
                issues.push(issue(
                    ISSUE_UNKNOWN_FEATURE_RULE,
                    Some(region),
                    Some(feature.as_str()),
                    format!("exception for '{feature}' in '{region}' names an unknown feature"),
                ));
                continue;
            };
            if actual != *stated {
                issues.push(issue(
                    ISSUE_EXCEPTION_MISMATCH,
                    Some(region),
                    Some(feature.as_str()),
                    format!(
                        "metadata states {stated} for '{feature}' in '{region}' but rules resolve to {actual}"
                    ),
                ));
            }
        }
    }

    issues.sort();
    issues
}

fn issue(code: &str, region: Option<&str>, feature: Option<&str>, message: String) -> CatalogIssue {
    CatalogIssue {
        code: code.to_string(),
        region: region.map(str::to_string),
        feature: feature.map(str::to_string),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RegionProfile, rule_set};
    use agegate_types::FeatureInfo;
    use std::collections::BTreeMap;

    fn feature(key: &str) -> FeatureInfo {
        FeatureInfo {
            key: key.to_string(),
            display_name: key.to_string(),
            description: String::new(),
            category: "Social".to_string(),
        }
    }

    fn profile(exceptions: &[(&str, u32)]) -> RegionProfile {
        RegionProfile {
            name: "Somewhere".to_string(),
            law: "Some Act".to_string(),
            general_age: 13,
            exceptions: exceptions
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<BTreeMap<_, _>>(),
            description: String::new(),
        }
    }

    #[test]
    fn builtin_catalog_is_consistent() {
        let issues = verify(crate::builtin());
        assert!(issues.is_empty(), "unexpected catalog issues: {issues:#?}");
    }

    #[test]
    fn reports_each_kind_of_drift() {
        let catalog = RuleCatalog::new("test", rule_set(&[("free_chat", 13), ("mystery", 9)]))
            .with_feature(feature("free_chat"))
            .with_feature(feature("ai_chat"))
            .with_region("US", rule_set(&[("free_chat", 13), ("ai_chat", 13)]))
            .with_region("DE", rule_set(&[("free_chat", 16)]))
            .with_profile("US", profile(&[("free_chat", 12)]));

        let codes: Vec<(String, Option<String>, Option<String>)> = verify(&catalog)
            .into_iter()
            .map(|i| (i.code, i.region, i.feature))
            .collect();

        assert_eq!(
            codes,
            vec![
                (
                    ISSUE_EXCEPTION_MISMATCH.to_string(),
                    Some("US".to_string()),
                    Some("free_chat".to_string())
                ),
                (
                    ISSUE_MISSING_FEATURE.to_string(),
                    Some("DE".to_string()),
                    Some("ai_chat".to_string())
                ),
                (ISSUE_MISSING_METADATA.to_string(), Some("DE".to_string()), None),
                (
                    ISSUE_UNKNOWN_FEATURE_RULE.to_string(),
                    None,
                    Some("mystery".to_string())
                ),
            ]
        );

        let mut emitted: Vec<&str> = codes.iter().map(|(code, _, _)| code.as_str()).collect();
        emitted.sort_unstable();
        let mut known = agegate_types::ids::all_issue_codes().to_vec();
        known.sort_unstable();
        assert_eq!(emitted, known);
    }
}
