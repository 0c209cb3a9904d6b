//! Central rule catalog: per-region minimum ages, default rules, and presentation metadata.
//!
//! The built-in catalog is assembled once from `tables` and never mutated. Lookups never fail on
//! an unknown region, only on an unknown feature.

#![forbid(unsafe_code)]

mod catalog;
mod error;
mod requirements;
pub mod tables;
mod verify;

use agegate_types::FeatureInfo;
use std::sync::LazyLock;

pub use catalog::{RegionProfile, RuleCatalog, RuleSet, STANDARD_PRACTICES, rule_set};
pub use error::CatalogError;
pub use requirements::requirements;
pub use verify::verify;

static BUILTIN: LazyLock<RuleCatalog> = LazyLock::new(build_builtin);

/// The compiled-in catalog, shared process-wide.
pub fn builtin() -> &'static RuleCatalog {
    &BUILTIN
}

fn build_builtin() -> RuleCatalog {
    let mut catalog = RuleCatalog::new(tables::CATALOG_VERSION, rule_set(tables::DEFAULT_RULES));

    for region in tables::REGIONS {
        catalog = catalog.with_region(region.code, rule_set(region.rules));
    }

    for meta in tables::REGION_METADATA {
        catalog = catalog.with_profile(
            meta.code,
            RegionProfile {
                name: meta.name.to_string(),
                law: meta.law.to_string(),
                general_age: meta.general_age,
                exceptions: rule_set(meta.exceptions),
                description: meta.description.to_string(),
            },
        );
    }

    for f in tables::FEATURES {
        catalog = catalog.with_feature(FeatureInfo {
            key: f.key.to_string(),
            display_name: f.display_name.to_string(),
            description: f.description.to_string(),
            category: f.category.to_string(),
        });
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use agegate_types::ids;

    #[test]
    fn builtin_has_versioned_tables() {
        let c = builtin();
        assert_eq!(c.version(), tables::CATALOG_VERSION);
        assert!(c.all_regions().contains(&"US"));
        assert!(c.all_regions().contains(&"DE"));
    }

    #[test]
    fn builtin_describes_every_feature_key() {
        let c = builtin();
        for key in ids::all_feature_keys() {
            assert!(c.feature(key).is_some(), "missing metadata for {key}");
            assert!(c.defaults().contains_key(*key), "missing default rule for {key}");
        }
        assert_eq!(c.all_features().len(), ids::all_feature_keys().len());
    }

    #[test]
    fn builtin_us_rules() {
        let c = builtin();
        assert_eq!(c.lookup("US", ids::FEATURE_VOICE_RECORDING).unwrap(), 8);
        assert_eq!(c.lookup("US", ids::FEATURE_AI_CHAT).unwrap(), 13);
        assert_eq!(c.lookup("US", ids::FEATURE_PUSH_NOTIFICATIONS).unwrap(), 5);
    }

    #[test]
    fn builtin_unknown_region_uses_defaults() {
        let c = builtin();
        assert_eq!(c.lookup("ZZ", ids::FEATURE_FREE_CHAT).unwrap(), 13);
        assert_eq!(c.effective_rules("ZZ"), *c.defaults());
    }

    #[test]
    fn builtin_regions_are_sorted() {
        let regions = builtin().all_regions();
        let mut sorted = regions.clone();
        sorted.sort_unstable();
        assert_eq!(regions, sorted);
    }
}
