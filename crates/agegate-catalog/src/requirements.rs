use crate::catalog::RuleCatalog;
use crate::error::CatalogError;
use agegate_types::FeatureRequirements;
use std::collections::BTreeMap;

/// Cross-region statistics for one feature.
///
/// Statistics are taken over the per-region ages; a catalog with no regions uses the default age
/// alone.
pub fn requirements(
    catalog: &RuleCatalog,
    feature: &str,
) -> Result<FeatureRequirements, CatalogError> {
    let by_region = catalog.age_requirement_across_regions(feature)?;
    let default_age = catalog.defaults().get(feature).copied();

    let mut ages: Vec<u32> = by_region.values().copied().collect();
    if ages.is_empty() {
        ages.extend(default_age);
    }

    let strictest_age = ages.iter().copied().max().unwrap_or_default();
    let most_lenient_age = ages.iter().copied().min().unwrap_or_default();
    let most_common_age = most_common(&ages).unwrap_or_default();

    Ok(FeatureRequirements {
        feature: feature.to_string(),
        by_region,
        default_age,
        strictest_age,
        most_lenient_age,
        most_common_age,
    })
}

/// Mode of `ages`; equal frequencies resolve to the smallest age.
fn most_common(ages: &[u32]) -> Option<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for age in ages {
        *counts.entry(*age).or_default() += 1;
    }
    // BTreeMap iterates ascending, so keeping only strictly greater counts favours smaller ages.
    let mut best: Option<(u32, usize)> = None;
    for (age, count) in counts {
        if best.is_none_or(|(_, c)| count > c) {
            best = Some((age, count));
        }
    }
    best.map(|(age, _)| age)
}
