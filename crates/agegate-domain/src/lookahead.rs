use crate::age::{Subject, birthday_at};
use crate::error::EvalError;
use crate::policy::EvaluationPolicy;
use agegate_catalog::RuleCatalog;
use agegate_types::UpcomingUnlock;

/// Features in the region's effective rule set that unlock within the policy horizon.
///
/// A feature qualifies when `age < min_age <= age + horizon_years`. Entries are ordered by
/// `years_until_unlock`, then feature key. Returns `None` instead of an empty list.
pub fn project(
    catalog: &RuleCatalog,
    policy: &EvaluationPolicy,
    subject: &Subject,
    region: &str,
) -> Result<Option<Vec<UpcomingUnlock>>, EvalError> {
    let ceiling = subject.age.saturating_add(policy.horizon_years);
    let mut unlocks = Vec::new();

    for (feature, min_age) in catalog.effective_rules(region) {
        if subject.age >= min_age || min_age > ceiling {
            continue;
        }

        let display_name = catalog
            .feature(&feature)
            .map(|f| f.display_name.clone())
            .unwrap_or_else(|| feature.clone());

        unlocks.push(UpcomingUnlock {
            unlock_date: birthday_at(subject.date_of_birth, min_age, policy.leap_day)?,
            years_until_unlock: min_age - subject.age,
            feature,
            display_name,
            min_age,
        });
    }

    unlocks.sort_by(|a, b| {
        a.years_until_unlock
            .cmp(&b.years_until_unlock)
            .then_with(|| a.feature.cmp(&b.feature))
    });

    Ok((!unlocks.is_empty()).then_some(unlocks))
}

/// `project` gated by `include_upcoming`.
pub(crate) fn upcoming(
    catalog: &RuleCatalog,
    policy: &EvaluationPolicy,
    subject: &Subject,
    region: &str,
) -> Result<Option<Vec<UpcomingUnlock>>, EvalError> {
    if !policy.include_upcoming {
        return Ok(None);
    }
    project(catalog, policy, subject, region)
}
