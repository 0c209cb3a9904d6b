use crate::age::{Subject, birthday_at};
use crate::band::band;
use crate::error::EvalError;
use crate::lookahead;
use crate::policy::EvaluationPolicy;
use agegate_catalog::RuleCatalog;
use agegate_types::{Decision, EligibilityResult, ReasonCode};

/// Decide a single feature for `subject` in `region`.
///
/// Unknown features fail with `UnknownFeature`; unknown regions use the default rules.
pub fn decide(
    catalog: &RuleCatalog,
    policy: &EvaluationPolicy,
    subject: &Subject,
    region: &str,
    feature: &str,
) -> Result<Decision, EvalError> {
    let min_age = catalog.lookup(region, feature)?;

    if subject.age >= min_age {
        return Ok(Decision {
            feature: feature.to_string(),
            min_age,
            allowed: true,
            reason_code: ReasonCode::Allowed,
            reason: format!("{feature} is allowed for this age group"),
            years_until_eligible: None,
            next_eligible_date: None,
        });
    }

    let next_eligible_date = birthday_at(subject.date_of_birth, min_age, policy.leap_day)?;
    Ok(Decision {
        feature: feature.to_string(),
        min_age,
        allowed: false,
        reason_code: ReasonCode::AgeRestricted,
        reason: format!("{feature} is restricted for children under {min_age} in {region}"),
        years_until_eligible: Some(min_age - subject.age),
        next_eligible_date: Some(next_eligible_date),
    })
}

/// Full single-feature evaluation: decision, band, regulation, and upcoming unlocks.
pub fn evaluate(
    catalog: &RuleCatalog,
    policy: &EvaluationPolicy,
    subject: &Subject,
    region: &str,
    feature: &str,
) -> Result<EligibilityResult, EvalError> {
    let decision = decide(catalog, policy, subject, region, feature)?;

    Ok(EligibilityResult {
        decision,
        age: subject.age,
        age_band: band(subject.age).to_string(),
        region: region.to_string(),
        regulation: catalog.regulation(region),
        upcoming_unlocks: lookahead::upcoming(catalog, policy, subject, region)?,
    })
}
