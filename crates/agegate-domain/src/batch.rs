use crate::age::Subject;
use crate::band::band;
use crate::eligibility::decide;
use crate::error::EvalError;
use crate::lookahead;
use crate::policy::EvaluationPolicy;
use agegate_catalog::RuleCatalog;
use agegate_types::{BatchResult, BatchSummary};

/// Evaluate several features for one subject and region.
///
/// Unlike `evaluate`, unknown features do not fail the call: they are left out of `results` and
/// the summary and listed in `skipped`. Regulation and upcoming unlocks are computed once.
pub fn evaluate_batch<S: AsRef<str>>(
    catalog: &RuleCatalog,
    policy: &EvaluationPolicy,
    subject: &Subject,
    region: &str,
    features: &[S],
) -> Result<BatchResult, EvalError> {
    let mut results = Vec::with_capacity(features.len());
    let mut skipped = Vec::new();

    for feature in features {
        match decide(catalog, policy, subject, region, feature.as_ref()) {
            Ok(decision) => results.push(decision),
            Err(EvalError::UnknownFeature { feature }) => skipped.push(feature),
            Err(err) => return Err(err),
        }
    }

    let allowed_count = saturating_count(results.iter().filter(|d| d.allowed).count());
    let total_checked = saturating_count(results.len());
    let summary = BatchSummary {
        allowed_count,
        restricted_count: total_checked - allowed_count,
        total_checked,
    };

    Ok(BatchResult {
        age: subject.age,
        age_band: band(subject.age).to_string(),
        region: region.to_string(),
        regulation: catalog.regulation(region),
        results,
        skipped,
        summary,
        upcoming_unlocks: lookahead::upcoming(catalog, policy, subject, region)?,
    })
}

/// Counts past `u32::MAX` saturate.
fn saturating_count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
