//! Public facade over the agegate rule catalog and eligibility engine.
//!
//! Most callers want [`evaluate_builtin`] or [`evaluate_batch_builtin`], which run against the
//! compiled-in catalog with the default [`EvaluationPolicy`].

#![forbid(unsafe_code)]

pub use agegate_catalog::{self as catalog, RuleCatalog, builtin};
pub use agegate_domain::{
    AGE_BANDS, AgeBand, DEFAULT_HORIZON_YEARS, EvalError, EvaluationPolicy, LeapDayPolicy,
    Subject, band, decide, evaluate, evaluate_batch, project, resolve_subject,
};
pub use agegate_types as types;
pub use agegate_types::{BatchResult, Decision, EligibilityResult, UpcomingUnlock};

pub fn evaluate_builtin(
    subject: &Subject,
    region: &str,
    feature: &str,
) -> Result<EligibilityResult, EvalError> {
    evaluate(builtin(), &EvaluationPolicy::default(), subject, region, feature)
}

pub fn evaluate_batch_builtin<S: AsRef<str>>(
    subject: &Subject,
    region: &str,
    features: &[S],
) -> Result<BatchResult, EvalError> {
    evaluate_batch(builtin(), &EvaluationPolicy::default(), subject, region, features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn ten_year_old() -> Subject {
        resolve_subject(None, Some(10), date!(2024 - 06 - 15), LeapDayPolicy::Feb28).unwrap()
    }

    #[test]
    fn builtin_single_and_batch_agree() {
        let subject = ten_year_old();
        let single = evaluate_builtin(&subject, "US", "ai_chat").unwrap();
        let batch = evaluate_batch_builtin(&subject, "US", &["ai_chat"]).unwrap();
        assert!(!single.decision.allowed);
        assert_eq!(batch.results, vec![single.decision]);
    }

    #[test]
    fn reexports_reach_the_catalog() {
        assert_eq!(catalog::builtin().version(), catalog::tables::CATALOG_VERSION);
        assert_eq!(band(10), "8-12");
    }
}
