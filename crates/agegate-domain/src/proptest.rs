//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - allow/deny decisions and their supporting fields
//! - region fallback to the default rules
//! - batch vs. single evaluation consistency
//! - lookahead window bounds and ordering
//! - age derivation from dates of birth

use crate::age::{Subject, full_years_between, resolve_subject};
use crate::band::band;
use crate::batch::evaluate_batch;
use crate::eligibility::evaluate;
use crate::error::EvalError;
use crate::lookahead::project;
use crate::policy::{EvaluationPolicy, LeapDayPolicy};
use crate::test_support::TODAY;
use agegate_types::ids::{self, BAND_UNKNOWN};
use agegate_types::ReasonCode;
use proptest::prelude::*;
use time::{Date, Month};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Dates of birth up to and including `TODAY`, with leap days mixed in.
fn arb_date_of_birth() -> impl Strategy<Value = Date> {
    prop_oneof![
        (1940i32..=2024, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| {
            let month = Month::try_from(m).expect("1..=12 is a month");
            Date::from_calendar_date(y, month, d).expect("day 1..=28 always exists")
        }),
        (0i32..=20).prop_map(|n| {
            Date::from_calendar_date(1944 + n * 4, Month::February, 29).expect("leap year")
        }),
    ]
    .prop_filter("born on or before today", |d| *d <= TODAY)
}

fn arb_subject() -> impl Strategy<Value = Subject> {
    arb_date_of_birth().prop_map(|dob| {
        resolve_subject(Some(dob), None, TODAY, LeapDayPolicy::Feb28).expect("dob before today")
    })
}

fn arb_region() -> impl Strategy<Value = String> {
    let mut regions: Vec<String> = agegate_catalog::builtin()
        .all_regions()
        .into_iter()
        .map(str::to_string)
        .collect();
    regions.push("ZZ".to_string());
    regions.push("unknown-region".to_string());
    prop::sample::select(regions)
}

fn arb_feature() -> impl Strategy<Value = String> {
    prop::sample::select(ids::all_feature_keys().to_vec()).prop_map(str::to_string)
}

/// Known feature keys mixed with keys no rule table defines.
fn arb_feature_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            4 => arb_feature(),
            1 => "[a-z]{3,10}_x",
        ],
        0..12,
    )
}

fn arb_leap_day() -> impl Strategy<Value = LeapDayPolicy> {
    prop_oneof![Just(LeapDayPolicy::Feb28), Just(LeapDayPolicy::Mar1)]
}

fn arb_policy() -> impl Strategy<Value = EvaluationPolicy> {
    (0u32..=10, arb_leap_day()).prop_map(|(horizon_years, leap_day)| EvaluationPolicy {
        horizon_years,
        leap_day,
        include_upcoming: true,
    })
}

/// Evaluation dates with leap days and the days around them mixed in.
fn arb_today() -> impl Strategy<Value = Date> {
    prop_oneof![
        (2000i32..=2040, 1u8..=12, 1u8..=28).prop_map(|(y, m, d)| {
            let month = Month::try_from(m).expect("1..=12 is a month");
            Date::from_calendar_date(y, month, d).expect("day 1..=28 always exists")
        }),
        (0i32..=10, 28u8..=29).prop_map(|(n, d)| {
            Date::from_calendar_date(2000 + n * 4, Month::February, d).expect("leap year")
        }),
        (2000i32..=2040).prop_map(|y| {
            Date::from_calendar_date(y, Month::March, 1).expect("march first")
        }),
    ]
}

// ============================================================================
// Decisions
// ============================================================================

proptest! {
    /// Allowed exactly when age >= min_age, with eligibility fields only on denials.
    #[test]
    fn decision_matches_threshold(
        subject in arb_subject(),
        region in arb_region(),
        feature in arb_feature(),
        policy in arb_policy(),
    ) {
        let catalog = agegate_catalog::builtin();
        let min_age = catalog.lookup(&region, &feature).unwrap();
        let result = evaluate(catalog, &policy, &subject, &region, &feature).unwrap();
        let d = &result.decision;

        prop_assert_eq!(d.min_age, min_age);
        if subject.age >= min_age {
            prop_assert!(d.allowed);
            prop_assert_eq!(d.reason_code, ReasonCode::Allowed);
            prop_assert_eq!(d.years_until_eligible, None);
            prop_assert_eq!(d.next_eligible_date, None);
        } else {
            prop_assert!(!d.allowed);
            prop_assert_eq!(d.reason_code, ReasonCode::AgeRestricted);
            prop_assert_eq!(d.years_until_eligible, Some(min_age - subject.age));
            let next = d.next_eligible_date.expect("denied decisions carry a date");
            prop_assert_eq!(next.year(), subject.date_of_birth.year() + min_age as i32);
            prop_assert!(next > TODAY);
        }
    }

    /// Evaluating the same inputs twice yields identical results.
    #[test]
    fn evaluation_is_idempotent(
        subject in arb_subject(),
        region in arb_region(),
        feature in arb_feature(),
    ) {
        let catalog = agegate_catalog::builtin();
        let policy = EvaluationPolicy::default();
        let a = evaluate(catalog, &policy, &subject, &region, &feature);
        let b = evaluate(catalog, &policy, &subject, &region, &feature);
        prop_assert_eq!(a, b);
    }

    /// An absent region behaves exactly like a region whose rules are the defaults.
    #[test]
    fn unknown_region_matches_explicit_defaults(
        subject in arb_subject(),
        feature in arb_feature(),
    ) {
        let catalog = agegate_catalog::builtin();
        let explicit = catalog.clone().with_region("ZZ", catalog.defaults().clone());
        let policy = EvaluationPolicy::default();

        let fallback = evaluate(catalog, &policy, &subject, "ZZ", &feature).unwrap();
        let declared = evaluate(&explicit, &policy, &subject, "ZZ", &feature).unwrap();
        prop_assert_eq!(fallback.decision, declared.decision);
        prop_assert_eq!(fallback.upcoming_unlocks, declared.upcoming_unlocks);
    }

    /// Batch results equal single evaluations of the known features, in order.
    #[test]
    fn batch_equals_individual_evaluations(
        subject in arb_subject(),
        region in arb_region(),
        features in arb_feature_list(),
    ) {
        let catalog = agegate_catalog::builtin();
        let policy = EvaluationPolicy::default();
        let batch = evaluate_batch(catalog, &policy, &subject, &region, &features).unwrap();

        let mut expected = Vec::new();
        let mut skipped = Vec::new();
        for feature in &features {
            match evaluate(catalog, &policy, &subject, &region, feature) {
                Ok(r) => expected.push(r.decision),
                Err(EvalError::UnknownFeature { feature }) => skipped.push(feature),
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }

        prop_assert_eq!(&batch.results, &expected);
        prop_assert_eq!(&batch.skipped, &skipped);
        prop_assert_eq!(batch.summary.total_checked as usize, expected.len());
        prop_assert_eq!(
            batch.summary.allowed_count + batch.summary.restricted_count,
            batch.summary.total_checked
        );
    }
}

// ============================================================================
// Lookahead
// ============================================================================

proptest! {
    /// Every projected unlock lies strictly ahead and within the horizon, sorted by proximity.
    #[test]
    fn lookahead_respects_window_and_order(
        subject in arb_subject(),
        region in arb_region(),
        policy in arb_policy(),
    ) {
        let catalog = agegate_catalog::builtin();
        let projected = project(catalog, &policy, &subject, &region).unwrap();

        let Some(unlocks) = projected else {
            // None means no feature in the effective rules falls inside the window.
            for min_age in catalog.effective_rules(&region).values() {
                prop_assert!(
                    *min_age <= subject.age || *min_age > subject.age + policy.horizon_years
                );
            }
            return Ok(());
        };

        prop_assert!(!unlocks.is_empty());
        for u in &unlocks {
            prop_assert!(subject.age < u.min_age);
            prop_assert!(u.min_age <= subject.age + policy.horizon_years);
            prop_assert_eq!(u.years_until_unlock, u.min_age - subject.age);
        }
        for pair in unlocks.windows(2) {
            let key = |u: &agegate_types::UpcomingUnlock| (u.years_until_unlock, u.feature.clone());
            prop_assert!(key(&pair[0]) < key(&pair[1]));
        }
    }
}

// ============================================================================
// Ages and bands
// ============================================================================

proptest! {
    /// Every age maps to exactly one known band.
    #[test]
    fn every_age_has_a_band(age in any::<u32>()) {
        prop_assert_ne!(band(age), BAND_UNKNOWN);
    }

    /// A supplied age is accepted exactly when it equals the age derived from the birth date.
    #[test]
    fn consistency_check_is_exact(
        dob in arb_date_of_birth(),
        delta in 1u32..5,
        leap_day in arb_leap_day(),
    ) {
        let computed = full_years_between(dob, TODAY, leap_day).unwrap();

        let ok = resolve_subject(Some(dob), Some(computed), TODAY, leap_day).unwrap();
        prop_assert_eq!(ok.age, computed);

        let err = resolve_subject(Some(dob), Some(computed + delta), TODAY, leap_day).unwrap_err();
        prop_assert_eq!(
            err,
            EvalError::InconsistentAge { supplied: computed + delta, computed }
        );
    }

    /// An age-only subject resolves back to the same age, and its approximate birth date is
    /// accepted alongside that age.
    #[test]
    fn approximate_birth_date_round_trips(
        age in 0u32..=120,
        today in arb_today(),
        leap_day in arb_leap_day(),
    ) {
        let subject = resolve_subject(None, Some(age), today, leap_day).unwrap();
        prop_assert_eq!(full_years_between(subject.date_of_birth, today, leap_day).unwrap(), age);

        let again = resolve_subject(Some(subject.date_of_birth), Some(age), today, leap_day);
        prop_assert_eq!(again, Ok(subject));
    }

    /// A denied subject is allowed on the reported next eligible date, and not the day before.
    #[test]
    fn allowed_on_next_eligible_date(
        dob in arb_date_of_birth(),
        region in arb_region(),
        feature in arb_feature(),
        policy in arb_policy(),
    ) {
        let catalog = agegate_catalog::builtin();
        let subject = resolve_subject(Some(dob), None, TODAY, policy.leap_day).unwrap();
        let result = evaluate(catalog, &policy, &subject, &region, &feature).unwrap();
        let Some(next) = result.decision.next_eligible_date else {
            return Ok(());
        };

        let on = resolve_subject(Some(dob), None, next, policy.leap_day).unwrap();
        let decided = evaluate(catalog, &policy, &on, &region, &feature).unwrap();
        prop_assert!(decided.decision.allowed);
        prop_assert_eq!(on.age, result.decision.min_age);

        let eve = next.previous_day().expect("eligible dates are after birth");
        let before = resolve_subject(Some(dob), None, eve, policy.leap_day).unwrap();
        prop_assert_eq!(before.age + 1, result.decision.min_age);
    }
}
