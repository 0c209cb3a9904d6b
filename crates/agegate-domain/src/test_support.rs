use crate::age::{Subject, resolve_subject};
use crate::policy::LeapDayPolicy;
use agegate_catalog::{RuleCatalog, rule_set};
use agegate_types::FeatureInfo;
use time::Date;
use time::macros::date;

pub const TODAY: Date = date!(2024 - 06 - 15);

/// Small catalog with one region missing features (falls back per feature) and one stricter one.
pub fn test_catalog() -> RuleCatalog {
    let mut catalog = RuleCatalog::new(
        "test",
        rule_set(&[
            ("free_chat", 13),
            ("location_sharing", 16),
            ("voice_recording", 8),
            ("push_notifications", 5),
            ("personalized_ads", 18),
        ]),
    )
    .with_region(
        "US",
        rule_set(&[
            ("free_chat", 13),
            ("voice_recording", 8),
            ("push_notifications", 5),
        ]),
    )
    .with_region(
        "DE",
        rule_set(&[
            ("free_chat", 16),
            ("voice_recording", 12),
            ("push_notifications", 8),
        ]),
    );

    for key in [
        "free_chat",
        "location_sharing",
        "voice_recording",
        "push_notifications",
        "personalized_ads",
    ] {
        catalog = catalog.with_feature(FeatureInfo {
            key: key.to_string(),
            display_name: key.replace('_', " "),
            description: String::new(),
            category: "Social".to_string(),
        });
    }
    catalog
}

pub fn subject_aged(age: u32) -> Subject {
    resolve_subject(None, Some(age), TODAY, LeapDayPolicy::Feb28).expect("valid age")
}

pub fn subject_born(date_of_birth: Date) -> Subject {
    resolve_subject(Some(date_of_birth), None, TODAY, LeapDayPolicy::Feb28)
        .expect("date of birth before TODAY")
}
