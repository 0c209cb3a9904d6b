//! Typed requests as they arrive from callers, before any engine validation.

use agegate_domain::{LeapDayPolicy, Subject};
use time::Date;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("invalid date format: {input} (expected YYYY-MM-DD)")]
    InvalidDate { input: String },
}

/// Single-feature request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckRequest {
    /// ISO `YYYY-MM-DD`.
    pub date_of_birth: Option<String>,
    pub age: Option<u32>,
    pub region: String,
    pub feature: String,
}

/// Multi-feature request. Unknown features are skipped rather than rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchRequest {
    pub date_of_birth: Option<String>,
    pub age: Option<u32>,
    pub region: String,
    pub features: Vec<String>,
}

pub fn parse_date_of_birth(input: &str) -> Result<Date, RequestError> {
    agegate_types::parse_iso_date(input).map_err(|_| RequestError::InvalidDate {
        input: input.to_string(),
    })
}

/// Region codes are case-insensitive on input: `" us "` becomes `US`.
pub fn normalize_region(region: &str) -> String {
    region.trim().to_ascii_uppercase()
}

pub(crate) fn resolve_subject(
    date_of_birth: Option<&str>,
    age: Option<u32>,
    today: Date,
    leap_day: LeapDayPolicy,
) -> anyhow::Result<Subject> {
    let dob = date_of_birth.map(parse_date_of_birth).transpose()?;
    let subject = agegate_domain::resolve_subject(dob, age, today, leap_day)?;
    Ok(subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use agegate_domain::EvalError;
    use time::macros::date;

    #[test]
    fn normalizes_region_codes() {
        assert_eq!(normalize_region(" us "), "US");
        assert_eq!(normalize_region("De"), "DE");
        assert_eq!(normalize_region("zz"), "ZZ");
    }

    #[test]
    fn malformed_dates_are_invalid() {
        for input in ["2014/03/20", "20-03-2014", "2014-13-01", "yesterday"] {
            assert_eq!(
                parse_date_of_birth(input),
                Err(RequestError::InvalidDate {
                    input: input.to_string()
                })
            );
        }
    }

    #[test]
    fn domain_errors_pass_through() {
        let err = resolve_subject(None, None, date!(2024 - 06 - 15), LeapDayPolicy::Feb28)
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<EvalError>(),
            Some(&EvalError::MissingSubjectAge)
        );
    }

    #[test]
    fn invalid_date_is_reported_before_age_checks() {
        let today = date!(2024 - 06 - 15);
        let err = resolve_subject(Some("bad"), Some(10), today, LeapDayPolicy::Feb28).unwrap_err();
        assert!(err.downcast_ref::<RequestError>().is_some());
    }
}
