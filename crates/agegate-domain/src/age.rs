//! Age derivation from a date of birth and/or a supplied integer age.

use crate::error::EvalError;
use crate::policy::LeapDayPolicy;
use time::{Date, Month};

/// A resolved evaluation subject.
///
/// When only an integer age was supplied, `date_of_birth` is an approximation: today's month and
/// day, `age` years back. A Feb 29 `today` maps to Feb 28 in a common year so the approximation
/// never implies a younger age.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Subject {
    pub age: u32,
    pub date_of_birth: Date,
}

/// Resolve the subject's age and date of birth relative to `today`.
///
/// When both inputs are present the age recomputed from the date of birth must match exactly.
pub fn resolve_subject(
    date_of_birth: Option<Date>,
    age: Option<u32>,
    today: Date,
    leap_day: LeapDayPolicy,
) -> Result<Subject, EvalError> {
    match (date_of_birth, age) {
        (None, None) => Err(EvalError::MissingSubjectAge),
        (Some(dob), supplied) => {
            let computed = full_years_between(dob, today, leap_day)?;
            if let Some(supplied) = supplied
                && supplied != computed
            {
                return Err(EvalError::InconsistentAge { supplied, computed });
            }
            Ok(Subject {
                age: computed,
                date_of_birth: dob,
            })
        }
        (None, Some(age)) => {
            let year = shift_year(today.year(), -i64::from(age))?;
            Ok(Subject {
                age,
                date_of_birth: anniversary(today, year, LeapDayPolicy::Feb28)?,
            })
        }
    }
}

/// Whole calendar years elapsed; a year counts once this year's anniversary is reached.
///
/// Feb 29 birthdays in common years fall where `leap_day` puts them, matching `birthday_at`.
pub fn full_years_between(
    date_of_birth: Date,
    today: Date,
    leap_day: LeapDayPolicy,
) -> Result<u32, EvalError> {
    if date_of_birth > today {
        return Err(EvalError::FutureDateOfBirth {
            date_of_birth,
            today,
        });
    }

    let mut years = today.year() - date_of_birth.year();
    if today < anniversary(date_of_birth, today.year(), leap_day)? {
        years -= 1;
    }
    // dob <= today keeps this non-negative.
    Ok(years.unsigned_abs())
}

/// The date `years` years after `date_of_birth`, i.e. the day the subject turns `years`.
pub fn birthday_at(
    date_of_birth: Date,
    years: u32,
    leap_day: LeapDayPolicy,
) -> Result<Date, EvalError> {
    let year = shift_year(date_of_birth.year(), i64::from(years))?;
    anniversary(date_of_birth, year, leap_day)
}

/// Move `date`'s month and day into `year`.
///
/// Feb 29 in a non-leap `year` follows `leap_day`.
pub fn anniversary(date: Date, year: i32, leap_day: LeapDayPolicy) -> Result<Date, EvalError> {
    let out_of_range = || EvalError::DateOutOfRange {
        year: i64::from(year),
    };

    match Date::from_calendar_date(year, date.month(), date.day()) {
        Ok(d) => Ok(d),
        Err(_) if date.month() == Month::February && date.day() == 29 => {
            let (month, day) = match leap_day {
                LeapDayPolicy::Feb28 => (Month::February, 28),
                LeapDayPolicy::Mar1 => (Month::March, 1),
            };
            Date::from_calendar_date(year, month, day).map_err(|_| out_of_range())
        }
        Err(_) => Err(out_of_range()),
    }
}

fn shift_year(year: i32, delta: i64) -> Result<i32, EvalError> {
    let shifted = i64::from(year) + delta;
    i32::try_from(shifted).map_err(|_| EvalError::DateOutOfRange { year: shifted })
}
