//! Pure eligibility evaluation (no IO).
//!
//! Input: a resolved subject (age + date of birth), a region, feature keys, and the rule catalog.
//! Output: allow/deny decisions, age bands, and upcoming unlock projections.

#![forbid(unsafe_code)]

pub mod age;
pub mod band;
pub mod error;
pub mod policy;

mod batch;
mod eligibility;
mod lookahead;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use age::{Subject, anniversary, birthday_at, full_years_between, resolve_subject};
pub use band::{AGE_BANDS, AgeBand, band};
pub use batch::evaluate_batch;
pub use eligibility::{decide, evaluate};
pub use error::EvalError;
pub use lookahead::project;
pub use policy::{DEFAULT_HORIZON_YEARS, EvaluationPolicy, LeapDayPolicy};
