use agegate_catalog::CatalogError;
use time::Date;

/// Caller-visible validation failures. None of these are retried or recovered internally.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("either date_of_birth or age is required")]
    MissingSubjectAge,

    #[error("provided age {supplied} does not match date of birth (computed age {computed})")]
    InconsistentAge { supplied: u32, computed: u32 },

    #[error("unsupported feature: {feature}")]
    UnknownFeature { feature: String },

    #[error("date of birth {date_of_birth} is after {today}")]
    FutureDateOfBirth { date_of_birth: Date, today: Date },

    #[error("year {year} is outside the supported calendar range")]
    DateOutOfRange { year: i64 },
}

impl From<CatalogError> for EvalError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownFeature { feature } => EvalError::UnknownFeature { feature },
        }
    }
}
