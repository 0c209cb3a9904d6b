pub const DEFAULT_HORIZON_YEARS: u32 = 5;

/// Where a Feb 29 anniversary lands in a year without one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LeapDayPolicy {
    #[default]
    Feb28,
    Mar1,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationPolicy {
    /// Lookahead window for upcoming unlocks, in whole years.
    pub horizon_years: u32,
    pub leap_day: LeapDayPolicy,
    /// When false the projector is skipped and `upcoming_unlocks` is always `None`.
    pub include_upcoming: bool,
}

impl Default for EvaluationPolicy {
    fn default() -> Self {
        Self {
            horizon_years: DEFAULT_HORIZON_YEARS,
            leap_day: LeapDayPolicy::Feb28,
            include_upcoming: true,
        }
    }
}
