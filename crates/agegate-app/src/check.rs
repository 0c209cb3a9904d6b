//! The `check` use case: evaluate one feature and produce a report envelope.

use crate::config::load_config;
use crate::request::{CheckRequest, normalize_region, resolve_subject};
use agegate_settings::{Overrides, ResolvedConfig};
use agegate_types::{CheckReport, DISCLAIMER, SCHEMA_CHECK_V1};
use time::Date;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    pub request: CheckRequest,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    /// Evaluation date; ages and eligibility dates are relative to it.
    pub today: Date,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: CheckReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
}

/// Run the check use case: resolve config, resolve the subject, evaluate, wrap in an envelope.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let resolved = load_config(input.config_text, input.overrides)?;
    let catalog = agegate_catalog::builtin();

    let request = input.request;
    let region = normalize_region(&request.region);
    let subject = resolve_subject(
        request.date_of_birth.as_deref(),
        request.age,
        input.today,
        resolved.policy.leap_day,
    )?;

    let result = agegate_domain::evaluate(
        catalog,
        &resolved.policy,
        &subject,
        &region,
        &request.feature,
    )?;

    tracing::debug!(
        region = %region,
        feature = %request.feature,
        age = subject.age,
        allowed = result.decision.allowed,
        min_age = result.decision.min_age,
        "evaluated feature"
    );

    let report = CheckReport {
        schema: SCHEMA_CHECK_V1.to_string(),
        catalog_version: catalog.version().to_string(),
        evaluated_on: input.today,
        result,
        disclaimer: resolved.disclaimer.then(|| DISCLAIMER.to_string()),
    };

    Ok(CheckOutput {
        report,
        resolved_config: resolved,
    })
}

/// Map a decision to an exit code: 0 = allowed, 2 = restricted.
pub fn decision_exit_code(allowed: bool) -> i32 {
    if allowed { 0 } else { 2 }
}
