//! The `batch` use case: evaluate many features for one subject.

use crate::config::load_config;
use crate::request::{BatchRequest, normalize_region, resolve_subject};
use agegate_settings::{Overrides, ResolvedConfig};
use agegate_types::{BatchReport, DISCLAIMER, SCHEMA_BATCH_V1};
use time::Date;

#[derive(Clone, Debug)]
pub struct BatchInput<'a> {
    pub request: BatchRequest,
    pub config_text: &'a str,
    pub overrides: Overrides,
    pub today: Date,
}

#[derive(Clone, Debug)]
pub struct BatchOutput {
    pub report: BatchReport,
    pub resolved_config: ResolvedConfig,
}

pub fn run_batch(input: BatchInput<'_>) -> anyhow::Result<BatchOutput> {
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

    let result = agegate_domain::evaluate_batch(
        catalog,
        &resolved.policy,
        &subject,
        &region,
        &request.features,
    )?;

    for feature in &result.skipped {
        tracing::warn!(feature = %feature, "skipping feature with no rule");
    }
    tracing::info!(
        region = %region,
        age = subject.age,
        allowed = result.summary.allowed_count,
        restricted = result.summary.restricted_count,
        total = result.summary.total_checked,
        "batch evaluated"
    );

    let report = BatchReport {
        schema: SCHEMA_BATCH_V1.to_string(),
        catalog_version: catalog.version().to_string(),
        evaluated_on: input.today,
        result,
        disclaimer: resolved.disclaimer.then(|| DISCLAIMER.to_string()),
    };

    Ok(BatchOutput {
        report,
        resolved_config: resolved,
    })
}
