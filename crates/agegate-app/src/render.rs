//! Render use cases: pretty JSON and Markdown from in-memory results.

use agegate_types::{
    BatchReport, CatalogIssue, CheckReport, FeatureInfo, FeatureRequirements, Regulation,
};
use anyhow::Context;
use serde::Serialize;

/// Pretty-printed JSON with a trailing newline.
pub fn serialize_json<T: Serialize>(value: &T) -> anyhow::Result<Vec<u8>> {
    let mut data = serde_json::to_vec_pretty(value).context("serialize json")?;
    data.push(b'\n');
    Ok(data)
}

pub fn render_check(report: &CheckReport) -> String {
    agegate_render::render_check_markdown(report)
}

pub fn render_batch(report: &BatchReport) -> String {
    agegate_render::render_batch_markdown(report)
}

pub fn render_regions(regions: &[Regulation]) -> String {
    agegate_render::render_regions_markdown(regions)
}

pub fn render_features(features: &[FeatureInfo]) -> String {
    agegate_render::render_features_markdown(features)
}

pub fn render_requirements(req: &FeatureRequirements) -> String {
    agegate_render::render_requirements_markdown(req)
}

pub fn render_catalog_issues(version: &str, issues: &[CatalogIssue]) -> String {
    agegate_render::render_catalog_issues_markdown(version, issues)
}
