//! Use case orchestration for agegate.
//!
//! This crate provides the application layer: use cases that validate typed requests, resolve
//! configuration, and coordinate the catalog, domain, and render layers. It is intentionally thin
//! and delegates heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod batch;
mod catalog;
mod check;
mod config;
mod explain;
mod render;
mod request;

pub use batch::{BatchInput, BatchOutput, run_batch};
pub use catalog::{VerifyOutput, run_features, run_regions, run_requirements, run_verify_catalog};
pub use check::{CheckInput, CheckOutput, decision_exit_code, run_check};
pub use config::load_config;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use render::{
    render_batch, render_catalog_issues, render_check, render_features, render_regions,
    render_requirements, serialize_json,
};
pub use request::{BatchRequest, CheckRequest, RequestError, normalize_region, parse_date_of_birth};
