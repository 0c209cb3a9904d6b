//! Stable DTOs and IDs used across the agegate workspace.
//!
//! This crate is intentionally boring:
//! - data types for emitted eligibility results and envelopes
//! - stable string IDs (reason codes, feature keys, schema IDs)
//! - ISO-8601 calendar date handling

#![forbid(unsafe_code)]

pub mod date;
pub mod ids;
pub mod result;

pub use date::{format_iso_date, parse_iso_date};
pub use result::{
    BatchReport, BatchResult, BatchSummary, CatalogIssue, CheckReport, Decision,
    EligibilityResult, FeatureInfo, FeatureRequirements, ReasonCode, Regulation, UpcomingUnlock,
    DISCLAIMER, SCHEMA_BATCH_V1, SCHEMA_CHECK_V1,
};
