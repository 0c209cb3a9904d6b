//! Rendering utilities for terminals and CI summaries (Markdown).

#![forbid(unsafe_code)]

mod markdown;

pub use markdown::{
    render_batch_markdown, render_catalog_issues_markdown, render_check_markdown,
    render_features_markdown, render_regions_markdown, render_requirements_markdown,
};
