//! Config parsing and evaluation policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{AgegateConfigV1, CONFIG_SCHEMA_V1};
pub use resolve::{Overrides, ResolvedConfig, parse_leap_day};

/// Parse `agegate.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AgegateConfigV1> {
    let cfg: AgegateConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective policy used by the engine (config file + overrides).
pub fn resolve_config(
    cfg: AgegateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
