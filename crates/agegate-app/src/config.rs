use agegate_settings::{AgegateConfigV1, Overrides, ResolvedConfig};
use anyhow::Context;

/// Parse config text (empty means defaults) and apply overrides.
pub fn load_config(config_text: &str, overrides: Overrides) -> anyhow::Result<ResolvedConfig> {
    let cfg = if config_text.trim().is_empty() {
        AgegateConfigV1::default()
    } else {
        agegate_settings::parse_config_toml(config_text).context("parse config")?
    };

    let resolved = agegate_settings::resolve_config(cfg, overrides).context("resolve config")?;
    tracing::debug!(
        horizon_years = resolved.policy.horizon_years,
        leap_day = ?resolved.policy.leap_day,
        include_upcoming = resolved.policy.include_upcoming,
        "resolved evaluation policy"
    );
    Ok(resolved)
}
