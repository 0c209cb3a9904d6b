use crate::model::{AgegateConfigV1, CONFIG_SCHEMA_V1};
use agegate_domain::{EvaluationPolicy, LeapDayPolicy};
use anyhow::Context;

/// Command-line values; each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub horizon_years: Option<u32>,
    pub leap_day: Option<String>,
    /// Set by `--no-upcoming`; there is no flag to force upcoming unlocks on.
    pub no_upcoming: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub policy: EvaluationPolicy,
    pub disclaimer: bool,
}

pub fn resolve_config(
    cfg: AgegateConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != CONFIG_SCHEMA_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {CONFIG_SCHEMA_V1})");
    }

    let mut policy = EvaluationPolicy::default();

    if let Some(years) = overrides.horizon_years.or(cfg.horizon_years) {
        policy.horizon_years = years;
    }

    if let Some(leap_day) = overrides.leap_day.as_deref().or(cfg.leap_day.as_deref()) {
        policy.leap_day = parse_leap_day(leap_day).context("invalid leap_day")?;
    }

    if let Some(include) = cfg.include_upcoming {
        policy.include_upcoming = include;
    }
    if overrides.no_upcoming {
        policy.include_upcoming = false;
    }

    Ok(ResolvedConfig {
        policy,
        disclaimer: cfg.disclaimer.unwrap_or(true),
    })
}

pub fn parse_leap_day(v: &str) -> anyhow::Result<LeapDayPolicy> {
    match v {
        "feb28" => Ok(LeapDayPolicy::Feb28),
        "mar1" => Ok(LeapDayPolicy::Mar1),
        other => anyhow::bail!("unknown leap_day: {other} (expected feb28|mar1)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_config_toml;

    #[test]
    fn empty_config_resolves_to_defaults() {
        let cfg = parse_config_toml("").unwrap();
        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.policy, EvaluationPolicy::default());
        assert!(resolved.disclaimer);
    }

    #[test]
    fn file_values_apply() {
        let cfg = parse_config_toml(
            r#"
schema = "agegate.config.v1"
horizon_years = 3
leap_day = "mar1"
include_upcoming = false
disclaimer = false
"#,
        )
        .unwrap();
        let resolved = resolve_config(cfg, Overrides::default()).unwrap();
        assert_eq!(resolved.policy.horizon_years, 3);
        assert_eq!(resolved.policy.leap_day, LeapDayPolicy::Mar1);
        assert!(!resolved.policy.include_upcoming);
        assert!(!resolved.disclaimer);
    }

    #[test]
    fn overrides_win_over_file() {
        let cfg = parse_config_toml("horizon_years = 3\nleap_day = \"mar1\"\n").unwrap();
        let overrides = Overrides {
            horizon_years: Some(8),
            leap_day: Some("feb28".to_string()),
            no_upcoming: true,
        };
        let resolved = resolve_config(cfg, overrides).unwrap();
        assert_eq!(resolved.policy.horizon_years, 8);
        assert_eq!(resolved.policy.leap_day, LeapDayPolicy::Feb28);
        assert!(!resolved.policy.include_upcoming);
    }

    #[test]
    fn invalid_leap_day_is_rejected() {
        let cfg = parse_config_toml("leap_day = \"feb29\"\n").unwrap();
        let err = resolve_config(cfg, Overrides::default()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown leap_day: feb29"));
    }

    #[test]
    fn unknown_schema_is_rejected() {
        let cfg = parse_config_toml("schema = \"agegate.config.v9\"\n").unwrap();
        assert!(resolve_config(cfg, Overrides::default()).is_err());
    }

    #[test]
    fn unknown_keys_fail_to_parse() {
        assert!(parse_config_toml("horizon = 3\n").is_err());
    }

    #[test]
    fn negative_horizon_fails_to_parse() {
        assert!(parse_config_toml("horizon_years = -1\n").is_err());
    }
}
