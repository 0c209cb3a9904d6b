use agegate_types::{
    BatchReport, CatalogIssue, CheckReport, Decision, FeatureInfo, FeatureRequirements,
    Regulation, UpcomingUnlock, format_iso_date,
};

pub fn render_check_markdown(report: &CheckReport) -> String {
    let mut out = String::new();
    let r = &report.result;

    out.push_str("# Agegate check\n\n");
    let verdict = if r.decision.allowed {
        "ALLOWED"
    } else {
        "RESTRICTED"
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Feature: `{}` (minimum age {})\n- Subject: age {} (band {})\n",
        verdict, r.decision.feature, r.decision.min_age, r.age, r.age_band
    ));
    push_regulation(&mut out, &r.regulation);
    out.push_str(&format!(
        "- Evaluated on: {} (catalog {})\n\n",
        format_iso_date(report.evaluated_on),
        report.catalog_version
    ));

    out.push_str(&format!(
        "{} (`{}`)\n",
        r.decision.reason,
        r.decision.reason_code.as_str()
    ));
    if let (Some(years), Some(date)) = (
        r.decision.years_until_eligible,
        r.decision.next_eligible_date,
    ) {
        out.push_str(&format!(
            "\nEligible in {} on {}.\n",
            plural_years(years),
            format_iso_date(date)
        ));
    }

    push_upcoming(&mut out, r.upcoming_unlocks.as_deref());
    push_disclaimer(&mut out, report.disclaimer.as_deref());
    out
}

pub fn render_batch_markdown(report: &BatchReport) -> String {
    let mut out = String::new();
    let r = &report.result;

    out.push_str("# Agegate batch\n\n");
    out.push_str(&format!("- Subject: age {} (band {})\n", r.age, r.age_band));
    push_regulation(&mut out, &r.regulation);
    out.push_str(&format!(
        "- Allowed: {} / Restricted: {} / Checked: {}\n",
        r.summary.allowed_count, r.summary.restricted_count, r.summary.total_checked
    ));
    out.push_str(&format!(
        "- Evaluated on: {} (catalog {})\n\n",
        format_iso_date(report.evaluated_on),
        report.catalog_version
    ));

    if r.results.is_empty() {
        out.push_str("No features evaluated.\n");
    } else {
        out.push_str("## Decisions\n\n");
        for d in &r.results {
            push_decision(&mut out, d);
        }
    }

    if !r.skipped.is_empty() {
        out.push_str("\n## Skipped\n\n");
        for feature in &r.skipped {
            out.push_str(&format!("- `{}` (no rule defined)\n", feature));
        }
    }

    push_upcoming(&mut out, r.upcoming_unlocks.as_deref());
    push_disclaimer(&mut out, report.disclaimer.as_deref());
    out
}

pub fn render_regions_markdown(regions: &[Regulation]) -> String {
    let mut out = String::new();
    out.push_str("# Regions\n\n");
    out.push_str("| Region | Name | Law | General age |\n|---|---|---|---|\n");
    for r in regions {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            r.region,
            r.name.as_deref().unwrap_or(""),
            r.law,
            r.general_age.map(|a| a.to_string()).unwrap_or_default()
        ));
    }
    out
}

pub fn render_features_markdown(features: &[FeatureInfo]) -> String {
    let mut out = String::new();
    out.push_str("# Features\n\n");
    out.push_str("| Key | Name | Category | Description |\n|---|---|---|---|\n");
    for f in features {
        out.push_str(&format!(
            "| `{}` | {} | {} | {} |\n",
            f.key, f.display_name, f.category, f.description
        ));
    }
    out
}

pub fn render_requirements_markdown(req: &FeatureRequirements) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Requirements for `{}`\n\n", req.feature));
    out.push_str(&format!(
        "- Strictest: {}\n- Most lenient: {}\n- Most common: {}\n",
        req.strictest_age, req.most_lenient_age, req.most_common_age
    ));
    if let Some(age) = req.default_age {
        out.push_str(&format!("- Default (unlisted regions): {}\n", age));
    }
    out.push_str("\n| Region | Minimum age |\n|---|---|\n");
    for (region, age) in &req.by_region {
        out.push_str(&format!("| {} | {} |\n", region, age));
    }
    out
}

pub fn render_catalog_issues_markdown(version: &str, issues: &[CatalogIssue]) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Catalog {}\n\n", version));

    if issues.is_empty() {
        out.push_str("No issues.\n");
        return out;
    }

    for issue in issues {
        let mut scope = Vec::new();
        if let Some(region) = &issue.region {
            scope.push(region.as_str());
        }
        if let Some(feature) = &issue.feature {
            scope.push(feature.as_str());
        }
        if scope.is_empty() {
            out.push_str(&format!("- `{}`: {}\n", issue.code, issue.message));
        } else {
            out.push_str(&format!(
                "- `{}` ({}): {}\n",
                issue.code,
                scope.join("/"),
                issue.message
            ));
        }
    }
    out
}

fn push_regulation(out: &mut String, regulation: &Regulation) {
    match &regulation.name {
        Some(name) => out.push_str(&format!(
            "- Region: {} ({}, {})\n",
            regulation.region, name, regulation.law
        )),
        None => out.push_str(&format!("- Region: {} ({})\n", regulation.region, regulation.law)),
    }
}

fn push_decision(out: &mut String, d: &Decision) {
    if d.allowed {
        out.push_str(&format!("- [ALLOWED] `{}` (min {})\n", d.feature, d.min_age));
        return;
    }
    out.push_str(&format!("- [RESTRICTED] `{}` (min {})", d.feature, d.min_age));
    if let Some(date) = d.next_eligible_date {
        out.push_str(&format!(", eligible on {}", format_iso_date(date)));
    }
    out.push('\n');
}

fn push_upcoming(out: &mut String, unlocks: Option<&[UpcomingUnlock]>) {
    let Some(unlocks) = unlocks else {
        return;
    };
    out.push_str("\n## Upcoming unlocks\n\n");
    for u in unlocks {
        out.push_str(&format!(
            "- {} (`{}`) at {}: in {}, on {}\n",
            u.display_name,
            u.feature,
            u.min_age,
            plural_years(u.years_until_unlock),
            format_iso_date(u.unlock_date)
        ));
    }
}

fn push_disclaimer(out: &mut String, disclaimer: Option<&str>) {
    if let Some(text) = disclaimer {
        out.push_str(&format!("\n> {}\n", text));
    }
}

fn plural_years(n: u32) -> String {
    if n == 1 {
        "1 year".to_string()
    } else {
        format!("{} years", n)
    }
}
