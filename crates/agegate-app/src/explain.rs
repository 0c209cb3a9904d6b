//! The `explain` use case: describe a region code or feature key.

use agegate_types::{FeatureInfo, FeatureRequirements, Regulation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// The identifier is a region code with a rule table.
    Region(Regulation),
    /// The identifier is a known feature key.
    Feature {
        info: FeatureInfo,
        requirements: FeatureRequirements,
    },
    /// Unknown identifier; includes available region codes and feature keys.
    NotFound {
        identifier: String,
        available_regions: Vec<String>,
        available_features: Vec<String>,
    },
}

/// Look up a region code (case-insensitive) or feature key.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    let catalog = agegate_catalog::builtin();
    let trimmed = identifier.trim();

    if let Some(info) = catalog.feature(trimmed)
        && let Ok(requirements) = agegate_catalog::requirements(catalog, trimmed)
    {
        return ExplainOutput::Feature {
            info: info.clone(),
            requirements,
        };
    }

    let region = crate::request::normalize_region(trimmed);
    if catalog.region_rules(&region).is_some() {
        return ExplainOutput::Region(catalog.regulation(&region));
    }

    ExplainOutput::NotFound {
        identifier: identifier.to_string(),
        available_regions: catalog.all_regions().into_iter().map(String::from).collect(),
        available_features: catalog
            .all_features()
            .iter()
            .map(|f| f.key.clone())
            .collect(),
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(output: &ExplainOutput) -> String {
    match output {
        ExplainOutput::Region(r) => format_region(r),
        ExplainOutput::Feature { info, requirements } => format_feature(info, requirements),
        ExplainOutput::NotFound {
            identifier,
            available_regions,
            available_features,
        } => format_not_found(identifier, available_regions, available_features),
    }
}

fn format_region(r: &Regulation) -> String {
    let mut out = String::new();

    let title = match &r.name {
        Some(name) => format!("{} ({})", name, r.region),
        None => r.region.clone(),
    };
    push_title(&mut out, &title);

    out.push_str(&format!("Law: {}\n", r.law));
    if let Some(age) = r.general_age {
        out.push_str(&format!("General age: {}\n", age));
    }
    if let Some(description) = &r.description {
        out.push('\n');
        out.push_str(description);
        out.push('\n');
    }
    if !r.exceptions.is_empty() {
        out.push_str("\nExceptions\n----------\n");
        for (feature, age) in &r.exceptions {
            out.push_str(&format!("  - {}: {}\n", feature, age));
        }
    }

    out
}

fn format_feature(info: &FeatureInfo, req: &FeatureRequirements) -> String {
    let mut out = String::new();

    push_title(&mut out, &format!("{} ({})", info.display_name, info.key));
    out.push_str(&format!("Category: {}\n\n", info.category));
    out.push_str(&info.description);
    out.push_str("\n\n");

    out.push_str("Minimum ages\n------------\n");
    for (region, age) in &req.by_region {
        out.push_str(&format!("  - {}: {}\n", region, age));
    }
    if let Some(age) = req.default_age {
        out.push_str(&format!("  - (other regions): {}\n", age));
    }
    out.push_str(&format!(
        "\nStrictest {}, most lenient {}, most common {}.\n",
        req.strictest_age, req.most_lenient_age, req.most_common_age
    ));

    out
}

fn push_title(out: &mut String, title: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.chars().count()));
    out.push_str("\n\n");
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(identifier: &str, regions: &[String], features: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown region or feature: {}\n\n", identifier));
    out.push_str("Available regions:\n");
    for region in regions {
        out.push_str(&format!("  - {}\n", region));
    }
    out.push_str("\nAvailable features:\n");
    for feature in features {
        out.push_str(&format!("  - {}\n", feature));
    }

    out
}
