//! Developer tasks (schema generation, catalog and output conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use agegate_app::{BatchInput, BatchRequest, CheckInput, CheckRequest, run_batch, run_check};
use agegate_settings::Overrides;
use anyhow::{Context, bail};
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};
use time::macros::date;

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| manifest_dir.to_path_buf())
}

/// Get the schemas directory path.
fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_check_schema() -> schemars::Schema {
    schema_for!(agegate_types::CheckReport)
}

fn generate_batch_schema() -> schemars::Schema {
    schema_for!(agegate_types::BatchReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(agegate_settings::AgegateConfigV1)
}

/// List of schemas to generate.
fn schema_specs() -> Vec<SchemaSpec> {
    vec![
        SchemaSpec {
            filename: "agegate.check.v1.json",
            generate: generate_check_schema,
        },
        SchemaSpec {
            filename: "agegate.batch.v1.json",
            generate: generate_batch_schema,
        },
        SchemaSpec {
            filename: "agegate.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

/// Emit schemas to the schemas/ directory.
fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Validate that schemas in the repo match what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for spec in schema_specs() {
        let path = dir.join(spec.filename);
        if !path.exists() {
            missing.push(spec.filename);
            continue;
        }

        let expected = serialize_schema(&(spec.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(spec.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }

    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {}", name);
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {}", name);
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

/// Run the built-in catalog consistency checks.
fn verify_catalog() -> anyhow::Result<()> {
    let catalog = agegate_catalog::builtin();
    let issues = agegate_catalog::verify(catalog);

    if issues.is_empty() {
        println!(
            "✓ catalog {} is consistent ({} regions, {} features)",
            catalog.version(),
            catalog.all_regions().len(),
            catalog.all_features().len()
        );
        return Ok(());
    }

    for issue in &issues {
        eprintln!("  - [{}] {}", issue.code, issue.message);
    }
    bail!("Catalog verification failed with {} issues", issues.len())
}

/// Evaluate every region/feature pair at a spread of ages and validate the envelopes against
/// the generated schemas.
fn conform() -> anyhow::Result<()> {
    let check_schema = serde_json::to_value(generate_check_schema())?;
    let batch_schema = serde_json::to_value(generate_batch_schema())?;
    let check_validator = jsonschema::validator_for(&check_schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile check schema: {}", e))?;
    let batch_validator = jsonschema::validator_for(&batch_schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile batch schema: {}", e))?;

    let catalog = agegate_catalog::builtin();
    let features: Vec<String> = catalog
        .all_features()
        .iter()
        .map(|f| f.key.clone())
        .collect();
    let mut regions: Vec<String> = catalog.all_regions().into_iter().map(String::from).collect();
    regions.push("ZZ".to_string());

    let today = date!(2024 - 06 - 15);
    let mut checked = 0usize;
    let mut errors = Vec::new();

    for region in &regions {
        for age in [0u32, 5, 9, 12, 13, 16, 18, 30] {
            for feature in &features {
                let output = run_check(CheckInput {
                    request: CheckRequest {
                        date_of_birth: None,
                        age: Some(age),
                        region: region.clone(),
                        feature: feature.clone(),
                    },
                    config_text: "",
                    overrides: Overrides::default(),
                    today,
                })?;
                let value = serde_json::to_value(&output.report)?;
                for err in check_validator.iter_errors(&value) {
                    errors.push(format!("check {region}/{feature}/{age}: {err}"));
                }
                checked += 1;
            }

            let output = run_batch(BatchInput {
                request: BatchRequest {
                    date_of_birth: None,
                    age: Some(age),
                    region: region.clone(),
                    features: features.clone(),
                },
                config_text: "",
                overrides: Overrides::default(),
                today,
            })?;
            let value = serde_json::to_value(&output.report)?;
            for err in batch_validator.iter_errors(&value) {
                errors.push(format!("batch {region}/{age}: {err}"));
            }
            checked += 1;
        }
    }

    if errors.is_empty() {
        println!("✓ {} envelopes validate against their schemas", checked);
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Conformance failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas  Check if schemas/ matches generated output (for CI)");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  verify-catalog    Cross-check rule tables against region and feature metadata");
    eprintln!("  conform           Validate evaluated envelopes against the generated schemas");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "verify-catalog" => verify_catalog(),
        "conform" => conform(),
        "print-schema-ids" => {
            for spec in schema_specs() {
                println!("{}", spec.filename.trim_end_matches(".json"));
            }
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
