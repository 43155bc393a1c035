use anyhow::{Context, Result};
use config_tree_core::{parse_json_file, parse_yaml_file, to_yaml_string, write_yaml_file, ConfigValue};

use ast_config_helper::defaults::Defaults;
use ast_config_helper::{legacy, report, transform};

use crate::cli::ConvertLegacyArgs;
use crate::path_guard::{ensure_distinct_documents, DocumentPath};

/// Execute the convert-legacy workflow: load defaults and the legacy device
/// list, validate the records, convert to minimal per-receiver overrides, and
/// write the receiver input document (unless dry-run).
pub fn run_convert_legacy(args: ConvertLegacyArgs) -> Result<()> {
    ensure_distinct_documents(
        &[DocumentPath::new("converted receiver", &args.output_file)],
        &[
            DocumentPath::new("legacy config", &args.legacy_config_file),
            DocumentPath::new("default settings", &args.default_config_file),
        ],
    )?;

    let defaults_doc = parse_yaml_file(&args.default_config_file)
        .with_context(|| format!("failed to load {}", args.default_config_file.display()))?;
    let defaults_map = defaults_doc.as_mapping().with_context(|| {
        format!(
            "default settings file {} is not a mapping",
            args.default_config_file.display()
        )
    })?;
    let receiver_defaults = Defaults::new(defaults_map)
        .receiver_defaults()
        .with_context(|| format!("in {}", args.default_config_file.display()))?;

    let legacy_doc = parse_json_file(&args.legacy_config_file)
        .with_context(|| format!("failed to load {}", args.legacy_config_file.display()))?;
    let records = legacy::as_records(&legacy_doc)
        .with_context(|| format!("in {}", args.legacy_config_file.display()))?;
    legacy::validate_records(records)
        .with_context(|| format!("in {}", args.legacy_config_file.display()))?;

    let overrides = transform::convert_legacy(records, receiver_defaults);
    let document = ConfigValue::Mapping(overrides);

    let yaml = to_yaml_string(&document)?;
    println!(
        "{}",
        report::render_document("Converted bigip_receivers output", &yaml)
    );
    if let Some(overrides) = document.as_mapping() {
        println!("{}", report::render_convert_summary(overrides));
    }

    if args.dry_run {
        println!("dry-run: skipped writing {}", args.output_file.display());
        return Ok(());
    }

    write_yaml_file(&document, &args.output_file)
        .with_context(|| format!("failed to write {}", args.output_file.display()))?;
    println!("wrote {}", args.output_file.display());
    Ok(())
}
