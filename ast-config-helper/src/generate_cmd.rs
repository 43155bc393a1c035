use anyhow::{Context, Result};
use config_tree_core::{parse_yaml_file, to_yaml_string, write_yaml_file, ConfigValue, Mapping};

use ast_config_helper::defaults::Defaults;
use ast_config_helper::{generate, pipelines, report};

use crate::cli::GenerateArgs;
use crate::path_guard::{ensure_distinct_documents, DocumentPath};

/// Execute the generate workflow: load defaults and per-receiver inputs,
/// build the merged receiver document and the pipeline document, and write
/// both only once both succeeded (unless dry-run).
pub fn run_generate(args: GenerateArgs) -> Result<()> {
    ensure_distinct_documents(
        &[
            DocumentPath::new("receivers", &args.receiver_output_file),
            DocumentPath::new("pipelines", &args.pipelines_output_file),
        ],
        &[
            DocumentPath::new("default settings", &args.default_config_file),
            DocumentPath::new("receiver input", &args.receiver_input_file),
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
    let defaults = Defaults::new(defaults_map);

    let receivers_doc = parse_yaml_file(&args.receiver_input_file)
        .with_context(|| format!("failed to load {}", args.receiver_input_file.display()))?;
    let receivers = receivers_doc.as_mapping().with_context(|| {
        format!(
            "receiver input file {} is not a mapping",
            args.receiver_input_file.display()
        )
    })?;

    let receiver_defaults = defaults
        .receiver_defaults()
        .with_context(|| format!("in {}", args.default_config_file.display()))?;
    let receiver_configs = generate::generate_receiver_configs(receivers, receiver_defaults);

    if defaults.export_pipeline().is_none() {
        eprintln!(
            "warning: f5_data_export=true and f5_pipeline_default are required to export \
             metrics periodically to F5; skipping export pipeline assignments"
        );
    }
    let source = args.receiver_input_file.display().to_string();
    let pipeline_configs = pipelines::assemble(receivers, defaults, &source)
        .with_context(|| format!("in {}", args.default_config_file.display()))?;

    render_previews(&receiver_configs, &pipeline_configs)?;

    if args.dry_run {
        println!(
            "dry-run: skipped writing {} and {}",
            args.pipelines_output_file.display(),
            args.receiver_output_file.display()
        );
        return Ok(());
    }

    write_yaml_file(
        &ConfigValue::Mapping(pipeline_configs),
        &args.pipelines_output_file,
    )
    .with_context(|| format!("failed to write {}", args.pipelines_output_file.display()))?;
    write_yaml_file(
        &ConfigValue::Mapping(receiver_configs),
        &args.receiver_output_file,
    )
    .with_context(|| format!("failed to write {}", args.receiver_output_file.display()))?;
    println!(
        "wrote {} and {}",
        args.pipelines_output_file.display(),
        args.receiver_output_file.display()
    );
    Ok(())
}

fn render_previews(receiver_configs: &Mapping, pipeline_configs: &Mapping) -> Result<()> {
    let pipelines_yaml = to_yaml_string(&ConfigValue::Mapping(pipeline_configs.clone()))?;
    println!(
        "{}",
        report::render_document("Built pipelines output", &pipelines_yaml)
    );
    let receivers_yaml = to_yaml_string(&ConfigValue::Mapping(receiver_configs.clone()))?;
    println!(
        "{}",
        report::render_document("Built receivers output", &receivers_yaml)
    );
    println!(
        "{}",
        report::render_generate_summary(receiver_configs, pipeline_configs)
    );
    Ok(())
}
