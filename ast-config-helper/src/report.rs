use colored::Colorize;

use config_tree_core::Mapping;

/// Render a titled YAML document preview for terminal output.
pub fn render_document(title: &str, yaml: &str) -> String {
    format!("{}\n\n{}", title.cyan().bold(), yaml)
}

/// Render the one-line conversion summary.
pub fn render_convert_summary(overrides: &Mapping) -> String {
    let empty = overrides
        .values()
        .filter(|entry| entry.as_mapping().is_some_and(Mapping::is_empty))
        .count();
    let line = if empty > 0 {
        format!(
            "converted {} legacy record{} ({} matching defaults exactly)",
            overrides.len(),
            plural(overrides.len()),
            empty
        )
    } else {
        format!(
            "converted {} legacy record{}",
            overrides.len(),
            plural(overrides.len())
        )
    };
    line.green().to_string()
}

/// Render the one-line generation summary.
pub fn render_generate_summary(receivers: &Mapping, pipelines: &Mapping) -> String {
    format!(
        "generated {} receiver config{} across {} pipeline{}",
        receivers.len(),
        plural(receivers.len()),
        pipelines.len(),
        plural(pipelines.len())
    )
    .green()
    .to_string()
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
