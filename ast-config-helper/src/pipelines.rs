//! Pipeline assembly: associate each receiver with its primary pipeline and,
//! when F5 export is enabled, a secondary export pipeline.

use config_tree_core::{ConfigValue, Mapping};
use thiserror::Error;

use crate::defaults::{Defaults, DefaultsError};

/// Errors produced while assembling pipeline configurations.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// Required defaults sections missing.
    #[error(transparent)]
    Defaults(#[from] DefaultsError),
    /// A receiver resolved to a pipeline name that is not declared.
    #[error("pipeline '{pipeline}' on receiver '{receiver}' is not found in the pipelines section of {source_file}")]
    UnresolvedPipeline {
        pipeline: String,
        receiver: String,
        source_file: String,
    },
    /// The export fallback pipeline itself is not declared.
    #[error("f5_pipeline_default '{pipeline}' is not found in the pipelines section of {source_file}")]
    UnresolvedExportDefault { pipeline: String, source_file: String },
    /// A declared pipeline's body is a scalar, so no receivers can attach.
    #[error("pipeline '{pipeline}' in the pipelines section is not a settings mapping")]
    MalformedPipeline { pipeline: String },
}

/// Assemble the pipeline configuration document.
///
/// Two passes over the receivers: the primary pass resolves each receiver's
/// `pipeline` selector (falling back to `pipeline_default`), the export pass
/// repeats that with `f5_pipeline` against [`Defaults::export_pipeline`] and
/// only runs when export is enabled. Pipelines that end up with no receivers
/// are pruned from the result. `source` names the receiver input file for
/// error reporting.
///
/// The defaults document is never mutated; assembly works on a copy of its
/// pipelines map.
pub fn assemble(
    receivers: &Mapping,
    defaults: Defaults<'_>,
    source: &str,
) -> Result<Mapping, AssembleError> {
    let mut pipelines = defaults.pipelines()?.clone();
    let default_pipeline = defaults.pipeline_default()?;

    associate(&mut pipelines, receivers, "pipeline", default_pipeline, source)?;

    if let Some(export_pipeline) = defaults.export_pipeline() {
        if !pipelines.contains_key(export_pipeline) {
            return Err(AssembleError::UnresolvedExportDefault {
                pipeline: export_pipeline.to_string(),
                source_file: source.to_string(),
            });
        }
        associate(&mut pipelines, receivers, "f5_pipeline", export_pipeline, source)?;
    }

    pipelines.retain(|_, settings| has_receivers(settings));
    Ok(pipelines)
}

/// One association pass: append every receiver to the pipeline named by its
/// `selector` field, falling back to `fallback` when the field is absent.
/// Fails fast on the first selector that is not a string, resolved pipeline
/// that does not exist, or pipeline body a receiver cannot attach to.
fn associate(
    pipelines: &mut Mapping,
    receivers: &Mapping,
    selector: &str,
    fallback: &str,
    source: &str,
) -> Result<(), AssembleError> {
    for (receiver, settings) in receivers {
        let name = match settings.get(selector) {
            None => fallback,
            Some(ConfigValue::String(name)) => name.as_str(),
            // A written-out selector must name a pipeline; a null or other
            // non-string value is an unresolvable reference, not a request
            // for the fallback.
            Some(other) => {
                return Err(AssembleError::UnresolvedPipeline {
                    pipeline: selector_display(other),
                    receiver: receiver.clone(),
                    source_file: source.to_string(),
                });
            }
        };
        let Some(pipeline) = pipelines.get_mut(name) else {
            return Err(AssembleError::UnresolvedPipeline {
                pipeline: name.to_string(),
                receiver: receiver.clone(),
                source_file: source.to_string(),
            });
        };
        if !push_receiver(pipeline, receiver) {
            return Err(AssembleError::MalformedPipeline {
                pipeline: name.to_string(),
            });
        }
    }
    Ok(())
}

/// Render a non-string selector value for error reporting.
fn selector_display(value: &ConfigValue) -> String {
    match value {
        ConfigValue::Null => "null".to_string(),
        ConfigValue::Bool(flag) => flag.to_string(),
        ConfigValue::Int(number) => number.to_string(),
        ConfigValue::Float(number) => number.to_string(),
        ConfigValue::String(text) => text.clone(),
        ConfigValue::Sequence(_) | ConfigValue::Mapping(_) => "<non-scalar>".to_string(),
    }
}

/// Append a receiver to a pipeline's `receivers` list, creating the list when
/// absent and never appending the same receiver twice. Returns false when the
/// pipeline body is a scalar and the receiver cannot attach.
fn push_receiver(settings: &mut ConfigValue, receiver: &str) -> bool {
    // A pipeline declared with no settings body parses as null.
    if matches!(settings, ConfigValue::Null) {
        *settings = ConfigValue::mapping();
    }
    let Some(map) = settings.as_mapping_mut() else {
        return false;
    };

    let slot = map
        .entry("receivers".to_string())
        .or_insert_with(|| ConfigValue::Sequence(Vec::new()));
    if !matches!(slot, ConfigValue::Sequence(_)) {
        *slot = ConfigValue::Sequence(Vec::new());
    }
    if let ConfigValue::Sequence(items) = slot {
        if !items.iter().any(|item| item.as_str() == Some(receiver)) {
            items.push(ConfigValue::String(receiver.to_string()));
        }
    }
    true
}

fn has_receivers(settings: &ConfigValue) -> bool {
    settings
        .get("receivers")
        .and_then(ConfigValue::as_sequence)
        .is_some_and(|items| !items.is_empty())
}
