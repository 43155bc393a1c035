use config_tree_core::{ConfigValue, Mapping};
use thiserror::Error;

/// Top-level key holding the shared receiver settings template.
pub const RECEIVER_DEFAULTS_KEY: &str = "bigip_receiver_defaults";
/// Top-level key holding the named pipeline declarations.
pub const PIPELINES_KEY: &str = "pipelines";
/// Top-level key naming the fallback primary pipeline.
pub const PIPELINE_DEFAULT_KEY: &str = "pipeline_default";
/// Top-level key naming the fallback export pipeline.
pub const F5_PIPELINE_DEFAULT_KEY: &str = "f5_pipeline_default";
/// Top-level key gating the secondary export pass.
pub const F5_DATA_EXPORT_KEY: &str = "f5_data_export";

/// Errors for required sections missing from the defaults document.
#[derive(Debug, Error)]
pub enum DefaultsError {
    /// Defaults document lacks the `bigip_receiver_defaults` mapping.
    #[error("no bigip_receiver_defaults section found in default settings file")]
    MissingReceiverDefaults,
    /// Defaults document lacks the `pipelines` mapping.
    #[error("no pipelines section set in default settings file")]
    MissingPipelines,
    /// Defaults document lacks a usable `pipeline_default` name.
    #[error("no pipeline_default set in default settings file")]
    MissingPipelineDefault,
}

/// Typed view over the AST defaults document.
///
/// Thin borrow wrapper; all lookups happen lazily so a defaults file only
/// needs the sections the invoked command actually reads.
#[derive(Debug, Clone, Copy)]
pub struct Defaults<'a> {
    doc: &'a Mapping,
}

impl<'a> Defaults<'a> {
    pub fn new(doc: &'a Mapping) -> Self {
        Self { doc }
    }

    /// The shared receiver settings template.
    pub fn receiver_defaults(&self) -> Result<&'a Mapping, DefaultsError> {
        self.doc
            .get(RECEIVER_DEFAULTS_KEY)
            .and_then(ConfigValue::as_mapping)
            .ok_or(DefaultsError::MissingReceiverDefaults)
    }

    /// The declared pipelines, keyed by pipeline name.
    pub fn pipelines(&self) -> Result<&'a Mapping, DefaultsError> {
        self.doc
            .get(PIPELINES_KEY)
            .and_then(ConfigValue::as_mapping)
            .ok_or(DefaultsError::MissingPipelines)
    }

    /// Name of the fallback primary pipeline.
    pub fn pipeline_default(&self) -> Result<&'a str, DefaultsError> {
        match self.doc.get(PIPELINE_DEFAULT_KEY).and_then(ConfigValue::as_str) {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(DefaultsError::MissingPipelineDefault),
        }
    }

    /// Name of the fallback export pipeline, when one is declared.
    pub fn f5_pipeline_default(&self) -> Option<&'a str> {
        self.doc
            .get(F5_PIPELINE_DEFAULT_KEY)
            .and_then(ConfigValue::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Whether periodic export to F5 is enabled.
    pub fn f5_data_export(&self) -> bool {
        self.doc
            .get(F5_DATA_EXPORT_KEY)
            .and_then(ConfigValue::as_bool)
            .unwrap_or(false)
    }

    /// The export pipeline to use for the secondary pass, or `None` when the
    /// export pass is disabled (gate off or no fallback declared).
    pub fn export_pipeline(&self) -> Option<&'a str> {
        if !self.f5_data_export() {
            return None;
        }
        self.f5_pipeline_default()
    }
}
