use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::value::ConfigValue;

/// Errors that can occur while writing a [`ConfigValue`] tree as YAML.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to serialize YAML.
    #[error("failed to write YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Failed to write output file.
    #[error("failed to write YAML file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a [`ConfigValue`] tree into a YAML string.
pub fn to_yaml_string(value: &ConfigValue) -> Result<String, WriteError> {
    Ok(serde_yaml::to_string(value)?)
}

/// Serialize a [`ConfigValue`] tree and write it to `path`.
pub fn write_yaml_file(value: &ConfigValue, path: &Path) -> Result<(), WriteError> {
    let text = to_yaml_string(value)?;
    fs::write(path, text)?;
    Ok(())
}
