use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::value::ConfigValue;

/// Errors that can occur while parsing a document into a [`ConfigValue`] tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was not valid YAML.
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Input was not valid JSON.
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to read input file.
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse YAML text into a [`ConfigValue`] tree.
pub fn parse_yaml(text: &str) -> Result<ConfigValue, ParseError> {
    Ok(serde_yaml::from_str(text)?)
}

/// Read and parse a YAML file into a [`ConfigValue`] tree.
pub fn parse_yaml_file(path: &Path) -> Result<ConfigValue, ParseError> {
    let raw = fs::read_to_string(path)?;
    parse_yaml(&raw)
}

/// Parse JSON text into a [`ConfigValue`] tree.
pub fn parse_json(text: &str) -> Result<ConfigValue, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Read and parse a JSON file into a [`ConfigValue`] tree.
pub fn parse_json_file(path: &Path) -> Result<ConfigValue, ParseError> {
    let raw = fs::read_to_string(path)?;
    parse_json(&raw)
}
