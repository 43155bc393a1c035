//! Generic typed configuration-tree primitives used by higher-level tools.
//!
//! Documents are loaded from YAML or JSON into a closed [`ConfigValue`]
//! variant tree with ordered mappings, merged with [`deep_merge`], and
//! written back out as YAML.

pub mod merge;
pub mod parser;
pub mod value;
pub mod writer;

pub use merge::deep_merge;
pub use parser::{parse_json, parse_json_file, parse_yaml, parse_yaml_file, ParseError};
pub use value::{ConfigValue, Mapping};
pub use writer::{to_yaml_string, write_yaml_file, WriteError};
