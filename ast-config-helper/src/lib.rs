//! Application Study Tool collector configuration helper.
//!
//! Transforms declarative BIG-IP monitoring configuration for the AST OTel
//! collector: converts the legacy flat `big-ips.json` device list into the
//! per-receiver override format, and generates the collector's receiver and
//! pipeline documents from a defaults file plus per-receiver inputs.
//!
//! # Modules
//!
//! - [`defaults`] — typed accessors over the AST defaults document
//! - [`legacy`] — legacy device record validation (preconditions)
//! - [`transform`] — legacy-to-new conversion with minimal-diff overrides
//! - [`generate`] — default-aware merged receiver configuration generation
//! - [`pipelines`] — receiver-to-pipeline association and validation
//! - [`report`] — terminal-friendly preview and summary rendering
//!
//! All transformations are pure and in-memory; file loading, writing, and
//! the CLI surface live in the binary.
//!
//! # Built on config-tree-core
//!
//! Documents are handled as `config_tree_core::ConfigValue` trees; the deep
//! merge precedence rules live there.

pub mod defaults;
pub mod generate;
pub mod legacy;
pub mod pipelines;
pub mod report;
pub mod transform;
