//! Merged receiver configuration generation.

use config_tree_core::{deep_merge, ConfigValue, Mapping};

/// Routing selector keys; metadata for pipeline assembly, never part of the
/// merged receiver settings.
const ROUTING_KEYS: &[&str] = &["pipeline", "f5_pipeline"];

/// Produce one fully-populated config per receiver by merging its declared
/// settings onto the shared receiver defaults (receiver values win).
pub fn generate_receiver_configs(receivers: &Mapping, receiver_defaults: &Mapping) -> Mapping {
    let mut merged = Mapping::new();
    for (id, settings) in receivers {
        let mut overrides = settings.as_mapping().cloned().unwrap_or_default();
        for key in ROUTING_KEYS {
            overrides.shift_remove(*key);
        }
        merged.insert(
            id.clone(),
            deep_merge(
                ConfigValue::Mapping(receiver_defaults.clone()),
                ConfigValue::Mapping(overrides),
            ),
        );
    }
    merged
}
