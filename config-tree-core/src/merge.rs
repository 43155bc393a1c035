use indexmap::map::Entry;

use crate::value::ConfigValue;

/// Recursively merge `overlay` onto `base`, returning the merged tree.
///
/// For every key of the overlay mapping: when both sides hold mappings the
/// merge recurses, otherwise the overlay value replaces the base value.
/// Scalars and sequences are replaced wholesale, never combined element-wise.
/// Keys unique to either side are kept. When either operand is not a mapping
/// the overlay wins outright.
///
/// Both operands are consumed; callers keep a clone of anything they still
/// need, so no caller-visible state is ever mutated.
pub fn deep_merge(base: ConfigValue, overlay: ConfigValue) -> ConfigValue {
    match (base, overlay) {
        (ConfigValue::Mapping(mut base), ConfigValue::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.entry(key) {
                    Entry::Occupied(mut slot) => {
                        let existing = slot.insert(ConfigValue::Null);
                        let merged = deep_merge(existing, value);
                        slot.insert(merged);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
            ConfigValue::Mapping(base)
        }
        // Type mismatch or scalar operands: the overlay replaces the base.
        (_, overlay) => overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::deep_merge;
    use crate::value::{ConfigValue, Mapping};

    fn mapping(entries: &[(&str, ConfigValue)]) -> ConfigValue {
        let mut map = Mapping::new();
        for (key, value) in entries {
            map.insert((*key).to_string(), value.clone());
        }
        ConfigValue::Mapping(map)
    }

    #[test]
    fn overlay_wins_on_shared_scalar_key() {
        let base = mapping(&[("interval", ConfigValue::from("10s"))]);
        let overlay = mapping(&[("interval", ConfigValue::from("30s"))]);

        let merged = deep_merge(base, overlay);
        assert_eq!(
            merged.get("interval").and_then(ConfigValue::as_str),
            Some("30s")
        );
    }

    #[test]
    fn existing_keys_keep_their_position() {
        let base = mapping(&[
            ("first", ConfigValue::from(1)),
            ("second", ConfigValue::from(2)),
        ]);
        let overlay = mapping(&[("first", ConfigValue::from(10))]);

        let merged = deep_merge(base, overlay);
        let keys: Vec<&str> = merged
            .as_mapping()
            .expect("merged mapping")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["first", "second"]);
    }

    #[test]
    fn non_mapping_base_is_replaced() {
        let merged = deep_merge(
            ConfigValue::from("scalar"),
            mapping(&[("key", ConfigValue::from(true))]),
        );
        assert!(merged.is_mapping());
    }
}
