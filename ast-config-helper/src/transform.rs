//! Legacy big-ips conversion into the per-receiver override format.
//!
//! Each legacy record becomes a `bigip/{n}` entry holding only the settings
//! that differ from the shared receiver defaults. A handful of legacy fields
//! change shape on the way; those are driven by [`FIELD_RULES`] so adding a
//! new special-cased field is a table entry, not new control flow.

use config_tree_core::{ConfigValue, Mapping};

/// Where a transformed legacy field lands in the new receiver shape.
#[derive(Debug, Clone, Copy)]
enum FieldTarget {
    /// Top-level key in the override mapping.
    Top(&'static str),
    /// Key nested under the `tls` sub-mapping.
    Tls(&'static str),
}

/// One legacy field with a shape change: where it goes and how its value
/// converts before the against-defaults comparison.
struct FieldRule {
    legacy_key: &'static str,
    target: FieldTarget,
    convert: fn(&ConfigValue) -> ConfigValue,
}

const FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        legacy_key: "collection_interval",
        target: FieldTarget::Top("collection_interval"),
        convert: interval_seconds,
    },
    FieldRule {
        legacy_key: "password_env_ref",
        target: FieldTarget::Top("password"),
        convert: env_secret,
    },
    FieldRule {
        legacy_key: "tls_insecure_skip_verify",
        target: FieldTarget::Tls("insecure_skip_verify"),
        convert: verbatim,
    },
    FieldRule {
        legacy_key: "ca_file",
        target: FieldTarget::Tls("ca_file"),
        convert: verbatim,
    },
];

/// Bare interval seconds become a duration string (`30` -> `"30s"`).
fn interval_seconds(value: &ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::Int(seconds) => ConfigValue::String(format!("{seconds}s")),
        other => other.clone(),
    }
}

/// Secret reference names become environment interpolations
/// (`secret_password` -> `"${env:secret_password}"`).
fn env_secret(value: &ConfigValue) -> ConfigValue {
    match value {
        ConfigValue::String(name) => ConfigValue::String(format!("${{env:{name}}}")),
        other => other.clone(),
    }
}

fn verbatim(value: &ConfigValue) -> ConfigValue {
    value.clone()
}

/// Receiver identifier for a 1-based legacy record position.
pub fn receiver_id(position: usize) -> String {
    format!("bigip/{position}")
}

/// Convert an ordered list of legacy records into the per-receiver override
/// mapping, keyed `bigip/1`, `bigip/2`, ... by record position.
pub fn convert_legacy(records: &[ConfigValue], receiver_defaults: &Mapping) -> Mapping {
    let mut overrides = Mapping::new();
    for (idx, record) in records.iter().enumerate() {
        let converted = record
            .as_mapping()
            .map(|record| convert_record(record, receiver_defaults))
            .unwrap_or_default();
        overrides.insert(receiver_id(idx + 1), ConfigValue::Mapping(converted));
    }
    overrides
}

/// Convert one legacy record, keeping only fields that differ from defaults.
///
/// Fields named in [`FIELD_RULES`] are converted first and compared against
/// the default at their target location. Every other field passes through
/// verbatim unless it equals the default for that key. Fields absent from
/// the record are never synthesized.
fn convert_record(record: &Mapping, receiver_defaults: &Mapping) -> Mapping {
    let mut out = Mapping::new();
    for (key, value) in record {
        if let Some(rule) = FIELD_RULES.iter().find(|rule| rule.legacy_key == key.as_str()) {
            let converted = (rule.convert)(value);
            if default_for_target(receiver_defaults, rule.target) != Some(&converted) {
                insert_at_target(&mut out, rule.target, converted);
            }
        } else if receiver_defaults.get(key) != Some(value) {
            out.insert(key.clone(), value.clone());
        }
    }
    out
}

fn default_for_target(receiver_defaults: &Mapping, target: FieldTarget) -> Option<&ConfigValue> {
    match target {
        FieldTarget::Top(key) => receiver_defaults.get(key),
        FieldTarget::Tls(key) => receiver_defaults.get("tls").and_then(|tls| tls.get(key)),
    }
}

fn insert_at_target(out: &mut Mapping, target: FieldTarget, value: ConfigValue) {
    match target {
        FieldTarget::Top(key) => {
            out.insert(key.to_string(), value);
        }
        FieldTarget::Tls(key) => {
            let tls = out
                .entry("tls".to_string())
                .or_insert_with(ConfigValue::mapping);
            if let Some(tls) = tls.as_mapping_mut() {
                tls.insert(key.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{convert_legacy, receiver_id};
    use config_tree_core::{parse_json, parse_yaml, ConfigValue, Mapping};
    use pretty_assertions::assert_eq;

    fn receiver_defaults() -> Mapping {
        parse_yaml(
            "collection_interval: 10s\npassword: ${env:default_password}\ntls:\n  insecure_skip_verify: false\n  ca_file: /path/to/ca.crt\n",
        )
        .expect("defaults yaml")
        .as_mapping()
        .expect("defaults mapping")
        .clone()
    }

    fn legacy(json: &str) -> Vec<ConfigValue> {
        parse_json(json)
            .expect("legacy json")
            .as_sequence()
            .expect("record list")
            .to_vec()
    }

    #[test]
    fn identifiers_are_one_indexed_by_position() {
        assert_eq!(receiver_id(1), "bigip/1");
        assert_eq!(receiver_id(12), "bigip/12");
    }

    #[test]
    fn only_differing_fields_survive_conversion() {
        let records = legacy(
            r#"[{"collection_interval": 10, "password_env_ref": "secret_password",
                 "tls_insecure_skip_verify": true}]"#,
        );

        let overrides = convert_legacy(&records, &receiver_defaults());
        let expected = parse_yaml(
            "bigip/1:\n  password: ${env:secret_password}\n  tls:\n    insecure_skip_verify: true\n",
        )
        .expect("expected yaml");

        assert_eq!(ConfigValue::Mapping(overrides), expected);
    }

    #[test]
    fn second_record_keeps_interval_and_ca_file() {
        let records = legacy(
            r#"[{"collection_interval": 10, "password_env_ref": "secret_password",
                 "tls_insecure_skip_verify": true},
                {"collection_interval": 15, "ca_file": "/path/to/new_ca.crt"}]"#,
        );

        let overrides = convert_legacy(&records, &receiver_defaults());
        let second = overrides.get("bigip/2").expect("bigip/2");

        assert_eq!(
            second.get("collection_interval").and_then(ConfigValue::as_str),
            Some("15s")
        );
        assert_eq!(
            second.get_path(&["tls", "ca_file"]).and_then(ConfigValue::as_str),
            Some("/path/to/new_ca.crt")
        );
        assert_eq!(second.get("password"), None);
    }

    #[test]
    fn record_matching_defaults_yields_empty_entry() {
        let records = legacy(
            r#"[{"collection_interval": 10, "password_env_ref": "default_password",
                 "tls_insecure_skip_verify": false, "ca_file": "/path/to/ca.crt"}]"#,
        );

        let overrides = convert_legacy(&records, &receiver_defaults());
        let entry = overrides.get("bigip/1").expect("bigip/1");
        assert_eq!(entry.as_mapping().map(Mapping::len), Some(0));
    }

    #[test]
    fn passthrough_field_equal_to_false_default_is_suppressed() {
        let mut defaults = receiver_defaults();
        defaults.insert("debug".to_string(), ConfigValue::Bool(false));

        let records = legacy(
            r#"[{"debug": false, "endpoint": "https://10.0.0.1",
                 "tls_insecure_skip_verify": true}]"#,
        );

        let overrides = convert_legacy(&records, &defaults);
        let entry = overrides.get("bigip/1").expect("bigip/1");
        assert_eq!(entry.get("debug"), None);
        assert_eq!(
            entry.get("endpoint").and_then(ConfigValue::as_str),
            Some("https://10.0.0.1")
        );
    }

    #[test]
    fn absent_fields_are_never_synthesized() {
        let records = legacy(r#"[{"endpoint": "https://10.0.0.1"}]"#);

        let overrides = convert_legacy(&records, &receiver_defaults());
        let entry = overrides.get("bigip/1").expect("bigip/1");

        assert_eq!(entry.get("collection_interval"), None);
        assert_eq!(entry.get("password"), None);
        assert_eq!(entry.get("tls"), None);
    }

    #[test]
    fn tls_fields_are_compared_independently() {
        let records = legacy(
            r#"[{"tls_insecure_skip_verify": false, "ca_file": "/path/to/other.crt"}]"#,
        );

        let overrides = convert_legacy(&records, &receiver_defaults());
        let entry = overrides.get("bigip/1").expect("bigip/1");

        // skip_verify matches the default and is dropped; ca_file differs.
        assert_eq!(entry.get_path(&["tls", "insecure_skip_verify"]), None);
        assert_eq!(
            entry.get_path(&["tls", "ca_file"]).and_then(ConfigValue::as_str),
            Some("/path/to/other.crt")
        );
    }
}
