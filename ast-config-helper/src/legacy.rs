use config_tree_core::ConfigValue;
use thiserror::Error;
use url::Url;

/// Errors raised while checking the legacy big-ips document before conversion.
#[derive(Debug, Error)]
pub enum LegacyError {
    /// Legacy document held no records at all.
    #[error("legacy config is empty; nothing to convert")]
    Empty,
    /// Legacy document was not a list of device records.
    #[error("legacy config must be a JSON array of device records")]
    NotARecordList,
    /// A list entry was not a settings mapping.
    #[error("record {position}: expected a mapping of device settings")]
    NotAMapping { position: usize },
    /// Device endpoint missing or not a well-formed URL.
    #[error("record {position}: endpoint '{endpoint}' is not a valid URL")]
    InvalidEndpoint { position: usize, endpoint: String },
    /// Username missing or empty.
    #[error("record {position}: username must be set and non-empty")]
    MissingUsername { position: usize },
    /// Credential environment reference missing or empty.
    #[error("record {position}: password_env_ref must be set and non-empty")]
    MissingPasswordRef { position: usize },
    /// CA file required when TLS verification is not bypassed.
    #[error("record {position}: a ca_file is required unless tls_insecure_skip_verify is true")]
    MissingCaFile { position: usize },
}

/// View the legacy document as a non-empty ordered record list.
pub fn as_records(doc: &ConfigValue) -> Result<&[ConfigValue], LegacyError> {
    let ConfigValue::Sequence(records) = doc else {
        return Err(LegacyError::NotARecordList);
    };
    if records.is_empty() {
        return Err(LegacyError::Empty);
    }
    Ok(records)
}

/// Validate every record against the device preconditions.
///
/// Each record needs a well-formed endpoint URL, a non-empty username and
/// credential reference, and a CA file unless TLS verification is explicitly
/// bypassed. Positions in errors are 1-based to match generated receiver
/// identifiers.
pub fn validate_records(records: &[ConfigValue]) -> Result<(), LegacyError> {
    for (idx, record) in records.iter().enumerate() {
        let position = idx + 1;
        let Some(record) = record.as_mapping() else {
            return Err(LegacyError::NotAMapping { position });
        };

        let endpoint = record
            .get("endpoint")
            .and_then(ConfigValue::as_str)
            .unwrap_or_default();
        if Url::parse(endpoint).is_err() {
            return Err(LegacyError::InvalidEndpoint {
                position,
                endpoint: endpoint.to_string(),
            });
        }

        if non_empty_str(record.get("username")).is_none() {
            return Err(LegacyError::MissingUsername { position });
        }
        if non_empty_str(record.get("password_env_ref")).is_none() {
            return Err(LegacyError::MissingPasswordRef { position });
        }

        let skip_verify = record
            .get("tls_insecure_skip_verify")
            .and_then(ConfigValue::as_bool)
            .unwrap_or(false);
        if !skip_verify && non_empty_str(record.get("ca_file")).is_none() {
            return Err(LegacyError::MissingCaFile { position });
        }
    }
    Ok(())
}

fn non_empty_str(value: Option<&ConfigValue>) -> Option<&str> {
    value.and_then(ConfigValue::as_str).filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::{as_records, validate_records, LegacyError};
    use config_tree_core::{parse_json, ConfigValue};

    fn records(json: &str) -> ConfigValue {
        parse_json(json).expect("legacy json")
    }

    #[test]
    fn empty_list_is_rejected() {
        let doc = records("[]");
        assert!(matches!(as_records(&doc), Err(LegacyError::Empty)));
    }

    #[test]
    fn non_list_document_is_rejected() {
        let doc = records(r#"{"endpoint": "https://10.0.0.1"}"#);
        assert!(matches!(as_records(&doc), Err(LegacyError::NotARecordList)));
    }

    #[test]
    fn valid_record_passes() {
        let doc = records(
            r#"[{"endpoint": "https://10.0.0.1", "username": "admin",
                 "password_env_ref": "BIGIP_PASSWORD_1", "ca_file": "/etc/ssl/ca.crt"}]"#,
        );
        let records = as_records(&doc).expect("records");
        assert!(validate_records(records).is_ok());
    }

    #[test]
    fn bad_endpoint_names_the_record() {
        let doc = records(
            r#"[{"endpoint": "https://10.0.0.1", "username": "admin",
                 "password_env_ref": "A", "tls_insecure_skip_verify": true},
                {"endpoint": "not a url", "username": "admin",
                 "password_env_ref": "B", "tls_insecure_skip_verify": true}]"#,
        );
        let records = as_records(&doc).expect("records");
        assert!(matches!(
            validate_records(records),
            Err(LegacyError::InvalidEndpoint { position: 2, .. })
        ));
    }

    #[test]
    fn ca_file_required_unless_verification_bypassed() {
        let doc = records(
            r#"[{"endpoint": "https://10.0.0.1", "username": "admin", "password_env_ref": "A"}]"#,
        );
        let records = as_records(&doc).expect("records");
        assert!(matches!(
            validate_records(records),
            Err(LegacyError::MissingCaFile { position: 1 })
        ));

        let doc = self::records(
            r#"[{"endpoint": "https://10.0.0.1", "username": "admin",
                 "password_env_ref": "A", "tls_insecure_skip_verify": true}]"#,
        );
        let records = as_records(&doc).expect("records");
        assert!(validate_records(records).is_ok());
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let doc = records(
            r#"[{"endpoint": "https://10.0.0.1", "username": "",
                 "password_env_ref": "A", "tls_insecure_skip_verify": true}]"#,
        );
        let records = as_records(&doc).expect("records");
        assert!(matches!(
            validate_records(records),
            Err(LegacyError::MissingUsername { position: 1 })
        ));
    }
}
