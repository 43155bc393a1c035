use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping of setting name to value.
///
/// Insertion order is preserved so that generated documents keep the shape
/// of their sources and downstream consumers see receivers in declared order.
pub type Mapping = IndexMap<String, ConfigValue>;

/// A generic configuration value tree.
///
/// Closed set of variants covering everything a YAML or JSON configuration
/// document can hold. Variant order matters for untagged deserialization:
/// integers must be tried before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<ConfigValue>),
    Mapping(Mapping),
}

impl ConfigValue {
    /// Create an empty mapping value.
    pub fn mapping() -> Self {
        ConfigValue::Mapping(Mapping::new())
    }

    /// Return the contained mapping, if this is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable variant of [`as_mapping`](Self::as_mapping).
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            ConfigValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Return the contained string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(text) => Some(text),
            _ => None,
        }
    }

    /// Return the contained boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Return the contained integer, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(number) => Some(*number),
            _ => None,
        }
    }

    /// Return the contained sequence, if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[ConfigValue]> {
        match self {
            ConfigValue::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key, returning `None` unless this is a mapping holding it.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Walk a nested key path and return the terminal value if every
    /// intermediate step is a mapping holding the next segment.
    pub fn get_path<'a>(&'a self, path: &[&str]) -> Option<&'a ConfigValue> {
        let mut current = self;
        for segment in path {
            current = current.get(segment)?;
        }
        Some(current)
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, ConfigValue::Mapping(_))
    }
}

impl From<&str> for ConfigValue {
    fn from(text: &str) -> Self {
        ConfigValue::String(text.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(text: String) -> Self {
        ConfigValue::String(text)
    }
}

impl From<bool> for ConfigValue {
    fn from(flag: bool) -> Self {
        ConfigValue::Bool(flag)
    }
}

impl From<i64> for ConfigValue {
    fn from(number: i64) -> Self {
        ConfigValue::Int(number)
    }
}

impl From<Mapping> for ConfigValue {
    fn from(map: Mapping) -> Self {
        ConfigValue::Mapping(map)
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(items)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigValue, Mapping};

    #[test]
    fn get_path_walks_nested_mappings() {
        let mut tls = Mapping::new();
        tls.insert("ca_file".to_string(), ConfigValue::from("/etc/ssl/ca.crt"));
        let mut root = Mapping::new();
        root.insert("tls".to_string(), ConfigValue::Mapping(tls));
        let root = ConfigValue::Mapping(root);

        assert_eq!(
            root.get_path(&["tls", "ca_file"]).and_then(ConfigValue::as_str),
            Some("/etc/ssl/ca.crt")
        );
        assert_eq!(root.get_path(&["tls", "missing"]), None);
    }

    #[test]
    fn get_on_non_mapping_is_none() {
        assert_eq!(ConfigValue::from("scalar").get("key"), None);
    }
}
