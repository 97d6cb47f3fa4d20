//! # Raw Document — The Untyped Decoded Tree
//!
//! A [`RawDocument`] is the top-level YAML mapping of a context file exactly
//! as decoded. The only structural guarantee is that the root is a mapping;
//! everything below it may have any shape.
//!
//! `serde_yaml::Mapping` keeps keys in insertion order, so re-serializing a
//! raw document preserves the author's key order.

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Top-level mapping of a decoded context file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDocument(Mapping);

impl RawDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Mapping::new())
    }

    /// Wrap a decoded value, accepting only mappings.
    ///
    /// # Errors
    ///
    /// Returns the value unchanged if it is not a mapping.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Mapping(map) => Ok(Self(map)),
            other => Err(other),
        }
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether a top-level key is present, regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Look up a top-level key whose value is a mapping.
    pub fn section(&self, key: &str) -> Option<&Mapping> {
        self.get(key).map(untagged).and_then(Value::as_mapping)
    }

    /// Safely walk nested mappings.
    ///
    /// Returns `None` if any hop is missing, any intermediate value is not a
    /// mapping, or the final value is null.
    pub fn get_path(&self, keys: &[&str]) -> Option<&Value> {
        let (first, rest) = keys.split_first()?;
        let mut value = self.get(first)?;
        for key in rest {
            value = value.as_mapping()?.get(*key)?;
        }
        if value.is_null() {
            None
        } else {
            Some(value)
        }
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the document has no keys.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Top-level entries in insertion order.
    pub fn iter(&self) -> serde_yaml::mapping::Iter<'_> {
        self.0.iter()
    }

    /// Borrow the underlying mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    /// Consume into the underlying mapping.
    pub fn into_mapping(self) -> Mapping {
        self.0
    }

    /// Consume into a `serde_yaml::Value::Mapping`.
    pub fn into_value(self) -> Value {
        Value::Mapping(self.0)
    }
}

impl From<Mapping> for RawDocument {
    fn from(map: Mapping) -> Self {
        Self(map)
    }
}

impl AsRef<RawDocument> for RawDocument {
    fn as_ref(&self) -> &RawDocument {
        self
    }
}

/// Strip any YAML tags (`!custom value`) down to the tagged value.
pub fn untagged(value: &Value) -> &Value {
    match value {
        Value::Tagged(tagged) => untagged(&tagged.value),
        other => other,
    }
}

/// Truthiness of a decoded value, as used by the completeness score.
///
/// Null, `false`, zero, and empty strings, sequences, and mappings are falsy.
/// Tagged values are judged by their inner value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i != 0
            } else if let Some(u) = n.as_u64() {
                u != 0
            } else {
                n.as_f64().is_some_and(|f| f != 0.0)
            }
        }
        Value::String(s) => !s.is_empty(),
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        Value::Tagged(_) => is_truthy(untagged(value)),
    }
}

/// Human-readable YAML kind of a value, for error messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> RawDocument {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        RawDocument::from_value(value).unwrap()
    }

    #[test]
    fn test_from_value_rejects_non_mapping() {
        let value = Value::Sequence(vec![Value::from("a")]);
        let returned = RawDocument::from_value(value.clone()).unwrap_err();
        assert_eq!(returned, value);
    }

    #[test]
    fn test_get_path_nested() {
        let raw = doc("project:\n  name: demo\n  meta:\n    owner: ops\n");
        assert_eq!(
            raw.get_path(&["project", "name"]).and_then(Value::as_str),
            Some("demo")
        );
        assert_eq!(
            raw.get_path(&["project", "meta", "owner"]).and_then(Value::as_str),
            Some("ops")
        );
    }

    #[test]
    fn test_get_path_stops_at_non_mapping() {
        let raw = doc("project: demo\n");
        assert!(raw.get_path(&["project", "name"]).is_none());
        assert!(raw.get_path(&["missing"]).is_none());
        assert!(raw.get_path(&[]).is_none());
    }

    #[test]
    fn test_get_path_treats_null_as_absent() {
        let raw = doc("stack:\n  frontend: ~\n");
        assert!(raw.get_path(&["stack", "frontend"]).is_none());
        assert!(raw.contains_key("stack"));
    }

    #[test]
    fn test_iteration_preserves_insertion_order() {
        let raw = doc("zeta: 1\nalpha: 2\nmid: 3\n");
        let keys: Vec<&str> = raw.iter().filter_map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_truthiness() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&Value::Bool(false)));
        assert!(is_truthy(&Value::Bool(true)));
        assert!(!is_truthy(&Value::from(0)));
        assert!(is_truthy(&Value::from(7)));
        assert!(!is_truthy(&Value::from(0.0)));
        assert!(!is_truthy(&Value::from("")));
        assert!(is_truthy(&Value::from("x")));
        assert!(!is_truthy(&Value::Sequence(Vec::new())));
        assert!(!is_truthy(&Value::Mapping(Mapping::new())));
    }

    #[test]
    fn test_kind_name() {
        assert_eq!(kind_name(&Value::from("a")), "string");
        assert_eq!(kind_name(&Value::Sequence(Vec::new())), "sequence");
        assert_eq!(kind_name(&Value::Bool(true)), "boolean");
        assert_eq!(kind_name(&Value::from(3)), "number");
    }
}
