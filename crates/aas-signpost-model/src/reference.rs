//! Reference and Key wire shapes.
//!
//! A Reference addresses a model element through an ordered chain of typed
//! Keys. Fields default to empty on deserialization so partially-specified
//! remote data still parses.

use serde::{Deserialize, Serialize};

/// One typed segment of a Reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Key {
    /// Element kind the key addresses, normally a key-type name such as
    /// `"Submodel"`; loose data may carry abbreviations or arbitrary tags
    #[serde(rename = "type", default)]
    pub key_type: String,
    /// Identifier or idShort the key points at
    #[serde(default)]
    pub value: String,
}

impl Key {
    /// Create a key from kind and value.
    #[must_use]
    pub fn new(key_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key_type: key_type.into(),
            value: value.into(),
        }
    }
}

/// An ordered chain of Keys addressing a model element.
///
/// Key order is significant for path semantics, but identifier extraction
/// searches by type regardless of position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// `"ExternalReference"` or `"ModelReference"`, when stated
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub reference_type: Option<String>,
    /// The key chain; may be empty in loose data
    #[serde(default)]
    pub keys: Vec<Key>,
}

impl Reference {
    /// Create a reference from a key chain.
    #[must_use]
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            reference_type: None,
            keys,
        }
    }

    /// Value of the first key, if any.
    ///
    /// Semantic IDs conventionally carry their identifier in the first key.
    #[must_use]
    pub fn first_value(&self) -> Option<&str> {
        self.keys.first().map(|key| key.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_metamodel_json() {
        let json = r#"{
            "type": "ExternalReference",
            "keys": [{"type": "GlobalReference", "value": "0173-1#01-AHF578#001"}]
        }"#;
        let reference: Reference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.reference_type.as_deref(), Some("ExternalReference"));
        assert_eq!(reference.keys[0].key_type, "GlobalReference");
        assert_eq!(reference.first_value(), Some("0173-1#01-AHF578#001"));
    }

    #[test]
    fn missing_fields_default_empty() {
        let reference: Reference = serde_json::from_str("{}").unwrap();
        assert!(reference.keys.is_empty());
        assert!(reference.reference_type.is_none());
        assert!(reference.first_value().is_none());

        let key: Key = serde_json::from_str(r#"{"type": "Submodel"}"#).unwrap();
        assert_eq!(key.key_type, "Submodel");
        assert_eq!(key.value, "");
    }

    #[test]
    fn serializes_type_field_name() {
        let reference = Reference::new(vec![Key::new("Submodel", "urn:sm:1")]);
        let json = serde_json::to_value(&reference).unwrap();
        assert_eq!(json["keys"][0]["type"], "Submodel");
        assert!(json.get("type").is_none(), "absent reference type is omitted");
    }
}
