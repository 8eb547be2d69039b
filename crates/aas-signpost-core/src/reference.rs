//! Typed identifier extraction from References.

use aas_signpost_model::{KeyType, Reference};

/// Extract the value of the first key of the given type from a reference.
///
/// `key_type` is trimmed and must name a known key type (metamodel name or
/// abbreviation, see [`KeyType::resolve`]); the key search itself compares
/// each key's raw `type` string against the trimmed input. Returns `""`
/// when the reference has no keys, the type is blank or unknown, no key
/// matches, or the first matching key's value is blank — later keys of the
/// same type are never consulted.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::extract_id;
/// use aas_signpost_model::{Key, Reference};
///
/// let reference = Reference::new(vec![Key::new("Submodel", " urn:example:sm:1 ")]);
/// assert_eq!(extract_id(&reference, "Submodel"), "urn:example:sm:1");
/// assert_eq!(extract_id(&reference, "Property"), "");
/// assert_eq!(extract_id(&reference, "NotAKeyType"), "");
/// ```
#[must_use]
pub fn extract_id(reference: &Reference, key_type: &str) -> String {
    let key_type = key_type.trim();
    if reference.keys.is_empty() || key_type.is_empty() {
        return String::new();
    }
    if KeyType::resolve(key_type).is_none() {
        return String::new();
    }

    match reference.keys.iter().find(|key| key.key_type == key_type) {
        Some(key) if !key.value.trim().is_empty() => key.value.trim().to_string(),
        _ => String::new(),
    }
}
