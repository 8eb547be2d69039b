//! Read accessors over loosely-typed element trees.
//!
//! Submodels and their element trees arrive as arbitrary `serde_json::Value`
//! from heterogeneous servers. These helpers pull out the fields the
//! resolution rules need and degrade to `None`/empty on anything missing or
//! mistyped.

use serde_json::Value;

/// Model types whose values render as plain data (the IDTA data element
/// kinds).
pub const DATA_ELEMENT_MODEL_TYPES: [&str; 6] = [
    "Property",
    "MultiLanguageProperty",
    "Range",
    "Blob",
    "File",
    "ReferenceElement",
];

/// `modelType` of an element, when present and a string.
#[must_use]
pub fn model_type(element: &Value) -> Option<&str> {
    element.get("modelType").and_then(Value::as_str)
}

/// `idShort` of an element, when present and a string.
#[must_use]
pub fn id_short(element: &Value) -> Option<&str> {
    element.get("idShort").and_then(Value::as_str)
}

/// `id` of an identifiable, when present and a string.
#[must_use]
pub fn id(element: &Value) -> Option<&str> {
    element.get("id").and_then(Value::as_str)
}

/// Value of the first key of the element's `semanticId`, when present.
#[must_use]
pub fn semantic_id_value(element: &Value) -> Option<&str> {
    element
        .get("semanticId")?
        .get("keys")?
        .get(0)?
        .get("value")?
        .as_str()
}

/// All key values of the element's `semanticId`, in key order.
///
/// Keys without a string `value` are skipped.
#[must_use]
pub fn semantic_id_key_values(element: &Value) -> Vec<&str> {
    element
        .get("semanticId")
        .and_then(|semantic_id| semantic_id.get("keys"))
        .and_then(Value::as_array)
        .map(|keys| {
            keys.iter()
                .filter_map(|key| key.get("value").and_then(Value::as_str))
                .collect()
        })
        .unwrap_or_default()
}

/// Whether a model type names a data element kind.
#[must_use]
pub fn is_data_element(model_type: &str) -> bool {
    DATA_ELEMENT_MODEL_TYPES.contains(&model_type)
}
