//! Display-name selection and idShort checks for referables.

use serde_json::Value;

/// Best display name for a referable.
///
/// Preference order: the `displayName` entry for `language` with non-blank
/// text, then a non-blank `default`, then `idShort`, then `id`. An empty or
/// non-object referable falls straight through to `default` (or `""` when
/// that is blank too). Chosen values are returned as stored, without
/// trimming.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::name_to_display;
/// use serde_json::json;
///
/// let referable = json!({
///     "idShort": "Nameplate",
///     "displayName": [
///         {"language": "de", "text": "Typenschild"},
///         {"language": "en", "text": "Nameplate data"}
///     ]
/// });
/// assert_eq!(name_to_display(&referable, "de", ""), "Typenschild");
/// assert_eq!(name_to_display(&referable, "fr", ""), "Nameplate");
/// ```
#[must_use]
pub fn name_to_display(referable: &Value, language: &str, default: &str) -> String {
    if referable.as_object().is_some_and(|fields| !fields.is_empty()) {
        if let Some(entries) = referable.get("displayName").and_then(Value::as_array) {
            let found = entries.iter().find(|entry| {
                entry.get("language").and_then(Value::as_str) == Some(language)
                    && entry
                        .get("text")
                        .and_then(Value::as_str)
                        .is_some_and(|text| !text.trim().is_empty())
            });
            if let Some(text) = found.and_then(|entry| entry.get("text")).and_then(Value::as_str) {
                return text.to_string();
            }
        }
        if !default.trim().is_empty() {
            return default.to_string();
        }
        for field in ["idShort", "id"] {
            if let Some(value) = referable.get(field).and_then(Value::as_str) {
                if !value.trim().is_empty() {
                    return value.to_string();
                }
            }
        }
    }
    if default.trim().is_empty() {
        String::new()
    } else {
        default.to_string()
    }
}

/// Description text for `language`, or `default` (or `""`) when the
/// referable has none.
#[must_use]
pub fn description_to_display(referable: &Value, language: &str, default: &str) -> String {
    if let Some(entries) = referable.get("description").and_then(Value::as_array) {
        let found = entries.iter().find(|entry| {
            entry.get("language").and_then(Value::as_str) == Some(language)
                && entry
                    .get("text")
                    .and_then(Value::as_str)
                    .is_some_and(|text| !text.is_empty())
        });
        if let Some(text) = found.and_then(|entry| entry.get("text")).and_then(Value::as_str) {
            return text.to_string();
        }
    }
    if default.trim().is_empty() {
        String::new()
    } else {
        default.to_string()
    }
}

/// Whether a referable's `idShort` matches the queried one.
///
/// Comparison is case-insensitive unless `strict`. With `starts_with` the
/// query also matches templated idShorts (`Marking{00}`) and
/// counter-suffixed instances (`Marking__01__`); a longer idShort that
/// merely shares the prefix does not match. A blank query or a referable
/// without an `idShort` never matches.
#[must_use]
pub fn check_id_short(referable: &Value, id_short: &str, starts_with: bool, strict: bool) -> bool {
    if id_short.trim().is_empty() {
        return false;
    }
    let Some(candidate) = referable.get("idShort").and_then(Value::as_str) else {
        return false;
    };
    if candidate.trim().is_empty() {
        return false;
    }

    let (candidate, id_short) = if strict {
        (candidate.to_string(), id_short.to_string())
    } else {
        (candidate.to_lowercase(), id_short.to_lowercase())
    };

    if starts_with {
        candidate == id_short
            || candidate.starts_with(&format!("{id_short}{{"))
            || candidate.starts_with(&format!("{id_short}__"))
    } else {
        candidate == id_short
    }
}

/// The element's `idShort`, or `""` when absent.
#[must_use]
pub fn id_short_or_empty(element: &Value) -> &str {
    element.get("idShort").and_then(Value::as_str).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn display_name_prefers_requested_language() {
        let referable = json!({
            "idShort": "Plate",
            "displayName": [
                {"language": "de", "text": "Schild"},
                {"language": "en", "text": "Plate label"}
            ]
        });
        assert_eq!(name_to_display(&referable, "en", ""), "Plate label");
        assert_eq!(name_to_display(&referable, "de", ""), "Schild");
    }

    #[test]
    fn display_name_skips_blank_entries() {
        let referable = json!({
            "idShort": "Plate",
            "displayName": [
                {"language": "en", "text": "   "},
                {"language": "en", "text": "Second entry"}
            ]
        });
        assert_eq!(name_to_display(&referable, "en", ""), "Second entry");
    }

    #[test]
    fn display_name_fallback_chain() {
        let referable = json!({"idShort": "Plate", "id": "urn:plate"});
        assert_eq!(name_to_display(&referable, "en", "Default"), "Default");
        assert_eq!(name_to_display(&referable, "en", ""), "Plate");

        let id_only = json!({"id": "urn:plate", "idShort": "  "});
        assert_eq!(name_to_display(&id_only, "en", ""), "urn:plate");
    }

    #[test]
    fn display_name_of_empty_referable_is_default() {
        assert_eq!(name_to_display(&json!({}), "en", "Fallback"), "Fallback");
        assert_eq!(name_to_display(&json!({}), "en", "  "), "");
        assert_eq!(name_to_display(&Value::Null, "en", ""), "");
    }

    #[test]
    fn description_picks_language_or_default() {
        let referable = json!({
            "description": [
                {"language": "de", "text": "Beschreibung"},
                {"language": "en", "text": "Description"}
            ]
        });
        assert_eq!(description_to_display(&referable, "en", ""), "Description");
        assert_eq!(description_to_display(&referable, "fr", "none"), "none");
        assert_eq!(description_to_display(&json!({}), "en", ""), "");
    }

    #[test]
    fn id_short_check_is_case_insensitive_by_default() {
        let referable = json!({"idShort": "Nameplate"});
        assert!(check_id_short(&referable, "nameplate", false, false));
        assert!(check_id_short(&referable, "Nameplate", false, false));
        assert!(!check_id_short(&referable, "nameplate", false, true));
        assert!(check_id_short(&referable, "Nameplate", false, true));
    }

    #[test]
    fn id_short_check_starts_with_variants() {
        let templated = json!({"idShort": "Marking{00}"});
        assert!(check_id_short(&templated, "Marking", true, false));
        assert!(check_id_short(&templated, "marking", true, false));
        assert!(!check_id_short(&templated, "Marking", false, false));

        let suffixed = json!({"idShort": "Marking__01__"});
        assert!(check_id_short(&suffixed, "Marking", true, false));

        let longer = json!({"idShort": "MarkingExtra"});
        assert!(!check_id_short(&longer, "Marking", true, false));
    }

    #[test]
    fn id_short_check_rejects_blanks() {
        let referable = json!({"idShort": "Nameplate"});
        assert!(!check_id_short(&referable, "", false, false));
        assert!(!check_id_short(&referable, "   ", true, false));
        assert!(!check_id_short(&json!({}), "Nameplate", false, false));
        assert!(!check_id_short(&json!({"idShort": " "}), "Nameplate", false, false));
    }

    #[test]
    fn id_short_or_empty_tolerates_missing_field() {
        assert_eq!(id_short_or_empty(&json!({"idShort": "Temp"})), "Temp");
        assert_eq!(id_short_or_empty(&json!({})), "");
        assert_eq!(id_short_or_empty(&Value::Null), "");
    }
}
