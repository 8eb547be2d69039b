//! Endpoint selection from registry descriptors.
//!
//! Registries tag each endpoint with an interface short name such as
//! `AAS-REGISTRY-3.0` or `SUBMODEL-REPOSITORY-3.0`. Some deployments only
//! register repository-specific tags while clients ask for the generic
//! `AAS-3.x`/`SUBMODEL-3.x` flavor; the resolver closes that gap with the
//! standardized repository fallback, so callers need not know which flavor
//! a given registry used.

use aas_signpost_model::{Descriptor, Endpoint, EndpointSource};
use tracing::debug;

/// The eleven standardized interface short-name families.
pub const INTERFACE_FAMILIES: [&str; 11] = [
    "AAS",
    "SUBMODEL",
    "SERIALIZE",
    "DESCRIPTION",
    "AASX-FILE",
    "AAS-REGISTRY",
    "SUBMODEL-REGISTRY",
    "AAS-REPOSITORY",
    "SUBMODEL-REPOSITORY",
    "CD-REPOSITORY",
    "AAS-DISCOVERY",
];

/// Pick the href for the requested interface from a descriptor or model.
///
/// Repository models short-circuit to their resolved `path`; no endpoint
/// lookup is needed for them. For descriptors the requested name is
/// trimmed, uppercased, validated against the standardized families, and
/// matched exactly against the registered endpoints; a generic
/// `AAS-3.<minor>`/`SUBMODEL-3.<minor>` request without an exact match
/// retries the corresponding repository tag. Returns `""` when validation
/// fails, nothing matches, or the matched endpoint carries no href — an
/// exact match with a blank href does not fall back.
///
/// # Examples
///
/// ```
/// use aas_signpost_core::extract_endpoint_href;
/// use aas_signpost_model::EndpointSource;
/// use serde_json::json;
///
/// let descriptor = EndpointSource::from_value(&json!({
///     "endpoints": [{
///         "interface": "AAS-REPOSITORY-3.0",
///         "protocolInformation": {"href": "http://example.com/shells/x"}
///     }]
/// }))
/// .unwrap();
///
/// // The generic request falls back to the repository tag
/// assert_eq!(
///     extract_endpoint_href(&descriptor, "AAS-3.0"),
///     "http://example.com/shells/x"
/// );
/// ```
#[must_use]
pub fn extract_endpoint_href(source: &EndpointSource, interface_short_name: &str) -> String {
    match source {
        EndpointSource::Model(model) => model.path.clone(),
        EndpointSource::Descriptor(descriptor) => descriptor_href(descriptor, interface_short_name),
    }
}

fn descriptor_href(descriptor: &Descriptor, interface_short_name: &str) -> String {
    let requested = interface_short_name.trim().to_uppercase();
    if requested.is_empty() || !is_standard_interface(&requested) {
        return String::new();
    }
    if descriptor.endpoints.is_empty() {
        return String::new();
    }

    let matched = find_endpoint(&descriptor.endpoints, &requested).or_else(|| {
        let fallback = repository_fallback(&requested)?;
        let found = find_endpoint(&descriptor.endpoints, &fallback);
        if found.is_some() {
            debug!(%requested, %fallback, "interface resolved via repository fallback");
        }
        found
    });

    matched
        .and_then(Endpoint::href)
        .map(str::to_string)
        .unwrap_or_default()
}

/// Whether an (uppercased) interface name starts with a standardized family
/// followed by `-`.
fn is_standard_interface(name: &str) -> bool {
    INTERFACE_FAMILIES.iter().any(|family| {
        name.strip_prefix(family)
            .is_some_and(|rest| rest.starts_with('-'))
    })
}

fn find_endpoint<'a>(endpoints: &'a [Endpoint], interface: &str) -> Option<&'a Endpoint> {
    endpoints
        .iter()
        .find(|endpoint| endpoint.interface == interface)
}

/// `AAS-3.<minor>` → `AAS-REPOSITORY-3.<minor>`, and the same for
/// `SUBMODEL-3.<minor>`. The minor token may span several dots
/// (`3.0.1`) but no further `-`.
fn repository_fallback(requested: &str) -> Option<String> {
    const RULES: [(&str, &str); 2] = [
        ("AAS-3.", "AAS-REPOSITORY-3."),
        ("SUBMODEL-3.", "SUBMODEL-REPOSITORY-3."),
    ];

    for (generic, repository) in RULES {
        if let Some(minor) = requested.strip_prefix(generic) {
            if !minor.is_empty() && !minor.contains('-') {
                return Some(format!("{repository}{minor}"));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn descriptor(endpoints: serde_json::Value) -> EndpointSource {
        EndpointSource::from_value(&json!({ "endpoints": endpoints })).unwrap()
    }

    #[test]
    fn exact_interface_match() {
        let source = descriptor(json!([{
            "interface": "AAS-3.0",
            "protocolInformation": {"href": "http://example.com/aasEndpoint"}
        }]));
        assert_eq!(
            extract_endpoint_href(&source, "AAS-3.0"),
            "http://example.com/aasEndpoint"
        );
    }

    #[test]
    fn empty_href_yields_empty() {
        let source = descriptor(json!([{
            "interface": "AAS-3.0",
            "protocolInformation": {"href": ""}
        }]));
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0"), "");
    }

    #[test]
    fn missing_protocol_information_yields_empty() {
        let source = descriptor(json!([{"interface": "AAS-3.0", "protocolInformation": {}}]));
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0"), "");

        let source = descriptor(json!([{"interface": "AAS-3.0"}]));
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0"), "");
    }

    #[test]
    fn bare_endpoint_object_yields_empty() {
        let source = descriptor(json!([{}]));
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0"), "");
    }

    #[test]
    fn empty_endpoint_list_yields_empty() {
        let source = descriptor(json!([]));
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0"), "");

        let source = EndpointSource::from_value(&json!({})).unwrap();
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0"), "");
    }

    #[test]
    fn aas_fallback_to_repository() {
        let source = descriptor(json!([{
            "interface": "AAS-REPOSITORY-3.0",
            "protocolInformation": {"href": "http://example.com/aas-repository"}
        }]));
        assert_eq!(
            extract_endpoint_href(&source, "AAS-3.0"),
            "http://example.com/aas-repository"
        );
    }

    #[test]
    fn aas_fallback_with_multi_part_minor() {
        let source = descriptor(json!([{
            "interface": "AAS-REPOSITORY-3.0.1",
            "protocolInformation": {"href": "http://example.com/aas-repository-v3.0.1"}
        }]));
        assert_eq!(
            extract_endpoint_href(&source, "AAS-3.0.1"),
            "http://example.com/aas-repository-v3.0.1"
        );
    }

    #[test]
    fn submodel_fallback_to_repository() {
        let source = descriptor(json!([{
            "interface": "SUBMODEL-REPOSITORY-3.0",
            "protocolInformation": {"href": "http://example.com/submodel-repository"}
        }]));
        assert_eq!(
            extract_endpoint_href(&source, "SUBMODEL-3.0"),
            "http://example.com/submodel-repository"
        );

        let source = descriptor(json!([{
            "interface": "SUBMODEL-REPOSITORY-3.0.2",
            "protocolInformation": {"href": "http://example.com/submodel-repository-v3.0.2"}
        }]));
        assert_eq!(
            extract_endpoint_href(&source, "SUBMODEL-3.0.2"),
            "http://example.com/submodel-repository-v3.0.2"
        );
    }

    #[test]
    fn exact_match_beats_fallback() {
        let source = descriptor(json!([
            {
                "interface": "AAS-3.0",
                "protocolInformation": {"href": "http://example.com/aas-exact"}
            },
            {
                "interface": "AAS-REPOSITORY-3.0",
                "protocolInformation": {"href": "http://example.com/aas-repository"}
            }
        ]));
        assert_eq!(
            extract_endpoint_href(&source, "AAS-3.0"),
            "http://example.com/aas-exact"
        );
    }

    #[test]
    fn exact_match_with_blank_href_does_not_fall_back() {
        let source = descriptor(json!([
            {"interface": "SUBMODEL-3.0", "protocolInformation": {"href": ""}},
            {
                "interface": "SUBMODEL-REPOSITORY-3.0",
                "protocolInformation": {"href": "http://example.com/submodel-repository"}
            }
        ]));
        assert_eq!(extract_endpoint_href(&source, "SUBMODEL-3.0"), "");
    }

    #[test]
    fn repository_model_short_circuits_to_path() {
        let source = EndpointSource::from_value(&json!({
            "modelType": "Submodel",
            "path": "http://example.com/submodels/abc"
        }))
        .unwrap();
        // Even a nonsense interface name is irrelevant for models
        assert_eq!(
            extract_endpoint_href(&source, "anything"),
            "http://example.com/submodels/abc"
        );
    }

    #[test]
    fn requested_name_is_trimmed_and_uppercased() {
        let source = descriptor(json!([{
            "interface": "AAS-3.0",
            "protocolInformation": {"href": "h"}
        }]));
        assert_eq!(extract_endpoint_href(&source, "  aas-3.0  "), "h");
    }

    #[test]
    fn registered_interface_case_is_not_normalized() {
        // Matching against the endpoint record stays exact
        let source = descriptor(json!([{
            "interface": "aas-3.0",
            "protocolInformation": {"href": "h"}
        }]));
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0"), "");
    }

    #[test]
    fn unknown_family_is_rejected() {
        let source = descriptor(json!([{
            "interface": "BOGUS-3.0",
            "protocolInformation": {"href": "h"}
        }]));
        assert_eq!(extract_endpoint_href(&source, "BOGUS-3.0"), "");
    }

    #[test]
    fn family_without_dash_suffix_is_rejected() {
        let source = descriptor(json!([{
            "interface": "AAS",
            "protocolInformation": {"href": "h"}
        }]));
        assert_eq!(extract_endpoint_href(&source, "AAS"), "");
        assert_eq!(extract_endpoint_href(&source, ""), "");
        assert_eq!(extract_endpoint_href(&source, "   "), "");
    }

    #[test]
    fn minor_token_with_dash_does_not_fall_back() {
        let source = descriptor(json!([{
            "interface": "AAS-REPOSITORY-3.0-BETA",
            "protocolInformation": {"href": "h"}
        }]));
        assert_eq!(extract_endpoint_href(&source, "AAS-3.0-BETA"), "");
    }

    #[test]
    fn discovery_and_registry_families_validate() {
        let source = descriptor(json!([{
            "interface": "AAS-DISCOVERY-3.0",
            "protocolInformation": {"href": "http://example.com/lookup"}
        }]));
        assert_eq!(
            extract_endpoint_href(&source, "AAS-DISCOVERY-3.0"),
            "http://example.com/lookup"
        );
    }
}
