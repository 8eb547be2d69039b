//! Registry descriptor and endpoint shapes (AAS Part 2 registry API).
//!
//! A registry answers lookups with Descriptors listing one Endpoint per
//! interface flavor. Repository-fetched models skip the registry round and
//! carry a resolved navigation path instead; `EndpointSource` is the union
//! the endpoint resolver accepts.

use serde::{Deserialize, Serialize};

/// Transport metadata of one registered endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolInformation {
    /// Resolved URL of the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Transport protocol, e.g. `"HTTP"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_protocol: Option<String>,
    /// Offered protocol versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_protocol_version: Option<Vec<String>>,
    /// Application-level subprotocol
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subprotocol: Option<String>,
}

/// One registered endpoint of an AAS or Submodel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Interface short name tag, e.g. `"AAS-REPOSITORY-3.0"`
    #[serde(default)]
    pub interface: String,
    /// Transport metadata
    #[serde(default)]
    pub protocol_information: ProtocolInformation,
}

impl Endpoint {
    /// The endpoint's href, when present and non-empty.
    #[must_use]
    pub fn href(&self) -> Option<&str> {
        self.protocol_information
            .href
            .as_deref()
            .filter(|href| !href.is_empty())
    }
}

/// A registry descriptor for an AAS or Submodel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Identifier of the described AAS/Submodel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Short name of the described AAS/Submodel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
    /// Registered endpoints, one per interface flavor
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

/// Identifiable kinds a repository returns whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelKind {
    /// A full AssetAdministrationShell
    AssetAdministrationShell,
    /// A full Submodel
    Submodel,
}

/// A repository-fetched model that already knows where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryModel {
    /// Discriminating model type
    pub model_type: ModelKind,
    /// Resolved navigation path
    pub path: String,
    /// Identifier, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Short name, when the server includes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_short: Option<String>,
}

/// What the endpoint resolver accepts: a registry descriptor or a
/// repository model.
///
/// Untagged union, tried in declaration order: a JSON object with a
/// `modelType` of `AssetAdministrationShell`/`Submodel` *and* a `path`
/// deserializes as `Model`; any other object falls through to `Descriptor`,
/// whose fields are all optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EndpointSource {
    /// Repository model carrying a direct path
    Model(RepositoryModel),
    /// Registry descriptor carrying endpoints
    Descriptor(Descriptor),
}

impl EndpointSource {
    /// Parse from loose JSON.
    ///
    /// Returns `None` for anything that is not a JSON object (the one
    /// structural requirement the resolver makes of its input).
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}
