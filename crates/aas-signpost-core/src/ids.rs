//! Identifier generation for shells, submodels, and elements.

use tracing::debug;
use url::Url;
use uuid::Uuid;

/// Prefix used when no (valid) one is configured.
pub const DEFAULT_ID_PREFIX: &str = "https://example.com/";

/// Random hyphenated UUID v4.
#[must_use]
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Deterministic hyphenated UUID for a string: the same input always maps
/// to the same id (UUID v3 over the DNS namespace).
///
/// # Examples
///
/// ```
/// use aas_signpost_core::uuid_from_string;
///
/// let a = uuid_from_string("https://example.com/ids/sm/1234");
/// let b = uuid_from_string("https://example.com/ids/sm/1234");
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn uuid_from_string(value: &str) -> String {
    Uuid::new_v3(&Uuid::NAMESPACE_DNS, value.as_bytes()).to_string()
}

/// Four random segments in `1000..=9999` joined by `_`, e.g.
/// `4711_1234_5678_9012`.
#[must_use]
pub fn generate_custom_id() -> String {
    let entropy = Uuid::new_v4().as_u128();
    let segments: Vec<String> = (0..4)
        .map(|chunk| {
            let value = (entropy >> (chunk * 32)) & 0xFFFF_FFFF;
            (1000 + value % 9000).to_string()
        })
        .collect();
    segments.join("_")
}

/// IRI generator with a configurable prefix.
///
/// The prefix must be an absolute `http`/`https` URL; anything else falls
/// back to [`DEFAULT_ID_PREFIX`] at generation time, and a missing
/// trailing `/` is appended.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    id_prefix: String,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Generator over [`DEFAULT_ID_PREFIX`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
        }
    }

    /// Generator over a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            id_prefix: prefix.into(),
        }
    }

    /// Fresh IRI for an entity: `{prefix}ids/{segment}/{custom_id}`, where
    /// the segment shortens the entity type (Asset → `asset`,
    /// AssetAdministrationShell → `aas`, Submodel → `sm`) and is omitted
    /// for any other type.
    ///
    /// # Examples
    ///
    /// ```
    /// use aas_signpost_core::IdGenerator;
    ///
    /// let iri = IdGenerator::new().generate_iri("Submodel");
    /// assert!(iri.starts_with("https://example.com/ids/sm/"));
    /// ```
    #[must_use]
    pub fn generate_iri(&self, entity_type: &str) -> String {
        let prefix = self.normalized_prefix();
        let custom_id = generate_custom_id();
        match entity_type {
            "Asset" => format!("{prefix}ids/asset/{custom_id}"),
            "AssetAdministrationShell" => format!("{prefix}ids/aas/{custom_id}"),
            "Submodel" => format!("{prefix}ids/sm/{custom_id}"),
            _ => format!("{prefix}ids/{custom_id}"),
        }
    }

    fn normalized_prefix(&self) -> String {
        let prefix = self.id_prefix.trim();
        let usable = Url::parse(prefix)
            .ok()
            .is_some_and(|url| matches!(url.scheme(), "http" | "https"));
        let base = if usable {
            prefix
        } else {
            if !prefix.is_empty() {
                debug!(prefix, "id prefix is not an absolute http(s) url, using default");
            }
            DEFAULT_ID_PREFIX
        };
        if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        }
    }
}
