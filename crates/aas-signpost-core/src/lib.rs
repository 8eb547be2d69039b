//! # AAS Signpost Core
//!
//! Pure resolution rules mapping AAS metamodel identifiers to the concrete
//! strings a client needs: URLs, navigation paths, abbreviations.
//!
//! This crate provides:
//! - Typed identifier extraction from References
//! - eCLASS/IRI semantic-ID equivalence and notation-aware matching
//! - Endpoint selection from registry descriptors, including the
//!   standardized repository fallback
//! - idShort path construction for created elements and path annotation of
//!   fetched element trees
//! - AAS Part 2 identifier codecs (base64url ids, percent-encoded paths)
//! - Identifier generation for newly created model entities
//! - Referable display helpers
//!
//! Everything degrades to an empty sentinel (`""`, empty `Vec`, `None`) on
//! incomplete input instead of failing; only the codecs report errors.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod endpoint;
pub mod ids;
pub mod path;
pub mod referable;
pub mod reference;
pub mod semantic;

pub use encoding::{
    decode_id_base64url, decode_idshort_path, encode_id_base64url, encode_idshort_path,
    EncodingError,
};
pub use endpoint::{extract_endpoint_href, INTERFACE_FAMILIES};
pub use ids::{generate_custom_id, generate_uuid, uuid_from_string, IdGenerator};
pub use path::{annotate_element_paths, created_element_path};
pub use referable::{check_id_short, description_to_display, name_to_display};
pub use reference::extract_id;
pub use semantic::{
    eclass_equivalents, element_by_semantic_id, elements_by_semantic_id, extract_version_revision,
    iri_equivalents, matches_eclass_cdp_url, matches_eclass_irdi, matches_iec_cdd, matches_iri,
    matches_semantic_id, VersionRevision,
};
