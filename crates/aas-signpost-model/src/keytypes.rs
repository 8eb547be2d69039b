//! Key Types enumeration from IDTA 01001-3-0-1 (page 82).
//!
//! Every element kind that may appear as the `type` of a Reference Key,
//! together with the abbreviation used across the IDTA Submodel Template
//! specifications. Five kinds (`BasicEventElement`, `DataElement`,
//! `FragmentReference`, `Identifiable`, `Referable`) carry no standard
//! abbreviation.
//!
//! # References
//!
//! - IDTA 01001-3-0-1: Specification of the Asset Administration Shell Part 1

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An element kind usable as the `type` of a Reference Key.
///
/// Serialized exactly as the metamodel spells it, e.g.
/// `"SubmodelElementCollection"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyType {
    /// Annotated relationship between two referables
    AnnotationRelationshipElement,
    /// The shell itself
    AssetAdministrationShell,
    /// Basic event element (no standard abbreviation)
    BasicEventElement,
    /// Binary large object with mime type
    Blob,
    /// Capability of an asset
    Capability,
    /// Concept description (semantic definition)
    ConceptDescription,
    /// Umbrella kind for value-carrying elements (no standard abbreviation)
    DataElement,
    /// Entity within a bill of material
    Entity,
    /// Umbrella kind for event elements
    EventElement,
    /// File reference with mime type
    File,
    /// Fragment within a non-AAS resource (no standard abbreviation)
    FragmentReference,
    /// Reference target outside the AAS environment
    GlobalReference,
    /// Umbrella kind for identifiable referables (no standard abbreviation)
    Identifiable,
    /// Property with translatable value
    MultiLanguageProperty,
    /// Callable operation
    Operation,
    /// Single-valued property
    Property,
    /// Min/max value range
    Range,
    /// Umbrella kind for referables (no standard abbreviation)
    Referable,
    /// Reference-valued element
    ReferenceElement,
    /// Relationship between two referables
    RelationshipElement,
    /// Submodel of a shell
    Submodel,
    /// Umbrella kind for submodel elements
    SubmodelElement,
    /// Unordered group of submodel elements
    SubmodelElementCollection,
    /// Ordered list of submodel elements
    SubmodelElementList,
}

impl KeyType {
    /// Every key type, in the order the standard lists them.
    pub const ALL: [KeyType; 24] = [
        KeyType::AnnotationRelationshipElement,
        KeyType::AssetAdministrationShell,
        KeyType::BasicEventElement,
        KeyType::Blob,
        KeyType::Capability,
        KeyType::ConceptDescription,
        KeyType::DataElement,
        KeyType::Entity,
        KeyType::EventElement,
        KeyType::File,
        KeyType::FragmentReference,
        KeyType::GlobalReference,
        KeyType::Identifiable,
        KeyType::MultiLanguageProperty,
        KeyType::Operation,
        KeyType::Property,
        KeyType::Range,
        KeyType::Referable,
        KeyType::ReferenceElement,
        KeyType::RelationshipElement,
        KeyType::Submodel,
        KeyType::SubmodelElement,
        KeyType::SubmodelElementCollection,
        KeyType::SubmodelElementList,
    ];

    /// The metamodel name, exactly as serialized on the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            KeyType::AnnotationRelationshipElement => "AnnotationRelationshipElement",
            KeyType::AssetAdministrationShell => "AssetAdministrationShell",
            KeyType::BasicEventElement => "BasicEventElement",
            KeyType::Blob => "Blob",
            KeyType::Capability => "Capability",
            KeyType::ConceptDescription => "ConceptDescription",
            KeyType::DataElement => "DataElement",
            KeyType::Entity => "Entity",
            KeyType::EventElement => "EventElement",
            KeyType::File => "File",
            KeyType::FragmentReference => "FragmentReference",
            KeyType::GlobalReference => "GlobalReference",
            KeyType::Identifiable => "Identifiable",
            KeyType::MultiLanguageProperty => "MultiLanguageProperty",
            KeyType::Operation => "Operation",
            KeyType::Property => "Property",
            KeyType::Range => "Range",
            KeyType::Referable => "Referable",
            KeyType::ReferenceElement => "ReferenceElement",
            KeyType::RelationshipElement => "RelationshipElement",
            KeyType::Submodel => "Submodel",
            KeyType::SubmodelElement => "SubmodelElement",
            KeyType::SubmodelElementCollection => "SubmodelElementCollection",
            KeyType::SubmodelElementList => "SubmodelElementList",
        }
    }

    /// The abbreviation the IDTA SMT specifications use, or `""` for the
    /// five kinds without one.
    #[must_use]
    pub fn abbreviation(self) -> &'static str {
        match self {
            KeyType::AnnotationRelationshipElement => "RelA",
            KeyType::AssetAdministrationShell => "AAS",
            KeyType::BasicEventElement => "",
            KeyType::Blob => "Blob",
            KeyType::Capability => "Cap",
            KeyType::ConceptDescription => "CD",
            KeyType::DataElement => "",
            KeyType::Entity => "Ent",
            KeyType::EventElement => "Evt",
            KeyType::File => "File",
            KeyType::FragmentReference => "",
            KeyType::GlobalReference => "GlobalRef",
            KeyType::Identifiable => "",
            KeyType::MultiLanguageProperty => "MLP",
            KeyType::Operation => "Opr",
            KeyType::Property => "Prop",
            KeyType::Range => "Range",
            KeyType::Referable => "",
            KeyType::ReferenceElement => "Ref",
            KeyType::RelationshipElement => "Rel",
            KeyType::Submodel => "SM",
            KeyType::SubmodelElement => "SME",
            KeyType::SubmodelElementCollection => "SMC",
            KeyType::SubmodelElementList => "SML",
        }
    }

    /// Look up a key type by its exact metamodel name (case-sensitive).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        KeyType::ALL.iter().copied().find(|kt| kt.name() == name)
    }

    /// Look up a key type by metamodel name or non-blank abbreviation.
    ///
    /// References in the wild sometimes carry abbreviated key types
    /// (`"AAS"`, `"SM"`), so identifier extraction accepts both spellings.
    #[must_use]
    pub fn resolve(ident: &str) -> Option<Self> {
        KeyType::from_name(ident).or_else(|| {
            KeyType::ALL
                .iter()
                .copied()
                .find(|kt| !kt.abbreviation().is_empty() && kt.abbreviation() == ident)
        })
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyType {
    type Err = UnknownKeyType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyType::from_name(s).ok_or_else(|| UnknownKeyType(s.to_string()))
    }
}

/// Error for a string that is not a metamodel key-type name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown key type: {0}")]
pub struct UnknownKeyType(pub String);

/// Abbreviation for a metamodel element-kind name.
///
/// Returns `""` when `name` is blank, unknown, or names one of the kinds
/// without a standard abbreviation. Lookup is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use aas_signpost_model::abbreviation_for;
///
/// assert_eq!(abbreviation_for("SubmodelElementCollection"), "SMC");
/// assert_eq!(abbreviation_for("Referable"), "");
/// assert_eq!(abbreviation_for("submodel"), "");
/// ```
#[must_use]
pub fn abbreviation_for(name: &str) -> &'static str {
    if name.trim().is_empty() {
        return "";
    }
    KeyType::from_name(name).map_or("", KeyType::abbreviation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_24_entries() {
        assert_eq!(KeyType::ALL.len(), 24);
    }

    #[test]
    fn abbreviation_known_kinds() {
        assert_eq!(abbreviation_for("SubmodelElementCollection"), "SMC");
        assert_eq!(abbreviation_for("AssetAdministrationShell"), "AAS");
        assert_eq!(abbreviation_for("Property"), "Prop");
        assert_eq!(abbreviation_for("GlobalReference"), "GlobalRef");
    }

    #[test]
    fn abbreviation_blank_and_unknown() {
        assert_eq!(abbreviation_for(""), "");
        assert_eq!(abbreviation_for("   "), "");
        assert_eq!(abbreviation_for("Unknown"), "");
    }

    #[test]
    fn abbreviation_umbrella_kinds_empty() {
        for name in [
            "BasicEventElement",
            "DataElement",
            "FragmentReference",
            "Identifiable",
            "Referable",
        ] {
            assert_eq!(abbreviation_for(name), "", "{name} has no abbreviation");
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(abbreviation_for("submodelelementcollection"), "");
        assert!(KeyType::from_name("submodel").is_none());
        assert_eq!(KeyType::from_name("Submodel"), Some(KeyType::Submodel));
    }

    #[test]
    fn resolve_accepts_names_and_abbreviations() {
        assert_eq!(KeyType::resolve("AAS"), Some(KeyType::AssetAdministrationShell));
        assert_eq!(KeyType::resolve("SM"), Some(KeyType::Submodel));
        assert_eq!(KeyType::resolve("Submodel"), Some(KeyType::Submodel));
        assert!(KeyType::resolve("Bogus").is_none());
        assert!(KeyType::resolve("").is_none());
    }

    #[test]
    fn serde_uses_wire_names() {
        let json = serde_json::to_string(&KeyType::SubmodelElementList).unwrap();
        assert_eq!(json, "\"SubmodelElementList\"");
        let back: KeyType = serde_json::from_str("\"ConceptDescription\"").unwrap();
        assert_eq!(back, KeyType::ConceptDescription);
    }

    #[test]
    fn display_and_fromstr_roundtrip() {
        for kt in KeyType::ALL {
            let parsed: KeyType = kt.name().parse().unwrap();
            assert_eq!(parsed, kt);
            assert_eq!(kt.to_string(), kt.name());
        }
        assert!("NotAKeyType".parse::<KeyType>().is_err());
    }
}
