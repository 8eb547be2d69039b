//! # AAS Signpost Model
//!
//! Serde shapes for the slice of the AAS metamodel the resolution rules
//! consume, plus read accessors for loosely-typed element trees.
//!
//! This crate provides:
//! - The Key Types table from IDTA 01001-3-0-1 with standard abbreviations
//! - Reference/Key wire shapes
//! - Registry descriptor and endpoint shapes, including the untagged
//!   descriptor-or-repository-model union
//! - Accessors over `serde_json::Value` element trees that degrade to
//!   `None`/empty instead of failing on incomplete remote data

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod descriptor;
pub mod element;
pub mod keytypes;
pub mod reference;

pub use descriptor::{
    Descriptor, Endpoint, EndpointSource, ModelKind, ProtocolInformation, RepositoryModel,
};
pub use keytypes::{abbreviation_for, KeyType, UnknownKeyType};
pub use reference::{Key, Reference};
