#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Codesign-Core declares the identifier vocabularies used by code-signing
//! and provisioning tooling (entitlement keys, coarse capability
//! identifiers, and product-feature identifiers) together with the pure
//! lookups between them.
//!
//! All data is immutable and process-wide; every operation is total,
//! synchronous, and reentrant. There is nothing to lock, nothing to fail,
//! and no I/O: unrecognized identifiers are ordinary input and resolve to
//! "no value" or `false`, never to an error.

// Module for the shared identifier newtypes (Entitlement, Capability, Feature).
pub mod types;

// Module for the known identifier constants and the lookup logic.
pub mod registry;

// Re-export the vocabulary types and operations for access at the crate root.
pub use registry::{
    capabilities, entitlement_for_feature, entitlements, feature_for_entitlement,
    features, free_developer_can_use_entitlement,
};
pub use types::{Capability, Entitlement, Feature};
