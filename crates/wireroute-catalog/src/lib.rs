// crates/wireroute-catalog/src/lib.rs
// ============================================================================
// Module: Component Catalog Library
// Description: Canonical component schema model, loading, and validation.
// Purpose: Single source of truth for per-component endpoint options.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! `wireroute-catalog` defines the component schema contract consumed by the
//! DSL generator. A catalog describes each component's scheme, path syntax,
//! and options (names, kinds, types, defaults, documentation). Loading is
//! size-limited and validation is strict and fail-closed: a catalog that
//! passes [`ComponentCatalog::validate`] is guaranteed to render into
//! well-formed builder code.
//!
//! ### Design Notes
//! - Catalog inputs are untrusted; the loader enforces a hard size limit and
//!   rejects unknown fields.
//! - Validation reports the first violation with enough context to locate
//!   the offending component and option.
//!
//! ## Index
//! - Model: [`ComponentCatalog`], [`ComponentSpec`], [`OptionSpec`],
//!   [`OptionKind`], [`OptionType`]
//! - Errors: [`CatalogError`]
//! - Limits: [`MAX_CATALOG_BYTES`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod types;
pub mod validate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::CatalogError;
pub use types::ComponentCatalog;
pub use types::ComponentSpec;
pub use types::MAX_CATALOG_BYTES;
pub use types::OptionKind;
pub use types::OptionSpec;
pub use types::OptionType;
