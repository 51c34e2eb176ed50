// crates/wireroute-catalog/src/error.rs
// ============================================================================
// Module: Catalog Errors
// Description: Error taxonomy for catalog loading and validation.
// Purpose: Fail-closed reporting for malformed catalog inputs.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Errors raised while loading or validating a component catalog. Catalog
//! inputs are untrusted; every failure mode surfaces as a typed error rather
//! than a partially loaded catalog.

use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Errors raised by catalog loading and validation.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
///
/// # Examples
/// ```
/// use wireroute_catalog::CatalogError;
///
/// let err = CatalogError::Invalid("missing scheme".to_string());
/// assert!(matches!(err, CatalogError::Invalid(message) if message == "missing scheme"));
/// ```
#[derive(Debug, Error)]
pub enum CatalogError {
    /// IO error while reading the catalog file.
    #[error("io error: {0}")]
    Io(String),
    /// JSON parsing error.
    #[error("json error: {0}")]
    Json(String),
    /// Catalog content violates a validation rule.
    #[error("invalid catalog: {0}")]
    Invalid(String),
}
