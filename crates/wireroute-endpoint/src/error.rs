// crates/wireroute-endpoint/src/error.rs
// ============================================================================
// Module: Endpoint Errors
// Description: Error taxonomy for endpoint URI assembly.
// Purpose: Fail-closed reporting for invalid schemes, paths, and keys.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Errors raised while assembling an endpoint URI from an
//! [`EndpointParams`](crate::EndpointParams) sink. Assembly fails closed:
//! a URI is only produced when the scheme, path, and every property key are
//! well formed.

use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Errors raised by endpoint URI assembly.
///
/// # Invariants
/// - Variant meanings are stable for automation and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    /// The component scheme is empty or contains invalid characters.
    #[error("invalid endpoint scheme: {0:?}")]
    InvalidScheme(String),
    /// No URL portion was set before assembly.
    #[error("endpoint URL portion is empty; call url() with the path segments first")]
    MissingUrl,
    /// A property key is empty or contains reserved URI characters.
    #[error("invalid property key: {0:?}")]
    InvalidPropertyKey(String),
}
