// crates/wireroute-endpoint/src/lib.rs
// ============================================================================
// Module: Endpoint Runtime Library
// Description: Property sink and endpoint URI assembly for Wireroute.
// Purpose: Provide the shared runtime that generated builders forward into.
// Dependencies: thiserror, url
// ============================================================================

//! ## Overview
//! `wireroute-endpoint` is the runtime behind every generated component
//! builder. A builder holds its positional path-segment fields and an
//! [`EndpointParams`] sink; each fluent setter either rebuilds the URL
//! portion via [`EndpointParams::url`] or forwards a named configuration
//! value via [`EndpointParams::property`]. [`EndpointParams::to_uri`]
//! assembles the final endpoint URI with deterministic, percent-encoded
//! query output.
//!
//! ### Design Notes
//! - Assembly is deterministic: query pairs render sorted by key.
//! - The sink performs no cross-field validation. Builders are plain
//!   configuration records; semantic validation belongs to the component
//!   registry that consumes the assembled URI.
//! - Duplicate `property` calls for a key overwrite the previous value,
//!   matching mutable-field setter semantics.
//!
//! ## Index
//! - Sink: [`EndpointParams`], [`EndpointBuilder`]
//! - Assembly: [`EndpointUri`]
//! - Values: [`PropertyValue`]
//! - Errors: [`EndpointError`]

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod params;
pub mod uri;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::EndpointError;
pub use params::EndpointBuilder;
pub use params::EndpointParams;
pub use uri::EndpointUri;
pub use value::PropertyValue;
