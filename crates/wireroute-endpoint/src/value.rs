// crates/wireroute-endpoint/src/value.rs
// ============================================================================
// Module: Property Values
// Description: Typed configuration values coerced to their wire string form.
// Purpose: Carry string/boolean/integer/double setter arguments uniformly.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Generated setters accept typed arguments (string, boolean, integer,
//! double) and forward them to the shared sink as a [`PropertyValue`]. The
//! wire form of every value is its canonical string rendering; endpoint URIs
//! carry no type information beyond that.

use std::fmt;

// ============================================================================
// SECTION: Value Type
// ============================================================================

/// A typed configuration value destined for an endpoint URI query pair.
///
/// # Invariants
/// - The wire form is stable: `Display` output for a fixed value never
///   changes between assemblies.
///
/// # Examples
/// ```
/// use wireroute_endpoint::PropertyValue;
///
/// assert_eq!(PropertyValue::from(true).to_string(), "true");
/// assert_eq!(PropertyValue::from(8080).to_string(), "8080");
/// assert_eq!(PropertyValue::from("events").to_string(), "events");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Boolean flag, rendered as `true` or `false`.
    Bool(bool),
    /// Integer value, rendered in base ten.
    Integer(i64),
    /// Double-precision value, rendered with Rust's shortest round-trip form.
    Double(f64),
    /// String value, rendered as-is before percent-encoding.
    String(String),
}

impl PropertyValue {
    /// Converts the value into its wire string form.
    #[must_use]
    pub fn into_wire_string(self) -> String {
        match self {
            Self::Bool(value) => value.to_string(),
            Self::Integer(value) => value.to_string(),
            Self::Double(value) => value.to_string(),
            Self::String(value) => value,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Double(value) => write!(formatter, "{value}"),
            Self::String(value) => formatter.write_str(value),
        }
    }
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u16> for PropertyValue {
    fn from(value: u16) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for PropertyValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
