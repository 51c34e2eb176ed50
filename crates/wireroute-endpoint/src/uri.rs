// crates/wireroute-endpoint/src/uri.rs
// ============================================================================
// Module: Endpoint URI
// Description: Assembled endpoint URI with deterministic query rendering.
// Purpose: Final wire form handed to the enclosing framework.
// Dependencies: url
// ============================================================================

//! ## Overview
//! An [`EndpointUri`] is the assembled output of a component builder: a
//! scheme, the concatenated path segments, and the configured query pairs.
//! Rendering is deterministic (query pairs sorted by key) and query values
//! are percent-encoded with `application/x-www-form-urlencoded` rules so
//! arbitrary value strings survive a render/parse round trip.

use std::fmt;

use url::form_urlencoded;

// ============================================================================
// SECTION: URI Type
// ============================================================================

/// An assembled endpoint URI.
///
/// # Invariants
/// - `query` is sorted by key and holds decoded (unencoded) pairs.
/// - `Display` output is stable for a fixed set of pairs.
///
/// # Examples
/// ```
/// use wireroute_endpoint::EndpointParams;
///
/// # fn main() -> Result<(), wireroute_endpoint::EndpointError> {
/// let mut params = EndpointParams::new();
/// params.url("orders");
/// params.property("groupId", "settlement");
/// let uri = params.to_uri("kafka")?;
/// assert_eq!(uri.to_string(), "kafka:orders?groupId=settlement");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointUri {
    /// Component scheme identifying the connector.
    scheme: String,
    /// Concatenated positional path segments.
    path: String,
    /// Decoded query pairs, sorted by key.
    query: Vec<(String, String)>,
}

impl EndpointUri {
    /// Builds an endpoint URI from already-validated parts.
    ///
    /// Callers are expected to have validated the scheme and keys; this
    /// constructor only establishes the sorted-query invariant.
    #[must_use]
    pub(crate) fn from_parts(scheme: String, path: String, mut query: Vec<(String, String)>) -> Self {
        query.sort_by(|left, right| left.0.cmp(&right.0));
        Self {
            scheme,
            path,
            query,
        }
    }

    /// Returns the component scheme.
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Returns the concatenated path segments.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the decoded query pairs, sorted by key.
    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Renders the query portion with form-urlencoded escaping.
    ///
    /// Returns `None` when no properties were configured.
    #[must_use]
    pub fn encoded_query(&self) -> Option<String> {
        if self.query.is_empty() {
            return None;
        }
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.query {
            serializer.append_pair(key, value);
        }
        Some(serializer.finish())
    }
}

impl fmt::Display for EndpointUri {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}", self.scheme, self.path)?;
        if let Some(encoded) = self.encoded_query() {
            write!(formatter, "?{encoded}")?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::EndpointUri;

    #[test]
    fn query_pairs_sort_on_construction() {
        let uri = EndpointUri::from_parts(
            "timer".to_string(),
            "heartbeat".to_string(),
            vec![
                ("period".to_string(), "5000".to_string()),
                ("delay".to_string(), "250".to_string()),
            ],
        );
        assert_eq!(uri.to_string(), "timer:heartbeat?delay=250&period=5000");
    }

    #[test]
    fn empty_query_renders_no_separator() {
        let uri = EndpointUri::from_parts("file".to_string(), "inbox".to_string(), Vec::new());
        assert_eq!(uri.to_string(), "file:inbox");
        assert!(uri.encoded_query().is_none());
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let uri = EndpointUri::from_parts(
            "sql".to_string(),
            "select".to_string(),
            vec![("query".to_string(), "a=1&b=2".to_string())],
        );
        assert_eq!(uri.to_string(), "sql:select?query=a%3D1%26b%3D2");
    }
}
