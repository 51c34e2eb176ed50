// crates/wireroute-endpoint/src/params.rs
// ============================================================================
// Module: Endpoint Parameter Sink
// Description: Shared sink that generated builders forward setters into.
// Purpose: Collect the URL portion and named properties, assemble the URI.
// Dependencies: none
// ============================================================================

//! ## Overview
//! [`EndpointParams`] is the generic sink behind every generated component
//! builder. Path setters rebuild the URL portion through
//! [`EndpointParams::url`]; every other setter is a one-line forward into
//! [`EndpointParams::property`]. [`EndpointParams::to_uri`] validates the
//! scheme and keys and produces the final [`EndpointUri`].

use crate::error::EndpointError;
use crate::uri::EndpointUri;
use crate::value::PropertyValue;

// ============================================================================
// SECTION: Parameter Sink
// ============================================================================

/// Mutable sink collecting the URL portion and named endpoint properties.
///
/// # Invariants
/// - At most one entry per property key; later sets overwrite earlier ones.
/// - Property insertion order is irrelevant to assembled output.
///
/// # Examples
/// ```
/// use wireroute_endpoint::EndpointParams;
///
/// # fn main() -> Result<(), wireroute_endpoint::EndpointError> {
/// let mut params = EndpointParams::new();
/// params.url("queue/inbound");
/// params.property("concurrentConsumers", 4);
/// params.property("transacted", true);
/// let uri = params.to_uri("jms")?;
/// assert_eq!(uri.to_string(), "jms:queue/inbound?concurrentConsumers=4&transacted=true");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointParams {
    /// URL portion assembled from positional path segments.
    url: Option<String>,
    /// Named properties in insertion order, one entry per key.
    properties: Vec<(String, String)>,
}

impl EndpointParams {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the URL portion with the concatenated path segments.
    pub fn url(&mut self, value: impl Into<String>) {
        self.url = Some(value.into());
    }

    /// Sets a named property, overwriting any previous value for the key.
    pub fn property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        let key = key.into();
        let value = value.into().into_wire_string();
        if let Some(existing) = self.properties.iter_mut().find(|(name, _)| *name == key) {
            existing.1 = value;
            return;
        }
        self.properties.push((key, value));
    }

    /// Returns the current URL portion, when set.
    #[must_use]
    pub fn url_value(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns the configured properties in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[(String, String)] {
        &self.properties
    }

    /// Assembles the endpoint URI for the given component scheme.
    ///
    /// # Errors
    /// Returns [`EndpointError`] when the scheme is malformed, no URL portion
    /// was set, or a property key contains reserved characters.
    pub fn to_uri(&self, scheme: &str) -> Result<EndpointUri, EndpointError> {
        if !valid_scheme(scheme) {
            return Err(EndpointError::InvalidScheme(scheme.to_string()));
        }
        let url = match self.url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => return Err(EndpointError::MissingUrl),
        };
        for (key, _) in &self.properties {
            if !valid_property_key(key) {
                return Err(EndpointError::InvalidPropertyKey(key.clone()));
            }
        }
        Ok(EndpointUri::from_parts(
            scheme.to_string(),
            url.to_string(),
            self.properties.clone(),
        ))
    }
}

// ============================================================================
// SECTION: Builder Seam
// ============================================================================

/// Trait implemented by every generated component builder.
///
/// Generated builders hold their path-segment fields plus an
/// [`EndpointParams`] sink; this trait exposes the sink and the component
/// scheme so callers can assemble the URI without knowing the concrete
/// builder type.
pub trait EndpointBuilder {
    /// Returns the component scheme for this builder.
    fn scheme(&self) -> &'static str;

    /// Returns the underlying parameter sink.
    fn params(&self) -> &EndpointParams;

    /// Assembles the endpoint URI from the configured fields.
    ///
    /// # Errors
    /// Returns [`EndpointError`] when assembly validation fails.
    fn to_uri(&self) -> Result<EndpointUri, EndpointError> {
        self.params().to_uri(self.scheme())
    }
}

// ============================================================================
// SECTION: Validation Helpers
// ============================================================================

/// Checks the component scheme shape.
///
/// Schemes are lowercase ASCII, starting with a letter, with `-` or `+`
/// allowed as interior separators (`aws-s3`, `paho+ssl`).
fn valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_lowercase() {
        return false;
    }
    chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '+')
}

/// Checks a property key for reserved URI characters.
///
/// Keys travel unencoded in the query portion, so the separators `&`, `=`,
/// `#`, `?` and whitespace are rejected rather than escaped.
fn valid_property_key(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|ch| matches!(ch, '&' | '=' | '#' | '?') || ch.is_whitespace())
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::EndpointParams;
    use crate::error::EndpointError;

    #[test]
    fn later_property_sets_overwrite() -> Result<(), EndpointError> {
        let mut params = EndpointParams::new();
        params.url("orders");
        params.property("maxPollRecords", 100);
        params.property("maxPollRecords", 500);
        let uri = params.to_uri("kafka")?;
        assert_eq!(uri.to_string(), "kafka:orders?maxPollRecords=500");
        Ok(())
    }

    #[test]
    fn missing_url_fails_closed() {
        let params = EndpointParams::new();
        assert_eq!(params.to_uri("kafka"), Err(EndpointError::MissingUrl));
    }

    #[test]
    fn empty_url_fails_closed() {
        let mut params = EndpointParams::new();
        params.url("");
        assert_eq!(params.to_uri("kafka"), Err(EndpointError::MissingUrl));
    }

    #[test]
    fn malformed_scheme_is_rejected() {
        let mut params = EndpointParams::new();
        params.url("orders");
        assert_eq!(
            params.to_uri("Kafka"),
            Err(EndpointError::InvalidScheme("Kafka".to_string()))
        );
        assert_eq!(params.to_uri(""), Err(EndpointError::InvalidScheme(String::new())));
        assert_eq!(
            params.to_uri("2pc"),
            Err(EndpointError::InvalidScheme("2pc".to_string()))
        );
    }

    #[test]
    fn reserved_key_characters_are_rejected() {
        let mut params = EndpointParams::new();
        params.url("orders");
        params.property("group id", "settlement");
        assert_eq!(
            params.to_uri("kafka"),
            Err(EndpointError::InvalidPropertyKey("group id".to_string()))
        );
    }

    #[test]
    fn url_replaces_previous_value() -> Result<(), EndpointError> {
        let mut params = EndpointParams::new();
        params.url("orders");
        params.url("settlements");
        let uri = params.to_uri("kafka")?;
        assert_eq!(uri.path(), "settlements");
        Ok(())
    }
}
