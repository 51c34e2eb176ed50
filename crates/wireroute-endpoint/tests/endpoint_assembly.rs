// crates/wireroute-endpoint/tests/endpoint_assembly.rs
// ============================================================================
// Module: Endpoint Assembly Tests
// Description: Integration tests for sink behavior and URI rendering.
// Purpose: Validate deterministic assembly across representative flows.
// Dependencies: wireroute-endpoint
// ============================================================================

//! ## Overview
//! Integration tests exercising the sink as a generated builder would:
//! path rebuilds through `url`, typed property forwards, and deterministic
//! rendering of the assembled URI.

use wireroute_endpoint::EndpointBuilder;
use wireroute_endpoint::EndpointError;
use wireroute_endpoint::EndpointParams;

// ============================================================================
// SECTION: Test Helpers
// ============================================================================

/// Minimal stand-in for a generated builder over a single path field.
struct QueueBuilder {
    /// Destination queue name, the sole positional segment.
    queue: String,
    /// Shared parameter sink.
    params: EndpointParams,
}

impl QueueBuilder {
    fn new(queue: &str) -> Self {
        let mut builder = Self {
            queue: queue.to_string(),
            params: EndpointParams::new(),
        };
        builder.rebuild();
        builder
    }

    fn queue(mut self, queue: &str) -> Self {
        self.queue = queue.to_string();
        self.rebuild();
        self
    }

    fn transacted(mut self, value: bool) -> Self {
        self.params.property("transacted", value);
        self
    }

    fn rebuild(&mut self) {
        self.params.url(self.queue.clone());
    }
}

impl EndpointBuilder for QueueBuilder {
    fn scheme(&self) -> &'static str {
        "jms"
    }

    fn params(&self) -> &EndpointParams {
        &self.params
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn builder_trait_assembles_through_sink() -> Result<(), EndpointError> {
    let uri = QueueBuilder::new("inbound").transacted(true).to_uri()?;
    assert_eq!(uri.scheme(), "jms");
    assert_eq!(uri.path(), "inbound");
    assert_eq!(uri.to_string(), "jms:inbound?transacted=true");
    Ok(())
}

#[test]
fn path_setter_rebuilds_url_portion() -> Result<(), EndpointError> {
    let uri = QueueBuilder::new("inbound").queue("deadletter").to_uri()?;
    assert_eq!(uri.path(), "deadletter");
    Ok(())
}

#[test]
fn typed_values_render_wire_form() -> Result<(), EndpointError> {
    let mut params = EndpointParams::new();
    params.url("select * from audit");
    params.property("batch", true);
    params.property("maxRows", 250);
    params.property("samplingRate", 0.25);
    params.property("dataSource", "reporting");
    let uri = params.to_uri("sql")?;
    assert_eq!(
        uri.query_pairs(),
        [
            ("batch".to_string(), "true".to_string()),
            ("dataSource".to_string(), "reporting".to_string()),
            ("maxRows".to_string(), "250".to_string()),
            ("samplingRate".to_string(), "0.25".to_string()),
        ]
    );
    Ok(())
}

#[test]
fn rendering_is_insertion_order_independent() -> Result<(), EndpointError> {
    let mut first = EndpointParams::new();
    first.url("heartbeat");
    first.property("period", 5000);
    first.property("delay", 250);

    let mut second = EndpointParams::new();
    second.url("heartbeat");
    second.property("delay", 250);
    second.property("period", 5000);

    assert_eq!(first.to_uri("timer")?, second.to_uri("timer")?);
    Ok(())
}

#[test]
fn properties_accessor_preserves_insertion_order() {
    let mut params = EndpointParams::new();
    params.property("zeta", 1);
    params.property("alpha", 2);
    assert_eq!(
        params.properties(),
        [("zeta".to_string(), "1".to_string()), ("alpha".to_string(), "2".to_string())]
    );
}
