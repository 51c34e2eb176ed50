// @generated by wireroute-gen from catalog/components.json. DO NOT EDIT.
// Component: kafka (Kafka Messaging)

//! Sends and receives messages through Apache Kafka topics.

use wireroute_endpoint::EndpointBuilder;
use wireroute_endpoint::EndpointParams;

/// Fluent endpoint builder for the `kafka` component.
///
/// Sends and receives messages through Apache Kafka topics.
#[derive(Debug, Clone)]
pub struct KafkaEndpointBuilder {
    /// Topic name produced to or consumed from.
    topic: String,
    /// Shared parameter sink collecting the configured properties.
    params: EndpointParams,
}

impl KafkaEndpointBuilder {
    /// Creates a builder from the required path segments.
    #[must_use]
    pub fn new(topic: impl Into<String>) -> Self {
        let mut builder = Self {
            topic: topic.into(),
            params: EndpointParams::new(),
        };
        builder.rebuild();
        builder
    }

    /// Topic name produced to or consumed from.
    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self.rebuild();
        self
    }

    /// Position to start from when no initial offset exists.
    ///
    /// Accepted values: `latest`, `earliest`, `none`.
    /// Default: `latest`.
    #[must_use]
    pub fn auto_offset_reset(mut self, auto_offset_reset: impl Into<String>) -> Self {
        self.params.property("autoOffsetReset", auto_offset_reset.into());
        self
    }

    /// Comma-separated host:port pairs for the initial brokers.
    #[must_use]
    pub fn brokers(mut self, brokers: impl Into<String>) -> Self {
        self.params.property("brokers", brokers.into());
        self
    }

    /// Client id recorded in server-side request logs.
    #[must_use]
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.params.property("clientId", client_id.into());
        self
    }

    /// Compression codec applied to produced record batches.
    ///
    /// Accepted values: `none`, `gzip`, `snappy`, `lz4`, `zstd`.
    /// Default: `none`.
    #[must_use]
    pub fn compression_codec(mut self, compression_codec: impl Into<String>) -> Self {
        self.params.property("compressionCodec", compression_codec.into());
        self
    }

    /// Number of consumers connected to the brokers.
    ///
    /// Default: `1`.
    #[must_use]
    pub fn consumers_count(mut self, consumers_count: i64) -> Self {
        self.params.property("consumersCount", consumers_count);
        self
    }

    /// Consumer group this consumer belongs to.
    #[must_use]
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.params.property("groupId", group_id.into());
        self
    }

    /// Maximum records returned by a single poll.
    ///
    /// Default: `500`.
    #[must_use]
    pub fn max_poll_records(mut self, max_poll_records: i64) -> Self {
        self.params.property("maxPollRecords", max_poll_records);
        self
    }

    /// Time the broker may take to acknowledge a request.
    ///
    /// Default: `30000`.
    #[must_use]
    pub fn request_timeout_ms(mut self, request_timeout_ms: i64) -> Self {
        self.params.property("requestTimeoutMs", request_timeout_ms);
        self
    }

    /// SASL mechanism used for broker authentication.
    ///
    /// Default: `GSSAPI`.
    #[must_use]
    pub fn sasl_mechanism(mut self, sasl_mechanism: impl Into<String>) -> Self {
        self.params.property("saslMechanism", sasl_mechanism.into());
        self
    }

    /// Protocol used to communicate with the brokers.
    ///
    /// Default: `PLAINTEXT`.
    #[must_use]
    pub fn security_protocol(mut self, security_protocol: impl Into<String>) -> Self {
        self.params.property("securityProtocol", security_protocol.into());
        self
    }

    /// Store password for the SSL keystore.
    ///
    /// This value is a credential.
    #[must_use]
    pub fn ssl_keystore_password(mut self, ssl_keystore_password: impl Into<String>) -> Self {
        self.params.property("sslKeystorePassword", ssl_keystore_password.into());
        self
    }

    /// Block the caller until the send completes.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn synchronous(mut self, synchronous: bool) -> Self {
        self.params.property("synchronous", synchronous);
        self
    }

    /// Rebuilds the URL portion from the path segments.
    fn rebuild(&mut self) {
        let mut url = String::new();
        url.push_str(&self.topic);
        self.params.url(url);
    }
}

impl EndpointBuilder for KafkaEndpointBuilder {
    fn scheme(&self) -> &'static str {
        "kafka"
    }

    fn params(&self) -> &EndpointParams {
        &self.params
    }
}
