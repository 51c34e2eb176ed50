// @generated by wireroute-gen from catalog/components.json. DO NOT EDIT.

//! Generated endpoint builders for the Wireroute component catalog.
//!
//! Each module holds one component's fluent builder. Builders forward
//! typed setters into the shared `wireroute-endpoint` sink; call `to_uri`
//! from `wireroute_endpoint::EndpointBuilder` to assemble the endpoint
//! URI.

pub mod aws_s3;
pub mod file;
pub mod http;
pub mod kafka;
pub mod sql;
pub mod timer;

pub use aws_s3::AwsS3EndpointBuilder;
pub use file::FileEndpointBuilder;
pub use http::HttpEndpointBuilder;
pub use kafka::KafkaEndpointBuilder;
pub use sql::SqlEndpointBuilder;
pub use timer::TimerEndpointBuilder;
