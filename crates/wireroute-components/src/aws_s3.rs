// @generated by wireroute-gen from catalog/components.json. DO NOT EDIT.
// Component: aws-s3 (AWS S3 Storage)

//! Stores and retrieves objects from AWS S3 buckets.

use wireroute_endpoint::EndpointBuilder;
use wireroute_endpoint::EndpointParams;

/// Fluent endpoint builder for the `aws-s3` component.
///
/// Stores and retrieves objects from AWS S3 buckets.
#[derive(Debug, Clone)]
pub struct AwsS3EndpointBuilder {
    /// Bucket name or ARN addressed by this endpoint.
    bucket_name: String,
    /// Shared parameter sink collecting the configured properties.
    params: EndpointParams,
}

impl AwsS3EndpointBuilder {
    /// Creates a builder from the required path segments.
    #[must_use]
    pub fn new(bucket_name: impl Into<String>) -> Self {
        let mut builder = Self {
            bucket_name: bucket_name.into(),
            params: EndpointParams::new(),
        };
        builder.rebuild();
        builder
    }

    /// Bucket name or ARN addressed by this endpoint.
    #[must_use]
    pub fn bucket_name(mut self, bucket_name: impl Into<String>) -> Self {
        self.bucket_name = bucket_name.into();
        self.rebuild();
        self
    }

    /// Amazon AWS access key.
    ///
    /// This value is a credential.
    #[must_use]
    pub fn access_key(mut self, access_key: impl Into<String>) -> Self {
        self.params.property("accessKey", access_key.into());
        self
    }

    /// Create the bucket when it does not already exist.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn auto_create_bucket(mut self, auto_create_bucket: bool) -> Self {
        self.params.property("autoCreateBucket", auto_create_bucket);
        self
    }

    /// Delete objects from the bucket after they have been retrieved.
    ///
    /// Default: `true`.
    #[must_use]
    pub fn delete_after_read(mut self, delete_after_read: bool) -> Self {
        self.params.property("deleteAfterRead", delete_after_read);
        self
    }

    /// Delimiter used when listing objects from the bucket.
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.params.property("delimiter", delimiter.into());
        self
    }

    /// Maximum number of objects fetched per poll.
    ///
    /// Default: `10`.
    #[must_use]
    pub fn max_messages_per_poll(mut self, max_messages_per_poll: i64) -> Self {
        self.params.property("maxMessagesPerPoll", max_messages_per_poll);
        self
    }

    /// Use multipart uploads for objects larger than partSize.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn multi_part_upload(mut self, multi_part_upload: bool) -> Self {
        self.params.property("multiPartUpload", multi_part_upload);
        self
    }

    /// Replace the default AWS endpoint with uriEndpointOverride.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn override_endpoint(mut self, override_endpoint: bool) -> Self {
        self.params.property("overrideEndpoint", override_endpoint);
        self
    }

    /// Part size in bytes used for multipart uploads.
    ///
    /// Default: `26214400`.
    #[must_use]
    pub fn part_size(mut self, part_size: i64) -> Self {
        self.params.property("partSize", part_size);
        self
    }

    /// Only consume objects whose key starts with this prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.params.property("prefix", prefix.into());
        self
    }

    /// Region in which the S3 client must operate.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.params.property("region", region.into());
        self
    }

    /// Amazon AWS secret key.
    ///
    /// This value is a credential.
    #[must_use]
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.params.property("secretKey", secret_key.into());
        self
    }

    /// Endpoint URI used when overrideEndpoint is enabled.
    #[must_use]
    pub fn uri_endpoint_override(mut self, uri_endpoint_override: impl Into<String>) -> Self {
        self.params.property("uriEndpointOverride", uri_endpoint_override.into());
        self
    }

    /// Rebuilds the URL portion from the path segments.
    fn rebuild(&mut self) {
        let mut url = String::new();
        url.push_str(&self.bucket_name);
        self.params.url(url);
    }
}

impl EndpointBuilder for AwsS3EndpointBuilder {
    fn scheme(&self) -> &'static str {
        "aws-s3"
    }

    fn params(&self) -> &EndpointParams {
        &self.params
    }
}
