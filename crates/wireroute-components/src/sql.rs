// @generated by wireroute-gen from catalog/components.json. DO NOT EDIT.
// Component: sql (SQL Database)

//! Executes SQL queries against a configured data source.

use wireroute_endpoint::EndpointBuilder;
use wireroute_endpoint::EndpointParams;

/// Fluent endpoint builder for the `sql` component.
///
/// Executes SQL queries against a configured data source.
#[derive(Debug, Clone)]
pub struct SqlEndpointBuilder {
    /// SQL statement executed by this endpoint.
    query: String,
    /// Shared parameter sink collecting the configured properties.
    params: EndpointParams,
}

impl SqlEndpointBuilder {
    /// Creates a builder from the required path segments.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        let mut builder = Self {
            query: query.into(),
            params: EndpointParams::new(),
        };
        builder.rebuild();
        builder
    }

    /// SQL statement executed by this endpoint.
    #[must_use]
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self.rebuild();
        self
    }

    /// Invoke the statement populator even when there are no parameters.
    ///
    /// Default: `false`.
    #[deprecated(note = "deprecated in the component catalog")]
    #[must_use]
    pub fn always_populate_statement(mut self, always_populate_statement: bool) -> Self {
        self.params.property("alwaysPopulateStatement", always_populate_statement);
        self
    }

    /// Execute the statement in batch mode over an iterable body.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn batch(mut self, batch: bool) -> Self {
        self.params.property("batch", batch);
        self
    }

    /// Reference to the data source bean providing connections.
    #[must_use]
    pub fn data_source(mut self, data_source: impl Into<String>) -> Self {
        self.params.property("dataSource", data_source.into());
        self
    }

    /// Expected update count for update statements, -1 to disable the check.
    ///
    /// Default: `-1`.
    #[must_use]
    pub fn expected_update_count(mut self, expected_update_count: i64) -> Self {
        self.params.property("expectedUpdateCount", expected_update_count);
        self
    }

    /// Maximum number of rows processed per poll, 0 for no limit.
    ///
    /// Default: `0`.
    #[must_use]
    pub fn max_messages_per_poll(mut self, max_messages_per_poll: i64) -> Self {
        self.params.property("maxMessagesPerPoll", max_messages_per_poll);
        self
    }

    /// Shape of the result produced for select statements.
    ///
    /// Accepted values: `SelectList`, `SelectOne`, `StreamList`.
    /// Default: `SelectList`.
    #[must_use]
    pub fn output_type(mut self, output_type: impl Into<String>) -> Self {
        self.params.property("outputType", output_type.into());
        self
    }

    /// Separator used when the body is a flat string of parameters.
    ///
    /// Default: `,`.
    #[must_use]
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.params.property("separator", separator.into());
        self
    }

    /// Run polls inside a transaction.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn transacted(mut self, transacted: bool) -> Self {
        self.params.property("transacted", transacted);
        self
    }

    /// Rebuilds the URL portion from the path segments.
    fn rebuild(&mut self) {
        let mut url = String::new();
        url.push_str(&self.query);
        self.params.url(url);
    }
}

impl EndpointBuilder for SqlEndpointBuilder {
    fn scheme(&self) -> &'static str {
        "sql"
    }

    fn params(&self) -> &EndpointParams {
        &self.params
    }
}
