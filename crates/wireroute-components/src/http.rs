// @generated by wireroute-gen from catalog/components.json. DO NOT EDIT.
// Component: http (HTTP Client)

//! Calls external HTTP services from an endpoint URI.

use wireroute_endpoint::EndpointBuilder;
use wireroute_endpoint::EndpointParams;

/// Fluent endpoint builder for the `http` component.
///
/// Calls external HTTP services from an endpoint URI.
#[derive(Debug, Clone)]
pub struct HttpEndpointBuilder {
    /// Hostname of the HTTP server to call.
    host: String,
    /// Port of the HTTP server to call.
    port: Option<i64>,
    /// Resource path appended to the host and port.
    resource_path: Option<String>,
    /// Shared parameter sink collecting the configured properties.
    params: EndpointParams,
}

impl HttpEndpointBuilder {
    /// Creates a builder from the required path segments.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        let mut builder = Self {
            host: host.into(),
            port: None,
            resource_path: None,
            params: EndpointParams::new(),
        };
        builder.rebuild();
        builder
    }

    /// Hostname of the HTTP server to call.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self.rebuild();
        self
    }

    /// Port of the HTTP server to call.
    #[must_use]
    pub fn port(mut self, port: i64) -> Self {
        self.port = Some(port);
        self.rebuild();
        self
    }

    /// Resource path appended to the host and port.
    #[must_use]
    pub fn resource_path(mut self, resource_path: impl Into<String>) -> Self {
        self.resource_path = Some(resource_path.into());
        self.rebuild();
        self
    }

    /// Password for basic authentication.
    ///
    /// This value is a credential.
    #[must_use]
    pub fn auth_password(mut self, auth_password: impl Into<String>) -> Self {
        self.params.property("authPassword", auth_password.into());
        self
    }

    /// Username for basic authentication.
    #[must_use]
    pub fn auth_username(mut self, auth_username: impl Into<String>) -> Self {
        self.params.property("authUsername", auth_username.into());
        self
    }

    /// Act as a transparent proxy, forwarding the incoming request URI.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn bridge_endpoint(mut self, bridge_endpoint: bool) -> Self {
        self.params.property("bridgeEndpoint", bridge_endpoint);
        self
    }

    /// Connection establishment timeout in milliseconds.
    ///
    /// Default: `30000`.
    #[must_use]
    pub fn connect_timeout(mut self, connect_timeout: i64) -> Self {
        self.params.property("connectTimeout", connect_timeout);
        self
    }

    /// Follow HTTP redirect responses automatically.
    ///
    /// Default: `false`.
    #[must_use]
    pub fn follow_redirects(mut self, follow_redirects: bool) -> Self {
        self.params.property("followRedirects", follow_redirects);
        self
    }

    /// HTTP method to use for the request.
    ///
    /// Accepted values: `GET`, `POST`, `PUT`, `DELETE`, `PATCH`, `HEAD`.
    #[must_use]
    pub fn http_method(mut self, http_method: impl Into<String>) -> Self {
        self.params.property("httpMethod", http_method.into());
        self
    }

    /// Maximum number of pooled connections.
    ///
    /// Default: `200`.
    #[must_use]
    pub fn max_total_connections(mut self, max_total_connections: i64) -> Self {
        self.params.property("maxTotalConnections", max_total_connections);
        self
    }

    /// Proxy hostname used for outbound requests.
    #[must_use]
    pub fn proxy_host(mut self, proxy_host: impl Into<String>) -> Self {
        self.params.property("proxyHost", proxy_host.into());
        self
    }

    /// Proxy port used for outbound requests.
    #[must_use]
    pub fn proxy_port(mut self, proxy_port: i64) -> Self {
        self.params.property("proxyPort", proxy_port);
        self
    }

    /// Socket read timeout in milliseconds.
    ///
    /// Default: `30000`.
    #[must_use]
    pub fn socket_timeout(mut self, socket_timeout: i64) -> Self {
        self.params.property("socketTimeout", socket_timeout);
        self
    }

    /// Raise an error for failed responses instead of passing them through.
    ///
    /// Default: `true`.
    #[must_use]
    pub fn throw_exception_on_failure(mut self, throw_exception_on_failure: bool) -> Self {
        self.params.property("throwExceptionOnFailure", throw_exception_on_failure);
        self
    }

    /// Rebuilds the URL portion from the path segments.
    fn rebuild(&mut self) {
        let mut url = String::new();
        url.push_str(&self.host);
        if let Some(port) = &self.port {
            url.push(':');
            url.push_str(&port.to_string());
        }
        if let Some(resource_path) = &self.resource_path {
            url.push('/');
            url.push_str(resource_path);
        }
        self.params.url(url);
    }
}

impl EndpointBuilder for HttpEndpointBuilder {
    fn scheme(&self) -> &'static str {
        "http"
    }

    fn params(&self) -> &EndpointParams {
        &self.params
    }
}
