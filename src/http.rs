//! HTTP transport for API requests
//!
//! The client talks to the network only through the [`Transport`] trait.
//! [`UreqTransport`] is the default implementation, a ureq agent with a
//! global timeout.

use std::fmt;

use crate::config::ClientConfig;
use crate::error::TransportError;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved request, ready to go on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including the encoded query string
    pub url: String,
    pub headers: Vec<(String, String)>,
    /// UTF-8 JSON body for POST and PATCH
    pub body: Option<String>,
}

impl HttpRequest {
    /// First header value stored under `name` (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Raw response: status code and body bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes one blocking HTTP request
///
/// Implementations must not interpret the status code; that is the client's
/// policy. Anything that prevents a response from arriving is a
/// [`TransportError`].
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Transport backed by a ureq agent
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    max_body_bytes: u64,
}

impl UreqTransport {
    /// Build an agent with the configured global timeout
    ///
    /// Status codes are never turned into errors by ureq itself, so 4xx/5xx
    /// bodies reach the client's status policy.
    pub fn new(config: &ClientConfig) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self {
            agent,
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Wrap an agent the caller configured; response bodies are read without a size limit
    pub fn with_agent(agent: ureq::Agent) -> Self {
        Self {
            agent,
            max_body_bytes: u64::MAX,
        }
    }

    pub fn agent(&self) -> &ureq::Agent {
        &self.agent
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new(&ClientConfig::default())
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        let url = request.url.as_str();

        // The response and its body reader are dropped when this returns
        let mut response = match request.method {
            Method::Get => with_headers(self.agent.get(url), &request.headers).call()?,
            Method::Delete => with_headers(self.agent.delete(url), &request.headers).call()?,
            Method::Post => {
                let builder = with_headers(self.agent.post(url), &request.headers);
                builder.send(request.body.clone().unwrap_or_default())?
            }
            Method::Patch => {
                let builder = with_headers(self.agent.patch(url), &request.headers);
                builder.send(request.body.clone().unwrap_or_default())?
            }
        };

        let status = response.status().as_u16();
        // ureq caps read_to_vec at 10 MiB unless told otherwise
        let body = response
            .body_mut()
            .with_config()
            .limit(self.max_body_bytes)
            .read_to_vec()?;

        Ok(HttpResponse { status, body })
    }
}

fn with_headers<B>(
    mut builder: ureq::RequestBuilder<B>,
    headers: &[(String, String)],
) -> ureq::RequestBuilder<B> {
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_str());
    }
    builder
}
