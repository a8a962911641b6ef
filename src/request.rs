use serde::Serialize;

use crate::endpoints::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::Method;
use crate::query::QueryParams;

/// A logical API request: verb, relative path, query and optional JSON body
///
/// Built by the typed client methods, or by hand for endpoints the client
/// does not wrap and then sent with [`Client::execute_raw`](crate::Client::execute_raw).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<serde_json::Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    #[must_use]
    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Attach a JSON body
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body).map_err(ApiError::Encode)?);
        Ok(self)
    }

    /// Path plus encoded query string, as sent after the base URL
    pub fn path_and_query(&self) -> String {
        if self.query.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.query.to_query_string())
        }
    }
}

impl From<Endpoint<'_>> for ApiRequest {
    fn from(endpoint: Endpoint<'_>) -> Self {
        Self::new(endpoint.method(), endpoint.path())
    }
}
