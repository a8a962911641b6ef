//! SE Ranking API client
//!
//! Every operation maps to exactly one HTTP request: build the URL from the
//! endpoint template, attach the token header and an optional JSON body, send
//! it through the [`Transport`], then decode the body.

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::de;
use crate::endpoints::Endpoint;
use crate::error::{ApiError, Result};
use crate::http::{HttpRequest, Transport, UreqTransport};
use crate::models::{
    KeywordUpdate, MoveKeywordsRequest, NewKeyword, NewKeywordGroup, RecheckRequest,
};
use crate::query::QueryParams;
use crate::request::ApiRequest;
use crate::responses::{
    AddedKeywords, ApiStatus, Balance, CheckDate, CreatedGroup, EnginePositions, Keyword,
    KeywordGroup, RecheckResult, Site, SiteEngineChart, SiteEngineStat, SiteSearchEngine,
};

/// Blocking client for the SE Ranking API
///
/// Holds the API token for its whole lifetime. The token is sent as
/// `Authorization: Token <token>` and never logged or printed.
pub struct Client<T = UreqTransport> {
    token: String,
    config: ClientConfig,
    transport: T,
}

impl Client<UreqTransport> {
    /// Create a client for the production API with default settings
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        let transport = UreqTransport::new(&config);
        Self::with_transport(token, config, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Create a client that sends requests through a custom transport
    pub fn with_transport(
        token: impl Into<String>,
        config: ClientConfig,
        transport: T,
    ) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ApiError::InvalidConfig("token cannot be empty".to_string()));
        }
        config.validate()?;

        debug!(base_url = %config.base(), "creating SE Ranking client");
        Ok(Self {
            token,
            config,
            transport,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    // ==================== Account ====================

    /// Remaining account balance
    pub fn balance(&self) -> Result<Balance> {
        self.send(Endpoint::Balance.into())
    }

    /// Remaining account balance, including landing-page tracking
    pub fn balance_with_landing_pages(&self) -> Result<Balance> {
        let request = ApiRequest::from(Endpoint::Balance)
            .with_query(QueryParams::new().with("with_landing_pages", "1"));
        self.send(request)
    }

    // ==================== Sites ====================

    pub fn sites(&self) -> Result<Vec<Site>> {
        self.send(Endpoint::Sites.into())
    }

    pub fn site_keywords(&self, site_id: &str) -> Result<Vec<Keyword>> {
        self.send(Endpoint::SiteKeywords { site_id }.into())
    }

    /// Summary statistics per search engine
    pub fn site_stat(&self, site_id: &str) -> Result<Vec<SiteEngineStat>> {
        self.send(Endpoint::SiteStat { site_id }.into())
    }

    pub fn site_chart(&self, site_id: &str) -> Result<Vec<SiteEngineChart>> {
        self.send(Endpoint::SiteChart { site_id }.into())
    }

    /// Dates on which positions were checked
    pub fn site_check_dates(&self, site_id: &str) -> Result<Vec<CheckDate>> {
        self.send(Endpoint::SiteCheckDates { site_id }.into())
    }

    pub fn site_search_engines(&self, site_id: &str) -> Result<Vec<SiteSearchEngine>> {
        self.send(Endpoint::SiteSearchEngines { site_id }.into())
    }

    /// Keyword positions; `params` are sent as-is (date range, engine filter, ...)
    pub fn site_positions(
        &self,
        site_id: &str,
        params: &QueryParams,
    ) -> Result<Vec<EnginePositions>> {
        let request =
            ApiRequest::from(Endpoint::SitePositions { site_id }).with_query(params.clone());
        self.send(request)
    }

    /// Queue a ranking refresh for the given keywords, or for all of them when empty
    pub fn recheck<S: AsRef<str>>(&self, site_id: &str, keywords: &[S]) -> Result<RecheckResult> {
        let body = RecheckRequest {
            keywords: keywords.iter().map(|k| k.as_ref()).collect(),
        };
        let request = ApiRequest::from(Endpoint::SiteRecheck { site_id }).with_json(&body)?;
        self.send(request)
    }

    // ==================== Keywords ====================

    /// Add one keyword; sent as a single-element list
    pub fn add_keyword(&self, site_id: &str, keyword: NewKeyword) -> Result<AddedKeywords> {
        self.add_keywords(site_id, std::slice::from_ref(&keyword))
    }

    pub fn add_keywords(&self, site_id: &str, keywords: &[NewKeyword]) -> Result<AddedKeywords> {
        let request = ApiRequest::from(Endpoint::AddKeywords { site_id }).with_json(keywords)?;
        self.send(request)
    }

    /// Partially update a keyword; only the fields set on `update` are sent
    pub fn change_keyword(
        &self,
        site_id: &str,
        keyword_id: &str,
        update: &KeywordUpdate,
    ) -> Result<ApiStatus> {
        let request = ApiRequest::from(Endpoint::ChangeKeyword {
            site_id,
            keyword_id,
        })
        .with_json(update)?;
        self.send(request)
    }

    /// Delete keywords by ID; IDs go in the query as repeated `keywords_ids[]`
    ///
    /// The brackets are percent-encoded on the wire (`keywords_ids%5B%5D=1`).
    pub fn delete_keywords<S: AsRef<str>>(
        &self,
        site_id: &str,
        keyword_ids: &[S],
    ) -> Result<ApiStatus> {
        let request = ApiRequest::from(Endpoint::DeleteKeywords { site_id })
            .with_query(QueryParams::new().with_list("keywords_ids[]", keyword_ids));
        self.send(request)
    }

    // ==================== Keyword groups ====================

    pub fn create_keyword_group(&self, group: &NewKeywordGroup) -> Result<CreatedGroup> {
        let request = ApiRequest::from(Endpoint::CreateKeywordGroup).with_json(group)?;
        self.send(request)
    }

    /// Keyword group lookup; the API answers with one group or a list
    pub fn keyword_group(&self, group_id: &str) -> Result<Vec<KeywordGroup>> {
        let value: Value = self.send(Endpoint::KeywordGroup { group_id }.into())?;
        de::one_or_many(value).map_err(ApiError::Decode)
    }

    pub fn move_keywords_to_group<S: AsRef<str>>(
        &self,
        group_id: &str,
        keyword_ids: &[S],
    ) -> Result<ApiStatus> {
        let body = MoveKeywordsRequest {
            keywords_ids: keyword_ids.iter().map(|k| k.as_ref()).collect(),
        };
        let request =
            ApiRequest::from(Endpoint::MoveKeywordsToGroup { group_id }).with_json(&body)?;
        self.send(request)
    }

    // ==================== Raw access ====================

    /// Send any request and return the undecoded JSON value
    pub fn execute_raw(&self, request: ApiRequest) -> Result<Value> {
        self.send(request)
    }

    /// Resolve a logical request into the wire request the transport sends
    pub fn prepare(&self, request: &ApiRequest) -> Result<HttpRequest> {
        let mut headers = vec![
            ("Authorization".to_string(), format!("Token {}", self.token)),
            ("Accept".to_string(), "application/json".to_string()),
            ("User-Agent".to_string(), self.config.user_agent.clone()),
        ];

        let body = match &request.body {
            Some(json) => {
                headers.push(("Content-Type".to_string(), "application/json".to_string()));
                Some(serde_json::to_string(json).map_err(ApiError::Encode)?)
            }
            None => None,
        };

        Ok(HttpRequest {
            method: request.method,
            url: format!("{}/{}", self.config.base(), request.path_and_query()),
            headers,
            body,
        })
    }

    fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let http_request = self.prepare(&request)?;
        debug!(
            method = %request.method,
            path = %request.path,
            query_params = request.query.len(),
            "sending request"
        );

        let response = self.transport.execute(&http_request).inspect_err(|e| {
            warn!(method = %request.method, path = %request.path, error = %e, "request failed");
        })?;
        debug!(status = response.status, bytes = response.body.len(), "received response");

        if self.config.error_for_status && !response.is_success() {
            warn!(status = response.status, path = %request.path, "API returned an error status");
            return Err(ApiError::Status {
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            warn!(path = %request.path, error = %e, "failed to decode response");
            ApiError::Decode(e)
        })
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("token", &"<redacted>")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
