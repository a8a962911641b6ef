//! Blocking client for the SE Ranking REST API
//!
//! Covers account balance, sites, keywords, keyword groups and position
//! tracking. Each method performs exactly one HTTP request and returns a typed
//! result; there are no retries, no caching and no pagination handling.
//!
//! ```no_run
//! use seranking::{Client, NewKeyword, QueryParams};
//!
//! let client = Client::new("your-api-token")?;
//! let balance = client.balance()?;
//! println!("{:?} {:?}", balance.value, balance.currency);
//!
//! for site in client.sites()? {
//!     let added = client.add_keyword(&site.id, NewKeyword::new("buy shoes").strict(true))?;
//!     println!("added {:?}", added.ids);
//!
//!     let positions = client.site_positions(&site.id, &QueryParams::new())?;
//!     println!("{} engines", positions.len());
//! }
//! # Ok::<(), seranking::ApiError>(())
//! ```

pub mod client;
pub mod config;
mod de;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod models;
pub mod query;
pub mod request;
pub mod responses;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use endpoints::Endpoint;
pub use error::{ApiError, Result, TransportError};
pub use http::{HttpRequest, HttpResponse, Method, Transport, UreqTransport};
pub use models::{KeywordUpdate, NewKeyword, NewKeywordGroup};
pub use query::QueryParams;
pub use request::ApiRequest;
pub use responses::{
    AddedKeywords, ApiStatus, Balance, CheckDate, CreatedGroup, EnginePositions, Keyword,
    KeywordGroup, KeywordPositions, Position, RecheckResult, Site, SiteEngineChart,
    SiteEngineStat, SiteSearchEngine,
};
