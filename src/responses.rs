//! Typed results of the API endpoints
//!
//! The remote service owns these schemas. Each struct types the fields the
//! client knows about and keeps everything else in `extra`, so new server-side
//! fields never break decoding.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::de;

/// Unknown fields of a response object
pub type Extra = Map<String, Value>;

/// `GET account/balance`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Balance {
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub value: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One entry of `GET sites`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Site {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    /// Domain or URL of the site
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One entry of `GET sites/{site}/keywords`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Keyword {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub group_id: Option<String>,
    /// Target URL
    #[serde(default)]
    pub link: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `POST sites/{site}/keywords`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AddedKeywords {
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub added: Option<u64>,
    #[serde(default, deserialize_with = "de::id_list")]
    pub ids: Vec<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Acknowledgement returned by update, delete and move operations
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ApiStatus {
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Per-search-engine summary from `GET sites/{site}/stat`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteEngineStat {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub site_engine_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub visibility: Option<f64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub avg_pos: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Per-search-engine series from `GET sites/{site}/chart`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteEngineChart {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub site_engine_id: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One check date from `GET sites/{site}/check-dates`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CheckDate {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// One search engine tracked for a site, `GET sites/{site}/search-engines`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SiteSearchEngine {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub site_engine_id: Option<String>,
    #[serde(default, deserialize_with = "de::opt_id")]
    pub search_engine_id: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub lang_code: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `POST sites/{site}/recheck`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RecheckResult {
    /// Number of keywords queued for a recheck
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub total: Option<u64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Positions of all keywords for one search engine, `GET sites/{site}/positions`
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct EnginePositions {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub site_engine_id: Option<String>,
    #[serde(default)]
    pub keywords: Vec<KeywordPositions>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Ranking history of a single keyword
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct KeywordPositions {
    #[serde(default, deserialize_with = "de::opt_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub positions: Vec<Position>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Position of a keyword on one check date
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Position {
    #[serde(default)]
    pub date: Option<String>,
    /// Rank in the results; `None` or 0 when the site was not found
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub pos: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_f64")]
    pub change: Option<f64>,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `POST keyword-groups`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreatedGroup {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(flatten)]
    pub extra: Extra,
}

/// `GET keyword-groups/{group}`
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct KeywordGroup {
    #[serde(deserialize_with = "de::id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}
