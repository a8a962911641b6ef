//! Request payloads sent to the API

use serde::{Serialize, Serializer};

/// A keyword to start tracking on a site
///
/// `is_strict` goes on the wire as `0`/`1`; unset group and target URL are
/// left out of the payload.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewKeyword {
    pub keyword: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    #[serde(serialize_with = "bool_as_int")]
    pub is_strict: bool,
}

impl NewKeyword {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            group_id: None,
            target_url: None,
            is_strict: false,
        }
    }

    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = Some(group_id.into());
        self
    }

    pub fn with_target_url(mut self, target_url: impl Into<String>) -> Self {
        self.target_url = Some(target_url.into());
        self
    }

    /// Exact-match tracking instead of loose matching
    pub fn strict(mut self, is_strict: bool) -> Self {
        self.is_strict = is_strict;
        self
    }
}

/// Partial update of a tracked keyword
///
/// Fields left as `None` are not sent and stay untouched server-side.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct KeywordUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
}

impl KeywordUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from plain strings, treating an empty string as "leave unchanged"
    pub fn from_fields(keyword: &str, target_url: &str) -> Self {
        Self {
            keyword: non_empty(keyword),
            target_url: non_empty(target_url),
        }
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    pub fn with_target_url(mut self, target_url: impl Into<String>) -> Self {
        self.target_url = Some(target_url.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.keyword.is_none() && self.target_url.is_none()
    }
}

/// A keyword group to create under a site
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NewKeywordGroup {
    pub name: String,
    pub site_id: String,
}

impl NewKeywordGroup {
    pub fn new(name: impl Into<String>, site_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            site_id: site_id.into(),
        }
    }
}

/// Body of `POST sites/{site}/recheck`; an empty list rechecks everything
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub(crate) struct RecheckRequest<'a> {
    pub keywords: Vec<&'a str>,
}

/// Body of `POST keyword-groups/{group}/keywords`
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub(crate) struct MoveKeywordsRequest<'a> {
    pub keywords_ids: Vec<&'a str>,
}

fn bool_as_int<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*value))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}
