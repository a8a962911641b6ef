//! Endpoint descriptors: HTTP verb and path template per remote operation

use crate::http::Method;

const BALANCE: &str = "account/balance";
const SITES: &str = "sites";
const KEYWORD_GROUPS: &str = "keyword-groups";

/// One remote endpoint with its identifiers filled in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    Balance,
    Sites,
    SiteKeywords { site_id: &'a str },
    AddKeywords { site_id: &'a str },
    ChangeKeyword { site_id: &'a str, keyword_id: &'a str },
    DeleteKeywords { site_id: &'a str },
    SiteStat { site_id: &'a str },
    SiteChart { site_id: &'a str },
    SiteCheckDates { site_id: &'a str },
    SiteSearchEngines { site_id: &'a str },
    SiteRecheck { site_id: &'a str },
    SitePositions { site_id: &'a str },
    CreateKeywordGroup,
    KeywordGroup { group_id: &'a str },
    MoveKeywordsToGroup { group_id: &'a str },
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Self::AddKeywords { .. }
            | Self::SiteRecheck { .. }
            | Self::CreateKeywordGroup
            | Self::MoveKeywordsToGroup { .. } => Method::Post,
            Self::ChangeKeyword { .. } => Method::Patch,
            Self::DeleteKeywords { .. } => Method::Delete,
            _ => Method::Get,
        }
    }

    /// Path relative to the base URL, identifiers percent-encoded as segments
    pub fn path(&self) -> String {
        match *self {
            Self::Balance => BALANCE.to_string(),
            Self::Sites => SITES.to_string(),
            Self::SiteKeywords { site_id }
            | Self::AddKeywords { site_id }
            | Self::DeleteKeywords { site_id } => site_path(site_id, "keywords"),
            Self::ChangeKeyword {
                site_id,
                keyword_id,
            } => format!("{}/{}", site_path(site_id, "keywords"), segment(keyword_id)),
            Self::SiteStat { site_id } => site_path(site_id, "stat"),
            Self::SiteChart { site_id } => site_path(site_id, "chart"),
            Self::SiteCheckDates { site_id } => site_path(site_id, "check-dates"),
            Self::SiteSearchEngines { site_id } => site_path(site_id, "search-engines"),
            Self::SiteRecheck { site_id } => site_path(site_id, "recheck"),
            Self::SitePositions { site_id } => site_path(site_id, "positions"),
            Self::CreateKeywordGroup => KEYWORD_GROUPS.to_string(),
            Self::KeywordGroup { group_id } => format!("{}/{}", KEYWORD_GROUPS, segment(group_id)),
            Self::MoveKeywordsToGroup { group_id } => {
                format!("{}/{}/keywords", KEYWORD_GROUPS, segment(group_id))
            }
        }
    }
}

fn site_path(site_id: &str, resource: &str) -> String {
    format!("{}/{}/{}", SITES, segment(site_id), resource)
}

fn segment(id: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(id)
}
