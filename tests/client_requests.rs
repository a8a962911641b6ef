//! Request building: verbs, paths, headers and bodies for every operation

mod common;

use chrono::NaiveDate;
use common::{BASE_URL, TOKEN, TestContext};
use serde_json::json;
use seranking::{KeywordUpdate, Method, NewKeyword, NewKeywordGroup, QueryParams};

// ==================== Headers ====================

#[test]
fn test_every_request_carries_token_header() {
    let ctx = TestContext::new();
    let no_ids: [&str; 0] = [];

    ctx.transport.reply_json(200, r#"{"currency":"USD","value":1}"#);
    ctx.client.balance().expect("balance");
    ctx.transport.reply_json(200, "[]");
    ctx.client.sites().expect("sites");
    ctx.client
        .add_keyword("42", NewKeyword::new("buy shoes"))
        .expect("add keyword");
    ctx.client
        .change_keyword("42", "7", &KeywordUpdate::new())
        .expect("change keyword");
    ctx.client.delete_keywords("42", &["7"]).expect("delete");
    ctx.client.recheck("42", &no_ids).expect("recheck");

    let requests = ctx.transport.requests();
    assert_eq!(requests.len(), 6);
    for request in requests {
        assert_eq!(
            request.header("Authorization"),
            Some(format!("Token {}", TOKEN).as_str()),
            "{} {}",
            request.method,
            request.url
        );
    }
}

#[test]
fn test_json_content_type_only_with_body() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, r#"{"id":1}"#);
    ctx.client
        .create_keyword_group(&NewKeywordGroup::new("Brand", "42"))
        .expect("create group");
    ctx.transport.reply_json(200, "[]");
    ctx.client.site_check_dates("42").expect("check dates");

    let requests = ctx.transport.requests();
    assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
    assert_eq!(requests[1].header("Content-Type"), None);
    assert!(requests[1].body.is_none());
}

// ==================== Account & Sites ====================

#[test]
fn test_balance() {
    let ctx = TestContext::new();
    let balance = ctx.client.balance().expect("balance");

    let request = ctx.transport.only_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.url, format!("{}/account/balance", BASE_URL));
    assert!(request.body.is_none());
    assert_eq!(balance.value, None);
}

#[test]
fn test_balance_with_landing_pages() {
    let ctx = TestContext::new();
    ctx.client
        .balance_with_landing_pages()
        .expect("balance with landing pages");

    assert_eq!(ctx.sent_path(), "account/balance?with_landing_pages=1");
}

#[test]
fn test_sites_and_site_keywords_paths() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, "[]");
    ctx.transport.reply_json(200, "[]");

    ctx.client.sites().expect("sites");
    ctx.client.site_keywords("42").expect("site keywords");

    let urls: Vec<String> = ctx.transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            format!("{}/sites", BASE_URL),
            format!("{}/sites/42/keywords", BASE_URL),
        ]
    );
}

#[test]
fn test_site_report_paths() {
    let ctx = TestContext::new();
    for _ in 0..4 {
        ctx.transport.reply_json(200, "[]");
    }

    ctx.client.site_stat("42").expect("stat");
    ctx.client.site_chart("42").expect("chart");
    ctx.client.site_check_dates("42").expect("check dates");
    ctx.client.site_search_engines("42").expect("search engines");

    let requests = ctx.transport.requests();
    let paths: Vec<&str> = requests
        .iter()
        .map(|r| r.url.strip_prefix(BASE_URL).unwrap())
        .collect();
    assert_eq!(
        paths,
        vec![
            "/sites/42/stat",
            "/sites/42/chart",
            "/sites/42/check-dates",
            "/sites/42/search-engines",
        ]
    );
    assert!(requests.iter().all(|r| r.method == Method::Get));
}

// ==================== Keywords ====================

#[test]
fn test_add_keyword_sends_single_element_list() {
    let ctx = TestContext::new();
    let keyword = NewKeyword::new("buy shoes")
        .with_group("g1")
        .with_target_url("https://example.com")
        .strict(true);
    ctx.client.add_keyword("42", keyword).expect("add keyword");

    assert_eq!(ctx.transport.only_request().method, Method::Post);
    assert_eq!(ctx.sent_path(), "sites/42/keywords");
    assert_eq!(
        ctx.sent_json(),
        json!([{
            "keyword": "buy shoes",
            "group_id": "g1",
            "target_url": "https://example.com",
            "is_strict": 1
        }])
    );
}

#[test]
fn test_add_keyword_defaults_to_not_strict() {
    let ctx = TestContext::new();
    let keyword = NewKeyword::new("buy shoes")
        .with_group("g1")
        .with_target_url("https://example.com");
    ctx.client.add_keyword("42", keyword).expect("add keyword");

    assert_eq!(ctx.sent_json()[0]["is_strict"], json!(0));
}

#[test]
fn test_add_keywords_sends_list_unmodified() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, r#"{"added":2,"ids":[501,502]}"#);
    let keywords = vec![
        NewKeyword::new("red shoes").with_group("g1"),
        NewKeyword::new("blue shoes").strict(true),
    ];

    let added = ctx.client.add_keywords("42", &keywords).expect("add keywords");

    assert_eq!(
        ctx.sent_json(),
        json!([
            {"keyword": "red shoes", "group_id": "g1", "is_strict": 0},
            {"keyword": "blue shoes", "is_strict": 1}
        ])
    );
    assert_eq!(added.added, Some(2));
    assert_eq!(added.ids, vec!["501", "502"]);
}

#[test]
fn test_change_keyword_sends_only_target_url() {
    let ctx = TestContext::new();
    let update = KeywordUpdate::from_fields("", "https://new.example.com");
    ctx.client
        .change_keyword("42", "1001", &update)
        .expect("change keyword");

    assert_eq!(ctx.transport.only_request().method, Method::Patch);
    assert_eq!(ctx.sent_path(), "sites/42/keywords/1001");
    assert_eq!(ctx.sent_json(), json!({"target_url": "https://new.example.com"}));
}

#[test]
fn test_change_keyword_with_nothing_sends_empty_object() {
    let ctx = TestContext::new();
    ctx.client
        .change_keyword("42", "1001", &KeywordUpdate::from_fields("", ""))
        .expect("change keyword");

    assert_eq!(ctx.sent_json(), json!({}));
}

#[test]
fn test_delete_keywords_uses_repeated_query_params() {
    let ctx = TestContext::new();
    ctx.client
        .delete_keywords("42", &["1", "2"])
        .expect("delete keywords");

    let request = ctx.transport.only_request();
    assert_eq!(request.method, Method::Delete);
    assert!(request.body.is_none());
    assert_eq!(
        ctx.sent_path(),
        "sites/42/keywords?keywords_ids%5B%5D=1&keywords_ids%5B%5D=2"
    );

    let decoded = urlencoding::decode(&ctx.sent_path()).unwrap().into_owned();
    assert_eq!(
        decoded,
        "sites/42/keywords?keywords_ids[]=1&keywords_ids[]=2"
    );
}

// ==================== Positions & Recheck ====================

#[test]
fn test_recheck_without_keywords_sends_empty_list() {
    let ctx = TestContext::new();
    let no_keywords: [&str; 0] = [];
    ctx.client.recheck("42", &no_keywords).expect("recheck");

    assert_eq!(ctx.transport.only_request().method, Method::Post);
    assert_eq!(ctx.sent_path(), "sites/42/recheck");
    assert_eq!(ctx.sent_json(), json!({"keywords": []}));
}

#[test]
fn test_recheck_with_keywords() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, r#"{"total":1}"#);
    let result = ctx.client.recheck("42", &["kw1"]).expect("recheck");

    assert_eq!(ctx.sent_json(), json!({"keywords": ["kw1"]}));
    assert_eq!(result.total, Some(1));
}

#[test]
fn test_site_positions_without_params() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, "[]");
    ctx.client
        .site_positions("42", &QueryParams::new())
        .expect("positions");

    assert_eq!(ctx.sent_path(), "sites/42/positions");
}

#[test]
fn test_site_positions_passes_params_through() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, "[]");
    let params = QueryParams::new()
        .date_range(
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .with("site_engine_id", "7");
    ctx.client.site_positions("42", &params).expect("positions");

    assert_eq!(
        ctx.sent_path(),
        "sites/42/positions?date_from=2024-03-01&date_to=2024-03-31&site_engine_id=7"
    );
}

// ==================== Keyword Groups ====================

#[test]
fn test_create_keyword_group() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, r#"{"id":88}"#);
    let created = ctx
        .client
        .create_keyword_group(&NewKeywordGroup::new("Brand", "42"))
        .expect("create group");

    assert_eq!(ctx.transport.only_request().method, Method::Post);
    assert_eq!(ctx.sent_path(), "keyword-groups");
    assert_eq!(ctx.sent_json(), json!({"name": "Brand", "site_id": "42"}));
    assert_eq!(created.id, "88");
}

#[test]
fn test_keyword_group_accepts_single_object() {
    let ctx = TestContext::new();
    ctx.transport.reply_json(200, r#"{"id":88,"name":"Brand"}"#);
    let groups = ctx.client.keyword_group("88").expect("keyword group");

    assert_eq!(ctx.sent_path(), "keyword-groups/88");
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name.as_deref(), Some("Brand"));
}

#[test]
fn test_keyword_group_accepts_list() {
    let ctx = TestContext::new();
    ctx.transport
        .reply_json(200, r#"[{"id":1,"name":"A"},{"id":"2","name":"B"}]"#);
    let groups = ctx.client.keyword_group("42").expect("keyword groups");

    let ids: Vec<&str> = groups.iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_move_keywords_to_group() {
    let ctx = TestContext::new();
    ctx.client
        .move_keywords_to_group("88", &["5", "6"])
        .expect("move keywords");

    assert_eq!(ctx.transport.only_request().method, Method::Post);
    assert_eq!(ctx.sent_path(), "keyword-groups/88/keywords");
    assert_eq!(ctx.sent_json(), json!({"keywords_ids": ["5", "6"]}));
}
